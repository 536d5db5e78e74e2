//! S3 and S3-compatible backend for the `ObjectStore` trait.

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client as S3Client;
use tracing::debug;

use super::{ObjectStore, StoreResponse};
use crate::config::SiloConfig;
use crate::object_key::ObjectKey;

/// Object store backend over the AWS SDK S3 client.
///
/// Region, endpoint override, and path-style addressing come from config;
/// credentials come from the environment's default provider chain.
pub struct S3Store {
    client: S3Client,
}

impl S3Store {
    pub async fn connect(config: &SiloConfig) -> Self {
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = S3ConfigBuilder::from(&aws_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        if config.force_path_style {
            builder = builder.force_path_style(true);
        }

        let client = S3Client::from_conf(builder.build());
        debug!(
            region = %config.region,
            endpoint = config.endpoint.as_deref().unwrap_or("default"),
            "S3 store client ready"
        );
        Self { client }
    }

    /// Folds an SDK error into the soft-error shape the fetch loop
    /// classifies. Dispatch and timeout failures carry no response metadata
    /// and map to `Unreachable`; service errors keep their HTTP status.
    fn convert_error(err: SdkError<GetObjectError>) -> StoreResponse {
        match &err {
            SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
                return StoreResponse::Unreachable;
            }
            _ => {}
        }

        let status = err.raw_response().map(|r| r.status().as_u16());
        let not_found = err
            .as_service_error()
            .map(GetObjectError::is_no_such_key)
            .unwrap_or(false)
            || status == Some(404);

        StoreResponse::Error {
            status: if not_found { Some(404) } else { status },
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get(&self, key: &ObjectKey) -> StoreResponse {
        let response = self
            .client
            .get_object()
            .bucket(&key.bucket)
            .key(&key.key)
            .send()
            .await;

        match response {
            Ok(output) => match output.body.collect().await {
                Ok(data) => StoreResponse::Body(data.into_bytes()),
                // Body stream broke mid-read; surface as a retryable error
                // rather than returning partial bytes.
                Err(e) => StoreResponse::Error {
                    status: None,
                    message: e.to_string(),
                },
            },
            Err(err) => Self::convert_error(err),
        }
    }
}
