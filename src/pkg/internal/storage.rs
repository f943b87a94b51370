use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::conf::settings;
use crate::prelude::{AppError, Result};

pub async fn build_client() -> Client {
    let creds = Credentials::new(
        settings.s3_access_key.clone(),
        settings.s3_secret_key.clone(),
        None,
        None,
        "alumni",
    );
    let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(settings.s3_region.clone()))
        .endpoint_url(&settings.s3_endpoint)
        .credentials_provider(creds)
        .load()
        .await;
    // path-style addressing keeps MinIO-compatible endpoints working
    let conf = aws_sdk_s3::config::Builder::from(&shared)
        .force_path_style(true)
        .build();
    Client::from_conf(conf)
}

pub async fn ensure_bucket(client: &Client, bucket_name: &str) -> Result<()> {
    let create = client.create_bucket().bucket(bucket_name).send().await;
    if let Err(err) = create {
        let already_there = err
            .as_service_error()
            .map(|se| se.is_bucket_already_exists() || se.is_bucket_already_owned_by_you())
            == Some(true);
        if !already_there {
            return Err(AppError::Storage(err.to_string()));
        }
    }
    Ok(())
}

pub trait S3Ops {
    async fn upload_object(&self, bucket: &str, key: &str, data: Vec<u8>, mime: &str)
        -> Result<()>;
    async fn retrieve_object(&self, bucket: &str, key: &str) -> Result<(Vec<u8>, String)>;
}

impl S3Ops for Client {
    async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        mime: &str,
    ) -> Result<()> {
        self.put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(mime)
            .send()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(())
    }

    async fn retrieve_object(&self, bucket: &str, key: &str) -> Result<(Vec<u8>, String)> {
        let resp = self
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        let content_type = resp
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?
            .into_bytes()
            .to_vec();
        Ok((data, content_type))
    }
}

/// Public URL of an object under path-style addressing.
pub fn object_url(key: &str) -> String {
    format!(
        "{}/{}/{}",
        settings.s3_endpoint.trim_end_matches('/'),
        settings.s3_bucket_name,
        key
    )
}
