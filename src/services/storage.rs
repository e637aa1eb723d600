use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped in each path segment of a public object URL.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Builds `{base}/{bucket}/{key}` with each key segment percent-encoded.
pub fn public_object_url(base_url: &str, bucket: &str, key: &str) -> String {
    let encoded: Vec<String> = key
        .split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect();
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        bucket,
        encoded.join("/")
    )
}

#[async_trait]
pub trait StorageService: Send + Sync {
    async fn upload_file(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<()>;
    async fn delete_file(&self, key: &str) -> Result<()>;
    async fn file_exists(&self, key: &str) -> Result<bool>;
    /// Public, unauthenticated link to the object.
    fn public_url(&self, key: &str) -> String;
}

pub struct S3StorageService {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3StorageService {
    pub fn new(client: Client, bucket: String, public_base_url: String) -> Self {
        Self {
            client,
            bucket,
            public_base_url,
        }
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn upload_file(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await?;
        Ok(())
    }

    async fn delete_file(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await?;
        Ok(())
    }

    async fn file_exists(&self, key: &str) -> Result<bool> {
        let res = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        match res {
            Ok(_) => Ok(true),
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_not_found() {
                    Ok(false)
                } else {
                    Err(anyhow::anyhow!(service_error))
                }
            }
        }
    }

    fn public_url(&self, key: &str) -> String {
        public_object_url(&self.public_base_url, &self.bucket, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_object_url_encodes_segments() {
        assert_eq!(
            public_object_url("http://cdn.local/", "documents", "1700_My_Doc.pdf"),
            "http://cdn.local/documents/1700_My_Doc.pdf"
        );
        assert_eq!(
            public_object_url("http://cdn.local", "documents", "1700_Prüfung #1.pdf"),
            "http://cdn.local/documents/1700_Pr%C3%BCfung%20%231.pdf"
        );
    }
}
