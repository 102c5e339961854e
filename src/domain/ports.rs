use crate::domain::model::RawResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
pub use reqwest::Method;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn auth_token(&self) -> Option<&str>;
}

/// Sends one request and hands back the status with the fully read body.
/// Connection-level failures surface as `ViewError::TransportFailure`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> Result<RawResponse>;
}

pub trait OutputSink {
    fn emit(&mut self, block: &str) -> Result<()>;
}
