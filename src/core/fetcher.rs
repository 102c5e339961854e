use crate::core::{Method, Transport};
use crate::utils::error::{Result, ViewError};

pub struct ResourceFetcher<T: Transport> {
    transport: T,
}

impl<T: Transport> ResourceFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One GET. Anything but 200 is reported as a likely invalid identifier,
    /// server errors included.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.transport.send(Method::GET, url, None).await?;

        tracing::debug!("API response status: {}", response.status);
        if response.status != 200 {
            return Err(ViewError::UnexpectedStatus {
                code: response.status,
            });
        }

        tracing::debug!("Read {} bytes of response body", response.body.len());
        Ok(response.body)
    }
}
