use crate::core::{ConfigProvider, Method, RawResponse, Transport};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// reqwest-backed transport. Adds a bearer token when one is configured.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    auth_token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(auth_token: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("appctl/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            auth_token,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C, timeout: Option<Duration>) -> Result<Self> {
        Self::new(config.auth_token().map(str::to_string), timeout)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> Result<RawResponse> {
        let mut request = self.client.request(method, url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        // Drain the body so the connection is released on every path.
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
