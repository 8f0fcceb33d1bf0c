use async_trait::async_trait;
use starmap_core::{Error, QueryParams, RawResponse, Result};

/// Issues a single GET and hands back status and body text.
///
/// Implementations report connection, timeout and body-read failures as
/// `Error::Transport`. Any HTTP status, 4xx and 5xx included, is a
/// successful exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        headers: &[(&'static str, String)],
        params: &QueryParams,
    ) -> Result<RawResponse>;
}

/// Transport backed by a `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a pre-configured client, e.g. one with timeouts or a proxy
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        headers: &[(&'static str, String)],
        params: &QueryParams,
    ) -> Result<RawResponse> {
        let mut request = self.client.get(url).query(params.as_slice());
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request.send().await.map_err(transport_error)?;
        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        Ok(RawResponse { status_code, body })
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}
