//! HTTP transport for catalog lookups

use crate::error::Result;

/// Raw answer to a catalog request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogResponse {
    pub status: u16,
    pub body: String,
}

impl CatalogResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking GET used by the resolver.
///
/// Non-success statuses are returned as responses, not errors; only
/// failures to get any answer at all are errors.
pub trait CatalogTransport {
    fn get(&self, url: &str) -> Result<CatalogResponse>;
}

impl<T: CatalogTransport + ?Sized> CatalogTransport for &T {
    fn get(&self, url: &str) -> Result<CatalogResponse> {
        (**self).get(url)
    }
}

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "http")]
mod http {
    use tracing::debug;

    use super::{CatalogResponse, CatalogTransport};
    use crate::config::ExportConfig;
    use crate::error::{Error, Result};

    /// `ureq` agent shared by every request of a run
    pub struct HttpTransport {
        agent: ureq::Agent,
        user_agent: String,
    }

    impl HttpTransport {
        pub fn new(config: &ExportConfig) -> Self {
            let agent_config = ureq::Agent::config_builder()
                .timeout_global(Some(config.request_timeout))
                .http_status_as_error(false)
                .build();
            let agent: ureq::Agent = agent_config.into();

            Self {
                agent,
                user_agent: config.user_agent.clone(),
            }
        }
    }

    impl CatalogTransport for HttpTransport {
        fn get(&self, url: &str) -> Result<CatalogResponse> {
            let request_error = |message: String| Error::CatalogRequest {
                url: url.to_string(),
                status: None,
                message,
            };

            let mut response = self
                .agent
                .get(url)
                .header("User-Agent", &self.user_agent)
                .header("Accept", "application/json")
                .call()
                .map_err(|e| request_error(e.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| request_error(format!("failed to read response body: {}", e)))?;

            debug!("GET {} -> {} ({} bytes)", url, status, body.len());
            Ok(CatalogResponse { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(CatalogResponse::ok("{}").is_success());
        let not_found = CatalogResponse {
            status: 404,
            body: String::new(),
        };
        assert!(!not_found.is_success());
        let server_error = CatalogResponse {
            status: 502,
            body: String::new(),
        };
        assert!(!server_error.is_success());
    }
}
