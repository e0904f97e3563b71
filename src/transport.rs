//! Blocking HTTP transport for the AirCon service.
//!
//! A one-method seam over `reqwest::blocking` so bridge logic can be
//! exercised against a scripted transport in tests. Production code always
//! goes through [`ReqwestTransport`].

use std::time::Duration;

use crate::error::Result;

/// A raw HTTP reply: status code plus body text.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// Whether the reply carries the one status the AirCon API treats as
    /// success.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Blocking GET transport.
///
/// Every call blocks the invoking thread for up to `timeout`; there is no
/// cancellation beyond that.
pub trait Transport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpReply>;
}

/// [`Transport`] backed by a shared `reqwest::blocking::Client`.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build the transport with a default client.
    ///
    /// # Errors
    /// Returns `Transport` if the underlying TLS/connector setup fails.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpReply> {
        let response = self.client.get(url).timeout(timeout).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_is_ok() {
        let reply = HttpReply {
            status: 200,
            body: String::new(),
        };
        assert!(reply.is_ok());

        let reply = HttpReply {
            status: 503,
            body: String::new(),
        };
        assert!(!reply.is_ok());
    }
}
