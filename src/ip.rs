use crate::error::Result;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_IP_URL: &str = "http://ipv4.icanhazip.com";

// Shape only, octets are not range checked. ASCII digits only.
static IPV4_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").unwrap()
});

pub fn is_ipv4_shape(value: &str) -> bool {
    IPV4_SHAPE.is_match(value)
}

/// Asks a plain-text echo service for our public IPv4 address.
pub struct IpResolver {
    client: reqwest::Client,
    url: String,
}

impl IpResolver {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_IP_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Returns the trimmed response body. The status code is not checked;
    /// callers validate the shape before using it.
    pub async fn current_ip(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await?;
        debug!("IP echo responded with {}", response.status());

        let text = response.text().await?;
        Ok(text.trim().to_string())
    }
}

impl Default for IpResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_ipv4_shape() {
        assert!(is_ipv4_shape("203.0.113.9"));
        assert!(is_ipv4_shape("1.1.1.1"));
        // digit count only
        assert!(is_ipv4_shape("999.999.999.999"));

        assert!(!is_ipv4_shape(""));
        assert!(!is_ipv4_shape("1.1.1"));
        assert!(!is_ipv4_shape("1.1.1.1.1"));
        assert!(!is_ipv4_shape("1234.1.1.1"));
        assert!(!is_ipv4_shape(" 1.1.1.1"));
        assert!(!is_ipv4_shape("2001:db8::1"));
        assert!(!is_ipv4_shape("<html>error</html>"));
        // non-ASCII decimal digits
        assert!(!is_ipv4_shape("١٢٣.٤.٥.٦"));
        assert!(!is_ipv4_shape("１.２.３.４"));
    }

    #[tokio::test]
    async fn test_current_ip_is_trimmed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  203.0.113.9\n"))
            .expect(1)
            .mount(&server)
            .await;

        let resolver = IpResolver::with_url(server.uri());
        assert_eq!(resolver.current_ip().await.unwrap(), "203.0.113.9");
    }

    #[tokio::test]
    async fn test_current_ip_ignores_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>error</html>"))
            .mount(&server)
            .await;

        let resolver = IpResolver::with_url(server.uri());
        let ip = resolver.current_ip().await.unwrap();
        assert_eq!(ip, "<html>error</html>");
        assert!(!is_ipv4_shape(&ip));
    }

    #[tokio::test]
    async fn test_current_ip_transport_error() {
        // Nothing listens on the discard port.
        let resolver = IpResolver::with_url("http://127.0.0.1:9");
        assert!(resolver.current_ip().await.is_err());
    }
}
