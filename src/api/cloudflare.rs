use super::{client::DnsApiClient, models::*};
use crate::error::{DdnsError, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

pub const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

pub struct CloudflareClient {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn find_record(&self, zone_id: &str, domain: &str) -> Result<Option<DnsRecord>> {
        let response = self
            .client
            .get(format!("{}/zones/{}/dns_records", self.base_url, zone_id))
            .bearer_auth(&self.api_token)
            .headers(self.build_headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DdnsError::Status(status));
        }

        let text = response.text().await?;
        let parsed: RecordListResponse = serde_json::from_str(&text)
            .map_err(|source| DdnsError::Decode { body: text, source })?;

        if !parsed.success {
            warn!("Record list reported failure: {:?}", parsed.errors);
        }
        debug!(
            "Zone {} returned {} records",
            zone_id, parsed.result_info.count
        );

        Ok(parsed.into_record(domain))
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        domain: &str,
        ip: &str,
    ) -> Result<String> {
        let response = self
            .client
            .patch(format!(
                "{}/zones/{}/dns_records/{}",
                self.base_url, zone_id, record_id
            ))
            .bearer_auth(&self.api_token)
            .headers(self.build_headers())
            .json(&RecordUpdate::a_record(domain, ip))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DdnsError::Status(status));
        }

        Ok(response.text().await?)
    }
}

impl CloudflareClient {
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, API_BASE_URL)
    }

    pub fn with_base_url(api_token: String, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}
