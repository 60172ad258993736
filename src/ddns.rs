use crate::api::{CloudflareClient, DnsApiClient};
use crate::config::Config;
use crate::error::{DdnsError, Result};
use crate::ip::{is_ipv4_shape, IpResolver};
use log::info;

/// Both addresses, validated, plus the record to patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub current_ip: String,
    pub record_id: String,
    pub record_ip: String,
}

impl Resolved {
    pub fn needs_update(&self) -> bool {
        self.current_ip != self.record_ip
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged {
        ip: String,
    },
    Updated {
        previous: String,
        current: String,
        /// Raw body of the update call.
        response: String,
    },
}

pub struct Ddns<C> {
    config: Config,
    client: C,
    resolver: IpResolver,
}

impl Ddns<CloudflareClient> {
    pub fn new(config: Config) -> Self {
        let client = CloudflareClient::new(config.api_token.clone());
        Self::with_parts(config, client, IpResolver::new())
    }
}

impl<C: DnsApiClient> Ddns<C> {
    pub fn with_parts(config: Config, client: C, resolver: IpResolver) -> Self {
        Self {
            config,
            client,
            resolver,
        }
    }

    /// Fetches the current IP and the record, then validates both. Never
    /// writes anything.
    pub async fn resolve(&self) -> Result<Resolved> {
        let current_ip = self.resolver.current_ip().await?;
        let record = self
            .client
            .find_record(&self.config.zone_id, &self.config.domain)
            .await?;

        if !is_ipv4_shape(&current_ip) {
            return Err(DdnsError::InvalidIp {
                what: "current IP",
                value: current_ip,
            });
        }
        let record =
            record.ok_or_else(|| DdnsError::RecordNotFound(self.config.domain.clone()))?;
        if !is_ipv4_shape(&record.content) {
            return Err(DdnsError::InvalidIp {
                what: "record IP",
                value: record.content,
            });
        }

        info!("Current IP: {}", current_ip);
        info!("Record IP: {}", record.content);

        Ok(Resolved {
            current_ip,
            record_id: record.id,
            record_ip: record.content,
        })
    }

    /// Patches the record only if the addresses differ.
    pub async fn apply(&self, resolved: Resolved) -> Result<Outcome> {
        if !resolved.needs_update() {
            info!("Record already up to date");
            return Ok(Outcome::Unchanged {
                ip: resolved.current_ip,
            });
        }

        info!(
            "Updating {} from {} to {}",
            self.config.domain, resolved.record_ip, resolved.current_ip
        );
        let response = self
            .client
            .update_record(
                &self.config.zone_id,
                &resolved.record_id,
                &self.config.domain,
                &resolved.current_ip,
            )
            .await?;
        info!("Record updated successfully");

        Ok(Outcome::Updated {
            previous: resolved.record_ip,
            current: resolved.current_ip,
            response,
        })
    }

    /// One full pass. Nothing is written unless every check passed.
    pub async fn run_once(&self) -> Result<Outcome> {
        let resolved = self.resolve().await?;
        self.apply(resolved).await
    }
}
