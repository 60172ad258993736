use std::fmt;

pub const TOKEN_VAR: &str = "CF_Token";
pub const ZONE_VAR: &str = "ZONE_ID";
pub const DOMAIN_VAR: &str = "DOMAIN";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_token: String,
    pub zone_id: String,
    pub domain: String,
}

// Keep the token out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<REDACTED>")
            .field("zone_id", &self.zone_id)
            .field("domain", &self.domain)
            .finish()
    }
}
