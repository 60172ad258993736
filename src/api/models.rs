use serde::{Deserialize, Deserializer, Serialize};

pub const RECORD_TYPE: &str = "A";
pub const RECORD_TTL: u32 = 3600;
pub const RECORD_PROXIED: bool = true;

/// One record as returned by the list endpoint. Only `id`, `name` and
/// `content` drive the update.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub r#type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub proxiable: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub proxied: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ttl: u32,
    #[serde(default)]
    pub settings: serde_json::Value,
    #[serde(default)]
    pub meta: serde_json::Value,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_on: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub modified_on: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u32,
}

#[derive(Debug, Deserialize)]
pub struct RecordListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: Vec<DnsRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub result_info: ResultInfo,
}

impl RecordListResponse {
    /// First record whose name matches, in provider order.
    pub fn into_record(self, domain: &str) -> Option<DnsRecord> {
        self.result.into_iter().find(|record| record.name == domain)
    }
}

/// PATCH body for the update endpoint.
#[derive(Debug, Serialize)]
pub struct RecordUpdate<'a> {
    pub r#type: &'static str,
    pub name: &'a str,
    pub content: &'a str,
    pub ttl: u32,
    pub proxied: bool,
}

impl<'a> RecordUpdate<'a> {
    pub fn a_record(name: &'a str, content: &'a str) -> Self {
        Self {
            r#type: RECORD_TYPE,
            name,
            content,
            ttl: RECORD_TTL,
            proxied: RECORD_PROXIED,
        }
    }
}

/// The API sends `null` for unset fields; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
