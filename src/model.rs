use serde::{Deserialize, Serialize};

/// Bill record exactly as the remote store returns it. Everything except
/// `id` routinely arrives missing or malformed, so deserialization must
/// accept whatever the backend kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawBill {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<RawAmount>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "fileUrl", default)]
    pub file_url: Option<String>,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub commentary: Option<String>,
}

/// The store keeps amounts either as numbers or as strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

/// Display-ready projection of a bill. `raw_date` keeps the original ISO
/// string as the chronological sort key; `date_malformed` marks records
/// whose date failed validation but are still listed.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayBill {
    pub id: String,
    pub kind: String,
    pub name: String,
    pub date: String,
    pub raw_date: String,
    pub amount: String,
    pub status: String,
    pub file_url: Option<String>,
    pub date_malformed: bool,
}
