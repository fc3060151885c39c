use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "user";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserKind {
    Employee,
    Admin,
}

/// Identity written by the login flow and read back at every protected view
/// entry. Stored JSON-serialized in browser local storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub kind: UserKind,
    #[serde(default)]
    pub email: Option<String>,
}

/// Read the stored session, tolerating an absent or unparseable entry.
pub fn load() -> Option<Session> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}
