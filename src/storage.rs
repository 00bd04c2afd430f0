//! Browser Local Storage
//!
//! Ephemeral key-value persistence for the two non-secret configuration
//! fields and the API base URL override. Values are only ever cleared by
//! overwrite, never deleted.

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

const API_URL_KEY: &str = "consultabot_api_url";
const SID_KEY: &str = "twilio_sid";
const NUMBER_KEY: &str = "whatsapp_number";

/// Locally persisted configuration fields. The auth token is never stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocalConfig {
    pub twilio_sid: String,
    pub whatsapp_number: String,
}

impl LocalConfig {
    /// Merge values read back from storage; missing keys become empty
    /// fields rather than errors.
    pub fn from_stored(sid: Option<String>, number: Option<String>) -> Self {
        Self {
            twilio_sid: sid.unwrap_or_default(),
            whatsapp_number: number.unwrap_or_default(),
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Get the API base URL from local storage or use the default
pub fn api_base() -> String {
    get_item(API_URL_KEY)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    set_item(API_URL_KEY, url);
}

/// Read the locally saved configuration fields.
pub fn load_local_config() -> LocalConfig {
    LocalConfig::from_stored(get_item(SID_KEY), get_item(NUMBER_KEY))
}

/// Persist the two non-secret configuration fields.
pub fn save_local_config(config: &LocalConfig) {
    set_item(SID_KEY, &config.twilio_sid);
    set_item(NUMBER_KEY, &config.whatsapp_number);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_fallback_fills_missing_fields_with_empty_strings() {
        let config = LocalConfig::from_stored(Some("AC123".to_string()), None);
        assert_eq!(config.twilio_sid, "AC123");
        assert_eq!(config.whatsapp_number, "");

        assert_eq!(LocalConfig::from_stored(None, None), LocalConfig::default());
    }
}
