/// User preferences, persisted in chrome.storage.sync
use serde::{Deserialize, Serialize};

/// Storage key shared with the options page
pub const OPEN_IN_NEW_TAB_KEY: &str = "openInNewTab";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub open_in_new_tab: bool,
}

impl Settings {
    pub fn new(open_in_new_tab: bool) -> Self {
        Settings { open_in_new_tab }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_tab() {
        assert!(!Settings::default().open_in_new_tab);
    }

    #[test]
    fn test_storage_key_matches_field_name() {
        let json = serde_json::to_value(Settings::new(true)).unwrap();

        assert_eq!(json.get(OPEN_IN_NEW_TAB_KEY), Some(&serde_json::Value::Bool(true)));
    }

    #[test]
    fn test_missing_key_uses_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{"openInNewTab": true, "theme": "dark"}"#).unwrap();

        assert!(settings.open_in_new_tab);
    }
}
