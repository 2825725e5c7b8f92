//! Table configuration
//!
//! Settings shared by the DOM renderer and the standalone counts page.
//! Every field has a default so JavaScript may pass a partial object (or
//! nothing at all).

use serde::{Deserialize, Serialize};

/// Element id rendered into when no config overrides it
pub const DEFAULT_CONTAINER_ID: &str = "Needle-data";

/// Configuration for table rendering
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    /// Id of the element whose content is replaced on each render
    pub container_id: String,

    /// `<title>` of the standalone counts page
    pub page_title: String,

    /// Heading shown above the counts table
    pub heading: String,

    /// Meta-refresh interval in seconds (`None` or 0 disables auto-refresh)
    pub refresh_secs: Option<u32>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            page_title: "Needle Counts".to_string(),
            heading: "Detected Needle Counts".to_string(),
            refresh_secs: Some(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TableConfig =
            serde_json::from_str(r#"{"heading": "Tray 2"}"#).unwrap();

        assert_eq!(config.heading, "Tray 2");
        assert_eq!(config.container_id, "Needle-data");
        assert_eq!(config.refresh_secs, Some(1));
    }

    #[test]
    fn test_refresh_can_be_disabled() {
        let config: TableConfig =
            serde_json::from_str(r#"{"refresh_secs": null}"#).unwrap();
        assert_eq!(config.refresh_secs, None);
    }
}
