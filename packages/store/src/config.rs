//! # Site configuration — `site.toml`
//!
//! ```toml
//! [site]
//! title = "Greenkeeper"
//!
//! [popup]
//! container_id = "popupDiv"   # id of the popup container element
//! trigger_id = "popupBtn"     # id of the button that opens it
//! close_class = "closeBtn"    # class of the close control (first match is used)
//! ```
//!
//! All structs derive `Default` so that a missing or empty file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub popup: PopupConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    /// Shown in the navbar and the document title.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Greenkeeper".to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Identifiers of the three elements a popup is wired to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopupConfig {
    #[serde(default = "default_container_id")]
    pub container_id: String,
    #[serde(default = "default_trigger_id")]
    pub trigger_id: String,
    #[serde(default = "default_close_class")]
    pub close_class: String,
}

fn default_container_id() -> String {
    "popupDiv".to_string()
}

fn default_trigger_id() -> String {
    "popupBtn".to_string()
}

fn default_close_class() -> String {
    "closeBtn".to_string()
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            trigger_id: default_trigger_id(),
            close_class: default_close_class(),
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.popup.container_id, "popupDiv");
        assert_eq!(config.popup.trigger_id, "popupBtn");
        assert_eq!(config.popup.close_class, "closeBtn");
        assert_eq!(config.site.title, "Greenkeeper");
    }

    #[test]
    fn test_partial_popup_section() {
        let config = SiteConfig::from_toml("[popup]\ncontainer_id = \"contact\"\n").unwrap();
        assert_eq!(config.popup.container_id, "contact");
        assert_eq!(config.popup.trigger_id, "popupBtn");
        assert_eq!(config.site, SiteSection::default());
    }

    #[test]
    fn test_to_toml_parses_back() {
        let mut config = SiteConfig::default();
        config.site.title = "Hedges & Co".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(SiteConfig::from_toml("[popup]\ncontainer_id = 3\n").is_err());
    }
}
