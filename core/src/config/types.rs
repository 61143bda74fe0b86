//! Router configuration types for Beankeeper core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// How the viewport moves when the router asks for a scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Jump immediately
    Auto,
    /// Animate towards the target
    #[default]
    Smooth,
}

impl ScrollBehavior {
    /// Get the behavior name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Auto => "auto",
            ScrollBehavior::Smooth => "smooth",
        }
    }
}

/// Attribute and class names used to discover pages and triggers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Marker class carried by every page element
    pub page_class: String,
    /// Marker class carried by every navigation trigger
    pub nav_class: String,
    /// Attribute holding the page key on both pages and triggers
    pub key_attribute: String,
    /// Class toggled on the trigger of the visible page
    pub active_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            page_class: "page".to_string(),
            nav_class: "nav-item".to_string(),
            key_attribute: "data-page".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// A fully resolved router configuration ready for use by core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
    /// Element selectors
    pub selectors: Selectors,
    /// Page shown when the application starts
    pub default_page: String,
    /// Scroll behavior requested after every successful navigation
    pub scroll_behavior: ScrollBehavior,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            default_page: "home".to_string(),
            scroll_behavior: ScrollBehavior::default(),
        }
    }
}

impl RouterSettings {
    /// Set the default page
    pub fn with_default_page(mut self, key: impl Into<String>) -> Self {
        self.default_page = key.into();
        self
    }

    /// Set the scroll behavior
    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "default_page".to_string(),
            });
        }

        let classes = [
            ("selectors.page_class", &self.selectors.page_class),
            ("selectors.nav_class", &self.selectors.nav_class),
            ("selectors.active_class", &self.selectors.active_class),
        ];
        for (field, value) in classes {
            // A class list is whitespace separated, so a class name can't contain any
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }

        let attribute = &self.selectors.key_attribute;
        if attribute.is_empty() || attribute.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "selectors.key_attribute".to_string(),
                value: attribute.clone(),
            });
        }

        Ok(())
    }
}
