//! Widget settings. The host page may embed overrides as JSON in
//! `<script type="application/json" id="review-widget-config">`.
use crate::error::ConfigError;
use leptos::logging::{log, warn};
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "review-widget-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// localStorage key holding the reviews array.
    pub storage_key: String,
    /// Product named in the page title and the empty-store message.
    pub product_name: String,
    /// How long a new review keeps its highlight, in milliseconds.
    pub highlight_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: "reviews".to_string(),
            product_name: "Modern Gadget Pro".to_string(),
            highlight_ms: 500,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the embedded config element, falling back to defaults when it
    /// is missing or invalid.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match raw {
            None => Self::default(),
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => {
                    log!("[CONFIG] Loaded widget config for {}", config.product_name);
                    config
                }
                Err(err) => {
                    warn!("[CONFIG] {}; using defaults", err);
                    Self::default()
                }
            },
        }
    }
}
