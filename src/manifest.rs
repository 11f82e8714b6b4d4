//! Plugin registration and `plugin.json`
//!
//! The host framework identifies the plugin through [`PluginRegistration`]
//! and wires its UI component and HTTP endpoint from the manifest document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable plugin identifier
pub const PLUGIN_ID: &str = "customLogLevels";

/// Display name shown by the host
pub const PLUGIN_NAME: &str = "Custom Log Levels";

/// Plugin version
pub const PLUGIN_VERSION: &str = "1.0.0";

/// Minimum host platform version
pub const MIN_PLATFORM_VERSION: &str = ">=5.0.0";

/// Namespace all plugin endpoints live under
pub const API_NAMESPACE: &str = "/plugin/customLogLevels";

/// Name of the UI extension point the slider plugs into
pub const SLIDER_COMPONENT: &str = "logLevelSlider";

const HTTP_METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

/// Errors found while validating a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Document is not valid JSON for a manifest
    #[error("invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// Manifest declares a different plugin
    #[error("plugin id mismatch: expected {expected}, found {found}")]
    IdMismatch {
        /// The id this plugin registers under
        expected: String,
        /// The id in the manifest
        found: String,
    },

    /// Endpoint path outside the plugin namespace
    #[error("endpoint {0} is outside /plugin/customLogLevels")]
    ForeignEndpoint(String),

    /// Endpoint method is not an HTTP verb
    #[error("endpoint {path} has unknown method {method}")]
    UnknownMethod {
        /// Endpoint path
        path: String,
        /// Declared method
        method: String,
    },
}

/// Identity the plugin registers with on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginRegistration {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Semantic version
    pub version: &'static str,
    /// Short description
    pub description: &'static str,
    /// Minimum host platform version
    pub min_platform_version: &'static str,
}

impl PluginRegistration {
    /// The registration for this plugin
    #[must_use]
    pub const fn current() -> Self {
        Self {
            id: PLUGIN_ID,
            name: PLUGIN_NAME,
            version: PLUGIN_VERSION,
            description: "Extended log level support with custom levels",
            min_platform_version: MIN_PLATFORM_VERSION,
        }
    }
}

/// The `plugin.json` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    /// Plugin id
    pub id: String,
    /// Display name
    pub name: String,
    /// Semantic version
    pub version: String,
    /// Description
    pub description: String,
    /// UI bundle entry point
    pub main: String,
    /// Author
    #[serde(default)]
    pub author: String,
    /// License identifier
    #[serde(default)]
    pub license: String,
    /// Minimum host platform version
    pub report_portal_version: String,
    /// Declared extensions
    #[serde(default)]
    pub extensions: Extensions,
}

/// UI and API extension points
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extensions {
    /// UI components
    #[serde(default)]
    pub ui: UiExtensions,
    /// HTTP endpoints
    #[serde(default)]
    pub api: ApiExtensions,
}

/// UI components keyed by extension point
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiExtensions {
    /// Extension point name to component module path
    #[serde(default)]
    pub components: BTreeMap<String, String>,
}

/// HTTP endpoints exposed by the plugin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiExtensions {
    /// Endpoint declarations
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// One HTTP endpoint declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Absolute path on the host
    pub path: String,
    /// HTTP method
    pub method: String,
    /// Backend handler name
    pub handler: String,
}

impl PluginManifest {
    /// The manifest shipped with this plugin
    #[must_use]
    pub fn current() -> Self {
        let mut components = BTreeMap::new();
        components.insert(
            SLIDER_COMPONENT.to_string(),
            "./src/components/LogLevelSlider/CustomLogLevelSlider".to_string(),
        );

        Self {
            id: PLUGIN_ID.to_string(),
            name: PLUGIN_NAME.to_string(),
            version: PLUGIN_VERSION.to_string(),
            description: "Extended log level support with additional custom levels".to_string(),
            main: "dist/index.js".to_string(),
            author: String::new(),
            license: "MIT".to_string(),
            report_portal_version: MIN_PLATFORM_VERSION.to_string(),
            extensions: Extensions {
                ui: UiExtensions { components },
                api: ApiExtensions {
                    endpoints: vec![Endpoint {
                        path: format!("{API_NAMESPACE}/levels"),
                        method: "GET".to_string(),
                        handler: "getSupportedLogLevels".to_string(),
                    }],
                },
            },
        }
    }

    /// Parse a manifest document
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the manifest belongs to this plugin and its endpoints are well formed
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.id != PLUGIN_ID {
            return Err(ManifestError::IdMismatch {
                expected: PLUGIN_ID.to_string(),
                found: self.id.clone(),
            });
        }

        let prefix = format!("{API_NAMESPACE}/");
        for endpoint in &self.extensions.api.endpoints {
            if !endpoint.path.starts_with(&prefix) {
                return Err(ManifestError::ForeignEndpoint(endpoint.path.clone()));
            }
            if !HTTP_METHODS.contains(&endpoint.method.to_uppercase().as_str()) {
                return Err(ManifestError::UnknownMethod {
                    path: endpoint.path.clone(),
                    method: endpoint.method.clone(),
                });
            }
        }
        Ok(())
    }
}
