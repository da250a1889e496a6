//! Tool definitions and dispatch.
//!
//! Each tool pairs a schemars-described request type with a handler.
//! [`PalTools`] owns nothing but a borrowed host and the browser settings, so
//! every call sees the live set as it is right now.

pub mod args;
pub mod load_item;
pub mod read_browser;

pub use load_item::{load_item, LoadItemRequest, LoadItemResponse};
pub use read_browser::{read_browser, ReadBrowserRequest, ReadBrowserResponse};

use lom::LiveApi;
use palconf::BrowserSettings;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::BrowserError;

pub const READ_BROWSER: &str = "ppal-read-browser";
pub const LOAD_ITEM: &str = "ppal-load-item";

/// A handler's typed result plus any non-fatal warnings it raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub value: T,
    pub warnings: Vec<String>,
}

/// Tool behaviour hints for callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    /// The tool doesn't modify the live set.
    pub read_only_hint: bool,

    /// The tool may remove or overwrite existing content.
    pub destructive_hint: bool,
}

/// Tool metadata for discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDef {
    pub name: String,
    pub title: String,
    pub description: String,
    pub input_schema: Value,
    pub annotations: ToolAnnotations,
}

/// Successful tool output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Human-readable summary of what the tool did
    pub text: String,
    /// Structured result, camelCase keys
    pub data: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ToolOutput {
    fn from_outcome<T: Serialize>(text: String, outcome: Outcome<T>) -> Result<Self, ToolError> {
        let data = serde_json::to_value(outcome.value)
            .map_err(|e| ToolError::Internal(format!("failed to serialize result: {}", e)))?;
        Ok(Self {
            text,
            data,
            warnings: outcome.warnings,
        })
    }
}

/// Tool call failures.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidArguments { .. } => "invalid_arguments",
            Self::Browser(e) => e.code(),
            Self::Internal(_) => "internal",
        }
    }

    /// `{ "code", "message" }` for the caller.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "code": self.code(),
            "message": self.to_string(),
        })
    }
}

pub type ToolResult = Result<ToolOutput, ToolError>;

/// Generate a draft-07 JSON schema with subschemas inlined.
pub fn schema_for<T: JsonSchema>() -> Value {
    let settings = schemars::generate::SchemaSettings::draft07().with(|s| {
        s.inline_subschemas = true;
    });
    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    serde_json::to_value(schema).unwrap_or_default()
}

/// Every tool this crate exposes.
pub fn list_tools() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: READ_BROWSER.to_string(),
            title: "Read Browser".to_string(),
            description: "List items from Ableton browser (library, presets, samples)".to_string(),
            input_schema: schema_for::<ReadBrowserRequest>(),
            annotations: ToolAnnotations {
                read_only_hint: true,
                destructive_hint: false,
            },
        },
        ToolDef {
            name: LOAD_ITEM.to_string(),
            title: "Load Item".to_string(),
            description: "Load browser item (preset, sample, device) into Live set".to_string(),
            input_schema: schema_for::<LoadItemRequest>(),
            annotations: ToolAnnotations {
                read_only_hint: false,
                destructive_hint: false,
            },
        },
    ]
}

/// Dispatches tool calls against an injected host.
pub struct PalTools<'h, H: LiveApi + ?Sized> {
    host: &'h H,
    settings: BrowserSettings,
}

impl<'h, H: LiveApi + ?Sized> PalTools<'h, H> {
    pub fn new(host: &'h H, settings: BrowserSettings) -> Self {
        Self { host, settings }
    }

    pub fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    pub fn list_tools(&self) -> Vec<ToolDef> {
        list_tools()
    }

    /// Decode `arguments` for tool `name` and run it.
    pub fn call_tool(&self, name: &str, arguments: Value) -> ToolResult {
        match name {
            READ_BROWSER => {
                let request: ReadBrowserRequest = decode(name, arguments)?;
                if let Some(depth) = request.max_depth {
                    if depth > palconf::MAX_DEPTH_LIMIT {
                        return Err(ToolError::InvalidArguments {
                            tool: name.to_string(),
                            message: format!(
                                "maxDepth must be between 0 and {}, got {}",
                                palconf::MAX_DEPTH_LIMIT,
                                depth
                            ),
                        });
                    }
                }
                let outcome = read_browser(self.host, &self.settings, request)?;
                let text = format!(
                    "{} items in {}{}",
                    outcome.value.items.iter().map(|i| i.count()).sum::<usize>(),
                    outcome.value.category,
                    if outcome.value.limit_reached { " (limit reached)" } else { "" }
                );
                ToolOutput::from_outcome(text, outcome)
            }
            LOAD_ITEM => {
                let request: LoadItemRequest = decode(name, arguments)?;
                let outcome = load_item(self.host, request)?;
                let text = outcome.value.message.clone();
                ToolOutput::from_outcome(text, outcome)
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}

fn decode<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}
