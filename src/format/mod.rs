//! Output formatters
//!
//! Provides trait-based output formatting for sampling results.

pub mod json;
pub mod text;
pub mod url;

use crate::config::Config;
use crate::error::Result;
use crate::sample::SampleRun;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the sampling run
    ///
    /// # Arguments
    /// * `run` - The sampling run to format
    /// * `config` - Application config (for url providers, etc.)
    fn format(&self, run: &SampleRun, config: &Config) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "text" => Some(Box::new(text::TextFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        "json" => Some(Box::new(json::JsonFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "One country and coordinate pair per line".to_string(),
        },
        FormatInfo {
            name: "url".to_string(),
            description: "One map link per sampled point".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "JSON array of sampled records".to_string(),
        },
    ]
}
