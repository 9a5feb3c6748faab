//! JSON output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::sample::SampleRun;

/// JSON formatter - outputs the sampled records as a pretty-printed array
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON array of sampled records"
    }

    fn format(&self, run: &SampleRun, _config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(&run.records)?)
    }
}
