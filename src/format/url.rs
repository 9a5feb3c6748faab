//! URL output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::sample::SampleRun;

/// URL formatter - one map link per sampled point
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format links with an optional provider override
    pub fn format_with_provider(
        &self,
        run: &SampleRun,
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        let mut output = String::new();
        for record in &run.records {
            let link = config.format_url(provider, record.latitude, record.longitude)?;
            output.push_str(&link);
            output.push('\n');
        }
        Ok(output)
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "One map link per sampled point"
    }

    fn format(&self, run: &SampleRun, config: &Config) -> Result<String> {
        self.format_with_provider(run, config, None)
    }
}
