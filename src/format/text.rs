//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::sample::SampleRun;

/// Text formatter - one country and coordinate pair per line
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "One country and coordinate pair per line"
    }

    fn format(&self, run: &SampleRun, _config: &Config) -> Result<String> {
        let mut output = String::new();
        for record in &run.records {
            output.push_str(&format!(
                "{}: {}, {}\n",
                record.country, record.latitude, record.longitude
            ));
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::test_fixtures::sample_run;

    #[test]
    fn test_text_format() {
        let formatter = TextFormatter;
        let run = sample_run();
        let config = Config::default();

        let output = formatter.format(&run, &config).unwrap();

        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("France: 46.6219, 2.4294"));
        assert!(output.contains("Japan: 36.2048, 138.2529"));
    }

    #[test]
    fn test_text_format_empty_run() {
        let formatter = TextFormatter;
        let mut run = sample_run();
        run.records.clear();
        let config = Config::default();

        let output = formatter.format(&run, &config).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_text_formatter_info() {
        let formatter = TextFormatter;
        assert_eq!(formatter.name(), "text");
        assert!(!formatter.description().is_empty());
    }
}
