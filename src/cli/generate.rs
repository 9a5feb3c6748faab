//! Generate command handler
//!
//! Samples random points inside the requested countries.

use crate::atlas::Atlas;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::url::UrlFormatter;
use crate::format::{available_formats, get_formatter};
use crate::sample::{self, SampleRecord, SampleRequest, SampleRun};
use crate::select;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Country names, or .txt files listing one name per line
    pub input: Vec<String>,

    /// Number of points per country
    #[arg(long, short = 'n')]
    pub points: Option<usize>,

    /// Pick one random country, ignoring INPUT
    #[arg(long, short = 'l')]
    pub lucky: bool,

    /// Print a map link for each point to stderr
    #[arg(long, short = 's')]
    pub links: bool,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Map URL provider for links
    #[arg(long)]
    pub provider: Option<String>,

    /// Write records as a JSON array to this file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;
    let atlas = Atlas::bundled()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let targets = select::resolve(&args.input, args.lucky, &atlas, &mut rng)?;
    let points_per_country = args.points.unwrap_or(config.defaults.points);

    let (run, unknown) = collect_samples(
        &atlas,
        targets,
        points_per_country,
        config.sampler.max_attempts,
        &mut rng,
    );

    let format = args
        .format
        .unwrap_or_else(|| config.defaults.format.clone());
    let rendered = render(&run, &config, &format, args.provider.as_deref())?;
    if !rendered.is_empty() {
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
    }

    if args.links || config.defaults.links {
        for record in &run.records {
            let link =
                config.format_url(args.provider.as_deref(), record.latitude, record.longitude)?;
            eprintln!("{}", link);
        }
    }

    // Console output above survives even when the file write fails.
    if let Some(path) = &args.output {
        write_records(path, &run.records)?;
        eprintln!("Saved {} records to {}", run.records.len(), path.display());
    }

    if !unknown.is_empty() {
        return Err(Error::UnknownCountry(unknown.join(", ")));
    }

    Ok(())
}

/// Sample every requested country, collecting unknown names instead of
/// aborting the rest of the request
fn collect_samples<R: Rng + ?Sized>(
    atlas: &Atlas,
    targets: Vec<String>,
    points_per_country: usize,
    max_attempts: u32,
    rng: &mut R,
) -> (SampleRun, Vec<String>) {
    let mut records = Vec::new();
    let mut unknown = Vec::new();

    for name in &targets {
        let country = match atlas.lookup(name) {
            Ok(country) => country,
            Err(e) => {
                warn!("{}", e);
                unknown.push(name.clone());
                continue;
            }
        };

        for _ in 0..points_per_country {
            match sample::point_in_country(country, max_attempts, rng) {
                Ok(point) => records.push(SampleRecord {
                    country: country.name.clone(),
                    latitude: point.latitude,
                    longitude: point.longitude,
                }),
                Err(e) => {
                    // Degenerate geometry: report and skip this country's
                    // remaining points.
                    warn!("{}", e);
                    break;
                }
            }
        }
    }

    let run = SampleRun {
        request: SampleRequest {
            countries: targets,
            points_per_country,
        },
        records,
    };

    (run, unknown)
}

/// Render the run in the chosen format
///
/// The url format takes the provider override; everything else comes
/// from the formatter registry.
fn render(run: &SampleRun, config: &Config, format: &str, provider: Option<&str>) -> Result<String> {
    if format.eq_ignore_ascii_case("url") {
        return UrlFormatter.format_with_provider(run, config, provider);
    }

    let formatter =
        get_formatter(format).ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    formatter.format(run, config)
}

/// Write the records as a JSON array to a file
fn write_records(path: &Path, records: &[SampleRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(Error::OutputWrite)
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
