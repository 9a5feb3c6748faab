//! terrapoint: Random Coordinates Inside Country Boundaries
//!
//! A library and CLI tool for sampling uniformly random latitude/longitude
//! points constrained to lie within the polygon boundary of one or more
//! named countries, using a bundled administrative-boundary dataset.
//!
//! ## Features
//!
//! - Bundled GeoJSON country outlines (Natural Earth naming)
//! - Bounded rejection sampling with area-weighted multi-part handling
//! - Country selection by name, list file, or random ("lucky") pick
//! - Text, map-link, and JSON output
//!
//! ## Quick Start
//!
//! ```rust
//! use terrapoint::atlas::Atlas;
//! use terrapoint::sample;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let atlas = Atlas::bundled().unwrap();
//! let france = atlas.lookup("France").unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let point = sample::point_in_country(france, 10_000, &mut rng).unwrap();
//! println!("Random point in France: {}, {}", point.latitude, point.longitude);
//! ```

pub mod atlas;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod sample;
pub mod select;

// Re-export commonly used types
pub use atlas::{Atlas, Country};
pub use config::Config;
pub use error::{Error, Result};
pub use sample::{SamplePoint, SampleRecord, SampleRequest, SampleRun};
