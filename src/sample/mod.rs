//! Point sampling inside country boundaries
//!
//! Draws uniformly distributed points inside a (possibly multi-part)
//! polygon by rejection sampling: draw a uniform point in the polygon's
//! bounding box, keep it if the containment test passes, redraw otherwise.
//!
//! For multi-part geometries one constituent polygon is first chosen with
//! probability proportional to its area, and the rejection loop runs
//! against that part's own bounding box. This keeps the distribution
//! uniform over the whole country while keeping the acceptance rate high
//! for far-flung island groups.
//!
//! The loop is bounded: a geometry whose area is negligible relative to
//! its bounding box exhausts the retry ceiling and fails with
//! `SamplingTimeout` instead of spinning forever.

use crate::atlas::Country;
use crate::constants::output::COORD_DECIMALS;
use crate::error::{Error, Result};
use geo::{Area, Contains, MultiPolygon, Point};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A sampled geographic coordinate, in floating-point degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One emitted result: a point and the country it was sampled from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolved inputs for one invocation
#[derive(Debug, Clone, Serialize)]
pub struct SampleRequest {
    /// Target country names, in resolution order
    pub countries: Vec<String>,
    /// Points drawn per country
    pub points_per_country: usize,
}

/// The full outcome of a sampling run, handed to output formatters
#[derive(Debug, Clone, Serialize)]
pub struct SampleRun {
    pub request: SampleRequest,
    pub records: Vec<SampleRecord>,
}

/// Draw one uniformly distributed point inside a country's boundary
///
/// Fails with `SamplingTimeout` once `max_attempts` candidate draws have
/// been rejected.
pub fn point_in_country<R: Rng + ?Sized>(
    country: &Country,
    max_attempts: u32,
    rng: &mut R,
) -> Result<SamplePoint> {
    let part_index = weighted_part(&country.geometry, rng)
        .ok_or_else(|| Error::Dataset(format!("{}: empty geometry", country.name)))?;
    let part = &country.geometry.0[part_index];
    let bbox = country.part_bbox(part_index);

    for _ in 0..max_attempts {
        let longitude = round_coord(rng.gen_range(bbox.min().x..=bbox.max().x));
        let latitude = round_coord(rng.gen_range(bbox.min().y..=bbox.max().y));

        // Containment is tested on the rounded candidate so the emitted
        // point itself satisfies the invariant, not just the raw draw.
        if part.contains(&Point::new(longitude, latitude)) {
            return Ok(SamplePoint {
                latitude,
                longitude,
            });
        }
    }

    Err(Error::SamplingTimeout {
        country: country.name.clone(),
        attempts: max_attempts,
    })
}

/// Draw `count` points inside a country's boundary
pub fn points_in_country<R: Rng + ?Sized>(
    country: &Country,
    count: usize,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Vec<SamplePoint>> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(point_in_country(country, max_attempts, rng)?);
    }
    Ok(points)
}

/// Choose the index of one constituent polygon, weighted by planar area
///
/// Returns `None` only for an empty multi-polygon. Zero-area geometries
/// fall back to the first part, which the rejection loop then rejects to
/// exhaustion.
fn weighted_part<R: Rng + ?Sized>(geometry: &MultiPolygon<f64>, rng: &mut R) -> Option<usize> {
    match geometry.0.len() {
        0 => None,
        1 => Some(0),
        _ => {
            let total: f64 = geometry.0.iter().map(|p| p.unsigned_area()).sum();
            if total <= 0.0 {
                return Some(0);
            }

            let mut remaining = rng.gen_range(0.0..total);
            for (i, part) in geometry.0.iter().enumerate() {
                remaining -= part.unsigned_area();
                if remaining <= 0.0 {
                    return Some(i);
                }
            }
            // Float accumulation can land just past the last part
            Some(geometry.0.len() - 1)
        }
    }
}

fn round_coord(value: f64) -> f64 {
    let scale = 10f64.powi(COORD_DECIMALS);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::Atlas;
    use approx::assert_relative_eq;
    use geo::{LineString, Polygon};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square(x0: f64, y0: f64, side: f64) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (x0, y0),
                (x0 + side, y0),
                (x0 + side, y0 + side),
                (x0, y0 + side),
                (x0, y0),
            ]),
            vec![],
        )
    }

    fn country_from(name: &str, geometry: MultiPolygon<f64>) -> Country {
        Country::new(name, geometry).unwrap()
    }

    #[test]
    fn test_three_points_in_france_are_contained() {
        let atlas = Atlas::bundled().unwrap();
        let france = atlas.lookup("France").unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let points = points_in_country(france, 3, 10_000, &mut rng).unwrap();

        assert_eq!(points.len(), 3);
        for point in points {
            assert!(
                france
                    .geometry
                    .contains(&Point::new(point.longitude, point.latitude)),
                "({}, {}) is outside France",
                point.latitude,
                point.longitude
            );
        }
    }

    #[test]
    fn test_multipart_country_points_are_contained() {
        let atlas = Atlas::bundled().unwrap();
        let japan = atlas.lookup("Japan").unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let points = points_in_country(japan, 200, 10_000, &mut rng).unwrap();

        let mut parts_hit = vec![false; japan.geometry.0.len()];
        for point in &points {
            let p = Point::new(point.longitude, point.latitude);
            assert!(japan.geometry.contains(&p));
            for (i, part) in japan.geometry.0.iter().enumerate() {
                if part.contains(&p) {
                    parts_hit[i] = true;
                }
            }
        }
        // 200 draws over a three-island geometry should reach more than
        // the largest island.
        assert!(parts_hit.iter().filter(|&&hit| hit).count() >= 2);
    }

    #[test]
    fn test_points_are_rounded_to_four_decimals() {
        let atlas = Atlas::bundled().unwrap();
        let brazil = atlas.lookup("Brazil").unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..10 {
            let point = point_in_country(brazil, 10_000, &mut rng).unwrap();
            let lat_scaled = point.latitude * 10_000.0;
            let lon_scaled = point.longitude * 10_000.0;
            assert!((lat_scaled - lat_scaled.round()).abs() < 1e-6);
            assert!((lon_scaled - lon_scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_uniformity_over_a_square() {
        let country = country_from("Square", MultiPolygon(vec![square(0.0, 0.0, 10.0)]));
        let mut rng = StdRng::seed_from_u64(12345);

        let points = points_in_country(&country, 2000, 10_000, &mut rng).unwrap();

        let mean_lat: f64 = points.iter().map(|p| p.latitude).sum::<f64>() / 2000.0;
        let mean_lon: f64 = points.iter().map(|p| p.longitude).sum::<f64>() / 2000.0;

        // Uniform over [0, 10] x [0, 10] has mean (5, 5)
        assert_relative_eq!(mean_lat, 5.0, epsilon = 0.3);
        assert_relative_eq!(mean_lon, 5.0, epsilon = 0.3);
    }

    #[test]
    fn test_area_weighting_across_parts() {
        // A 3x3 square and a distant 1x1 square: 90% of draws should land
        // in the larger part.
        let geometry = MultiPolygon(vec![square(0.0, 0.0, 3.0), square(10.0, 10.0, 1.0)]);
        let country = country_from("TwoSquares", geometry);
        let mut rng = StdRng::seed_from_u64(99);

        let points = points_in_country(&country, 1000, 10_000, &mut rng).unwrap();

        let in_large = points
            .iter()
            .filter(|p| {
                country.geometry.0[0].contains(&Point::new(p.longitude, p.latitude))
            })
            .count();

        assert!(
            (850..=950).contains(&in_large),
            "expected ~900 points in the larger part, got {}",
            in_large
        );
    }

    #[test]
    fn test_degenerate_geometry_times_out() {
        // Collinear ring: zero area inside a nonzero bounding box, so
        // every candidate draw is rejected.
        let sliver = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (0.0, 0.0)]),
            vec![],
        );
        let country = country_from("Sliver", MultiPolygon(vec![sliver]));
        let mut rng = StdRng::seed_from_u64(1);

        let err = point_in_country(&country, 50, &mut rng).unwrap_err();
        match err {
            Error::SamplingTimeout { country, attempts } => {
                assert_eq!(country, "Sliver");
                assert_eq!(attempts, 50);
            }
            other => panic!("expected SamplingTimeout, got {:?}", other),
        }
    }

    #[test]
    fn test_timeout_skips_remaining_points() {
        let sliver = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (0.0, 0.0)]),
            vec![],
        );
        let country = country_from("Sliver", MultiPolygon(vec![sliver]));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(points_in_country(&country, 5, 50, &mut rng).is_err());
    }
}
