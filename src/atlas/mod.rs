//! Country boundary store
//!
//! Parses the bundled GeoJSON boundary dataset into an in-memory lookup
//! keyed by canonical country name. Loaded once at startup, read-only
//! thereafter.

use crate::error::{Error, Result};
use geo::{BoundingRect, MultiPolygon, Polygon, Rect};
use geojson::{GeoJson, Value};
use rand::Rng;
use std::collections::HashMap;

/// Simplified country outlines, Natural Earth naming (`NAME` property)
static WORLD_GEOJSON: &str = include_str!("../../data/countries.geojson");

/// A country boundary from the bundled dataset
#[derive(Debug, Clone)]
pub struct Country {
    /// Canonical name, exact dataset spelling
    pub name: String,

    /// Boundary geometry, possibly multi-part
    pub geometry: MultiPolygon<f64>,

    /// Axis-aligned bounding box of the full geometry
    pub bbox: Rect<f64>,

    /// Bounding box per constituent polygon, parallel to `geometry.0`
    part_bboxes: Vec<Rect<f64>>,
}

impl Country {
    /// Build a country entry, precomputing the full and per-part bounding
    /// boxes the sampler draws against
    pub fn new(name: impl Into<String>, geometry: MultiPolygon<f64>) -> Result<Self> {
        let name = name.into();
        let bbox = geometry
            .bounding_rect()
            .ok_or_else(|| Error::Dataset(format!("{}: empty geometry", name)))?;
        let part_bboxes = geometry
            .0
            .iter()
            .map(|part| {
                part.bounding_rect()
                    .ok_or_else(|| Error::Dataset(format!("{}: empty polygon part", name)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name,
            geometry,
            bbox,
            part_bboxes,
        })
    }

    /// Bounding box of one constituent polygon
    pub fn part_bbox(&self, part: usize) -> Rect<f64> {
        self.part_bboxes[part]
    }
}

/// Read-only lookup from country name to boundary geometry
pub struct Atlas {
    countries: Vec<Country>,
    index: HashMap<String, usize>,
}

impl Atlas {
    /// Load the bundled boundary dataset
    pub fn bundled() -> Result<Self> {
        Self::from_geojson(WORLD_GEOJSON)
    }

    /// Parse a GeoJSON feature collection of country outlines
    ///
    /// Each feature must carry a `NAME` property and a Polygon or
    /// MultiPolygon geometry.
    pub fn from_geojson(raw: &str) -> Result<Self> {
        let geojson: GeoJson = raw
            .parse()
            .map_err(|e: geojson::Error| Error::Dataset(format!("invalid GeoJSON: {}", e)))?;

        let collection = match geojson {
            GeoJson::FeatureCollection(fc) => fc,
            _ => return Err(Error::Dataset("expected a FeatureCollection".to_string())),
        };

        let mut countries = Vec::with_capacity(collection.features.len());
        let mut index = HashMap::new();

        for feature in collection.features {
            let name = feature
                .properties
                .as_ref()
                .and_then(|props| props.get("NAME"))
                .and_then(|v| v.as_str())
                .ok_or_else(|| Error::Dataset("feature without a NAME property".to_string()))?
                .to_string();

            let geometry = feature
                .geometry
                .ok_or_else(|| Error::Dataset(format!("{}: feature without geometry", name)))?;

            let geometry = match geometry.value {
                value @ Value::Polygon(_) => {
                    let polygon: Polygon<f64> = value
                        .try_into()
                        .map_err(|e: geojson::Error| Error::Dataset(format!("{}: {}", name, e)))?;
                    MultiPolygon(vec![polygon])
                }
                value @ Value::MultiPolygon(_) => {
                    let multi: MultiPolygon<f64> = value
                        .try_into()
                        .map_err(|e: geojson::Error| Error::Dataset(format!("{}: {}", name, e)))?;
                    multi
                }
                _ => {
                    return Err(Error::Dataset(format!(
                        "{}: geometry must be a Polygon or MultiPolygon",
                        name
                    )))
                }
            };

            index.insert(name.clone(), countries.len());
            countries.push(Country::new(name, geometry)?);
        }

        if countries.is_empty() {
            return Err(Error::Dataset("dataset contains no countries".to_string()));
        }

        Ok(Self { countries, index })
    }

    /// Look up a country by its canonical name
    ///
    /// Matching is case-sensitive and exact, to avoid ambiguity between
    /// similar dataset spellings.
    pub fn lookup(&self, name: &str) -> Result<&Country> {
        self.index
            .get(name)
            .map(|&i| &self.countries[i])
            .ok_or_else(|| Error::UnknownCountry(name.to_string()))
    }

    /// Canonical names in dataset order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(|c| c.name.as_str())
    }

    /// Number of countries in the dataset
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Pick one country uniformly at random (lucky mode)
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Country {
        &self.countries[rng.gen_range(0..self.countries.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bundled_dataset_loads() {
        let atlas = Atlas::bundled().unwrap();
        assert!(!atlas.is_empty());
        assert!(atlas.len() > 20);
    }

    #[test]
    fn test_every_name_resolves_to_nonempty_geometry() {
        let atlas = Atlas::bundled().unwrap();
        let names: Vec<String> = atlas.names().map(String::from).collect();

        for name in names {
            let country = atlas.lookup(&name).unwrap();
            assert!(!country.geometry.0.is_empty(), "{} has no polygons", name);
            assert!(
                country.bbox.width() > 0.0 && country.bbox.height() > 0.0,
                "{} has a degenerate bounding box",
                name
            );
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let atlas = Atlas::bundled().unwrap();
        assert!(atlas.lookup("France").is_ok());
        assert!(matches!(
            atlas.lookup("france"),
            Err(Error::UnknownCountry(_))
        ));
        assert!(matches!(
            atlas.lookup("FRANCE"),
            Err(Error::UnknownCountry(_))
        ));
    }

    #[test]
    fn test_lookup_unknown_country() {
        let atlas = Atlas::bundled().unwrap();
        let err = atlas.lookup("Atlantis").unwrap_err();
        match err {
            Error::UnknownCountry(name) => assert_eq!(name, "Atlantis"),
            other => panic!("expected UnknownCountry, got {:?}", other),
        }
    }

    #[test]
    fn test_multipart_countries_present() {
        let atlas = Atlas::bundled().unwrap();
        let japan = atlas.lookup("Japan").unwrap();
        assert!(japan.geometry.0.len() > 1);
    }

    #[test]
    fn test_part_bboxes_match_parts() {
        let atlas = Atlas::bundled().unwrap();
        let japan = atlas.lookup("Japan").unwrap();

        for (i, part) in japan.geometry.0.iter().enumerate() {
            assert_eq!(japan.part_bbox(i), part.bounding_rect().unwrap());
        }
    }

    #[test]
    fn test_random_country_is_from_dataset() {
        let atlas = Atlas::bundled().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let country = atlas.random(&mut rng);
            assert!(atlas.lookup(&country.name).is_ok());
        }
    }

    #[test]
    fn test_malformed_geojson_rejected() {
        assert!(matches!(
            Atlas::from_geojson("not geojson"),
            Err(Error::Dataset(_))
        ));
        assert!(matches!(
            Atlas::from_geojson(r#"{"type": "FeatureCollection", "features": []}"#),
            Err(Error::Dataset(_))
        ));
    }

    #[test]
    fn test_feature_without_name_rejected() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}
            }]
        }"#;
        assert!(matches!(Atlas::from_geojson(raw), Err(Error::Dataset(_))));
    }
}
