//! LGA boundary loading from a `GeoJSON` `FeatureCollection`.
//!
//! Each feature becomes an [`LgaAccidentRecord`]. Geometries are converted
//! through `geo` so that only areal shapes are accepted, and every record
//! is categorized as it is built.

use std::path::Path;

use accident_map_accident_models::LgaAccidentRecord;
use accident_map_accident_models::whole_number::deserialize_count;
use geo::MultiPolygon;
use geojson::{Feature, GeoJson};

use crate::LoadError;

/// Property holding the per-LGA accident total.
pub const ACCIDENT_COUNT_PROPERTY: &str = "ACCIDENT_NO";

/// Properties tried, in order, for the LGA display name.
pub const NAME_PROPERTIES: &[&str] = &["LGA_NAME", "NAME", "LGA"];

/// Reads and parses the boundary file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any feature is invalid.
pub fn load_lgas(path: &Path) -> Result<Vec<LgaAccidentRecord>, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::from(e).in_file(path))?;
    let records = parse_lgas(&contents).map_err(|e| e.in_file(path))?;
    log::info!(
        "Loaded {} LGA boundaries from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parses `GeoJSON` text into LGA records.
///
/// # Errors
///
/// Returns an error if the text is not a `FeatureCollection`, or if a
/// feature lacks an areal geometry or a non-negative integral
/// `ACCIDENT_NO`.
pub fn parse_lgas(contents: &str) -> Result<Vec<LgaAccidentRecord>, LoadError> {
    let GeoJson::FeatureCollection(collection) = contents.parse::<GeoJson>()? else {
        return Err(LoadError::invalid("expected a GeoJSON FeatureCollection"));
    };

    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| parse_feature(index, feature))
        .collect()
}

fn parse_feature(index: usize, feature: Feature) -> Result<LgaAccidentRecord, LoadError> {
    let accident_count = feature
        .property(ACCIDENT_COUNT_PROPERTY)
        .and_then(|value| deserialize_count(value).ok())
        .ok_or_else(|| {
            LoadError::invalid(format!(
                "feature {index} has no non-negative integer {ACCIDENT_COUNT_PROPERTY}"
            ))
        })?;

    let name = NAME_PROPERTIES
        .iter()
        .find_map(|key| feature.property(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string);

    let Some(geometry) = feature.geometry else {
        return Err(LoadError::invalid(format!("feature {index} has no geometry")));
    };
    let boundary = match geo::Geometry::<f64>::try_from(geometry)? {
        geo::Geometry::MultiPolygon(mp) => mp,
        geo::Geometry::Polygon(p) => MultiPolygon(vec![p]),
        _ => {
            return Err(LoadError::invalid(format!(
                "feature {index} is not a Polygon or MultiPolygon"
            )));
        }
    };

    Ok(LgaAccidentRecord::new(index, name, accident_count, boundary))
}

#[cfg(test)]
mod tests {
    use accident_map_accident_models::AccidentCategory;

    use super::*;

    fn square(x: f64) -> String {
        format!("[[[{x},0.0],[{x},1.0],[{},1.0],[{},0.0],[{x},0.0]]]", x + 1.0, x + 1.0)
    }

    fn collection(features: &[String]) -> String {
        format!(
            r#"{{"type":"FeatureCollection","features":[{}]}}"#,
            features.join(",")
        )
    }

    fn polygon_feature(props: &str, x: f64) -> String {
        format!(
            r#"{{"type":"Feature","properties":{props},"geometry":{{"type":"Polygon","coordinates":{}}}}}"#,
            square(x)
        )
    }

    #[test]
    fn parses_polygons_and_multipolygons() {
        let multi = format!(
            r#"{{"type":"Feature","properties":{{"ACCIDENT_NO":1500}},"geometry":{{"type":"MultiPolygon","coordinates":[{},{}]}}}}"#,
            square(5.0),
            square(7.0)
        );
        let text = collection(&[
            polygon_feature(r#"{"ACCIDENT_NO":42,"LGA_NAME":"ALPINE"}"#, 0.0),
            multi,
        ]);

        let records = parse_lgas(&text).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].index(), 0);
        assert_eq!(records[0].name(), Some("ALPINE"));
        assert_eq!(records[0].accident_count(), 42);
        assert_eq!(records[0].category(), AccidentCategory::Low);
        assert_eq!(records[0].boundary().0.len(), 1);

        assert_eq!(records[1].index(), 1);
        assert_eq!(records[1].name(), None);
        assert_eq!(records[1].category(), AccidentCategory::VeryHigh);
        assert_eq!(records[1].boundary().0.len(), 2);
    }

    #[test]
    fn accepts_integral_float_counts() {
        let text = collection(&[polygon_feature(
            r#"{"ACCIDENT_NO":500.0,"NAME":"BASS COAST"}"#,
            0.0,
        )]);
        let records = parse_lgas(&text).unwrap();
        assert_eq!(records[0].accident_count(), 500);
        assert_eq!(records[0].category(), AccidentCategory::High);
        assert_eq!(records[0].name(), Some("BASS COAST"));
    }

    #[test]
    fn rejects_bad_counts() {
        for props in [
            r#"{}"#,
            r#"{"ACCIDENT_NO":-1}"#,
            r#"{"ACCIDENT_NO":1.5}"#,
            r#"{"ACCIDENT_NO":"12"}"#,
        ] {
            let text = collection(&[polygon_feature(props, 0.0)]);
            let err = parse_lgas(&text).unwrap_err();
            assert!(
                matches!(err, LoadError::InvalidRecord { .. }),
                "{props} gave {err}"
            );
        }
    }

    #[test]
    fn rejects_non_areal_geometry() {
        let text = collection(&[
            r#"{"type":"Feature","properties":{"ACCIDENT_NO":1},"geometry":{"type":"Point","coordinates":[144.9,-37.8]}}"#
                .to_string(),
        ]);
        assert!(matches!(
            parse_lgas(&text).unwrap_err(),
            LoadError::InvalidRecord { .. }
        ));

        let text = collection(&[
            r#"{"type":"Feature","properties":{"ACCIDENT_NO":1},"geometry":null}"#.to_string(),
        ]);
        assert!(matches!(
            parse_lgas(&text).unwrap_err(),
            LoadError::InvalidRecord { .. }
        ));
    }

    #[test]
    fn rejects_non_collections() {
        let err = parse_lgas(r#"{"type":"Point","coordinates":[0.0,0.0]}"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRecord { .. }));

        assert!(matches!(
            parse_lgas("not json").unwrap_err(),
            LoadError::GeoJson(_)
        ));
    }
}
