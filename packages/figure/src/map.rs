//! LGA choropleth.

use accident_map_accident_models::{AccidentCategory, LgaAccidentRecord};
use accident_map_data::AccidentData;
use accident_map_figure_models::{
    ChoroplethMapboxTrace, ChoroplethMarker, Figure, LatLon, Layout, Legend, Mapbox, Margin,
    Title, Trace,
};
use geojson::{Feature, FeatureCollection, Geometry, feature::Id};

use crate::ACCIDENT_COUNT_LABEL;

/// Base-map style.
pub const MAP_STYLE: &str = "carto-positron";
/// Initial zoom level.
pub const MAP_ZOOM: f64 = 8.0;
/// Initial view center (Melbourne CBD).
pub const MAP_CENTER: LatLon = LatLon {
    lat: -37.8104,
    lon: 144.9628,
};
/// Polygon fill opacity.
pub const MAP_OPACITY: f64 = 0.8;
/// Legend heading.
pub const LEGEND_TITLE: &str = "accident_category";

/// Draws every LGA filled by its accident category.
///
/// Emits one trace per category that has at least one LGA, in ascending
/// category order, so the legend reads `Low` to `Very High`.
#[must_use]
pub fn create_map(data: &AccidentData) -> Figure {
    let traces: Vec<Trace> = AccidentCategory::all()
        .iter()
        .filter_map(|category| {
            let records: Vec<&LgaAccidentRecord> = data
                .lgas()
                .iter()
                .filter(|r| r.category() == *category)
                .collect();

            if records.is_empty() {
                return None;
            }

            log::debug!("{} LGAs in category {category}", records.len());
            Some(Trace::Choroplethmapbox(category_trace(*category, &records)))
        })
        .collect();

    Figure {
        data: traces,
        layout: Layout {
            mapbox: Some(Mapbox {
                style: MAP_STYLE.to_string(),
                zoom: MAP_ZOOM,
                center: MAP_CENTER,
            }),
            margin: Some(Margin::default()),
            legend: Some(Legend {
                title: Title::new(LEGEND_TITLE),
            }),
            ..Layout::default()
        },
    }
}

fn category_trace(
    category: AccidentCategory,
    records: &[&LgaAccidentRecord],
) -> ChoroplethMapboxTrace {
    let color = category.color().to_string();
    let label = category.label().to_string();

    let features = records
        .iter()
        .map(|r| Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(r.boundary()))),
            id: Some(Id::String(r.index().to_string())),
            properties: None,
            foreign_members: None,
        })
        .collect();

    ChoroplethMapboxTrace {
        geojson: FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        },
        featureidkey: "id".to_string(),
        locations: records.iter().map(|r| r.index().to_string()).collect(),
        z: vec![1.0; records.len()],
        colorscale: vec![(0.0, color.clone()), (1.0, color)],
        showscale: false,
        name: label.clone(),
        legendgroup: label,
        showlegend: true,
        marker: ChoroplethMarker {
            opacity: MAP_OPACITY,
        },
        hovertext: records.iter().map(|r| hover_text(r)).collect(),
        hovertemplate: "%{hovertext}<extra></extra>".to_string(),
    }
}

fn hover_text(record: &LgaAccidentRecord) -> String {
    let count = record.accident_count();
    record.name().map_or_else(
        || format!("{ACCIDENT_COUNT_LABEL}={count}"),
        |name| format!("{name}<br>{ACCIDENT_COUNT_LABEL}={count}"),
    )
}
