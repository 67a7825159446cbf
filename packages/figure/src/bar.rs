//! Severity bar chart for a single LGA.

use accident_map_data::{AccidentData, queries};
use accident_map_figure_models::{Axis, AxisType, BarTrace, Figure, Layout, Title, Trace};

use crate::ACCIDENT_COUNT_LABEL;

/// Category axis title.
pub const SEVERITY_LABEL: &str = "Severity";

/// Draws summed accident counts per severity for `selected_lga`.
///
/// The name is not validated. An LGA with no severity rows produces a chart
/// with a single empty bar trace.
#[must_use]
pub fn create_bar_chart(data: &AccidentData, selected_lga: &str) -> Figure {
    let (x, y): (Vec<String>, Vec<u64>) = queries::severity_breakdown(data, selected_lga)
        .into_iter()
        .map(|c| (c.label, c.accident_count))
        .unzip();

    Figure {
        data: vec![Trace::Bar(BarTrace {
            x,
            y,
            orientation: "v".to_string(),
            hovertemplate: Some(format!(
                "{SEVERITY_LABEL}=%{{x}}<br>{ACCIDENT_COUNT_LABEL}=%{{y}}<extra></extra>"
            )),
        })],
        layout: Layout {
            title: Some(Title::new(format!("Accident Severity in {selected_lga}"))),
            // Unknown codes are labeled "4" etc.; keep them as categories.
            xaxis: Some(Axis {
                title: Title::new(SEVERITY_LABEL),
                axis_type: Some(AxisType::Category),
            }),
            yaxis: Some(Axis {
                title: Title::new(ACCIDENT_COUNT_LABEL),
                axis_type: None,
            }),
            ..Layout::default()
        },
    }
}
