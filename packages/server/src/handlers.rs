//! HTTP handler functions for the accident map.

use accident_map_data::queries;
use accident_map_figure::create_bar_chart;
use accident_map_server_models::{ApiHealth, ApiLgaOptions, BarChartQueryParams, LgaOption};
use actix_web::{HttpResponse, http::header::ContentType, web};

use crate::AppState;
use crate::page::DEFAULT_LGA;

/// `GET /`
///
/// Serves the dashboard page rendered at startup.
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(state.page.clone())
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/map`
///
/// Returns the choropleth figure rendered at startup.
pub async fn map(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.map)
}

/// `GET /api/lgas`
///
/// Returns the dropdown options and the default selection.
pub async fn lgas(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiLgaOptions {
        options: queries::lga_names(&state.data)
            .into_iter()
            .map(LgaOption::from)
            .collect(),
        default_value: DEFAULT_LGA.to_string(),
    })
}

/// `GET /api/bar-chart`
///
/// Re-renders the severity chart for the selected LGA. Unknown or missing
/// selections produce an empty chart rather than an error.
pub async fn bar_chart(
    state: web::Data<AppState>,
    params: web::Query<BarChartQueryParams>,
) -> HttpResponse {
    let selected_lga = params.selected_lga.as_deref().unwrap_or_default();
    log::debug!("Rendering severity chart for {selected_lga:?}");

    HttpResponse::Ok().json(create_bar_chart(&state.data, selected_lga))
}
