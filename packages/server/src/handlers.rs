//! HTTP handler functions for the patrol map API.

use actix_web::{HttpResponse, web};
use patrol_map_ai::briefing;
use patrol_map_server_models::{
    ApiBriefing, ApiCoordinates, ApiHealth, ApiSelection, LocationsQueryParams,
    SelectionQueryParams,
};

use crate::AppState;

/// User-facing notice shown in place of a briefing that failed to
/// generate; the real error goes to the log.
const BRIEFING_UNAVAILABLE_NOTICE: &str =
    "AI 안내문을 생성하지 못했습니다. 잠시 후 다시 선택해주세요.";

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// `GET /`
///
/// Serves the embedded single-page frontend.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/districts`
///
/// Returns all district names in deterministic order.
pub async fn districts(state: web::Data<AppState>) -> HttpResponse {
    let districts: Vec<&str> = state.table.districts().collect();
    HttpResponse::Ok().json(districts)
}

/// `GET /api/locations?district=`
///
/// Returns the patrol location names of a district.
pub async fn locations(
    state: web::Data<AppState>,
    params: web::Query<LocationsQueryParams>,
) -> HttpResponse {
    state.table.locations(&params.district).map_or_else(
        || {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": "Unknown district"
            }))
        },
        |locations| HttpResponse::Ok().json(locations.collect::<Vec<_>>()),
    )
}

/// `GET /api/selection?district=&location=`
///
/// Runs one full render pass for a selection: the record's fields
/// verbatim, the (cached) geocoding outcome, and a freshly generated
/// briefing. A failed geocode yields `coordinates: null`; a failed
/// generation yields an error-notice briefing panel. Either way every
/// other panel still renders.
pub async fn selection(
    state: web::Data<AppState>,
    params: web::Query<SelectionQueryParams>,
) -> HttpResponse {
    let Some(record) = state.table.get(&params.district, &params.location) else {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": "Unknown district or patrol location"
        }));
    };

    let coordinates = state
        .resolver
        .resolve(&record.address)
        .await
        .map(ApiCoordinates::from);

    let briefing = match briefing::generate(
        state.provider.as_ref(),
        &params.district,
        &params.location,
        &record.description,
    )
    .await
    {
        Ok(text) => ApiBriefing::Ok { text },
        Err(e) => {
            log::error!(
                "Briefing generation failed for {} / {}: {e}",
                params.district,
                params.location
            );
            ApiBriefing::Error {
                message: BRIEFING_UNAVAILABLE_NOTICE.to_string(),
            }
        }
    };

    HttpResponse::Ok().json(ApiSelection::new(
        params.district.clone(),
        params.location.clone(),
        record,
        coordinates,
        briefing,
    ))
}
