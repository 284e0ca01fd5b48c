#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the patrol map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the domain types to allow independent evolution of the API
//! contract.

use patrol_map_geocoder::Coordinates;
use patrol_map_patrol_models::{PatrolRecord, contact};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Query parameters for the locations endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsQueryParams {
    /// District whose patrol locations are requested.
    pub district: String,
}

/// Query parameters for the selection endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionQueryParams {
    /// Selected administrative district.
    pub district: String,
    /// Selected patrol location within the district.
    pub location: String,
}

/// Coordinates as returned by the API.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCoordinates {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

impl From<Coordinates> for ApiCoordinates {
    fn from(coordinates: Coordinates) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

/// The briefing panel of a selection: either generated text or an error
/// notice shown in its place. Every other panel renders regardless.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ApiBriefing {
    /// Briefing was generated.
    #[serde(rename_all = "camelCase")]
    Ok {
        /// The generated briefing text.
        text: String,
    },
    /// Generation failed for this render cycle.
    #[serde(rename_all = "camelCase")]
    Error {
        /// User-facing notice shown in place of the briefing.
        message: String,
    },
}

/// CPO contact block shown on every selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContact {
    /// Notification channel display name.
    pub team: String,
    /// Officers receiving vulnerable-area notifications.
    pub officers: String,
    /// Phone contact.
    pub phone: String,
    /// Open chat link for notifications.
    pub kakao_url: String,
}

impl ApiContact {
    /// The station's CPO contact block.
    #[must_use]
    pub fn cpo() -> Self {
        Self {
            team: contact::CPO_TEAM_NAME.to_string(),
            officers: contact::CPO_OFFICERS.to_string(),
            phone: contact::CPO_PHONE.to_string(),
            kakao_url: contact::CPO_KAKAO_URL.to_string(),
        }
    }
}

/// One full render pass for a selected (district, location) pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSelection {
    /// Selected administrative district.
    pub district: String,
    /// Selected patrol location.
    pub location: String,
    /// Postal address from the location table, verbatim.
    pub address: String,
    /// Human-authored area description, verbatim.
    pub description: String,
    /// Focus activities assigned to the location, verbatim.
    pub focus_activities: String,
    /// Map center, or `None` when the address is unmapped this session.
    pub coordinates: Option<ApiCoordinates>,
    /// The briefing panel content.
    pub briefing: ApiBriefing,
    /// Static CPO contact block.
    pub contact: ApiContact,
}

impl ApiSelection {
    /// Assembles a selection response from the record and the outcomes of
    /// the geocoding and generation calls.
    #[must_use]
    pub fn new(
        district: String,
        location: String,
        record: &PatrolRecord,
        coordinates: Option<ApiCoordinates>,
        briefing: ApiBriefing,
    ) -> Self {
        Self {
            district,
            location,
            address: record.address.clone(),
            description: record.description.clone(),
            focus_activities: record.focus_activities.clone(),
            coordinates,
            briefing,
            contact: ApiContact::cpo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PatrolRecord {
        PatrolRecord {
            address: "경기도 고양시 일산동구 중앙로 1036".to_string(),
            description: "desc".to_string(),
            focus_activities: "f".to_string(),
        }
    }

    #[test]
    fn selection_serializes_camel_case_with_verbatim_fields() {
        let selection = ApiSelection::new(
            "A동".to_string(),
            "L1".to_string(),
            &record(),
            Some(ApiCoordinates {
                latitude: 37.6584,
                longitude: 126.8320,
            }),
            ApiBriefing::Ok {
                text: "안내".to_string(),
            },
        );

        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["district"], "A동");
        assert_eq!(json["location"], "L1");
        assert_eq!(json["description"], "desc");
        assert_eq!(json["focusActivities"], "f");
        assert_eq!(json["coordinates"]["latitude"], 37.6584);
        assert_eq!(json["briefing"]["status"], "ok");
        assert_eq!(json["briefing"]["text"], "안내");
        assert_eq!(json["contact"]["phone"], "031-930-5143");
    }

    #[test]
    fn unmapped_address_serializes_null_coordinates() {
        let selection = ApiSelection::new(
            "A동".to_string(),
            "L1".to_string(),
            &record(),
            None,
            ApiBriefing::Ok {
                text: "안내".to_string(),
            },
        );

        let json = serde_json::to_value(&selection).unwrap();
        assert!(json["coordinates"].is_null());
        assert_eq!(json["briefing"]["status"], "ok");
    }

    #[test]
    fn failed_generation_serializes_an_error_notice() {
        let briefing = ApiBriefing::Error {
            message: "AI 안내문을 생성하지 못했습니다.".to_string(),
        };
        let json = serde_json::to_value(&briefing).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "AI 안내문을 생성하지 못했습니다.");
    }
}
