#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Patrol domain types shared across the patrol-map system.
//!
//! Defines the canonical mobile-patrol duty taxonomy (the nine statutory
//! duty categories an AI briefing is allowed to cite), the per-location
//! record type loaded from the source CSV, and the crime prevention
//! officer (CPO) contact details shown in every briefing.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One statutory duty category of the mobile patrol unit (기동순찰대).
///
/// Briefings must cite only these categories; the prompt builder
/// enumerates them verbatim as the allowed scope of generated guidance.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyCategory {
    /// Preventive patrol of crime-vulnerable areas and crowded facilities
    CrimePreventionPatrol = 1,
    /// Apprehending offenders through stop-and-search
    StopAndSearch = 2,
    /// Enforcement of minor public-order offenses subject to penalty fines
    PublicOrderEnforcement = 3,
    /// On-scene response to major crimes, disasters, and emergencies
    MajorIncidentResponse = 4,
    /// Support for national emergencies, elections, and security details
    NationalEmergencySupport = 5,
    /// Operational support for provincial police agencies and stations
    AgencySupport = 6,
    /// Diagnosis of crime-vulnerability factors within the jurisdiction
    VulnerabilityAssessment = 7,
    /// Crime prevention outreach and cooperative policing with other bodies
    PreventionOutreach = 8,
    /// Matters the commissioner deems necessary
    CommissionerDirected = 9,
}

impl DutyCategory {
    /// All duty categories in statutory order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::CrimePreventionPatrol,
            Self::StopAndSearch,
            Self::PublicOrderEnforcement,
            Self::MajorIncidentResponse,
            Self::NationalEmergencySupport,
            Self::AgencySupport,
            Self::VulnerabilityAssessment,
            Self::PreventionOutreach,
            Self::CommissionerDirected,
        ]
    }

    /// Returns the statutory ordinal (1-9) of this duty category.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the statutory Korean text of this duty category, as it
    /// appears in the mobile patrol unit regulations.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CrimePreventionPatrol => {
                "범죄 취약지 및 다중운집시설 등 범죄 발생이 우려되거나 치안 수요가 예상되는 지역의 범죄예방 및 위험방지를 위한 순찰"
            }
            Self::StopAndSearch => "검문검색을 통한 범법자 검거",
            Self::PublicOrderEnforcement => {
                "「경범죄처벌법」 및 「도로교통법」 등에 규정된 범칙금 부과 대상인 기초질서위반행위의 단속"
            }
            Self::MajorIncidentResponse => {
                "중요 범죄 및 재해ㆍ재난 등 관할구역 내 주요 상황 발생 시 현장 대응"
            }
            Self::NationalEmergencySupport => {
                "간첩, 테러, 전시·사변 또는 이에 준하는 국가비상사태의 발생 및 선거·경호 등 범국가적 치안수요에 대한 지원"
            }
            Self::AgencySupport => {
                "주요 치안수요 발생시 시·도경찰청 각 부서와 경찰서에 대한 업무지원"
            }
            Self::VulnerabilityAssessment => "관할구역 내 범죄취약요소 진단",
            Self::PreventionOutreach => {
                "범죄예방을 위한 홍보 및 타 기관 등과의 협력 치안 활동"
            }
            Self::CommissionerDirected => {
                "그 밖에 경찰청장 또는 시ㆍ도경찰청장이 필요하다고 인정하는 사항"
            }
        }
    }
}

/// A single patrol location as loaded from the source CSV.
///
/// Immutable once loaded; owned exclusively by the location table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatrolRecord {
    /// Postal address used for geocoding.
    pub address: String,
    /// Human-authored description of the area (CPO analysis result).
    pub description: String,
    /// Focus activities assigned to this location (중점 활동사항).
    pub focus_activities: String,
}

/// Crime prevention officer (CPO) contact details.
///
/// Shown on every selection and embedded in the mandatory notification
/// instruction of the briefing prompt.
pub mod contact {
    /// The team officers receiving vulnerable-area notifications.
    pub const CPO_OFFICERS: &str = "경위 이근민, 순경 김재원";
    /// Phone contact for questions while on duty in the jurisdiction.
    pub const CPO_PHONE: &str = "031-930-5143";
    /// Open chat channel for vulnerable-area notifications.
    pub const CPO_KAKAO_URL: &str = "https://open.kakao.com/o/scgaTwdh";
    /// Display name of the notification channel.
    pub const CPO_TEAM_NAME: &str = "고양경찰서 범죄예방진단팀";
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::str::FromStr;

    use super::*;

    #[test]
    fn nine_duty_categories_in_statutory_order() {
        let all = DutyCategory::all();
        assert_eq!(all.len(), 9);
        for (i, duty) in all.iter().enumerate() {
            assert_eq!(duty.ordinal() as usize, i + 1);
        }
    }

    #[test]
    fn duty_labels_are_unique_and_nonempty() {
        let mut seen = BTreeSet::new();
        for duty in DutyCategory::all() {
            assert!(!duty.label().is_empty(), "{duty} has empty label");
            assert!(seen.insert(duty.label()), "Duplicate label for {duty}");
        }
    }

    #[test]
    fn duty_name_round_trips_through_strum() {
        for duty in DutyCategory::all() {
            let name = duty.to_string();
            assert_eq!(DutyCategory::from_str(&name).unwrap(), *duty);
        }
    }

    #[test]
    fn patrol_record_serializes_camel_case() {
        let record = PatrolRecord {
            address: "경기도 고양시 일산동구".to_string(),
            description: "desc".to_string(),
            focus_activities: "f".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["address"], "경기도 고양시 일산동구");
        assert_eq!(json["focusActivities"], "f");
    }
}
