//! CSV parsing into the nested district → location mapping.
//!
//! The header row is validated against [`REQUIRED_COLUMNS`] before any
//! row is read; rows are then deserialized through a typed schema keyed
//! by the localized column names.

use std::collections::BTreeMap;
use std::io;

use patrol_map_patrol_models::PatrolRecord;
use serde::Deserialize;

use crate::{LoadError, REQUIRED_COLUMNS};

/// One row of the source CSV, keyed by the localized column headers.
#[derive(Debug, Deserialize)]
struct LocationRow {
    #[serde(rename = "행정동")]
    district: String,
    #[serde(rename = "순찰장소")]
    location: String,
    address: String,
    description: String,
    #[serde(rename = "중점 활동사항")]
    focus_activities: String,
}

/// Reads the full table, grouping rows by district and then location.
///
/// A later row with the same (district, location) pair overwrites the
/// earlier one. Field values are taken verbatim: no trimming, no case
/// folding.
pub(crate) fn read_table<R: io::Read>(
    reader: R,
) -> Result<BTreeMap<String, BTreeMap<String, PatrolRecord>>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| (*column).to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns { missing });
    }

    let mut districts: BTreeMap<String, BTreeMap<String, PatrolRecord>> = BTreeMap::new();
    let mut row_count: usize = 0;

    for result in csv_reader.records() {
        let record = result?;
        let row: LocationRow = record.deserialize(Some(&headers))?;
        row_count += 1;

        let overwritten = districts
            .entry(row.district)
            .or_default()
            .insert(
                row.location,
                PatrolRecord {
                    address: row.address,
                    description: row.description,
                    focus_activities: row.focus_activities,
                },
            )
            .is_some();
        if overwritten {
            log::debug!("Row {row_count} overwrote an earlier (district, location) pair");
        }
    }

    log::debug!("Parsed {row_count} rows from patrol locations CSV");

    Ok(districts)
}

#[cfg(test)]
mod tests {
    use crate::{LoadError, LocationTable};

    const HEADER: &str = "행정동,순찰장소,address,description,중점 활동사항";

    fn table_from(csv: &str) -> LocationTable {
        LocationTable::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn loads_nested_table_with_fields_verbatim() {
        let table = table_from(
            "행정동,순찰장소,address,description,중점 활동사항\n\
             주엽동,문촌공원,경기도 고양시 일산서구 주엽동 109,야간 청소년 음주,무인점포 절도예방\n\
             주엽동,강선마을,경기도 고양시 일산서구 주엽동 86,주취자 신고 다수,야간 취약지역 확인\n\
             탄현동,탄현역,경기도 고양시 일산서구 탄현동 1500,오토바이 소음,기초질서 단속\n",
        );

        assert_eq!(table.district_count(), 2);
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.districts().collect::<Vec<_>>(),
            vec!["주엽동", "탄현동"]
        );

        let record = table.get("주엽동", "문촌공원").unwrap();
        assert_eq!(record.address, "경기도 고양시 일산서구 주엽동 109");
        assert_eq!(record.description, "야간 청소년 음주");
        assert_eq!(record.focus_activities, "무인점포 절도예방");
    }

    #[test]
    fn missing_column_is_rejected_with_no_table() {
        let result = LocationTable::from_reader(
            "행정동,순찰장소,address,중점 활동사항\n\
             주엽동,문촌공원,addr,focus\n"
                .as_bytes(),
        );

        match result {
            Err(LoadError::MissingColumns { missing }) => {
                assert_eq!(missing, vec!["description".to_owned()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn missing_columns_are_all_reported() {
        let result = LocationTable::from_reader("address,description\naddr,desc\n".as_bytes());

        match result {
            Err(LoadError::MissingColumns { missing }) => {
                assert_eq!(
                    missing,
                    vec![
                        "행정동".to_owned(),
                        "순찰장소".to_owned(),
                        "중점 활동사항".to_owned()
                    ]
                );
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_pair_keeps_the_later_row() {
        let table = table_from(
            "행정동,순찰장소,address,description,중점 활동사항\n\
             주엽동,문촌공원,first,first desc,first focus\n\
             주엽동,문촌공원,second,second desc,second focus\n",
        );

        assert_eq!(table.len(), 1);
        let record = table.get("주엽동", "문촌공원").unwrap();
        assert_eq!(record.address, "second");
        assert_eq!(record.description, "second desc");
        assert_eq!(record.focus_activities, "second focus");
    }

    #[test]
    fn no_whitespace_normalization_on_values() {
        let table = table_from(
            "행정동,순찰장소,address,description,중점 활동사항\n\
             주엽동, 문촌공원,addr,desc,focus\n",
        );

        assert!(table.get("주엽동", "문촌공원").is_none());
        assert!(table.get("주엽동", " 문촌공원").is_some());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let table = table_from(
            "행정동,순찰장소,address,description,중점 활동사항,비고\n\
             주엽동,문촌공원,addr,desc,focus,extra\n",
        );

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("주엽동", "문촌공원").unwrap().address, "addr");
    }

    #[test]
    fn header_only_file_yields_empty_table() {
        let table = table_from("행정동,순찰장소,address,description,중점 활동사항\n");
        assert!(table.is_empty());
        assert_eq!(table.district_count(), 0);
    }

    #[test]
    fn unknown_district_has_no_locations() {
        let table = table_from(&format!("{HEADER}\n주엽동,문촌공원,a,d,f\n"));
        assert!(table.locations("탄현동").is_none());
        assert_eq!(
            table.locations("주엽동").unwrap().collect::<Vec<_>>(),
            vec!["문촌공원"]
        );
    }

    #[test]
    fn single_row_scenario_is_selectable_verbatim() {
        let table = table_from(&format!(
            "{HEADER}\nA동,L1,경기도 고양시 일산동구 중앙로 1036,desc,f\n"
        ));

        assert_eq!(table.districts().collect::<Vec<_>>(), vec!["A동"]);
        assert_eq!(
            table.locations("A동").unwrap().collect::<Vec<_>>(),
            vec!["L1"]
        );
        let record = table.get("A동", "L1").unwrap();
        assert_eq!(record.address, "경기도 고양시 일산동구 중앙로 1036");
        assert_eq!(record.description, "desc");
        assert_eq!(record.focus_activities, "f");
    }
}
