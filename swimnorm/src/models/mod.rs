//! Domain models for the swimnorm pipeline.
//!
//! - [`RawRecord`] - one export row bound to the fixed 21-column layout
//! - [`CleanedRecord`] - a row after cleanup, with every derived field
//! - [`OutputRecord`] - the 14-column projection that gets persisted

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

// =============================================================================
// Raw Schema
// =============================================================================

/// Column names assigned, by position, to every row of a Top Times export.
///
/// Header names in the source file are never consulted.
pub const RAW_SCHEMA: [&str; 21] = [
    "MeetName",
    "Time",
    "Date",
    "FullDesc",
    "TCode",
    "TeamShortName",
    "AthFullName",
    "Gender",
    "DOB",
    "EventID",
    "SwimTimeAsTime",
    "AltAdjustFlag",
    "ConvertedTimeFlag",
    "EligPeriodCode",
    "StandardName",
    "EventRank",
    "FullDescIntl",
    "FINAPoints",
    "MeetCity",
    "CountryCode",
    "Ineligable_Secondary_Team",
];

/// Output column names, in file order (the index column is not included).
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "ID",
    "First",
    "Last",
    "Gender",
    "DOB",
    "TCode",
    "Distance",
    "Stroke",
    "Course",
    "Time",
    "TimeSS",
    "EventRank",
    "Date",
    "MeetName",
];

// =============================================================================
// Raw Record
// =============================================================================

/// One untyped export row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    pub meet_name: String,
    pub time: String,
    pub date: String,
    pub full_desc: String,
    #[serde(rename = "TCode")]
    pub t_code: String,
    pub team_short_name: String,
    pub ath_full_name: String,
    pub gender: String,
    #[serde(rename = "DOB")]
    pub dob: String,
    #[serde(rename = "EventID")]
    pub event_id: String,
    pub swim_time_as_time: String,
    pub alt_adjust_flag: String,
    pub converted_time_flag: String,
    pub elig_period_code: String,
    pub standard_name: String,
    pub event_rank: String,
    pub full_desc_intl: String,
    #[serde(rename = "FINAPoints")]
    pub fina_points: String,
    pub meet_city: String,
    pub country_code: String,
    #[serde(rename = "Ineligable_Secondary_Team")]
    pub ineligable_secondary_team: String,
}

impl RawRecord {
    /// Bind positional fields to [`RAW_SCHEMA`].
    ///
    /// Fails unless exactly 21 fields are given.
    pub fn from_fields(fields: Vec<String>) -> Result<Self, SchemaError> {
        let fields: [String; 21] =
            fields
                .try_into()
                .map_err(|rejected: Vec<String>| SchemaError::ColumnCount {
                    expected: RAW_SCHEMA.len(),
                    found: rejected.len(),
                })?;

        let [meet_name, time, date, full_desc, t_code, team_short_name, ath_full_name, gender, dob, event_id, swim_time_as_time, alt_adjust_flag, converted_time_flag, elig_period_code, standard_name, event_rank, full_desc_intl, fina_points, meet_city, country_code, ineligable_secondary_team] =
            fields;

        Ok(Self {
            meet_name,
            time,
            date,
            full_desc,
            t_code,
            team_short_name,
            ath_full_name,
            gender,
            dob,
            event_id,
            swim_time_as_time,
            alt_adjust_flag,
            converted_time_flag,
            elig_period_code,
            standard_name,
            event_rank,
            full_desc_intl,
            fina_points,
            meet_city,
            country_code,
            ineligable_secondary_team,
        })
    }

    /// Apply `f` to every field in place.
    pub fn map_fields(&mut self, mut f: impl FnMut(&str) -> String) {
        for field in self.fields_mut() {
            *field = f(field);
        }
    }

    fn fields_mut(&mut self) -> [&mut String; 21] {
        [
            &mut self.meet_name,
            &mut self.time,
            &mut self.date,
            &mut self.full_desc,
            &mut self.t_code,
            &mut self.team_short_name,
            &mut self.ath_full_name,
            &mut self.gender,
            &mut self.dob,
            &mut self.event_id,
            &mut self.swim_time_as_time,
            &mut self.alt_adjust_flag,
            &mut self.converted_time_flag,
            &mut self.elig_period_code,
            &mut self.standard_name,
            &mut self.event_rank,
            &mut self.full_desc_intl,
            &mut self.fina_points,
            &mut self.meet_city,
            &mut self.country_code,
            &mut self.ineligable_secondary_team,
        ]
    }
}

// =============================================================================
// Cleaned Record
// =============================================================================

/// A row after cleanup and decomposition.
///
/// `raw` holds the artifact-stripped source fields; `raw.gender` is left as
/// read, while [`CleanedRecord::gender`] is the value taken from the event
/// description and is the one that reaches the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedRecord {
    pub raw: RawRecord,
    pub last: String,
    pub first: String,
    pub distance: String,
    pub stroke: String,
    pub course: String,
    pub gender: String,
    pub dob: NaiveDate,
    pub date: NaiveDate,
    pub id_dob: String,
    pub time_ss: f64,
    pub id: String,
}

impl CleanedRecord {
    /// Project onto the output columns.
    pub fn to_output(&self) -> OutputRecord {
        OutputRecord {
            id: self.id.clone(),
            first: self.first.clone(),
            last: self.last.clone(),
            gender: self.gender.clone(),
            dob: self.dob,
            t_code: self.raw.t_code.clone(),
            distance: self.distance.clone(),
            stroke: self.stroke.clone(),
            course: self.course.clone(),
            time: self.raw.time.clone(),
            time_ss: self.time_ss,
            event_rank: self.raw.event_rank.clone(),
            date: self.date,
            meet_name: self.raw.meet_name.clone(),
        }
    }
}

// =============================================================================
// Output Record
// =============================================================================

/// One row of the formatted table, fields in [`OUTPUT_COLUMNS`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "First")]
    pub first: String,
    #[serde(rename = "Last")]
    pub last: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "DOB")]
    pub dob: NaiveDate,
    #[serde(rename = "TCode")]
    pub t_code: String,
    #[serde(rename = "Distance")]
    pub distance: String,
    #[serde(rename = "Stroke")]
    pub stroke: String,
    #[serde(rename = "Course")]
    pub course: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "TimeSS")]
    pub time_ss: f64,
    #[serde(rename = "EventRank")]
    pub event_rank: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "MeetName")]
    pub meet_name: String,
}

impl OutputRecord {
    /// Render as text cells in [`OUTPUT_COLUMNS`] order.
    ///
    /// Dates are `YYYY-MM-DD`, `TimeSS` always carries two decimals.
    pub fn to_cells(&self) -> [String; 14] {
        [
            self.id.clone(),
            self.first.clone(),
            self.last.clone(),
            self.gender.clone(),
            self.dob.format("%Y-%m-%d").to_string(),
            self.t_code.clone(),
            self.distance.clone(),
            self.stroke.clone(),
            self.course.clone(),
            self.time.clone(),
            format!("{:.2}", self.time_ss),
            self.event_rank.clone(),
            self.date.format("%Y-%m-%d").to_string(),
            self.meet_name.clone(),
        ]
    }
}
