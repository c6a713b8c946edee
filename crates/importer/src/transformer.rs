use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use storage::models::{CourseRow, HoleRow};
use uuid::Uuid;

use crate::sources::golfcourseapi::{CourseDetail, Hole};

const DEFAULT_TOTAL_HOLES: i32 = 18;
const DEFAULT_HOLE_PAR: i32 = 4;
const METERS_PER_YARD: f64 = 0.9144;

/// Maps API course details onto `courses` and `course_holes` rows.
///
/// All rows built by one transformer share the same timestamp.
pub struct CourseTransformer {
    timestamp: DateTime<Utc>,
}

impl CourseTransformer {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self { timestamp }
    }

    /// Builds the course row from the main tee, with a freshly generated id.
    pub fn course_row(&self, detail: &CourseDetail) -> CourseRow {
        let tee = detail.main_tee();
        let location = detail.location.clone().unwrap_or_default();

        CourseRow {
            id: Uuid::new_v4(),
            name: detail.display_name(),
            address: non_blank(location.address),
            city: non_blank(location.city),
            state: non_blank(location.state),
            country: non_blank(location.country),
            latitude: location.latitude.filter(|v| *v != 0.0),
            longitude: location.longitude.filter(|v| *v != 0.0),
            total_holes: tee
                .and_then(|t| non_zero(t.number_of_holes))
                .unwrap_or(DEFAULT_TOTAL_HOLES),
            par: tee.and_then(|t| non_zero(t.par_total)),
            rating: tee.and_then(|t| t.course_rating).and_then(convert_rating),
            slope: tee.and_then(|t| non_zero(t.slope_rating)),
            aggregate_score: None,
            confidence_rating: None,
            created_at: self.timestamp,
            updated_at: self.timestamp,
        }
    }

    /// One row per hole, numbered 1..=N in source order.
    pub fn hole_rows(&self, course_id: Uuid, holes: &[Hole]) -> Vec<HoleRow> {
        (1..)
            .zip(holes)
            .map(|(hole_number, hole)| {
                let yards = non_zero(hole.yardage);
                HoleRow {
                    id: Uuid::new_v4(),
                    course_id,
                    hole_number,
                    par: non_zero(hole.par).unwrap_or(DEFAULT_HOLE_PAR),
                    distance_yards: yards,
                    distance_meters: yards.and_then(yards_to_meters),
                    handicap_index: non_zero(hole.handicap),
                    created_at: self.timestamp,
                    updated_at: self.timestamp,
                }
            })
            .collect()
    }
}

impl Default for CourseTransformer {
    fn default() -> Self {
        Self::new()
    }
}

/// `round(yards * 0.9144)`; `None` when the result rounds to zero.
pub fn yards_to_meters(yards: i32) -> Option<i32> {
    let meters = (f64::from(yards) * METERS_PER_YARD).round();
    if meters == 0.0 {
        return None;
    }
    Some(meters as i32)
}

/// The API uses 0 for "unknown" on its numeric fields.
fn non_zero(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v != 0)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Converts f64 to Decimal, rounds to 1 decimal place, and treats 0.0 as NULL
fn convert_rating(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(1))
        .filter(|d| !d.is_zero())
}
