use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `courses` table.
///
/// The `id` is generated by the importer before the insert, so the row can be
/// logged and its holes prepared without waiting on the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CourseRow {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub total_holes: i32,
    pub par: Option<i32>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub rating: Option<Decimal>,
    pub slope: Option<i32>,
    /// Filled in later from reviews, never by the importer.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub aggregate_score: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub confidence_rating: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
