use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `course_holes` table. Many holes belong to one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct HoleRow {
    pub id: Uuid,
    pub course_id: Uuid,
    /// 1-based, contiguous within a course.
    pub hole_number: i32,
    pub par: i32,
    pub distance_yards: Option<i32>,
    pub distance_meters: Option<i32>,
    pub handicap_index: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
