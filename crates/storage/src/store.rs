use crate::error::Result;
use crate::models::{CourseRow, HoleRow};

/// Write side of the course data store.
///
/// The two inserts are independent: there is no transaction spanning a course
/// and its holes.
#[async_trait::async_trait]
pub trait CourseStore: Send + Sync {
    /// Inserts one course and returns the row as stored.
    async fn insert_course(&self, course: &CourseRow) -> Result<CourseRow>;

    /// Inserts all holes of a course in a single statement.
    async fn insert_holes(&self, holes: &[HoleRow]) -> Result<()>;

    fn name(&self) -> &'static str;
}
