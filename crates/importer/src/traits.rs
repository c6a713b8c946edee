use crate::Result;
use crate::sources::golfcourseapi::{CourseDetail, CourseSummary};

/// Read side of an import: where course summaries and details come from.
#[async_trait::async_trait]
pub trait CourseSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<CourseSummary>>;

    async fn course_details(&self, course_id: i64) -> Result<CourseDetail>;

    fn name(&self) -> &'static str;
}
