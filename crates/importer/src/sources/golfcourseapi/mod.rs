mod client;
mod models;
mod terms;

pub use client::GolfCourseApiClient;
pub use models::*;
pub use terms::SearchTerm;

use crate::{Result, traits::CourseSource};

#[async_trait::async_trait]
impl CourseSource for GolfCourseApiClient {
    async fn search(&self, query: &str) -> Result<Vec<CourseSummary>> {
        GolfCourseApiClient::search(self, query).await
    }

    async fn course_details(&self, course_id: i64) -> Result<CourseDetail> {
        self.fetch_course(course_id).await
    }

    fn name(&self) -> &'static str {
        "GolfCourseAPI"
    }
}
