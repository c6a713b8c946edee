mod course;
mod course_hole;

pub use course::CourseRow;
pub use course_hole::HoleRow;
