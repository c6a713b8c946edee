pub mod config;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod sources;
pub mod traits;
pub mod transformer;
pub mod validator;
pub mod writer;

#[cfg(test)]
mod test_support;

pub use config::{ApiConfig, CoursesPerTerm, ImportConfig};
pub use error::{ImporterError, Result};
pub use pipeline::{ImportPipeline, ImportSummary};
pub use progress::{ProgressEvent, ProgressSink};
pub use traits::CourseSource;

// Re-export GolfCourseAPI types
pub use sources::golfcourseapi::{GolfCourseApiClient, SearchTerm};
