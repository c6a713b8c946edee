use std::fmt;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::pipeline::ImportSummary;

/// One human-readable step of an import run.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    RunStarted {
        terms: usize,
        max_per_term: usize,
    },
    Searching {
        term: String,
    },
    SearchCompleted {
        term: String,
        found: usize,
    },
    SearchFailed {
        term: String,
        error: String,
    },
    MissingCourseId {
        term: String,
        name: String,
    },
    FetchingDetails {
        course_id: i64,
    },
    DetailsFetched {
        course_id: i64,
        name: String,
    },
    DetailsFailed {
        course_id: i64,
        error: String,
    },
    ValidationWarning {
        course_id: i64,
        warning: String,
    },
    InsertingCourse {
        name: String,
    },
    CourseInserted {
        name: String,
        id: Uuid,
    },
    CourseInsertFailed {
        name: String,
        error: String,
    },
    NoHoles {
        course_id: Uuid,
    },
    InsertingHoles {
        course_id: Uuid,
        count: usize,
    },
    HolesInserted {
        course_id: Uuid,
        count: usize,
    },
    HoleInsertFailed {
        course_id: Uuid,
        error: String,
    },
    RunCompleted {
        summary: ImportSummary,
    },
}

impl ProgressEvent {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::SearchFailed { .. }
                | Self::MissingCourseId { .. }
                | Self::DetailsFailed { .. }
                | Self::CourseInsertFailed { .. }
                | Self::HoleInsertFailed { .. }
        )
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RunStarted {
                terms,
                max_per_term,
            } => write!(
                f,
                "Starting database population process ({} terms, up to {} courses each)...",
                terms, max_per_term
            ),
            Self::Searching { term } => {
                write!(f, "Searching for courses with term: \"{}\"...", term)
            }
            Self::SearchCompleted { term, found } => {
                write!(f, "Found {} courses for \"{}\"", found, term)
            }
            Self::SearchFailed { term, error } => {
                write!(f, "Error searching courses for \"{}\": {}", term, error)
            }
            Self::MissingCourseId { term, name } => write!(
                f,
                "Skipping \"{}\" found for \"{}\": no course ID in search result",
                name, term
            ),
            Self::FetchingDetails { course_id } => {
                write!(f, "Fetching details for course ID: {}...", course_id)
            }
            Self::DetailsFetched { name, .. } => {
                write!(f, "Successfully fetched details for {}", name)
            }
            Self::DetailsFailed { course_id, error } => {
                write!(f, "Error fetching details for course {}: {}", course_id, error)
            }
            Self::ValidationWarning { course_id, warning } => {
                write!(f, "Warning for course {}: {}", course_id, warning)
            }
            Self::InsertingCourse { name } => write!(f, "Inserting course: {}", name),
            Self::CourseInserted { name, id } => write!(
                f,
                "Successfully inserted course: {} with ID: {}",
                name, id
            ),
            Self::CourseInsertFailed { name, error } => {
                write!(f, "Error inserting course {}: {}", name, error)
            }
            Self::NoHoles { course_id } => {
                write!(f, "No holes data available for course {}", course_id)
            }
            Self::InsertingHoles { course_id, count } => write!(
                f,
                "Preparing to insert {} holes for course {}",
                count, course_id
            ),
            Self::HolesInserted { course_id, count } => write!(
                f,
                "Successfully inserted {} holes for course {}",
                count, course_id
            ),
            Self::HoleInsertFailed { course_id, error } => {
                write!(f, "Error inserting holes for course {}: {}", course_id, error)
            }
            Self::RunCompleted { summary } => write!(
                f,
                "Database population complete! Successfully added {} courses with {} holes to the database",
                summary.courses_added, summary.holes_added
            ),
        }
    }
}

/// Receives progress events as a run emits them.
pub trait ProgressSink: Send {
    fn emit(&mut self, event: ProgressEvent);
}

impl ProgressSink for Vec<ProgressEvent> {
    fn emit(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

impl ProgressSink for UnboundedSender<ProgressEvent> {
    fn emit(&mut self, event: ProgressEvent) {
        // The run goes on even if nobody is listening anymore.
        let _ = self.send(event);
    }
}

/// Wraps a sink: mirrors every event to `tracing` and counts failures.
pub struct ProgressLog<'a> {
    sink: &'a mut dyn ProgressSink,
    failures: usize,
}

impl<'a> ProgressLog<'a> {
    pub fn new(sink: &'a mut dyn ProgressSink) -> Self {
        Self { sink, failures: 0 }
    }

    pub fn emit(&mut self, event: ProgressEvent) {
        if event.is_failure() {
            self.failures += 1;
            warn!("{}", event);
        } else if matches!(event, ProgressEvent::RunCompleted { .. }) {
            info!("{}", event);
        } else {
            debug!("{}", event);
        }

        self.sink.emit(event);
    }

    pub fn failures(&self) -> usize {
        self.failures
    }
}
