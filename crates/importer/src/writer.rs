use storage::error::StorageError;
use storage::models::CourseRow;
use storage::store::CourseStore;
use uuid::Uuid;

use crate::progress::{ProgressEvent, ProgressLog};
use crate::sources::golfcourseapi::{CourseDetail, Hole};
use crate::transformer::CourseTransformer;

/// Writes one course and its holes. Store failures are reported to the log
/// and never returned.
pub struct CourseWriter<'a, S: CourseStore + ?Sized> {
    store: &'a S,
    transformer: CourseTransformer,
}

impl<'a, S: CourseStore + ?Sized> CourseWriter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_transformer(store, CourseTransformer::new())
    }

    pub fn with_transformer(store: &'a S, transformer: CourseTransformer) -> Self {
        Self { store, transformer }
    }

    /// Returns the stored row, or `None` if the store refused it.
    pub async fn insert_course(
        &self,
        detail: &CourseDetail,
        log: &mut ProgressLog<'_>,
    ) -> Option<CourseRow> {
        let row = self.transformer.course_row(detail);

        log.emit(ProgressEvent::InsertingCourse {
            name: row.name.clone(),
        });

        match self.store.insert_course(&row).await {
            Ok(stored) => {
                log.emit(ProgressEvent::CourseInserted {
                    name: row.name,
                    id: stored.id,
                });
                Some(stored)
            }
            Err(e) => {
                log.emit(ProgressEvent::CourseInsertFailed {
                    name: row.name,
                    error: describe(&e),
                });
                None
            }
        }
    }

    /// Bulk-inserts the holes of `course_id`. An empty list is a no-op that
    /// returns `false` without touching the store.
    pub async fn insert_course_holes(
        &self,
        course_id: Uuid,
        holes: &[Hole],
        log: &mut ProgressLog<'_>,
    ) -> bool {
        if holes.is_empty() {
            log.emit(ProgressEvent::NoHoles { course_id });
            return false;
        }

        log.emit(ProgressEvent::InsertingHoles {
            course_id,
            count: holes.len(),
        });

        let rows = self.transformer.hole_rows(course_id, holes);

        match self.store.insert_holes(&rows).await {
            Ok(()) => {
                log.emit(ProgressEvent::HolesInserted {
                    course_id,
                    count: rows.len(),
                });
                true
            }
            Err(e) => {
                log.emit(ProgressEvent::HoleInsertFailed {
                    course_id,
                    error: describe(&e),
                });
                false
            }
        }
    }
}

fn describe(error: &StorageError) -> String {
    if error.is_unique_violation() {
        format!("{} (row already exists)", error)
    } else if error.is_foreign_key_violation() {
        format!("{} (owning course is missing)", error)
    } else {
        error.to_string()
    }
}
