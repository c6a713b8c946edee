use storage::store::CourseStore;

use crate::config::ImportConfig;
use crate::progress::{ProgressEvent, ProgressLog, ProgressSink};
use crate::sources::golfcourseapi::{CourseDetail, CourseSummary};
use crate::traits::CourseSource;
use crate::validator::DetailValidator;
use crate::writer::CourseWriter;

/// Totals of one run. Only successful inserts are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub courses_added: usize,
    pub holes_added: usize,
    pub terms_searched: usize,
    pub details_requested: usize,
    pub failures: usize,
}

/// Search → detail → transform → insert, strictly in sequence.
///
/// Nothing escapes a step: API and store failures are logged through the sink
/// and the run moves on to the next course or term.
pub struct ImportPipeline<'a, C: CourseSource + ?Sized, S: CourseStore + ?Sized> {
    source: &'a C,
    store: &'a S,
    config: ImportConfig,
}

impl<'a, C: CourseSource + ?Sized, S: CourseStore + ?Sized> ImportPipeline<'a, C, S> {
    pub fn new(source: &'a C, store: &'a S, config: ImportConfig) -> Self {
        Self {
            source,
            store,
            config,
        }
    }

    pub async fn run(&self, sink: &mut dyn ProgressSink) -> ImportSummary {
        let mut log = ProgressLog::new(sink);
        let mut summary = ImportSummary::default();
        let cap = self.config.max_courses_per_term.get();

        log.emit(ProgressEvent::RunStarted {
            terms: self.config.terms.len(),
            max_per_term: cap,
        });

        for term in &self.config.terms {
            let courses = self.search_courses(term.as_str(), &mut log).await;
            summary.terms_searched += 1;

            for course in courses.iter().take(cap) {
                let Some(course_id) = course.id else {
                    log.emit(ProgressEvent::MissingCourseId {
                        term: term.as_str().to_string(),
                        name: course.display_name(),
                    });
                    self.pause().await;
                    continue;
                };

                summary.details_requested += 1;

                if let Some(detail) = self.course_details(course_id, &mut log).await {
                    let writer = CourseWriter::new(self.store);

                    if let Some(inserted) = writer.insert_course(&detail, &mut log).await {
                        let holes = detail.main_holes();
                        if writer
                            .insert_course_holes(inserted.id, holes, &mut log)
                            .await
                        {
                            summary.holes_added += holes.len();
                        }

                        // Counted even when the holes did not make it in.
                        summary.courses_added += 1;
                    }
                }

                self.pause().await;
            }
        }

        summary.failures = log.failures();
        log.emit(ProgressEvent::RunCompleted { summary });

        summary
    }

    /// Empty on any failure.
    async fn search_courses(&self, term: &str, log: &mut ProgressLog<'_>) -> Vec<CourseSummary> {
        log.emit(ProgressEvent::Searching {
            term: term.to_string(),
        });

        match self.source.search(term).await {
            Ok(courses) => {
                log.emit(ProgressEvent::SearchCompleted {
                    term: term.to_string(),
                    found: courses.len(),
                });
                courses
            }
            Err(e) => {
                log.emit(ProgressEvent::SearchFailed {
                    term: term.to_string(),
                    error: e.to_string(),
                });
                Vec::new()
            }
        }
    }

    /// `None` when the fetch fails or the payload does not validate.
    async fn course_details(
        &self,
        course_id: i64,
        log: &mut ProgressLog<'_>,
    ) -> Option<CourseDetail> {
        log.emit(ProgressEvent::FetchingDetails { course_id });

        let detail = match self.source.course_details(course_id).await {
            Ok(detail) => detail,
            Err(e) => {
                log.emit(ProgressEvent::DetailsFailed {
                    course_id,
                    error: e.to_string(),
                });
                return None;
            }
        };

        match DetailValidator::validate(&detail) {
            Ok(report) => {
                for warning in report.warnings {
                    log.emit(ProgressEvent::ValidationWarning { course_id, warning });
                }
                log.emit(ProgressEvent::DetailsFetched {
                    course_id,
                    name: detail.display_name(),
                });
                Some(detail)
            }
            Err(e) => {
                log.emit(ProgressEvent::DetailsFailed {
                    course_id,
                    error: e.to_string(),
                });
                None
            }
        }
    }

    async fn pause(&self) {
        if !self.config.request_delay.is_zero() {
            tokio::time::sleep(self.config.request_delay).await;
        }
    }
}
