//! Hand-written fakes for the source and store seams.

use std::collections::HashMap;
use std::sync::Mutex;

use storage::error::StorageError;
use storage::models::{CourseRow, HoleRow};
use storage::store::CourseStore;

use crate::error::{ImporterError, Result};
use crate::sources::golfcourseapi::{CourseDetail, CourseSummary, Hole, Location, Tee, Tees};
use crate::traits::CourseSource;

/// A course detail whose main (male) tee lists `holes` holes.
pub fn course_detail(id: i64, holes: usize) -> CourseDetail {
    let hole_list: Vec<Hole> = (0..holes)
        .map(|index| Hole {
            par: Some(if index % 6 == 2 { 3 } else { 4 }),
            yardage: Some(350 + i32::try_from(index).unwrap_or(0) * 10),
            handicap: Some(i32::try_from(index).unwrap_or(0) + 1),
        })
        .collect();

    CourseDetail {
        id: Some(id),
        club_name: Some(format!("Club {}", id)),
        course_name: Some(format!("Course {}", id)),
        location: Some(Location {
            city: Some("Pebble Beach".to_string()),
            country: Some("United States".to_string()),
            latitude: Some(36.57),
            longitude: Some(-121.95),
            ..Default::default()
        }),
        tees: Some(Tees {
            male: Some(vec![Tee {
                tee_name: Some("Blue".to_string()),
                course_rating: Some(72.1),
                slope_rating: Some(131),
                number_of_holes: Some(i32::try_from(holes).unwrap_or(18)),
                par_total: Some(72),
                holes: Some(hole_list),
                ..Default::default()
            }]),
            female: None,
        }),
    }
}

pub fn summary(id: i64) -> CourseSummary {
    CourseSummary {
        id: Some(id),
        club_name: Some(format!("Club {}", id)),
        course_name: Some(format!("Course {}", id)),
        location: None,
    }
}

#[derive(Default)]
pub struct FakeSource {
    searches: HashMap<String, std::result::Result<Vec<CourseSummary>, u16>>,
    details: HashMap<i64, CourseDetail>,
    search_calls: Mutex<Vec<String>>,
    detail_calls: Mutex<Vec<i64>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// `term` finds the given course ids, each with an 18-hole detail.
    pub fn with_courses(mut self, term: &str, ids: &[i64]) -> Self {
        for id in ids {
            self.details.insert(*id, course_detail(*id, 18));
        }
        self.searches
            .insert(term.to_string(), Ok(ids.iter().copied().map(summary).collect()));
        self
    }

    /// `term` finds exactly `courses`. Every summary with an id gets an 18-hole detail.
    pub fn with_summaries(mut self, term: &str, courses: Vec<CourseSummary>) -> Self {
        for id in courses.iter().filter_map(|c| c.id) {
            self.details.insert(id, course_detail(id, 18));
        }
        self.searches.insert(term.to_string(), Ok(courses));
        self
    }

    pub fn with_failed_search(mut self, term: &str, status: u16) -> Self {
        self.searches.insert(term.to_string(), Err(status));
        self
    }

    pub fn with_detail(mut self, detail: CourseDetail) -> Self {
        if let Some(id) = detail.id {
            self.details.insert(id, detail);
        }
        self
    }

    pub fn without_detail(mut self, id: i64) -> Self {
        self.details.remove(&id);
        self
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> Vec<i64> {
        self.detail_calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CourseSource for FakeSource {
    async fn search(&self, query: &str) -> Result<Vec<CourseSummary>> {
        self.search_calls.lock().unwrap().push(query.to_string());
        match self.searches.get(query) {
            Some(Ok(courses)) => Ok(courses.clone()),
            Some(Err(status)) => Err(ImporterError::ApiError { status: *status }),
            None => Ok(Vec::new()),
        }
    }

    async fn course_details(&self, course_id: i64) -> Result<CourseDetail> {
        self.detail_calls.lock().unwrap().push(course_id);
        self.details
            .get(&course_id)
            .cloned()
            .ok_or(ImporterError::ApiError { status: 404 })
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

#[derive(Default)]
pub struct FakeStore {
    fail_courses: bool,
    fail_holes: bool,
    course_attempts: Mutex<usize>,
    hole_attempts: Mutex<usize>,
    courses: Mutex<Vec<CourseRow>>,
    hole_batches: Mutex<Vec<Vec<HoleRow>>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_courses(mut self) -> Self {
        self.fail_courses = true;
        self
    }

    pub fn failing_holes(mut self) -> Self {
        self.fail_holes = true;
        self
    }

    pub fn courses(&self) -> Vec<CourseRow> {
        self.courses.lock().unwrap().clone()
    }

    pub fn hole_batches(&self) -> Vec<Vec<HoleRow>> {
        self.hole_batches.lock().unwrap().clone()
    }

    pub fn course_insert_attempts(&self) -> usize {
        *self.course_attempts.lock().unwrap()
    }

    pub fn hole_insert_attempts(&self) -> usize {
        *self.hole_attempts.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl CourseStore for FakeStore {
    async fn insert_course(&self, course: &CourseRow) -> storage::Result<CourseRow> {
        *self.course_attempts.lock().unwrap() += 1;
        if self.fail_courses {
            return Err(StorageError::Rejected {
                status: 401,
                code: Some("42501".to_string()),
                message: "permission denied for table courses".to_string(),
            });
        }
        self.courses.lock().unwrap().push(course.clone());
        Ok(course.clone())
    }

    async fn insert_holes(&self, holes: &[HoleRow]) -> storage::Result<()> {
        *self.hole_attempts.lock().unwrap() += 1;
        if self.fail_holes {
            return Err(StorageError::ConstraintViolation(
                "hole_number out of range".to_string(),
            ));
        }
        self.hole_batches.lock().unwrap().push(holes.to_vec());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
