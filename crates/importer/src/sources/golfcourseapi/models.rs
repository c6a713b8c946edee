use serde::{Deserialize, Serialize};

/// Body of `GET /v1/search`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub courses: Option<Vec<CourseSummary>>,
}

impl SearchResponse {
    pub fn into_courses(self) -> Vec<CourseSummary> {
        self.courses.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CourseSummary {
    /// Missing on some search hits; such a hit cannot be looked up.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// Body of `GET /v1/courses/{id}`. The API has served the record both bare
/// and wrapped in a `course` key.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum DetailResponse {
    Wrapped { course: CourseDetail },
    Bare(CourseDetail),
}

impl DetailResponse {
    pub fn into_detail(self) -> CourseDetail {
        match self {
            Self::Wrapped { course } => course,
            Self::Bare(course) => course,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CourseDetail {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub tees: Option<Tees>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Location {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Tee configurations keyed by gender.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Tees {
    #[serde(default)]
    pub male: Option<Vec<Tee>>,
    #[serde(default)]
    pub female: Option<Vec<Tee>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Tee {
    #[serde(default)]
    pub tee_name: Option<String>,
    #[serde(default)]
    pub course_rating: Option<f64>,
    #[serde(default)]
    pub slope_rating: Option<i32>,
    #[serde(default)]
    pub total_yards: Option<i32>,
    #[serde(default)]
    pub number_of_holes: Option<i32>,
    #[serde(default)]
    pub par_total: Option<i32>,
    #[serde(default)]
    pub holes: Option<Vec<Hole>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hole {
    #[serde(default)]
    pub par: Option<i32>,
    #[serde(default)]
    pub yardage: Option<i32>,
    #[serde(default)]
    pub handicap: Option<i32>,
}

impl CourseSummary {
    pub fn display_name(&self) -> String {
        join_name(self.club_name.as_deref(), self.course_name.as_deref())
    }
}

fn join_name(club_name: Option<&str>, course_name: Option<&str>) -> String {
    let parts: Vec<&str> = [club_name, course_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    parts.join(" - ")
}

impl CourseDetail {
    /// `"<club> - <course>"`, dropping whichever half is missing.
    pub fn display_name(&self) -> String {
        join_name(self.club_name.as_deref(), self.course_name.as_deref())
    }

    /// Tee list under `male`, or `female` when `male` is absent.
    pub fn preferred_tees(&self) -> &[Tee] {
        self.tees
            .as_ref()
            .and_then(|tees| tees.male.as_deref().or(tees.female.as_deref()))
            .unwrap_or(&[])
    }

    /// First tee of the preferred list; the source of every aggregate field.
    pub fn main_tee(&self) -> Option<&Tee> {
        self.preferred_tees().first()
    }

    /// Holes of the main tee, in source order.
    pub fn main_holes(&self) -> &[Hole] {
        self.main_tee()
            .and_then(|tee| tee.holes.as_deref())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEBBLE_BEACH: &str = r#"{
        "id": 12241,
        "club_name": "Pebble Beach Golf Links",
        "course_name": "Pebble Beach",
        "location": {
            "address": "1700 17 Mile Dr, Pebble Beach, CA 93953, USA",
            "city": "Pebble Beach",
            "state": "CA",
            "country": "United States",
            "latitude": 36.5683,
            "longitude": -121.9497
        },
        "tees": {
            "female": [
                {"tee_name": "Red", "course_rating": 71.6, "slope_rating": 128, "par_total": 72,
                 "number_of_holes": 2, "holes": [{"par": 4, "yardage": 330}, {"par": 5, "yardage": 440}]}
            ],
            "male": [
                {"tee_name": "Blue", "course_rating": 74.9, "slope_rating": 144, "par_total": 72,
                 "number_of_holes": 3, "total_yards": 6828,
                 "holes": [
                    {"par": 4, "yardage": 380, "handicap": 8},
                    {"par": 5, "yardage": 502, "handicap": 10},
                    {"par": 4, "yardage": 404, "handicap": 12}
                 ]},
                {"tee_name": "White", "course_rating": 72.7, "slope_rating": 137, "par_total": 72,
                 "number_of_holes": 0, "holes": []}
            ]
        }
    }"#;

    #[test]
    fn test_search_response_without_courses() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_courses().is_empty());

        let response: SearchResponse = serde_json::from_str(r#"{"courses": null}"#).unwrap();
        assert!(response.into_courses().is_empty());
    }

    #[test]
    fn test_search_response_with_courses() {
        let body = r#"{"courses": [
            {"id": 12241, "club_name": "Pebble Beach Golf Links", "course_name": "Pebble Beach"},
            {"id": 8545, "club_name": "Spyglass Hill Golf Course", "course_name": "Spyglass Hill", "location": {"city": "Pebble Beach"}}
        ]}"#;
        let courses = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_courses();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, Some(12241));
        assert_eq!(
            courses[1].location.as_ref().and_then(|l| l.city.as_deref()),
            Some("Pebble Beach")
        );
    }

    #[test]
    fn test_search_hit_without_id_keeps_the_others() {
        let body = r#"{"courses": [
            {"id": 1, "club_name": "Bethpage State Park", "course_name": "Black"},
            {"id": null, "club_name": "Bethpage State Park", "course_name": "Red"},
            {"club_name": "Bethpage State Park", "course_name": "Blue"},
            {"id": 3, "club_name": "Bethpage State Park", "course_name": "Green"}
        ]}"#;
        let courses = serde_json::from_str::<SearchResponse>(body)
            .unwrap()
            .into_courses();

        assert_eq!(
            courses.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![Some(1), None, None, Some(3)]
        );
    }

    #[test]
    fn test_detail_response_bare_and_wrapped() {
        let bare = serde_json::from_str::<DetailResponse>(PEBBLE_BEACH)
            .unwrap()
            .into_detail();
        let wrapped_body = format!(r#"{{"course": {}}}"#, PEBBLE_BEACH);
        let wrapped = serde_json::from_str::<DetailResponse>(&wrapped_body)
            .unwrap()
            .into_detail();

        assert_eq!(bare, wrapped);
        assert_eq!(bare.id, Some(12241));
    }

    #[test]
    fn test_main_tee_prefers_male() {
        let detail = serde_json::from_str::<DetailResponse>(PEBBLE_BEACH)
            .unwrap()
            .into_detail();

        let tee = detail.main_tee().unwrap();
        assert_eq!(tee.tee_name.as_deref(), Some("Blue"));
        assert_eq!(detail.preferred_tees().len(), 2);
        assert_eq!(detail.main_holes().len(), 3);
        assert_eq!(detail.display_name(), "Pebble Beach Golf Links - Pebble Beach");
    }

    #[test]
    fn test_main_tee_falls_back_to_female() {
        let mut detail = serde_json::from_str::<DetailResponse>(PEBBLE_BEACH)
            .unwrap()
            .into_detail();
        if let Some(tees) = detail.tees.as_mut() {
            tees.male = None;
        }

        assert_eq!(
            detail.main_tee().and_then(|t| t.tee_name.as_deref()),
            Some("Red")
        );
        assert_eq!(detail.main_holes().len(), 2);
    }

    #[test]
    fn test_no_tees() {
        let detail: CourseDetail =
            serde_json::from_str(r#"{"club_name": "Augusta National", "tees": {}}"#).unwrap();

        assert!(detail.preferred_tees().is_empty());
        assert!(detail.main_tee().is_none());
        assert!(detail.main_holes().is_empty());
    }

    #[test]
    fn test_display_name_with_missing_half() {
        let detail = CourseDetail {
            club_name: Some("Augusta National Golf Club".to_string()),
            ..Default::default()
        };
        assert_eq!(detail.display_name(), "Augusta National Golf Club");
    }
}
