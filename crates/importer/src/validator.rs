use crate::sources::golfcourseapi::CourseDetail;
use crate::{ImporterError, Result};
use tracing::warn;

/// Boundary checks on a course detail before it is turned into rows.
pub struct DetailValidator;

impl DetailValidator {
    pub fn validate(detail: &CourseDetail) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if detail.display_name().is_empty() {
            report
                .errors
                .push("Course has neither a club name nor a course name".to_string());
        }

        match &detail.location {
            None => report
                .warnings
                .push("Course location is not specified".to_string()),
            Some(location) => {
                if location.latitude.is_none() || location.longitude.is_none() {
                    report
                        .warnings
                        .push("Course coordinates are incomplete".to_string());
                }
                if let Some(latitude) = location
                    .latitude
                    .filter(|lat| !(-90.0..=90.0).contains(lat))
                {
                    report
                        .warnings
                        .push(format!("Latitude out of range: {}", latitude));
                }
                if let Some(longitude) = location
                    .longitude
                    .filter(|lon| !(-180.0..=180.0).contains(lon))
                {
                    report
                        .warnings
                        .push(format!("Longitude out of range: {}", longitude));
                }
            }
        }

        match detail.main_tee() {
            None => report
                .warnings
                .push("No male or female tee data; defaulting to 18 holes".to_string()),
            Some(tee) => {
                let holes = detail.main_holes().len();
                if holes == 0 {
                    report
                        .warnings
                        .push("Main tee has no hole data".to_string());
                }
                let declared = tee
                    .number_of_holes
                    .filter(|n| *n > 0 && holes > 0 && usize::try_from(*n).ok() != Some(holes));
                if let Some(expected) = declared {
                    report.warnings.push(format!(
                        "Main tee declares {} holes but lists {}",
                        expected, holes
                    ));
                }
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
