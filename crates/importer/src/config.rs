use std::time::Duration;

use crate::sources::golfcourseapi::SearchTerm;
use crate::{ImporterError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://api.golfcourseapi.com";

pub const DEFAULT_REQUEST_DELAY_MS: u64 = 2500;

/// Pause after every course attempt, successful or not.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(DEFAULT_REQUEST_DELAY_MS);

/// How many search results per term get imported. Only 1, 2, 3 and 5 are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoursesPerTerm(usize);

impl CoursesPerTerm {
    pub const ALLOWED: [usize; 4] = [1, 2, 3, 5];

    pub fn new(value: usize) -> Result<Self> {
        if Self::ALLOWED.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ImporterError::ConfigError(format!(
                "Invalid courses per term: {}. Allowed: {}",
                value,
                Self::ALLOWED
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for CoursesPerTerm {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<usize> for CoursesPerTerm {
    type Error = ImporterError;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

impl std::str::FromStr for CoursesPerTerm {
    type Err = ImporterError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<usize>().map_err(|_| {
            ImporterError::ConfigError(format!("Courses per term must be a number, got '{}'", s))
        })?;
        Self::new(value)
    }
}

impl std::fmt::Display for CoursesPerTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub max_courses_per_term: CoursesPerTerm,
    pub request_delay: Duration,
    pub terms: Vec<SearchTerm>,
}

impl ImportConfig {
    pub fn new(max_courses_per_term: CoursesPerTerm) -> Self {
        Self {
            max_courses_per_term,
            request_delay: DEFAULT_REQUEST_DELAY,
            terms: SearchTerm::all().to_vec(),
        }
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Restricts the run to `terms`. An empty list keeps the full fixed list.
    pub fn with_terms(mut self, terms: Vec<SearchTerm>) -> Self {
        if !terms.is_empty() {
            self.terms = terms;
        }
        self
    }

    /// Upper bound on the number of courses a run can import.
    pub fn max_courses(&self) -> usize {
        self.terms.len() * self.max_courses_per_term.get()
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::new(CoursesPerTerm::default())
    }
}

/// Where and how to reach the course lookup API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let api_key = api_key.into().trim().to_string();

        if api_key.is_empty() {
            return Err(ImporterError::ConfigError(
                "Golf course API key is required".to_string(),
            ));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ImporterError::ConfigError(format!(
                "API base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        Ok(Self { base_url, api_key })
    }
}
