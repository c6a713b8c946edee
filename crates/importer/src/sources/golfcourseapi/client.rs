use std::time::Duration;

use reqwest::header::AUTHORIZATION;

use super::models::{CourseDetail, CourseSummary, DetailResponse, SearchResponse};
use crate::config::ApiConfig;
use crate::error::{ImporterError, Result};

pub struct GolfCourseApiClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GolfCourseApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("golf-import/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    pub async fn search(&self, query: &str) -> Result<Vec<CourseSummary>> {
        let url = format!("{}/v1/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("search_query", query)])
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        let data = ensure_success(response)?
            .json::<SearchResponse>()
            .await?;

        Ok(data.into_courses())
    }

    pub async fn fetch_course(&self, course_id: i64) -> Result<CourseDetail> {
        let url = format!("{}/v1/courses/{}", self.base_url, course_id);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await?;

        let data = ensure_success(response)?
            .json::<DetailResponse>()
            .await?;

        Ok(data.into_detail())
    }

    fn authorization(&self) -> String {
        format!("Key {}", self.api_key)
    }
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(ImporterError::ApiError {
            status: status.as_u16(),
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_BASE_URL;

    #[test]
    fn test_authorization_header_uses_key_scheme() {
        let config = ApiConfig::new(DEFAULT_API_BASE_URL, "abc123").unwrap();
        let client = GolfCourseApiClient::new(&config).unwrap();

        assert_eq!(client.authorization(), "Key abc123");
    }

    #[tokio::test]
    #[ignore] // Needs GOLF_COURSE_API_KEY and network access
    async fn test_live_search() {
        let key = std::env::var("GOLF_COURSE_API_KEY").unwrap();
        let config = ApiConfig::new(DEFAULT_API_BASE_URL, key).unwrap();
        let client = GolfCourseApiClient::new(&config).unwrap();

        let courses = client.search("Pebble Beach").await.unwrap();
        assert!(!courses.is_empty());

        let course_id = courses.iter().find_map(|c| c.id).unwrap();
        let detail = client.fetch_course(course_id).await.unwrap();
        assert!(!detail.display_name().is_empty());
    }
}
