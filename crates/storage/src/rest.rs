use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};
use crate::models::{CourseRow, HoleRow};
use crate::store::CourseStore;

const COURSES_TABLE: &str = "courses";
const HOLES_TABLE: &str = "course_holes";

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Course store backed by a PostgREST endpoint (a Supabase project URL plus
/// its anon or service key).
pub struct RestStore {
    base_url: String,
    api_key: String,
    client: Client,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        table: &str,
        body: &T,
        prefer: &str,
    ) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", prefer)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(rejection(status, &body));
        }

        Ok(response)
    }
}

fn rejection(status: StatusCode, body: &str) -> StorageError {
    let parsed = serde_json::from_str::<PostgrestError>(body).ok();

    let (code, message) = match parsed {
        Some(err) => {
            let mut message = err.message.unwrap_or_else(|| status.to_string());
            if let Some(details) = err.details.filter(|d| !d.is_empty()) {
                message = format!("{} ({})", message, details);
            }
            if let Some(hint) = err.hint.filter(|h| !h.is_empty()) {
                message = format!("{} hint: {}", message, hint);
            }
            (err.code, message)
        }
        None if body.trim().is_empty() => (None, status.to_string()),
        None => (None, body.trim().to_string()),
    };

    // A conflict without a SQLSTATE is still a constraint problem, just an
    // unidentified one.
    if status == StatusCode::CONFLICT && code.is_none() {
        return StorageError::ConstraintViolation(message);
    }

    StorageError::Rejected {
        status: status.as_u16(),
        code,
        message,
    }
}

#[async_trait::async_trait]
impl CourseStore for RestStore {
    async fn insert_course(&self, course: &CourseRow) -> Result<CourseRow> {
        let response = self
            .post(COURSES_TABLE, std::slice::from_ref(course), "return=representation")
            .await?;

        let mut rows = response.json::<Vec<CourseRow>>().await?;
        if rows.is_empty() {
            return Err(StorageError::NotFound);
        }

        Ok(rows.swap_remove(0))
    }

    async fn insert_holes(&self, holes: &[HoleRow]) -> Result<()> {
        self.post(HOLES_TABLE, holes, "return=minimal").await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "postgrest"
    }
}
