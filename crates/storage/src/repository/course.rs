use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::Result;
use crate::models::{CourseRow, HoleRow};
use crate::store::CourseStore;

pub struct CourseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CourseRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a course and return the stored row
    pub async fn create(&self, course: &CourseRow) -> Result<CourseRow> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses
                (id, name, address, city, state, country, latitude, longitude,
                 total_holes, par, rating, slope, aggregate_score, confidence_rating,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING id, name, address, city, state, country, latitude, longitude,
                      total_holes, par, rating, slope, aggregate_score, confidence_rating,
                      created_at, updated_at
            "#,
        )
        .bind(course.id)
        .bind(&course.name)
        .bind(&course.address)
        .bind(&course.city)
        .bind(&course.state)
        .bind(&course.country)
        .bind(course.latitude)
        .bind(course.longitude)
        .bind(course.total_holes)
        .bind(course.par)
        .bind(course.rating)
        .bind(course.slope)
        .bind(course.aggregate_score)
        .bind(course.confidence_rating)
        .bind(course.created_at)
        .bind(course.updated_at)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Insert every hole with one multi-row statement
    pub async fn create_holes(&self, holes: &[HoleRow]) -> Result<u64> {
        if holes.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "INSERT INTO course_holes \
             (id, course_id, hole_number, par, distance_yards, distance_meters, \
              handicap_index, created_at, updated_at) ",
        );

        builder.push_values(holes, |mut row, hole| {
            row.push_bind(hole.id)
                .push_bind(hole.course_id)
                .push_bind(hole.hole_number)
                .push_bind(hole.par)
                .push_bind(hole.distance_yards)
                .push_bind(hole.distance_meters)
                .push_bind(hole.handicap_index)
                .push_bind(hole.created_at)
                .push_bind(hole.updated_at);
        });

        let result = builder.build().execute(self.pool).await?;

        Ok(result.rows_affected())
    }
}

#[async_trait::async_trait]
impl CourseStore for CourseRepository<'_> {
    async fn insert_course(&self, course: &CourseRow) -> Result<CourseRow> {
        self.create(course).await
    }

    async fn insert_holes(&self, holes: &[HoleRow]) -> Result<()> {
        let inserted = self.create_holes(holes).await?;
        tracing::debug!("Inserted {} course_holes rows", inserted);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
