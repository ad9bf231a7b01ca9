//! Course repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Course, CourseDetail},
};

use super::order_by;

const DETAIL_SELECT: &str = r#"
    SELECT c.id, c.course_code, c.course_name, c.department_id,
           d.department_name, c.credits, c.semester, c.assigned_faculty,
           st.name AS faculty_name, c.created_at, c.updated_at
    FROM courses c
    LEFT JOIN departments d ON d.id = c.department_id AND NOT d.is_deleted
    LEFT JOIN staff st ON st.id = c.assigned_faculty AND NOT st.is_deleted
"#;

/// Repository for course database operations
pub struct CourseRepository;

impl CourseRepository {
    /// Create a new course
    pub async fn create(
        pool: &PgPool,
        course_code: &str,
        course_name: &str,
        department_id: Option<&Uuid>,
        credits: i32,
        semester: i32,
        assigned_faculty: Option<&Uuid>,
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (
                course_code, course_name, department_id, credits, semester,
                assigned_faculty
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(course_code)
        .bind(course_name)
        .bind(department_id)
        .bind(credits)
        .bind(semester)
        .bind(assigned_faculty)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Find a live course by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            r#"SELECT * FROM courses WHERE id = $1 AND NOT is_deleted"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(course)
    }

    /// Find a live course with department and faculty names
    pub async fn find_detail_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<CourseDetail>> {
        let sql = format!("{DETAIL_SELECT} WHERE c.id = $1 AND NOT c.is_deleted");

        let detail = sqlx::query_as::<_, CourseDetail>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(detail)
    }

    /// List live courses with equality filters, search and ordering
    pub async fn list(
        pool: &PgPool,
        department_id: Option<&Uuid>,
        semester: Option<i32>,
        assigned_faculty: Option<&Uuid>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<CourseDetail>> {
        let order = order_by(ordering, &["created_at", "course_name"], "course_code ASC");
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE NOT c.is_deleted
              AND ($1::uuid IS NULL OR c.department_id = $1)
              AND ($2::int IS NULL OR c.semester = $2)
              AND ($3::uuid IS NULL OR c.assigned_faculty = $3)
              AND ($4::text IS NULL OR c.course_name ILIKE $4 OR c.course_code ILIKE $4)
            ORDER BY c.{order}"#
        );

        let courses = sqlx::query_as::<_, CourseDetail>(&sql)
            .bind(department_id)
            .bind(semester)
            .bind(assigned_faculty)
            .bind(search.map(|s| format!("%{}%", s)))
            .fetch_all(pool)
            .await?;

        Ok(courses)
    }

    /// Update a course; absent values keep their current value
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        course_code: Option<&str>,
        course_name: Option<&str>,
        department_id: Option<&Uuid>,
        credits: Option<i32>,
        semester: Option<i32>,
        assigned_faculty: Option<&Uuid>,
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET course_code = COALESCE($2, course_code),
                course_name = COALESCE($3, course_name),
                department_id = COALESCE($4, department_id),
                credits = COALESCE($5, credits),
                semester = COALESCE($6, semester),
                assigned_faculty = COALESCE($7, assigned_faculty),
                updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(course_code)
        .bind(course_name)
        .bind(department_id)
        .bind(credits)
        .bind(semester)
        .bind(assigned_faculty)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Soft-delete a course; returns false if it was already gone
    pub async fn soft_delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE courses SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a course code is taken among live rows
    pub async fn code_exists(
        pool: &PgPool,
        course_code: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM courses
                WHERE course_code = $1 AND NOT is_deleted
                  AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(course_code)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Count live courses (dashboard)
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM courses WHERE NOT is_deleted"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
