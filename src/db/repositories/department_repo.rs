//! Department repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Department, DepartmentDetail},
};

use super::order_by;

const DETAIL_SELECT: &str = r#"
    SELECT d.id, d.department_name, d.department_code, d.hod, d.description,
           (SELECT COUNT(*) FROM students s
             WHERE s.department_id = d.id AND NOT s.is_deleted) AS total_students,
           (SELECT COUNT(*) FROM staff st
             WHERE st.department_id = d.id AND NOT st.is_deleted) AS total_staff,
           d.created_at, d.updated_at
    FROM departments d
"#;

/// Repository for department database operations
pub struct DepartmentRepository;

impl DepartmentRepository {
    /// Create a new department
    pub async fn create(
        pool: &PgPool,
        department_name: &str,
        department_code: &str,
        hod: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Department> {
        let department = sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO departments (department_name, department_code, hod, description)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(department_name)
        .bind(department_code)
        .bind(hod)
        .bind(description)
        .fetch_one(pool)
        .await?;

        Ok(department)
    }

    /// Find a live department by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Department>> {
        let department = sqlx::query_as::<_, Department>(
            r#"SELECT * FROM departments WHERE id = $1 AND NOT is_deleted"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(department)
    }

    /// Find a live department with membership counts
    pub async fn find_detail_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<DepartmentDetail>> {
        let sql = format!("{DETAIL_SELECT} WHERE d.id = $1 AND NOT d.is_deleted");

        let detail = sqlx::query_as::<_, DepartmentDetail>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(detail)
    }

    /// List live departments with search and whitelisted ordering
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<DepartmentDetail>> {
        let order = order_by(
            ordering,
            &["created_at", "department_name"],
            "department_name ASC",
        );
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE NOT d.is_deleted
              AND ($1::text IS NULL OR d.department_name ILIKE $1 OR d.department_code ILIKE $1)
            ORDER BY d.{order}"#
        );

        let departments = sqlx::query_as::<_, DepartmentDetail>(&sql)
            .bind(search.map(|s| format!("%{}%", s)))
            .fetch_all(pool)
            .await?;

        Ok(departments)
    }

    /// Update a department; absent values keep their current value
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        department_name: Option<&str>,
        department_code: Option<&str>,
        hod: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Department> {
        let department = sqlx::query_as::<_, Department>(
            r#"
            UPDATE departments
            SET department_name = COALESCE($2, department_name),
                department_code = COALESCE($3, department_code),
                hod = COALESCE($4, hod),
                description = COALESCE($5, description),
                updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(department_name)
        .bind(department_code)
        .bind(hod)
        .bind(description)
        .fetch_one(pool)
        .await?;

        Ok(department)
    }

    /// Soft-delete a department; returns false if it was already gone
    pub async fn soft_delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE departments SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a department code is taken among live rows
    pub async fn code_exists(
        pool: &PgPool,
        department_code: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM departments
                WHERE department_code = $1 AND NOT is_deleted
                  AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(department_code)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Check whether a department name is taken among live rows
    pub async fn name_exists(
        pool: &PgPool,
        department_name: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM departments
                WHERE department_name = $1 AND NOT is_deleted
                  AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(department_name)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Count live departments (dashboard)
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM departments WHERE NOT is_deleted"#)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}
