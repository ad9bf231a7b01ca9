//! Student repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Student, StudentDetail},
};

use super::order_by;

const DETAIL_SELECT: &str = r#"
    SELECT s.id, s.user_id, s.student_id, s.full_name, s.register_no,
           s.department_id, d.department_name, s.year, s.semester,
           s.email, s.phone, s.address, s.status, s.created_at, s.updated_at
    FROM students s
    LEFT JOIN departments d ON d.id = s.department_id AND NOT d.is_deleted
"#;

/// Repository for student database operations
pub struct StudentRepository;

impl StudentRepository {
    /// Create a new student
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: Option<&Uuid>,
        student_id: &str,
        full_name: &str,
        register_no: &str,
        department_id: Option<&Uuid>,
        year: i32,
        semester: i32,
        email: &str,
        phone: &str,
        address: &str,
        status: &str,
    ) -> AppResult<Student> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (
                user_id, student_id, full_name, register_no, department_id,
                year, semester, email, phone, address, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(student_id)
        .bind(full_name)
        .bind(register_no)
        .bind(department_id)
        .bind(year)
        .bind(semester)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(student)
    }

    /// Find a live student by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            r#"SELECT * FROM students WHERE id = $1 AND NOT is_deleted"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(student)
    }

    /// Find a live student with its department name
    pub async fn find_detail_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<StudentDetail>> {
        let sql = format!("{DETAIL_SELECT} WHERE s.id = $1 AND NOT s.is_deleted");

        let detail = sqlx::query_as::<_, StudentDetail>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(detail)
    }

    /// List live students with equality filters, search and ordering
    pub async fn list(
        pool: &PgPool,
        department_id: Option<&Uuid>,
        semester: Option<i32>,
        year: Option<i32>,
        status: Option<&str>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<StudentDetail>> {
        let order = order_by(
            ordering,
            &["created_at", "full_name", "register_no"],
            "created_at DESC",
        );
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE NOT s.is_deleted
              AND ($1::uuid IS NULL OR s.department_id = $1)
              AND ($2::int IS NULL OR s.semester = $2)
              AND ($3::int IS NULL OR s.year = $3)
              AND ($4::text IS NULL OR s.status = $4)
              AND ($5::text IS NULL OR s.full_name ILIKE $5 OR s.register_no ILIKE $5
                   OR s.email ILIKE $5 OR s.student_id ILIKE $5)
            ORDER BY s.{order}"#
        );

        let students = sqlx::query_as::<_, StudentDetail>(&sql)
            .bind(department_id)
            .bind(semester)
            .bind(year)
            .bind(status)
            .bind(search.map(|s| format!("%{}%", s)))
            .fetch_all(pool)
            .await?;

        Ok(students)
    }

    /// Update a student; absent values keep their current value
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        student_id: Option<&str>,
        full_name: Option<&str>,
        register_no: Option<&str>,
        department_id: Option<&Uuid>,
        year: Option<i32>,
        semester: Option<i32>,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
        status: Option<&str>,
    ) -> AppResult<Student> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET student_id = COALESCE($2, student_id),
                full_name = COALESCE($3, full_name),
                register_no = COALESCE($4, register_no),
                department_id = COALESCE($5, department_id),
                year = COALESCE($6, year),
                semester = COALESCE($7, semester),
                email = COALESCE($8, email),
                phone = COALESCE($9, phone),
                address = COALESCE($10, address),
                status = COALESCE($11, status),
                updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(student_id)
        .bind(full_name)
        .bind(register_no)
        .bind(department_id)
        .bind(year)
        .bind(semester)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(student)
    }

    /// Soft-delete a student; returns false if it was already gone
    pub async fn soft_delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE students SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a student ID is taken among live rows
    pub async fn student_id_exists(
        pool: &PgPool,
        student_id: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        Self::natural_key_exists(pool, "student_id", student_id, exclude).await
    }

    /// Check whether a register number is taken among live rows
    pub async fn register_no_exists(
        pool: &PgPool,
        register_no: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        Self::natural_key_exists(pool, "register_no", register_no, exclude).await
    }

    /// Check whether an email is taken among live rows
    pub async fn email_exists(
        pool: &PgPool,
        email: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        Self::natural_key_exists(pool, "email", email, exclude).await
    }

    /// Check whether a phone number is taken among live rows
    pub async fn phone_exists(
        pool: &PgPool,
        phone: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        Self::natural_key_exists(pool, "phone", phone, exclude).await
    }

    async fn natural_key_exists(
        pool: &PgPool,
        column: &str,
        value: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        // `column` is one of the fixed names above, never client input
        let sql = format!(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM students
                WHERE {column} = $1 AND NOT is_deleted
                  AND ($2::uuid IS NULL OR id <> $2)
            )
            "#
        );

        let exists: bool = sqlx::query_scalar(&sql)
            .bind(value)
            .bind(exclude)
            .fetch_one(pool)
            .await?;

        Ok(exists)
    }

    /// Count live students with status 'active' (dashboard)
    pub async fn count_active(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM students WHERE NOT is_deleted AND status = 'active'"#,
        )
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
