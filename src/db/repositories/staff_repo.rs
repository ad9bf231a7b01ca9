//! Staff repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Staff, StaffDetail},
};

use super::order_by;

const DETAIL_SELECT: &str = r#"
    SELECT st.id, st.user_id, st.staff_id, st.name, st.email, st.phone,
           st.department_id, d.department_name, st.designation,
           st.qualification, st.created_at, st.updated_at
    FROM staff st
    LEFT JOIN departments d ON d.id = st.department_id AND NOT d.is_deleted
"#;

/// Repository for staff database operations
pub struct StaffRepository;

impl StaffRepository {
    /// Create a new staff member
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        user_id: Option<&Uuid>,
        staff_id: &str,
        name: &str,
        email: &str,
        phone: &str,
        department_id: Option<&Uuid>,
        designation: &str,
        qualification: &str,
    ) -> AppResult<Staff> {
        let staff = sqlx::query_as::<_, Staff>(
            r#"
            INSERT INTO staff (
                user_id, staff_id, name, email, phone, department_id,
                designation, qualification
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(staff_id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(department_id)
        .bind(designation)
        .bind(qualification)
        .fetch_one(pool)
        .await?;

        Ok(staff)
    }

    /// Find a live staff member by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Staff>> {
        let staff =
            sqlx::query_as::<_, Staff>(r#"SELECT * FROM staff WHERE id = $1 AND NOT is_deleted"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(staff)
    }

    /// Find a live staff member with its department name
    pub async fn find_detail_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<StaffDetail>> {
        let sql = format!("{DETAIL_SELECT} WHERE st.id = $1 AND NOT st.is_deleted");

        let detail = sqlx::query_as::<_, StaffDetail>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(detail)
    }

    /// List live staff with equality filters, search and ordering
    pub async fn list(
        pool: &PgPool,
        department_id: Option<&Uuid>,
        designation: Option<&str>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<StaffDetail>> {
        let order = order_by(ordering, &["created_at", "name"], "name ASC");
        let sql = format!(
            r#"{DETAIL_SELECT}
            WHERE NOT st.is_deleted
              AND ($1::uuid IS NULL OR st.department_id = $1)
              AND ($2::text IS NULL OR st.designation = $2)
              AND ($3::text IS NULL OR st.name ILIKE $3 OR st.email ILIKE $3
                   OR st.staff_id ILIKE $3)
            ORDER BY st.{order}"#
        );

        let staff = sqlx::query_as::<_, StaffDetail>(&sql)
            .bind(department_id)
            .bind(designation)
            .bind(search.map(|s| format!("%{}%", s)))
            .fetch_all(pool)
            .await?;

        Ok(staff)
    }

    /// Update a staff member; absent values keep their current value
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        staff_id: Option<&str>,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        department_id: Option<&Uuid>,
        designation: Option<&str>,
        qualification: Option<&str>,
    ) -> AppResult<Staff> {
        let staff = sqlx::query_as::<_, Staff>(
            r#"
            UPDATE staff
            SET staff_id = COALESCE($2, staff_id),
                name = COALESCE($3, name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                department_id = COALESCE($6, department_id),
                designation = COALESCE($7, designation),
                qualification = COALESCE($8, qualification),
                updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(staff_id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(department_id)
        .bind(designation)
        .bind(qualification)
        .fetch_one(pool)
        .await?;

        Ok(staff)
    }

    /// Soft-delete a staff member; returns false if it was already gone
    pub async fn soft_delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE staff SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Check whether a staff ID is taken among live rows
    pub async fn staff_id_exists(
        pool: &PgPool,
        staff_id: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM staff
                WHERE staff_id = $1 AND NOT is_deleted
                  AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(staff_id)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Check whether an email is taken among live rows
    pub async fn email_exists(
        pool: &PgPool,
        email: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM staff
                WHERE email = $1 AND NOT is_deleted
                  AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(email)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Check whether a phone number is taken among live rows
    pub async fn phone_exists(
        pool: &PgPool,
        phone: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM staff
                WHERE phone = $1 AND NOT is_deleted
                  AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(phone)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Count live staff (dashboard)
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM staff WHERE NOT is_deleted"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
