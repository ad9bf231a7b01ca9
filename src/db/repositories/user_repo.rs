//! User repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::User};

/// Repository for user database operations
///
/// Users have no soft-delete flag; removal is modeled as deactivation.
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, role, is_staff)
            VALUES ($1, $2, $3, $4, $4 <> 'Student')
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email (the login identifier)
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Check whether a username is taken, optionally excluding one user
    pub async fn username_exists(
        pool: &PgPool,
        username: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM users
                WHERE username = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(username)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Check whether an email is registered, optionally excluding one user
    pub async fn email_exists(
        pool: &PgPool,
        email: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM users
                WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(email)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// List users, filterable by role and searchable by username/email
    pub async fn list(
        pool: &PgPool,
        role: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<Vec<User>> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE ($1::text IS NULL OR role = $1)
              AND ($2::text IS NULL OR username ILIKE $2 OR email ILIKE $2)
            ORDER BY date_joined DESC
            "#,
        )
        .bind(role)
        .bind(&search_pattern)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Update a user's mutable fields; absent values keep their current value
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        username: Option<&str>,
        email: Option<&str>,
        role: Option<&str>,
        is_active: Option<bool>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = COALESCE($2, username),
                email = COALESCE($3, email),
                role = COALESCE($4, role),
                is_active = COALESCE($5, is_active),
                is_staff = COALESCE($4, role) <> 'Student'
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(role)
        .bind(is_active)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Deactivate a user account
    pub async fn deactivate(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"UPDATE users SET is_active = FALSE WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
