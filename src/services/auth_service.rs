//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::{audit_actions, roles},
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    services::audit_service::{AuditContext, AuditService},
    utils::validation::validate_role,
};

/// JWT claims structure
///
/// Both halves of the token pair are stateless JWTs; `token_type`
/// distinguishes them so a refresh token cannot be used as a bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub token_type: String, // "access" | "refresh"
    pub exp: i64,
    pub iat: i64,
}

/// Access/refresh token pair issued on register and login
#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user and issue a token pair
    pub async fn register(
        pool: &PgPool,
        config: &Config,
        username: &str,
        email: &str,
        password: &str,
        role: Option<&str>,
        ip_address: Option<String>,
    ) -> AppResult<(User, TokenPair)> {
        let role = role.unwrap_or(roles::STUDENT);
        validate_role(role).map_err(|msg| AppError::field("role", msg))?;

        if UserRepository::username_exists(pool, username, None).await? {
            return Err(AppError::field("username", "Username already exists"));
        }

        if UserRepository::email_exists(pool, email, None).await? {
            return Err(AppError::field("email", "Email already exists"));
        }

        let password_hash = Self::hash_password(password)?;
        let user = UserRepository::create(pool, username, email, &password_hash, role).await?;

        let ctx = AuditContext {
            user_id: user.id,
            ip_address,
        };
        AuditService::record(
            pool,
            &ctx,
            audit_actions::REGISTER,
            "User",
            Some(&user.id),
            None,
        )
        .await?;

        let tokens = Self::generate_token_pair(&user, config)?;

        Ok((user, tokens))
    }

    /// Login with email and password
    ///
    /// Only Admin accounts may authenticate here; Staff and Student rows
    /// exist but are rejected with a role-specific 403, never a 401.
    pub async fn login(
        pool: &PgPool,
        config: &Config,
        email: &str,
        password: &str,
        ip_address: Option<String>,
    ) -> AppResult<(User, TokenPair)> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AppError::Forbidden("User account is disabled".to_string()));
        }

        if !user.is_admin() {
            return Err(AppError::AdminLoginOnly);
        }

        let ctx = AuditContext {
            user_id: user.id,
            ip_address,
        };
        AuditService::record(pool, &ctx, audit_actions::LOGIN, "User", Some(&user.id), None)
            .await?;

        let tokens = Self::generate_token_pair(&user, config)?;

        Ok((user, tokens))
    }

    /// Exchange a refresh token for a fresh pair
    pub async fn refresh(
        pool: &PgPool,
        config: &Config,
        refresh_token: &str,
    ) -> AppResult<TokenPair> {
        let claims = Self::verify_token_of_type(refresh_token, &config.jwt.secret, "refresh")?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;
        let user = UserRepository::find_by_id(pool, &user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if !user.is_active {
            return Err(AppError::Forbidden("User account is disabled".to_string()));
        }

        Self::generate_token_pair(&user, config)
    }

    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<User>> {
        UserRepository::find_by_id(pool, user_id).await
    }

    /// Partially update the caller's own username/email
    pub async fn update_profile(
        pool: &PgPool,
        user_id: &Uuid,
        username: Option<&str>,
        email: Option<&str>,
        ip_address: Option<String>,
    ) -> AppResult<User> {
        if let Some(username) = username {
            if UserRepository::username_exists(pool, username, Some(user_id)).await? {
                return Err(AppError::field("username", "Username already exists"));
            }
        }

        if let Some(email) = email {
            if UserRepository::email_exists(pool, email, Some(user_id)).await? {
                return Err(AppError::field("email", "Email already exists"));
            }
        }

        let user = UserRepository::update(pool, user_id, username, email, None, None).await?;

        let ctx = AuditContext {
            user_id: *user_id,
            ip_address,
        };
        AuditService::record(
            pool,
            &ctx,
            audit_actions::UPDATE_PROFILE,
            "User",
            Some(user_id),
            None,
        )
        .await?;

        Ok(user)
    }

    /// Verify an access token and extract its claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        Self::verify_token_of_type(token, secret, "access")
    }

    fn verify_token_of_type(token: &str, secret: &str, token_type: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        if token_data.claims.token_type != token_type {
            return Err(AppError::InvalidToken);
        }

        Ok(token_data.claims)
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn generate_token_pair(user: &User, config: &Config) -> AppResult<TokenPair> {
        let access = Self::generate_token(
            user,
            config,
            "access",
            Duration::hours(config.jwt.expiry_hours),
        )?;
        let refresh = Self::generate_token(
            user,
            config,
            "refresh",
            Duration::days(config.jwt.refresh_token_expiry_days),
        )?;

        Ok(TokenPair { access, refresh })
    }

    fn generate_token(
        user: &User,
        config: &Config,
        token_type: &str,
        lifetime: Duration,
    ) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            token_type: token_type.to_string(),
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(role: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: "chandru".to_string(),
            email: "chandru@college.edu".to_string(),
            password_hash: String::new(),
            role: role.to_string(),
            is_active: true,
            is_staff: role != "Student",
            date_joined: Utc::now(),
        }
    }

    fn test_config() -> Config {
        use crate::config::{DatabaseConfig, JwtConfig, ServerConfig, StorageConfig};

        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            database: DatabaseConfig {
                url: "postgres://localhost/test".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: "unit-test-secret".to_string(),
                expiry_hours: 1,
                refresh_token_expiry_days: 7,
            },
            storage: StorageConfig {
                media_root: "./media".into(),
            },
        }
    }

    #[test]
    fn test_password_hash_round_trip() {
        let hash = AuthService::hash_password("correct horse battery").unwrap();
        assert!(AuthService::verify_password("correct horse battery", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_access_token_round_trip() {
        let config = test_config();
        let user = test_user("Admin");

        let tokens = AuthService::generate_token_pair(&user, &config).unwrap();
        let claims = AuthService::verify_token(&tokens.access, &config.jwt.secret).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.username, "chandru");
        assert_eq!(claims.role, "Admin");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_refresh_token_rejected_as_access_token() {
        let config = test_config();
        let user = test_user("Admin");

        let tokens = AuthService::generate_token_pair(&user, &config).unwrap();

        assert!(AuthService::verify_token(&tokens.refresh, &config.jwt.secret).is_err());
        assert!(
            AuthService::verify_token_of_type(&tokens.refresh, &config.jwt.secret, "refresh")
                .is_ok()
        );
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let config = test_config();
        let user = test_user("Staff");

        let tokens = AuthService::generate_token_pair(&user, &config).unwrap();
        assert!(AuthService::verify_token(&tokens.access, "another secret").is_err());
    }
}
