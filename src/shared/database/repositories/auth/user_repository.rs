use sqlx::{postgres::PgRow, PgPool, Row};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use crate::domains::auth::models::user::{NewUser, User};

// PostgreSQL unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// 저장소가 구분해서 알려야 하는 실패
/// Store failures callers can act on; returned inside `anyhow::Error`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("email already registered: {email}")]
    EmailTaken { email: String },
}

/// 사용자 저장소 인터페이스
/// Persistence seam for users; the auth middleware reads through it on every request.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일이 이미 있으면 `UserStoreError::EmailTaken`
    async fn create_user(&self, new_user: NewUser) -> Result<User>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn find_user_by_id(&self, id: u64) -> Result<Option<User>>;

    async fn list_users(&self) -> Result<Vec<User>>;

    /// 상태 변경 후 갱신된 사용자 반환 (없으면 None)
    async fn update_user_status(&self, id: u64, status: i32) -> Result<Option<User>>;
}

/// PostgreSQL 사용자 저장소
/// PostgreSQL-backed user repository
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, email, password_hash, username, role, status, created_at, updated_at";

fn user_from_row(row: &PgRow) -> User {
    User {
        id: row.get::<i64, _>("id") as u64,
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        username: row.get("username"),
        role: row.get("role"),
        status: row.get("status"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION))
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let now = Utc::now();
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO users (email, password_hash, username, role, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.username.as_deref())
        .bind(new_user.role)
        .bind(new_user.status)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                anyhow::Error::new(UserStoreError::EmailTaken { email: new_user.email.clone() })
            } else {
                anyhow::Error::new(e).context("Failed to create user")
            }
        })?;

        Ok(user_from_row(&row))
    }

    // 이메일로 사용자 조회 (로그인용)
    // Get user by email (for login)
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch user by email")?;

        Ok(row.as_ref().map(user_from_row))
    }

    // ID로 사용자 조회
    // Get user by ID
    async fn find_user_by_id(&self, id: u64) -> Result<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id as i64)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch user by id")?;

        Ok(row.as_ref().map(user_from_row))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .context("Failed to list users")?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    async fn update_user_status(&self, id: u64, status: i32) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE users
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id as i64)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update user status")?;

        Ok(row.as_ref().map(user_from_row))
    }
}
