use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when interacting with the application store
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate application: an application for this event already exists")]
    Duplicate,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Review status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

/// An application linking a talent to an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub status: ApplicationStatus,
    pub message: String,
    pub organizer_comment: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// PostgreSQL store for event applications
///
/// The application records are the only state this service owns. The unique
/// `(user_id, event_id)` constraint is the duplicate-submission guard: the
/// eligibility gate runs before insertion, the constraint catches races.
pub struct ApplicationStore {
    pool: PgPool,
}

impl ApplicationStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, ApplicationError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, ApplicationError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Submit an application for an event
    ///
    /// Uses INSERT ... ON CONFLICT DO NOTHING so a duplicate `(user, event)`
    /// pair never creates a second record; the duplicate is reported as
    /// `ApplicationError::Duplicate`.
    pub async fn submit(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        message: &str,
    ) -> Result<Application, ApplicationError> {
        let query = r#"
            INSERT INTO applications (user_id, event_id, status, message)
            VALUES ($1, $2, 'pending', $3)
            ON CONFLICT (user_id, event_id) DO NOTHING
            RETURNING id, user_id, event_id, status, message, organizer_comment, created_at
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(event_id)
            .bind(message)
            .fetch_optional(&self.pool)
            .await?;

        let row = row.ok_or(ApplicationError::Duplicate)?;

        tracing::debug!("Recorded application: {} -> {}", user_id, event_id);

        Ok(application_from_row(&row))
    }

    /// Whether a talent has already applied to an event
    pub async fn has_applied(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, ApplicationError> {
        let query = r#"
            SELECT EXISTS (
                SELECT 1 FROM applications
                WHERE user_id = $1 AND event_id = $2
            ) AS applied
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(event_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("applied"))
    }

    /// All applications submitted by a talent, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Application>, ApplicationError> {
        let query = r#"
            SELECT id, user_id, event_id, status, message, organizer_comment, created_at
            FROM applications
            WHERE user_id = $1
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query).bind(user_id).fetch_all(&self.pool).await?;

        let applications = rows.iter().map(application_from_row).collect::<Vec<_>>();

        tracing::debug!("User {} has {} applications", user_id, applications.len());

        Ok(applications)
    }

    /// Applications for an event with pagination (organizer/admin view)
    pub async fn list_for_event_paginated(
        &self,
        event_id: Uuid,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Application>, ApplicationError> {
        let query = r#"
            SELECT id, user_id, event_id, status, message, organizer_comment, created_at
            FROM applications
            WHERE event_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
        "#;

        let rows = sqlx::query(query)
            .bind(event_id)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(application_from_row).collect())
    }

    /// Withdraw an application (e.g. the talent changed their mind)
    pub async fn withdraw(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, ApplicationError> {
        let query = r#"
            DELETE FROM applications
            WHERE user_id = $1 AND event_id = $2
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(event_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Per-event application statistics for the organizer dashboard
    pub async fn event_stats(&self, event_id: Uuid) -> Result<ApplicationStats, ApplicationError> {
        let query = r#"
            SELECT
                COUNT(*) as total,
                COUNT(*) FILTER (WHERE status = 'pending') as pending,
                COUNT(*) FILTER (WHERE status = 'approved') as approved,
                COUNT(*) FILTER (WHERE status = 'rejected') as rejected,
                MAX(created_at) as last_application_at
            FROM applications
            WHERE event_id = $1
        "#;

        let row = sqlx::query(query).bind(event_id).fetch_one(&self.pool).await?;

        Ok(ApplicationStats {
            event_id,
            total: row.get("total"),
            pending: row.get("pending"),
            approved: row.get("approved"),
            rejected: row.get("rejected"),
            last_application_at: row.get("last_application_at"),
        })
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, ApplicationError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn application_from_row(row: &sqlx::postgres::PgRow) -> Application {
    Application {
        id: row.get("id"),
        user_id: row.get("user_id"),
        event_id: row.get("event_id"),
        status: row.get("status"),
        message: row.get("message"),
        organizer_comment: row.get("organizer_comment"),
        created_at: row.get("created_at"),
    }
}

/// Application statistics for a single event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStats {
    pub event_id: Uuid,
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub last_application_at: Option<chrono::DateTime<chrono::Utc>>,
}
