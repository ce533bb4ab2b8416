use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllUsers, errors::RepositoryError, model::User,
};
use async_trait::async_trait;
use sqlx::{FromRow, Row};
use tracing::{error, info};

pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }

    async fn find_registered(
        &self,
        req: &FindAllUsers,
    ) -> Result<(Vec<User>, i64), RepositoryError> {
        info!("🔍 Fetching registered users with search: {:?}", req.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as i64;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        let rows = sqlx::query(
            r#"
            SELECT *, COUNT(*) OVER() AS total_count
            FROM users
            WHERE role IN ('doctor', 'patient')
              AND ($1::TEXT IS NULL OR full_name ILIKE '%' || $1 || '%' OR email ILIKE '%' || $1 || '%')
            ORDER BY created_at ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch registered users: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total: i64 = rows
            .first()
            .map(|row| row.try_get("total_count"))
            .transpose()
            .map_err(RepositoryError::from)?
            .unwrap_or(0);

        let users = rows
            .iter()
            .map(User::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        info!("✅ Retrieved {} registered users", users.len());

        Ok((users, total))
    }

    async fn find_pending_doctors(
        &self,
        req: &FindAllUsers,
    ) -> Result<(Vec<User>, i64), RepositoryError> {
        info!("🔍 Fetching doctors pending review");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as i64;

        let search_pattern = if req.search.trim().is_empty() {
            None
        } else {
            Some(req.search.as_str())
        };

        let rows = sqlx::query(
            r#"
            SELECT *, COUNT(*) OVER() AS total_count
            FROM users
            WHERE role = 'doctor'
              AND review_status = 'pending'
              AND ($1::TEXT IS NULL OR full_name ILIKE '%' || $1 || '%' OR email ILIKE '%' || $1 || '%')
            ORDER BY created_at ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch pending doctors: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total: i64 = rows
            .first()
            .map(|row| row.try_get("total_count"))
            .transpose()
            .map_err(RepositoryError::from)?
            .unwrap_or(0);

        let users = rows
            .iter()
            .map(User::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        Ok((users, total))
    }
}
