use crate::{
    abstract_trait::UserCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{
        CreateDoctorRecord, CreatePatientRecord, CreateUserRecord,
        CreateVerificationTokenRequest,
    },
    errors::RepositoryError,
    model::{Doctor, Patient, User, VerificationToken},
};
use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

async fn insert_user(
    conn: &mut PgConnection,
    req: &CreateUserRecord,
) -> Result<User, RepositoryError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (
            full_name,
            email,
            phone,
            address,
            gender,
            date_of_birth,
            avatar_url,
            password,
            role,
            is_verified,
            is_active,
            review_status,
            created_at,
            updated_at
        )
        VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
            CURRENT_TIMESTAMP, CURRENT_TIMESTAMP
        )
        RETURNING *
        "#,
    )
    .bind(&req.full_name)
    .bind(&req.email)
    .bind(&req.phone)
    .bind(&req.address)
    .bind(&req.gender)
    .bind(req.date_of_birth)
    .bind(&req.avatar_url)
    .bind(&req.password)
    .bind(req.role)
    .bind(req.is_verified)
    .bind(req.is_active)
    .bind(req.review_status)
    .fetch_one(&mut *conn)
    .await
    .map_err(RepositoryError::from)?;

    Ok(user)
}

async fn insert_verification_token(
    conn: &mut PgConnection,
    user_id: i32,
    req: &CreateVerificationTokenRequest,
) -> Result<VerificationToken, RepositoryError> {
    let token = sqlx::query_as::<_, VerificationToken>(
        r#"
        INSERT INTO verification_tokens (user_id, token, expiry_date)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&req.token)
    .bind(req.expiry_date)
    .fetch_one(&mut *conn)
    .await
    .map_err(RepositoryError::from)?;

    Ok(token)
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_patient_account(
        &self,
        user: &CreateUserRecord,
        profile: &CreatePatientRecord,
        token: &CreateVerificationTokenRequest,
    ) -> Result<(User, Patient, VerificationToken), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let user = insert_user(&mut tx, user).await?;

        let patient = sqlx::query_as::<_, Patient>(
            r#"
            INSERT INTO patients (user_id, insurance_number, national_id, medical_history)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user.user_id)
        .bind(&profile.insurance_number)
        .bind(&profile.national_id)
        .bind(&profile.medical_history)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let token = insert_verification_token(&mut tx, user.user_id, token).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Patient account created for user_id={}", user.user_id);

        Ok((user, patient, token))
    }

    async fn create_doctor_account(
        &self,
        user: &CreateUserRecord,
        profile: &CreateDoctorRecord,
    ) -> Result<(User, Doctor), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let user = insert_user(&mut tx, user).await?;

        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            INSERT INTO doctors (user_id, department, specialization, bio, rating_avg)
            VALUES ($1, $2, $3, $4, 0.0)
            RETURNING *
            "#,
        )
        .bind(user.user_id)
        .bind(&profile.department)
        .bind(&profile.specialization)
        .bind(&profile.bio)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Doctor account created for user_id={}", user.user_id);

        Ok((user, doctor))
    }

    async fn approve_doctor(
        &self,
        user_id: i32,
        token: &CreateVerificationTokenRequest,
    ) -> Result<(User, VerificationToken), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Guarded transition: only a pending registration may be approved,
        // so a concurrent second review loses here instead of double-firing.
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET review_status = 'approved',
                updated_at = CURRENT_TIMESTAMP
            WHERE user_id = $1
              AND role = 'doctor'
              AND review_status = 'pending'
            RETURNING *
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?
        .ok_or_else(|| {
            RepositoryError::Conflict("doctor registration is not pending review".to_string())
        })?;

        let token = insert_verification_token(&mut tx, user.user_id, token).await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok((user, token))
    }

    async fn reject_doctor(&self, user_id: i32) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET review_status = 'rejected',
                rejected_at = CURRENT_TIMESTAMP,
                updated_at = CURRENT_TIMESTAMP
            WHERE user_id = $1
              AND role = 'doctor'
              AND review_status = 'pending'
            RETURNING *
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?
        .ok_or_else(|| {
            RepositoryError::Conflict("doctor registration is not pending review".to_string())
        })?;

        Ok(user)
    }

    async fn update_active_status(
        &self,
        user_id: i32,
        is_active: bool,
    ) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_active = $2,
                updated_at = CURRENT_TIMESTAMP
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(is_active)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(user)
    }

    async fn activate_account(&self, user_id: i32, token: &str) -> Result<User, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET is_verified = TRUE,
                is_active = TRUE,
                updated_at = CURRENT_TIMESTAMP
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)?;

        // Single-use: the token row must still be there to be consumed.
        let deleted = sqlx::query(
            r#"
            DELETE FROM verification_tokens WHERE token = $1
            "#,
        )
        .bind(token)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        if deleted.rows_affected() == 0 {
            error!("❌ Verification token already consumed for user_id={user_id}");
            return Err(RepositoryError::Conflict(
                "verification token already consumed".to_string(),
            ));
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(user)
    }

    async fn ensure_admin(&self, user: &CreateUserRecord) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query(
            r#"
            INSERT INTO users (
                full_name, email, phone, address, gender, date_of_birth,
                avatar_url, password, role, is_verified, is_active,
                review_status, created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                CURRENT_TIMESTAMP, CURRENT_TIMESTAMP
            )
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.address)
        .bind(&user.gender)
        .bind(user.date_of_birth)
        .bind(&user.avatar_url)
        .bind(&user.password)
        .bind(user.role)
        .bind(user.is_verified)
        .bind(user.is_active)
        .bind(user.review_status)
        .execute(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
