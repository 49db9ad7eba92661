use crate::models::user::UserProfile;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct UserProfileRepository {
    pool: PgPool,
}

impl UserProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, profile: &UserProfile) -> Result<UserProfile, AppError> {
        let saved = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO user_profiles (
                id, email, password_hash, first_name, last_name, phone, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(profile.id)
        .bind(&profile.email)
        .bind(&profile.password_hash)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.phone)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating user profile: {}", e)))?;

        Ok(saved)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, AppError> {
        let profile = sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding user profile: {}", e)))?;

        Ok(profile)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, AppError> {
        let profile =
            sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error finding user profile by email: {}", e))
                })?;

        Ok(profile)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM user_profiles WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error checking email: {}", e)))?;

        Ok(result.0)
    }

    /// Crear el perfil si no existe todavía
    ///
    /// Cubre cuentas aprovisionadas fuera del storefront (sin paso de
    /// registro explícito): un token válido sin fila de perfil produce un
    /// perfil mínimo en el primer acceso.
    pub async fn ensure(&self, id: Uuid, email: &str) -> Result<UserProfile, AppError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO user_profiles (
                id, email, password_hash, first_name, last_name, phone, created_at, updated_at
            )
            VALUES ($1, $2, '', '', '', NULL, $3, $3)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error ensuring user profile: {}", e)))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("User profile missing after ensure".to_string()))
    }
}
