use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserProfileResponse};
use crate::dto::ApiResponse;
use crate::models::user::UserProfile;
use crate::repositories::user_profile_repository::UserProfileRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::{validate_email, validate_not_empty, validate_phone};

pub struct AuthController {
    repository: UserProfileRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UserProfileRepository::new(pool),
            jwt_config: JwtConfig::from(config),
        }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<ApiResponse<UserProfileResponse>, AppError> {
        // Validar campos
        validate_email(&request.email)
            .map_err(|_| AppError::ValidationError("Email inválido".to_string()))?;

        if request.password.len() < 8 {
            return Err(AppError::ValidationError(
                "La contraseña debe tener al menos 8 caracteres".to_string(),
            ));
        }

        validate_not_empty(&request.first_name)
            .map_err(|_| AppError::ValidationError("El nombre es requerido".to_string()))?;
        validate_not_empty(&request.last_name)
            .map_err(|_| AppError::ValidationError("El apellido es requerido".to_string()))?;

        if let Some(ref phone) = request.phone {
            validate_phone(phone)
                .map_err(|_| AppError::ValidationError("Teléfono inválido".to_string()))?;
        }

        // Verificar que el email no exista
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let profile = UserProfile::new(
            request.email.trim().to_lowercase(),
            password_hash,
            request.first_name.trim().to_string(),
            request.last_name.trim().to_string(),
            request.phone,
        );

        let saved = self.repository.create(&profile).await?;

        Ok(ApiResponse::success_with_message(
            saved.into(),
            "Usuario registrado exitosamente".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        validate_email(&request.email)
            .map_err(|_| AppError::ValidationError("Email inválido".to_string()))?;

        let profile = self
            .repository
            .find_by_email(request.email.trim().to_lowercase().as_str())
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Perfiles creados perezosamente no tienen contraseña local
        if profile.password_hash.is_empty() {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let valid = verify(&request.password, &profile.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(profile.id, &profile.email, &self.jwt_config)?;

        Ok(LoginResponse::success(token, profile.into()))
    }

    /// Perfil del usuario autenticado
    ///
    /// Si el token es válido pero el perfil no existe (cuenta aprovisionada
    /// fuera del storefront), se crea un perfil mínimo en este primer acceso.
    pub async fn me(&self, user_id: Uuid, email: &str) -> Result<UserProfileResponse, AppError> {
        let profile = self.repository.ensure(user_id, email).await?;
        Ok(profile.into())
    }
}
