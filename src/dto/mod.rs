//! DTOs de la API
//!
//! Frontera única de mapeo entre las columnas snake_case persistidas y los
//! campos camelCase del API: los structs de response llevan
//! `#[serde(rename_all = "camelCase")]` y un `From<Model>`; no hay traducción
//! campo a campo repetida en los call sites.

pub mod auth_dto;
pub mod booking_dto;
pub mod contact_dto;
pub mod offer_dto;
pub mod vehicle_dto;

use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
