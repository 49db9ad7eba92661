//! Repositorios de acceso a datos

pub mod booking_repository;
pub mod contact_repository;
pub mod offer_repository;
pub mod user_profile_repository;
pub mod vehicle_repository;
