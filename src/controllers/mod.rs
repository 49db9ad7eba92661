//! Controladores de la API

pub mod auth_controller;
pub mod booking_controller;
pub mod contact_controller;
pub mod offer_controller;
pub mod vehicle_controller;
