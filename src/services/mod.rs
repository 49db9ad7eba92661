//! Servicios del sistema

pub mod catalog;
pub mod pricing;
