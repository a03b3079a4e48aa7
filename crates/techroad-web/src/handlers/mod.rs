//! HTTP handlers for all web routes.

pub mod api;
pub mod feedback;
pub mod pages;
pub mod system;
pub mod technologies;
