//! Core library exports for the Campaign Pulse service.
//!
//! This crate exposes forms, models, repositories, routes and service layers
//! used by the Campaign Pulse analytics API.

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
