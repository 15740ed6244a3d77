//! Assessor Core
//!
//! Core types shared by the Interview Feedback Quality Assessor services.
//!
//! This crate contains:
//! - Domain types: what the health status view displays
//! - DTOs: wire representations exchanged with the backend API

pub mod domain;
pub mod dto;

/// Heading shown above the backend status line
pub const PAGE_HEADING: &str = "Interview Feedback Quality Assessor";

/// Path of the backend health endpoint, relative to the backend base URL
pub const HEALTH_PATH: &str = "/api/v1/health";
