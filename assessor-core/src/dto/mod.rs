//! Data Transfer Objects for the backend API
//!
//! Lightweight representations of what travels over HTTP between the
//! backend and its clients.

pub mod health;
