//! Core domain types
//!
//! Types describing what the assessor displays. They are shared between the
//! CLI (which renders them) and any other frontend built on this workspace.

pub mod display;
