//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Layer diagnostic logging on top of repository results without
//!   changing them.

pub mod student_service;
