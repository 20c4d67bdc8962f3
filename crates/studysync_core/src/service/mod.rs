//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and engine calls into use-case level APIs.
//! - Keep calling layers decoupled from storage details.

pub mod availability_service;
pub mod suggestion_service;
