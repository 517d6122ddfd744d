//! Shared domain types for quizbot.
//!
//! This crate contains the types used across the quizbot workspace:
//! chat identifiers and inbound commands, questions and session state,
//! configuration, and the error types shared by core and infra.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod quiz;
