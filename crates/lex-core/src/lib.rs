//! # lex-core
//!
//! Core types and error types for LexDesk.
//!
//! This crate provides the foundational types shared across all LexDesk crates:
//! - Entity structs for the practice data (cases, clients, deadlines, tasks, activity)
//! - Workflow and classification enums
//! - Calendar-date parsing used at the ingestion boundary
//! - Snapshot loading and validation
//! - Cross-cutting error types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod snapshot;
