//! # ck-protocol
//!
//! Core protocol definitions and data models for checklist-kit.
//!
//! This crate defines all shared data structures used for:
//! - Template definition parsing (YAML files, JSON payloads)
//! - Execution state and the append-only event log
//! - Derived read-only execution views
//! - Client-core communication
//!
//! ## Modules
//!
//! - [`template_models`]: Templates, sections, steps
//! - [`execution_models`]: Executions and their event log
//! - [`view_models`]: Derived per-step/per-section status views
//! - [`ipc`]: Operations and Events for client-core communication
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde, ts-rs, uuid, and chrono
//! - TypeScript generation: all types derive `TS` for client compatibility
//! - Independent compilation: no dependencies on other checklist-kit crates

pub mod execution_models;
pub mod ipc;
pub mod template_models;
pub mod view_models;

// Re-export all public types for convenience
pub use execution_models::*;
pub use ipc::*;
pub use template_models::*;
pub use view_models::*;
