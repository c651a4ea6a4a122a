//! # campus-core
//!
//! Core types shared by every Campus Hub crate:
//! - Record structs for each managed entity (students, teachers, fees, books, ...)
//! - Status enums with transition tables, and the class-level progression
//! - ID prefix constants and fresh-ID generation
//! - Field validation primitives (`FieldErrors`, `Validate`)
//! - Role capabilities and the explicit session context
//! - Input/output types of the generation and enquiry flows

pub mod access;
pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod flows;
pub mod grades;
pub mod identity;
pub mod ids;
pub mod validation;
