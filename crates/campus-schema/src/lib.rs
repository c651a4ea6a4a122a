//! # campus-schema
//!
//! JSON Schema generation, validation, and registry for Campus Hub.
//!
//! Record and flow types are defined in `campus-core` with
//! `#[derive(JsonSchema)]`. This crate turns them into a named registry and
//! validates arbitrary JSON against them. The generation flow checks model
//! output here before it is accepted, and the CLI exports schemas through
//! `campus schema`.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
