//! JSON Schema helpers for tool parameters

pub mod schema;
pub(crate) mod validation;

pub use schema::parameters_schema;
