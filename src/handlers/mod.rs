//! HTTP handlers for the adoption workflow.

pub mod adoption;
pub mod pet;
