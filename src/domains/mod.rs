//! Domains module containing business logic organized by bounded contexts.
//!
//! This server exposes a single bounded context: the Noun Project tools.

pub mod tools;
