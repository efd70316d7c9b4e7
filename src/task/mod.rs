//! Task tracking core.
//!
//! Adding, listing, updating and deleting tasks flows through a thin layered
//! pipeline that keeps input validation, business rules and persistence
//! apart. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Description rules in [`validation`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
