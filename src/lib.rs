//! Roster: a dependency-injection sample
//!
//! This crate demonstrates constructor-based dependency injection: the
//! [`Roster`] state holder depends on the [`PeopleProvider`] capability
//! trait rather than a concrete implementation, and the concrete provider
//! (static fixture vs. randomized mock) is chosen at construction time by
//! whoever builds the roster.

pub use crate::config::{ProviderKind, RosterConfig};
pub use crate::core::{ProviderError, ProviderResult};
pub use crate::di::PeopleProvider;
pub use crate::people::{Person, StaticPeopleProvider};
pub use crate::roster::Roster;

/// Core error types.
pub mod core;

/// People data model and the static provider.
pub mod people;

/// Dependency injection infrastructure.
pub mod di;

/// The roster state holder.
pub mod roster;

/// Provider wiring configuration.
pub mod config;
