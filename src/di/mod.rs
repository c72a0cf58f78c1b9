//! Dependency injection infrastructure for Roster
//!
//! This module provides trait-based dependency injection so consumers depend
//! on the [`PeopleProvider`] capability rather than a concrete data source,
//! which keeps implementations swappable and the state holder testable.
//!
//! # Example (Production)
//! ```
//! use roster::{Roster, StaticPeopleProvider};
//! use std::sync::Arc;
//!
//! # fn example() -> roster::ProviderResult<()> {
//! let roster = Roster::new(Arc::new(StaticPeopleProvider::new()))?;
//! assert_eq!(roster.people().len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use roster::di::mocks::ScriptedProvider;
//! use roster::{Person, Roster};
//! use std::sync::Arc;
//!
//! # fn example() -> roster::ProviderResult<()> {
//! let provider = Arc::new(ScriptedProvider::new(vec![Person::new("Peach", 21)]));
//! let roster = Roster::new(provider)?;
//! assert_eq!(roster.people().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod mocks;
pub mod traits;

// Re-export key types
pub use mocks::MockPeopleProvider;
pub use traits::PeopleProvider;
