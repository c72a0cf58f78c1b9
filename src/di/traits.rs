//! Trait definitions for dependency injection

use crate::core::ProviderResult;
use crate::people::Person;

/// Trait for producing the people list
///
/// The single capability the roster depends on. Implementations take no
/// input, return people in display order, and have no side effects on shared
/// state beyond any internal random source they maintain. Implementations
/// should be thread-safe (Send + Sync).
///
/// The built-in providers never fail; the error channel exists so a real
/// data source can be substituted without changing the contract.
pub trait PeopleProvider: Send + Sync {
    /// Produce the full people list, in display order
    fn fetch(&self) -> ProviderResult<Vec<Person>>;
}
