//! The static people provider

use crate::core::ProviderResult;
use crate::di::PeopleProvider;
use crate::people::Person;
use tracing::debug;

/// Provider returning a fixed, hardcoded people list.
///
/// Stands in for a real data receiver: every call yields the same three
/// people in the same order. Stateless and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPeopleProvider;

impl StaticPeopleProvider {
    pub fn new() -> Self {
        Self
    }
}

impl PeopleProvider for StaticPeopleProvider {
    fn fetch(&self) -> ProviderResult<Vec<Person>> {
        let people = vec![
            Person::new("Mario", 20),
            Person::new("Luigi", 22),
            Person::new("Toad", 12),
        ];
        debug!(count = people.len(), "fetched static people list");
        Ok(people)
    }
}
