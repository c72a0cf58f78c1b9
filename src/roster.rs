//! The roster state holder

use crate::core::ProviderResult;
use crate::di::PeopleProvider;
use crate::people::Person;
use std::sync::Arc;
use tracing::debug;

/// Holds the materialized people list for presentation
///
/// Constructed with exactly one injected [`PeopleProvider`]; the provider is
/// invoked exactly once, during construction, and the result is stored as an
/// immutable snapshot. There is no refresh operation: the snapshot never
/// changes for the lifetime of the roster, and a new roster means a new
/// fetch.
///
/// Construction fails if and only if the provider's fetch fails; the error
/// is propagated to the caller rather than defaulting to an empty list.
///
/// # Example
///
/// ```
/// use roster::{Roster, StaticPeopleProvider};
/// use std::sync::Arc;
///
/// # fn example() -> roster::ProviderResult<()> {
/// let roster = Roster::new(Arc::new(StaticPeopleProvider::new()))?;
/// for person in roster.people() {
///     println!("{}: {}", person.name, person.age);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Roster {
    people: Vec<Person>,
    provider: Arc<dyn PeopleProvider>,
}

impl Roster {
    /// Create a roster over the given provider, fetching once
    pub fn new(provider: Arc<dyn PeopleProvider>) -> ProviderResult<Self> {
        let people = provider.fetch()?;
        debug!(count = people.len(), "roster populated");
        Ok(Self { people, provider })
    }

    /// The materialized people snapshot, in provider output order
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// The injected provider
    pub fn provider(&self) -> &dyn PeopleProvider {
        self.provider.as_ref()
    }
}
