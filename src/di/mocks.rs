//! Mock implementations of the people provider for development and testing

use crate::core::{ProviderError, ProviderResult};
use crate::di::traits::PeopleProvider;
use crate::people::Person;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Number of people a mock fetch generates.
const MOCK_COUNT: usize = 20;

/// Mock people provider generating randomized sample data
///
/// Every fetch produces a fresh list of twenty people named `"Person 1"`
/// through `"Person 20"`, with ages drawn independently and uniformly from
/// 12..=70. Results are not cached; successive calls yield independent
/// samples.
///
/// The random source is injected rather than global: [`with_seed`] makes a
/// fetch sequence fully reproducible for tests. The RNG sits behind a mutex
/// so the provider stays usable through `&self` across threads.
///
/// [`with_seed`]: MockPeopleProvider::with_seed
///
/// # Example
///
/// ```
/// use roster::di::mocks::MockPeopleProvider;
/// use roster::PeopleProvider;
///
/// let provider = MockPeopleProvider::with_seed(42);
/// let people = provider.fetch().unwrap();
/// assert_eq!(people.len(), 20);
/// assert_eq!(people[0].name, "Person 1");
/// ```
pub struct MockPeopleProvider {
    rng: Mutex<StdRng>,
}

impl MockPeopleProvider {
    /// Create a mock provider seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create a mock provider with a fixed seed for reproducible output
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockPeopleProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PeopleProvider for MockPeopleProvider {
    fn fetch(&self) -> ProviderResult<Vec<Person>> {
        let mut rng = self.rng.lock().unwrap();
        let people = (1..=MOCK_COUNT)
            .map(|i| Person::new(format!("Person {}", i), rng.random_range(12..=70)))
            .collect::<Vec<_>>();
        debug!(count = people.len(), "generated mock people list");
        Ok(people)
    }
}

/// Provider returning a caller-supplied fixed list
///
/// Useful for asserting that the roster reflects exactly what its provider
/// produced, independent of any built-in implementation.
#[derive(Debug, Clone)]
pub struct ScriptedProvider {
    people: Vec<Person>,
}

impl ScriptedProvider {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

impl PeopleProvider for ScriptedProvider {
    fn fetch(&self) -> ProviderResult<Vec<Person>> {
        Ok(self.people.clone())
    }
}

/// Provider wrapper counting fetch invocations
///
/// Delegates to the wrapped provider and records how many times `fetch` was
/// called, so tests can verify the exactly-one-fetch contract of roster
/// construction.
///
/// # Example
///
/// ```
/// use roster::di::mocks::CountingProvider;
/// use roster::{PeopleProvider, StaticPeopleProvider};
/// use std::sync::Arc;
///
/// let provider = CountingProvider::new(Arc::new(StaticPeopleProvider::new()));
/// provider.fetch().unwrap();
/// assert_eq!(provider.calls(), 1);
/// ```
pub struct CountingProvider {
    inner: Arc<dyn PeopleProvider>,
    calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new(inner: Arc<dyn PeopleProvider>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetch calls observed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PeopleProvider for CountingProvider {
    fn fetch(&self) -> ProviderResult<Vec<Person>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch()
    }
}

/// Provider that always fails
///
/// Lets tests verify that provider errors propagate out of roster
/// construction instead of being swallowed.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    message: String,
}

impl FailingProvider {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl PeopleProvider for FailingProvider {
    fn fetch(&self) -> ProviderResult<Vec<Person>> {
        Err(ProviderError::Unavailable(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::people::StaticPeopleProvider;

    #[test]
    fn test_mock_provider_count() {
        let provider = MockPeopleProvider::with_seed(1);
        for _ in 0..10 {
            assert_eq!(provider.fetch().unwrap().len(), 20);
        }
    }

    #[test]
    fn test_mock_provider_names() {
        let provider = MockPeopleProvider::with_seed(2);
        let people = provider.fetch().unwrap();
        for (i, person) in people.iter().enumerate() {
            assert_eq!(person.name, format!("Person {}", i + 1));
        }
    }

    #[test]
    fn test_mock_provider_age_bounds() {
        let provider = MockPeopleProvider::with_seed(3);
        for _ in 0..50 {
            for person in provider.fetch().unwrap() {
                assert!(
                    (12..=70).contains(&person.age),
                    "age {} out of bounds",
                    person.age
                );
            }
        }
    }

    #[test]
    fn test_mock_provider_seed_reproducible() {
        let a = MockPeopleProvider::with_seed(42);
        let b = MockPeopleProvider::with_seed(42);
        assert_eq!(a.fetch().unwrap(), b.fetch().unwrap());
    }

    #[test]
    fn test_mock_provider_fresh_samples() {
        // For a fixed seed the RNG stream advances between calls, so two
        // successive fetches are deterministically distinct samples.
        let provider = MockPeopleProvider::with_seed(42);
        assert_ne!(provider.fetch().unwrap(), provider.fetch().unwrap());
    }

    #[test]
    fn test_scripted_provider_returns_script() {
        let script = vec![Person::new("Peach", 21), Person::new("Yoshi", 8)];
        let provider = ScriptedProvider::new(script.clone());
        assert_eq!(provider.fetch().unwrap(), script);
    }

    #[test]
    fn test_counting_provider_counts() {
        let provider = CountingProvider::new(Arc::new(StaticPeopleProvider::new()));
        assert_eq!(provider.calls(), 0);
        provider.fetch().unwrap();
        provider.fetch().unwrap();
        assert_eq!(provider.calls(), 2);
    }

    #[test]
    fn test_failing_provider_fails() {
        let provider = FailingProvider::new("backend offline");
        let err = provider.fetch().unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable(ref m) if m == "backend offline"));
    }
}
