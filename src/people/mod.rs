//! People data model

pub mod provider;

pub use provider::StaticPeopleProvider;

use serde::{Deserialize, Serialize};

/// A single displayed person.
///
/// Plain record with structural equality; names are a de facto display key
/// but uniqueness is not enforced. Lists of `Person` are replaced wholesale
/// by their owner, never mutated element-by-element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_construction() {
        let person = Person::new("Mario", 20);
        assert_eq!(person.name, "Mario");
        assert_eq!(person.age, 20);
    }

    #[test]
    fn test_person_structural_equality() {
        assert_eq!(Person::new("Toad", 12), Person::new("Toad", 12));
        assert_ne!(Person::new("Toad", 12), Person::new("Toad", 13));
        assert_ne!(Person::new("Toad", 12), Person::new("Luigi", 12));
    }

    #[test]
    fn test_person_yaml_round_trip() {
        let person = Person::new("Luigi", 22);
        let yaml = serde_yaml::to_string(&person).unwrap();
        let loaded: Person = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(person, loaded);
    }
}
