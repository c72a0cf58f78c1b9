//! Provider wiring configuration
//!
//! The one place that maps provider names to concrete implementations;
//! everything downstream of [`RosterConfig::build_provider`] holds the
//! capability trait only. Parsed from a caller-supplied YAML string; this
//! crate does no disk I/O itself.

use crate::core::ProviderResult;
use crate::di::mocks::MockPeopleProvider;
use crate::di::PeopleProvider;
use crate::people::StaticPeopleProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which provider implementation to inject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// The fixed, hardcoded people list.
    Static,
    /// Randomized sample data (the default wiring).
    #[default]
    Mock,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Provider implementation to inject
    #[serde(default)]
    pub provider: ProviderKind,

    /// Fixed seed for the mock provider's random source
    ///
    /// When set, mock output is reproducible across runs. Ignored by the
    /// static provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_seed: Option<u64>,
}

impl RosterConfig {
    /// Parse a config from YAML
    pub fn from_yaml(content: &str) -> ProviderResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serialize the config to YAML
    pub fn to_yaml(&self) -> ProviderResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build the configured provider as a shareable trait object
    pub fn build_provider(&self) -> Arc<dyn PeopleProvider> {
        match self.provider {
            ProviderKind::Static => Arc::new(StaticPeopleProvider::new()),
            ProviderKind::Mock => match self.mock_seed {
                Some(seed) => Arc::new(MockPeopleProvider::with_seed(seed)),
                None => Arc::new(MockPeopleProvider::new()),
            },
        }
    }
}
