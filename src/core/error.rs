use thiserror::Error;

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors a people provider may surface.
///
/// The two built-in providers are failure-free and always return `Ok`; this
/// taxonomy exists so the capability contract stays unchanged when a real
/// data source (network, disk) is substituted behind the trait.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("Data source returned invalid data: {0}")]
    Invalid(String),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
