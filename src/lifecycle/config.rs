//! Runtime configuration for a [`CatalogSystem`](super::CatalogSystem), loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::{CatalogError, Result};

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Tunables for the repository actors.
///
/// Every field can be overridden from the environment with the `CATALOG_`
/// prefix, e.g. `CATALOG_CHANNEL_CAPACITY=8`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG")]
pub struct CatalogConfig {
    /// How many requests each actor can queue before callers wait.
    #[ortho_config(default = 32)]
    pub channel_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl CatalogConfig {
    /// Loads the configuration from defaults and `CATALOG_*` environment variables.
    ///
    /// Command-line arguments are not consulted; the catalog is a library and
    /// the host binary owns its own argv.
    ///
    /// # Errors
    /// `InvalidArgument` if a value cannot be parsed or the capacity is zero.
    pub fn from_env() -> Result<Self> {
        let config = Self::load_from_iter([OsString::from("library-catalog")])
            .map_err(|e| CatalogError::InvalidArgument(format!("invalid catalog configuration: {e}")))?;
        config.validated()
    }

    /// Rejects values the actors cannot run with.
    fn validated(self) -> Result<Self> {
        if self.channel_capacity == 0 {
            return Err(CatalogError::InvalidArgument(
                "channel_capacity must be a positive integer".into(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    //! Environment-driven loading; each test holds the env lock for the keys it touches.

    use super::*;
    use env_lock::lock_env;

    const CAPACITY_VAR: &str = "CATALOG_CHANNEL_CAPACITY";

    #[test]
    fn test_defaults_when_unset() {
        let _guard = lock_env([(CAPACITY_VAR, None::<String>)]);

        let config = CatalogConfig::from_env().unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.channel_capacity, 32);
    }

    #[test]
    fn test_environment_override() {
        let _guard = lock_env([(CAPACITY_VAR, Some("8".to_owned()))]);

        let config = CatalogConfig::from_env().unwrap();
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        for raw in ["0", "-3", "many"] {
            let _guard = lock_env([(CAPACITY_VAR, Some(raw.to_owned()))]);

            let result = CatalogConfig::from_env();
            assert!(matches!(result, Err(CatalogError::InvalidArgument(_))), "{raw}");
        }
    }

    #[test]
    fn test_deserialize_reads_fields() {
        let config: CatalogConfig = serde_json::from_str(r#"{"channel_capacity": 4}"#).unwrap();
        assert_eq!(config.channel_capacity, 4);
        assert!(config.validated().is_ok());
    }
}
