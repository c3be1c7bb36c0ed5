//! Session store configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Platform session store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionStoreConfig {
    /// Maximum number of users with a live platform session
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl SessionStoreConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_sessions == 0 {
            return Err(ValidationError::InvalidSessionCapacity);
        }
        Ok(())
    }
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_max_sessions() -> usize {
    10_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SessionStoreConfig::default();
        assert_eq!(config.max_sessions, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let config = SessionStoreConfig { max_sessions: 0 };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionCapacity));
    }
}
