//! Iteration/checkpoint knobs bundled into one value, for callers who want
//! to assemble a run configuration separately from the rest of a `Pregel`
//! chain (e.g. reading knobs from a CLI or a config file) rather than
//! calling each `Pregel::set_*` individually.
//!
//! Mirrors the teacher's `PregelConfig`/`PregelConfigBuilder` split: a
//! plain-data config struct with a `Default` impl, a `builder()` entry
//! point, and a `validate()` that raises the same [`ConfigError`] variants
//! `Pregel::run` raises for these same knobs.

use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct PregelRunConfig {
    pub max_iter: i64,
    pub checkpoint_interval: i64,
    pub early_stopping: bool,
    pub stop_if_all_unactive: bool,
    pub filter_messages_from_non_active: bool,
}

impl Default for PregelRunConfig {
    fn default() -> Self {
        Self {
            max_iter: 10,
            checkpoint_interval: 1,
            early_stopping: true,
            stop_if_all_unactive: false,
            filter_messages_from_non_active: false,
        }
    }
}

impl PregelRunConfig {
    pub fn builder() -> PregelRunConfigBuilder {
        PregelRunConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iter <= 0 {
            return Err(ConfigError::NonPositiveMaxIter(self.max_iter));
        }
        if self.checkpoint_interval < 0 {
            return Err(ConfigError::NegativeCheckpointInterval(
                self.checkpoint_interval,
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct PregelRunConfigBuilder {
    max_iter: Option<i64>,
    checkpoint_interval: Option<i64>,
    early_stopping: Option<bool>,
    stop_if_all_unactive: Option<bool>,
    filter_messages_from_non_active: Option<bool>,
}

impl PregelRunConfigBuilder {
    pub fn max_iter(mut self, value: i64) -> Self {
        self.max_iter = Some(value);
        self
    }

    pub fn checkpoint_interval(mut self, value: i64) -> Self {
        self.checkpoint_interval = Some(value);
        self
    }

    pub fn early_stopping(mut self, value: bool) -> Self {
        self.early_stopping = Some(value);
        self
    }

    pub fn stop_if_all_unactive(mut self, value: bool) -> Self {
        self.stop_if_all_unactive = Some(value);
        self
    }

    pub fn filter_messages_from_non_active(mut self, value: bool) -> Self {
        self.filter_messages_from_non_active = Some(value);
        self
    }

    pub fn build(self) -> Result<PregelRunConfig, ConfigError> {
        let defaults = PregelRunConfig::default();
        let config = PregelRunConfig {
            max_iter: self.max_iter.unwrap_or(defaults.max_iter),
            checkpoint_interval: self
                .checkpoint_interval
                .unwrap_or(defaults.checkpoint_interval),
            early_stopping: self.early_stopping.unwrap_or(defaults.early_stopping),
            stop_if_all_unactive: self
                .stop_if_all_unactive
                .unwrap_or(defaults.stop_if_all_unactive),
            filter_messages_from_non_active: self
                .filter_messages_from_non_active
                .unwrap_or(defaults.filter_messages_from_non_active),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pregel_defaults() {
        let config = PregelRunConfig::default();
        assert_eq!(config.max_iter, 10);
        assert_eq!(config.checkpoint_interval, 1);
        assert!(config.early_stopping);
    }

    #[test]
    fn builder_rejects_non_positive_max_iter() {
        let result = PregelRunConfig::builder().max_iter(0).build();
        assert!(matches!(result, Err(ConfigError::NonPositiveMaxIter(0))));
    }

    #[test]
    fn builder_rejects_negative_checkpoint_interval() {
        let result = PregelRunConfig::builder().checkpoint_interval(-1).build();
        assert!(matches!(
            result,
            Err(ConfigError::NegativeCheckpointInterval(-1))
        ));
    }

    #[test]
    fn builder_accepts_overrides() {
        let config = PregelRunConfig::builder()
            .max_iter(50)
            .checkpoint_interval(0)
            .early_stopping(false)
            .stop_if_all_unactive(true)
            .build()
            .expect("valid config");
        assert_eq!(config.max_iter, 50);
        assert_eq!(config.checkpoint_interval, 0);
        assert!(!config.early_stopping);
        assert!(config.stop_if_all_unactive);
    }
}
