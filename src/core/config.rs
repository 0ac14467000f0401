//! Selector configuration.
//!
//! Clients tune how much of the selection the core does on its own.
//! Both switches default to on; turning them off only means the player
//! clicks more, the reachable final actions stay the same.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for automatic selector behavior.
///
/// ## Example
///
/// ```
/// use bang_selector::core::SelectorConfig;
///
/// let config = SelectorConfig::from_json(r#"{"auto_select": false}"#).unwrap();
/// assert!(config.auto_targets);
/// assert!(!config.auto_select);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Resolve a target automatically when exactly one candidate is legal.
    ///
    /// Structural targets (no target, all players, empty optional picks)
    /// are always resolved regardless of this switch.
    pub auto_targets: bool,

    /// After a modifier's targets are complete, select the card named by
    /// its context (`playing_card` or `repeat_card`) automatically.
    pub auto_select: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            auto_targets: true,
            auto_select: true,
        }
    }
}

impl SelectorConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set automatic target resolution (builder pattern).
    #[must_use]
    pub fn with_auto_targets(mut self, enabled: bool) -> Self {
        self.auto_targets = enabled;
        self
    }

    /// Set automatic card selection after modifiers (builder pattern).
    #[must_use]
    pub fn with_auto_select(mut self, enabled: bool) -> Self {
        self.auto_select = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectorError;

    #[test]
    fn test_defaults() {
        let config = SelectorConfig::new();
        assert!(config.auto_targets);
        assert!(config.auto_select);
    }

    #[test]
    fn test_builder() {
        let config = SelectorConfig::new()
            .with_auto_targets(false)
            .with_auto_select(false);
        assert!(!config.auto_targets);
        assert!(!config.auto_select);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SelectorConfig::from_json(r#"{"auto_targets": false}"#).unwrap();
        assert!(!config.auto_targets);
        assert!(config.auto_select);

        let empty = SelectorConfig::from_json("{}").unwrap();
        assert_eq!(empty, SelectorConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = SelectorConfig::from_json("{\"auto_targets\": 3}").unwrap_err();
        assert!(matches!(err, SelectorError::Config(_)));
    }
}
