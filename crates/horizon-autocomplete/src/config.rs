//! Configuration for the autocomplete control.
//!
//! A configuration can be built in code with the consuming builder methods or
//! loaded from TOML:
//!
//! ```
//! use std::time::Duration;
//! use horizon_autocomplete::AutocompleteConfig;
//!
//! let config = AutocompleteConfig::from_toml_str(r#"
//! items = ["dog", "cat", "bird"]
//! max_suggestions = 5
//! close_delay_ms = 150
//! "#).unwrap();
//!
//! assert_eq!(config.max_suggestions, 5);
//! assert_eq!(config.close_delay, Duration::from_millis(150));
//! ```

use std::time::Duration;

use horizon_autocomplete_core::ConfigError;
use serde::{Deserialize, Deserializer};

use crate::matcher::CaseSensitivity;

/// Default cap on the number of suggestions shown at once.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Default delay between a blur and the resulting close.
///
/// Long enough for a click on a suggestion, which the host may report after
/// the blur, to land before the list disappears. This is an empirical window,
/// not a guarantee.
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(200);

/// Configuration for an [`Autocomplete`](crate::Autocomplete) control.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutocompleteConfig {
    /// The candidate items, in display order.
    pub items: Vec<String>,
    /// Maximum number of suggestions. Must be positive.
    pub max_suggestions: usize,
    /// Delay before a blur closes the suggestion list.
    #[serde(rename = "close_delay_ms", deserialize_with = "duration_from_millis")]
    pub close_delay: Duration,
    /// How typed text is compared against items.
    pub case_sensitivity: CaseSensitivity,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            close_delay: DEFAULT_CLOSE_DELAY,
            case_sensitivity: CaseSensitivity::default(),
        }
    }
}

impl AutocompleteConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate items.
    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum number of suggestions.
    pub fn max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Set the blur close delay.
    pub fn close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }

    /// Set the case sensitivity for matching.
    pub fn case_sensitivity(mut self, sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = sensitivity;
        self
    }

    /// Check that every field is within range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::invalid_value(
                "max_suggestions",
                "must be a positive integer",
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML text.
    ///
    /// Missing fields take their default values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}
