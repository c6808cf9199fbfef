//! Screen configuration.
//!
//! # Responsibility
//! - Carry the literal display strings, seed items and swipe tuning.
//! - Validate tuning values before a session is built from them.
//!
//! # Invariants
//! - `ScreenConfig::default()` reproduces the stock screen.
//! - A config that fails `validate()` is never used to build a session.

use crate::model::item::ItemId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_TITLE: &str = "✅ To do list";
const DEFAULT_PLACEHOLDER: &str = "문구를 입력해주세요.";
const DEFAULT_SEED_TEXT: &str = "Sample Text";
const DEFAULT_SWIPE_OPEN_PERCENT: f32 = 10.0;
const DEFAULT_SWIPE_RATIO: f32 = 0.5;
const MAX_SWIPE_OPEN_PERCENT: f32 = 50.0;
/// Ids that must remain allocatable after the seeds.
const ID_HEADROOM: ItemId = 1 << 32;

/// Tunables for one to-do screen session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Static header text.
    pub title: String,
    /// Shown in the add field while it is empty.
    pub placeholder: String,
    /// Item texts present when the session starts, in display order.
    pub seed_items: Vec<String>,
    /// First identifier handed out; seeds consume the first ones.
    pub first_item_id: ItemId,
    /// Share of screen width an open row slides, in percent.
    pub swipe_open_percent: f32,
    /// Share of the open distance a drag must travel to open a row.
    pub swipe_open_ratio: f32,
    /// Share of the open distance a drag back must travel to close a row.
    pub swipe_close_ratio: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            seed_items: vec![DEFAULT_SEED_TEXT.to_string(), DEFAULT_SEED_TEXT.to_string()],
            first_item_id: 1,
            swipe_open_percent: DEFAULT_SWIPE_OPEN_PERCENT,
            swipe_open_ratio: DEFAULT_SWIPE_RATIO,
            swipe_close_ratio: DEFAULT_SWIPE_RATIO,
        }
    }
}

impl ScreenConfig {
    /// Checks swipe tuning ranges.
    ///
    /// # Errors
    /// - `swipe_open_percent` outside `(0, 50]`.
    /// - Either ratio outside `(0, 1]`.
    /// - `first_item_id` too close to `ItemId::MAX` to allocate the seeds
    ///   plus `ID_HEADROOM` further ids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seed_count = ItemId::try_from(self.seed_items.len()).unwrap_or(ItemId::MAX);
        let id_room = self
            .first_item_id
            .checked_add(seed_count)
            .and_then(|value| value.checked_add(ID_HEADROOM));
        if id_room.is_none() {
            return Err(ConfigError::IdSpaceExhausted {
                first_item_id: self.first_item_id,
                seed_count: self.seed_items.len(),
            });
        }
        check_range(
            "swipe_open_percent",
            self.swipe_open_percent,
            MAX_SWIPE_OPEN_PERCENT,
        )?;
        check_range("swipe_open_ratio", self.swipe_open_ratio, 1.0)?;
        check_range("swipe_close_ratio", self.swipe_close_ratio, 1.0)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f32, max: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value, max })
    }
}

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    OutOfRange {
        field: &'static str,
        value: f32,
        max: f32,
    },
    /// Counter would run into `ItemId::MAX` and start repeating ids.
    IdSpaceExhausted {
        first_item_id: ItemId,
        seed_count: usize,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { field, value, max } => {
                write!(f, "{field} must be within (0, {max}], got {value}")
            }
            Self::IdSpaceExhausted {
                first_item_id,
                seed_count,
            } => write!(
                f,
                "first_item_id {first_item_id} leaves no id room for {seed_count} seed(s)"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ScreenConfig};

    #[test]
    fn default_config_is_valid_and_has_two_seeds() {
        let config = ScreenConfig::default();
        config.validate().expect("default config should validate");
        assert_eq!(config.seed_items.len(), 2);
        assert!(config.seed_items.iter().all(|text| text == "Sample Text"));
    }

    #[test]
    fn validate_rejects_zero_and_nan_values() {
        let config = ScreenConfig {
            swipe_open_percent: 0.0,
            ..ScreenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "swipe_open_percent",
                ..
            })
        ));

        let config = ScreenConfig {
            swipe_close_ratio: f32::NAN,
            ..ScreenConfig::default()
        };
        let err = config.validate().expect_err("NaN ratio must be rejected");
        assert!(err.to_string().contains("swipe_close_ratio"));
    }

    #[test]
    fn validate_rejects_first_item_id_near_max() {
        let config = ScreenConfig {
            first_item_id: i64::MAX,
            ..ScreenConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::IdSpaceExhausted {
                first_item_id: i64::MAX,
                seed_count: 2,
            })
        );

        let config = ScreenConfig {
            first_item_id: i64::MAX - 10,
            seed_items: Vec::new(),
            ..ScreenConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ScreenConfig {
            first_item_id: 1_700_000_000_000,
            ..ScreenConfig::default()
        };
        config.validate().expect("epoch-sized start leaves room");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ScreenConfig =
            serde_json::from_str(r#"{"title":"Groceries","seed_items":[]}"#).unwrap();
        assert_eq!(config.title, "Groceries");
        assert!(config.seed_items.is_empty());
        assert_eq!(config.placeholder, ScreenConfig::default().placeholder);
    }
}
