//! Card tunables. Every field has a default matching the stock card; a JSON
//! object passed to `start_card` may override any subset of them.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::card::evasion::EvasionBox;
use crate::card::phrases::PHRASES;

/// Viewport width (px) below which the mobile overlay replaces the card.
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;
/// How long the confetti loop keeps firing after "Yes".
pub const DEFAULT_CELEBRATION_MS: f64 = 3_000.0;
/// Approximate box of the evading button, used for placement bounds.
pub const DEFAULT_BUTTON_WIDTH: f64 = 100.0;
pub const DEFAULT_BUTTON_HEIGHT: f64 = 50.0;
/// Inset kept between the evading button and the card edge.
pub const DEFAULT_EVASION_MARGIN: f64 = 20.0;
pub const DEFAULT_HEART_COUNT: usize = 20;
/// Upper bound on background hearts; each one is a DOM node.
pub const MAX_HEART_COUNT: usize = 500;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CardConfig {
    pub breakpoint_px: u32,
    pub celebration_ms: f64,
    pub button_width: f64,
    pub button_height: f64,
    pub evasion_margin: f64,
    pub heart_count: usize,
    pub phrases: Vec<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            celebration_ms: DEFAULT_CELEBRATION_MS,
            button_width: DEFAULT_BUTTON_WIDTH,
            button_height: DEFAULT_BUTTON_HEIGHT,
            evasion_margin: DEFAULT_EVASION_MARGIN,
            heart_count: DEFAULT_HEART_COUNT,
            phrases: PHRASES.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

/// Why a config override was refused.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid card config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("celebrationMs must be positive, got {0}")]
    NonPositiveDuration(f64),
    #[error("button dimensions must be non-negative, got {width}x{height}")]
    NegativeButtonSize { width: f64, height: f64 },
    #[error("evasionMargin must be non-negative, got {0}")]
    NegativeMargin(f64),
    #[error("heartCount must be at most {max}, got {0}", max = MAX_HEART_COUNT)]
    TooManyHearts(usize),
    #[error("phrases must contain at least one entry")]
    EmptyPhrases,
    #[error("phrase #{0} is blank")]
    BlankPhrase(usize),
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl CardConfig {
    /// Parse a JSON override object; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: CardConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Fallback geometry for when the rendered button cannot be measured.
    pub fn evasion_box(&self) -> EvasionBox {
        EvasionBox {
            button_width: self.button_width,
            button_height: self.button_height,
            margin: self.evasion_margin,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.celebration_ms.is_finite() && self.celebration_ms > 0.0) {
            return Err(ConfigError::NonPositiveDuration(self.celebration_ms));
        }
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        if !(non_negative(self.button_width) && non_negative(self.button_height)) {
            return Err(ConfigError::NegativeButtonSize {
                width: self.button_width,
                height: self.button_height,
            });
        }
        if !non_negative(self.evasion_margin) {
            return Err(ConfigError::NegativeMargin(self.evasion_margin));
        }
        if self.heart_count > MAX_HEART_COUNT {
            return Err(ConfigError::TooManyHearts(self.heart_count));
        }
        if self.phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        if let Some(idx) = self.phrases.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigError::BlankPhrase(idx));
        }
        Ok(())
    }
}
