use crate::config::parse_toml;
use crate::domain::model::{BandLayout, CarouselSettings, DEFAULT_SWIPE_THRESHOLD_PX};
use crate::utils::error::{Result, SliderError};
use crate::utils::validation::{
    validate_finite_non_negative, validate_positive_number, validate_strictly_below, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Carousel tuning file. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliderConfig {
    pub autoplay: Option<AutoplayConfig>,
    pub swipe: Option<SwipeConfig>,
    pub resize: Option<ResizeConfig>,
    pub bands: Option<BandsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoplayConfig {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwipeConfig {
    pub threshold_px: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResizeConfig {
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandsConfig {
    pub wide_min_px: Option<f64>,
    pub medium_min_px: Option<f64>,
    pub medium_visible: Option<usize>,
    pub narrow_visible: Option<usize>,
}

impl SliderConfig {
    /// Loads the tuning file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SliderError::IoError)?;
        parse_toml(&content, &path.as_ref().display().to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_toml(content, "slider config")
    }

    pub fn autoplay_delay_ms(&self) -> u64 {
        self.autoplay
            .as_ref()
            .and_then(|a| a.delay_ms)
            .unwrap_or(5000)
    }

    pub fn resize_debounce_ms(&self) -> u64 {
        self.resize
            .as_ref()
            .and_then(|r| r.debounce_ms)
            .unwrap_or(150)
    }

    pub fn swipe_threshold_px(&self) -> f64 {
        self.swipe
            .as_ref()
            .and_then(|s| s.threshold_px)
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
    }

    pub fn band_layout(&self) -> BandLayout {
        let defaults = BandLayout::default();
        let Some(bands) = &self.bands else {
            return defaults;
        };
        BandLayout {
            wide_min_px: bands.wide_min_px.unwrap_or(defaults.wide_min_px),
            medium_min_px: bands.medium_min_px.unwrap_or(defaults.medium_min_px),
            medium_visible: bands.medium_visible.unwrap_or(defaults.medium_visible),
            narrow_visible: bands.narrow_visible.unwrap_or(defaults.narrow_visible),
        }
    }

    pub fn settings(&self) -> CarouselSettings {
        CarouselSettings {
            bands: self.band_layout(),
            autoplay_delay: Duration::from_millis(self.autoplay_delay_ms()),
            resize_debounce: Duration::from_millis(self.resize_debounce_ms()),
            swipe_threshold_px: self.swipe_threshold_px(),
        }
    }
}

impl Validate for SliderConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("autoplay.delay_ms", self.autoplay_delay_ms(), 1)?;
        validate_positive_number("resize.debounce_ms", self.resize_debounce_ms(), 1)?;
        validate_finite_non_negative("swipe.threshold_px", self.swipe_threshold_px())?;

        let bands = self.band_layout();
        validate_finite_non_negative("bands.wide_min_px", bands.wide_min_px)?;
        validate_finite_non_negative("bands.medium_min_px", bands.medium_min_px)?;
        validate_strictly_below(
            "bands.medium_min_px",
            bands.medium_min_px,
            "bands.wide_min_px",
            bands.wide_min_px,
        )?;
        validate_positive_number("bands.medium_visible", bands.medium_visible as u64, 1)?;
        validate_positive_number("bands.narrow_visible", bands.narrow_visible as u64, 1)?;
        Ok(())
    }
}
