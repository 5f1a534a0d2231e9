use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Fully resolved widget settings. Built once when the widget attaches,
/// never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Fit exactly once and never watch for resizes.
    #[serde(default = "Settings::default_run_once")]
    pub run_once: bool,

    /// Selector, scoped to the container, identifying the element to fit.
    #[serde(default = "Settings::default_target")]
    pub target: String,

    /// Poll interval or debounce delay for the Change Watcher.
    #[serde(
        default = "Settings::default_throttle",
        with = "humantime_serde"
    )]
    pub throttle: Duration,

    /// How the Change Watcher detects container size changes.
    #[serde(default)]
    pub watch: WatchStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatchStrategy {
    /// Re-measure the container every `throttle` interval.
    #[default]
    Poll,
    /// Re-measure after a burst of resize events quiets for `throttle`.
    ResizeEvent,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            run_once: Self::default_run_once(),
            target: Self::default_target(),
            throttle: Self::default_throttle(),
            watch: WatchStrategy::default(),
        }
    }
}

impl Settings {
    const fn default_run_once() -> bool {
        false
    }

    fn default_target() -> String {
        "img".to_owned()
    }

    // 30fps
    const fn default_throttle() -> Duration {
        Duration::from_millis(32)
    }

    /// Overlay each `Options` in order over the defaults, later layers
    /// winning per field. Pure and trusting: no value validation here.
    pub fn resolve<'a, I>(overlays: I) -> Self
    where
        I: IntoIterator<Item = &'a Options>,
    {
        let mut settings = Self::default();
        for overlay in overlays {
            settings.overlay(overlay);
        }
        settings
    }

    /// Overlay one options layer over this record, `Some` fields winning.
    pub fn overlaid(mut self, options: &Options) -> Self {
        self.overlay(options);
        self
    }

    fn overlay(&mut self, options: &Options) {
        if let Some(run_once) = options.run_once {
            self.run_once = run_once;
        }
        if let Some(target) = &options.target {
            self.target = target.clone();
        }
        if let Some(throttle) = options.throttle {
            self.throttle = throttle;
        }
        if let Some(watch) = options.watch {
            self.watch = watch;
        }
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate invariants that cannot be expressed via serde defaults
    /// alone. Only the file-loading path runs this; programmatic overlays
    /// trust the caller.
    pub fn validated(self) -> Result<Self> {
        if self.target.trim().is_empty() {
            return Err(Error::InvalidSettings(
                "target selector must not be empty".to_owned(),
            ));
        }
        if self.throttle.is_zero() {
            return Err(Error::InvalidSettings(
                "throttle must be greater than zero".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// A partial settings overlay. Every field is optional; absent fields leave
/// the earlier layer (or the default) in place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Options {
    #[serde(default)]
    pub run_once: Option<bool>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default, with = "humantime_serde::option")]
    pub throttle: Option<Duration>,

    #[serde(default)]
    pub watch: Option<WatchStrategy>,
}
