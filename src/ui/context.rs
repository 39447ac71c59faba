use robodeploy::config::{ColorMode, Verbosity};
use robodeploy::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbosity: Verbosity,
        cli_color: Option<ColorWhen>,
        config_color: ColorMode,
    ) -> Self {
        Self::from_caps(json, verbosity, cli_color, config_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbosity: Verbosity,
        cli_color: Option<ColorWhen>,
        config_color: ColorMode,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config_color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbosity,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }

    /// Progress lines, headers and summaries
    pub fn shows_progress(&self) -> bool {
        !self.json && self.verbosity >= Verbosity::Normal
    }

    /// Exact command lines before they run
    pub fn shows_commands(&self) -> bool {
        !self.json && self.verbosity >= Verbosity::Verbose
    }

    /// Config file provenance and effective values
    pub fn shows_debug(&self) -> bool {
        !self.json && self.verbosity >= Verbosity::Debug
    }
}
