use provisio::config::{AnimationMode, ColorMode, Config};
use provisio::OutputFormat;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
}

impl UiContext {
    pub fn new(output: OutputFormat, cli_color: Option<ColorMode>, config: &Config) -> Self {
        Self::from_caps(output, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        output: OutputFormat,
        cli_color: Option<ColorMode>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color.unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        let animation = if !output.is_interactive() || caps.is_ci {
            false
        } else {
            match config.output.animation {
                AnimationMode::Never | AnimationMode::Minimal => false,
                AnimationMode::Always => caps.is_tty,
                AnimationMode::Auto => caps.is_tty && !caps.is_ci,
            }
        };

        Self {
            color,
            unicode: caps.supports_unicode,
            animation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn ci_forces_animation_off_even_when_config_is_always() {
        let mut config = Config::default();
        config.output.animation = AnimationMode::Always;

        let ui = UiContext::from_caps(OutputFormat::None, None, &config, tty_caps(true));
        assert!(!ui.animation);
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let ui = UiContext::from_caps(OutputFormat::None, None, &Config::default(), tty_caps(true));
        assert!(!ui.color);
    }

    #[test]
    fn explicit_color_flag_wins_over_config() {
        let mut config = Config::default();
        config.output.color = ColorMode::Never;

        let ui = UiContext::from_caps(
            OutputFormat::None,
            Some(ColorMode::Always),
            &config,
            tty_caps(true),
        );
        assert!(ui.color);
    }

    #[test]
    fn structured_output_never_animates() {
        let ui =
            UiContext::from_caps(OutputFormat::Json, None, &Config::default(), tty_caps(false));
        assert!(!ui.animation);
    }

    #[test]
    fn interactive_tty_animates_by_default() {
        let ui =
            UiContext::from_caps(OutputFormat::None, None, &Config::default(), tty_caps(false));
        assert!(ui.animation);
        assert!(ui.color);
    }
}
