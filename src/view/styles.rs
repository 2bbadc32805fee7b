//! Colors and text styles.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on or off, regardless of environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CardStyles =====

/// Styles used across the card browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyles {
    /// Card name line.
    pub name: Style,
    /// Row labels ("Set:", "Type:").
    pub label: Style,
    /// Row values.
    pub value: Style,
    /// Rules text.
    pub text: Style,
    /// Hints, placeholders and the list-end marker.
    pub muted: Style,
    /// Validation and fetch errors.
    pub error: Style,
    /// Border of the pane with keyboard focus.
    pub focused_border: Style,
    /// Cursor cell in the search field.
    pub cursor: Style,
}

impl CardStyles {
    /// Styles with the given color configuration.
    ///
    /// With colors disabled only modifiers remain, so the UI stays legible
    /// on monochrome terminals.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                name: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                label: Style::default().fg(Color::Cyan),
                value: Style::default().fg(Color::White),
                text: Style::default().fg(Color::Gray),
                muted: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::Cyan),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                name: Style::default().add_modifier(Modifier::BOLD),
                label: Style::default(),
                value: Style::default(),
                text: Style::default(),
                muted: Style::default().add_modifier(Modifier::DIM),
                error: Style::default().add_modifier(Modifier::BOLD),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }
}

impl Default for CardStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::new(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(no_color)]
    fn no_color_flag_disables_colors() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn colors_enabled_by_default() {
        std::env::remove_var("NO_COLOR");
        assert!(ColorConfig::from_env_and_args(false).colors_enabled());
    }

    #[test]
    fn monochrome_styles_have_no_foreground() {
        let styles = CardStyles::with_color_config(ColorConfig::new(false));
        assert_eq!(styles.name.fg, None);
        assert_eq!(styles.error.fg, None);
    }
}
