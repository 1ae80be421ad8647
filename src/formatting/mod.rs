//! Terminal formatting modes: color and emoji handling for report output.

use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use emoji if the terminal looks Unicode-capable
    Always,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_emoji_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    /// Plain output: no colors, no emoji. Used for --plain and for file
    /// destinations.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // NO_COLOR per the no-color.org convention
        if env::var_os("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
            config.color = ColorMode::Never;
            config.emoji = EmojiMode::Never;
        }

        config
    }
}

fn detect_color_support() -> bool {
    std::io::stdout().is_terminal()
}

fn detect_emoji_support() -> bool {
    let lang = env::var("LANG").unwrap_or_default();
    lang.to_lowercase().contains("utf-8") || lang.to_lowercase().contains("utf8")
}
