//! Game configuration.
//!
//! Defaults match a single 32x32 panel. Every field can be overridden from the
//! environment; unparsable values fall back to the default and are reported
//! as [`Fallback`]s, and [`SnakeConfig::validate`] rejects geometry the game
//! cannot start on.
//!
//! The environment is read before any logger exists, so fallbacks are handed
//! back to the caller to report once logging is up.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use thiserror::Error;

use crate::core::{GameState, Layout};
use crate::types::{
    DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, DEFAULT_SEGMENT_SIZE, DEFAULT_SNAKE_LENGTH,
    MAX_DISPLAY_SIZE, MAX_SNAKE_LENGTH, TICK_MS,
};

/// Whether the frame of the tick that kills the snake is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FatalFrame {
    /// End the game without drawing the fatal position.
    #[default]
    Skip,
    /// Draw the fatal position, then end the game.
    Render,
}

impl FromStr for FatalFrame {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(FatalFrame::Skip),
            "render" => Ok(FatalFrame::Render),
            _ => Err(ConfigError::UnknownOption {
                value: s.to_string(),
                expected: "skip, render",
            }),
        }
    }
}

/// Where player tokens come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Terminal key presses.
    #[default]
    Keys,
    /// One token per line on stdin.
    Lines,
}

impl FromStr for InputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keys" => Ok(InputMode::Keys),
            "lines" => Ok(InputMode::Lines),
            _ => Err(ConfigError::UnknownOption {
                value: s.to_string(),
                expected: "keys, lines",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("display must be at least 1x1 pixels (got {width}x{height})")]
    EmptyDisplay { width: u16, height: u16 },
    #[error("display sides must be at most {max} pixels (got {width}x{height})")]
    DisplayTooLarge { width: u16, height: u16, max: u16 },
    #[error("segment size must be positive")]
    ZeroSegmentSize,
    #[error("snake length must be between 1 and {max} (got {length})")]
    BadLength { length: usize, max: usize },
    #[error(
        "a {length}-segment snake does not fit a {width}x{height} display with {segment_size}px segments"
    )]
    DoesNotFit {
        length: usize,
        width: u16,
        height: u16,
        segment_size: u16,
    },
    #[error("unknown option {value:?} (expected one of: {expected})")]
    UnknownOption {
        value: String,
        expected: &'static str,
    },
}

/// A variable that was set but could not be parsed; its default was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ignoring unparsable {}={:?}, using the default", self.key, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeConfig {
    pub display_width: u16,
    pub display_height: u16,
    pub segment_size: u16,
    pub length: usize,
    pub tick: Duration,
    pub fatal_frame: FatalFrame,
    pub input: InputMode,
    /// Log file; `None` disables logging.
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            segment_size: DEFAULT_SEGMENT_SIZE,
            length: DEFAULT_SNAKE_LENGTH,
            tick: Duration::from_millis(TICK_MS),
            fatal_frame: FatalFrame::Skip,
            input: InputMode::Keys,
            log_path: Some("tui-snake.log".to_string()),
            log_level: LevelFilter::Info,
        }
    }
}

impl SnakeConfig {
    /// Create from environment variables.
    pub fn from_env() -> (Self, Vec<Fallback>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup (environment, tests).
    ///
    /// Unparsable values keep their default and are returned as fallbacks for
    /// the caller to report.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<Fallback>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        let mut fb = Vec::new();

        let log_path = match lookup("SNAKE_LOG_PATH") {
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(s.trim().to_string()),
            None => d.log_path,
        };

        let config = Self {
            display_width: parsed(&lookup, &mut fb, "SNAKE_DISPLAY_WIDTH", d.display_width),
            display_height: parsed(&lookup, &mut fb, "SNAKE_DISPLAY_HEIGHT", d.display_height),
            segment_size: parsed(&lookup, &mut fb, "SNAKE_SEGMENT_SIZE", d.segment_size),
            length: parsed(&lookup, &mut fb, "SNAKE_LENGTH", d.length),
            tick: Duration::from_millis(parsed(&lookup, &mut fb, "SNAKE_TICK_MS", TICK_MS)),
            fatal_frame: parsed(&lookup, &mut fb, "SNAKE_FATAL_FRAME", d.fatal_frame),
            input: parsed(&lookup, &mut fb, "SNAKE_INPUT", d.input),
            log_path,
            log_level: parsed(&lookup, &mut fb, "SNAKE_LOG_LEVEL", d.log_level),
        };
        (config, fb)
    }

    pub fn layout(&self) -> Layout {
        Layout::new(
            self.display_width as i32,
            self.display_height as i32,
            self.segment_size as i32,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_width == 0 || self.display_height == 0 {
            return Err(ConfigError::EmptyDisplay {
                width: self.display_width,
                height: self.display_height,
            });
        }
        if self.display_width > MAX_DISPLAY_SIZE || self.display_height > MAX_DISPLAY_SIZE {
            return Err(ConfigError::DisplayTooLarge {
                width: self.display_width,
                height: self.display_height,
                max: MAX_DISPLAY_SIZE,
            });
        }
        if self.segment_size == 0 {
            return Err(ConfigError::ZeroSegmentSize);
        }
        if self.length == 0 || self.length > MAX_SNAKE_LENGTH {
            return Err(ConfigError::BadLength {
                length: self.length,
                max: MAX_SNAKE_LENGTH,
            });
        }
        if GameState::new(self.layout(), self.length).is_none() {
            return Err(ConfigError::DoesNotFit {
                length: self.length,
                width: self.display_width,
                height: self.display_height,
                segment_size: self.segment_size,
            });
        }
        Ok(())
    }
}

fn parsed<T, F>(lookup: &F, fallbacks: &mut Vec<Fallback>, key: &'static str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            fallbacks.push(Fallback { key, value: raw });
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = SnakeConfig::default();
        assert_eq!(config.display_width, 32);
        assert_eq!(config.segment_size, 2);
        assert_eq!(config.length, 5);
        assert_eq!(config.tick, Duration::from_millis(1000));
        assert_eq!(config.fatal_frame, FatalFrame::Skip);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_overrides() {
        let (config, _) = SnakeConfig::from_lookup(lookup(&[
            ("SNAKE_DISPLAY_WIDTH", "64"),
            ("SNAKE_DISPLAY_HEIGHT", " 48 "),
            ("SNAKE_SEGMENT_SIZE", "4"),
            ("SNAKE_LENGTH", "3"),
            ("SNAKE_TICK_MS", "150"),
            ("SNAKE_FATAL_FRAME", "Render"),
            ("SNAKE_INPUT", "lines"),
            ("SNAKE_LOG_PATH", ""),
            ("SNAKE_LOG_LEVEL", "trace"),
        ]));
        assert_eq!(config.display_width, 64);
        assert_eq!(config.display_height, 48);
        assert_eq!(config.segment_size, 4);
        assert_eq!(config.length, 3);
        assert_eq!(config.tick, Duration::from_millis(150));
        assert_eq!(config.fatal_frame, FatalFrame::Render);
        assert_eq!(config.input, InputMode::Lines);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, LevelFilter::Trace);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let (config, fallbacks) = SnakeConfig::from_lookup(lookup(&[
            ("SNAKE_DISPLAY_WIDTH", "wide"),
            ("SNAKE_LENGTH", "-1"),
            ("SNAKE_FATAL_FRAME", "maybe"),
            ("SNAKE_INPUT", "mouse"),
            ("SNAKE_LOG_LEVEL", "loud"),
        ]));
        assert_eq!(config, SnakeConfig::default());

        let keys: Vec<&str> = fallbacks.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec![
                "SNAKE_DISPLAY_WIDTH",
                "SNAKE_LENGTH",
                "SNAKE_FATAL_FRAME",
                "SNAKE_INPUT",
                "SNAKE_LOG_LEVEL",
            ]
        );
        assert_eq!(
            fallbacks[2],
            Fallback {
                key: "SNAKE_FATAL_FRAME",
                value: "maybe".to_string()
            }
        );
    }

    #[test]
    fn valid_values_are_not_fallbacks() {
        let (_, fallbacks) = SnakeConfig::from_lookup(lookup(&[
            ("SNAKE_LENGTH", "7"),
            ("SNAKE_INPUT", " Lines "),
            ("SNAKE_LOG_LEVEL", "debug"),
        ]));
        assert!(fallbacks.is_empty());
    }

    #[test]
    fn options_parse_case_insensitively() {
        assert_eq!("RENDER".parse::<FatalFrame>(), Ok(FatalFrame::Render));
        assert_eq!(" keys ".parse::<InputMode>(), Ok(InputMode::Keys));
        assert!(matches!(
            "mouse".parse::<InputMode>(),
            Err(ConfigError::UnknownOption { .. })
        ));
    }

    #[test]
    fn validate_rejects_unplayable_geometry() {
        let base = SnakeConfig::default();

        let config = SnakeConfig {
            segment_size: 0,
            ..base.clone()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSegmentSize));

        let config = SnakeConfig {
            display_height: 0,
            ..base.clone()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyDisplay { .. })
        ));

        let config = SnakeConfig {
            display_width: MAX_DISPLAY_SIZE + 1,
            ..base.clone()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DisplayTooLarge { .. })
        ));

        let config = SnakeConfig {
            display_width: u16::MAX,
            ..base.clone()
        };
        assert!(config.validate().is_err());

        let config = SnakeConfig {
            length: MAX_SNAKE_LENGTH + 1,
            ..base.clone()
        };
        assert!(matches!(config.validate(), Err(ConfigError::BadLength { .. })));

        // 16 columns: a 9-long snake from column 8 reaches column 0.
        let config = SnakeConfig { length: 9, ..base };
        assert!(matches!(config.validate(), Err(ConfigError::DoesNotFit { .. })));
    }
}
