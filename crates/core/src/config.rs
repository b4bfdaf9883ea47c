//! Session configuration
//!
//! `rows` and `columns` size the grid, capped at `MAX_ROWS` x `MAX_COLUMNS`
//! so every frontend can lay the grid out in `u16` screen coordinates.
//! `width` and `height` are display dimensions in pixels, carried for
//! frontends and otherwise unused by the core.

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_COLUMNS, DEFAULT_HEIGHT, DEFAULT_ROWS, DEFAULT_WIDTH, MAX_COLUMNS, MAX_ROWS,
};

pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";
pub const ENV_ROWS: &str = "BLOCKFALL_ROWS";
pub const ENV_COLUMNS: &str = "BLOCKFALL_COLUMNS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub rows: u16,
    pub columns: u16,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl SessionConfig {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Defaults overridden by `BLOCKFALL_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key.
    ///
    /// Empty values are ignored; unparsable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, ENV_WIDTH)? {
            config.width = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_HEIGHT)? {
            config.height = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_ROWS)? {
            config.rows = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_COLUMNS)? {
            config.columns = v;
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject zero dimensions and grids larger than `MAX_ROWS` x `MAX_COLUMNS`
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zero = [
            ("width", self.width == 0),
            ("height", self.height == 0),
            ("rows", self.rows == 0),
            ("columns", self.columns == 0),
        ];
        if let Some(&(field, _)) = zero.iter().find(|(_, is_zero)| *is_zero) {
            return Err(ConfigError::ZeroDimension { field });
        }

        let limits = [("rows", self.rows, MAX_ROWS), ("columns", self.columns, MAX_COLUMNS)];
        match limits.iter().find(|(_, value, max)| value > max) {
            Some(&(field, value, max)) => Err(ConfigError::TooLarge { field, value, max }),
            None => Ok(()),
        }
    }

    /// Spawn column for new pieces: `columns / 2 - 2` with integer division.
    ///
    /// Odd widths spawn one column left of center.
    pub fn spawn_column(&self) -> i32 {
        self.columns as i32 / 2 - 2
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue { key, value: raw })
}
