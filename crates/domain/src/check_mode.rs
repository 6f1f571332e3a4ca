use crate::config::ConfigError;
use std::fmt;

/// Which half of the maintenance window a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    Pre,
    Post,
}

impl CheckMode {
    /// Resolves the mode from the command-line selectors.
    ///
    /// `check` is the legacy `--check pre|post` form; it cannot be combined
    /// with the `--pre`/`--post` flags.
    pub fn from_flags(pre: bool, post: bool, check: Option<&str>) -> Result<Self, ConfigError> {
        if pre && post {
            return Err(ConfigError::ModeSelection(
                "cannot specify both --pre and --post".to_string(),
            ));
        }
        if check.is_some() && (pre || post) {
            return Err(ConfigError::ModeSelection(
                "do not combine --check with --pre or --post".to_string(),
            ));
        }

        match (pre, post, check) {
            (true, _, _) => Ok(CheckMode::Pre),
            (_, true, _) => Ok(CheckMode::Post),
            (_, _, Some(value)) => match value.trim().to_ascii_lowercase().as_str() {
                "pre" => Ok(CheckMode::Pre),
                "post" => Ok(CheckMode::Post),
                other => Err(ConfigError::ModeSelection(format!(
                    "unknown check '{}', expected 'pre' or 'post'",
                    other
                ))),
            },
            _ => Err(ConfigError::ModeSelection(
                "either --pre or --post must be specified".to_string(),
            )),
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMode::Pre => f.write_str("pre-check"),
            CheckMode::Post => f.write_str("post-check"),
        }
    }
}
