use crate::ConfigError;
use std::sync::OnceLock;

pub const ENV_LINE_ENDING: &str = "SOUL_LINE_ENDING";
pub const ENV_FLUSH: &str = "SOUL_FLUSH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }
}

/// Settings for the printing side of the runtime
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub line_ending: LineEnding,
    /// Flush the sink after every line terminator
    pub flush_on_newline: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Lf,
            flush_on_newline: true,
        }
    }
}

impl RuntimeConfig {
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_flush(mut self, flush: bool) -> Self {
        self.flush_on_newline = flush;
        self
    }

    /// Read settings from `SOUL_LINE_ENDING` and `SOUL_FLUSH`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_LINE_ENDING) {
            config.line_ending = match value.trim().to_ascii_lowercase().as_str() {
                "lf" => LineEnding::Lf,
                "crlf" => LineEnding::CrLf,
                _ => return Err(invalid(ENV_LINE_ENDING, value, "lf, crlf")),
            };
        }

        if let Some(value) = lookup(ENV_FLUSH) {
            config.flush_on_newline = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(invalid(ENV_FLUSH, value, "1, 0, true, false")),
            };
        }

        log::debug!("runtime config: {:?}", config);
        Ok(config)
    }

    /// Process-wide configuration, read from the environment on first use.
    ///
    /// Invalid settings fall back to the defaults.
    pub fn global() -> &'static RuntimeConfig {
        static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|err| {
                log::warn!("{}, using default runtime config", err);
                Self::default()
            })
        })
    }
}

fn invalid(key: &str, value: String, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value,
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.line_ending.as_bytes(), b"\n");
    }

    #[test]
    fn test_overrides() {
        let config =
            RuntimeConfig::from_lookup(lookup(&[("SOUL_LINE_ENDING", "CRLF"), ("SOUL_FLUSH", "0")]))
                .unwrap();
        assert_eq!(config.line_ending, LineEnding::CrLf);
        assert!(!config.flush_on_newline);
    }

    #[test]
    fn test_invalid_value() {
        let err = RuntimeConfig::from_lookup(lookup(&[("SOUL_FLUSH", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "SOUL_FLUSH"));
    }
}
