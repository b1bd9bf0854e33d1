use derive_from_env::FromEnv;

use crate::{Level, resolve_level};

/// Logger settings read from the process environment.
///
/// `LOG_LEVEL` selects the threshold (`error`, `info`, `debug`, case-insensitive).
/// `LOG_COLOR` enables coloured level names (`true`, `1`, `yes` or `on`).
/// Each variable is interpreted on its own; an unusable value only resets that setting.
#[derive(FromEnv, Debug, Clone)]
#[from_env(prefix = "LOG")]
#[allow(non_snake_case)]
pub struct LogEnvConfig {
    #[from_env(default = "info")]
    pub LEVEL: String,
    #[from_env(default = "false")]
    pub COLOR: String,
}

impl Default for LogEnvConfig {
    fn default() -> Self {
        Self {
            LEVEL: "info".into(),
            COLOR: "false".into(),
        }
    }
}

impl LogEnvConfig {
    /// Reads the environment.
    pub fn load() -> Self {
        Self::from_env().unwrap_or_default()
    }

    pub fn level(&self) -> Level {
        resolve_level(&self.LEVEL)
    }

    pub fn color(&self) -> bool {
        parse_flag(&self.COLOR)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[test]
fn test_default_config() {
    let config = LogEnvConfig::default();
    assert_eq!(config.level(), Level::Info);
    assert!(!config.color());
}

#[test]
fn test_settings_are_independent() {
    let config = LogEnvConfig {
        LEVEL: "debug".into(),
        COLOR: "not-a-bool".into(),
    };
    assert_eq!(config.level(), Level::Debug);
    assert!(!config.color());

    let config = LogEnvConfig {
        LEVEL: "bogus".into(),
        COLOR: "1".into(),
    };
    assert_eq!(config.level(), Level::Info);
    assert!(config.color());
}

#[test]
fn test_parse_flag() {
    for yes in ["true", "TRUE", "1", "yes", "On", " on "] {
        assert!(parse_flag(yes), "{yes}");
    }
    for no in ["false", "0", "no", "off", "", "2", "enabled"] {
        assert!(!parse_flag(no), "{no}");
    }
}
