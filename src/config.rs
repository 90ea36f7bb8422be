use std::env;

pub const DEFAULT_MAX_LINES: usize = 500;
pub const DEFAULT_MAX_NAME_LEN: usize = 64;
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 1024;

/// Files that may sit at the skill root but are flagged by validation.
pub const DISCOURAGED_FILES: &[&str] = &["README.md", "CHANGELOG.md"];

#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
    pub rules: ValidationRules,
}

/// Limits applied by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    pub max_lines: usize,
    pub max_name_len: usize,
    pub max_description_len: usize,
    pub discouraged_files: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
            discouraged_files: DISCOURAGED_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_filter: env::var("SKILL_LOG").unwrap_or_else(|_| "skillpack=warn".into()),
            rules: ValidationRules {
                max_lines: env_usize("SKILL_MAX_LINES", DEFAULT_MAX_LINES),
                max_name_len: env_usize("SKILL_MAX_NAME_LEN", DEFAULT_MAX_NAME_LEN),
                max_description_len: env_usize(
                    "SKILL_MAX_DESCRIPTION_LEN",
                    DEFAULT_MAX_DESCRIPTION_LEN,
                ),
                ..ValidationRules::default()
            },
        }
    }
}
