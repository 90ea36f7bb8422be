//! Validate skill directories and package them into `.skill` archives.
//!
//! A skill is a directory holding a `SKILL.md` (YAML frontmatter followed by
//! free-form documentation) and an optional `references/` tree.

pub mod config;
pub mod error;
pub mod logging;
pub mod skills;

pub use config::{Config, ValidationRules};
pub use error::{Result, SkillError};
pub use skills::{package_skill, validate_skill, ValidationReport};
