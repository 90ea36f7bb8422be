use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::frontmatter::{field, parse_frontmatter, FieldValue, Frontmatter};
use super::types::{check_description, check_skill_name, ValidationReport};
use crate::config::ValidationRules;
use crate::error::Result;

pub const SKILL_MD: &str = "SKILL.md";
pub const REFERENCES_DIR: &str = "references";

/// Validate a skill directory.
///
/// Structural problems are returned as report entries. Only unexpected I/O
/// failures (e.g. an unreadable SKILL.md) are returned as `Err`. Checking
/// stops early when SKILL.md is missing or its frontmatter can't be parsed.
pub fn validate_skill(skill_dir: &Path, rules: &ValidationRules) -> Result<ValidationReport> {
    let mut report = ValidationReport::default();
    info!(path = %skill_dir.display(), "validating skill");

    let skill_md_path = skill_dir.join(SKILL_MD);
    if !skill_md_path.is_file() {
        report.error("SKILL.md not found in skill root folder");
        return Ok(report);
    }

    let content = fs::read_to_string(&skill_md_path)?;

    let line_count = content.split('\n').count();
    debug!(line_count, "counted SKILL.md lines");
    if line_count > rules.max_lines {
        report.error(format!(
            "SKILL.md has {} lines (max {})",
            line_count, rules.max_lines
        ));
    }

    let fields = match parse_frontmatter(&content) {
        Frontmatter::Parsed(fields) => fields,
        Frontmatter::Missing => {
            report.error("SKILL.md must start with YAML frontmatter (---)");
            return Ok(report);
        }
        Frontmatter::Malformed => {
            report.error("Invalid YAML frontmatter format");
            return Ok(report);
        }
        Frontmatter::InvalidYaml(msg) => {
            report.error(format!("Invalid YAML in frontmatter: {}", msg));
            return Ok(report);
        }
        Frontmatter::NotAMapping => {
            report.error("Invalid YAML in frontmatter: expected a mapping of keys to values");
            return Ok(report);
        }
    };

    match field(&fields, "name", false) {
        FieldValue::Absent => report.error("Missing required 'name' field in frontmatter"),
        FieldValue::Unsupported => report.error("'name' field in frontmatter must be a string"),
        FieldValue::Text(name) => {
            for e in check_skill_name(&name, rules) {
                report.error(e);
            }
        }
    }

    match field(&fields, "description", true) {
        FieldValue::Absent => {
            report.error("Missing required 'description' field in frontmatter")
        }
        FieldValue::Unsupported => {
            report.error("'description' field in frontmatter must be a string")
        }
        FieldValue::Text(desc) => {
            let (errors, warnings) = check_description(&desc, rules);
            for e in errors {
                report.error(e);
            }
            for w in warnings {
                report.warning(w);
            }
        }
    }

    for name in &rules.discouraged_files {
        if skill_dir.join(name).exists() {
            report.warning(format!("Found {} in skill folder (not recommended)", name));
        }
    }

    let refs_path = skill_dir.join(REFERENCES_DIR);
    if refs_path.exists() && !refs_path.is_dir() {
        report.error("'references' should be a directory, not a file");
    }

    debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validation finished"
    );
    Ok(report)
}
