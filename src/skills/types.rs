use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::config::ValidationRules;

/// Findings from one validation run. Errors block packaging, warnings don't.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::debug!(error = %msg, "validation error");
        self.errors.push(msg);
    }

    pub(crate) fn warning(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::debug!(warning = %msg, "validation warning");
        self.warnings.push(msg);
    }

    /// Human-readable report as printed by `skill-validate`.
    pub fn render<'a>(&'a self, path: &'a Path) -> RenderedReport<'a> {
        RenderedReport { report: self, path }
    }
}

/// A report paired with the directory it describes, ready for display.
pub struct RenderedReport<'a> {
    report: &'a ValidationReport,
    path: &'a Path,
}

impl fmt::Display for RenderedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validating: {}", self.path.display())?;
        writeln!(f, "{}", "-".repeat(50))?;

        if !self.report.warnings.is_empty() {
            writeln!(f, "\n⚠️  WARNINGS:")?;
            for w in &self.report.warnings {
                writeln!(f, "   - {}", w)?;
            }
        }

        if self.report.errors.is_empty() {
            return writeln!(f, "\n✅ Skill is valid!");
        }

        writeln!(f, "\n❌ ERRORS:")?;
        for e in &self.report.errors {
            writeln!(f, "   - {}", e)?;
        }
        writeln!(
            f,
            "\nValidation FAILED with {} error(s)",
            self.report.errors.len()
        )
    }
}

// Lowercase alphanumeric and hyphens, in any arrangement
static SKILL_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_skill_name_regex() -> &'static Regex {
    SKILL_NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z0-9-]+$").expect("skill name pattern is valid")
    })
}

/// Checks a skill name. Length and character set are checked independently,
/// so one name can produce two errors.
pub fn check_skill_name(name: &str, rules: &ValidationRules) -> Vec<String> {
    let mut errors = Vec::new();
    let len = name.chars().count();

    if len > rules.max_name_len {
        errors.push(format!(
            "name '{}' exceeds {} characters ({})",
            name, rules.max_name_len, len
        ));
    }

    if !get_skill_name_regex().is_match(name) {
        errors.push(format!(
            "name '{}' must be kebab-case (a-z, 0-9, - only)",
            name
        ));
    }

    errors
}

/// Checks a skill description, returning `(errors, warnings)`.
pub fn check_description(desc: &str, rules: &ValidationRules) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let len = desc.chars().count();

    if len > rules.max_description_len {
        errors.push(format!(
            "description exceeds {} characters ({})",
            rules.max_description_len, len
        ));
    }

    if desc.contains('<') || desc.contains('>') {
        warnings.push("description contains < or > which may cause issues".to_string());
    }

    (errors, warnings)
}
