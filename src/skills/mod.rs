pub mod frontmatter;
pub mod package;
pub mod types;
pub mod validate;

pub use package::{archive_members, format_size, package_skill};
pub use types::{check_description, check_skill_name, RenderedReport, ValidationReport};
pub use validate::{validate_skill, REFERENCES_DIR, SKILL_MD};
