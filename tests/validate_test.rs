use std::fs;
use std::path::Path;
use std::process::Command;

use skillpack::{validate_skill, ValidationRules};
use tempfile::TempDir;

fn setup_skill(root: &Path, name: &str, frontmatter: &str) -> std::path::PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("Failed to create skill dir");
    let body = "Body line\n".repeat(10);
    fs::write(dir.join("SKILL.md"), format!("---\n{}---\n\n{}", frontmatter, body))
        .expect("Failed to write SKILL.md");
    dir
}

fn run_validator(path: &Path) -> (i32, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_skill-validate"))
        .arg(path)
        .env_remove("RUST_LOG")
        .env_remove("SKILL_LOG")
        .output()
        .expect("Failed to run skill-validate");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

#[test]
fn test_valid_skill_with_references() {
    let temp = TempDir::new().unwrap();
    let skill = setup_skill(temp.path(), "my-skill", "name: my-skill\ndescription: \"Does X\"\n");
    fs::create_dir(skill.join("references")).unwrap();
    fs::write(skill.join("references/guide.txt"), "guide").unwrap();

    let report = validate_skill(&skill, &ValidationRules::default()).unwrap();
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());

    let (code, stdout) = run_validator(&skill);
    assert_eq!(code, 0);
    assert!(stdout.starts_with(&format!("Validating: {}", skill.display())));
    assert!(stdout.contains("✅ Skill is valid!"));
}

#[test]
fn test_bad_name_reports_two_errors() {
    let temp = TempDir::new().unwrap();
    let name = format!("My_Skill{}", "x".repeat(57));
    assert_eq!(name.len(), 65);
    let skill = setup_skill(
        temp.path(),
        "bad-skill",
        &format!("name: \"{}\"\ndescription: Fine\n", name),
    );

    let report = validate_skill(&skill, &ValidationRules::default()).unwrap();
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors[0].contains("exceeds 64 characters (65)"));
    assert!(report.errors[1].contains("must be kebab-case"));

    let (code, stdout) = run_validator(&skill);
    assert_eq!(code, 1);
    assert!(stdout.contains("❌ ERRORS:"));
    assert!(stdout.contains("Validation FAILED with 2 error(s)"));
}

#[test]
fn test_underscore_or_uppercase_name() {
    let temp = TempDir::new().unwrap();
    for (i, name) in ["my_skill", "MySkill", "my-Skill"].iter().enumerate() {
        let skill = setup_skill(
            temp.path(),
            &format!("skill-{}", i),
            &format!("name: {}\ndescription: Fine\n", name),
        );
        let report = validate_skill(&skill, &ValidationRules::default()).unwrap();
        assert_eq!(report.errors.len(), 1, "name {}", name);
        assert!(report.errors[0].contains("kebab-case"));
    }
}

#[test]
fn test_warnings_do_not_fail() {
    let temp = TempDir::new().unwrap();
    let skill = setup_skill(
        temp.path(),
        "warned",
        "name: warned\ndescription: \"Returns <html>\"\n",
    );
    fs::write(skill.join("README.md"), "readme").unwrap();

    let (code, stdout) = run_validator(&skill);
    assert_eq!(code, 0);
    assert!(stdout.contains("⚠️  WARNINGS:"));
    assert!(stdout.contains("   - Found README.md in skill folder (not recommended)"));
    assert!(stdout.contains("✅ Skill is valid!"));
}

#[test]
fn test_missing_skill_md_cli() {
    let temp = TempDir::new().unwrap();

    let (code, stdout) = run_validator(temp.path());
    assert_eq!(code, 1);
    assert!(stdout.contains("SKILL.md not found in skill root folder"));
    assert!(stdout.contains("Validation FAILED with 1 error(s)"));
}

#[test]
fn test_not_a_directory_cli() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    let (code, stdout) = run_validator(&file);
    assert_eq!(code, 1);
    assert!(stdout.contains("is not a directory"));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let skill = setup_skill(temp.path(), "json-skill", "description: Only a description\n");

    let output = Command::new(env!("CARGO_BIN_EXE_skill-validate"))
        .arg(&skill)
        .arg("--json")
        .output()
        .expect("Failed to run skill-validate");
    assert_eq!(output.status.code(), Some(1));

    let body: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Failed to parse JSON");
    assert_eq!(
        body["errors"][0],
        "Missing required 'name' field in frontmatter"
    );
    assert!(body["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn test_findings_only_in_report() {
    let temp = TempDir::new().unwrap();
    let skill = setup_skill(temp.path(), "quiet", "name: Bad_Name\n");

    let output = Command::new(env!("CARGO_BIN_EXE_skill-validate"))
        .arg(&skill)
        .env_remove("RUST_LOG")
        .env_remove("SKILL_LOG")
        .output()
        .expect("Failed to run skill-validate");
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("must be kebab-case"));
    assert!(stdout.contains("Missing required 'description' field"));
    assert!(output.stderr.is_empty(), "unexpected stderr: {:?}", output.stderr);
}

#[test]
fn test_verbose_logs_have_no_ansi_when_piped() {
    let temp = TempDir::new().unwrap();
    let skill = setup_skill(temp.path(), "noisy", "name: noisy\ndescription: Fine\n");

    let output = Command::new(env!("CARGO_BIN_EXE_skill-validate"))
        .arg(&skill)
        .arg("--verbose")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run skill-validate");
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validating skill"));
    assert!(!stderr.contains('\x1b'));
}

#[test]
fn test_limits_from_env() {
    let temp = TempDir::new().unwrap();
    let skill = setup_skill(temp.path(), "limits", "name: abcdef\ndescription: Fine\n");

    let output = Command::new(env!("CARGO_BIN_EXE_skill-validate"))
        .arg(&skill)
        .env("SKILL_MAX_NAME_LEN", "3")
        .output()
        .expect("Failed to run skill-validate");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("name 'abcdef' exceeds 3 characters (6)"));

    let output = Command::new(env!("CARGO_BIN_EXE_skill-validate"))
        .arg(&skill)
        .env("SKILL_MAX_LINES", "5")
        .env("SKILL_MAX_DESCRIPTION_LEN", "2")
        .output()
        .expect("Failed to run skill-validate");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lines (max 5)"));
    assert!(stdout.contains("description exceeds 2 characters (4)"));
}
