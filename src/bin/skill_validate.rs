use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use skillpack::{logging, validate_skill, Config};

/// Check a skill directory against the SKILL.md layout and metadata rules.
#[derive(Parser, Debug)]
#[command(name = "skill-validate")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Skill directory to validate
    skill_dir: PathBuf,

    /// Print findings as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Log debug-level events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from_env();
    logging::init_tracing(&config, args.verbose);

    if !args.skill_dir.is_dir() {
        println!("Error: {} is not a directory", args.skill_dir.display());
        return ExitCode::FAILURE;
    }

    match run(&args, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            println!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config) -> anyhow::Result<bool> {
    let report = validate_skill(&args.skill_dir, &config.rules)
        .with_context(|| format!("failed to validate {}", args.skill_dir.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render(&args.skill_dir));
    }

    Ok(report.is_valid())
}
