use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use skillpack::skills::{archive_members, format_size};
use skillpack::{logging, package_skill, Config};

/// Bundle SKILL.md and references/ into a `<name>.skill` archive.
#[derive(Parser, Debug)]
#[command(name = "skill-package")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Skill directory to package
    skill_dir: PathBuf,

    /// Directory the archive is written to (created if missing)
    #[arg(env = "SKILL_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// List the archive members after packaging
    #[arg(long)]
    list: bool,

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

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let output = package_skill(&args.skill_dir, &args.output_dir)?;
    println!("✅ Packaged: {}", output.display());

    let size = fs::metadata(&output)?.len();
    println!("   Size: {} bytes", format_size(size));

    if args.list {
        for member in archive_members(&output)? {
            println!("   {}", member);
        }
    }

    Ok(())
}
