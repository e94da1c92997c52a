use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_err as fs;
use std::process::Command as ProcessCommand;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print schema identifiers used by scriptfix.
    PrintSchemas,
    /// Create an empty golden fixture layout (tests/fixtures/<name>/{input,expected}).
    InitFixture { name: String },
    /// Bless golden fixtures (overwrite expected outputs).
    BlessFixtures,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintSchemas => {
            println!("{}", scriptfix_types::schema::SCRIPTFIX_REPORT_V1);
        }
        Command::InitFixture { name } => {
            let root = format!("tests/fixtures/{name}");
            if fs::metadata(&root).is_ok() {
                anyhow::bail!("fixture {root} already exists");
            }
            for sub in ["input", "expected"] {
                fs::create_dir_all(format!("{root}/{sub}"))
                    .with_context(|| format!("create {root}/{sub}"))?;
            }
            println!("initialized {root}/{{input,expected}}");
            println!("add a golden test calling run_fixture_test(\"{name}\", ...) and run `cargo run -p xtask -- bless-fixtures`");
        }
        Command::BlessFixtures => {
            let status = ProcessCommand::new("cargo")
                .args(["test", "-p", "scriptfix-core", "--test", "golden_fixtures"])
                .env("SCRIPTFIX_BLESS", "1")
                .status()
                .context("run golden fixture blessing")?;
            if !status.success() {
                anyhow::bail!("bless-fixtures failed");
            }
        }
    }
    Ok(())
}
