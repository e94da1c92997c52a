use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use scriptfix_cli::config::{self, ConfigMerger};
use scriptfix_cli::explain;
use scriptfix_core::adapters::{FsFileSource, FsWritePort};
use scriptfix_core::pipeline::{run_repair, write_report_artifacts};
use scriptfix_render::render_summary_text;
use scriptfix_types::report::ReportToolInfo;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "scriptfix",
    version,
    about = "Repairs corrupted URL literals and stray markdown fences in generated test scripts.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Explain what a defect looks like and how scriptfix repairs it.
    Explain(ExplainArgs),
    /// List all defects scriptfix knows how to repair.
    ListDefects(ListDefectsArgs),
}

#[derive(Debug, Parser)]
struct RunArgs {
    /// Directory to scan, non-recursively (default: testsprite_tests).
    #[arg(long)]
    dir: Option<Utf8PathBuf>,

    /// Only process files whose name ends with this suffix (e.g. ".py"; default: all files).
    #[arg(long)]
    ext: Option<String>,

    /// Print the unified diff instead of rewriting files.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Write report.json, report.md and patch.diff into this directory.
    #[arg(long)]
    out_dir: Option<Utf8PathBuf>,

    /// Config file (default: ./scriptfix.toml when present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Defect key or id to explain (e.g., "malformed-url", "stray-fence").
    defect_key: String,
}

#[derive(Debug, Parser)]
struct ListDefectsArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn real_main() -> anyhow::Result<u8> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Some(Command::Explain(args)) => cmd_explain(args).map(|()| 0),
        Some(Command::ListDefects(args)) => cmd_list_defects(args).map(|()| 0),
        None => cmd_run(cli.run),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<u8> {
    let file_config = config::load_or_default(args.config.as_deref(), Utf8Path::new("."))
        .context("load scriptfix.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_run_args(
        args.dir,
        args.ext,
        args.out_dir,
        args.dry_run,
    );
    debug!(
        "merged config: dir={}, ext={}, dry_run={}, out_dir={:?}",
        merged.settings.directory,
        merged.settings.extension,
        merged.settings.dry_run,
        merged.out_dir
    );

    let tool = ReportToolInfo {
        name: "scriptfix".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let outcome = match run_repair(&merged.settings, &FsFileSource, &FsWritePort, tool) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{}", e);
            return Ok(e.exit_code());
        }
    };

    if merged.settings.dry_run && !outcome.patch.is_empty() {
        print!("{}", outcome.patch);
    }
    print!("{}", render_summary_text(&outcome.report));

    if let Some(out_dir) = &merged.out_dir {
        write_report_artifacts(&outcome, out_dir, &FsWritePort)
            .with_context(|| format!("write report artifacts to {}", out_dir))?;
        info!("wrote report artifacts to {}", out_dir);
    }

    Ok(outcome.exit_code())
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<()> {
    use explain::{list_defect_keys, lookup_defect};

    let Some(defect) = lookup_defect(&args.defect_key) else {
        let available = list_defect_keys().join(", ");
        anyhow::bail!(
            "Unknown defect key: '{}'\n\nAvailable defects: {}",
            args.defect_key,
            available
        );
    };

    println!("================================================================================");
    println!("DEFECT: {}", defect.title);
    println!("================================================================================");
    println!();
    println!("Key:  {}", defect.key);
    println!("ID:   {}", defect.kind.id());
    println!();

    println!("DESCRIPTION");
    println!("--------------------------------------------------------------------------------");
    println!("{}", defect.description);
    println!();

    println!("EXAMPLES");
    println!("--------------------------------------------------------------------------------");
    for ex in defect.examples {
        println!("Before:");
        for line in ex.before.lines() {
            println!("    {}", line);
        }
        println!("After:");
        for line in ex.after.lines() {
            println!("    {}", line);
        }
        println!();
    }

    println!("REMEDIATION GUIDANCE");
    println!("--------------------------------------------------------------------------------");
    println!("{}", defect.remediation);
    println!();

    Ok(())
}

fn cmd_list_defects(args: ListDefectsArgs) -> anyhow::Result<()> {
    use explain::DEFECT_REGISTRY;

    match args.format {
        OutputFormat::Text => {
            println!("Repairable defects:\n");
            println!("  {:<16} {:<24} TITLE", "KEY", "ID");
            println!("  {:<16} {:<24} -----", "---", "--");
            for d in DEFECT_REGISTRY {
                println!("  {:<16} {:<24} {}", d.key, d.kind.id(), d.title);
            }
            println!();
            println!("Use 'scriptfix explain <key>' for details.");
        }
        OutputFormat::Json => {
            let defects: Vec<_> = DEFECT_REGISTRY
                .iter()
                .map(|d| {
                    serde_json::json!({
                        "key": d.key,
                        "id": d.kind.id(),
                        "title": d.title,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&defects)?);
        }
    }
    Ok(())
}
