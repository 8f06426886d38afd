//! CLI entry point for artifactflow.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `artifactflow-app` crate.

use anyhow::Context;
use artifactflow_app::{
    ExplainOutput, RulesInput, ValidateInput, format_active_rules, parse_report_json,
    render_markdown, run_active_rules, run_explain, run_validate, runtime_error_report,
    verdict_exit_code, write_report, write_text,
};
use artifactflow_settings::Overrides;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "artifactflow",
    version,
    about = "Validate artifact records against environment-scoped rules"
)]
struct Cli {
    /// Path to artifactflow config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "artifactflow.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|lenient).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override how non-enforced rules count (block|report).
    #[arg(long, global = true)]
    advisory: Option<String>,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one artifact for one environment and write a report.
    Validate {
        /// Snapshot JSON with artifacts, rules, and mappings.
        #[arg(long)]
        store: Utf8PathBuf,

        /// Artifact id to validate.
        #[arg(long)]
        artifact: String,

        /// Environment name (defaults to `default_environment` from config).
        #[arg(long)]
        environment: Option<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/artifactflow/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/artifactflow/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// List the rules active for an environment.
    Rules {
        #[arg(long)]
        store: Utf8PathBuf,

        #[arg(long)]
        environment: Option<String>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        #[arg(long, default_value = "artifacts/artifactflow/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a violation code (e.g. "above_maximum").
    Explain { code: String },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("artifactflow=warn"),
        1 => EnvFilter::new("artifactflow=info"),
        _ => EnvFilter::new("artifactflow=debug"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.cmd {
        Commands::Validate {
            store,
            artifact,
            environment,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_validate(
            &cli,
            store,
            artifact,
            environment.clone(),
            report_out,
            *write_markdown,
            markdown_out,
        ),
        Commands::Rules { store, environment } => cmd_rules(&cli, store, environment.clone()),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Explain { code } => cmd_explain(code),
    }
}

fn read_config(path: &Utf8Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

fn cmd_validate(
    cli: &Cli,
    store: &Utf8Path,
    artifact: &str,
    environment: Option<String>,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config);
        let input = ValidateInput {
            snapshot: store,
            artifact_id: artifact.to_string(),
            environment,
            config_text: &cfg_text,
            overrides: Overrides {
                profile: cli.profile.clone(),
                advisory: cli.advisory.clone(),
            },
        };

        let output = run_validate(input)?;

        write_report(report_out, &output.report).context("write report json")?;
        if write_markdown {
            let md = render_markdown(&output.report);
            write_text(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let profile = cli.profile.as_deref().unwrap_or("unknown");
            let report = runtime_error_report(profile, &format!("{err:#}"));
            let _ = write_report(report_out, &report);
            eprintln!("artifactflow error: {err:#}");
            eprintln!("(see `artifactflow explain runtime_error`)");
            std::process::exit(1);
        }
    }
}

fn cmd_rules(cli: &Cli, store: &Utf8Path, environment: Option<String>) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config);
    let output = run_active_rules(RulesInput {
        snapshot: store,
        environment,
        config_text: &cfg_text,
    })?;
    print!("{}", format_active_rules(&output));
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(code: &str) -> anyhow::Result<()> {
    match run_explain(code) {
        ExplainOutput::Found { code, explanation } => {
            print!("{}", artifactflow_app::format_explanation(&code, &explanation));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!(
                "{}",
                artifactflow_app::format_not_found(&identifier, available_codes)
            );
            std::process::exit(1);
        }
    }
}
