use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use binsheet_cli::{
    BinsheetConfig, LogFormat, derive_naming_store, init_logging, parse_map_arg, run_keys,
    run_per_file, run_summary,
};
use binsheet_io_fs::persist_bytes_atomic;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "binsheet",
    version,
    about = "Wafer test log bin counts to XLSX reports"
)]
struct Cli {
    /// TOML config file (default: ./binsheet.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct NamingArgs {
    /// Prefix for bins without an assigned name
    #[arg(long)]
    prefix: Option<String>,

    /// Name a bin, e.g. `--map 001=PASS`; repeatable
    #[arg(long = "map", value_name = "KEY=NAME", value_parser = parse_map_arg)]
    overrides: Vec<(String, String)>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List bin keys found in the input and their current names
    Keys {
        path: PathBuf,

        /// Write a config file with every key named
        #[arg(long)]
        write_template: Option<PathBuf>,

        #[command(flatten)]
        naming: NamingArgs,
    },

    /// Write one `{stem}_result.xlsx` per log file
    Run {
        path: PathBuf,

        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        naming: NamingArgs,
    },

    /// Write one workbook with a row per log file
    Summary {
        path: PathBuf,

        /// Output file name; `.xlsx` is appended when missing
        #[arg(long)]
        name: String,

        #[arg(long)]
        out: Option<PathBuf>,

        /// Title row text (default: the file name without extension)
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        naming: NamingArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = BinsheetConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Keys {
            path,
            write_template,
            naming,
        } => {
            let store = derive_naming_store(&config, naming.prefix.as_deref(), &naming.overrides);
            let l_keys = run_keys(&path, &config.to_collect_options(), &store)?;
            let snapshot = store.snapshot();
            for key in &l_keys {
                println!("{key}\t{}", snapshot.resolve(key));
            }
            if let Some(path_template) = write_template {
                config.naming.prefix = snapshot.fallback_prefix().to_string();
                config.naming.names = snapshot.mapping().clone();
                let txt = config.to_toml_string()?;
                persist_bytes_atomic(txt.as_bytes(), &path_template)
                    .with_context(|| format!("failed to write {}", path_template.display()))?;
                tracing::info!(path = %path_template.display(), "config template written");
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Run { path, out, naming } => {
            let store = derive_naming_store(&config, naming.prefix.as_deref(), &naming.overrides);
            let report = run_per_file(&path, out.as_deref(), &config, &store)?;
            println!("{report}");
            if report.has_errors() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Summary {
            path,
            name,
            out,
            title,
            naming,
        } => {
            let store = derive_naming_store(&config, naming.prefix.as_deref(), &naming.overrides);
            let (path_dst, report) = run_summary(
                &path,
                &name,
                title.as_deref(),
                out.as_deref(),
                &config,
                &store,
            )?;
            println!("{}", path_dst.display());
            println!("{report}");
            Ok(ExitCode::SUCCESS)
        }
    }
}
