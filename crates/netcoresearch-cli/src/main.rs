mod config;
mod outcome;
mod output;

use config::NetcoresearchConfig;
use outcome::{exit_code_for, parse_major, Outcome};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use netcoresearch_resolve::{ResolveRequest, Resolver, Target};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "netcoresearch")]
#[command(about = "Print the newest installed .NET SDK or shared framework version for a major version")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Major version to look for (e.g. 8)
    #[arg(value_name = "MAJOR")]
    major: String,

    /// "sdk", or a shared framework name such as Microsoft.NETCore.App
    #[arg(value_name = "TARGET")]
    target: String,

    /// Path to the hostfxr library (defaults to the one next to this executable)
    #[arg(long, value_name = "PATH")]
    hostfxr: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn verbosity_level(verbose: u8, configured: Option<LevelFilter>) -> LevelFilter {
    match verbose {
        0 => configured.unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(level: LevelFilter) {
    // RUST_LOG still wins over the computed level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// `--hostfxr` first, then the config file, then the library beside the executable
fn resolve_hostfxr_path(cli: Option<PathBuf>, config: Option<&NetcoresearchConfig>) -> Option<PathBuf> {
    cli.or_else(|| config.and_then(NetcoresearchConfig::hostfxr_path))
}

fn color_setting(no_color: bool, config: Option<&NetcoresearchConfig>) -> Option<bool> {
    if no_color {
        Some(false)
    } else {
        config.and_then(|c| c.output.color)
    }
}

fn run(args: Args) -> Result<Outcome> {
    let config = NetcoresearchConfig::load_from_cwd()?;

    output::configure_color(color_setting(args.no_color, config.as_ref()));

    let configured_level = match &config {
        Some(config) => config.log_level()?,
        None => None,
    };
    init_logging(verbosity_level(args.verbose, configured_level));

    let major = parse_major(&args.major)?;
    let request = ResolveRequest::new(Target::parse(&args.target), major);

    let resolver = match resolve_hostfxr_path(args.hostfxr, config.as_ref()) {
        Some(path) => Resolver::new(path),
        None => Resolver::beside_executable()?,
    };
    log::debug!("Using hostfxr at {}", resolver.hostfxr_path().display());

    Ok(resolver.resolve(&request)?.into())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(outcome) => {
            if let Outcome::Found(version) = &outcome {
                output::write_output_line(&version.to_string());
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            output::write_error(&e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}
