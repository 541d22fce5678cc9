//! conlog - pipe stdin lines through a console logger.

use std::env;
use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use console_logger::config::{DiagnosticsConfig, Settings};
use console_logger::{ConsoleLogger, LogRecord, Logger, Payload, Severity};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = "conlog";

/// Parsed command line.
struct Args {
    config: Option<String>,
    severity: Severity,
    section: Option<String>,
    stats: bool,
}

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().collect();

    if argv.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return ExitCode::SUCCESS;
    }

    if argv.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", NAME, VERSION);
        return ExitCode::SUCCESS;
    }

    let args = match parse_args(&argv) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let settings = match &args.config {
        Some(path) => match Settings::load(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    init_diagnostics(&settings.diagnostics);

    let logger = match ConsoleLogger::new(&settings.logger) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error creating logger: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error creating Tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(async_main(&logger, &args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "conlog failed");
            ExitCode::FAILURE
        }
    }
}

/// Forward stdin to the logger until EOF.
async fn async_main(logger: &ConsoleLogger, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    logger.init().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut forwarded = 0u64;
    while let Some(line) = lines.next_line().await? {
        if line.is_empty() {
            continue;
        }
        logger.write(LogRecord::new(
            args.severity,
            args.section.as_deref(),
            Payload::from(line),
        ));
        forwarded += 1;
    }
    debug!(lines = forwarded, "stdin closed");

    logger.close().await?;

    if args.stats {
        eprintln!("{}", serde_json::to_string(&logger.status())?);
    }

    Ok(())
}

fn parse_args(argv: &[String]) -> Result<Args, String> {
    let mut args = Args {
        config: None,
        severity: Severity::Info,
        section: None,
        stats: false,
    };

    let mut iter = argv.iter().skip(1);
    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (f, Some(v.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            inline
                .clone()
                .or_else(|| iter.next().cloned())
                .ok_or_else(|| format!("missing value for {}", name))
        };

        match flag {
            "-c" | "--config" => args.config = Some(value(flag)?),
            "-l" | "--level" => {
                let name = value(flag)?;
                args.severity = name.parse().map_err(|e| format!("{}", e))?;
                if !args.severity.is_sectioned() {
                    return Err(format!("'{}' cannot be used for stdin lines", name));
                }
            }
            "-s" | "--section" => args.section = Some(value(flag)?),
            "--stats" => args.stats = true,
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(args)
}

/// Initialize tracing for the logger's own diagnostics.
fn init_diagnostics(config: &DiagnosticsConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn print_help() {
    println!(
        r#"{} {}
Forward stdin lines to a console logger.

USAGE:
    {} [OPTIONS]

OPTIONS:
    -c, --config <PATH>      TOML settings file ([logger], [diagnostics])
    -l, --level <LEVEL>      Severity of each line: debug, info, warn, error
                             [default: info]
    -s, --section <NAME>     Section tag for each line
        --stats              Print the logger status as JSON to stderr at exit
    -h, --help               Print help information
    -V, --version            Print version information
"#,
        NAME, VERSION, NAME
    );
}
