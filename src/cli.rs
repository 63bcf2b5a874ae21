use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing::{debug, error, info, warn};

use email_validator::batch::BatchValidator;
use email_validator::config::{get_config_path, AppConfig, ConfigOverrides};
use email_validator::logging::{init_logging, LoggingConfig};
use email_validator::report::{export_report, write_report, ReportFormat};
use email_validator::EmailValidator;

#[derive(Parser)]
#[command(name = "email-validator")]
#[command(about = "Check whether strings are plausible email addresses")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Configuration file path")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one or more addresses given on the command line
    Check {
        #[arg(required = true, help = "Addresses to check")]
        addresses: Vec<String>,

        #[arg(short, long, help = "Print the reason for each rejection")]
        explain: bool,
    },

    /// Check one address per line from a file or stdin
    Batch {
        #[arg(help = "Input file (reads stdin when omitted or '-')")]
        file: Option<PathBuf>,

        #[arg(short, long, help = "Report format", value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long, help = "Write the report to this file")]
        output: Option<PathBuf>,

        #[arg(long, help = "Only list rejected entries")]
        invalid_only: bool,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        #[arg(help = "Target path (defaults to the platform config directory)")]
        path: Option<PathBuf>,

        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { addresses, explain } => {
            let config = setup(cli.config.as_deref(), cli.verbose).await?;
            check_addresses(&config, &addresses, explain)
        }
        Commands::Batch {
            file,
            format,
            output,
            invalid_only,
        } => {
            let config = setup(cli.config.as_deref(), cli.verbose).await?;
            run_batch(&config, file, format, output, invalid_only).await
        }
        Commands::Config {
            action: ConfigAction::Show,
        } => {
            let config = setup(cli.config.as_deref(), cli.verbose).await?;
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
        // init replaces the file, so it must not depend on the file being loadable
        Commands::Config {
            action: ConfigAction::Init { path, force },
        } => {
            init_logging(&logging_config(LoggingConfig::default(), cli.verbose))?;
            let path = path.or(cli.config).unwrap_or_else(get_config_path);
            init_config(&path, force).await
        }
    }
}

/// Load the effective configuration and start logging
async fn setup(config_path: Option<&Path>, verbose: bool) -> Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => {
            let mut config = AppConfig::load_from_file(path).await?;
            ConfigOverrides::apply(&mut config)?;
            config.validate()?;
            config
        }
        None => AppConfig::load().await?,
    };

    config.logging = logging_config(config.logging, verbose);
    init_logging(&config.logging)?;

    debug!("email-validator v{}", env!("CARGO_PKG_VERSION"));
    for warning in config.warnings() {
        warn!("{}", warning);
    }

    Ok(config)
}

fn logging_config(logging: LoggingConfig, verbose: bool) -> LoggingConfig {
    if verbose {
        logging.verbose()
    } else {
        logging
    }
}

fn check_addresses(config: &AppConfig, addresses: &[String], explain: bool) -> Result<ExitCode> {
    let validator = EmailValidator::new(&config.validator)?;
    let mut all_valid = true;

    for address in addresses {
        match validator.check(address) {
            Ok(_) => println!("valid    {}", address),
            Err(rejection) => {
                all_valid = false;
                if explain {
                    println!("invalid  {}  ({})", address, rejection);
                } else {
                    println!("invalid  {}", address);
                }
            }
        }
    }

    Ok(exit_code(all_valid))
}

async fn run_batch(
    config: &AppConfig,
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    invalid_only: bool,
) -> Result<ExitCode> {
    let validator = EmailValidator::new(&config.validator)?;

    let text = match file.filter(|path| path.as_os_str() != "-") {
        Some(path) => {
            info!("Reading candidates from {}", path.display());
            tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            debug!("Reading candidates from stdin");
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let mut report = BatchValidator::new(&validator).run_text(&text);
    let all_valid = report.all_valid();

    if invalid_only || !config.report.include_valid {
        report = report.invalid_only();
    }

    let format = format.map(ReportFormat::from).unwrap_or(config.report.default_format);

    let written = match output {
        Some(path) => export_report(&report, format, &path).await.map(|_| ()),
        None => write_report(&report, format, std::io::stdout().lock()),
    };

    if let Err(e) = written {
        error!(category = e.category(), "Failed to write {} report: {}", format, e);
        return Err(e.into());
    }

    Ok(exit_code(all_valid))
}

async fn init_config(path: &Path, force: bool) -> Result<ExitCode> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    AppConfig::default().save_to_file(path).await?;
    println!("Wrote {}", path.display());

    Ok(ExitCode::SUCCESS)
}

fn exit_code(all_valid: bool) -> ExitCode {
    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
