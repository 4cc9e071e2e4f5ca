use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use portfolio_resume::delivery::{ClientKind, FsDelivery};
use portfolio_resume::notify::LogNotifier;
use portfolio_resume::preview::{render_text_preview, ResumePreview};
use portfolio_resume::site::portfolio::{CategoryFilter, Portfolio};
use portfolio_resume::{Backend, ExportConfig, Exporter, ResumeDocument};

/// Exports the portfolio resume and inspects the page data from the command line.
///
/// Without `--resume` the bundled resume data is used.
#[derive(Parser)]
#[command(author, version, about = "Portfolio resume exporter")]
struct Cli {
    /// Resume data file (TOML); defaults to the bundled resume
    #[arg(short, long, global = true)]
    resume: Option<PathBuf>,

    /// Logging verbosity
    #[arg(short, long, value_enum, global = true, default_value = "info")]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the resume PDF and deliver it into a directory.
    #[command(name = "export")]
    Export {
        /// Export configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory receiving the artifact
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// User agent used to pick the delivery path
        #[arg(long, conflicts_with = "client")]
        user_agent: Option<String>,

        /// Force the delivery path
        #[arg(long, value_enum)]
        client: Option<CliClient>,

        /// Override the configured rendering backend
        #[arg(long, value_enum)]
        backend: Option<CliBackend>,

        /// Treat the inline viewer as blocked (mobile path only)
        #[arg(long)]
        no_inline: bool,
    },

    /// Print the text preview of the resume.
    #[command(name = "preview")]
    Preview,

    /// List portfolio projects, optionally filtered by category.
    #[command(name = "portfolio")]
    Portfolio {
        /// Category to show; `All` shows everything
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Portfolio data file (TOML); defaults to the bundled portfolio
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CliClient {
    Desktop,
    Mobile,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliBackend {
    Builtin,
    BundledFonts,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.into())
        .format_timestamp(None)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let resume = match &cli.resume {
        Some(path) => ResumeDocument::from_path(path)?,
        None => ResumeDocument::bundled()?,
    };

    match cli.command {
        Commands::Export {
            config,
            out,
            user_agent,
            client,
            backend,
            no_inline,
        } => {
            let mut config = match config {
                Some(path) => ExportConfig::from_path(path)?,
                None => ExportConfig::default(),
            };
            if let Some(backend) = backend {
                config = config.with_backend(match backend {
                    CliBackend::Builtin => Backend::Builtin,
                    CliBackend::BundledFonts => Backend::BundledFonts,
                });
            }

            let client = match (client, user_agent) {
                (Some(CliClient::Desktop), _) => ClientKind::Desktop,
                (Some(CliClient::Mobile), _) => ClientKind::Mobile,
                (None, Some(agent)) => ClientKind::detect(&agent),
                (None, None) => ClientKind::Desktop,
            };

            let exporter = Exporter::new(config)?;
            let mut target = FsDelivery::new(out).with_inline_viewer(!no_inline);
            let mut preview = ResumePreview::new();
            preview.open();
            let delivered =
                preview.download(&exporter, &resume, client, &mut target, &mut LogNotifier)?;
            println!(
                "Delivered {:?} into {}",
                delivered,
                target.directory().display()
            );
        }
        Commands::Preview => {
            print!("{}", render_text_preview(&resume));
        }
        Commands::Portfolio { category, data } => {
            let portfolio = match data {
                Some(path) => Portfolio::from_path(path)?,
                None => Portfolio::bundled()?,
            };
            let mut filter = CategoryFilter::new();
            filter.select(category);
            for project in filter.visible(portfolio.projects()) {
                println!(
                    "{} [{}] - {} ({})",
                    project.title,
                    project.category,
                    project.description,
                    project.technologies.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
