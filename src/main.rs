use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use keystone::readability::AnalysisOptions;
use keystone::{config, favicon, output, readability};
use std::path::{Path, PathBuf};

/// Package version on a tagged release, `dev@<hash>` otherwise.
fn version_string() -> &'static str {
    const DEV_BUILD: &str = concat!("dev@", env!("KEYSTONE_GIT_HASH"));
    match (env!("KEYSTONE_RELEASE_TAG"), env!("KEYSTONE_GIT_HASH")) {
        ("true", _) => env!("CARGO_PKG_VERSION"),
        (_, "") => "dev@unknown",
        _ => DEV_BUILD,
    }
}

#[derive(Parser)]
#[command(name = "keystone")]
#[command(about = "Favicon rasterizer and readability analyzer for the site")]
#[command(long_about = "\
Favicon rasterizer and readability analyzer for the site

  keystone favicons                 Render favicon-{16,32,64,128,256}.png
  keystone readability index.html   Score the visible prose of a page
  keystone readability dist/        Score every .html page below a directory

Settings are read from keystone.toml when present; flags override them.
Run 'keystone gen-config' to print a documented keystone.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (missing file = stock defaults)
    #[arg(long, default_value = "keystone.toml", global = true)]
    config: PathBuf,

    /// Log more (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct FaviconArgs {
    /// Output directory [config: favicons.output_dir]
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Comma-separated pixel sizes [config: favicons.sizes]
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<u32>>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
struct ReadabilityArgs {
    /// HTML file, or a directory to search for .html/.htm files
    path: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Subcommand)]
enum Command {
    /// Render the favicon PNG set
    Favicons(FaviconArgs),
    /// Report readability scores for HTML prose
    Readability(ReadabilityArgs),
    /// Print a stock keystone.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Favicons(args) => {
            let config = config::load_config(&cli.config)?;
            let favicons = config.favicons;
            let palette = favicon::Palette::from_config(&favicons.colors)?;
            let out_dir = args
                .out_dir
                .unwrap_or_else(|| PathBuf::from(&favicons.output_dir));
            let sizes = args.sizes.unwrap_or(favicons.sizes);

            let icons = favicon::write_favicons(&out_dir, &sizes, &palette, &favicons.file_stem)?;
            output::print_favicon_output(&icons);
        }
        Command::Readability(args) => {
            let config = config::load_config(&cli.config)?;
            let options = AnalysisOptions::from(&config.readability);
            if args.path.is_dir() {
                analyze_directory(&args.path, &options, args.format)?;
            } else {
                let analysis = readability::analyze_file(&args.path, &options)?;
                match args.format {
                    ReportFormat::Text => {
                        output::print_readability_report(&display_name(&args.path), &analysis)
                    }
                    ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Report every analyzable page below `dir`. Pages without enough prose are
/// skipped (and warned about) by the library; any other failure aborts.
fn analyze_directory(
    dir: &Path,
    options: &AnalysisOptions,
    format: ReportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = readability::analyze_dir(dir, options)?;
    match format {
        ReportFormat::Text => {
            for doc in &result.documents {
                output::print_readability_report(&doc.path, &doc.analysis);
            }
            println!(
                "{}",
                output::format_batch_summary(result.documents.len(), result.skipped.len())
            );
        }
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&result.documents)?),
    }
    Ok(())
}
