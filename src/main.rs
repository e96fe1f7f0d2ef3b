use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use version_labels::config::{Config, log_path};
use version_labels::display::formatter::CatalogSummary;
use version_labels::display::{Formatter, JsonSink, LabelSink, PlainSink, ProjectVersions};
use version_labels::logging;
use version_labels::version::token::format_version;

#[derive(Parser)]
#[command(name = "version-labels")]
#[command(version, about = "Compact game-version lists into display labels")]
struct Cli {
    /// JSON config file (defaults to $XDG_CONFIG_HOME/version-labels/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the display labels for a project's game versions
    Format {
        /// Game versions; each argument may itself be comma-joined ("1.18, 1.19")
        versions: Vec<String>,

        /// Print a JSON array instead of one label per line
        #[arg(long)]
        json: bool,
    },
    /// Print the catalog's majors with their minors, then its legacy entries
    Catalog {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, source) = Config::load(cli.config.as_deref())?;

    // Labels still print when the log file can't be opened
    let _guard = logging::init(&config.log, &log_path())
        .inspect_err(|e| eprintln!("version-labels: logging disabled: {}", e))
        .ok();
    source.report(&config);

    let formatter =
        Formatter::new(&config.catalog).with_unknown_versions(config.unknown_versions);
    let stdout = std::io::stdout().lock();

    match cli.command {
        Command::Format { versions, json } => {
            let versions: ProjectVersions = versions
                .iter()
                .flat_map(|arg| ProjectVersions::parse(arg).into_vec())
                .collect();

            let mut sink: Box<dyn LabelSink> = if json {
                Box::new(JsonSink::new(stdout))
            } else {
                Box::new(PlainSink::new(stdout))
            };
            formatter.render(versions.as_slice(), sink.as_mut())?;
        }
        Command::Catalog { json } => print_summary(stdout, &formatter.summary(), json)?,
    }

    Ok(())
}

fn print_summary<W: Write>(mut out: W, summary: &CatalogSummary, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut out, summary)?;
        writeln!(out)?;
        return Ok(());
    }

    for range in &summary.releases {
        let versions: Vec<String> = range
            .minors()
            .iter()
            .map(|minor| format_version(range.major(), *minor))
            .collect();
        writeln!(out, "{}: {}", range.major(), versions.join(", "))?;
    }
    if !summary.legacy.is_empty() {
        writeln!(out, "legacy: {}", summary.legacy.join(", "))?;
    }
    Ok(())
}
