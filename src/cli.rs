// src/cli.rs
//
// Headless front end: refresh datasets through the extraction API and write
// the exports, no window involved.

use std::{collections::HashSet, io::Write, path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, bail};

use crate::{
    config::options::{ApiKey, AppOptions, ExportFormat},
    csv,
    data::{Applied, Session},
    datasets::{self, DatasetKind, DatasetSpec},
    file,
    gateway::ScrapeGraphClient,
    progress::Progress,
    record::RecordSet,
    refresh,
};

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Fetch GitHub trending data via ScrapeGraphAI and export it")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Refresh one or all datasets and export them
    Refresh(RefreshArgs),

    /// List the available datasets
    List,
}

#[derive(Args, Debug)]
struct RefreshArgs {
    /// Dataset to refresh: developers, topics, explore, collections or all
    #[arg(long, short, default_value = "all", value_parser = parse_dataset)]
    dataset: DatasetArg,

    /// Export format (defaults to both)
    #[arg(long, short, value_enum)]
    format: Option<FormatArg>,

    /// Output directory
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// API key; falls back to SGAI_API_KEY (environment or .env)
    #[arg(long)]
    api_key: Option<String>,

    /// Extraction API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Do not send the output-shape descriptor with requests
    #[arg(long)]
    no_output_schema: bool,

    /// Also print each dataset as CSV to stdout
    #[arg(long)]
    print: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DatasetArg {
    One(DatasetKind),
    All,
}

impl DatasetArg {
    fn specs(self) -> Vec<&'static DatasetSpec> {
        match self {
            DatasetArg::One(kind) => vec![datasets::spec_for(kind)],
            DatasetArg::All => datasets::all().to_vec(),
        }
    }
}

fn parse_dataset(text: &str) -> std::result::Result<DatasetArg, String> {
    if text.trim().eq_ignore_ascii_case("all") {
        return Ok(DatasetArg::All);
    }
    DatasetKind::from_slug(text).map(DatasetArg::One).ok_or_else(|| {
        let slugs: Vec<&str> = datasets::all().iter().map(|s| s.slug).collect();
        format!("unknown dataset {text:?} (expected {} or all)", slugs.join(", "))
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
    Both,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Both => ExportFormat::Both,
        }
    }
}

/// Progress lines on stderr so `--print` output stays clean.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, kind: DatasetKind) {
        eprintln!("→ {}", datasets::spec_for(kind).title);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("  {msg}");
    }
    fn finish(&mut self, kind: DatasetKind, ok: bool) {
        let verdict = if ok { "done" } else { "failed" };
        eprintln!("  {} {verdict}", kind.slug());
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    match cli.command {
        Command::List => {
            list();
            Ok(())
        }
        Command::Refresh(args) => refresh_cmd(args),
    }
}

fn list() {
    for spec in datasets::all() {
        println!("{:<12} {:<22} {}", spec.slug, spec.title, spec.url);
    }
}

fn refresh_cmd(args: RefreshArgs) -> Result<()> {
    let mut options = AppOptions::from_env().wrap_err("invalid configuration")?;

    if let Some(url) = args.base_url.as_deref() {
        options.gateway.set_base_url(url)?;
    }
    if let Some(secs) = args.timeout {
        if secs == 0 {
            bail!("--timeout must be at least 1 second");
        }
        options.gateway.timeout = Duration::from_secs(secs);
    }
    if args.no_output_schema {
        options.gateway.send_output_schema = false;
    }
    if let Some(format) = args.format {
        options.export.format = format.into();
    }
    if let Some(dir) = args.out.as_deref() {
        options.export.set_dir(&dir.to_string_lossy());
    }

    // Checked before any request goes out.
    let api_key = match args.api_key.as_deref() {
        Some(raw) => ApiKey::parse(raw),
        None => ApiKey::from_env(),
    }
    .wrap_err("an API key is required (--api-key or SGAI_API_KEY)")?;

    let specs = args.dataset.specs();
    logf!(
        "CLI: Refresh datasets={:?} format={:?} out={}",
        specs.iter().map(|s| s.kind).collect::<Vec<_>>(),
        options.export.format,
        options.export.out_dir().display()
    );

    let client = ScrapeGraphClient::new(api_key, options.gateway.clone())
        .wrap_err("could not build the HTTP client")?;

    let mut progress = CliProgress;
    let results = refresh::refresh_each(
        &client,
        &specs,
        options.gateway.send_output_schema,
        Some(&mut progress),
    );

    let mut session = Session::new();
    let mut failed: HashSet<DatasetKind> = HashSet::new();
    let total = results.len();
    let mut ready = Vec::with_capacity(total);

    for (kind, result) in results {
        let spec = datasets::spec_for(kind);
        match session.apply(kind, result) {
            Applied::Replaced { skipped, .. } => {
                if skipped > 0 {
                    eprintln!("warning: {}: {skipped} malformed row(s) dropped", spec.slug);
                }
                ready.push(spec);
            }
            Applied::Cleared { warning } => {
                eprintln!("warning: {}: {warning}", spec.slug);
                failed.insert(kind);
            }
            Applied::KeptPrevious { error } => {
                eprintln!("error: {}: {error}", spec.slug);
                failed.insert(kind);
            }
        }
    }

    let sets: Vec<(&'static DatasetSpec, &RecordSet)> = ready
        .into_iter()
        .filter_map(|spec| session.records(spec.kind).map(|set| (spec, set)))
        .collect();

    if args.print {
        let mut out = std::io::stdout().lock();
        for (spec, set) in &sets {
            if let Err(e) = out.write_all(csv::to_csv_string(set).as_bytes()) {
                eprintln!("error: {}: could not print: {e}", spec.slug);
                failed.insert(spec.kind);
            }
        }
    }

    for (spec, res) in file::export_each(&options.export, sets.iter().copied()) {
        match res {
            Ok(written) => {
                let rows = session.records(spec.kind).map_or(0, |s| s.len());
                for path in written {
                    eprintln!("  {rows} row(s) → {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("error: {}: export failed: {e}", spec.slug);
                failed.insert(spec.kind);
            }
        }
    }

    if !failed.is_empty() {
        bail!("{} of {total} dataset(s) failed", failed.len());
    }
    Ok(())
}
