// pdf-triage - screen a batch of PDFs for boolean term matches
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

use pdf_triage::config::{self, TriageProfile, ARCHIVE_FILE_NAME, REPORT_FILE_NAME};
use pdf_triage::{
    build_archive, build_report, screen, validate_batch, Connector, ScreeningRun, SearchSpec,
    SourceDocument,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Screen PDFs for sentences matching boolean term searches")]
struct Args {
    /// PDF files, or directories holding PDF files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Search term (repeat for more terms)
    #[arg(short = 't', long = "term")]
    terms: Vec<String>,

    /// Connector between consecutive terms: and, or, not
    #[arg(short = 'c', long = "connector")]
    connectors: Vec<String>,

    /// TOML profile with terms and connectors, used when no --term is given
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Directory for the ZIP archive and the XLSX report
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the screening run as JSON
    #[arg(long)]
    json: bool,

    /// Save the terms and connectors used to a TOML profile
    #[arg(long)]
    save_profile: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pdf_triage=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let spec = resolve_search(&args)?;

    if let Some(path) = &args.save_profile {
        TriageProfile::from(&spec)
            .save(path)
            .with_context(|| format!("Cannot save profile '{}'", path.display()))?;
    }

    let documents = load_documents(&args.inputs)?;
    validate_batch(&documents, &spec)?;

    let run = screen(&documents, &spec);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        print_run(&run);
    }

    if run.is_empty() {
        return Ok(());
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Cannot create '{}'", args.out_dir.display()))?;
    write_outputs(&run, &args.out_dir, !args.json)
}

fn resolve_search(args: &Args) -> Result<SearchSpec> {
    if !args.terms.is_empty() {
        let connectors = args
            .connectors
            .iter()
            .map(|c| c.parse::<Connector>())
            .collect::<pdf_triage::Result<Vec<_>>>()?;
        return Ok(SearchSpec::new(args.terms.clone(), connectors)?);
    }

    let path = args.profile.clone().unwrap_or_else(config::profile_path);
    if !path.exists() {
        bail!("No search terms: pass --term or a profile (looked for '{}')", path.display());
    }
    tracing::info!("Using search profile {}", path.display());
    Ok(TriageProfile::load(&path)?.to_spec()?)
}

fn load_documents(inputs: &[PathBuf]) -> Result<Vec<SourceDocument>> {
    let mut documents = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut paths: Vec<PathBuf> = fs::read_dir(input)
                .with_context(|| format!("Cannot read directory '{}'", input.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| is_pdf(path))
                .collect();
            paths.sort();
            for path in paths {
                documents.push(read_document(&path)?);
            }
        } else {
            documents.push(read_document(input)?);
        }
    }
    tracing::debug!("Loaded {} documents", documents.len());
    Ok(documents)
}

fn is_pdf(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

fn read_document(path: &Path) -> Result<SourceDocument> {
    let content = fs::read(path).with_context(|| format!("Cannot read '{}'", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown.pdf")
        .to_string();
    Ok(SourceDocument::new(filename, content))
}

fn print_run(run: &ScreeningRun<'_>) {
    println!("{}", run.summary());
    for result in &run.matches {
        println!("- {}", result.filename);
    }
    for skipped in &run.skipped {
        println!("Skipped {}: {}", skipped.filename, skipped.reason);
    }
}

fn write_outputs(run: &ScreeningRun<'_>, out_dir: &Path, announce: bool) -> Result<()> {
    // build both before touching the disk
    let archive = build_archive(&run.matches)?;
    let report = build_report(&run.matches, &run.terms)?;

    let archive_path = out_dir.join(ARCHIVE_FILE_NAME);
    fs::write(&archive_path, archive)
        .with_context(|| format!("Cannot write '{}'", archive_path.display()))?;
    let report_path = out_dir.join(REPORT_FILE_NAME);
    fs::write(&report_path, report)
        .with_context(|| format!("Cannot write '{}'", report_path.display()))?;

    tracing::info!(
        archive = %archive_path.display(),
        report = %report_path.display(),
        "outputs written"
    );
    if announce {
        println!("Archive: {}", archive_path.display());
        println!("Report: {}", report_path.display());
    }
    Ok(())
}
