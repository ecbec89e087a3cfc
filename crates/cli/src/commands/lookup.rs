use crate::di::UseCases;
use anyhow::Context;
use clap::{Args, ValueEnum};
use dnsdiff_application::services::{format_block, to_csv, to_text};
use dnsdiff_application::use_cases::{BatchProgress, BatchRequest};
use dnsdiff_domain::{BatchReport, Config, DiffBlock, DiffKind};
use std::fmt::Write as _;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Text,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Domains to look up
    domains: Vec<String>,

    /// Read domains from a file, one per line (`-` for stdin)
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<String>,

    /// Record type mnemonic, `TYPE<N>`, or ANY
    #[arg(short = 't', long, default_value = "A")]
    record_type: String,

    /// Nameserver to query (defaults to `lookup.default_nameserver`)
    #[arg(short = 'n', long)]
    nameserver: Option<String>,

    /// Compare against a second nameserver (`lookup.compare_nameserver` when
    /// given without a value; use `--compare=NS` before positional domains)
    #[arg(long, value_name = "NAMESERVER")]
    compare: Option<Option<String>>,

    /// Lookups in flight at once
    #[arg(long)]
    pub concurrency: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Run lookups through a dnsdiff server at this base URL
    #[arg(long, value_name = "URL")]
    remote: Option<String>,
}

pub async fn run_lookup(args: LookupArgs, config: &Config) -> anyhow::Result<()> {
    let mut domains = args.domains.clone();
    if let Some(file) = args.file.as_deref() {
        domains.extend(BatchRequest::parse_domains(&read_domains(file)?));
    }

    let request = BatchRequest {
        domains,
        record_type: args.record_type.clone(),
        nameserver1: args
            .nameserver
            .clone()
            .unwrap_or_else(|| config.lookup.default_nameserver.clone()),
        nameserver2: args
            .compare
            .clone()
            .map(|ns| ns.unwrap_or_else(|| config.lookup.compare_nameserver.clone())),
        concurrency: args.concurrency,
    };

    let batch = match args.remote.as_deref() {
        Some(base_url) => {
            info!(remote = %base_url, "Running lookups through remote server");
            Arc::new(UseCases::remote_batch(config, base_url))
        }
        None => UseCases::new(config).batch,
    };

    let progress = Arc::new(BatchProgress::default());
    let ticker = tokio::spawn(report_progress(progress.clone()));
    let outcome = batch.execute_with_progress(request, progress).await;
    ticker.abort();
    let report = outcome?;

    let output = match args.format {
        OutputFormat::Table => render_table(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
        OutputFormat::Csv => to_csv(&report.results)?,
        OutputFormat::Text => to_text(&report.results),
    };
    print!("{}", output);

    Ok(())
}

fn read_domains(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read domains from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read domains from {}", path))
}

async fn report_progress(progress: Arc<BatchProgress>) {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await;
    loop {
        interval.tick().await;
        info!(
            done = progress.current(),
            total = progress.total(),
            "Batch progress"
        );
    }
}

fn render_table(report: &BatchReport) -> String {
    let mut out = String::new();

    for comparison in &report.results {
        let _ = writeln!(out, "=== {} ===", comparison.domain);
        for lookup in &comparison.results {
            let _ = writeln!(out, "--- {} ({})", lookup.nameserver, lookup.record_type);
            if lookup.results.is_empty() {
                out.push_str("(no records)\n");
            } else {
                let _ = writeln!(out, "{}", format_block(&lookup.results));
            }
        }

        if let Some(diff) = &comparison.diff {
            if diff.is_empty() {
                out.push_str("No differences\n");
            }
            for (record_type, block) in diff {
                let _ = writeln!(out, "*** {} differs", record_type);
                out.push_str(&render_diff(block));
            }
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}/{} lookups completed", report.completed, report.total);
    out
}

/// Plain-terminal rendering of a diff: the left side as `-` lines, the right as `+` lines.
fn render_diff(block: &DiffBlock) -> String {
    let side = |skip: DiffKind| -> String {
        block
            .spans
            .iter()
            .filter(|span| span.kind != skip)
            .map(|span| span.text.as_str())
            .collect()
    };

    let mut out = String::new();
    for line in side(DiffKind::Added).lines() {
        let _ = writeln!(out, "- {}", line);
    }
    for line in side(DiffKind::Removed).lines() {
        let _ = writeln!(out, "+ {}", line);
    }
    out
}
