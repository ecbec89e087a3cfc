use super::record_formatter::format_value;
use dnsdiff_domain::{DomainComparison, DomainError};
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Text,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(DomainError::InvalidExportFormat(s.to_string())),
        }
    }
}

const CSV_HEADER: [&str; 5] = [
    "Domain",
    "Record Type",
    "Nameserver",
    "Result Type",
    "Result Value",
];

/// One row per record across every lookup of every domain.
pub fn to_csv(comparisons: &[DomainComparison]) -> Result<String, DomainError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| DomainError::ExportFailed(e.to_string()))?;

    for lookup in comparisons.iter().flat_map(|c| c.results.iter()) {
        for record in &lookup.results {
            writer
                .write_record([
                    lookup.domain.as_str(),
                    lookup.record_type.as_str(),
                    lookup.nameserver.as_str(),
                    record.record_type(),
                    format_value(record).as_str(),
                ])
                .map_err(|e| DomainError::ExportFailed(e.to_string()))?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DomainError::ExportFailed(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DomainError::ExportFailed(e.to_string()))
}

/// Plain-text report grouped by domain, then nameserver.
pub fn to_text(comparisons: &[DomainComparison]) -> String {
    let mut out = String::new();

    for (idx, comparison) in comparisons.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", comparison.domain);
        for lookup in &comparison.results {
            let _ = writeln!(out, "  {} ({}):", lookup.nameserver, lookup.record_type);
            if lookup.results.is_empty() {
                out.push_str("    (no records)\n");
            }
            for record in &lookup.results {
                let _ = writeln!(out, "    {}: {}", record.record_type(), format_value(record));
            }
        }
    }

    out
}
