pub mod diff_engine;
pub mod diff_markup;
pub mod export;
pub mod record_formatter;
pub mod record_normalizer;
pub mod record_set;

pub use diff_engine::{compare_record_sets, diff_text, tokenize};
pub use diff_markup::{escape_html, render_block};
pub use export::{to_csv, to_text, ExportFormat};
pub use record_formatter::{comparison_value, format_block, format_line, format_value};
pub use record_normalizer::normalize;
pub use record_set::{dedup_records, sort_records};
