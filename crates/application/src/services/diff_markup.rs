use dnsdiff_domain::{DiffBlock, DiffKind, DiffSpan};

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders spans as left/right markup. Each side gets blank padding where the
/// other side has a change, so the columns stay aligned.
pub fn render_block(spans: Vec<DiffSpan>) -> DiffBlock {
    let mut left = String::new();
    let mut right = String::new();

    for span in &spans {
        let text = escape_html(&span.text);
        let padding = " ".repeat(span.text.chars().count());
        match span.kind {
            DiffKind::Equal => {
                left.push_str(&text);
                right.push_str(&text);
            }
            DiffKind::Removed => {
                left.push_str(&format!("<span class=\"diff-removed\">{}</span>", text));
                right.push_str(&padding);
            }
            DiffKind::Added => {
                left.push_str(&padding);
                right.push_str(&format!("<span class=\"diff-added\">{}</span>", text));
            }
        }
    }

    DiffBlock { left, right, spans }
}
