use super::record_formatter::format_block;
use super::record_set::sort_records;
use dnsdiff_domain::{CanonicalRecord, DiffKind, DiffSpan, RecordTypeFilter};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Equal(usize),
    Delete(usize),
    Insert(usize),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Punct,
}

fn classify(c: char) -> CharClass {
    if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else if c.is_whitespace() {
        CharClass::Space
    } else {
        CharClass::Punct
    }
}

/// Splits text into word runs, whitespace runs and single punctuation characters.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<CharClass> = None;

    for (idx, c) in text.char_indices() {
        let class = classify(c);
        match current {
            Some(prev) if prev == class && class != CharClass::Punct => {}
            Some(_) => {
                tokens.push(&text[start..idx]);
                start = idx;
            }
            None => {}
        }
        current = Some(class);
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Edit script between two token sequences. The common prefix and suffix are
/// matched directly; only the differing middle goes through Myers.
fn edit_script(a: &[&str], b: &[&str]) -> Vec<Edit> {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let a_mid = &a[prefix..a.len() - suffix];
    let b_mid = &b[prefix..b.len() - suffix];

    let mut edits: Vec<Edit> = (0..prefix).map(Edit::Equal).collect();
    if a_mid.is_empty() {
        edits.extend((0..b_mid.len()).map(|j| Edit::Insert(prefix + j)));
    } else if b_mid.is_empty() {
        edits.extend((0..a_mid.len()).map(|i| Edit::Delete(prefix + i)));
    } else {
        edits.extend(myers(a_mid, b_mid).into_iter().map(|edit| match edit {
            Edit::Equal(i) => Edit::Equal(prefix + i),
            Edit::Delete(i) => Edit::Delete(prefix + i),
            Edit::Insert(j) => Edit::Insert(prefix + j),
        }));
    }
    edits.extend((a.len() - suffix..a.len()).map(Edit::Equal));
    edits
}

/// Myers shortest edit script. Round `d` keeps only the `-d..=d` diagonals
/// the backtrack reads.
fn myers(a: &[&str], b: &[&str]) -> Vec<Edit> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;

    let offset = max;
    let at = |k: isize| (k + offset) as usize;
    let mut v = vec![0isize; 2 * max as usize + 2];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    'search: for d in 0..=max {
        trace.push(v[at(-d)..=at(d)].to_vec());
        let mut k = -d;
        while k <= d {
            let mut x = if k == -d || (k != d && v[at(k - 1)] < v[at(k + 1)]) {
                v[at(k + 1)]
            } else {
                v[at(k - 1)] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[at(k)] = x;
            if x >= n && y >= m {
                break 'search;
            }
            k += 2;
        }
    }

    let mut edits = Vec::new();
    let (mut x, mut y) = (n, m);
    for (d, window) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let get = |k: isize| window[(k + d) as usize];
        let k = x - y;
        let prev_k = if k == -d || (k != d && get(k - 1) < get(k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = if d > 0 { get(prev_k) } else { 0 };
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            edits.push(Edit::Equal((x - 1) as usize));
            x -= 1;
            y -= 1;
        }
        if d > 0 {
            if x == prev_x {
                edits.push(Edit::Insert((y - 1) as usize));
            } else {
                edits.push(Edit::Delete((x - 1) as usize));
            }
        }
        x = prev_x;
        y = prev_y;
    }

    edits.reverse();
    edits
}

fn push_span(spans: &mut Vec<DiffSpan>, kind: DiffKind, text: &str) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.kind == kind => last.text.push_str(text),
        _ => spans.push(DiffSpan::new(kind, text)),
    }
}

/// Word-level diff. Within each changed region removed text precedes added text.
pub fn diff_text(left: &str, right: &str) -> Vec<DiffSpan> {
    let a = tokenize(left);
    let b = tokenize(right);

    let mut spans = Vec::new();
    let mut removed = String::new();
    let mut added = String::new();

    for edit in edit_script(&a, &b) {
        match edit {
            Edit::Delete(i) => removed.push_str(a[i]),
            Edit::Insert(j) => added.push_str(b[j]),
            Edit::Equal(i) => {
                push_span(&mut spans, DiffKind::Removed, &removed);
                push_span(&mut spans, DiffKind::Added, &added);
                removed.clear();
                added.clear();
                push_span(&mut spans, DiffKind::Equal, a[i]);
            }
        }
    }
    push_span(&mut spans, DiffKind::Removed, &removed);
    push_span(&mut spans, DiffKind::Added, &added);

    spans
}

/// Per-type word diff of two answer sets. Types whose rendered blocks are
/// identical get no entry.
pub fn compare_record_sets(
    left: &[CanonicalRecord],
    right: &[CanonicalRecord],
    filter: &RecordTypeFilter,
) -> BTreeMap<String, Vec<DiffSpan>> {
    let types: BTreeSet<String> = match filter {
        RecordTypeFilter::Any => left
            .iter()
            .chain(right.iter())
            .map(|record| record.record_type().to_string())
            .collect(),
        RecordTypeFilter::Single { mnemonic, .. } => BTreeSet::from([mnemonic.clone()]),
    };

    let mut diff = BTreeMap::new();
    for record_type in types {
        let left_block = render_type(left, &record_type);
        let right_block = render_type(right, &record_type);
        if left_block != right_block {
            diff.insert(record_type, diff_text(&left_block, &right_block));
        }
    }
    diff
}

fn render_type(records: &[CanonicalRecord], record_type: &str) -> String {
    let mut of_type: Vec<CanonicalRecord> = records
        .iter()
        .filter(|record| record.record_type() == record_type)
        .cloned()
        .collect();
    sort_records(&mut of_type);
    format_block(&of_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(spans: &[DiffSpan], kind: DiffKind) -> String {
        spans
            .iter()
            .filter(|span| span.kind == kind || span.kind == DiffKind::Equal)
            .map(|span| span.text.as_str())
            .collect()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("mail.example.com  300"),
            vec!["mail", ".", "example", ".", "com", "  ", "300"]
        );
        assert_eq!(tokenize("\"a\"\n"), vec!["\"", "a", "\"", "\n"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_identical_text_is_all_equal() {
        let spans = diff_text("a b c", "a b c");
        assert_eq!(spans, vec![DiffSpan::new(DiffKind::Equal, "a b c")]);
    }

    #[test]
    fn test_changed_word_emits_removed_then_added() {
        let spans = diff_text("ttl 300 IN", "ttl 60 IN");

        assert_eq!(
            spans,
            vec![
                DiffSpan::new(DiffKind::Equal, "ttl "),
                DiffSpan::new(DiffKind::Removed, "300"),
                DiffSpan::new(DiffKind::Added, "60"),
                DiffSpan::new(DiffKind::Equal, " IN"),
            ]
        );
    }

    #[test]
    fn test_spans_reconstruct_both_sides() {
        let left = "example.com 300 IN A 192.0.2.1\nexample.com 300 IN A 192.0.2.2";
        let right = "example.com 300 IN A 192.0.2.2\nexample.com 300 IN A 192.0.2.3";

        let spans = diff_text(left, right);

        assert_eq!(joined(&spans, DiffKind::Removed), left);
        assert_eq!(joined(&spans, DiffKind::Added), right);
    }

    #[test]
    fn test_large_block_against_empty_side() {
        let left: String = (0..400)
            .map(|i| format!("example.com 300 IN TXT \"token-{}\"\n", i))
            .collect();

        assert_eq!(
            diff_text(&left, ""),
            vec![DiffSpan::new(DiffKind::Removed, left.clone())]
        );
        assert_eq!(
            diff_text("", &left),
            vec![DiffSpan::new(DiffKind::Added, left.clone())]
        );
    }

    #[test]
    fn test_change_inside_long_shared_context() {
        let shared: String = (0..200)
            .map(|i| format!("example.com 300 IN A 192.0.2.{}\n", i % 250))
            .collect();
        let left = format!("{}example.com 300 IN A 198.51.100.1\n{}", shared, shared);
        let right = format!("{}example.com 60 IN A 198.51.100.7\n{}", shared, shared);

        let spans = diff_text(&left, &right);

        assert_eq!(joined(&spans, DiffKind::Removed), left);
        assert_eq!(joined(&spans, DiffKind::Added), right);
        let changed: Vec<&str> = spans
            .iter()
            .filter(|span| span.kind != DiffKind::Equal)
            .map(|span| span.text.as_str())
            .collect();
        assert_eq!(changed, vec!["300", "60", "1", "7"]);
    }

    #[test]
    fn test_empty_sides() {
        assert!(diff_text("", "").is_empty());
        assert_eq!(diff_text("", "x"), vec![DiffSpan::new(DiffKind::Added, "x")]);
        assert_eq!(diff_text("x", ""), vec![DiffSpan::new(DiffKind::Removed, "x")]);
    }
}
