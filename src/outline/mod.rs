/// Per-line classification of the markdown document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineKind {
    Heading(u8),
    Blank,
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct OutlineEntry {
    /// Zero-based line index.
    pub line: usize,
    pub level: u8,
    pub title: String,
}

/// ATX headings only: 1-6 `#` at column 0, then whitespace or end of line.
pub(crate) fn classify_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return LineKind::Text;
    }

    match line[hashes..].chars().next() {
        None => LineKind::Heading(hashes as u8),
        Some(c) if c.is_whitespace() => LineKind::Heading(hashes as u8),
        Some(_) => LineKind::Text,
    }
}

fn split_lines(doc: &str) -> impl Iterator<Item = &str> {
    doc.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l))
}

pub(crate) fn classify_lines(doc: &str) -> Vec<LineKind> {
    split_lines(doc).map(classify_line).collect()
}

/// Heading text without the optional closing `#` run. The run only counts
/// when it stands alone or follows whitespace, so `# C#` keeps its `#`.
fn heading_title(rest: &str) -> &str {
    let text = rest.trim();
    let open = text.trim_end_matches('#');
    if open.is_empty() {
        ""
    } else if open.len() < text.len() && open.ends_with(char::is_whitespace) {
        open.trim_end()
    } else {
        text
    }
}

pub(crate) fn build_outline(doc: &str) -> Vec<OutlineEntry> {
    classify_lines(doc)
        .into_iter()
        .zip(split_lines(doc))
        .enumerate()
        .filter_map(|(i, (kind, line))| {
            let LineKind::Heading(level) = kind else {
                return None;
            };
            Some(OutlineEntry {
                line: i,
                level,
                title: heading_title(&line[level as usize..]).to_string(),
            })
        })
        .collect()
}

/// Caret offset of the start of `line`, in UTF-16 code units as
/// `HTMLTextAreaElement.setSelectionRange` expects.
pub(crate) fn line_start_offset_utf16(doc: &str, line: usize) -> u32 {
    doc.split('\n')
        .take(line)
        .map(|l| l.encode_utf16().count() as u32 + 1)
        .sum()
}
