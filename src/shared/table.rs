//! Text layout helpers: memo previews, ANSI-aware widths and the small
//! table used by `memo tags`.

/// Lines shown for a collapsed memo.
pub const PREVIEW_LINES: usize = 3;
/// Memos longer than this many characters are collapsed.
pub const PREVIEW_CHARS: usize = 80;

#[derive(Debug, PartialEq, Eq)]
pub struct Preview {
    pub text: String,
    pub collapsed: bool,
}

/// Collapse long memo text to its first lines and characters. Text that
/// fits is returned unchanged.
pub fn collapse_preview(text: &str) -> Preview {
    let line_count = text.lines().count();
    let char_count = text.chars().count();
    if line_count <= PREVIEW_LINES && char_count <= PREVIEW_CHARS {
        return Preview { text: text.to_string(), collapsed: false };
    }
    let head = text.lines().take(PREVIEW_LINES).collect::<Vec<_>>().join("\n");
    let mut out = truncate_with_ellipsis(&head, PREVIEW_CHARS);
    if !out.ends_with('…') {
        out.push('…');
    }
    Preview { text: out, collapsed: true }
}

/// Truncate text to a width, appending an ellipsis when needed.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_width - 1).collect();
    out.push('…');
    out
}

/// Visible length of a string, skipping ANSI escape sequences.
pub fn display_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        len += 1;
    }
    len
}

/// Render rows under a header line, padding each column to its widest
/// visible cell.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_len(h)).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(display_len(cell));
        }
    }

    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let header_line = format_row(&header, &widths);
    let mut out = header_line.clone();
    out.push('\n');
    out.push_str(&"=".repeat(display_len(&header_line)));
    for row in rows {
        out.push('\n');
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    row.iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(display_len(cell));
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_not_collapsed() {
        let p = collapse_preview("one\ntwo\nthree");
        assert!(!p.collapsed);
        assert_eq!(p.text, "one\ntwo\nthree");
    }

    #[test]
    fn many_lines_collapse_to_three() {
        let p = collapse_preview("1\n2\n3\n4");
        assert!(p.collapsed);
        assert_eq!(p.text, "1\n2\n3…");
    }

    #[test]
    fn long_single_line_is_cut_at_eighty() {
        let text = "x".repeat(81);
        let p = collapse_preview(&text);
        assert!(p.collapsed);
        assert_eq!(p.text.chars().count(), PREVIEW_CHARS);
        assert!(p.text.ends_with('…'));
    }

    #[test]
    fn display_len_ignores_ansi() {
        assert_eq!(display_len("\x1b[1;31mred\x1b[0m"), 3);
        assert_eq!(display_len("日本"), 2);
    }

    #[test]
    fn table_pads_columns() {
        let out = render_table(
            &["tag", "count"],
            &[vec!["#a".into(), "1".into()], vec!["#long".into(), "12".into()]],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "tag   | count");
        assert_eq!(lines[2], "#a    | 1");
        assert_eq!(lines[3], "#long | 12");
    }
}
