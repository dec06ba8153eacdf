use crate::note::Note;
use crate::shared::table::collapse_preview;
use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub muted: (u8, u8, u8),     // Footers, hints
    pub header: (u8, u8, u8),    // Headings
    pub timestamp: (u8, u8, u8), // Dates
    pub highlight: (u8, u8, u8), // Search matches
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        muted: (108, 112, 134),
        header: (148, 226, 213),
        timestamp: (137, 180, 250),
        highlight: (243, 139, 168),
    };
}

/// Formatting context passed through the rendering of recall output
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8)) -> String {
        if self.use_color {
            Paint::rgb(text, r, g, b).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn format_muted(&self, text: &str) -> String {
        self.paint(text, self.palette.muted)
    }

    pub fn format_header(&self, text: &str) -> String {
        if self.use_color {
            let (r, g, b) = self.palette.header;
            Paint::rgb(text, r, g, b).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// The stored date exactly as kept, so it can be passed to `delete`.
    pub fn format_timestamp(&self, date: &str) -> String {
        self.paint(date, self.palette.timestamp)
    }

    /// Dates cut to the minute (`YYYY/MM/DD HH:mm`) for summaries.
    pub fn format_short_timestamp(&self, date: &str) -> String {
        let shown: String = date.chars().take(16).collect();
        self.paint(&shown, self.palette.timestamp)
    }

    pub fn format_tags(&self, tags: &[String]) -> String {
        tags.iter()
            .map(|tag| {
                if self.use_color {
                    let (r, g, b) = crate::tags::color_for_tag(tag);
                    Paint::rgb(tag.as_str(), r, g, b).bold().to_string()
                } else {
                    tag.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Color every occurrence of the (case-sensitive) search text.
    pub fn highlight_match(&self, text: &str, query: &str) -> String {
        if query.is_empty() || !self.use_color {
            return text.to_string();
        }
        let (r, g, b) = self.palette.highlight;
        let mut out = String::new();
        let mut remaining = text;
        while let Some(pos) = remaining.find(query) {
            let (before, rest) = remaining.split_at(pos);
            let (matched, after) = rest.split_at(query.len());
            out.push_str(before);
            out.push_str(&Paint::rgb(matched, r, g, b).to_string());
            remaining = after;
        }
        out.push_str(remaining);
        out
    }

    /// Render one recalled memo: a date/tag header line followed by the
    /// text, indented. Long text is collapsed unless `full` is set.
    pub fn format_entry(
        &self,
        index: usize,
        note: &Note,
        search: &str,
        full: bool,
    ) -> String {
        let mut head = vec![self.format_muted(&format!("[{index}]"))];
        if !note.date.is_empty() {
            head.push(self.format_timestamp(&note.date));
        }
        if !note.tags.is_empty() {
            head.push(self.format_tags(&note.tags));
        }

        let (body, collapsed) = if full {
            (note.text.clone(), false)
        } else {
            let preview = collapse_preview(&note.text);
            (preview.text, preview.collapsed)
        };
        let body = self.highlight_match(&body, search);

        let mut out = head.join(" ");
        for line in body.lines() {
            out.push_str("\n    ");
            out.push_str(line);
        }
        if collapsed {
            out.push_str("\n    ");
            out.push_str(&self.format_muted("(more: use --full)"));
        }
        out
    }
}
