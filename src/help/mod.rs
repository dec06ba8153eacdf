use crate::terminal_columns;
use std::error::Error;

mod content;

#[derive(Clone, Copy)]
pub(crate) struct HelpFlag<'a> {
    pub name: &'a str,
    pub desc: &'a str,
}

#[derive(Clone, Copy)]
pub(crate) struct HelpTopic<'a> {
    pub name: &'a str,
    pub summary: &'a str,
    pub usage: &'a str,
    pub details: &'a [&'a str],
    pub flags: &'a [HelpFlag<'a>],
    pub examples: &'a [&'a str],
}

#[derive(Clone, Copy)]
pub(crate) struct HelpBook<'a> {
    pub title: &'a str,
    pub usage: &'a str,
    pub topics: &'a [HelpTopic<'a>],
    pub environment: &'a [HelpFlag<'a>],
    pub footer: &'a [&'a str],
}

impl<'a> HelpBook<'a> {
    fn find(&self, name: &str) -> Option<&HelpTopic<'a>> {
        self.topics.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

pub(crate) fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let book = content::book();
    let width = terminal_columns().unwrap_or(96).clamp(64, 120);
    let printer = HelpPrinter { width };

    let lines = match args.first() {
        None => printer.render_overview(&book),
        Some(topic) => match book.find(topic) {
            Some(entry) => printer.render_topic(entry),
            None => {
                eprintln!("Unknown help topic: {topic}");
                printer.render_overview(&book)
            }
        },
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

struct HelpPrinter {
    width: usize,
}

impl HelpPrinter {
    fn render_overview(&self, book: &HelpBook<'_>) -> Vec<String> {
        let mut out = vec![
            book.title.to_string(),
            format!("usage: {}", book.usage),
            String::new(),
        ];
        let commands: Vec<(&str, &str)> =
            book.topics.iter().map(|t| (t.usage, t.summary)).collect();
        out.extend(self.render_block("Commands", &commands));

        let env: Vec<(&str, &str)> =
            book.environment.iter().map(|f| (f.name, f.desc)).collect();
        out.extend(self.render_block("Environment", &env));

        for line in book.footer {
            out.extend(wrap(line, self.width));
        }
        out
    }

    fn render_topic(&self, topic: &HelpTopic<'_>) -> Vec<String> {
        let mut out = vec![
            format!("{}: {}", topic.name, topic.summary),
            format!("usage: {}", topic.usage),
            String::new(),
        ];
        for line in topic.details {
            out.extend(wrap(line, self.width));
        }
        if !topic.details.is_empty() {
            out.push(String::new());
        }

        let flags: Vec<(&str, &str)> =
            topic.flags.iter().map(|f| (f.name, f.desc)).collect();
        out.extend(self.render_block("Options", &flags));

        if !topic.examples.is_empty() {
            out.push("Examples:".to_string());
            for ex in topic.examples {
                out.push(format!("  {ex}"));
            }
        }
        out
    }

    fn render_block(&self, title: &str, rows: &[(&str, &str)]) -> Vec<String> {
        if rows.is_empty() {
            return Vec::new();
        }
        let label_width =
            rows.iter().map(|r| r.0.len()).max().unwrap_or(0).min(34);
        let desc_width = self
            .width
            .saturating_sub(label_width + 4)
            .max(self.width / 3);

        let mut out = vec![format!("{title}:")];
        for (label, desc) in rows {
            let label_lines = wrap(label, label_width);
            let desc_lines = wrap(desc, desc_width);
            for idx in 0..label_lines.len().max(desc_lines.len()) {
                let l = label_lines.get(idx).map(String::as_str).unwrap_or("");
                let d = desc_lines.get(idx).map(String::as_str).unwrap_or("");
                out.push(
                    format!("  {l:label_width$}  {d}").trim_end().to_string(),
                );
            }
        }
        out.push(String::new());
        out
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || out.is_empty() {
        out.push(line);
    }
    out
}
