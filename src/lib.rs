pub mod args;
pub mod config;
pub mod formatting;
mod help;
pub mod normalize;
pub mod note;
pub mod pagination;
pub mod query;
pub mod shared;
pub mod storage;
pub mod store;
pub mod tags;

use args::{AddFlags, DeleteFlags, RecallFlags};
use config::{Config, LOG_ENV};
use formatting::FormatContext;
use query::{DateFilter, Query};
use shared::table::render_table;
use std::collections::BTreeMap;
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Read, Write};
use storage::FileStorage;
use store::{NoteStore, STORE_KEY};

pub fn entry() -> Result<(), Box<dyn Error>> {
    init_logging();

    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return help::run(Vec::new());
    }

    let cmd = args.remove(0);
    if matches!(cmd.as_str(), "help" | "-h" | "--help") {
        return help::run(args);
    }

    let cfg = Config::from_env()?;
    match cmd.as_str() {
        "add" => add_memo(args, &cfg)?,
        "recall" | "list" => recall_memos(args, &cfg)?,
        "delete" => delete_memos(args, &cfg)?,
        "tags" => list_tags(&cfg)?,
        "path" => println!("{}", storage_for(&cfg).slot_path(STORE_KEY).display()),
        other => {
            eprintln!("Unknown command: {other}");
            help::run(Vec::new())?;
        }
    }

    Ok(())
}

fn init_logging() {
    let env = env_logger::Env::new().filter_or(LOG_ENV, "warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

pub(crate) fn terminal_columns() -> Option<usize> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
}

fn storage_for(cfg: &Config) -> FileStorage {
    FileStorage::new(&cfg.dir)
}

fn open_store(cfg: &Config) -> NoteStore<FileStorage> {
    NoteStore::open(storage_for(cfg))
}

fn add_memo(args: Vec<String>, cfg: &Config) -> Result<(), Box<dyn Error>> {
    let flags = AddFlags::parse(args)?;
    if flags.words.is_empty() {
        return Err("Provide the memo text, e.g. `memo add \"text\" -t \"#tag\"`".into());
    }
    let text = if flags.words == ["-"] {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        flags.words.join(" ")
    };
    let tags = tags::parse_tag_inputs(&flags.tags);

    let mut store = open_store(cfg);
    let date = note::timestamp_string(cfg.date_style);
    match store.append(&text, tags, date)? {
        Some(note) => {
            let ctx = FormatContext::new(cfg.use_color);
            println!("Saved memo ({})", ctx.format_timestamp(&note.date));
            Ok(())
        }
        None => Err("Memo text is empty; nothing saved".into()),
    }
}

fn recall_memos(args: Vec<String>, cfg: &Config) -> Result<(), Box<dyn Error>> {
    let flags = RecallFlags::parse(args)?;
    let q = Query::from_inputs(&flags.search, &flags.tags.join(" "), &flags.date);
    if let DateFilter::Unrecognized(raw) = &q.date {
        log::warn!(
            "ignoring date filter {raw:?}: expected YYYY/MM/DD or YYYY/MM/DD-YYYY/MM/DD"
        );
    }

    let store = open_store(cfg);
    if store.load_all().is_empty() {
        println!("No memos yet. Try `memo add \"text\"`.");
        return Ok(());
    }

    let results = query::query(store.load_all(), &q);
    if results.is_empty() {
        println!("No memos found.");
        return Ok(());
    }

    let page_size = if flags.show_all { results.len() } else { cfg.page_size };
    let page = pagination::paginate(&results, page_size, flags.page);
    let ctx = FormatContext::new(cfg.use_color);
    let header = if q.is_empty() {
        format!("{} memo(s)", results.len())
    } else {
        format!("{} memo(s) found", results.len())
    };
    println!("{}", ctx.format_header(&header));
    let offset = (page.number - 1) * page_size;
    for (i, note) in page.items.iter().enumerate() {
        println!("{}", ctx.format_entry(offset + i + 1, note, &q.text, flags.full));
    }

    if let Some(next) = page.next_page() {
        println!(
            "{}",
            ctx.format_muted(&format!(
                "{} more (page {}/{}); use --page {next} or --all",
                page.remaining, page.number, page.total_pages
            ))
        );
    }
    Ok(())
}

fn delete_memos(args: Vec<String>, cfg: &Config) -> Result<(), Box<dyn Error>> {
    let flags = DeleteFlags::parse(args)?;
    let text = flags
        .text
        .ok_or("Usage: memo delete <text> [-d date] [-y]")?;
    let text = text.trim();
    let date = flags.date.trim();

    let mut store = open_store(cfg);
    let matching = store
        .load_all()
        .iter()
        .filter(|n| n.text == text && n.date == date)
        .count();
    if matching == 0 {
        println!("No memos matched.");
        return Ok(());
    }

    if !flags.assume_yes && !confirm(&format!("Delete {matching} memo(s)? [y/N] "))? {
        println!("Canceled.");
        return Ok(());
    }

    let removed = store.delete_where(text, date)?;
    println!("Deleted {removed} memo(s)");
    Ok(())
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn list_tags(cfg: &Config) -> Result<(), Box<dyn Error>> {
    #[derive(Default)]
    struct TagStat {
        count: usize,
        latest: String,
    }

    let store = open_store(cfg);
    let mut stats: BTreeMap<&str, TagStat> = BTreeMap::new();
    for note in store.load_all() {
        for tag in &note.tags {
            let entry = stats.entry(tag.as_str()).or_default();
            entry.count += 1;
            if note.date > entry.latest {
                entry.latest = note.date.clone();
            }
        }
    }

    if stats.is_empty() {
        println!("No tags found.");
        return Ok(());
    }

    let ctx = FormatContext::new(cfg.use_color);
    let rows: Vec<Vec<String>> = stats
        .into_iter()
        .map(|(tag, stat)| {
            vec![
                ctx.format_tags(&[tag.to_string()]),
                stat.count.to_string(),
                ctx.format_short_timestamp(&stat.latest),
            ]
        })
        .collect();
    println!("{}", render_table(&["tag", "count", "latest"], &rows));
    Ok(())
}
