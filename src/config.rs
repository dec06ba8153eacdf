use crate::note::DateStyle;
use std::error::Error;
use std::path::PathBuf;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DIR_ENV: &str = "MEMO_DIR";
pub const PAGE_SIZE_ENV: &str = "MEMO_PAGE_SIZE";
pub const DATE_STYLE_ENV: &str = "MEMO_DATE_STYLE";
pub const LOG_ENV: &str = "MEMO_LOG";

#[derive(Debug, Clone)]
pub struct Config {
    pub dir: PathBuf,
    pub page_size: usize,
    pub date_style: DateStyle,
    pub use_color: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any variable source.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Box<dyn Error>> {
        let dir = match lookup(DIR_ENV) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => {
                let home = lookup("HOME")
                    .ok_or("HOME not set; set MEMO_DIR explicitly")?;
                PathBuf::from(home).join(".quick_memo")
            }
        };

        let page_size = match lookup(PAGE_SIZE_ENV) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(format!(
                        "{PAGE_SIZE_ENV} must be a positive number, got {raw:?}"
                    )
                    .into());
                }
            },
            None => DEFAULT_PAGE_SIZE,
        };

        let date_style = match lookup(DATE_STYLE_ENV) {
            Some(raw) => DateStyle::parse(&raw).ok_or_else(|| {
                format!("{DATE_STYLE_ENV} must be full or day, got {raw:?}")
            })?,
            None => DateStyle::default(),
        };

        Ok(Self {
            dir,
            page_size,
            date_style,
            use_color: lookup("NO_COLOR").is_none(),
        })
    }
}
