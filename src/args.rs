use std::error::Error;

pub struct ArgParser {
    iter: std::vec::IntoIter<String>,
    command_name: String,
}

impl ArgParser {
    pub fn new(args: Vec<String>, command_name: &str) -> Self {
        Self { iter: args.into_iter(), command_name: command_name.to_string() }
    }

    /// Extract the value following a flag
    pub fn extract_value(
        &mut self,
        flag: &str,
    ) -> Result<String, Box<dyn Error>> {
        self.iter.next().ok_or_else(|| {
            format!("Provide a value after {} for {}", flag, self.command_name)
                .into()
        })
    }

    /// Extract a positive page number
    pub fn extract_page(&mut self, flag: &str) -> Result<usize, Box<dyn Error>> {
        let raw = self.extract_value(flag)?;
        match raw.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("Page must be a positive number, got {raw}").into()),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        self.iter.next()
    }
}

/// Flags accepted by `memo recall`
#[derive(Debug, Default)]
pub struct RecallFlags {
    pub search: String,
    pub tags: Vec<String>,
    pub date: String,
    pub page: usize,
    pub show_all: bool,
    pub full: bool,
}

impl RecallFlags {
    pub fn parse(args: Vec<String>) -> Result<Self, Box<dyn Error>> {
        let mut flags = RecallFlags { page: 1, ..Default::default() };
        let mut parser = ArgParser::new(args, "recall");
        while let Some(arg) = parser.next() {
            match arg.as_str() {
                "-s" | "--search" => flags.search = parser.extract_value(&arg)?,
                "-t" | "--tag" => flags.tags.push(parser.extract_value(&arg)?),
                "-d" | "--date" => flags.date = parser.extract_value(&arg)?,
                "-p" | "--page" => flags.page = parser.extract_page(&arg)?,
                "-a" | "--all" => flags.show_all = true,
                "--full" => flags.full = true,
                other => {
                    return Err(format!("Unknown flag for recall: {other}").into());
                }
            }
        }
        Ok(flags)
    }
}

/// Text and tag inputs accepted by `memo add`
#[derive(Debug, Default)]
pub struct AddFlags {
    pub words: Vec<String>,
    pub tags: Vec<String>,
}

impl AddFlags {
    pub fn parse(args: Vec<String>) -> Result<Self, Box<dyn Error>> {
        let mut flags = AddFlags::default();
        let mut parser = ArgParser::new(args, "add");
        while let Some(arg) = parser.next() {
            match arg.as_str() {
                "-t" | "--tag" => flags.tags.push(parser.extract_value(&arg)?),
                other => flags.words.push(other.to_string()),
            }
        }
        Ok(flags)
    }
}

/// Match fields accepted by `memo delete`
#[derive(Debug, Default)]
pub struct DeleteFlags {
    pub text: Option<String>,
    pub date: String,
    pub assume_yes: bool,
}

impl DeleteFlags {
    pub fn parse(args: Vec<String>) -> Result<Self, Box<dyn Error>> {
        let mut flags = DeleteFlags::default();
        let mut parser = ArgParser::new(args, "delete");
        while let Some(arg) = parser.next() {
            match arg.as_str() {
                "-d" | "--date" => flags.date = parser.extract_value(&arg)?,
                "-y" | "--yes" => flags.assume_yes = true,
                other => {
                    if flags.text.is_some() {
                        return Err(format!(
                            "Unexpected argument for delete: {other} (quote the memo text)"
                        )
                        .into());
                    }
                    flags.text = Some(other.to_string());
                }
            }
        }
        Ok(flags)
    }
}
