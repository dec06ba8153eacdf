use super::{HelpBook, HelpFlag, HelpTopic};

pub(crate) fn book() -> HelpBook<'static> {
    HelpBook {
        title: "Quick Memo",
        usage: "memo <command> [options]",
        topics: ALL_TOPICS,
        environment: ENVIRONMENT,
        footer: &["Use `memo help <command>` for details, e.g. `memo help recall`."],
    }
}

const ENVIRONMENT: &[HelpFlag<'static>] = &[
    HelpFlag {
        name: "MEMO_DIR",
        desc: "Directory holding memoryStorage.json (default: ~/.quick_memo)",
    },
    HelpFlag { name: "MEMO_PAGE_SIZE", desc: "Memos per recall page (default 10)" },
    HelpFlag {
        name: "MEMO_DATE_STYLE",
        desc: "full (YYYY/MM/DD HH:mm:ss, default) or day (YYYY/MM/DD)",
    },
    HelpFlag { name: "MEMO_LOG", desc: "Log filter, e.g. debug (default warn)" },
    HelpFlag { name: "NO_COLOR", desc: "Disable colored output" },
];

const ALL_TOPICS: &[HelpTopic<'static>] = &[
    HelpTopic {
        name: "add",
        summary: "Save a memo stamped with the current time.",
        usage: "memo add <text...> [-t \"#tag ...\"]",
        details: &[
            "Words are joined with spaces and trimmed. Pass - to read the text from stdin, which keeps newlines.",
            "Tag input is split on whitespace; tokens that do not start with # are dropped. Full-width ＃ and digits are folded to ASCII.",
        ],
        flags: &[HelpFlag {
            name: "-t, --tag <tags>",
            desc: "Whitespace-separated #tags; repeatable.",
        }],
        examples: &["memo add buy milk -t \"#shopping #today\"", "echo notes | memo add -"],
    },
    HelpTopic {
        name: "recall",
        summary: "Find memos by text, tags and date; newest first.",
        usage: "memo recall [-s text] [-t tags] [-d date] [-p N] [--all] [--full]",
        details: &[
            "Text matches as a case-sensitive substring. Every given tag must be present.",
            "Dates are YYYY/MM/DD for one day or YYYY/MM/DD-YYYY/MM/DD for an inclusive range. Any other date input is ignored.",
            "Memos longer than three lines or 80 characters are shown collapsed.",
        ],
        flags: &[
            HelpFlag { name: "-s, --search <text>", desc: "Substring of the memo text." },
            HelpFlag { name: "-t, --tag <tags>", desc: "Required #tags; repeatable." },
            HelpFlag { name: "-d, --date <date>", desc: "Day or day range." },
            HelpFlag { name: "-p, --page <N>", desc: "Page to show (default 1)." },
            HelpFlag { name: "-a, --all", desc: "Show every match on one page." },
            HelpFlag { name: "--full", desc: "Do not collapse long memos." },
        ],
        examples: &[
            "memo recall -t \"#work\"",
            "memo recall -d 2024/03/01-2024/03/31 -s report",
        ],
    },
    HelpTopic {
        name: "delete",
        summary: "Delete every memo with the given text and date.",
        usage: "memo delete <text> [-d date] [-y]",
        details: &[
            "The date must equal the stored timestamp exactly; omit it for memos saved without one.",
            "All memos with identical text and date are removed together.",
        ],
        flags: &[
            HelpFlag { name: "-d, --date <date>", desc: "Stored timestamp to match." },
            HelpFlag { name: "-y, --yes", desc: "Skip the confirmation prompt." },
        ],
        examples: &["memo delete \"buy milk\" -d \"2024/01/01 10:00:00\""],
    },
    HelpTopic {
        name: "tags",
        summary: "List tags with their memo counts.",
        usage: "memo tags",
        details: &[],
        flags: &[],
        examples: &[],
    },
    HelpTopic {
        name: "path",
        summary: "Show the storage file.",
        usage: "memo path",
        details: &[],
        flags: &[],
        examples: &[],
    },
    HelpTopic {
        name: "help",
        summary: "Show this overview or help for one command.",
        usage: "memo help [command]",
        details: &[],
        flags: &[],
        examples: &[],
    },
];
