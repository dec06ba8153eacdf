/// Fold full-width punctuation and digits typed on a Japanese keyboard into
/// their ASCII counterparts, then trim surrounding whitespace.
pub fn normalize(s: &str) -> String {
    s.chars().map(fold_char).collect::<String>().trim().to_string()
}

fn fold_char(c: char) -> char {
    match c {
        '＃' => '#',
        '－' | '–' | 'ー' => '-',
        '．' | '・' | '／' => '/',
        '０'..='９' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_full_width_digits_and_separators() {
        assert_eq!(normalize("２０２４／０３．１０"), "2024/03/10");
        assert_eq!(normalize("２０２４・０１・０１"), "2024/01/01");
    }

    #[test]
    fn folds_hash_and_dashes() {
        assert_eq!(normalize("＃仕事"), "#仕事");
        assert_eq!(
            normalize("2024/03/01－2024/03/31"),
            "2024/03/01-2024/03/31"
        );
        assert_eq!(normalize("a–b"), "a-b");
        assert_eq!(normalize("aーb"), "a-b");
    }

    #[test]
    fn trims_and_leaves_ascii_alone() {
        assert_eq!(normalize("  #work #home \n"), "#work #home");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("plain text 123"), "plain text 123");
    }
}
