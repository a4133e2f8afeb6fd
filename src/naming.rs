//! Filename conventions shared by both page variants.
//!
//! Images carry no metadata beyond their filename, so everything shown on a
//! page is derived from it:
//!
//! - **Sort key**: the first run of digits anywhere in the filename.
//!   `shot-12-final.jpg` sorts as 12; `cover.jpg` sorts after every number.
//! - **Display name**: the stem with separators turned into spaces.
//!   `my-photo_(final).jpg` → "my photo final".
//! - **Stem**: the filename without its extension, untouched. The index page
//!   uses it verbatim as the project folder name.

use std::cmp::Ordering;
use std::path::Path;

/// Ordering key derived from the first number in a filename.
///
/// Numbered names come first, in ascending numeric order; unnumbered names
/// compare equal to each other and sort after all numbered ones.
///
/// A number is held as its decimal digits without leading zeros. Comparing
/// length first and then the digits gives numeric order at any size.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Number { len: usize, digits: String },
    Unnumbered,
}

impl SortKey {
    pub fn number(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        SortKey::Number {
            len: digits.len(),
            digits: digits.to_string(),
        }
    }
}

/// Extract the sort key from a filename.
pub fn number_sort_key(filename: &str) -> SortKey {
    let digits: String = filename
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return SortKey::Unnumbered;
    }
    SortKey::number(&digits)
}

/// Compare two filenames by their first number.
pub fn compare_by_number(a: &str, b: &str) -> Ordering {
    number_sort_key(a).cmp(&number_sort_key(b))
}

/// Filename without its extension, otherwise unmodified.
///
/// Only the last extension is removed: `a.b.jpg` → `a.b`.
pub fn stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// Human-readable name for an image or text file.
///
/// Strips the extension, turns `-` and `_` into spaces, replaces `(` with a
/// space (unless one is already there) and drops `)`. Case is preserved.
pub fn display_name(filename: &str) -> String {
    let stem = stem(filename);
    let mut clean = String::with_capacity(stem.len());
    for c in stem.chars() {
        match c {
            '-' | '_' => clean.push(' '),
            '(' => {
                if !clean.ends_with(' ') {
                    clean.push(' ');
                }
            }
            ')' => {}
            _ => clean.push(c),
        }
    }
    clean
}

/// Page title derived from a project text filename: display name, uppercased.
pub fn project_title(text_filename: &str) -> String {
    display_name(text_filename).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_is_first_digit_run() {
        assert_eq!(number_sort_key("a10.jpg"), SortKey::number("10"));
        assert_eq!(number_sort_key("001-dawn.jpg"), SortKey::number("1"));
        assert_eq!(number_sort_key("shot-12-take-3.jpg"), SortKey::number("12"));
        assert_eq!(number_sort_key("v000.jpg"), SortKey::number("0"));
    }

    #[test]
    fn sort_key_without_digits_is_unnumbered() {
        assert_eq!(number_sort_key("cover.jpg"), SortKey::Unnumbered);
        assert_eq!(number_sort_key(""), SortKey::Unnumbered);
    }

    #[test]
    fn unnumbered_sorts_after_any_number() {
        assert!(SortKey::number(&"9".repeat(60)) < SortKey::Unnumbered);
        assert!(SortKey::number("2") < SortKey::number("10"));
        assert!(SortKey::number("007") < SortKey::number("10"));
    }

    #[test]
    fn digit_runs_beyond_u128_keep_numeric_order() {
        let zeros = "0".repeat(40);
        let two = format!("a2{zeros}.jpg");
        let one = format!("b1{zeros}.jpg");
        let mut names = vec![two.as_str(), one.as_str(), "c.jpg", "d5.jpg"];
        names.sort_by(|a, b| compare_by_number(a, b));
        assert_eq!(names, vec!["d5.jpg", one.as_str(), two.as_str(), "c.jpg"]);
    }

    #[test]
    fn stable_numeric_order() {
        let mut names = vec!["b2.jpg", "a10.jpg", "c.jpg", "a1.jpg"];
        names.sort_by(|a, b| compare_by_number(a, b));
        assert_eq!(names, vec!["a1.jpg", "b2.jpg", "a10.jpg", "c.jpg"]);
    }

    #[test]
    fn equal_keys_keep_original_order() {
        let mut names = vec!["z5.jpg", "x.jpg", "a5.jpg", "b.jpg", "m05.png"];
        names.sort_by(|a, b| compare_by_number(a, b));
        assert_eq!(names, vec!["z5.jpg", "a5.jpg", "m05.png", "x.jpg", "b.jpg"]);
    }

    #[test]
    fn display_name_cleans_separators_and_parens() {
        assert_eq!(display_name("my-photo_(final).jpg"), "my photo final");
    }

    #[test]
    fn display_name_paren_without_separator() {
        assert_eq!(display_name("shot(2).png"), "shot 2");
    }

    #[test]
    fn display_name_preserves_case() {
        assert_eq!(display_name("Night_Market-HK.webp"), "Night Market HK");
    }

    #[test]
    fn display_name_strips_only_last_extension() {
        assert_eq!(display_name("v1.2-final.jpg"), "v1.2 final");
    }

    #[test]
    fn stem_untouched() {
        assert_eq!(stem("My_Project-01.jpg"), "My_Project-01");
        assert_eq!(stem("noext"), "noext");
    }

    #[test]
    fn project_title_uppercased() {
        assert_eq!(project_title("My Project.txt"), "MY PROJECT");
        assert_eq!(project_title("lamp_study-v2.txt"), "LAMP STUDY V2");
    }
}
