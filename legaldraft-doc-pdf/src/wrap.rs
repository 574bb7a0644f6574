//! Greedy word wrapping against a fixed column budget.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines no wider than `max_width` columns.
///
/// Explicit newlines start a new paragraph; an empty paragraph yields an empty
/// line. Words wider than the budget are split across lines. Always returns
/// at least one line.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_width, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(paragraph: &str, max_width: usize, lines: &mut Vec<String>) {
    let mut current_line = String::new();
    let mut current_width = 0;
    let mut any_word = false;

    for word in paragraph.split_whitespace() {
        any_word = true;
        let word_width = UnicodeWidthStr::width(word);

        if word_width > max_width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            let mut pieces = split_word(word, max_width);
            // The last piece may still share a line with following words.
            if let Some(last) = pieces.pop() {
                lines.extend(pieces);
                current_width = UnicodeWidthStr::width(last.as_str());
                current_line = last;
            }
            continue;
        }

        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }
        if current_width > 0 {
            current_line.push(' ');
            current_width += 1;
        }
        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() || !any_word {
        lines.push(current_line);
    }
}

fn split_word(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0;
    for c in word.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            width = 0;
        }
        piece.push(c);
        width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_on_one_line() {
        assert_eq!(wrap("the quick brown fox", 40), vec!["the quick brown fox"]);
    }

    #[test]
    fn breaks_at_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn exact_width_stays_on_line() {
        assert_eq!(wrap("abcde fghij", 11), vec!["abcde fghij"]);
        assert_eq!(wrap("abcde fghij", 10), vec!["abcde", "fghij"]);
    }

    #[test]
    fn long_words_are_split() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
        assert_eq!(wrap("abcdefgh xy", 5), vec!["abcde", "fgh", "xy"]);
        assert_eq!(wrap("abcdef x", 5), vec!["abcde", "f x"]);
    }

    #[test]
    fn newlines_make_paragraphs() {
        assert_eq!(wrap("one\n\ntwo", 20), vec!["one", "", "two"]);
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(wrap("", 20), vec![""]);
        assert_eq!(wrap("   ", 20), vec![""]);
    }

    #[test]
    fn no_line_exceeds_budget() {
        let text = "Pursuant to the laws of the state the undersigned parent hereby \
                    authorizes the caretaker named below to consent to medical treatment";
        for width in [5, 12, 30] {
            for line in wrap(text, width) {
                assert!(UnicodeWidthStr::width(line.as_str()) <= width, "{line:?}");
            }
        }
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(wrap("日本 語", 4), vec!["日本", "語"]);
    }
}
