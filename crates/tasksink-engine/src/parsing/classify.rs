use std::sync::OnceLock;

use regex::Regex;

use super::types::Block;

/// Bullet marker (`-` or `*`), at least one space, then a single bracketed
/// status character. Anything else is plain text.
fn task_marker() -> &'static Regex {
    static TASK_MARKER: OnceLock<Regex> = OnceLock::new();
    TASK_MARKER.get_or_init(|| Regex::new(r"^\s*[-*]\s+\[(.)\]").expect("invalid task pattern"))
}

/// Indent units of a line's leading whitespace: tab = 4, space = 1.
pub fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|&c| c == ' ' || c == '\t')
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

/// Classify one line into a childless [`Block`], keeping the text verbatim.
pub fn classify_line(text: &str, source_index: usize) -> Block {
    let (is_task, is_completed) = match task_marker().captures(text) {
        Some(caps) => (true, &caps[1] != " "),
        None => (false, false),
    };

    Block {
        indent_width: indent_width(text),
        text: text.to_string(),
        is_task,
        is_completed,
        children: Vec::new(),
        source_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::open_dash("- [ ] task", true, false)]
    #[case::done_dash("- [x] task", true, true)]
    #[case::open_asterisk("* [ ] task", true, false)]
    #[case::done_uppercase("- [X] task", true, true)]
    #[case::any_nonspace_status_counts_done("  - [-] partial", true, true)]
    #[case::bare_checkbox_without_text("- [ ]", true, false)]
    #[case::no_space_after_bullet("-[ ] a", false, false)]
    #[case::empty_brackets("- [] a", false, false)]
    #[case::two_status_chars("- [xx] a", false, false)]
    #[case::plain_bullet("- just a bullet", false, false)]
    #[case::plain_text("nothing here", false, false)]
    #[case::blank("", false, false)]
    fn classifies_task_lines(#[case] line: &str, #[case] task: bool, #[case] completed: bool) {
        let block = classify_line(line, 0);
        assert_eq!(block.is_task, task, "is_task for {line:?}");
        assert_eq!(block.is_completed, completed, "is_completed for {line:?}");
    }

    #[rstest]
    #[case("", 0)]
    #[case("- a", 0)]
    #[case("  x", 2)]
    #[case("\tx", 4)]
    #[case("\t\tx", 8)]
    #[case(" \t x", 6)]
    fn computes_indent_width(#[case] line: &str, #[case] width: usize) {
        assert_eq!(indent_width(line), width);
    }

    #[test]
    fn keeps_text_verbatim_including_trailing_whitespace() {
        let block = classify_line("  - [x] done  \t", 7);
        assert_eq!(block.text, "  - [x] done  \t");
        assert_eq!(block.source_index, 7);
    }

    #[test]
    fn trailing_carriage_return_does_not_affect_classification() {
        let block = classify_line("- [x] done\r", 0);
        assert!(block.is_task);
        assert!(block.is_completed);
    }
}
