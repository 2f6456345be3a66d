/// Block-level transduction engine.
///
/// Drives the whole document line by line: each line is classified, block
/// open/close delimiters are emitted on mode transitions, and paragraph
/// content is routed through the inline rewriter before it is appended to
/// the output buffer.
use crate::inline;
use crate::line::{LineKind, classify};
use crate::writer::FragmentBuffer;

/// The currently open block context.
///
/// At most one block is open at any point in the traversal; switching to a
/// different block kind closes the active one first. Keeping the states in
/// a single enum makes that mutual exclusion structural instead of a flag
/// bookkeeping invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMode {
    /// No block is open.
    None,
    /// A `<ul>` opened by `-` items.
    UnorderedList,
    /// An `<ol>` opened by `*` items.
    OrderedList,
    /// A `<p>` opened by plain text lines.
    Paragraph,
}

impl BlockMode {
    /// The delimiter tag owed when this mode is open.
    fn tag(self) -> Option<&'static str> {
        match self {
            BlockMode::None => None,
            BlockMode::UnorderedList => Some("ul"),
            BlockMode::OrderedList => Some("ol"),
            BlockMode::Paragraph => Some("p"),
        }
    }
}

/// Single-pass converter from dialect text to HTML fragments.
#[derive(Debug)]
pub struct Converter {
    mode: BlockMode,
    out: FragmentBuffer,
}

impl Converter {
    /// Creates a converter with no open block and an empty output buffer.
    pub fn new() -> Self {
        Self {
            mode: BlockMode::None,
            out: FragmentBuffer::new(),
        }
    }

    /// Converts a whole document.
    ///
    /// Total over all inputs: malformed heading markers pass through
    /// verbatim and unmatched inline delimiters are left unreplaced, so
    /// there is no failure path.
    pub fn run(mut self, input: &str) -> String {
        for line in input.lines() {
            self.push_line(line);
        }
        self.finish()
    }

    /// Feeds one raw line through the state machine.
    fn push_line(&mut self, line: &str) {
        match classify(line) {
            LineKind::Heading { level, text } => {
                self.close_open_block();
                self.out.push_element(&format!("h{}", level), text);
            }
            LineKind::RawHeading => {
                self.close_open_block();
                self.out.push_raw(line);
            }
            LineKind::UnorderedItem(text) => {
                self.enter_list(BlockMode::UnorderedList);
                self.out.push_element("li", text);
            }
            LineKind::OrderedItem(text) => {
                self.enter_list(BlockMode::OrderedList);
                self.out.push_element("li", text);
            }
            LineKind::Blank => {
                self.close_open_block();
            }
            LineKind::Text(text) => {
                if self.mode != BlockMode::Paragraph {
                    self.close_open_block();
                    self.out.push_open("p");
                    self.mode = BlockMode::Paragraph;
                }
                self.out.push_raw(inline::rewrite(text));
            }
        }
    }

    /// Opens `target` list mode if it is not already the active block.
    ///
    /// Repeated items of the same kind emit a single opening delimiter;
    /// any other open block is closed first.
    fn enter_list(&mut self, target: BlockMode) {
        if self.mode != target {
            self.close_open_block();
            if let Some(tag) = target.tag() {
                self.out.push_open(tag);
            }
            self.mode = target;
        }
    }

    /// Emits the closing delimiter for the active block, if any, and
    /// returns to `BlockMode::None`.
    fn close_open_block(&mut self) {
        if let Some(tag) = self.mode.tag() {
            self.out.push_close(tag);
        }
        self.mode = BlockMode::None;
    }

    /// Flushes the still-open block, if any, and joins the fragments.
    fn finish(mut self) -> String {
        self.close_open_block();
        self.out.finish()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        Converter::new().run(input)
    }

    #[test]
    fn heading_emits_a_single_fragment() {
        assert_eq!(convert("## Title"), "<h2>Title</h2>");
    }

    #[test]
    fn heading_closes_an_open_list() {
        assert_eq!(
            convert("- a\n# h"),
            "<ul>\n<li>a</li>\n</ul>\n<h1>h</h1>"
        );
    }

    #[test]
    fn overlong_marker_passes_the_untrimmed_line_through() {
        assert_eq!(convert("  ####### x"), "  ####### x");
    }

    #[test]
    fn repeated_items_reuse_the_open_list() {
        assert_eq!(convert("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
        assert_eq!(convert("* a\n* b"), "<ol>\n<li>a</li>\n<li>b</li>\n</ol>");
    }

    #[test]
    fn switching_list_kinds_closes_the_previous_list() {
        assert_eq!(
            convert("- a\n* b"),
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn blank_line_closes_an_open_list() {
        assert_eq!(convert("- a\n\n- b"), "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn paragraph_opens_once_per_run_of_text_lines() {
        assert_eq!(convert("a\nb"), "<p>\na\nb\n</p>");
    }

    #[test]
    fn blank_line_between_text_splits_paragraphs() {
        assert_eq!(convert("a\n\nb"), "<p>\na\n</p>\n<p>\nb\n</p>");
    }

    #[test]
    fn text_after_a_list_closes_it_before_opening_a_paragraph() {
        assert_eq!(
            convert("- item\ntext"),
            "<ul>\n<li>item</li>\n</ul>\n<p>\ntext\n</p>"
        );
    }

    #[test]
    fn paragraph_text_is_inline_rewritten() {
        assert_eq!(convert("say **x**"), "<p>\nsay <b>x</b>\n</p>");
    }

    #[test]
    fn list_item_text_is_not_inline_rewritten() {
        assert_eq!(convert("- has **markers**"), "<ul>\n<li>has **markers**</li>\n</ul>");
    }

    #[test]
    fn end_of_input_flushes_the_open_block() {
        assert_eq!(convert("text"), "<p>\ntext\n</p>");
        assert_eq!(convert("- a"), "<ul>\n<li>a</li>\n</ul>");
    }

    #[test]
    fn empty_input_produces_empty_output() {
        assert_eq!(convert(""), "");
        assert_eq!(convert("\n\n\n"), "");
    }
}
