/// Per-line classification for the block-level state machine.
///
/// Each raw input line is classified against its whitespace-trimmed form,
/// trying marker parsers in priority order: heading, unordered item,
/// ordered item, then blank or plain text. First match wins.
use nom::IResult;
use nom::bytes::complete::take_while1;
use nom::character::complete::char;

/// Classification of one raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A `#` marker run of one to six, plus the heading text.
    Heading { level: u8, text: &'a str },
    /// A `#` marker run outside the heading range; the original line
    /// passes through untouched.
    RawHeading,
    /// A `-` item, rendered inside `<ul>`.
    UnorderedItem(&'a str),
    /// A `*` item, rendered inside `<ol>`.
    OrderedItem(&'a str),
    /// Nothing but whitespace.
    Blank,
    /// Plain paragraph text.
    Text(&'a str),
}

fn heading_marker(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c == '#')(input)
}

fn unordered_marker(input: &str) -> IResult<&str, char> {
    char('-')(input)
}

fn ordered_marker(input: &str) -> IResult<&str, char> {
    char('*')(input)
}

/// Classifies a single line of input.
///
/// Markers are recognized on the trimmed line, so indented markers still
/// count. The heading level is the length of the leading `#` run; runs
/// longer than six downgrade the line to a verbatim passthrough rather
/// than an error.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if let Ok((rest, marker)) = heading_marker(trimmed) {
        return if (1..=6).contains(&marker.len()) {
            LineKind::Heading {
                level: marker.len() as u8,
                text: rest.trim(),
            }
        } else {
            LineKind::RawHeading
        };
    }

    if let Ok((rest, _)) = unordered_marker(trimmed) {
        return LineKind::UnorderedItem(rest.trim());
    }

    if let Ok((rest, _)) = ordered_marker(trimmed) {
        return LineKind::OrderedItem(rest.trim());
    }

    if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_headings_by_marker_run_length() {
        assert_eq!(
            classify("# Title"),
            LineKind::Heading {
                level: 1,
                text: "Title"
            }
        );
        assert_eq!(
            classify("### Deep"),
            LineKind::Heading {
                level: 3,
                text: "Deep"
            }
        );
        assert_eq!(
            classify("###### Edge"),
            LineKind::Heading {
                level: 6,
                text: "Edge"
            }
        );
    }

    #[test]
    fn heading_text_does_not_require_a_space_after_the_marker() {
        assert_eq!(
            classify("##glued"),
            LineKind::Heading {
                level: 2,
                text: "glued"
            }
        );
    }

    #[test]
    fn marker_runs_beyond_six_pass_through() {
        assert_eq!(classify("####### seven"), LineKind::RawHeading);
    }

    #[test]
    fn bare_marker_yields_empty_heading_text() {
        assert_eq!(classify("#"), LineKind::Heading { level: 1, text: "" });
    }

    #[test]
    fn classifies_list_items() {
        assert_eq!(classify("- item"), LineKind::UnorderedItem("item"));
        assert_eq!(classify("* item"), LineKind::OrderedItem("item"));
    }

    #[test]
    fn indented_markers_still_count() {
        assert_eq!(classify("   - item"), LineKind::UnorderedItem("item"));
        assert_eq!(
            classify("  ## indented"),
            LineKind::Heading {
                level: 2,
                text: "indented"
            }
        );
    }

    #[test]
    fn classifies_blank_and_text_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify("  hello  "), LineKind::Text("hello"));
    }
}
