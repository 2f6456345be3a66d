/// Inline rewriting for paragraph text.
///
/// A single line of paragraph content is rewritten by four substitutions
/// applied in a fixed sequence, each rule seeing the previous rule's
/// output. The ordering is observable: a digest directive wrapping a bold
/// span hashes the already-substituted `<b>` text, not the raw markup.
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref STRONG_RE: Regex = Regex::new(r"\*\*(.*?)\*\*").expect("regex");
    static ref EMPHASIS_RE: Regex = Regex::new(r"__(.*?)__").expect("regex");
    static ref DIGEST_RE: Regex = Regex::new(r"\[\[(.*?)\]\]").expect("regex");
    static ref STRIP_RE: Regex = Regex::new(r"\(\((.*?)\)\)").expect("regex");
}

/// The character removed by the `((...))` strip directive.
const STRIP_TARGET: char = 'c';

/// Rewrites the inline spans of one line of paragraph text.
///
/// Substitutions run in this order:
/// 1. `**...**` becomes a `<b>` span.
/// 2. `__...__` becomes an `<em>` span (this dialect maps double
///    underscores to emphasis, not bold).
/// 3. `[[...]]` is replaced by the lowercase hex MD5 digest of the
///    enclosed text.
/// 4. `((...))` is replaced by the enclosed text with every `c` and `C`
///    removed.
///
/// All spans match shortest-first, so `**a** and **b**` yields two
/// independent spans. Unmatched delimiters are left as-is.
pub fn rewrite(text: &str) -> String {
    let text = STRONG_RE.replace_all(text, "<b>$1</b>");
    let text = EMPHASIS_RE.replace_all(&text, "<em>$1</em>");
    let text = DIGEST_RE.replace_all(&text, |caps: &Captures| digest(&caps[1]));
    let text = STRIP_RE.replace_all(&text, |caps: &Captures| {
        strip_char(&caps[1], STRIP_TARGET)
    });
    text.into_owned()
}

/// Lowercase hexadecimal MD5 digest of `text`.
fn digest(text: &str) -> String {
    format!("{:x}", md5::compute(text))
}

/// Removes every occurrence of `target` from `text`, ignoring ASCII case.
fn strip_char(text: &str, target: char) -> String {
    text.chars()
        .filter(|ch| !ch.eq_ignore_ascii_case(&target))
        .collect()
}
