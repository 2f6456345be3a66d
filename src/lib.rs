// Core modules
pub mod engine;
pub mod error;
pub mod inline;
pub mod line;
pub mod writer;

// Re-export key types for public API
pub use engine::{BlockMode, Converter};
pub use error::{ConvertError, Result};
pub use line::LineKind;
pub use writer::FragmentBuffer;

use std::fs;
use std::path::Path;

use log::debug;

/// Converts dialect text to HTML.
///
/// This is the main entry point. The input is processed line by line in a
/// single pass: block structure (headings, the two list kinds, paragraphs)
/// is tracked by the transduction engine, and paragraph content is run
/// through the inline rewriter. The function is total: every input
/// produces an output.
///
/// # Arguments
///
/// * `input` - The dialect text to convert
///
/// # Returns
///
/// Returns the generated HTML as a String
///
/// # Examples
///
/// ```
/// use minimark::convert;
///
/// assert_eq!(convert("# Hello"), "<h1>Hello</h1>");
/// assert_eq!(convert("- a\n- b"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
/// ```
pub fn convert(input: &str) -> String {
    Converter::new().run(input)
}

/// Converts the file at `source` and writes the HTML to `destination`.
///
/// The destination is overwritten if it already exists. The source must
/// reference an existing file; a missing source is reported as
/// [`ConvertError::MissingSource`], distinct from read/write failures
/// which surface as [`ConvertError::Io`].
pub fn convert_file(source: &Path, destination: &Path) -> Result<()> {
    if !source.is_file() {
        return Err(ConvertError::MissingSource {
            path: source.to_path_buf(),
        });
    }

    let input = fs::read_to_string(source)?;
    let output = convert(&input);
    debug!(
        "converted {} lines from {} into {} bytes",
        input.lines().count(),
        source.display(),
        output.len()
    );
    fs::write(destination, output)?;
    Ok(())
}
