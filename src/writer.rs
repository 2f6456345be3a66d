/// Append-only buffer of emitted output fragments.
///
/// Each fragment is one unit of output: a block delimiter such as `<ul>`,
/// or a complete content line such as `<li>item</li>`. Fragments are never
/// mutated after insertion; the buffer is joined with line breaks once the
/// traversal is done.
#[derive(Debug, Default)]
pub struct FragmentBuffer {
    fragments: Vec<String>,
}

impl FragmentBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment verbatim.
    pub fn push_raw(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Appends an opening delimiter fragment, e.g. `<ul>`.
    pub fn push_open(&mut self, tag: &str) {
        self.fragments.push(format!("<{}>", tag));
    }

    /// Appends a closing delimiter fragment, e.g. `</ul>`.
    pub fn push_close(&mut self, tag: &str) {
        self.fragments.push(format!("</{}>", tag));
    }

    /// Appends a complete element fragment, e.g. `<li>item</li>`.
    ///
    /// Content is written verbatim; this dialect does not escape markup
    /// characters.
    pub fn push_element(&mut self, tag: &str, content: &str) {
        self.fragments.push(format!("<{}>{}</{}>", tag, content, tag));
    }

    /// Returns the number of fragments appended so far.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Joins all fragments with line breaks into the final output text.
    pub fn finish(self) -> String {
        self.fragments.join("\n")
    }
}
