//! Documentation block comments.

/// Converts free-form text into a `/** ... */` block comment.
///
/// The text is trimmed as a whole, each remaining line is prefixed with the
/// indent and ` * `. No trailing newline is appended.
///
/// ```text
///                  /**
/// Hello     =>      * Hello
/// World     =>      * World
///                   */
/// ```
#[must_use]
pub fn block_comment(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut output = String::new();

    output.push_str(&format!("{pad}/**\n"));
    for line in text.trim().lines() {
        output.push_str(&format!("{pad} * {line}\n"));
    }
    output.push_str(&format!("{pad} */"));

    output
}

/// Appends a block comment and a newline when documentation is enabled.
pub fn push_doc(output: &mut String, emit_docs: bool, text: &str, indent: usize) {
    if emit_docs {
        output.push_str(&block_comment(text, indent));
        output.push('\n');
    }
}
