//! Plain-text extraction from a markdown node tree.

use super::tree::Node;

/// Flatten every human-readable piece of `node` into one string.
///
/// Each child of a container is emitted after a single space, so the result
/// carries redundant spaces; whitespace is collapsed later by the sanitizers.
/// Excluded nodes (HTML blocks, images, inline HTML) contribute nothing.
pub fn extract_text(node: &Node) -> String {
    let mut out = String::new();
    write_text(node, &mut out);
    out
}

fn write_text(node: &Node, out: &mut String) {
    match node {
        Node::Excluded(_) => {}
        Node::Text(text) => out.extend(
            text.chars()
                .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c }),
        ),
        Node::Block(_) | Node::Inline(_) => {
            for child in node.children() {
                out.push(' ');
                write_text(child, out);
            }
        }
    }
}
