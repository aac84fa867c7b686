use crate::parsing::Block;

/// Pre-order serialization of a block forest: each block's verbatim text,
/// then its children, with siblings joined by single `\n` at every level.
/// Rendering a freshly parsed, unsorted forest reproduces the input exactly.
pub fn render(blocks: &[Block]) -> String {
    let mut out = String::new();
    render_into(blocks, &mut out);
    out
}

fn render_into(blocks: &[Block], out: &mut String) {
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&block.text);
        if !block.children.is_empty() {
            out.push('\n');
            render_into(&block.children, out);
        }
    }
}
