pub mod builder;
pub mod classify;
pub mod types;

pub use types::Block;

use builder::TreeBuilder;

#[derive(Debug)]
pub struct ParsedDoc {
    pub roots: Vec<Block>,
}

/// Split the document into lines and fold them into an indentation forest.
///
/// Splitting is on `\n` only. A `\r` left at the end of a line stays inside
/// the block's verbatim text, so rendering reproduces CRLF documents byte
/// for byte. No line is dropped; blank lines become plain-text blocks.
pub fn parse_document(text: &str) -> ParsedDoc {
    let mut builder = TreeBuilder::new();
    for (index, line) in text.split('\n').enumerate() {
        builder.push(classify::classify_line(line, index));
    }

    ParsedDoc {
        roots: builder.finish(),
    }
}
