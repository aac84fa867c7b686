//! Core engine for tasksink.
//!
//! The engine turns a plain-text task document into an indentation tree,
//! sinks completed checkbox tasks below their unfinished siblings at every
//! nesting level, and renders the tree back to text. Every byte the reorder
//! does not move is preserved exactly.

pub mod io;
pub mod parsing;
pub mod render;
pub mod sorting;

pub use parsing::{Block, ParsedDoc, parse_document};
pub use sorting::sort_blocks;

/// Sort a task document: completed tasks sink to the bottom of their sibling
/// group, everything else keeps its relative order.
///
/// Pure text-to-text. Total over all string inputs: lines that don't match
/// the checkbox pattern are treated as plain text and never reordered, and a
/// document that needs no reordering comes back byte-identical.
pub fn sort(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut doc = parse_document(text);
    sort_blocks(&mut doc.roots);
    render::render(&doc.roots)
}
