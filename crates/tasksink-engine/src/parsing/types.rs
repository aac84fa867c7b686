/// One physical source line plus everything nested more deeply beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Verbatim line content with the `\n` terminator excluded. A trailing
    /// `\r` from CRLF input is kept so rendering stays lossless. Never
    /// mutated after construction.
    pub text: String,
    /// Indent units from leading whitespace: a tab counts 4, a space 1.
    /// Used only to establish parent/child relationships, never re-emitted.
    pub indent_width: usize,
    /// Whether the line is a checkbox task (`- [ ]`, `* [x]`, ...).
    pub is_task: bool,
    /// For tasks, whether the bracketed status character is anything other
    /// than a space. Always false for non-task lines.
    pub is_completed: bool,
    /// Lines indented strictly deeper, in original order. Exclusively owned
    /// by this block.
    pub children: Vec<Block>,
    /// 0-based line number in the source document. Diagnostics only; plays
    /// no part in sorting.
    pub source_index: usize,
}
