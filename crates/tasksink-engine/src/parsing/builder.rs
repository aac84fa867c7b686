use super::types::Block;

/// Folds classified lines into an indentation forest in a single
/// left-to-right pass, keeping an explicit stack of the open ancestor chain.
pub struct TreeBuilder {
    roots: Vec<Block>,
    stack: Vec<(Block, usize)>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Attach the next line's block. A line can only descend from the nearest
    /// preceding line with strictly smaller indent width, so everything at or
    /// above this block's width is closed first.
    pub fn push(&mut self, block: Block) {
        let width = block.indent_width;
        while self.stack.last().is_some_and(|&(_, w)| w >= width) {
            self.close_top();
        }
        self.stack.push((block, width));
    }

    /// Close the remaining ancestor chain and hand back the root forest.
    pub fn finish(mut self) -> Vec<Block> {
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.roots
    }

    fn close_top(&mut self) {
        if let Some((block, _)) = self.stack.pop() {
            match self.stack.last_mut() {
                Some((parent, _)) => parent.children.push(block),
                None => self.roots.push(block),
            }
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
