use crate::parsing::Block;

/// Recursively reorder every sibling group so completed tasks sink below
/// their unfinished siblings. Subtrees move as units; a block's children keep
/// travelling with it and are themselves reordered the same way.
pub fn sort_blocks(blocks: &mut Vec<Block>) {
    sort_level(blocks);
    for block in blocks.iter_mut() {
        if !block.children.is_empty() {
            sort_blocks(&mut block.children);
        }
    }
}

/// Stable reorder of one sibling group.
///
/// The pairwise policy (non-task pairs never reorder, same-state task pairs
/// never reorder, incomplete before completed) is not a total order, which
/// `slice::sort_by` is allowed to reject at runtime. The same result is
/// produced by refilling the positions tasks already occupy: non-task lines
/// never move at all, incomplete tasks fill the earlier task slots in their
/// original order, completed tasks fill the later ones in theirs.
fn sort_level(blocks: &mut Vec<Block>) {
    if blocks.len() < 2 {
        return;
    }

    let mut open = Vec::new();
    let mut done = Vec::new();
    let mut layout: Vec<Option<Block>> = Vec::with_capacity(blocks.len());

    for block in std::mem::take(blocks) {
        if block.is_task {
            if block.is_completed {
                done.push(block);
            } else {
                open.push(block);
            }
            layout.push(None);
        } else {
            layout.push(Some(block));
        }
    }

    let mut refill = open.into_iter().chain(done);
    for slot in layout {
        match slot {
            Some(block) => blocks.push(block),
            // one refill entry exists per empty slot
            None => blocks.push(refill.next().expect("task slot left unfilled")),
        }
    }
}
