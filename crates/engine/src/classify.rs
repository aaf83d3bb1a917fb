use crate::blocks::AtomicBlock;
use indexmap::IndexMap;

/// Atomic blocks keyed by starting row, in order of first appearance.
pub type RowGroups = IndexMap<i32, Vec<AtomicBlock>>;

/// Group blocks by their starting row `y`.
///
/// Groups are keyed by row position, not by block height. Relative order
/// within each group follows the input; groups iterate in the order their
/// row first appears in the input.
pub fn group_by_row(blocks: &[AtomicBlock]) -> RowGroups {
    let mut groups = RowGroups::new();
    for block in blocks {
        groups.entry(block.y).or_default().push(*block);
    }
    groups
}
