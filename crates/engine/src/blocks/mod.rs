pub mod atomic;
pub mod merged;

pub use atomic::{AtomicBlock, AtomicId};
pub use merged::MergedBlock;
