//! Row-group mergers.
//!
//! Both mergers group their input with [`group_by_row`](crate::classify::group_by_row)
//! and work on each row independently. Output is the concatenation of the
//! per-row results in group iteration order.

pub mod active;
pub mod fixed;

pub use active::{active_ranges_in_row, merge_active_ranges};
pub use fixed::{
    MIN_FIXED_WIDTH, contiguous_window, fixed_windows_in_row, merge_fixed_width,
    validate_fixed_width,
};
