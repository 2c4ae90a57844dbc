#![cfg_attr(not(test), no_std)]

//! Counting stones that split as they blink.
//!
//! A stone's future only depends on its value and how many blinks remain, so
//! [`Counter`] memoizes on that pair and never materializes the line of stones.

extern crate alloc;

mod log;

pub mod aoc;
pub mod cache;
pub mod counter;
pub mod error;
pub mod histogram;
pub mod rule;
pub mod stones;

pub type Stone = u64;
pub type Count = u128;

pub use cache::{Memo, SharedCache, StoneCache};
pub use counter::{count_after, total_after, Counter, CounterStats};
pub use error::{Error, Result};
pub use rule::{transform, Children, Rule};
pub use stones::{steps_from_signed, stone_from_signed, Stones};
