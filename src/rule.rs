use crate::Stone;
use crate::error::{Error, Result};

pub const MULTIPLIER: Stone = 2024;

/// What a stone turns into after one blink.
pub type Rule = fn(Stone) -> Result<Children>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Children {
    One([Stone; 1]),
    Two([Stone; 2]),
}

impl Children {
    pub fn as_slice(&self) -> &[Stone] {
        match self {
            Children::One(s) => s,
            Children::Two(s) => s,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

pub fn digit_count(stone: Stone) -> u32 {
    if stone == 0 { 1 } else { stone.ilog10() + 1 }
}

/// The blink rule: `0` becomes `1`, an even number of digits splits in two halves
/// (leading zeros of the right half vanish), anything else is multiplied by 2024.
pub fn transform(stone: Stone) -> Result<Children> {
    if stone == 0 {
        return Ok(Children::One([1]));
    }
    let digits = digit_count(stone);
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        Ok(Children::Two([stone / half, stone % half]))
    } else {
        stone.checked_mul(MULTIPLIER)
            .map(|s| Children::One([s]))
            .ok_or(Error::ValueOverflow(stone))
    }
}
