use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use crate::debug;
use crate::error::{Error, Result};
use crate::rule::{transform, Rule};
use crate::{Count, Stone};

/// Blinks a whole line at once, keeping only how many stones carry each value.
pub fn count_after_blinks(stones: &[Stone], steps: usize) -> Result<Count> {
    count_after_blinks_with(transform, stones, steps)
}

pub fn count_after_blinks_with(rule: Rule, stones: &[Stone], steps: usize) -> Result<Count> {
    let mut counts: BTreeMap<Stone, Count> = BTreeMap::new();
    for s in stones.iter().copied() {
        *counts.entry(s).or_default() += 1
    }
    for step in 0..steps {
        let mut new_counts: BTreeMap<Stone, Count> = BTreeMap::new();
        for (s, c) in counts.into_iter() {
            for &child in rule(s)?.as_slice() {
                let n = new_counts.entry(child).or_default();
                *n = n.checked_add(c).ok_or(Error::CountOverflow { stone: child, steps: step + 1 })?;
            }
        }
        counts = new_counts;
        debug!("blink {}: {} distinct values", step + 1, counts.len());
    }

    counts.values().try_fold(0 as Count, |sum, &c| {
        sum.checked_add(c).ok_or(Error::CountOverflow { stone: 0, steps })
    })
}

/// Every stone of the line after `steps` blinks, in order. Grows exponentially.
pub fn expand(stones: &[Stone], steps: usize) -> Result<Vec<Stone>> {
    let mut line = stones.to_vec();
    for _ in 0..steps {
        let mut next = Vec::with_capacity(line.len() * 2);
        for s in line {
            next.extend_from_slice(transform(s)?.as_slice());
        }
        line = next;
    }
    Ok(line)
}
