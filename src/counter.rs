use alloc::collections::BTreeMap;
use alloc::vec;
use crate::cache::{Memo, StoneCache};
use crate::debug;
use crate::error::{Error, Result};
use crate::rule::{transform, Children, Rule};
use crate::{Count, Stone};

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterStats {
    pub hits: u64,
    pub misses: u64,
    pub max_depth: usize,
}

/// Counts the stones a single stone becomes, memoizing on (stone, remaining steps).
pub struct Counter<M: Memo = StoneCache> {
    rule: Rule,
    memo: M,
    stats: CounterStats,
}

impl Counter {
    pub fn new() -> Self {
        Self::with_memo(StoneCache::new())
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

// one pending (stone, steps) query: children are summed left to right into `total`
#[derive(Copy, Clone)]
struct Frame {
    stone: Stone,
    steps: usize,
    children: Children,
    next: usize,
    total: Count,
}

impl<M: Memo> Counter<M> {
    pub fn with_memo(memo: M) -> Self {
        Self {
            rule: transform,
            memo,
            stats: CounterStats::default(),
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    pub fn stats(&self) -> CounterStats {
        self.stats
    }

    pub fn memo(&self) -> &M {
        &self.memo
    }

    pub fn into_memo(self) -> M {
        self.memo
    }

    /// Number of stones `stone` has become after `steps` blinks.
    ///
    /// Runs on an explicit frame stack: the call depth stays constant whatever `steps` is.
    pub fn count_after(&mut self, stone: Stone, steps: usize) -> Result<Count> {
        if steps == 0 {
            return Ok(1);
        }
        if let Some(count) = self.memo.get(stone, steps) {
            self.stats.hits += 1;
            return Ok(count);
        }
        self.stats.misses += 1;

        let mut stack = vec![self.frame(stone, steps)?];
        let mut visited = 1usize;
        let mut root_total = 0;
        while let Some(frame) = stack.last_mut() {
            let next = frame.children.as_slice().get(frame.next).copied();
            if let Some(child) = next {
                frame.next += 1;
                let below = frame.steps - 1;
                if below == 0 {
                    frame.total = add(frame.total, 1, frame)?;
                } else if let Some(count) = self.memo.get(child, below) {
                    self.stats.hits += 1;
                    frame.total = add(frame.total, count, frame)?;
                } else {
                    self.stats.misses += 1;
                    let child_frame = self.frame(child, below)?;
                    stack.push(child_frame);
                    visited += 1;
                    self.stats.max_depth = self.stats.max_depth.max(stack.len());
                }
                continue;
            }

            let Frame { stone: done, steps: done_steps, total, .. } = *frame;
            stack.pop();
            self.memo.insert(done, done_steps, total);
            match stack.last_mut() {
                Some(parent) => parent.total = add(parent.total, total, parent)?,
                None => root_total = total,
            }
        }
        debug!(
            "count_after({}, {}) = {}: {} frames, {} cached",
            stone, steps, root_total, visited, self.memo.len()
        );
        Ok(root_total)
    }

    /// Sum of [`Counter::count_after`] over `stones`, all sharing this counter's memo.
    ///
    /// Equal stones are queried once and weighted by how often they appear.
    pub fn total_after(&mut self, stones: &[Stone], steps: usize) -> Result<Count> {
        let mut multiset: BTreeMap<Stone, Count> = BTreeMap::new();
        for &s in stones {
            *multiset.entry(s).or_default() += 1;
        }
        let mut sum: Count = 0;
        for (stone, n) in multiset {
            let count = self.count_after(stone, steps)?;
            sum = count.checked_mul(n)
                .and_then(|c| c.checked_add(sum))
                .ok_or(Error::CountOverflow { stone, steps })?;
        }
        debug!("total_after({} stones, {}) = {}", stones.len(), steps, sum);
        Ok(sum)
    }

    fn frame(&self, stone: Stone, steps: usize) -> Result<Frame> {
        Ok(Frame {
            stone,
            steps,
            children: (self.rule)(stone)?,
            next: 0,
            total: 0,
        })
    }
}

fn add(total: Count, count: Count, frame: &Frame) -> Result<Count> {
    total.checked_add(count)
        .ok_or(Error::CountOverflow { stone: frame.stone, steps: frame.steps })
}

/// Stones `stone` becomes after `steps` blinks, with a fresh cache.
pub fn count_after(stone: Stone, steps: usize) -> Result<Count> {
    Counter::new().count_after(stone, steps)
}

/// Total stones after `steps` blinks of the whole initial line.
pub fn total_after(stones: &[Stone], steps: usize) -> Result<Count> {
    Counter::new().total_after(stones, steps)
}
