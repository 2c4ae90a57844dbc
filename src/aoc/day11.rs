use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use crate::aoc::AocDay;
use crate::cache::SharedCache;
use crate::counter::Counter;
use crate::error::{Error, Result};
use crate::stones::Stones;

pub const PART1_BLINKS: usize = 25;
pub const PART2_BLINKS: usize = 75;

/// Both parts share one cache, so part 2 reuses what part 1 resolved.
pub struct AocDay11 {
    stones: Stones,
    cache: SharedCache,
}

impl AocDay11 {
    fn count_after_blinks(&self, n: usize) -> Result<String> {
        let count = Counter::with_memo(&self.cache).total_after(self.stones.as_slice(), n)?;
        Ok(format!("{count}"))
    }
}

impl AocDay for AocDay11 {
    fn new(input: Vec<String>) -> Result<Self> {
        let line = input.iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .ok_or(Error::EmptyInput)?;
        Ok(Self { stones: line.parse()?, cache: SharedCache::new() })
    }

    fn part1(&self) -> Result<String> {
        self.count_after_blinks(PART1_BLINKS)
    }

    fn part2(&self) -> Result<String> {
        self.count_after_blinks(PART2_BLINKS)
    }
}

#[cfg(test)]
mod test {
    use crate::aoc::AocDay;
    use crate::aoc::day11::AocDay11;
    use crate::histogram::count_after_blinks;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use alloc::{format, vec};

    const DATA: &str = "125 17";

    #[test]
    fn test_part1() {
        let day = AocDay11::new(DATA.lines().map(ToString::to_string).collect()).unwrap();
        assert_eq!(day.part1().unwrap(), "55312");
    }

    #[test]
    fn test_part2() {
        let day = AocDay11::new(vec![String::new(), DATA.to_string()]).unwrap();
        let expected = count_after_blinks(&[125, 17], 75).unwrap();
        assert_eq!(day.part2().unwrap(), format!("{expected}"));
    }

    #[test]
    fn test_run() {
        let lines: Vec<String> = AocDay11::run(vec![DATA.to_string()]).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "running...");
        assert_eq!(lines[1], "Part1: 55312");
        assert!(lines[2].starts_with("Part2: "));
    }

    #[test]
    fn test_run_errors() {
        let lines: Vec<String> = AocDay11::run(vec!["125 -17".to_string()]).collect();
        assert_eq!(lines, ["running...", "Error: negative stone: -17"]);
        let lines: Vec<String> = AocDay11::run(Vec::new()).collect();
        assert_eq!(lines, ["running...", "Error: no stones in input"]);
    }
}
