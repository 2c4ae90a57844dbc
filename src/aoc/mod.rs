use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use crate::debug;
use crate::error::Result;

pub use day11::{AocDay11, PART1_BLINKS, PART2_BLINKS};

mod day11;

pub trait AocDay: Send + Sized {
    fn new(input: Vec<String>) -> Result<Self>;

    fn part1(&self) -> Result<String> {
        Ok(String::new())
    }
    fn part2(&self) -> Result<String> {
        Ok(String::new())
    }

    fn run(input: Vec<String>) -> RunningAoc<Self> {
        RunningAoc(Self::new(input), 0)
    }
}

/// Output lines of a puzzle run, one per `next`: a banner, then each part.
///
/// The first error is reported as `Error: ...` and ends the run.
pub struct RunningAoc<D: AocDay>(Result<D>, u8);

impl<D: AocDay> Iterator for RunningAoc<D> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let part = match (&self.0, self.1) {
            (_, 0) => {
                self.1 = 1;
                return Some(String::from("running..."));
            }
            (Err(e), 1) => Err(e.clone()),
            (Ok(day), 1) => day.part1().map(|s| format!("Part1: {s}")),
            (Ok(day), 2) => day.part2().map(|s| format!("Part2: {s}")),
            _ => return None,
        };
        self.1 += 1;
        match part {
            Ok(line) => {
                debug!("{}", line.as_str());
                Some(line)
            }
            Err(e) => {
                self.1 = u8::MAX;
                Some(format!("Error: {e}"))
            }
        }
    }
}
