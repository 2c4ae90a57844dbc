use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;
use crate::counter::Counter;
use crate::error::{Error, Result};
use crate::{Count, Stone};

pub fn stone_from_signed(value: i64) -> Result<Stone> {
    Stone::try_from(value).map_err(|_| Error::Negative { what: "stone", value })
}

pub fn steps_from_signed(value: i64) -> Result<usize> {
    if value < 0 {
        return Err(Error::Negative { what: "step count", value });
    }
    usize::try_from(value).map_err(|_| Error::StepsOverflow(value))
}

/// The initial line of stones, in input order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Stones(Vec<Stone>);

impl Stones {
    pub fn new(stones: Vec<Stone>) -> Self {
        Self(stones)
    }

    /// Parses a whitespace separated line such as `125 17`.
    pub fn parse(line: &str) -> Result<Self> {
        let mut stones = Vec::new();
        for (index, token) in line.split_whitespace().enumerate() {
            let stone = match token.parse::<Stone>() {
                Ok(s) => s,
                Err(_) => match token.parse::<i64>() {
                    Ok(v) => stone_from_signed(v)?,
                    Err(_) => return Err(Error::InvalidStone { index, token: token.to_string() }),
                },
            };
            stones.push(stone);
        }
        if stones.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self(stones))
    }

    pub fn as_slice(&self) -> &[Stone] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_after(&self, steps: usize) -> Result<Count> {
        Counter::new().total_after(&self.0, steps)
    }
}

impl FromStr for Stones {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Vec<Stone>> for Stones {
    fn from(stones: Vec<Stone>) -> Self {
        Self(stones)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::histogram::expand;
    use alloc::vec;

    #[test]
    fn test_parse() {
        assert_eq!("125 17".parse::<Stones>(), Ok(Stones::new(vec![125, 17])));
        assert_eq!(Stones::parse("  0 1\t10 99 999\n"), Ok(Stones::new(vec![0, 1, 10, 99, 999])));
        assert_eq!(Stones::parse("18446744073709551615").unwrap().as_slice(), &[u64::MAX]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Stones::parse(""), Err(Error::EmptyInput));
        assert_eq!(Stones::parse(" \n"), Err(Error::EmptyInput));
        assert_eq!(Stones::parse("1 -5"), Err(Error::Negative { what: "stone", value: -5 }));
        assert_eq!(
            Stones::parse("1 2 x3"),
            Err(Error::InvalidStone { index: 2, token: "x3".to_string() })
        );
        assert_eq!(
            Stones::parse("18446744073709551616"),
            Err(Error::InvalidStone { index: 0, token: "18446744073709551616".to_string() })
        );
    }

    #[test]
    fn test_signed() {
        assert_eq!(stone_from_signed(17), Ok(17));
        assert_eq!(stone_from_signed(-1), Err(Error::Negative { what: "stone", value: -1 }));
        assert_eq!(steps_from_signed(75), Ok(75));
        assert_eq!(steps_from_signed(-3), Err(Error::Negative { what: "step count", value: -3 }));
    }

    #[test]
    fn test_total_after() {
        let stones = Stones::new(vec![125, 17, 125, 0]);
        assert_eq!(stones.total_after(6), expand(stones.as_slice(), 6).map(|s| s.len() as Count));
        assert_eq!("125 17".parse::<Stones>().unwrap().total_after(25), Ok(55312));
    }
}
