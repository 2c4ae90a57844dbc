use alloc::string::String;
use crate::Stone;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("negative {what}: {value}")]
    Negative { what: &'static str, value: i64 },

    #[error("step count {0} does not fit in usize")]
    StepsOverflow(i64),

    #[error("stone {0} overflows when multiplied")]
    ValueOverflow(Stone),

    #[error("count of stone {stone} after {steps} steps overflows")]
    CountOverflow { stone: Stone, steps: usize },

    #[error("invalid stone #{index}: `{token}`")]
    InvalidStone { index: usize, token: String },

    #[error("no stones in input")]
    EmptyInput,
}

pub type Result<T> = core::result::Result<T, Error>;
