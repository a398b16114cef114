//! request.rs
//!
//! Generation request model.
//!
//! A request is immutable once built: the branch count has been validated,
//! and every per-branch decision (name, magnitude, sign) derives from it.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::GenError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Rust,
    C,
}

impl Language {
    pub fn extension(self) -> &'static str {
        match self {
            Language::Rust => "rs",
            Language::C => "c",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Safety {
    Safe,
    Unsafe,
}

impl Safety {
    pub fn is_safe(self) -> bool {
        matches!(self, Safety::Safe)
    }

    pub fn label(self) -> &'static str {
        match self {
            Safety::Safe => "safe",
            Safety::Unsafe => "unsafe",
        }
    }
}

/// Number of sequential branches. Always non-negative.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BranchCount(u32);

impl BranchCount {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for BranchCount {
    type Error = GenError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        if n < 0 {
            return Err(GenError::NegativeBranchCount(n));
        }
        u32::try_from(n)
            .map(BranchCount)
            .map_err(|_| GenError::BranchCountTooLarge(n))
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Sign {
    Plus,
    Minus,
}

/// One `if (c_i) r += / -= i` step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BranchSpec {
    /// 1-based position; also the magnitude.
    pub index: u32,
    pub sign: Sign,
}

impl BranchSpec {
    pub fn new(index: u32, safety: Safety) -> Self {
        // odd 1-based positions go negative in unsafe mode
        let sign = if safety.is_safe() || index % 2 == 0 {
            Sign::Plus
        } else {
            Sign::Minus
        };
        Self { index, sign }
    }

    pub fn var(&self) -> String {
        format!("c{}", self.index)
    }

    pub fn contribution(&self) -> i64 {
        match self.sign {
            Sign::Plus => i64::from(self.index),
            Sign::Minus => -i64::from(self.index),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GenerationRequest {
    pub language: Language,
    pub branch_count: BranchCount,
    pub safety: Safety,
}

impl GenerationRequest {
    pub fn new(language: Language, n: i64, safety: Safety) -> Result<Self, GenError> {
        Ok(Self {
            language,
            branch_count: BranchCount::try_from(n)?,
            safety,
        })
    }

    pub fn n(&self) -> u32 {
        self.branch_count.get()
    }

    pub fn branches(&self) -> impl Iterator<Item = BranchSpec> + '_ {
        (1..=self.n()).map(move |i| BranchSpec::new(i, self.safety))
    }

    /// `test_seq_br_{safe|unsafe}_{n}.{c|rs}`
    pub fn file_name(&self) -> String {
        format!(
            "test_seq_br_{}_{}.{}",
            self.safety.label(),
            self.n(),
            self.language.extension()
        )
    }

    /// Value the generated `test` function computes for one assignment.
    ///
    /// Missing inputs count as `false`.
    pub fn evaluate(&self, inputs: &[bool]) -> i64 {
        self.branches()
            .zip(inputs.iter().copied().chain(std::iter::repeat(false)))
            .filter(|(_, taken)| *taken)
            .map(|(b, _)| b.contribution())
            .sum()
    }
}
