use crate::error::OptimiseError;
use core::fmt;
use std::str::FromStr;

/// The four composite scores a build is judged by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ScoreKind {
    Race = 0,
    Coin = 1,
    Drift = 2,
    Combat = 3,
}

impl ScoreKind {
    pub const COUNT: usize = 4;

    pub const ALL: [ScoreKind; ScoreKind::COUNT] = [
        ScoreKind::Race,
        ScoreKind::Coin,
        ScoreKind::Drift,
        ScoreKind::Combat,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ScoreKind::Race => "race",
            ScoreKind::Coin => "coin",
            ScoreKind::Drift => "drift",
            ScoreKind::Combat => "combat",
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoreKind {
    type Err = OptimiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| OptimiseError::UnknownScore(s.to_string()))
    }
}

/// One value per composite score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreSet {
    values: [f32; ScoreKind::COUNT],
}

impl ScoreSet {
    pub const fn zero() -> Self {
        Self {
            values: [0.0; ScoreKind::COUNT],
        }
    }

    pub const fn get(&self, kind: ScoreKind) -> f32 {
        self.values[kind.index()]
    }

    pub fn set(&mut self, kind: ScoreKind, value: f32) {
        self.values[kind.index()] = value;
    }

    pub fn map(&self, f: impl Fn(ScoreKind, f32) -> f32) -> Self {
        let mut out = Self::zero();
        for kind in ScoreKind::ALL {
            out.set(kind, f(kind, self.get(kind)));
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreKind, f32)> + '_ {
        ScoreKind::ALL.iter().map(|&kind| (kind, self.get(kind)))
    }
}
