use crate::error::OptimiseError;
use core::fmt;
use std::str::FromStr;

/// Whether a larger value of a stat makes a build better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    /// Multiplier that turns any stat into a "more is better" term.
    pub const fn sign(self) -> f32 {
        match self {
            Direction::Higher => 1.0,
            Direction::Lower => -1.0,
        }
    }
}

/// Every raw stat a part can carry. Part data using other keys is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Stat {
    Speed = 0,
    StartBoost = 1,
    SlipStreamSpd = 2,
    SlowDownSpd = 3,
    StartCoins = 4,
    MaxCoins = 5,
    CoinBoostSpd = 6,
    CoinBoostTime = 7,
    DriftSteer = 8,
    Steer = 9,
    AirDriftTime = 10,
    UltCharge = 11,
    Daze = 12,
    SlipStreamRadius = 13,
    TrickSpd = 14,
    BoostPads = 15,
    MaxCoinsSpd = 16,
    SlipTime = 17,
    UltStart = 18,
    DriftRate = 19,
    T1 = 20,
    T2 = 21,
    T3 = 22,
}

impl Stat {
    pub const COUNT: usize = 23;

    pub const ALL: [Stat; Stat::COUNT] = [
        Stat::Speed,
        Stat::StartBoost,
        Stat::SlipStreamSpd,
        Stat::SlowDownSpd,
        Stat::StartCoins,
        Stat::MaxCoins,
        Stat::CoinBoostSpd,
        Stat::CoinBoostTime,
        Stat::DriftSteer,
        Stat::Steer,
        Stat::AirDriftTime,
        Stat::UltCharge,
        Stat::Daze,
        Stat::SlipStreamRadius,
        Stat::TrickSpd,
        Stat::BoostPads,
        Stat::MaxCoinsSpd,
        Stat::SlipTime,
        Stat::UltStart,
        Stat::DriftRate,
        Stat::T1,
        Stat::T2,
        Stat::T3,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Stat> {
        if index < Stat::COUNT {
            Some(Stat::ALL[index])
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Stat::Speed => "Speed",
            Stat::StartBoost => "StartBoost",
            Stat::SlipStreamSpd => "SlipStreamSpd",
            Stat::SlowDownSpd => "SlowDownSpd",
            Stat::StartCoins => "StartCoins",
            Stat::MaxCoins => "MaxCoins",
            Stat::CoinBoostSpd => "CoinBoostSpd",
            Stat::CoinBoostTime => "CoinBoostTime",
            Stat::DriftSteer => "DriftSteer",
            Stat::Steer => "Steer",
            Stat::AirDriftTime => "AirDriftTime",
            Stat::UltCharge => "UltCharge",
            Stat::Daze => "Daze",
            Stat::SlipStreamRadius => "SlipStreamRadius",
            Stat::TrickSpd => "TrickSpd",
            Stat::BoostPads => "BoostPads",
            Stat::MaxCoinsSpd => "MaxCoinsSpd",
            Stat::SlipTime => "SlipTime",
            Stat::UltStart => "UltStart",
            Stat::DriftRate => "DriftRate",
            Stat::T1 => "T1",
            Stat::T2 => "T2",
            Stat::T3 => "T3",
        }
    }

    /// Total direction table. Consulted by the objective evaluator; the
    /// composite score coefficients carry the same convention via their sign.
    pub const fn direction(self) -> Direction {
        match self {
            Stat::MaxCoins | Stat::Daze => Direction::Lower,
            _ => Direction::Higher,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stat {
    type Err = OptimiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .iter()
            .copied()
            .find(|stat| stat.name() == s)
            .ok_or_else(|| OptimiseError::UnknownStat(s.to_string()))
    }
}
