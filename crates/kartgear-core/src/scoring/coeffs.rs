use crate::model::score::ScoreKind;
use crate::model::stat::Stat;

// Coefficient sign is the sole "higher/lower is better" mechanism inside the
// composite scores; it agrees with Stat::direction for every entry.

pub const RACE_COEFFS: &[(Stat, f32)] = &[
    (Stat::Speed, 2.840_731),
    (Stat::SlipStreamSpd, 0.626_631_84),
    (Stat::StartBoost, 0.426_109_65),
    (Stat::SlowDownSpd, 0.106_527_41),
];

pub const COIN_COEFFS: &[(Stat, f32)] = &[
    (Stat::CoinBoostTime, 2.376_095_1),
    (Stat::StartCoins, 0.807_872_3),
    (Stat::CoinBoostSpd, 0.448_817_94),
    (Stat::MaxCoins, -0.367_214_68),
];

pub const DRIFT_COEFFS: &[(Stat, f32)] = &[
    (Stat::AirDriftTime, 2.518_369),
    (Stat::Steer, 0.256_105_34),
    (Stat::DriftSteer, 0.225_525_6),
];

pub const COMBAT_COEFFS: &[(Stat, f32)] = &[
    (Stat::UltCharge, 1.770_491_8),
    (Stat::SlipStreamRadius, 0.737_704_9),
    (Stat::Daze, -0.491_803_28),
];

pub const fn coeffs_for(kind: ScoreKind) -> &'static [(Stat, f32)] {
    match kind {
        ScoreKind::Race => RACE_COEFFS,
        ScoreKind::Coin => COIN_COEFFS,
        ScoreKind::Drift => DRIFT_COEFFS,
        ScoreKind::Combat => COMBAT_COEFFS,
    }
}
