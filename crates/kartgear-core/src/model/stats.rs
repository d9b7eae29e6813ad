use crate::model::stat::Stat;

/// Dense stat vector. Stats a part does not carry stay at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatVector {
    values: [f32; Stat::COUNT],
}

impl StatVector {
    pub const fn zero() -> Self {
        Self {
            values: [0.0; Stat::COUNT],
        }
    }

    pub fn from_pairs(pairs: &[(Stat, f32)]) -> Self {
        let mut vector = Self::zero();
        for &(stat, value) in pairs {
            vector.values[stat.index()] += value;
        }
        vector
    }

    pub const fn get(&self, stat: Stat) -> f32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, value: f32) {
        self.values[stat.index()] = value;
    }

    /// Elementwise accumulation; a build's vector is the sum of its parts.
    pub fn add(&mut self, other: &StatVector) {
        for (lhs, rhs) in self.values.iter_mut().zip(other.values.iter()) {
            *lhs += rhs;
        }
    }

    pub fn sum<'a>(vectors: impl IntoIterator<Item = &'a StatVector>) -> Self {
        let mut total = Self::zero();
        for vector in vectors {
            total.add(vector);
        }
        total
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, f32)> + '_ {
        Stat::ALL.iter().map(|&stat| (stat, self.get(stat)))
    }

    pub fn nonzero(&self) -> impl Iterator<Item = (Stat, f32)> + '_ {
        self.iter().filter(|&(_, value)| value != 0.0)
    }
}
