use crate::error::OptimiseError;
use core::fmt;
use std::str::FromStr;

/// Equipment slots. A build takes one part from each fixed category and an
/// unordered pair of distinct trinkets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    Engine = 0,
    Exhaust = 1,
    Suspension = 2,
    Gearbox = 3,
    Trinket = 4,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Engine,
        Category::Exhaust,
        Category::Suspension,
        Category::Gearbox,
        Category::Trinket,
    ];

    /// Categories contributing exactly one part to a build.
    pub const FIXED: [Category; 4] = [
        Category::Engine,
        Category::Exhaust,
        Category::Suspension,
        Category::Gearbox,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Engine => "Engine",
            Category::Exhaust => "Exhaust",
            Category::Suspension => "Suspension",
            Category::Gearbox => "Gearbox",
            Category::Trinket => "Trinket",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = OptimiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| OptimiseError::UnknownCategory(s.to_string()))
    }
}
