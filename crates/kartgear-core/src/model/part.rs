use crate::model::stats::StatVector;

/// A single piece of equipment with its fixed stat vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    name: String,
    stats: StatVector,
}

impl Part {
    pub fn new(name: impl Into<String>, stats: StatVector) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &StatVector {
        &self.stats
    }
}
