pub mod catalog;
pub mod category;
pub mod inventory;
pub mod part;
pub mod score;
pub mod stat;
pub mod stats;

pub use catalog::Catalog;
pub use category::Category;
pub use inventory::{Inventory, Selection};
pub use part::Part;
pub use score::{ScoreKind, ScoreSet};
pub use stat::{Direction, Stat};
pub use stats::StatVector;
