use crate::error::{OptimiseError, Result};
use crate::model::catalog::Catalog;
use crate::model::category::Category;
use crate::model::part::Part;

/// The parts the player owns, by name. Immutable for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    names: [Vec<String>; Category::COUNT],
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// An inventory owning every part in the catalog.
    pub fn full(catalog: &Catalog) -> Self {
        let mut inventory = Self::new();
        for category in Category::ALL {
            for part in catalog.parts(category) {
                inventory.add(category, part.name());
            }
        }
        inventory
    }

    pub fn add(&mut self, category: Category, name: impl Into<String>) {
        self.names[category.index()].push(name.into());
    }

    pub fn owned(&self, category: Category) -> &[String] {
        &self.names[category.index()]
    }

    /// Resolve every owned name against the catalog. A name the catalog does
    /// not know is fatal for the run.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<Selection<'a>> {
        let mut selection = Selection::default();
        for category in Category::ALL {
            for name in self.owned(category) {
                let part = catalog.find(category, name).ok_or_else(|| {
                    OptimiseError::UnknownPart {
                        category,
                        name: name.clone(),
                    }
                })?;
                selection.parts[category.index()].push(part);
            }
        }
        Ok(selection)
    }
}

/// Catalog-backed view of the parts available to one optimisation run.
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    parts: [Vec<&'a Part>; Category::COUNT],
}

impl<'a> Selection<'a> {
    /// Every part in the catalog; the population for catalog-wide ranges.
    pub fn of_catalog(catalog: &'a Catalog) -> Self {
        let mut selection = Self::default();
        for category in Category::ALL {
            selection.parts[category.index()] = catalog.parts(category).iter().collect();
        }
        selection
    }

    pub fn parts(&self, category: Category) -> &[&'a Part] {
        &self.parts[category.index()]
    }

    /// A build needs one part per fixed category and two distinct trinkets.
    /// An unviable selection is a valid zero-result condition, not an error.
    pub fn is_viable(&self) -> bool {
        Category::FIXED
            .iter()
            .all(|&category| !self.parts(category).is_empty())
            && self.parts(Category::Trinket).len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::{Inventory, Selection};
    use crate::error::OptimiseError;
    use crate::model::catalog::Catalog;
    use crate::model::category::Category;

    #[test]
    fn resolves_owned_parts() {
        let catalog = Catalog::builtin();
        let mut inventory = Inventory::new();
        inventory.add(Category::Engine, "Basic Engine");
        inventory.add(Category::Trinket, "Voodoo");
        let selection = inventory.resolve(&catalog).expect("known parts");
        assert_eq!(selection.parts(Category::Engine).len(), 1);
        assert_eq!(selection.parts(Category::Trinket)[0].name(), "Voodoo");
        assert!(!selection.is_viable());
    }

    #[test]
    fn unknown_part_is_fatal() {
        let catalog = Catalog::builtin();
        let mut inventory = Inventory::new();
        inventory.add(Category::Gearbox, "Imaginary Gearbox");
        let err = inventory.resolve(&catalog).unwrap_err();
        assert_eq!(
            err,
            OptimiseError::UnknownPart {
                category: Category::Gearbox,
                name: "Imaginary Gearbox".to_string(),
            }
        );
    }

    #[test]
    fn full_inventory_is_viable() {
        let catalog = Catalog::builtin();
        let selection = Inventory::full(&catalog).resolve(&catalog).expect("resolves");
        assert!(selection.is_viable());
        let catalog_view = Selection::of_catalog(&catalog);
        assert_eq!(
            catalog_view.parts(Category::Trinket).len(),
            selection.parts(Category::Trinket).len()
        );
    }
}
