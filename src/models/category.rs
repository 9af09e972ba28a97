//! Expense category registry
//!
//! The set of categories is fixed at compile time. Its order is part of the
//! contract: menus number categories from 1 in this order, and reports list
//! them in this order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SpentSmartError, SpentSmartResult};

/// A spending category
///
/// Variant order matches the registry order, so the derived `Ord` sorts
/// categories the way they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Entertainment,
    Bills,
    Transport,
    Others,
}

impl Category {
    /// Every category, in registry order
    pub const ALL: [Category; 5] = [
        Category::Groceries,
        Category::Entertainment,
        Category::Bills,
        Category::Transport,
        Category::Others,
    ];

    /// Number of registered categories
    pub const COUNT: usize = Self::ALL.len();

    /// The registry as a slice
    pub fn categories() -> &'static [Category] {
        &Self::ALL
    }

    /// Display name, identical to the persisted name
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Transport => "Transport",
            Category::Others => "Others",
        }
    }

    /// Check whether a name belongs to the registry (exact match)
    pub fn is_valid(name: &str) -> bool {
        Self::ALL.iter().any(|c| c.name() == name)
    }

    /// Look up a category by its 1-based menu number
    pub fn by_index(index: usize) -> SpentSmartResult<Category> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
            .ok_or(SpentSmartError::InvalidCategoryIndex {
                index,
                count: Self::COUNT,
            })
    }

    /// The 1-based menu number of this category
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let names: Vec<_> = Category::categories().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["Groceries", "Entertainment", "Bills", "Transport", "Others"]
        );
    }

    #[test]
    fn test_by_index_is_one_based() {
        assert_eq!(Category::by_index(1).unwrap(), Category::Groceries);
        assert_eq!(Category::by_index(5).unwrap(), Category::Others);
        assert_eq!(Category::Transport.index(), 4);
    }

    #[test]
    fn test_by_index_out_of_range() {
        for index in [0, 6, 100] {
            let err = Category::by_index(index).unwrap_err();
            assert!(matches!(
                err,
                SpentSmartError::InvalidCategoryIndex { count: 5, .. }
            ));
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(Category::is_valid("Bills"));
        assert!(!Category::is_valid("bills"));
        assert!(!Category::is_valid("Rent"));
    }

    #[test]
    fn test_serde_uses_registry_names() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");
        assert!(serde_json::from_str::<Category>("\"Rent\"").is_err());
    }
}
