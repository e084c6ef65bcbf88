//! # Store Module
//!
//! The ordered, mutable collection of menu items for one session.
//!
//! - Insertion order is preserved; there is no sort key
//! - Items are identified only by their current position
//! - Mutation happens only through `add` and `remove`
//! - Nothing is persisted; the store lives as long as the session

use crate::primitives::DEMO_MENU;
use crate::validation::Validator;
use crate::{MenuCandidate, MenuError, MenuItem};

/// The session's menu.
///
/// Positions handed out by `snapshot` are only valid until the next
/// mutation; callers must not cache them across `add` or `remove`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with the demonstration dishes.
    #[must_use]
    pub fn seeded() -> Self {
        let items = DEMO_MENU
            .iter()
            .map(|&(name, description, course, price)| {
                MenuItem::from_validated(name.to_string(), description.to_string(), course, price)
            })
            .collect();
        Self { items }
    }

    /// Validate a candidate and append it to the end of the menu.
    ///
    /// On failure the store is unchanged. Identical dishes may coexist.
    pub fn add(&mut self, candidate: &MenuCandidate) -> Result<&[MenuItem], MenuError> {
        let item = Validator::validate(candidate)?;
        self.items.push(item);
        Ok(&self.items)
    }

    /// Remove the item at a zero-based position and return it.
    ///
    /// Later items shift down by one. Any position outside `0..len`,
    /// negatives included, fails with `IndexOutOfRange` and leaves the store
    /// unchanged.
    pub fn remove(&mut self, index: i64) -> Result<MenuItem, MenuError> {
        let len = self.items.len();
        match usize::try_from(index) {
            Ok(position) if position < len => Ok(self.items.remove(position)),
            _ => Err(MenuError::IndexOutOfRange { index, len }),
        }
    }

    /// Read-only view of the current contents, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[MenuItem] {
        &self.items
    }

    /// Get the item at a zero-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
