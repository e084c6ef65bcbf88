//! # menu-core
//!
//! The in-memory menu engine for Chef's Menu - THE LOGIC.
//!
//! This crate owns the session's ordered collection of dishes and the
//! derived views computed from it. Everything outside (screens, forms,
//! HTTP, prompts) is a presentation collaborator that calls in through the
//! operations re-exported here.
//!
//! ## Operations
//!
//! - [`MenuStore::add`] - validate a raw candidate and append it
//! - [`MenuStore::remove`] - delete the item at a position
//! - [`MenuStore::snapshot`] - read the current contents
//! - [`view::average_price`] - per-course average, two decimals
//! - [`view::filter_by_course`] - stable course projection
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no I/O, no logging
//! - Single writer: callers serialize access to the one store
//! - Errors are values: nothing here panics on user input

// =============================================================================
// MODULES
// =============================================================================

pub mod primitives;
pub mod store;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use store::MenuStore;
pub use types::{
    Course, CourseFilter, MenuCandidate, MenuError, MenuItem, RawPrice, ValidationError,
};
pub use validation::Validator;
pub use view::{
    CourseAverage, MenuOverview, average_price, filter_by_course, mean_price, overview,
};
