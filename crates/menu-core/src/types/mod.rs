//! # Core Type Definitions
//!
//! This module contains all core types for the menu substrate:
//! - Course categories (`Course`, `CourseFilter`)
//! - Stored records (`MenuItem`)
//! - Raw, unvalidated input (`MenuCandidate`, `RawPrice`)
//! - Error types (`MenuError`, `ValidationError`)
//!
//! ## Construction Guarantees
//!
//! A `MenuItem` can only be produced by the validation gate, so every item
//! held by a `MenuStore` satisfies all field constraints.

use crate::primitives::PRICE_DECIMALS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// COURSE
// =============================================================================

/// One of the three fixed menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Course {
    Starter,
    Main,
    Dessert,
}

impl Course {
    /// Every course, in menu order.
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    /// Get the course name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Main => "Main",
            Self::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Course {
    type Err = ValidationError;

    /// Parse a course from its name, ignoring case and surrounding whitespace.
    ///
    /// An empty selection is `MissingCourse`; anything else outside the
    /// closed set is `UnknownCourse`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingCourse);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownCourse(trimmed.to_string()))
    }
}

// =============================================================================
// COURSE FILTER
// =============================================================================

/// Guest-facing filter selector: every course, or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    /// Check whether an item of the given course passes this filter.
    #[must_use]
    pub fn admits(self, course: Course) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == course,
        }
    }
}

impl From<Course> for CourseFilter {
    fn from(course: Course) -> Self {
        Self::Only(course)
    }
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(course) => course.fmt(f),
        }
    }
}

impl FromStr for CourseFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Course>().map(Self::Only)
    }
}

impl Serialize for CourseFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CourseFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// MENU ITEM
// =============================================================================

/// A single dish on the menu.
///
/// Fields are private: the only way to obtain a `MenuItem` is through
/// `Validator::validate` (or the fixed demonstration set), which
/// guarantees trimmed non-empty text and a finite, strictly positive price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    dish_name: String,
    description: String,
    course: Course,
    price: f64,
}

impl MenuItem {
    /// Assemble an item from already-validated parts.
    pub(crate) fn from_validated(
        dish_name: String,
        description: String,
        course: Course,
        price: f64,
    ) -> Self {
        Self {
            dish_name,
            description,
            course,
            price,
        }
    }

    #[must_use]
    pub fn dish_name(&self) -> &str {
        &self.dish_name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn course(&self) -> Course {
        self.course
    }

    /// The stored price, at full precision.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// The price rounded for display, e.g. `"45.00"`.
    #[must_use]
    pub fn formatted_price(&self) -> String {
        format!("{:.*}", PRICE_DECIMALS, self.price)
    }
}

// =============================================================================
// CANDIDATE (raw input)
// =============================================================================

/// A price as it arrives from a form: already numeric, or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl Default for RawPrice {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<f64> for RawPrice {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawPrice {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawPrice {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Unvalidated input for one dish, as collected by a form.
///
/// An empty `course` string means "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCandidate {
    #[serde(default)]
    pub dish_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub price: RawPrice,
}

impl MenuCandidate {
    /// Create a new candidate from raw field values.
    #[must_use]
    pub fn new(
        dish_name: impl Into<String>,
        description: impl Into<String>,
        course: impl Into<String>,
        price: impl Into<RawPrice>,
    ) -> Self {
        Self {
            dish_name: dish_name.into(),
            description: description.into(),
            course: course.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// A rejected candidate. The variant names the constraint that failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Dish name is required")]
    EmptyDishName,

    #[error("Description is required")]
    EmptyDescription,

    #[error("Course is required")]
    MissingCourse,

    #[error("Unknown course: {0:?}")]
    UnknownCourse(String),

    #[error("Price is required")]
    MissingPrice,

    #[error("Price must be a valid number: {0:?}")]
    InvalidPrice(String),

    #[error("Price must be a positive number, got {0}")]
    NonPositivePrice(f64),
}

impl ValidationError {
    /// Name of the input field that failed.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyDishName => "dish_name",
            Self::EmptyDescription => "description",
            Self::MissingCourse | Self::UnknownCourse(_) => "course",
            Self::MissingPrice | Self::InvalidPrice(_) | Self::NonPositivePrice(_) => "price",
        }
    }

    /// True when the field was omitted rather than malformed.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::EmptyDishName | Self::EmptyDescription | Self::MissingCourse | Self::MissingPrice
        )
    }
}

/// Errors that can occur in the menu core.
///
/// Both kinds are user-correctable: the store is left unchanged and the
/// caller re-prompts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    /// The candidate failed validation in `MenuStore::add`.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// `MenuStore::remove` was given a stale or invalid position.
    #[error("Index {index} out of range for menu of {len} items")]
    IndexOutOfRange { index: i64, len: usize },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_parses_case_insensitively() {
        assert_eq!("starter".parse::<Course>(), Ok(Course::Starter));
        assert_eq!("  MAIN ".parse::<Course>(), Ok(Course::Main));
        assert_eq!("Dessert".parse::<Course>(), Ok(Course::Dessert));
    }

    #[test]
    fn course_empty_selection_is_missing() {
        assert_eq!("".parse::<Course>(), Err(ValidationError::MissingCourse));
        assert_eq!("   ".parse::<Course>(), Err(ValidationError::MissingCourse));
    }

    #[test]
    fn course_outside_closed_set_is_unknown() {
        assert_eq!(
            "Soup".parse::<Course>(),
            Err(ValidationError::UnknownCourse("Soup".to_string()))
        );
    }

    #[test]
    fn course_filter_parses_all_and_courses() {
        assert_eq!("All".parse::<CourseFilter>(), Ok(CourseFilter::All));
        assert_eq!("all".parse::<CourseFilter>(), Ok(CourseFilter::All));
        assert_eq!(
            "Main".parse::<CourseFilter>(),
            Ok(CourseFilter::Only(Course::Main))
        );
        assert!("Brunch".parse::<CourseFilter>().is_err());
    }

    #[test]
    fn course_filter_admits() {
        assert!(CourseFilter::All.admits(Course::Dessert));
        assert!(CourseFilter::Only(Course::Main).admits(Course::Main));
        assert!(!CourseFilter::Only(Course::Main).admits(Course::Starter));
    }

    #[test]
    fn validation_error_fields() {
        assert_eq!(ValidationError::EmptyDishName.field(), "dish_name");
        assert_eq!(ValidationError::MissingCourse.field(), "course");
        assert_eq!(ValidationError::InvalidPrice("x".into()).field(), "price");
    }

    #[test]
    fn missing_and_malformed_price_are_distinct() {
        assert!(ValidationError::MissingPrice.is_missing());
        assert!(!ValidationError::InvalidPrice("abc".into()).is_missing());
        assert!(!ValidationError::NonPositivePrice(-1.0).is_missing());
    }

    #[test]
    fn formatted_price_has_two_decimals() {
        let item = MenuItem::from_validated("Soup".into(), "Hot".into(), Course::Starter, 45.0);
        assert_eq!(item.formatted_price(), "45.00");

        let item = MenuItem::from_validated("Tea".into(), "Hot".into(), Course::Dessert, 12.5);
        assert_eq!(item.formatted_price(), "12.50");
    }
}
