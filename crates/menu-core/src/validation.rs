//! # Validation Module
//!
//! The parse-then-validate gate between raw form input and the store.
//!
//! - Check required fields in a fixed order
//! - Parse free-text prices into numbers
//! - Report the first failed constraint by name
//! - Trim stored text

use crate::{Course, MenuCandidate, MenuItem, RawPrice, ValidationError};

/// The Validator turns a `MenuCandidate` into a `MenuItem`.
pub struct Validator;

impl Validator {
    /// Validate a candidate and build the item it describes.
    ///
    /// Checks, in order:
    /// 1. dish name non-empty after trimming
    /// 2. description non-empty after trimming
    /// 3. course selected and one of the closed set
    /// 4. price present
    /// 5. price numeric, finite and strictly positive
    pub fn validate(candidate: &MenuCandidate) -> Result<MenuItem, ValidationError> {
        let dish_name = candidate.dish_name.trim();
        if dish_name.is_empty() {
            return Err(ValidationError::EmptyDishName);
        }

        let description = candidate.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let course: Course = candidate.course.parse()?;
        let price = Self::parse_price(&candidate.price)?;

        Ok(MenuItem::from_validated(
            dish_name.to_string(),
            description.to_string(),
            course,
            price,
        ))
    }

    /// Parse a raw price into a finite, strictly positive number.
    ///
    /// Empty text is `MissingPrice`; text that is not a finite number is
    /// `InvalidPrice`; zero and negatives are `NonPositivePrice`.
    pub fn parse_price(raw: &RawPrice) -> Result<f64, ValidationError> {
        let value = match raw {
            RawPrice::Number(n) => *n,
            RawPrice::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::MissingPrice);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| ValidationError::InvalidPrice(trimmed.to_string()))?
            }
        };

        if !value.is_finite() {
            return Err(ValidationError::InvalidPrice(value.to_string()));
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositivePrice(value));
        }
        Ok(value)
    }
}

// =============================================================================
// TESTS
// =============================================================================
