//! # View Module
//!
//! Stateless derivations over a menu snapshot.
//!
//! Every function here is pure: the same snapshot and arguments always
//! produce the same result, and nothing is mutated.
//!
//! ## Rounding
//!
//! Averages are formatted with `PRICE_DECIMALS` places using Rust's float
//! formatting, which rounds the exact binary value and breaks exact ties
//! half-to-even.

use crate::primitives::PRICE_DECIMALS;
use crate::{Course, CourseFilter, MenuItem};
use serde::{Deserialize, Serialize};

/// Mean price of the items in `course`, unrounded.
///
/// Returns `None` when the snapshot holds no item of that course.
///
/// Computed as a running mean, so any set of finite prices yields a finite
/// result that lies between the cheapest and dearest item.
#[must_use]
#[allow(clippy::float_arithmetic)] // prices are fractional amounts
pub fn mean_price(snapshot: &[MenuItem], course: Course) -> Option<f64> {
    let (mean, count) = snapshot
        .iter()
        .filter(|item| item.course() == course)
        .fold((0.0_f64, 0_usize), |(mean, count), item| {
            let count = count + 1;
            (mean + (item.price() - mean) / count as f64, count)
        });

    (count > 0).then_some(mean)
}

/// Average price of the items in `course`, formatted to two decimals.
///
/// A course with no items averages `"0.00"`.
#[must_use]
pub fn average_price(snapshot: &[MenuItem], course: Course) -> String {
    format!(
        "{:.*}",
        PRICE_DECIMALS,
        mean_price(snapshot, course).unwrap_or(0.0)
    )
}

/// Project the snapshot onto a course selector.
///
/// `All` returns every item; a specific course keeps only matching items.
/// Relative order is preserved in both cases.
#[must_use]
pub fn filter_by_course(snapshot: &[MenuItem], selector: CourseFilter) -> Vec<MenuItem> {
    snapshot
        .iter()
        .filter(|item| selector.admits(item.course()))
        .cloned()
        .collect()
}

// =============================================================================
// OVERVIEW
// =============================================================================

/// Average price of one course, as shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAverage {
    pub course: Course,
    pub average: String,
}

/// Home-screen summary: item count and the average for every course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOverview {
    pub total_items: usize,
    pub averages: Vec<CourseAverage>,
}

/// Summarize a snapshot. Courses appear in `Course::ALL` order.
#[must_use]
pub fn overview(snapshot: &[MenuItem]) -> MenuOverview {
    MenuOverview {
        total_items: snapshot.len(),
        averages: Course::ALL
            .into_iter()
            .map(|course| CourseAverage {
                course,
                average: average_price(snapshot, course),
            })
            .collect(),
    }
}

// =============================================================================
// TESTS
// =============================================================================
