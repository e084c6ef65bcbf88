//! # Menu Primitives
//!
//! Fixed constants for the menu core. These are compiled into the binary and
//! are immutable at runtime.

use crate::Course;

/// Number of decimal places used whenever a price or average is displayed.
pub const PRICE_DECIMALS: usize = 2;

/// Demonstration dishes for a guest-facing session.
///
/// Each entry is `(dish name, description, course, price)`. All entries
/// already satisfy the validation rules.
pub const DEMO_MENU: [(&str, &str, Course, f64); 3] = [
    (
        "Tomato Soup",
        "Fresh tomatoes, herbs, and cream",
        Course::Starter,
        45.0,
    ),
    (
        "Grilled Chicken",
        "Succulent chicken with herbs and spices",
        Course::Main,
        120.0,
    ),
    (
        "Chocolate Brownie",
        "Rich chocolate brownie with ice cream",
        Course::Dessert,
        55.0,
    ),
];
