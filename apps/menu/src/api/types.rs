//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use menu_core::{
    Course, CourseFilter, MenuCandidate, MenuError, MenuItem, MenuOverview, RawPrice,
};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// MENU ITEMS
// =============================================================================

/// One dish with its current position in the menu.
///
/// `index` is only valid until the next add or remove.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemJson {
    pub index: usize,
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
    pub display_price: String,
}

impl MenuItemJson {
    pub fn new(index: usize, item: &MenuItem) -> Self {
        Self {
            index,
            dish_name: item.dish_name().to_string(),
            description: item.description().to_string(),
            course: item.course(),
            price: item.price(),
            display_price: item.formatted_price(),
        }
    }
}

/// A list of dishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuResponse {
    pub success: bool,
    pub total: usize,
    pub items: Vec<MenuItemJson>,
}

impl MenuResponse {
    /// Every item of a snapshot, indexed by position.
    pub fn from_snapshot(snapshot: &[MenuItem]) -> Self {
        let items: Vec<MenuItemJson> = snapshot
            .iter()
            .enumerate()
            .map(|(i, item)| MenuItemJson::new(i, item))
            .collect();
        Self {
            success: true,
            total: items.len(),
            items,
        }
    }

    /// The items of a snapshot admitted by `selector`.
    ///
    /// Indices refer to positions in the full snapshot, so a filtered item
    /// can still be removed by its index.
    pub fn filtered(snapshot: &[MenuItem], selector: CourseFilter) -> Self {
        let items: Vec<MenuItemJson> = snapshot
            .iter()
            .enumerate()
            .filter(|(_, item)| selector.admits(item.course()))
            .map(|(i, item)| MenuItemJson::new(i, item))
            .collect();
        Self {
            success: true,
            total: items.len(),
            items,
        }
    }
}

// =============================================================================
// ADD REQUEST
// =============================================================================

/// Add-dish request. `price` may be a JSON number or a string.
///
/// An absent field and an explicit `null` both read as empty, so the core
/// reports them as missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dish_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub course: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price: RawPrice,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AddItemRequest {
    /// Convert to the core's raw candidate. No validation happens here.
    pub fn to_candidate(&self) -> MenuCandidate {
        MenuCandidate::new(
            self.dish_name.clone(),
            self.description.clone(),
            self.course.clone(),
            self.price.clone(),
        )
    }
}

// =============================================================================
// REMOVE RESPONSE
// =============================================================================

/// Remove-dish response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveResponse {
    pub success: bool,
    pub removed: MenuItemJson,
    pub total: usize,
}

// =============================================================================
// AVERAGE / OVERVIEW
// =============================================================================

/// Course query parameter for filter and average endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseQuery {
    pub course: Option<String>,
}

/// Average price of one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageResponse {
    pub success: bool,
    pub course: Course,
    pub item_count: usize,
    pub average: String,
}

/// Home-screen overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub success: bool,
    #[serde(flatten)]
    pub overview: MenuOverview,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Machine-readable kind: `validation_error`, `index_out_of_range` or
    /// `rate_limited`.
    pub kind: String,
    /// The failing input field, for validation errors.
    pub field: Option<String>,
    /// True when the field was omitted rather than malformed.
    #[serde(default)]
    pub missing: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn from_menu_error(e: &MenuError) -> Self {
        match e {
            MenuError::Validation(v) => Self {
                success: false,
                kind: "validation_error".to_string(),
                field: Some(v.field().to_string()),
                missing: v.is_missing(),
                error: v.to_string(),
            },
            MenuError::IndexOutOfRange { .. } => Self {
                success: false,
                kind: "index_out_of_range".to_string(),
                field: None,
                missing: false,
                error: e.to_string(),
            },
        }
    }
    /// The global request budget is spent.
    pub fn rate_limited() -> Self {
        Self {
            success: false,
            kind: "rate_limited".to_string(),
            field: None,
            missing: false,
            error: "Too Many Requests".to_string(),
        }
    }

    /// A request body that could not be read as the expected JSON shape.
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            kind: "validation_error".to_string(),
            field: None,
            missing: false,
            error: detail.into(),
        }
    }
}
