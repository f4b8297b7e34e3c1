use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Image reference stored when a category is created without one.
pub const DEFAULT_CATEGORY_IMAGE: &str = "default-category.jpg";

/// Domain representation of a product category.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category, unique across the catalog.
    pub name: String,
    /// Optional description that expands upon the category name.
    pub description: Option<String>,
    /// Image reference shown alongside the category.
    pub image: String,
    /// Flag indicating whether the category is active.
    pub active: bool,
    /// Timestamp for when the category record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the category record.
    pub updated_at: NaiveDateTime,
}

/// A category together with the products that reference it.
///
/// The product list is computed with an explicit query at read time; it is
/// never stored on the category record.
#[derive(Debug, Serialize, Clone)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<Product>,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub name: String,
    /// Optional description that expands upon the category name.
    pub description: Option<String>,
    /// Image reference shown alongside the category.
    pub image: String,
    /// Whether the category starts out active.
    pub active: bool,
    /// Timestamp captured when the category payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    /// Build a new category payload with the supplied name and defaults.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Local::now().naive_utc();
        Self {
            name: name.into(),
            description: None,
            image: DEFAULT_CATEGORY_IMAGE.to_string(),
            active: true,
            updated_at: now,
        }
    }

    /// Attach a descriptive text to the category payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Patch data applied when updating an existing category.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    /// Updated name for the category.
    pub name: Option<String>,
    /// Updated description for the category.
    pub description: Option<String>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateCategory {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateCategory {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Update the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the category description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
