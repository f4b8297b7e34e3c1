use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Image reference stored when a product is created without one.
pub const DEFAULT_PRODUCT_IMAGE: &str = "default-product.jpg";

/// Domain representation of a sellable product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Unit price; always greater than zero.
    pub price: f64,
    /// Units in stock; never negative.
    pub quantity: i32,
    /// Identifier of the category this product belongs to.
    pub category_id: i32,
    /// Image reference shown alongside the product.
    pub image: String,
    /// Flag indicating whether the product is active.
    pub active: bool,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// The subset of category fields resolved onto product reads.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CategorySummary {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// A product together with the resolved summary of its category.
#[derive(Debug, Serialize, Clone)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category: CategorySummary,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Unit price; validated to be greater than zero.
    pub price: f64,
    /// Units in stock.
    pub quantity: i32,
    /// Identifier of the category this product belongs to.
    pub category_id: i32,
    /// Image reference shown alongside the product.
    pub image: String,
    /// Whether the product starts out active.
    pub active: bool,
    /// Timestamp captured when the product payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied details and defaults.
    pub fn new(name: impl Into<String>, price: f64, category_id: i32) -> Self {
        let now = Local::now().naive_utc();
        Self {
            name: name.into(),
            description: None,
            price,
            quantity: 0,
            category_id,
            image: DEFAULT_PRODUCT_IMAGE.to_string(),
            active: true,
            updated_at: now,
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the initial stock quantity.
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Override the default image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Override the default active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Patch data applied when updating an existing product.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional description update.
    pub description: Option<String>,
    /// Optional price update.
    pub price: Option<f64>,
    /// Optional stock quantity update.
    pub quantity: Option<i32>,
    /// Optional category reassignment.
    pub category_id: Option<i32>,
    /// Optional image update.
    pub image: Option<String>,
    /// Optional active flag update.
    pub active: Option<bool>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            name: None,
            description: None,
            price: None,
            quantity: None,
            category_id: None,
            image: None,
            active: None,
            updated_at: Local::now().naive_utc(),
        }
    }

    /// Update the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the product description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Update the product price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Update the stock quantity.
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Move the product to another category.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Update the image reference.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Activate or deactivate the product.
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}

/// Query definition used to filter the product list.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional exact category filter.
    pub category_id: Option<i32>,
    /// Optional exact active-flag filter.
    pub active: Option<bool>,
    /// Optional case-insensitive substring applied to name or description.
    pub search: Option<String>,
}

impl ProductListQuery {
    /// Construct a query that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to products in the given category.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Filter the results by the active flag.
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}
