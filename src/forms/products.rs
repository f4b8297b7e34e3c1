use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::errors::{FieldError, collect_field_errors};
use crate::forms::trimmed;

const NAME_MAX_LEN: u64 = 100;
const DESCRIPTION_MAX_LEN: u64 = 500;

/// JSON body accepted when creating a product.
///
/// The `category` field carries the raw identifier as submitted; format and
/// existence checks happen in the service before conversion.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateProductForm {
    #[validate(length(max = NAME_MAX_LEN, message = "name cannot be longer than 100 characters"))]
    pub name: Option<String>,
    #[validate(length(
        max = DESCRIPTION_MAX_LEN,
        message = "description cannot be longer than 500 characters"
    ))]
    #[serde(default)]
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl CreateProductForm {
    /// Validates and trims the payload into a domain `NewProduct`.
    ///
    /// `category_id` is the already-resolved category; `None` means the
    /// request did not supply one, which is a validation failure.
    pub fn into_new_product(self, category_id: Option<i32>) -> Result<NewProduct, Vec<FieldError>> {
        let mut field_errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_field_errors(&errors),
        };

        let name = match trimmed(self.name.as_deref()) {
            Some(name) => name,
            None => {
                field_errors.push(FieldError::new("name", "name is required"));
                String::new()
            }
        };

        let price = match self.price {
            Some(price) if price > 0.0 => price,
            Some(_) => {
                field_errors.push(FieldError::new("price", "price must be greater than zero"));
                0.0
            }
            None => {
                field_errors.push(FieldError::new("price", "price is required"));
                0.0
            }
        };

        if let Some(quantity) = self.quantity {
            if quantity < 0 {
                field_errors.push(FieldError::new("quantity", "quantity cannot be negative"));
            }
        }

        let category_id = match category_id {
            Some(id) => id,
            None => {
                field_errors.push(FieldError::new("category", "category is required"));
                0
            }
        };

        if !field_errors.is_empty() {
            return Err(field_errors);
        }

        let mut new_product =
            NewProduct::new(name, price, category_id).with_quantity(self.quantity.unwrap_or(0));
        if let Some(description) = trimmed(self.description.as_deref()) {
            new_product = new_product.with_description(description);
        }
        if let Some(image) = trimmed(self.image.as_deref()) {
            new_product = new_product.with_image(image);
        }
        if let Some(active) = self.active {
            new_product = new_product.with_active(active);
        }

        Ok(new_product)
    }
}

/// JSON body accepted when updating a product; absent fields are left
/// unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductForm {
    #[validate(length(max = NAME_MAX_LEN, message = "name cannot be longer than 100 characters"))]
    pub name: Option<String>,
    #[validate(length(
        max = DESCRIPTION_MAX_LEN,
        message = "description cannot be longer than 500 characters"
    ))]
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub active: Option<bool>,
}

impl UpdateProductForm {
    /// Validates and trims the payload into a domain `UpdateProduct`.
    ///
    /// `category_id` is the already-resolved replacement category, when the
    /// request asked for one.
    pub fn into_update_product(
        self,
        category_id: Option<i32>,
    ) -> Result<UpdateProduct, Vec<FieldError>> {
        let mut field_errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_field_errors(&errors),
        };

        let mut update = UpdateProduct::new();

        if let Some(raw) = self.name.as_deref() {
            match trimmed(Some(raw)) {
                Some(name) => update = update.name(name),
                None => field_errors.push(FieldError::new("name", "name is required")),
            }
        }

        if let Some(price) = self.price {
            if price > 0.0 {
                update = update.price(price);
            } else {
                field_errors.push(FieldError::new("price", "price must be greater than zero"));
            }
        }

        if let Some(quantity) = self.quantity {
            if quantity >= 0 {
                update = update.quantity(quantity);
            } else {
                field_errors.push(FieldError::new("quantity", "quantity cannot be negative"));
            }
        }

        if let Some(category_id) = category_id {
            update = update.category(category_id);
        }

        if let Some(description) = trimmed(self.description.as_deref()) {
            update = update.description(description);
        }

        if let Some(image) = trimmed(self.image.as_deref()) {
            update = update.image(image);
        }

        if let Some(active) = self.active {
            update = update.active(active);
        }

        if !field_errors.is_empty() {
            return Err(field_errors);
        }

        Ok(update)
    }
}
