use serde::Deserialize;
use validator::Validate;

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::errors::{FieldError, collect_field_errors};
use crate::forms::trimmed;

const NAME_MAX_LEN: u64 = 50;
const DESCRIPTION_MAX_LEN: u64 = 200;

/// JSON body accepted when creating a category.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateCategoryForm {
    /// Name of the category; required and unique.
    #[validate(length(max = NAME_MAX_LEN, message = "name cannot be longer than 50 characters"))]
    pub name: Option<String>,
    /// Optional description for the category.
    #[validate(length(
        max = DESCRIPTION_MAX_LEN,
        message = "description cannot be longer than 200 characters"
    ))]
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateCategoryForm {
    /// Validates and trims the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> Result<NewCategory, Vec<FieldError>> {
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

        if !field_errors.is_empty() {
            return Err(field_errors);
        }

        let mut new_category = NewCategory::new(name);
        if let Some(description) = trimmed(self.description.as_deref()) {
            new_category = new_category.with_description(description);
        }

        Ok(new_category)
    }
}

/// JSON body accepted when updating a category; absent fields are left
/// unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCategoryForm {
    #[validate(length(max = NAME_MAX_LEN, message = "name cannot be longer than 50 characters"))]
    pub name: Option<String>,
    #[validate(length(
        max = DESCRIPTION_MAX_LEN,
        message = "description cannot be longer than 200 characters"
    ))]
    pub description: Option<String>,
}

impl UpdateCategoryForm {
    /// Validates and trims the payload into a domain `UpdateCategory`.
    pub fn into_update_category(self) -> Result<UpdateCategory, Vec<FieldError>> {
        let mut field_errors = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_field_errors(&errors),
        };

        let mut update = UpdateCategory::new();

        if let Some(raw) = self.name.as_deref() {
            match trimmed(Some(raw)) {
                Some(name) => update = update.name(name),
                None => field_errors.push(FieldError::new("name", "name is required")),
            }
        }

        if let Some(description) = trimmed(self.description.as_deref()) {
            update = update.description(description);
        }

        if !field_errors.is_empty() {
            return Err(field_errors);
        }

        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::DEFAULT_CATEGORY_IMAGE;

    #[test]
    fn create_form_trims_and_applies_defaults() {
        let form = CreateCategoryForm {
            name: Some("  Frutas  ".to_string()),
            description: Some(" frutas frescas ".to_string()),
        };

        let new_category = form
            .into_new_category()
            .expect("expected conversion to succeed");

        assert_eq!(new_category.name, "Frutas");
        assert_eq!(new_category.description.as_deref(), Some("frutas frescas"));
        assert_eq!(new_category.image, DEFAULT_CATEGORY_IMAGE);
        assert!(new_category.active);
    }

    #[test]
    fn create_form_requires_a_name() {
        let form = CreateCategoryForm {
            name: Some("   ".to_string()),
            description: None,
        };

        let errors = form.into_new_category().expect_err("expected failure");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "name is required");
    }

    #[test]
    fn create_form_rejects_long_names() {
        let form = CreateCategoryForm {
            name: Some("x".repeat(51)),
            description: None,
        };

        let errors = form.into_new_category().expect_err("expected failure");

        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "name cannot be longer than 50 characters");
    }

    #[test]
    fn create_form_rejects_long_descriptions() {
        let form = CreateCategoryForm {
            name: Some("Frutas".to_string()),
            description: Some("x".repeat(201)),
        };

        let errors = form.into_new_category().expect_err("expected failure");

        assert_eq!(errors[0].field, "description");
    }

    #[test]
    fn update_form_keeps_absent_fields_unchanged() {
        let form = UpdateCategoryForm {
            name: None,
            description: Some(" novas frutas ".to_string()),
        };

        let update = form
            .into_update_category()
            .expect("expected conversion to succeed");

        assert!(update.name.is_none());
        assert_eq!(update.description.as_deref(), Some("novas frutas"));
    }

    #[test]
    fn update_form_rejects_blank_name() {
        let form = UpdateCategoryForm {
            name: Some("  ".to_string()),
            description: None,
        };

        let errors = form.into_update_category().expect_err("expected failure");

        assert_eq!(errors[0].message, "name is required");
    }
}
