use crate::domain::category::{Category, CategoryWithProducts};
use crate::domain::product::ProductListQuery;
use crate::errors::{ApiError, ApiResult};
use crate::forms::categories::{CreateCategoryForm, UpdateCategoryForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{CategoryReader, CategoryWriter, ProductReader};

/// Loads all categories, name ascending.
pub fn list_categories<R>(repo: &R) -> ApiResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    Ok(repo.list_categories()?)
}

/// Loads one category together with the products that reference it.
pub fn get_category<R>(repo: &R, category_id: i32) -> ApiResult<CategoryWithProducts>
where
    R: CategoryReader + ProductReader + ?Sized,
{
    let category = repo
        .get_category_by_id(category_id)?
        .ok_or_else(|| ApiError::not_found("category not found"))?;

    let products = repo
        .list_products(ProductListQuery::new().category(category.id))?
        .into_iter()
        .map(|item| item.product)
        .collect();

    Ok(CategoryWithProducts { category, products })
}

/// Creates a new category.
pub fn create_category<R>(repo: &R, form: CreateCategoryForm) -> ApiResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = form.into_new_category().map_err(ApiError::validation)?;

    match repo.create_category(&new_category) {
        Ok(category) => Ok(category),
        Err(RepositoryError::Conflict { .. }) => Err(ApiError::bad_request(
            "a category with this name already exists",
        )),
        Err(err) => Err(err.into()),
    }
}

/// Applies a partial update to an existing category.
pub fn modify_category<R>(
    repo: &R,
    category_id: i32,
    form: UpdateCategoryForm,
) -> ApiResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let update = form.into_update_category().map_err(ApiError::validation)?;

    match repo.update_category(category_id, &update) {
        Ok(category) => Ok(category),
        Err(RepositoryError::NotFound) => Err(ApiError::not_found("category not found")),
        Err(RepositoryError::Conflict { .. }) => Err(ApiError::bad_request(
            "a category with this name already exists",
        )),
        Err(err) => Err(err.into()),
    }
}

/// Deletes a category, refusing while products still reference it.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ApiResult<()>
where
    R: CategoryReader + ProductReader + CategoryWriter + ?Sized,
{
    if repo.get_category_by_id(category_id)?.is_none() {
        return Err(ApiError::not_found("category not found"));
    }

    if repo.count_products_in_category(category_id)? > 0 {
        return Err(ApiError::bad_request(
            "cannot delete a category with associated products",
        ));
    }

    match repo.delete_category(category_id) {
        Ok(()) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ApiError::not_found("category not found")),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::category::DEFAULT_CATEGORY_IMAGE;
    use crate::repository::mock::MockCatalogRepository;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: None,
            image: DEFAULT_CATEGORY_IMAGE.to_string(),
            active: true,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    #[test]
    fn list_categories_returns_whatever_the_store_holds() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_list_categories()
            .times(1)
            .returning(|| Ok(vec![sample_category(1, "Frutas")]));

        let categories = list_categories(&repo).expect("expected success");

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Frutas");
    }

    #[test]
    fn get_category_includes_its_products() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(Some(sample_category(3, "Frutas"))));
        repo.expect_list_products().times(1).returning(|query| {
            assert_eq!(query.category_id, Some(3));
            assert!(query.active.is_none());
            Ok(Vec::new())
        });

        let data = get_category(&repo, 3).expect("expected success");

        assert_eq!(data.category.id, 3);
        assert!(data.products.is_empty());
    }

    #[test]
    fn get_category_reports_missing_ids() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_category_by_id().returning(|_| Ok(None));

        let err = get_category(&repo, 99).expect_err("expected failure");

        assert!(matches!(err, ApiError::NotFound(message) if message == "category not found"));
    }

    #[test]
    fn create_category_persists_the_trimmed_payload() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_create_category()
            .times(1)
            .withf(|new_category| {
                assert_eq!(new_category.name, "Frutas");
                assert!(new_category.active);
                true
            })
            .returning(|_| Ok(sample_category(1, "Frutas")));

        let form = CreateCategoryForm {
            name: Some("  Frutas  ".to_string()),
            description: None,
        };

        let created = create_category(&repo, form).expect("expected success");

        assert_eq!(created.id, 1);
    }

    #[test]
    fn create_category_rejects_invalid_payloads_before_the_store() {
        let repo = MockCatalogRepository::new();

        let form = CreateCategoryForm {
            name: Some("x".repeat(51)),
            description: None,
        };

        let err = create_category(&repo, form).expect_err("expected failure");

        assert!(matches!(err, ApiError::Validation(errors) if errors[0].field == "name"));
    }

    #[test]
    fn create_category_maps_conflicts_to_bad_request() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_create_category().returning(|_| {
            Err(RepositoryError::Conflict {
                field: "name".to_string(),
            })
        });

        let form = CreateCategoryForm {
            name: Some("Frutas".to_string()),
            description: None,
        };

        let err = create_category(&repo, form).expect_err("expected failure");

        assert!(matches!(
            err,
            ApiError::BadRequest(message) if message == "a category with this name already exists"
        ));
    }

    #[test]
    fn modify_category_reports_missing_ids() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_update_category()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let form = UpdateCategoryForm {
            name: Some("Verduras".to_string()),
            description: None,
        };

        let err = modify_category(&repo, 42, form).expect_err("expected failure");

        assert!(matches!(err, ApiError::NotFound(message) if message == "category not found"));
    }

    #[test]
    fn modify_category_applies_the_patch() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_update_category()
            .times(1)
            .withf(|category_id, update| {
                assert_eq!(*category_id, 2);
                assert_eq!(update.name.as_deref(), Some("Verduras"));
                assert!(update.description.is_none());
                true
            })
            .returning(|_, _| Ok(sample_category(2, "Verduras")));

        let form = UpdateCategoryForm {
            name: Some(" Verduras ".to_string()),
            description: None,
        };

        let updated = modify_category(&repo, 2, form).expect("expected success");

        assert_eq!(updated.name, "Verduras");
    }

    #[test]
    fn remove_category_refuses_while_products_reference_it() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_category_by_id()
            .returning(|_| Ok(Some(sample_category(5, "Frutas"))));
        repo.expect_count_products_in_category()
            .times(1)
            .returning(|_| Ok(2));

        let err = remove_category(&repo, 5).expect_err("expected failure");

        assert!(matches!(
            err,
            ApiError::BadRequest(message)
                if message == "cannot delete a category with associated products"
        ));
    }

    #[test]
    fn remove_category_deletes_empty_categories() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_category_by_id()
            .returning(|_| Ok(Some(sample_category(5, "Frutas"))));
        repo.expect_count_products_in_category().returning(|_| Ok(0));
        repo.expect_delete_category()
            .times(1)
            .withf(|category_id| *category_id == 5)
            .returning(|_| Ok(()));

        assert!(remove_category(&repo, 5).is_ok());
    }

    #[test]
    fn remove_category_reports_missing_ids() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_get_category_by_id().returning(|_| Ok(None));

        let err = remove_category(&repo, 99).expect_err("expected failure");

        assert!(matches!(err, ApiError::NotFound(message) if message == "category not found"));
    }
}
