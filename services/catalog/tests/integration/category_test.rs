use uuid::Uuid;

use kiosk_catalog::error::CatalogServiceError;
use kiosk_catalog::usecase::category::{
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryUseCase, UpdateCategoryUseCase,
};

use crate::helpers::{MockCategoryRepo, test_category};

#[tokio::test]
async fn should_create_category() {
    let repo = MockCategoryRepo::empty();
    let handle = repo.handle();

    let usecase = CreateCategoryUseCase { categories: repo };
    let category = usecase.execute("Laptops").await.unwrap();

    assert_eq!(category.name, "Laptops");
    assert_eq!(handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_empty_category_name() {
    let usecase = CreateCategoryUseCase {
        categories: MockCategoryRepo::empty(),
    };

    let result = usecase.execute("").await;
    assert!(
        matches!(
            result,
            Err(CatalogServiceError::Validation { field: "name", .. })
        ),
        "expected name validation error, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_duplicate_category_name() {
    let usecase = CreateCategoryUseCase {
        categories: MockCategoryRepo::new(vec![test_category("Laptops")]),
    };

    let result = usecase.execute("Laptops").await;
    assert!(
        matches!(result, Err(CatalogServiceError::CategoryNameTaken)),
        "expected CategoryNameTaken, got {result:?}"
    );
}

#[tokio::test]
async fn should_get_existing_category() {
    let category = test_category("Laptops");
    let usecase = GetCategoryUseCase {
        categories: MockCategoryRepo::new(vec![category.clone()]),
    };

    let found = usecase.execute(category.id).await.unwrap();
    assert_eq!(found.name, "Laptops");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_category() {
    let usecase = GetCategoryUseCase {
        categories: MockCategoryRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(
        matches!(result, Err(CatalogServiceError::CategoryNotFound)),
        "expected CategoryNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_rename_category() {
    let category = test_category("Latops");
    let usecase = UpdateCategoryUseCase {
        categories: MockCategoryRepo::new(vec![category.clone()]),
    };

    let updated = usecase.execute(category.id, Some("Laptops")).await.unwrap();
    assert_eq!(updated.name, "Laptops");
}

#[tokio::test]
async fn should_reject_rename_to_taken_category_name() {
    let laptops = test_category("Laptops");
    let phones = test_category("Phones");
    let usecase = UpdateCategoryUseCase {
        categories: MockCategoryRepo::new(vec![laptops, phones.clone()]),
    };

    let result = usecase.execute(phones.id, Some("Laptops")).await;
    assert!(
        matches!(result, Err(CatalogServiceError::CategoryNameTaken)),
        "expected CategoryNameTaken, got {result:?}"
    );
}

#[tokio::test]
async fn should_delete_existing_category() {
    let category = test_category("Laptops");
    let repo = MockCategoryRepo::new(vec![category.clone()]);
    let handle = repo.handle();

    let usecase = DeleteCategoryUseCase { categories: repo };
    usecase.execute(category.id).await.unwrap();

    assert!(handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_category() {
    let usecase = DeleteCategoryUseCase {
        categories: MockCategoryRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(
        matches!(result, Err(CatalogServiceError::CategoryNotFound)),
        "expected CategoryNotFound, got {result:?}"
    );
}
