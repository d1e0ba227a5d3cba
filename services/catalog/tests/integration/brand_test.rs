use uuid::Uuid;

use kiosk_catalog::error::CatalogServiceError;
use kiosk_catalog::usecase::brand::{
    CreateBrandUseCase, DeleteBrandUseCase, GetBrandUseCase, ListBrandsUseCase, UpdateBrandUseCase,
};

use crate::helpers::{MockBrandRepo, test_brand};

#[tokio::test]
async fn should_create_brand_with_trimmed_name() {
    let repo = MockBrandRepo::empty();
    let handle = repo.handle();

    let usecase = CreateBrandUseCase { brands: repo };
    let brand = usecase.execute("  Apple ").await.unwrap();

    assert_eq!(brand.name, "Apple");
    assert_eq!(handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_empty_brand_name() {
    let usecase = CreateBrandUseCase {
        brands: MockBrandRepo::empty(),
    };

    let result = usecase.execute("   ").await;
    assert!(
        matches!(
            result,
            Err(CatalogServiceError::Validation { field: "name", .. })
        ),
        "expected name validation error, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_duplicate_brand_name() {
    let repo = MockBrandRepo::new(vec![test_brand("Apple")]);
    let handle = repo.handle();

    let usecase = CreateBrandUseCase { brands: repo };
    let result = usecase.execute("Apple").await;

    assert!(
        matches!(result, Err(CatalogServiceError::BrandNameTaken)),
        "expected BrandNameTaken, got {result:?}"
    );
    assert_eq!(handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_list_brands_with_offset_and_limit() {
    let usecase = ListBrandsUseCase {
        brands: MockBrandRepo::new(vec![
            test_brand("Apple"),
            test_brand("Dell"),
            test_brand("Lenovo"),
        ]),
    };

    let page = usecase.execute(1, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "Dell");
}

#[tokio::test]
async fn should_get_existing_brand() {
    let brand = test_brand("Apple");
    let usecase = GetBrandUseCase {
        brands: MockBrandRepo::new(vec![brand.clone()]),
    };

    let found = usecase.execute(brand.id).await.unwrap();
    assert_eq!(found.name, "Apple");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_brand() {
    let usecase = GetBrandUseCase {
        brands: MockBrandRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(
        matches!(result, Err(CatalogServiceError::BrandNotFound)),
        "expected BrandNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_rename_brand() {
    let brand = test_brand("Aple");
    let usecase = UpdateBrandUseCase {
        brands: MockBrandRepo::new(vec![brand.clone()]),
    };

    let updated = usecase.execute(brand.id, Some("Apple")).await.unwrap();
    assert_eq!(updated.name, "Apple");
}

#[tokio::test]
async fn should_allow_rename_to_same_name() {
    let brand = test_brand("Apple");
    let usecase = UpdateBrandUseCase {
        brands: MockBrandRepo::new(vec![brand.clone()]),
    };

    let updated = usecase.execute(brand.id, Some("Apple")).await.unwrap();
    assert_eq!(updated.name, "Apple");
}

#[tokio::test]
async fn should_reject_rename_to_taken_name() {
    let apple = test_brand("Apple");
    let dell = test_brand("Dell");
    let usecase = UpdateBrandUseCase {
        brands: MockBrandRepo::new(vec![apple, dell.clone()]),
    };

    let result = usecase.execute(dell.id, Some("Apple")).await;
    assert!(
        matches!(result, Err(CatalogServiceError::BrandNameTaken)),
        "expected BrandNameTaken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_rename_without_name() {
    let brand = test_brand("Apple");
    let usecase = UpdateBrandUseCase {
        brands: MockBrandRepo::new(vec![brand.clone()]),
    };

    let result = usecase.execute(brand.id, None).await;
    assert!(
        matches!(result, Err(CatalogServiceError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}

#[tokio::test]
async fn should_delete_existing_brand() {
    let brand = test_brand("Apple");
    let repo = MockBrandRepo::new(vec![brand.clone()]);
    let handle = repo.handle();

    let usecase = DeleteBrandUseCase { brands: repo };
    usecase.execute(brand.id).await.unwrap();

    assert!(handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_brand() {
    let usecase = DeleteBrandUseCase {
        brands: MockBrandRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(
        matches!(result, Err(CatalogServiceError::BrandNotFound)),
        "expected BrandNotFound, got {result:?}"
    );
}
