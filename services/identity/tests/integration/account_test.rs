use uuid::Uuid;

use kiosk_identity::domain::types::ProfileChanges;
use kiosk_identity::error::IdentityServiceError;
use kiosk_identity::usecase::profile::{GetProfileUseCase, UpdateProfileUseCase};
use kiosk_identity::usecase::user::{GetUserUseCase, UpdateUserInput, UpdateUserUseCase};

use crate::helpers::{MockProfileRepo, MockUserRepo, test_profile, test_user};

// ── GetUser / UpdateUser ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_get_existing_user() {
    let user = test_user();
    let usecase = GetUserUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
    };

    let found = usecase.execute(user.id).await.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.email, user.email);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_user() {
    let usecase = GetUserUseCase {
        users: MockUserRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(
        matches!(result, Err(IdentityServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_update_only_provided_name_fields() {
    let user = test_user();
    let usecase = UpdateUserUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
    };

    let updated = usecase
        .execute(
            user.id,
            UpdateUserInput {
                first_name: Some("Augusta".to_owned()),
                last_name: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.last_name, user.last_name);
}

#[tokio::test]
async fn should_reject_empty_user_update() {
    let user = test_user();
    let usecase = UpdateUserUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
    };

    let result = usecase
        .execute(
            user.id,
            UpdateUserInput {
                first_name: None,
                last_name: None,
            },
        )
        .await;

    assert!(
        matches!(result, Err(IdentityServiceError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}

// ── GetProfile / UpdateProfile ───────────────────────────────────────────────

#[tokio::test]
async fn should_get_existing_profile() {
    let user_id = Uuid::new_v4();
    let usecase = GetProfileUseCase {
        profiles: MockProfileRepo::new(vec![test_profile(user_id)]),
    };

    let profile = usecase.execute(user_id).await.unwrap();
    assert_eq!(profile.user_id, user_id);
}

#[tokio::test]
async fn should_return_not_found_for_missing_profile() {
    let usecase = GetProfileUseCase {
        profiles: MockProfileRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(
        matches!(result, Err(IdentityServiceError::ProfileNotFound)),
        "expected ProfileNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_update_only_provided_profile_fields() {
    let user_id = Uuid::new_v4();
    let profile = test_profile(user_id);
    let usecase = UpdateProfileUseCase {
        profiles: MockProfileRepo::new(vec![profile.clone()]),
    };

    let updated = usecase
        .execute(
            user_id,
            ProfileChanges {
                bio: Some("polymath".to_owned()),
                location: Some("London".to_owned()),
                ..ProfileChanges::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.bio, "polymath");
    assert_eq!(updated.location, "London");
    assert_eq!(updated.display_name, profile.display_name);
    assert_eq!(updated.avatar, profile.avatar);
}

#[tokio::test]
async fn should_reject_empty_profile_update() {
    let user_id = Uuid::new_v4();
    let usecase = UpdateProfileUseCase {
        profiles: MockProfileRepo::new(vec![test_profile(user_id)]),
    };

    let result = usecase.execute(user_id, ProfileChanges::default()).await;
    assert!(
        matches!(result, Err(IdentityServiceError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}
