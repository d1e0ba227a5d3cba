use chrono::{Duration, NaiveDate, Utc};

use kiosk_identity::error::IdentityServiceError;
use kiosk_identity::usecase::password::verify_password;
use kiosk_identity::usecase::register::{RegisterInput, RegisterUseCase};

use crate::helpers::{MockUserRepo, test_user};

fn valid_input() -> RegisterInput {
    RegisterInput {
        email: "new@example.com".to_owned(),
        password: "s3cret-enough".to_owned(),
        password_confirm: "s3cret-enough".to_owned(),
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        date_of_birth: Some(NaiveDate::from_ymd_opt(1990, 12, 9).unwrap()),
    }
}

#[tokio::test]
async fn should_register_user_and_create_profile_atomically() {
    let repo = MockUserRepo::empty();
    let users_handle = repo.users_handle();
    let profiles_handle = repo.profiles_handle();

    let usecase = RegisterUseCase { users: repo };
    let user = usecase.execute(valid_input()).await.unwrap();

    assert_eq!(user.email, "new@example.com");
    assert!(user.is_active);
    assert!(!user.is_staff);
    assert!(verify_password("s3cret-enough", &user.password_hash));

    let users = users_handle.lock().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, user.id);

    let profiles = profiles_handle.lock().unwrap();
    assert_eq!(profiles.as_slice(), &[user.id]);
}

#[tokio::test]
async fn should_normalize_email_before_storing() {
    let usecase = RegisterUseCase {
        users: MockUserRepo::empty(),
    };

    let user = usecase
        .execute(RegisterInput {
            email: "  New@Example.COM ".to_owned(),
            ..valid_input()
        })
        .await
        .unwrap();

    assert_eq!(user.email, "new@example.com");
}

#[tokio::test]
async fn should_reject_duplicate_email_with_conflict() {
    let existing = test_user();
    let repo = MockUserRepo::new(vec![existing.clone()]);
    let users_handle = repo.users_handle();

    let usecase = RegisterUseCase { users: repo };
    let result = usecase
        .execute(RegisterInput {
            email: existing.email.clone(),
            ..valid_input()
        })
        .await;

    assert!(
        matches!(result, Err(IdentityServiceError::EmailTaken)),
        "expected EmailTaken, got {result:?}"
    );
    assert_eq!(users_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_malformed_email() {
    let usecase = RegisterUseCase {
        users: MockUserRepo::empty(),
    };

    let result = usecase
        .execute(RegisterInput {
            email: "not-an-email".to_owned(),
            ..valid_input()
        })
        .await;

    assert!(
        matches!(
            result,
            Err(IdentityServiceError::Validation { field: "email", .. })
        ),
        "expected email validation error, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_short_password() {
    let usecase = RegisterUseCase {
        users: MockUserRepo::empty(),
    };

    let result = usecase
        .execute(RegisterInput {
            password: "short".to_owned(),
            password_confirm: "short".to_owned(),
            ..valid_input()
        })
        .await;

    assert!(
        matches!(
            result,
            Err(IdentityServiceError::Validation {
                field: "password",
                ..
            })
        ),
        "expected password validation error, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_mismatched_password_confirmation() {
    let repo = MockUserRepo::empty();
    let users_handle = repo.users_handle();

    let usecase = RegisterUseCase { users: repo };
    let result = usecase
        .execute(RegisterInput {
            password_confirm: "different-enough".to_owned(),
            ..valid_input()
        })
        .await;

    assert!(
        matches!(
            result,
            Err(IdentityServiceError::Validation {
                field: "password_confirm",
                ..
            })
        ),
        "expected confirmation validation error, got {result:?}"
    );
    assert!(users_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_underage_registration() {
    let repo = MockUserRepo::empty();
    let users_handle = repo.users_handle();

    let usecase = RegisterUseCase { users: repo };
    let result = usecase
        .execute(RegisterInput {
            date_of_birth: Some(Utc::now().date_naive() - Duration::days(365 * 10)),
            ..valid_input()
        })
        .await;

    assert!(
        matches!(
            result,
            Err(IdentityServiceError::Validation {
                field: "date_of_birth",
                ..
            })
        ),
        "expected date_of_birth validation error, got {result:?}"
    );
    assert!(users_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_allow_registration_without_birth_date() {
    let usecase = RegisterUseCase {
        users: MockUserRepo::empty(),
    };

    let user = usecase
        .execute(RegisterInput {
            date_of_birth: None,
            ..valid_input()
        })
        .await
        .unwrap();

    assert!(user.date_of_birth.is_none());
}
