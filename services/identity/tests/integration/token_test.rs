use kiosk_auth_types::token::validate_access_token;
use kiosk_identity::error::IdentityServiceError;
use kiosk_identity::usecase::token::{
    LoginInput, LoginUseCase, RefreshTokenUseCase, issue_refresh_token, issue_token_pair,
};

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET, TEST_PASSWORD, test_user};

// ── issue_token_pair ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_pair_whose_access_token_validates() {
    let user = test_user();
    let pair = issue_token_pair(&user, TEST_JWT_SECRET).unwrap();

    assert!(!pair.access.is_empty());
    assert!(!pair.refresh.is_empty());
    assert!(pair.access_token_exp > 0);

    let info = validate_access_token(&pair.access, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
    assert!(!info.is_staff);
    assert_eq!(info.access_token_exp, pair.access_token_exp);
}

#[tokio::test]
async fn should_not_accept_refresh_token_as_access_token() {
    let user = test_user();
    let pair = issue_token_pair(&user, TEST_JWT_SECRET).unwrap();

    let result = validate_access_token(&pair.refresh, TEST_JWT_SECRET);
    assert!(
        result.is_err(),
        "refresh token must not authenticate API requests"
    );
}

#[tokio::test]
async fn should_embed_staff_flag_in_access_token() {
    let user = kiosk_identity::domain::types::User {
        is_staff: true,
        ..test_user()
    };
    let pair = issue_token_pair(&user, TEST_JWT_SECRET).unwrap();

    let info = validate_access_token(&pair.access, TEST_JWT_SECRET).unwrap();
    assert!(info.is_staff);
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_correct_credentials() {
    let user = test_user();
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = usecase
        .execute(LoginInput {
            email: user.email.clone(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(output.user_id, user.id);

    let info = validate_access_token(&output.tokens.access, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
}

#[tokio::test]
async fn should_login_with_unnormalized_email() {
    let user = test_user();
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = usecase
        .execute(LoginInput {
            email: "  USER@example.com ".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(output.user_id, user.id);
}

#[tokio::test]
async fn should_reject_login_with_wrong_password() {
    let user = test_user();
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(LoginInput {
            email: user.email.clone(),
            password: "wrong-password".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(IdentityServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_login_for_unknown_email() {
    let usecase = LoginUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(LoginInput {
            email: "nobody@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(IdentityServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_login_for_deactivated_account() {
    let user = kiosk_identity::domain::types::User {
        is_active: false,
        ..test_user()
    };
    let usecase = LoginUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase
        .execute(LoginInput {
            email: user.email.clone(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(IdentityServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

// ── RefreshTokenUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_refresh_token_pair_with_valid_refresh_jwt() {
    let user = test_user();
    let refresh = issue_refresh_token(&user, TEST_JWT_SECRET).unwrap();

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = usecase.execute(&refresh).await.unwrap();

    assert_eq!(output.user_id, user.id);

    let info = validate_access_token(&output.tokens.access, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user.id);
}

#[tokio::test]
async fn should_reject_refresh_with_garbage_token() {
    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::new(vec![test_user()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute("not-a-valid-jwt").await;

    assert!(
        matches!(result, Err(IdentityServiceError::InvalidRefreshToken)),
        "expected InvalidRefreshToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_refresh_signed_with_wrong_secret() {
    let user = test_user();
    let refresh = issue_refresh_token(&user, "other-secret").unwrap();

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute(&refresh).await;

    assert!(
        matches!(result, Err(IdentityServiceError::InvalidRefreshToken)),
        "expected InvalidRefreshToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_access_token_at_refresh_endpoint() {
    let user = test_user();
    let pair = issue_token_pair(&user, TEST_JWT_SECRET).unwrap();

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::new(vec![user]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute(&pair.access).await;

    assert!(
        matches!(result, Err(IdentityServiceError::InvalidRefreshToken)),
        "expected InvalidRefreshToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_refresh_when_user_deleted() {
    let user = test_user();
    let refresh = issue_refresh_token(&user, TEST_JWT_SECRET).unwrap();

    let usecase = RefreshTokenUseCase {
        users: MockUserRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute(&refresh).await;

    assert!(
        matches!(result, Err(IdentityServiceError::InvalidRefreshToken)),
        "expected InvalidRefreshToken, got {result:?}"
    );
}
