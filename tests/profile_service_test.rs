//! Profile service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use uuid::Uuid;

use newsreader::config::DEFAULT_INTERESTS;
use newsreader::domain::{Click, Interest, Password, UpdateProfile, User, UserRole};
use newsreader::errors::AppError;
use newsreader::infra::{
    ClickRepository, InterestRepository, MockClickRepository, MockInterestRepository,
    MockUserRepository, UnitOfWork, UserRepository,
};
use newsreader::services::{ProfileManager, ProfileService};

struct TestUnitOfWork {
    user_repo: Arc<MockUserRepository>,
    interest_repo: Arc<MockInterestRepository>,
    click_repo: Arc<MockClickRepository>,
}

impl TestUnitOfWork {
    fn new(
        user_repo: MockUserRepository,
        interest_repo: MockInterestRepository,
        click_repo: MockClickRepository,
    ) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            interest_repo: Arc::new(interest_repo),
            click_repo: Arc::new(click_repo),
        }
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn interests(&self) -> Arc<dyn InterestRepository> {
        self.interest_repo.clone()
    }

    fn clicks(&self) -> Arc<dyn ClickRepository> {
        self.click_repo.clone()
    }
}

fn test_user(id: Uuid, email: &str, name: &str) -> User {
    User {
        id,
        email: email.to_string(),
        password_hash: Password::new("password123").unwrap().into_string(),
        name: name.to_string(),
        role: UserRole::Reader,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn service(
    users: MockUserRepository,
    interests: MockInterestRepository,
    clicks: MockClickRepository,
) -> ProfileManager<TestUnitOfWork> {
    ProfileManager::new(Arc::new(TestUnitOfWork::new(users, interests, clicks)))
}

#[tokio::test]
async fn profile_combines_identity_interests_and_history() {
    let user_id = Uuid::new_v4();
    let user = test_user(user_id, "reader@example.com", "Reader");

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(user_id))
        .returning(move |_| Ok(Some(user.clone())));

    let mut interests = MockInterestRepository::new();
    interests.expect_for_user().with(eq(user_id)).returning(|_| {
        Ok(vec![
            Interest {
                id: Uuid::new_v4(),
                name: "Sports".to_string(),
            },
            Interest {
                id: Uuid::new_v4(),
                name: "Tech".to_string(),
            },
        ])
    });

    let mut clicks = MockClickRepository::new();
    clicks
        .expect_list_for_user()
        .with(eq(user_id))
        .returning(move |_| {
            Ok(vec![Click {
                id: Uuid::new_v4(),
                user_id,
                article_title: "Headline".to_string(),
                article_url: "https://news.example.com/headline".to_string(),
                created_at: Utc::now(),
            }])
        });

    let profiles = service(users, interests, clicks);
    let view = profiles.get_profile(user_id).await.unwrap();

    assert_eq!(view.email, "reader@example.com");
    assert_eq!(view.role, "reader");
    assert_eq!(view.interests, vec!["Sports", "Tech"]);
    assert_eq!(view.clicks.len(), 1);
    assert_eq!(view.clicks[0].article_title, "Headline");
}

#[tokio::test]
async fn profile_for_unknown_user_is_not_found() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|_| Ok(None));

    let profiles = service(
        users,
        MockInterestRepository::new(),
        MockClickRepository::new(),
    );
    let result = profiles.get_profile(Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn partial_edit_changes_only_named_fields() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_update_profile()
        .withf(move |id, name, email| {
            *id == user_id && name.as_deref() == Some("Renamed") && email.is_none()
        })
        .returning(|id, name, _| {
            Ok(test_user(id, "reader@example.com", name.as_deref().unwrap()))
        });

    let profiles = service(
        users,
        MockInterestRepository::new(),
        MockClickRepository::new(),
    );
    let update = UpdateProfile {
        name: Some("Renamed".to_string()),
        email: None,
    };
    let user = profiles.edit_profile(user_id, update).await.unwrap();

    assert_eq!(user.name, "Renamed");
    assert_eq!(user.email, "reader@example.com");
}

#[tokio::test]
async fn edit_rejects_malformed_email_before_touching_store() {
    // No repository expectations: validation fails first
    let profiles = service(
        MockUserRepository::new(),
        MockInterestRepository::new(),
        MockClickRepository::new(),
    );
    let update = UpdateProfile {
        name: None,
        email: Some("not-an-email".to_string()),
    };
    let result = profiles.edit_profile(Uuid::new_v4(), update).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn edit_rejects_empty_name() {
    let profiles = service(
        MockUserRepository::new(),
        MockInterestRepository::new(),
        MockClickRepository::new(),
    );
    let update = UpdateProfile {
        name: Some("   ".to_string()),
        email: None,
    };
    let result = profiles.edit_profile(Uuid::new_v4(), update).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn edit_rejects_email_taken_by_another_user() {
    let user_id = Uuid::new_v4();
    let other_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .with(eq("taken@example.com"))
        .returning(move |_| Ok(Some(test_user(other_id, "taken@example.com", "Other"))));

    let profiles = service(
        users,
        MockInterestRepository::new(),
        MockClickRepository::new(),
    );
    let update = UpdateProfile {
        name: None,
        email: Some("taken@example.com".to_string()),
    };
    let result = profiles.edit_profile(user_id, update).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn edit_allows_keeping_own_email() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .with(eq("mine@example.com"))
        .returning(move |_| Ok(Some(test_user(user_id, "mine@example.com", "Me"))));
    users
        .expect_update_profile()
        .returning(|id, _, email| Ok(test_user(id, email.as_deref().unwrap(), "Me")));

    let profiles = service(
        users,
        MockInterestRepository::new(),
        MockClickRepository::new(),
    );
    let update = UpdateProfile {
        name: None,
        email: Some("mine@example.com".to_string()),
    };

    assert!(profiles.edit_profile(user_id, update).await.is_ok());
}

#[tokio::test]
async fn empty_edit_is_a_noop_but_still_checks_existence() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(user_id))
        .returning(move |_| Ok(Some(test_user(user_id, "reader@example.com", "Reader"))));
    // No update_profile expectation: nothing to write

    let profiles = service(
        users,
        MockInterestRepository::new(),
        MockClickRepository::new(),
    );
    let user = profiles
        .edit_profile(user_id, UpdateProfile::default())
        .await
        .unwrap();

    assert_eq!(user.name, "Reader");
}

#[tokio::test]
async fn set_interests_resolves_names_and_ignores_unknown() {
    let user_id = Uuid::new_v4();
    let sports_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(user_id))
        .returning(move |_| Ok(Some(test_user(user_id, "reader@example.com", "Reader"))));

    let mut interests = MockInterestRepository::new();
    interests
        .expect_find_by_names()
        .withf(|names| names == &["Sports".to_string(), "Astrology".to_string()])
        .returning(move |_| {
            Ok(vec![Interest {
                id: sports_id,
                name: "Sports".to_string(),
            }])
        });
    interests
        .expect_replace_for_user()
        .withf(move |id, ids| *id == user_id && ids == &[sports_id])
        .returning(|_, _| Ok(()));

    let profiles = service(users, interests, MockClickRepository::new());
    let resolved = profiles
        .set_interests(
            user_id,
            vec!["Sports".to_string(), "Astrology".to_string()],
        )
        .await
        .unwrap();

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].name, "Sports");
}

#[tokio::test]
async fn set_interests_for_unknown_user_is_not_found() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|_| Ok(None));
    // No interest expectations: membership is never touched

    let profiles = service(
        users,
        MockInterestRepository::new(),
        MockClickRepository::new(),
    );
    let result = profiles
        .set_interests(Uuid::new_v4(), vec!["Sports".to_string()])
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn empty_selection_clears_interests() {
    let user_id = Uuid::new_v4();

    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(move |_| Ok(Some(test_user(user_id, "reader@example.com", "Reader"))));

    let mut interests = MockInterestRepository::new();
    interests
        .expect_find_by_names()
        .returning(|_| Ok(Vec::new()));
    interests
        .expect_replace_for_user()
        .withf(move |id, ids| *id == user_id && ids.is_empty())
        .returning(|_, _| Ok(()));

    let profiles = service(users, interests, MockClickRepository::new());
    let resolved = profiles.set_interests(user_id, Vec::new()).await.unwrap();

    assert!(resolved.is_empty());
}

#[tokio::test]
async fn interest_seed_covers_the_default_vocabulary() {
    let mut interests = MockInterestRepository::new();
    interests
        .expect_create_if_absent()
        .times(DEFAULT_INTERESTS.len())
        .returning(|_| Ok(()));

    let profiles = service(
        MockUserRepository::new(),
        interests,
        MockClickRepository::new(),
    );
    profiles.ensure_interest_seed().await.unwrap();
}
