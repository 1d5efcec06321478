use chrono::{TimeZone, Utc};
use quotedesk_core::{
    CommunityError, FeedAction, FixedClock, FormProfile, RegistrationError, RegistrationForm,
    ValidationError,
};
use quotedesk_runtime::{Config, DisplayConfig, Error, QuoteDesk, Submission};
use quotedesk_store::{FeedScope, KeyValueStore, MemoryStore, PostFilter, RequestFilter, keys};
use quotedesk_types::{FormFields, PostCategory, RequestStatus, Role};

fn desk_with(kv: MemoryStore) -> QuoteDesk {
    let config = Config {
        display: DisplayConfig {
            utc_offset_minutes: Some(0),
        },
        ..Config::default()
    };
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 2, 14, 0, 0).unwrap());
    QuoteDesk::with_backend(Box::new(kv), config, Box::new(clock))
}

fn desk() -> QuoteDesk {
    desk_with(MemoryStore::new())
}

fn quote_form(email: &str) -> FormFields {
    FormFields::new()
        .with("name", "Meera")
        .with("email", email)
        .with("phone", "(555) 123-4567")
        .with("area_size", "1800")
        .with("budget", "3500000")
        .with("project_details", "Duplex with rooftop garden")
        .with("service", "construction")
}

#[test]
fn test_public_submission_is_owned_by_email_local_part() {
    let desk = desk();
    let submission = desk
        .quotes()
        .submit(&quote_form("meera@gmail.com"), FormProfile::Public)
        .unwrap();

    assert!(submission.is_saved());
    let stored = submission.record();
    assert_eq!(stored.client_user, "meera");
    assert_eq!(stored.phone.as_deref(), Some("5551234567"));
    assert_eq!(stored.status, RequestStatus::Pending);
    assert_eq!(stored.extra["service"], "construction");
}

#[test]
fn test_validation_failure_writes_nothing() {
    let desk = desk();
    let err = desk
        .quotes()
        .submit(
            &quote_form("meera@gmail.com").with("budget", "-10"),
            FormProfile::Public,
        )
        .unwrap_err();

    assert_eq!(err, ValidationError::Budget);
    assert_eq!(desk.store().get(keys::QUOTE_REQUESTS).unwrap(), None);
}

#[test]
fn test_client_dashboard_shows_only_own_requests() {
    let desk = desk();
    desk.auth()
        .login("client@contractorpro.com", "client123", Role::Client)
        .unwrap();

    let form = FormFields::new()
        .with("phone", "555 987 6543")
        .with("project_details", "Bathroom retile");
    let mine = desk.quotes().submit(&form, FormProfile::Client).unwrap();
    assert_eq!(mine.record().client_user, "client");
    assert_eq!(mine.record().name.as_deref(), Some("client"));

    desk.quotes()
        .submit(&quote_form("someone@yahoo.com"), FormProfile::Public)
        .unwrap();

    let dashboard = desk.quotes().client_dashboard().unwrap();
    assert_eq!(dashboard.viewer, "client");
    assert_eq!(dashboard.cards.len(), 1);
    assert_eq!(dashboard.cards[0].title, "Bathroom retile");
    assert_eq!(dashboard.cards[0].submitted, "6/2/2025, 2:00:00 PM");

    let all = desk
        .quotes()
        .contractor_dashboard(&RequestFilter::All)
        .unwrap();
    assert_eq!(all.cards.len(), 2);
    assert_eq!(all.viewer, "Engineer");
}

#[test]
fn test_client_form_requires_phone() {
    let desk = desk();
    let err = desk
        .quotes()
        .submit(
            &FormFields::new().with("project_details", "Fence"),
            FormProfile::Client,
        )
        .unwrap_err();
    assert_eq!(err, ValidationError::Phone);
}

#[test]
fn test_storage_failure_is_reported_not_hidden() {
    let desk = desk_with(MemoryStore::with_quota(64));
    let submission = desk
        .quotes()
        .submit(&quote_form("meera@gmail.com"), FormProfile::Public)
        .unwrap();

    match submission {
        Submission::NotPersisted { record, error } => {
            assert_eq!(record.client_user, "meera");
            assert!(error.contains("quota"));
        }
        Submission::Saved(_) => panic!("write over quota must not report success"),
    }
    assert!(desk.quotes().list(&RequestFilter::All).unwrap().is_empty());
}

#[test]
fn test_complete_is_idempotent_through_desk() {
    let desk = desk();
    let id = desk
        .quotes()
        .submit(&quote_form("meera@gmail.com"), FormProfile::Public)
        .unwrap()
        .record()
        .id;

    desk.quotes().complete(id).unwrap();
    let again = desk.quotes().complete(id).unwrap();
    assert_eq!(again.status, RequestStatus::Completed);

    let pending = desk
        .quotes()
        .list(&RequestFilter::Status(RequestStatus::Pending))
        .unwrap();
    assert!(pending.is_empty());
}

#[test]
fn test_login_and_logout() {
    let desk = desk();
    let auth = desk.auth();

    let err = auth
        .login("engineer@contractorpro.com", "wrong", Role::Contractor)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCredentials(Role::Contractor)));
    assert_eq!(
        err.user_message(),
        "Invalid contractor credentials. Please try again."
    );

    // client credentials do not open the contractor dashboard
    assert!(
        auth.login("client@contractorpro.com", "client123", Role::Contractor)
            .is_err()
    );

    let name = auth
        .login(" engineer@contractorpro.com ", "admin123", Role::Contractor)
        .unwrap();
    assert_eq!(name, "engineer");
    assert_eq!(
        desk.store().get(keys::CONTRACTOR_NAME).unwrap().as_deref(),
        Some("engineer")
    );

    auth.logout(Role::Contractor).unwrap();
    assert_eq!(auth.current(Role::Contractor).unwrap(), None);
}

#[test]
fn test_register_validates_only() {
    let desk = desk();
    let form = RegistrationForm {
        name: "Arun".to_string(),
        email: "arun@example.com".to_string(),
        phone: "98765 43210".to_string(),
        password: "pw".to_string(),
        confirm_password: "pw2".to_string(),
        role: Role::Contractor,
    };
    assert_eq!(
        desk.auth().register(&form),
        Err(RegistrationError::PasswordMismatch)
    );

    let form = RegistrationForm {
        confirm_password: "pw".to_string(),
        ..form
    };
    let accepted = desk.auth().register(&form).unwrap();
    assert_eq!(accepted.phone, "9876543210");
}

#[test]
fn test_support_submission() {
    let desk = desk();

    let err = desk
        .support()
        .submit(&FormFields::new().with("message", "  "))
        .unwrap_err();
    assert_eq!(err, ValidationError::EmptyForm);

    let saved = desk
        .support()
        .submit(
            &FormFields::new()
                .with("email", "help@me.com")
                .with("message", "Leak in basement")
                .with("type", "spoofed"),
        )
        .unwrap();
    assert!(saved.is_saved());
    assert_eq!(saved.record().kind, "support");
    assert_eq!(saved.record().field("message"), Some("Leak in basement"));
    assert_eq!(desk.support().list().unwrap().len(), 1);
}

#[test]
fn test_saved_ids_share_the_backend() {
    let desk = desk();
    assert!(desk.saved().toggle(17).unwrap());
    assert_eq!(desk.saved().len().unwrap(), 1);
    assert_eq!(
        desk.store().get(keys::SAVED_POSTS).unwrap().as_deref(),
        Some("[17]")
    );
}

#[test]
fn test_open_creates_workspace_on_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let data_dir = dir.path().join("desk");

    {
        let desk = QuoteDesk::open(&data_dir).unwrap();
        desk.quotes()
            .submit(&quote_form("meera@gmail.com"), FormProfile::Public)
            .unwrap();
    }

    assert!(data_dir.join("quotedesk.db").exists());
    let desk = QuoteDesk::open(&data_dir).unwrap();
    assert_eq!(desk.quotes().list(&RequestFilter::All).unwrap().len(), 1);
    assert_eq!(desk.data_dir(), Some(data_dir.as_path()));
}

#[test]
fn test_feed_writes_require_login() {
    let desk = desk();

    let err = desk
        .community()
        .create(Role::Client, "Any deck builders?", PostCategory::Question, "")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Community(CommunityError::LoginRequired(FeedAction::Post))
    ));
    assert_eq!(err.user_message(), "Please log in to post!");
    assert_eq!(desk.store().get(keys::COMMUNITY_POSTS).unwrap(), None);

    desk.auth()
        .login("client@contractorpro.com", "client123", Role::Client)
        .unwrap();
    let err = desk
        .community()
        .create(Role::Client, "   ", PostCategory::Question, "")
        .unwrap_err();
    assert_eq!(err.user_message(), "Please write something to post!");
}

#[test]
fn test_feed_post_like_comment_and_saved() {
    let desk = desk();
    desk.auth()
        .login("engineer@contractorpro.com", "admin123", Role::Contractor)
        .unwrap();
    desk.auth()
        .login("client@contractorpro.com", "client123", Role::Client)
        .unwrap();

    let showcase = desk
        .community()
        .create(Role::Contractor, "Villa handed over", PostCategory::Project, "Luxury, Villa")
        .unwrap();
    assert!(showcase.is_saved());
    let showcase = showcase.record().clone();
    assert_eq!(showcase.author, "engineer");
    assert_eq!(showcase.user_type, "engineer");
    assert_eq!(showcase.tags, vec!["Luxury", "Villa"]);

    let question = desk
        .community()
        .create(Role::Client, "Budget for a garage?", PostCategory::Question, "")
        .unwrap()
        .record()
        .clone();
    assert!(question.id > showcase.id);

    let liked = desk.community().toggle_like(Role::Client, showcase.id).unwrap();
    assert_eq!((liked.liked, liked.likes), (true, 1));

    let commented = desk
        .community()
        .comment(Role::Client, showcase.id, " Stunning! ")
        .unwrap();
    assert_eq!(commented.comments[0].author, "client");
    assert_eq!(commented.comments[0].user_type.as_deref(), Some("client"));
    assert_eq!(commented.comments[0].text, "Stunning!");

    let clients = PostFilter {
        scope: FeedScope::Members(Role::Client),
        ..Default::default()
    };
    let feed = desk.community().feed(&clients).unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, question.id);

    desk.saved().toggle(showcase.id.as_u64()).unwrap();
    desk.saved().toggle(42).unwrap();
    let saved = desk.community().saved_posts().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].content, "Villa handed over");
}
