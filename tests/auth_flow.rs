mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use busvoz::latency::{FixedLatency, NoLatency};
use busvoz::store::UserRepository;
use common::{app, app_with_latency, SEED_EMAIL, SEED_USER_ID};

#[tokio::test]
async fn register_signs_in_new_user() {
    let app = app().await;

    assert!(app.auth.register("Ana", "ana@x.com", "123456").await);

    let user = app.auth.current_user().expect("signed in");
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@x.com");
    assert!(!user.id.is_empty());
    assert_ne!(user.id, SEED_USER_ID);
    assert_eq!(app.store.count().await, 2);
    assert!(!app.auth.is_loading());
}

#[tokio::test]
async fn registered_email_can_log_in_again() {
    let app = app().await;
    assert!(app.auth.register("Ana", "ana@x.com", "123456").await);
    app.auth.logout();
    assert!(!app.auth.is_authenticated());

    assert!(app.auth.login("ana@x.com", "qualquer").await);
    assert_eq!(app.auth.current_user().map(|user| user.name).as_deref(), Some("Ana"));

    assert!(!app.auth.login("ghost@x.com", "qualquer").await);
    assert_eq!(app.auth.current_user().map(|user| user.name).as_deref(), Some("Ana"));
}

#[tokio::test]
async fn unknown_email_is_rejected() {
    let app = app().await;

    assert!(!app.auth.login("ghost@x.com", "whatever").await);
    assert!(!app.auth.is_authenticated());
    assert!(!app.auth.is_loading());
}

#[tokio::test]
async fn duplicate_email_leaves_users_unchanged() {
    let app = app().await;

    assert!(!app.auth.register("Outro João", SEED_EMAIL, "123456").await);
    assert_eq!(app.store.count().await, 1);
    assert!(!app.auth.is_authenticated());
}

#[tokio::test]
async fn failed_login_keeps_current_session() {
    let app = app().await;
    assert!(app.auth.login(SEED_EMAIL, "x").await);

    assert!(!app.auth.login("ghost@x.com", "x").await);
    assert_eq!(app.auth.current_user_id().as_deref(), Some(SEED_USER_ID));
}

#[tokio::test]
async fn logout_clears_user() {
    let app = app().await;
    assert!(app.auth.login(SEED_EMAIL, "x").await);

    app.auth.logout();
    assert!(app.auth.current_user().is_none());
    assert!(app.feedback.user_feedbacks().is_empty());

    // Logging out twice is harmless.
    app.auth.logout();
    assert!(!app.auth.is_authenticated());
}

#[tokio::test]
async fn concurrent_registration_of_same_email_has_one_winner() {
    let app = app().await;
    let other = busvoz::app::App::from_parts(
        app.store.clone(),
        None,
        Arc::new(NoLatency),
        Arc::new(NoLatency),
    );

    let (first, second) = tokio::join!(
        app.auth.register("Ana", "ana@x.com", "123456"),
        other.auth.register("Ana B", "ana@x.com", "654321"),
    );

    assert!(first ^ second);
    assert_eq!(app.store.count().await, 2);
}

#[tokio::test]
async fn subscribers_see_each_change() {
    let app = app().await;
    let changes = Arc::new(AtomicUsize::new(0));
    let seen = changes.clone();
    let id = app.auth.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    assert!(app.auth.login(SEED_EMAIL, "x").await);
    // started + signed in
    assert_eq!(changes.load(Ordering::SeqCst), 2);

    assert!(app.auth.unsubscribe(id));
    app.auth.logout();
    assert_eq!(changes.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn loading_is_set_while_request_is_pending() {
    let app = app_with_latency(
        Arc::new(FixedLatency(Duration::from_millis(1000))),
        Arc::new(NoLatency),
    );
    app.start().await;

    let auth = app.auth.clone();
    let pending = tokio::spawn(async move { auth.login(SEED_EMAIL, "x").await });

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(app.auth.is_loading());
    assert!(!app.auth.is_authenticated());

    assert!(pending.await.unwrap());
    assert!(!app.auth.is_loading());
    assert!(app.auth.is_authenticated());
}
