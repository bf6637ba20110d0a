mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use busvoz::feedback::FeedbackFilter;
use busvoz::latency::{FixedLatency, NoLatency};
use busvoz::model::{Location, NewFeedback};
use busvoz::store::FeedbackRepository;
use busvoz::validation::{FeedbackForm, Field, FieldError};
use common::{app, app_with_latency, SEED_EMAIL, SEED_USER_ID};

#[tokio::test]
async fn seeded_feedback_is_newest_first() {
    let app = app().await;
    let all = app.feedback.feedbacks();

    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|pair| pair[0].created_at > pair[1].created_at));
    assert!(all.iter().all(|f| f.user_id == SEED_USER_ID));
}

#[tokio::test]
async fn submitted_feedback_goes_first() {
    let app = app().await;
    assert!(app.auth.login(SEED_EMAIL, "x").await);
    let user_id = app.auth.current_user_id().unwrap();

    let record = app
        .feedback
        .add_feedback(NewFeedback::new(&user_id, "1", "1", "Atraso grande"))
        .await;

    let all = app.feedback.feedbacks();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0], record);
    assert!(!record.id.is_empty());
    assert_eq!(record.comment, "Atraso grande");
    assert!(record.created_at > all[1].created_at);

    let ids: HashSet<_> = all.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids.len(), all.len());

    // Store and state agree.
    assert_eq!(app.store.list().await, all);
}

#[tokio::test]
async fn user_feedbacks_follow_the_session() {
    let app = app().await;
    assert!(app.feedback.user_feedbacks().is_empty());

    assert!(app.auth.register("Ana", "ana@x.com", "123456").await);
    assert!(app.feedback.user_feedbacks().is_empty());

    let ana = app.auth.current_user_id().unwrap();
    app.feedback
        .add_feedback(NewFeedback::new(&ana, "4", "5", "Assalto na parada final"))
        .await;

    let mine = app.feedback.user_feedbacks();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].user_id, ana);

    app.auth.logout();
    assert!(app.auth.login(SEED_EMAIL, "x").await);
    assert_eq!(app.feedback.user_feedbacks().len(), 3);
}

#[tokio::test]
async fn filters_combine() {
    let app = app().await;
    assert!(app.auth.register("Ana", "ana@x.com", "123456").await);
    let ana = app.auth.current_user_id().unwrap();
    app.feedback
        .add_feedback(NewFeedback::new(&ana, "2", "1", "Atrasou de novo hoje"))
        .await;

    let line_two = app.feedback.filtered(&FeedbackFilter::new().bus_line("2"));
    assert_eq!(line_two.len(), 2);

    let line_two_late = app
        .feedback
        .filtered(&FeedbackFilter::new().bus_line("2").feedback_type("1"));
    assert_eq!(line_two_late.len(), 1);
    assert_eq!(line_two_late[0].user_id, ana);

    let mine = app.feedback.filtered(&FeedbackFilter::new().mine());
    assert_eq!(mine.len(), 1);

    let none = app.feedback.filtered(&FeedbackFilter::new().bus_line("8"));
    assert!(none.is_empty());

    app.auth.logout();
    assert!(app.feedback.filtered(&FeedbackFilter::new().mine()).is_empty());
    assert_eq!(app.feedback.filtered(&FeedbackFilter::new()).len(), 4);
}

#[tokio::test]
async fn form_validation_guards_submission() {
    let app = app().await;
    assert!(app.auth.login(SEED_EMAIL, "x").await);
    let user_id = app.auth.current_user_id().unwrap();

    let short = FeedbackForm {
        bus_line_id: "1".to_string(),
        feedback_type_id: String::new(),
        comment: "curto".to_string(),
        location: None,
    };
    let errors = short.into_submission(&user_id).unwrap_err();
    assert_eq!(errors.get(Field::FeedbackType), Some(&FieldError::FeedbackTypeRequired));
    assert_eq!(errors.get(Field::Comment), Some(&FieldError::CommentTooShort));

    let valid = FeedbackForm {
        bus_line_id: "3".to_string(),
        feedback_type_id: "3".to_string(),
        comment: "Janela quebrada no fundo".to_string(),
        location: Some(Location {
            latitude: -8.0089,
            longitude: -34.8553,
        }),
    };
    let record = app
        .feedback
        .add_feedback(valid.into_submission(&user_id).unwrap())
        .await;
    assert!(record.location.is_some());
    assert_eq!(app.feedback.user_feedbacks().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn loading_is_set_while_submission_is_pending() {
    let app = app_with_latency(
        Arc::new(NoLatency),
        Arc::new(FixedLatency(Duration::from_millis(1000))),
    );
    app.start().await;

    let feedback = app.feedback.clone();
    let pending = tokio::spawn(async move {
        feedback
            .add_feedback(NewFeedback::new("1", "1", "1", "Atraso grande"))
            .await
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(app.feedback.is_loading());
    assert_eq!(app.feedback.feedbacks().len(), 3);

    let record = pending.await.unwrap();
    assert!(!app.feedback.is_loading());
    assert_eq!(app.feedback.feedbacks()[0].id, record.id);
}
