//! Submit flows through the async facade

use formshot::platform::clipboard::{FailingClipboard, MemoryClipboard};
use formshot::platform::notify::MemoryNotifier;
use formshot::platform::{ClipboardLog, NotificationLog};
use formshot::rendering::DATA_URL_PREFIX;
use formshot::{AsyncSession, Error, Field, FormConfig, SubmitOutcome};

async fn memory_session() -> (AsyncSession, ClipboardLog, NotificationLog) {
    let clipboard = MemoryClipboard::new();
    let notifier = MemoryNotifier::new();
    let clip_log = clipboard.log();
    let note_log = notifier.log();
    let session = AsyncSession::with_backends(
        FormConfig::default(),
        Box::new(clipboard),
        Box::new(notifier),
    )
    .await
    .expect("session");
    (session, clip_log, note_log)
}

async fn fill_valid(session: &AsyncSession) {
    session.set_field(Field::Name, "Al").await.expect("set");
    session
        .set_field(Field::Email, "a@b.com")
        .await
        .expect("set");
    session
        .set_field(Field::Password, "hunter2")
        .await
        .expect("set");
    session
        .set_field(Field::ConfirmPassword, "hunter2")
        .await
        .expect("set");
}

#[tokio::test]
async fn async_submit_runs_the_whole_flow() {
    let (session, clip_log, note_log) = memory_session().await;
    fill_valid(&session).await;

    let outcome = session.submit().await.expect("submit");
    assert!(matches!(outcome, SubmitOutcome::Done));

    let data_url = session
        .captured_image()
        .await
        .expect("command")
        .expect("captured");
    assert!(data_url.starts_with(DATA_URL_PREFIX));
    assert_eq!(clip_log.last(), Some(data_url));
    assert_eq!(note_log.len(), 1);

    session.close().await.expect("close");
}

#[tokio::test]
async fn async_invalid_submit_reports_field_errors() {
    let (session, clip_log, _) = memory_session().await;
    session
        .set_field(Field::Email, "a@b.com")
        .await
        .expect("set");

    match session.submit().await.expect("submit") {
        SubmitOutcome::Invalid(errors) => {
            assert_eq!(errors.len(), 3);
            assert!(errors.contains_key(&Field::Name));
            assert!(!errors.contains_key(&Field::Email));
        }
        other => panic!("expected Invalid, got {:?}", other),
    }
    assert!(clip_log.is_empty());

    session.close().await.expect("close");
}

#[tokio::test]
async fn async_copy_again_repeats_the_same_write() {
    let (session, clip_log, _) = memory_session().await;
    fill_valid(&session).await;
    session.submit().await.expect("submit");

    session.copy_again().await.expect("copy again");
    session.copy_again().await.expect("copy again");

    let entries = clip_log.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], entries[1]);
    assert_eq!(entries[1], entries[2]);

    session.close().await.expect("close");
}

#[tokio::test]
async fn async_clipboard_failure_still_keeps_the_capture() {
    let session = AsyncSession::with_backends(
        FormConfig::default(),
        Box::new(FailingClipboard::new()),
        Box::new(MemoryNotifier::new()),
    )
    .await
    .expect("session");
    fill_valid(&session).await;

    assert!(matches!(
        session.submit().await.expect("submit"),
        SubmitOutcome::CopyFailed
    ));
    let captured = session.captured_image().await.expect("command");
    assert!(captured.is_some());

    session.close().await.expect("close");
}

#[tokio::test]
async fn snapshot_applies_masking() {
    let (session, _, _) = memory_session().await;
    fill_valid(&session).await;

    let snapshot = session.text_snapshot().await.expect("snapshot");
    assert_eq!(snapshot.title, "Form Screenshot to Base64");
    assert!(snapshot.text.contains("Al"));
    assert!(snapshot.text.contains("*******"));
    assert!(!snapshot.text.contains("hunter2"));

    session.close().await.expect("close");
}

#[tokio::test]
async fn zero_viewport_config_fails_initialization() {
    let mut config = FormConfig::default();
    config.viewport.width = 0;
    let result = AsyncSession::with_backends(
        config,
        Box::new(MemoryClipboard::new()),
        Box::new(MemoryNotifier::new()),
    )
    .await;
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[tokio::test]
async fn commands_after_close_fail_cleanly() {
    let (session, _, _) = memory_session().await;
    let handle = session.clone();
    session.close().await.expect("close");

    let err = handle.submit().await.unwrap_err();
    assert!(matches!(err, Error::Other(_)));
}
