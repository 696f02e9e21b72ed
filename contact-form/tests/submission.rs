//! Tests for the submission lifecycle.

mod common;

use std::time::Duration;

use common::{PanickingTransport, RecordingUi, ScriptedTransport, UiCall, fill_valid, is_settled, wait_for};
use contact_form::prelude::*;
use contact_form::schedule::TaskKey;
use tokio::time::Instant;

fn is_timer(key: TaskKey) -> impl Fn(&FormEvent) -> bool {
    move |event: &FormEvent| matches!(event, FormEvent::Timer(ticket) if ticket.key == key)
}

#[tokio::test(start_paused = true)]
async fn test_submit_while_pending_is_ignored() {
    let ui = RecordingUi::default();
    let transport = ScriptedTransport::succeeding(Duration::from_secs(2));
    let mut form = ContactForm::new(ui.clone(), transport.clone()).unwrap();
    fill_valid(&mut form);

    assert_eq!(form.submit(), SubmitAttempt::Started);
    ui.clear();
    assert_eq!(
        form.submit(),
        SubmitAttempt::Rejected(SubmissionState::Pending)
    );

    // No revalidation, no shake, no second transport call.
    assert!(ui.calls().is_empty());
    assert_eq!(form.submission_state(), &SubmissionState::Pending);

    wait_for(&mut form, is_settled).await;
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_submit_during_success_display_is_rejected() {
    let transport = ScriptedTransport::succeeding(Duration::from_secs(2));
    let mut form = ContactForm::new(RecordingUi::default(), transport.clone()).unwrap();
    fill_valid(&mut form);
    form.submit();
    wait_for(&mut form, is_settled).await;

    assert_eq!(
        form.submit(),
        SubmitAttempt::Rejected(SubmissionState::Succeeded)
    );
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_loading_brackets_successful_submission() {
    let ui = RecordingUi::default();
    let mut form = ContactForm::new(
        ui.clone(),
        ScriptedTransport::succeeding(Duration::from_secs(2)),
    )
    .unwrap();
    fill_valid(&mut form);

    assert!(!ui.loading());
    form.submit();
    assert!(ui.loading());

    wait_for(&mut form, is_settled).await;
    assert!(!ui.loading());

    let off = ui.position(&UiCall::Loading(false)).unwrap();
    let success = ui.position(&UiCall::Success).unwrap();
    assert!(off < success);
}

#[tokio::test(start_paused = true)]
async fn test_failure_shows_reason_and_keeps_values() {
    let ui = RecordingUi::default();
    let transport = ScriptedTransport::failing(
        Duration::from_secs(1),
        SubmitError::rejected("Mailbox is full"),
    );
    let mut form = ContactForm::new(ui.clone(), transport.clone()).unwrap();
    fill_valid(&mut form);
    let values = form.values();

    form.submit();
    wait_for(&mut form, is_settled).await;

    assert!(!ui.loading());
    assert_eq!(ui.count(&UiCall::Failure("Mailbox is full".into())), 1);
    assert!(
        ui.position(&UiCall::Loading(false)).unwrap()
            < ui.position(&UiCall::Failure("Mailbox is full".into())).unwrap()
    );
    assert_eq!(form.submission_state(), &SubmissionState::Idle);
    assert_eq!(
        form.submission().last_error(),
        Some(&SubmitError::rejected("Mailbox is full"))
    );
    assert_eq!(form.values(), values);
    assert_eq!(ui.count(&UiCall::ResetAll), 0);

    // Retry without retyping.
    assert_eq!(form.submit(), SubmitAttempt::Started);
    wait_for(&mut form, is_settled).await;
    assert_eq!(transport.calls(), 2);
    assert_eq!(transport.received()[1], values);
}

#[tokio::test(start_paused = true)]
async fn test_internal_error_shows_generic_message() {
    let ui = RecordingUi::default();
    let transport = ScriptedTransport::failing(
        Duration::from_millis(200),
        SubmitError::Transport("connection reset by peer".into()),
    );
    let mut form = ContactForm::new(ui.clone(), transport).unwrap();
    fill_valid(&mut form);

    form.submit();
    wait_for(&mut form, is_settled).await;

    assert_eq!(
        ui.count(&UiCall::Failure(
            "Something went wrong. Please try again.".into()
        )),
        1
    );
}

#[tokio::test(start_paused = true)]
async fn test_panicking_transport_still_clears_loading() {
    let ui = RecordingUi::default();
    let mut form = ContactForm::new(ui.clone(), PanickingTransport).unwrap();
    fill_valid(&mut form);

    form.submit();
    let event = wait_for(&mut form, is_settled).await;

    assert_eq!(
        event,
        FormEvent::Settled(Err(SubmitError::Panicked("transport bug".into())))
    );
    assert!(!ui.loading());
    assert_eq!(form.submission_state(), &SubmissionState::Idle);
    assert_eq!(
        ui.count(&UiCall::Failure(
            "Something went wrong. Please try again.".into()
        )),
        1
    );
}

#[tokio::test(start_paused = true)]
async fn test_invalid_submit_shakes_then_settles() {
    let ui = RecordingUi::default();
    let transport = ScriptedTransport::succeeding(Duration::from_secs(2));
    let mut form = ContactForm::new(ui.clone(), transport.clone()).unwrap();
    let start = Instant::now();

    assert_eq!(form.submit(), SubmitAttempt::Invalid);
    assert_eq!(ui.count(&UiCall::Shake(true)), 1);
    assert_eq!(form.submission_state(), &SubmissionState::Idle);

    wait_for(&mut form, is_timer(TaskKey::Shake)).await;
    assert_eq!(start.elapsed(), Duration::from_millis(500));
    assert_eq!(ui.count(&UiCall::Shake(false)), 1);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_shake_does_not_block_next_submit() {
    let ui = RecordingUi::default();
    let transport = ScriptedTransport::succeeding(Duration::from_secs(2));
    let mut form = ContactForm::new(ui.clone(), transport.clone()).unwrap();

    assert_eq!(form.submit(), SubmitAttempt::Invalid);
    fill_valid(&mut form);
    // Shake is still active; submission goes ahead anyway.
    assert_eq!(form.submit(), SubmitAttempt::Started);

    wait_for(&mut form, is_settled).await;
    assert_eq!(transport.calls(), 1);
    assert_eq!(ui.count(&UiCall::Shake(false)), 1);
}

#[tokio::test(start_paused = true)]
async fn test_repeated_invalid_submits_rearm_shake() {
    let ui = RecordingUi::default();
    let mut form = ContactForm::new(
        ui.clone(),
        ScriptedTransport::succeeding(Duration::from_secs(2)),
    )
    .unwrap();
    let start = Instant::now();

    form.submit();
    tokio::time::advance(Duration::from_millis(300)).await;
    form.submit();

    wait_for(&mut form, is_timer(TaskKey::Shake)).await;
    assert_eq!(start.elapsed(), Duration::from_millis(800));
    assert_eq!(ui.count(&UiCall::Shake(true)), 2);
    assert_eq!(ui.count(&UiCall::Shake(false)), 1);
}

#[tokio::test(start_paused = true)]
async fn test_transport_receives_trimmed_values() {
    let transport = ScriptedTransport::succeeding(Duration::from_secs(2));
    let mut form = ContactForm::new(RecordingUi::default(), transport.clone()).unwrap();
    fill_valid(&mut form);
    form.input("name", "  Ada Lovelace ").unwrap();

    form.submit();
    wait_for(&mut form, is_settled).await;

    let sent = transport.received().remove(0);
    assert_eq!(sent.get("name"), Some("Ada Lovelace"));
    assert_eq!(sent.len(), 4);
}
