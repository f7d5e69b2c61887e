//! Behavioral tests for the toast queue

use solofit_core::{AuthForm, Notice, NoticeLevel};

use crate::state::{ToastQueue, rejection_notice};

// ============================================================================
// PASSWORD RESET NOTICE BEHAVIORS
// ============================================================================

#[test]
fn given_empty_email_when_reset_requested_then_email_required_toast_queued() {
    // Given
    let mut form = AuthForm::default();
    let mut queue = ToastQueue::default();

    // When
    if let Some(notice) = rejection_notice(&form.request_password_reset()) {
        queue.push(notice);
    }

    // Then
    let toast = &queue.toasts()[0];
    assert_eq!(toast.notice.level, NoticeLevel::Error);
    assert_eq!(toast.notice.title, "Email Required");
    assert_eq!(toast.notice.description, "Please enter your email address first.");
}

#[test]
fn given_invalid_email_when_reset_requested_then_invalid_email_toast_queued() {
    // Given
    let mut form = AuthForm::default();
    form.set_email("user@");
    let mut queue = ToastQueue::default();

    // When
    if let Some(notice) = rejection_notice(&form.request_password_reset()) {
        queue.push(notice);
    }

    // Then
    assert_eq!(queue.toasts().len(), 1);
    assert_eq!(queue.toasts()[0].notice.title, "Invalid Email");
    assert_eq!(form.email_error(), None, "Reset problems never render inline");
}

#[test]
fn given_invalid_email_when_signing_in_then_error_stays_inline_and_nothing_queued() {
    // Given
    let mut form = AuthForm::default();
    form.set_email("user@");
    form.set_password("whatever");
    let mut queue = ToastQueue::default();

    // When
    if let Some(notice) = rejection_notice(&form.submit_sign_in()) {
        queue.push(notice);
    }

    // Then
    assert!(queue.toasts().is_empty(), "Field errors never reach the toast surface");
    assert!(form.email_error().is_some());
}

#[test]
fn given_pending_form_when_submitting_again_then_nothing_queued() {
    // Given
    let mut form = AuthForm::default();
    form.set_email("user@example.com");
    form.set_password("password1");
    assert!(form.submit_sign_in().is_ok());

    // When
    let second = form.submit_sign_in();

    // Then
    assert!(second.is_err());
    assert_eq!(rejection_notice(&second), None);
}

// ============================================================================
// QUEUE BEHAVIORS
// ============================================================================

#[test]
fn given_full_queue_when_pushing_then_oldest_dropped() {
    let mut queue = ToastQueue::default();
    let first = queue.push(Notice::info("first", ""));
    for n in 0..ToastQueue::MAX_VISIBLE {
        queue.push(Notice::info(format!("later {n}"), ""));
    }

    assert_eq!(queue.toasts().len(), ToastQueue::MAX_VISIBLE);
    assert!(!queue.dismiss(first), "Oldest toast should already be gone");
}
