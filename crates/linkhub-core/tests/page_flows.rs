use linkhub_core::{
    BackToTop, HubConfig, NewsletterForm, NewsletterSubmission, NotificationKind,
    NotificationLifecycle, NotificationPhase, RevealDecision, RevealTracker, SubmissionOutcome,
    SubmitDecision, is_valid_email,
};

#[test]
fn email_contract_examples() {
    assert!(is_valid_email("user@example.com"));
    for rejected in ["user@", "@example.com", "plainstring"] {
        assert!(!is_valid_email(rejected), "{rejected} should be rejected");
    }
}

#[test]
fn back_to_top_tracks_offset_across_a_scroll_session() {
    let config = HubConfig::default();
    let mut control = BackToTop::new(
        config.back_to_top_offset_px,
        config.timings.scroll_throttle_ms,
    );

    let samples = [
        (0.0, 0.0, Some(false)),
        (40.0, 280.0, None),
        (120.0, 301.0, Some(true)),
        (180.0, 900.0, None),
        (240.0, 300.0, Some(false)),
        (400.0, 1_200.0, Some(true)),
    ];
    for (now_ms, offset, expected) in samples {
        assert_eq!(control.on_scroll(now_ms, offset), expected, "at {now_ms}ms");
    }
}

#[test]
fn reveal_fires_once_per_element() {
    let mut tracker = RevealTracker::default();
    for key in 0..4 {
        tracker.register(key);
    }

    // A batch where element 2 shows up twice and element 3 is still offscreen.
    let batch = [(0, true), (2, true), (2, true), (3, false)];
    let revealed: Vec<u32> = batch
        .iter()
        .filter(|(key, hit)| tracker.on_entry(*key, *hit) == RevealDecision::Reveal)
        .map(|(key, _)| *key)
        .collect();
    assert_eq!(revealed, vec![0, 2]);

    assert_eq!(tracker.on_entry(0, true), RevealDecision::Ignore);
    assert_eq!(tracker.on_entry(3, true), RevealDecision::Reveal);
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn valid_signup_succeeds_after_simulated_delay_and_clears_form() {
    let config = HubConfig::default();
    assert_eq!(
        config.newsletter,
        NewsletterSubmission::Simulated { delay_ms: 2_000 }
    );

    let mut form = NewsletterForm::default();
    let decision = form.submit("user@example.com", "Inscrever", &config.messages);
    assert!(matches!(decision, SubmitDecision::Accepted { .. }));

    let completion = form
        .complete(SubmissionOutcome::Succeeded, &config.messages)
        .expect("signup in flight");
    assert_eq!(completion.notification.kind, NotificationKind::Success);
    assert!(completion.reset_form);
    assert_eq!(completion.restore_label_html, "Inscrever");
}

#[test]
fn invalid_signup_shows_error_and_leaves_form_alone() {
    let config = HubConfig::default();
    let mut form = NewsletterForm::default();

    let decision = form.submit("plainstring", "Inscrever", &config.messages);
    let SubmitDecision::Rejected(notification) = decision else {
        unreachable!("invalid email must be rejected");
    };
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(!form.is_submitting());
}

#[test]
fn untouched_notification_is_gone_within_five_point_three_seconds() {
    let config = HubConfig::default();
    let mut lifecycle = NotificationLifecycle::new(&config.timings);
    assert!(lifecycle.removal_deadline_ms() <= 5_300);

    lifecycle.advance_untouched(lifecycle.removal_deadline_ms());
    assert_eq!(lifecycle.phase(), NotificationPhase::Removed);
}
