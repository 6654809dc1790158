// ABOUTME: Unit tests for AppState and the App lifecycle wrapper to ensure
// questionnaire state management and notification pruning work correctly

use anxcheck::app::state::{Notification, NotificationType};
use anxcheck::app::{App, AppState};
use anxcheck::models::{question_count, TriggerCategory};
use std::time::Duration;

fn create_test_state() -> AppState {
    let mut state = AppState::default();
    // Pin the preferences so ambient config files cannot change test behavior
    state.config.ui_preferences.confirm_restart = false;
    state.config.ui_preferences.show_trigger_count = true;
    state
}

#[test]
fn test_app_state_creation() {
    let state = AppState::new();

    // AppState::new() should create a fresh questionnaire at the first step
    assert_eq!(state.questionnaire.current_step, 0);
    assert!(!state.questionnaire.show_results);
    assert_eq!(state.questionnaire.answers.total_selected(), 0);
    assert!(!state.should_quit);
    assert!(!state.help_visible);
    assert!(state.confirmation_dialog.is_none());
    assert!(state.notifications.is_empty());
    assert!(!state.ui_needs_refresh);
}

#[test]
fn test_full_walkthrough_reaches_results() {
    let mut state = create_test_state();

    state.toggle_current_option();
    for _ in 0..question_count() {
        state.advance_questionnaire();
    }

    assert!(state.questionnaire.show_results);
    assert_eq!(state.questionnaire.answers.total_selected(), 1);
    assert!(state
        .questionnaire
        .answers
        .is_selected(TriggerCategory::Situational, "Vorbitul în public"));
}

#[test]
fn test_restart_resets_questionnaire_and_notifies() {
    let mut state = create_test_state();

    state.toggle_current_option();
    for _ in 0..question_count() {
        state.advance_questionnaire();
    }
    assert!(state.questionnaire.show_results);

    state.request_restart();

    assert!(!state.questionnaire.show_results);
    assert_eq!(state.questionnaire.current_step, 0);
    assert_eq!(state.questionnaire.answers.total_selected(), 0);
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(
        state.notifications[0].notification_type,
        NotificationType::Success
    );
}

#[test]
fn test_notification_lifecycle() {
    let mut state = AppState::default();

    state.add_success_notification("done".to_string());
    state.add_error_notification("broken".to_string());
    state.add_warning_notification("careful".to_string());
    state.add_info_notification("fyi".to_string());

    assert_eq!(state.notifications.len(), 4);
    assert_eq!(state.get_current_notifications().len(), 4);

    // Nothing has expired yet, so cleanup keeps all four
    state.cleanup_expired_notifications();
    assert_eq!(state.notifications.len(), 4);
    assert!(!state.ui_needs_refresh);
}

#[test]
fn test_expired_notifications_are_pruned() {
    let mut state = AppState::default();

    let mut short_lived = Notification::info("gone soon".to_string());
    short_lived.duration = Duration::from_millis(1);
    state.add_notification(short_lived);
    state.add_success_notification("stays".to_string());

    std::thread::sleep(Duration::from_millis(10));
    state.cleanup_expired_notifications();

    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].message, "stays");
    assert!(state.ui_needs_refresh, "Pruning should request a redraw");
}

#[tokio::test]
async fn test_app_init_succeeds() {
    let mut app = App::new();
    app.init().await.expect("init should not fail");

    assert_eq!(app.state.questionnaire.current_step, 0);
    assert!(!app.state.should_quit);
}

#[tokio::test]
async fn test_app_tick_prunes_expired_notifications() {
    let mut app = App::new();

    let mut short_lived = Notification::success("flash".to_string());
    short_lived.duration = Duration::from_millis(1);
    app.state.add_notification(short_lived);

    tokio::time::sleep(Duration::from_millis(10)).await;
    app.tick().await.expect("tick should not fail");

    assert!(app.state.notifications.is_empty());
    assert!(app.needs_ui_refresh(), "Tick pruning should request a redraw");
}

#[tokio::test]
async fn test_needs_ui_refresh_clears_on_read() {
    let mut app = App::new();

    assert!(!app.needs_ui_refresh());

    app.state.ui_needs_refresh = true;
    assert!(app.needs_ui_refresh());
    assert!(!app.needs_ui_refresh(), "The flag is one-shot");
}

#[tokio::test]
async fn test_tick_leaves_questionnaire_untouched() {
    let mut app = App::new();
    app.state.config.ui_preferences.confirm_restart = false;

    app.state.toggle_current_option();
    app.state.advance_questionnaire();

    app.tick().await.expect("tick should not fail");

    assert_eq!(app.state.questionnaire.current_step, 1);
    assert_eq!(app.state.questionnaire.answers.total_selected(), 1);
}
