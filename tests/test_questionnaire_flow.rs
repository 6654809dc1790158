// ABOUTME: End-to-end questionnaire flow tests driving the event handler with key events

use anxcheck::app::{AppState, EventHandler};
use anxcheck::models::feedback::advice;
use anxcheck::models::{generate_feedback, question_count, TriggerCategory, NO_TRIGGERS_MESSAGE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

/// Simulate a key press and process the resulting event
fn press(state: &mut AppState, code: KeyCode) {
    let key_event = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(event) = EventHandler::handle_key_event(key_event, state) {
        EventHandler::process_event(event, state);
    }
}

fn create_test_state() -> AppState {
    let mut state = AppState::default();
    // Pin the preferences so ambient config files cannot change test behavior
    state.config.ui_preferences.confirm_restart = false;
    state.config.ui_preferences.show_trigger_count = true;
    state
}

#[test]
fn test_five_advances_reach_results() {
    let mut state = create_test_state();

    for step in 0..question_count() {
        assert_eq!(state.questionnaire.current_step, step);
        assert!(!state.questionnaire.show_results);
        press(&mut state, KeyCode::Enter);
    }

    assert!(state.questionnaire.show_results);
}

#[test]
fn test_selections_survive_navigation() {
    let mut state = create_test_state();

    // Check the first option of question 1, move to question 2, check one there
    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Char(' '));

    // Walk back and forward again
    press(&mut state, KeyCode::Left);
    assert_eq!(state.questionnaire.current_step, 0);
    assert!(state
        .questionnaire
        .answers
        .is_selected(TriggerCategory::Situational, "Vorbitul în public"));

    press(&mut state, KeyCode::Enter);
    assert!(state
        .questionnaire
        .answers
        .is_selected(TriggerCategory::Environmental, "Zgomote puternice"));
    assert_eq!(state.questionnaire.answers.total_selected(), 2);
}

#[test]
fn test_retreat_stops_at_first_question() {
    let mut state = create_test_state();

    press(&mut state, KeyCode::Left);
    press(&mut state, KeyCode::Backspace);

    assert_eq!(state.questionnaire.current_step, 0);
    assert!(!state.questionnaire.show_results);
}

#[test]
fn test_results_screen_has_no_backward_navigation() {
    let mut state = create_test_state();

    for _ in 0..question_count() {
        press(&mut state, KeyCode::Enter);
    }
    assert!(state.questionnaire.show_results);

    press(&mut state, KeyCode::Left);
    press(&mut state, KeyCode::Backspace);

    assert!(state.questionnaire.show_results, "Results screen must not step back");
}

#[test]
fn test_restart_key_resets_everything() {
    let mut state = create_test_state();

    press(&mut state, KeyCode::Char(' '));
    for _ in 0..question_count() {
        press(&mut state, KeyCode::Enter);
    }
    assert!(state.questionnaire.show_results);

    press(&mut state, KeyCode::Char('r'));

    assert!(!state.questionnaire.show_results);
    assert_eq!(state.questionnaire.current_step, 0);
    assert_eq!(state.questionnaire.answers.total_selected(), 0);
}

#[test]
fn test_restart_with_confirmation_dialog() {
    let mut state = create_test_state();
    state.config.ui_preferences.confirm_restart = true;

    press(&mut state, KeyCode::Char(' '));
    for _ in 0..question_count() {
        press(&mut state, KeyCode::Enter);
    }

    // 'r' opens the dialog instead of restarting
    press(&mut state, KeyCode::Char('r'));
    assert!(state.confirmation_dialog.is_some());
    assert!(state.questionnaire.show_results);
    assert_eq!(state.questionnaire.answers.total_selected(), 1);

    // Switch to "Da" and confirm
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Enter);

    assert!(state.confirmation_dialog.is_none());
    assert!(!state.questionnaire.show_results);
    assert_eq!(state.questionnaire.answers.total_selected(), 0);
}

#[test]
fn test_no_selection_yields_zero_trigger_message() {
    let mut state = create_test_state();

    for _ in 0..question_count() {
        press(&mut state, KeyCode::Enter);
    }

    assert_eq!(generate_feedback(&state.questionnaire.answers), NO_TRIGGERS_MESSAGE);
}

#[test]
fn test_feedback_order_follows_categories_not_answer_order() {
    // Select emotional (question 5) before situational (question 1)
    let mut state = create_test_state();
    for _ in 0..4 {
        press(&mut state, KeyCode::Enter);
    }
    press(&mut state, KeyCode::Char(' '));
    for _ in 0..4 {
        press(&mut state, KeyCode::Left);
    }
    press(&mut state, KeyCode::Char(' '));
    for _ in 0..question_count() {
        press(&mut state, KeyCode::Enter);
    }

    let expected = format!(
        "{}\n\n{}",
        advice(TriggerCategory::Situational),
        advice(TriggerCategory::Emotional)
    );
    assert_eq!(generate_feedback(&state.questionnaire.answers), expected);
}

#[test]
fn test_any_option_in_a_category_yields_the_same_paragraph() {
    // First option of question 1
    let mut first = create_test_state();
    press(&mut first, KeyCode::Char(' '));

    // Third option of question 1
    let mut third = create_test_state();
    press(&mut third, KeyCode::Down);
    press(&mut third, KeyCode::Down);
    press(&mut third, KeyCode::Char(' '));

    assert_eq!(
        generate_feedback(&first.questionnaire.answers),
        generate_feedback(&third.questionnaire.answers)
    );
    assert_eq!(
        generate_feedback(&first.questionnaire.answers),
        advice(TriggerCategory::Situational)
    );
}

#[test]
fn test_double_toggle_is_a_noop() {
    let mut state = create_test_state();

    press(&mut state, KeyCode::Char(' '));
    press(&mut state, KeyCode::Char(' '));

    assert_eq!(state.questionnaire.answers.total_selected(), 0);
    assert_eq!(generate_feedback(&state.questionnaire.answers), NO_TRIGGERS_MESSAGE);
}

#[test]
fn test_cursor_moves_are_bounded_by_option_count() {
    let mut state = create_test_state();

    // Every question has three options; hammer the cursor past both ends
    for _ in 0..10 {
        press(&mut state, KeyCode::Down);
    }
    assert_eq!(state.questionnaire.cursor, 2);

    for _ in 0..10 {
        press(&mut state, KeyCode::Up);
    }
    assert_eq!(state.questionnaire.cursor, 0);
}
