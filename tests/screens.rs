//! Screen flows driven through the app with recording collaborators.

mod common;

use common::{ctrl, press, type_text, Recorder};
use crossterm::event::KeyCode;
use mindfulbet::models::{Limits, Money, Mood};
use mindfulbet::state::ScreenState;
use mindfulbet::widgets::ToastVariant;
use mindfulbet::App;

fn toast(app: &App) -> (ToastVariant, String) {
    let toast = app.toasts().current().expect("a toast should be showing");
    (toast.variant, toast.message.clone())
}

/// Select "Ansioso", describe the trigger and leave the field.
fn fill_journal(app: &mut App, text: &str) {
    app.navigate_to("journal");
    press(app, KeyCode::Right);
    press(app, KeyCode::Right);
    press(app, KeyCode::Enter);
    press(app, KeyCode::Down);
    press(app, KeyCode::Enter);
    type_text(app, text);
    press(app, KeyCode::Esc);
}

#[test]
fn test_time_limit_accepts_only_digits() {
    let recorder = Recorder::new();
    let mut app = recorder.app();
    app.navigate_to("limits");
    press(&mut app, KeyCode::Enter);

    type_text(&mut app, "abc");
    assert_eq!(app.screen().as_limits().unwrap().time_limit_text(), "");

    type_text(&mut app, "45");
    assert_eq!(app.screen().as_limits().unwrap().time_limit_text(), "45");

    // Still there after moving around the form
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.screen().as_limits().unwrap().time_limit_text(), "45");
    assert!(recorder.saved_limits().is_empty());
}

#[test]
fn test_save_limits_from_button() {
    let recorder = Recorder::new();
    let mut app = recorder.app();
    app.navigate_to("limits");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "90");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "200");
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        recorder.saved_limits(),
        vec![Limits {
            time_limit_minutes: Some(90),
            spending_limit: Some(Money::from_reais(200)),
        }]
    );
    assert_eq!(toast(&app).0, ToastVariant::Success);
    // Values stay so the user sees what was saved
    assert_eq!(app.screen().as_limits().unwrap().time_limit_text(), "90");
}

#[test]
fn test_save_limits_with_ctrl_s_while_editing() {
    let recorder = Recorder::new();
    let mut app = recorder.app();
    app.navigate_to("limits");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "45");
    app.handle_event(ctrl('s')).unwrap();

    assert_eq!(recorder.saved_limits().len(), 1);
    assert_eq!(recorder.saved_limits()[0].time_limit_minutes, Some(45));
    assert_eq!(recorder.saved_limits()[0].spending_limit, None);
}

#[test]
fn test_journal_entry_is_saved_once() {
    let recorder = Recorder::new();
    let mut app = recorder.app();
    fill_journal(&mut app, "vi um anúncio");

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let entries = recorder.saved_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mood, Mood::Anxious);
    assert_eq!(entries[0].text, "vi um anúncio");
    assert_eq!(toast(&app).0, ToastVariant::Success);

    let journal = app.screen().as_journal().unwrap();
    assert_eq!(journal.selected_mood(), None);
    assert_eq!(journal.trigger_text(), "");
}

#[test]
fn test_journal_without_mood_is_not_saved() {
    let recorder = Recorder::new();
    let mut app = recorder.app();
    app.navigate_to("journal");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "tédio");
    app.handle_event(ctrl('s')).unwrap();

    assert!(recorder.saved_entries().is_empty());
    assert_eq!(toast(&app).0, ToastVariant::Warning);
    assert_eq!(app.screen().as_journal().unwrap().trigger_text(), "tédio");
}

#[test]
fn test_failed_save_can_be_retried() {
    let recorder = Recorder::new();
    let mut app = recorder.app();
    fill_journal(&mut app, "fim de semana");
    recorder.fail_next_save("disco cheio");

    app.handle_event(ctrl('s')).unwrap();
    let (variant, message) = toast(&app);
    assert_eq!(variant, ToastVariant::Error);
    assert!(message.contains("disco cheio"), "{message}");
    assert!(message.contains("Ctrl+S"), "{message}");
    assert!(recorder.saved_entries().is_empty());
    assert_eq!(
        app.screen().as_journal().unwrap().trigger_text(),
        "fim de semana"
    );

    app.handle_event(ctrl('s')).unwrap();
    assert_eq!(recorder.saved_entries().len(), 1);
    assert_eq!(toast(&app).0, ToastVariant::Success);
}

#[test]
fn test_second_support_link_opens_cvv() {
    let recorder = Recorder::new();
    let mut app = recorder.app();
    app.navigate_to("support");

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(recorder.opened_uris(), vec!["https://www.cvv.org.br"]);
}

#[test]
fn test_open_failure_warns_and_keeps_running() {
    let recorder = Recorder::new();
    let mut app = recorder.app();
    app.navigate_to("support");
    recorder.fail_opens(1);

    press(&mut app, KeyCode::Enter);
    let (variant, message) = toast(&app);
    assert_eq!(variant, ToastVariant::Warning);
    assert!(message.contains("https://www.gamblersanonymous.org"), "{message}");
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Enter);
    assert_eq!(recorder.opened_uris().len(), 2);
}

#[test]
fn test_panic_button_notifies_responder() {
    let recorder = Recorder::new();
    let mut app = recorder.app();
    app.navigate_to("panicButton");

    press(&mut app, KeyCode::Enter);

    assert_eq!(recorder.panic_activations(), 1);
    let (variant, message) = toast(&app);
    assert_eq!(variant, ToastVariant::Info);
    assert!(message.contains("Suporte"), "{message}");
}

#[test]
fn test_unavailable_figure_can_be_refreshed() {
    let recorder = Recorder::new();
    recorder.fail_losses(1);
    let mut app = recorder.app();

    let (variant, message) = toast(&app);
    assert_eq!(variant, ToastVariant::Error);
    assert!(message.contains("Pressione R"), "{message}");
    match app.screen() {
        ScreenState::Dashboard(dashboard) => {
            assert_eq!(dashboard.metrics().monthly_losses, None);
            assert_eq!(dashboard.metrics().days_without_playing, Some(15));
        }
        other => panic!("expected dashboard, got {:?}", other.destination()),
    }

    press(&mut app, KeyCode::Char('r'));

    assert_eq!(toast(&app).0, ToastVariant::Info);
    match app.screen() {
        ScreenState::Dashboard(dashboard) => {
            assert_eq!(dashboard.metrics().losses_display(), "R$ 520,00");
        }
        other => panic!("expected dashboard, got {:?}", other.destination()),
    }
}
