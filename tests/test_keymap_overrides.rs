mod common;

use common::press;
use crossterm::event::{KeyCode, KeyModifiers};
use mindfulbet::config::Config;
use mindfulbet::keymap::{Action, KeyBinding, Keymap, KeymapPreset};
use mindfulbet::services::Services;
use mindfulbet::{App, Destination};
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'x' quits instead of 'q'; 'w' moves up instead of 'k'
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::MoveUp));
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    let keymap = &loaded.keymap;
    assert_eq!(
        keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
    // Overridden actions lose their preset keys
    assert_eq!(keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
    assert_eq!(keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
    assert_eq!(
        keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_screen_jump_can_be_rebound() {
    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f4", Action::ShowPanicButton));
    let mut app = App::new(config, Services::default());

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.current_destination(), Destination::Dashboard);

    press(&mut app, KeyCode::F(4));
    assert_eq!(app.current_destination(), Destination::PanicButton);
}

#[test]
fn test_overridden_quit_key_drives_the_app() {
    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+q", Action::Quit));
    let mut app = App::new(config, Services::default());

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());

    app.handle_event(crossterm::event::Event::Key(
        crossterm::event::KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    ))
    .unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_display_reflects_overrides() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![
            KeyBinding::new("w", Action::MoveUp),
            KeyBinding::new("ctrl+r", Action::Refresh),
        ],
    };

    let nav_display = keymap.navigation_display();
    assert_eq!(nav_display, "W/J");
    assert_eq!(keymap.get_key_display_for_action(Action::Refresh), "Ctrl+R");
    assert_eq!(keymap.get_key_display_for_action(Action::Confirm), "Enter");
    assert_eq!(keymap.screens_display(), "1-5");
}

#[test]
fn test_example_config_loads() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
theme = "light"
icon_set = "ascii"

[keymap]
preset = "emacs"

[[keymap.overrides]]
key = "f1"
action = "help"

[[keymap.overrides]]
key = "ctrl+j"
action = "show_journal"
"#,
    )
    .unwrap();

    let config = Config::load_or_create(&config_path).unwrap();
    assert_eq!(config.theme, "light");
    assert_eq!(config.icon_set, "ascii");
    assert_eq!(config.keymap.preset, KeymapPreset::Emacs);
    assert_eq!(
        config.keymap.get_action(KeyCode::F(1), KeyModifiers::NONE),
        Some(Action::Help)
    );
    assert_eq!(
        config
            .keymap
            .get_action(KeyCode::Char('j'), KeyModifiers::CONTROL),
        Some(Action::ShowJournal)
    );
    // The preset's '3' is shadowed by the override
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('3'), KeyModifiers::NONE),
        None
    );
}

#[test]
fn test_serialization_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Emacs;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f1", Action::Help));
    config.save(&config_path).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[keymap]"));
    assert!(content.contains("preset = \"emacs\""));
    assert!(content.contains("action = \"help\""));
}
