//! Drawing the shell into a test backend.

mod common;

use common::{press, Recorder};
use crossterm::event::KeyCode;
use mindfulbet::icons::{IconSet, Icons};
use mindfulbet::styles::theme;
use mindfulbet::App;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn render(app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
}

fn screen_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn ascii_app(recorder: &Recorder) -> App {
    recorder.app().with_icons(Icons::with_icon_set(IconSet::Ascii))
}

/// Column where `title` is drawn on the bar's title row.
fn title_column(buf: &Buffer, title: &str) -> u16 {
    let row: Vec<&str> = (0..buf.area.width).map(|x| buf[(x, HEIGHT - 1)].symbol()).collect();
    let first = title.chars().next().unwrap().to_string();
    (0..row.len())
        .find(|&x| {
            row[x] == first
                && title
                    .chars()
                    .enumerate()
                    .all(|(i, c)| row.get(x + i).is_some_and(|s| *s == c.to_string()))
        })
        .unwrap_or_else(|| panic!("{title} not on the bar")) as u16
}

#[test]
fn test_dashboard_shows_figures() {
    let recorder = Recorder::new();
    let mut app = ascii_app(&recorder);
    let text = screen_text(&render(&mut app));

    assert!(text.contains("15"), "{text}");
    assert!(text.contains("2h 45min"), "{text}");
    assert!(text.contains("R$ 520,00"), "{text}");
}

#[test]
fn test_bar_lists_every_destination() {
    let recorder = Recorder::new();
    let mut app = ascii_app(&recorder);
    let buf = render(&mut app);
    let titles = row_text(&buf, HEIGHT - 1);

    for title in ["Dashboard", "Limites", "Diário", "Pânico", "Suporte"] {
        assert!(titles.contains(title), "{title} missing from {titles:?}");
    }
}

#[test]
fn test_bar_highlights_current_destination() {
    let recorder = Recorder::new();
    let mut app = ascii_app(&recorder);
    app.navigate_to("limits");
    let buf = render(&mut app);

    let highlight = theme().highlight_style().bg.unwrap();
    let limits = title_column(&buf, "Limites");
    let dashboard = title_column(&buf, "Dashboard");
    assert_eq!(buf[(limits, HEIGHT - 1)].bg, highlight);
    assert_ne!(buf[(dashboard, HEIGHT - 1)].bg, highlight);
}

#[test]
fn test_each_screen_draws_its_content() {
    let recorder = Recorder::new();
    let mut app = ascii_app(&recorder);

    for (route, expected) in [
        ("limits", "Definir Limites"),
        ("journal", "Ansioso"),
        ("panicButton", "Sugestões"),
        ("support", "https://www.cvv.org.br"),
    ] {
        app.navigate_to(route);
        let text = screen_text(&render(&mut app));
        assert!(text.contains(expected), "{route}: {text}");
    }
}

#[test]
fn test_help_overlay_lists_bindings() {
    let recorder = Recorder::new();
    let mut app = ascii_app(&recorder);
    press(&mut app, KeyCode::Char('?'));
    let text = screen_text(&render(&mut app));

    assert!(text.contains("Atalhos - Standard"), "{text}");
    assert!(text.contains("Quit"), "{text}");
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let recorder = Recorder::new();
    let mut app = ascii_app(&recorder);
    let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
    for route in ["dashboard", "limits", "journal", "panicButton", "support"] {
        app.navigate_to(route);
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }
}
