//! Application shell.
//!
//! Owns the navigation controller, the mounted screen and the collaborators.
//! Every frame is laid out as screen content, a key hint line and the
//! bottom navigation bar. The app can be driven without a terminal: feed it
//! events with [`App::handle_event`] and draw it into any ratatui frame.

use crate::components::{BottomNav, Footer, HelpOverlay, BOTTOM_NAV_HEIGHT};
use crate::config::Config;
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::{RenderContext, ScreenAction, ScreenContext};
use crate::services::{ServiceError, Services};
use crate::state::{Destination, NavigationController, NavigationOutcome, ScreenState};
use crate::styles::theme;
use crate::tui::Tui;
use crate::utils::path::format_path_for_display;
use crate::utils::{create_standard_layout, TextInput};
use crate::widgets::ToastManager;
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct App {
    config: Config,
    config_path: Option<PathBuf>,
    icons: Icons,
    services: Services,
    nav: NavigationController,
    screen: ScreenState,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
    /// Bottom bar area from the last draw, for mouse hit-testing
    nav_area: Rect,
}

impl App {
    /// Create the shell positioned on the dashboard.
    pub fn new(config: Config, services: Services) -> Self {
        let icons = Icons::from_config(&config);
        let mut app = Self {
            config,
            config_path: None,
            icons,
            services,
            nav: NavigationController::new(),
            screen: ScreenState::default(),
            toasts: ToastManager::new(),
            show_help: false,
            should_quit: false,
            nav_area: Rect::default(),
        };
        app.enter_screen();
        app
    }

    /// Path shown in the help overlay as the place to edit keybindings.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn with_icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }

    pub fn current_destination(&self) -> Destination {
        self.nav.current_destination()
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn is_help_shown(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Navigate to the destination registered under `route`.
    ///
    /// Unknown routes and the current route leave the mounted screen alone.
    pub fn navigate_to(&mut self, route: &str) -> NavigationOutcome {
        let outcome = self.nav.navigate_to(route);
        self.remount_if_changed(outcome);
        outcome
    }

    pub fn navigate(&mut self, dest: Destination) -> NavigationOutcome {
        let outcome = self.nav.navigate(dest);
        self.remount_if_changed(outcome);
        outcome
    }

    fn remount_if_changed(&mut self, outcome: NavigationOutcome) {
        if let NavigationOutcome::Changed { to, .. } = outcome {
            self.mount(to);
        }
    }

    /// Replace the mounted screen, dropping the old screen's form state.
    fn mount(&mut self, dest: Destination) {
        let ctx = ScreenContext::new(&self.config);
        if let Err(e) = self.screen.as_screen_mut().on_exit(&ctx) {
            warn!("Failed to leave {}: {:#}", self.screen.destination().route(), e);
        }
        self.screen = ScreenState::for_destination(dest);
        self.enter_screen();
    }

    fn enter_screen(&mut self) {
        if self.screen.destination() == Destination::Dashboard {
            self.refresh_metrics();
        }
        let ctx = ScreenContext::new(&self.config);
        if let Err(e) = self.screen.as_screen_mut().on_enter(&ctx) {
            warn!("Failed to enter {}: {:#}", self.screen.destination().route(), e);
        }
    }

    /// Load the dashboard figures. Returns false if any of them failed.
    fn refresh_metrics(&mut self) -> bool {
        let (metrics, failure) = self.services.tracker.dashboard_metrics();
        if let Some(dashboard) = self.screen.as_dashboard_mut() {
            dashboard.set_metrics(metrics);
        }
        match failure {
            Some(e) => {
                self.report_error(&e, Action::Refresh);
                false
            }
            None => true,
        }
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!("Started on {}", self.current_destination().route());

        let result = self.event_loop(tui);

        let ctx = ScreenContext::new(&self.config);
        if let Err(e) = self.screen.as_screen_mut().on_exit(&ctx) {
            warn!("Failed to leave {}: {:#}", self.screen.destination().route(), e);
        }
        tui.exit()?;
        info!("Exiting");
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        while !self.should_quit {
            self.toasts.tick();
            tui.terminal_mut().draw(|frame| self.draw(frame))?;
            if let Some(event) = tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(event)?;
            }
        }
        Ok(())
    }

    /// Draw the whole shell into `frame`.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme().background_style()), area);

        let (content, bottom) = create_standard_layout(area, BOTTOM_NAV_HEIGHT + 1);
        let footer_area = Rect { height: 1u16.min(bottom.height), ..bottom };
        self.nav_area = Rect {
            y: bottom.y + footer_area.height,
            height: bottom.height - footer_area.height,
            ..bottom
        };

        let ctx = RenderContext::new(&self.config, &self.icons);
        if let Err(e) = self.screen.as_screen_mut().render(frame, content, &ctx) {
            error!("Failed to render {}: {:#}", self.screen.destination().route(), e);
        }

        Footer::render(frame, footer_area, &self.footer_text());
        frame.render_widget(
            BottomNav::new(self.current_destination(), self.icons),
            self.nav_area,
        );
        self.toasts.render(frame, content);

        if self.show_help {
            let config_path = self
                .config_path
                .as_deref()
                .map(format_path_for_display)
                .unwrap_or_else(|| "config.toml".to_string());
            HelpOverlay::render(frame, area, &self.config.keymap, &config_path);
        }
    }

    fn footer_text(&self) -> String {
        let keymap = &self.config.keymap;
        let hints = self.screen.as_screen().footer_hints(keymap);
        if hints.is_empty() {
            keymap.footer_global()
        } else {
            format!("{} | {}", hints, keymap.footer_global())
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => Ok(()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.show_help {
            self.show_help = false;
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        if let Some(action) = self.config.keymap.action_for(&key) {
            let global_allowed = if self.screen.is_input_focused() {
                // Plain characters belong to the field being edited
                let plain_char = matches!(key.code, KeyCode::Char(_))
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
                !plain_char && TextInput::is_action_allowed_when_focused(&action)
            } else {
                true
            };
            if global_allowed && self.handle_global_action(action) {
                return Ok(());
            }
        }

        let ctx = ScreenContext::new(&self.config);
        let action = self
            .screen
            .as_screen_mut()
            .handle_event(Event::Key(key), &ctx)?;
        self.apply(action);
        Ok(())
    }

    /// Actions the shell handles for every screen. Returns true if consumed.
    fn handle_global_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::NextScreen => {
                let outcome = self.nav.next();
                self.remount_if_changed(outcome);
            }
            Action::PrevScreen => {
                let outcome = self.nav.previous();
                self.remount_if_changed(outcome);
            }
            other => match other.destination() {
                Some(dest) => {
                    self.navigate(dest);
                }
                None => return false,
            },
        }
        true
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        if self.show_help {
            self.show_help = false;
            return Ok(());
        }
        if let Some(dest) = BottomNav::item_at(self.nav_area, mouse.column, mouse.row) {
            self.navigate(dest);
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config);
        let action = self
            .screen
            .as_screen_mut()
            .handle_event(Event::Mouse(mouse), &ctx)?;
        self.apply(action);
        Ok(())
    }

    /// Carry out what a screen asked for.
    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(dest) => {
                self.navigate(dest);
            }
            ScreenAction::SaveLimits(limits) => {
                match self.services.tracker.save_limits(&limits) {
                    Ok(()) => {
                        info!("Limits saved");
                        self.screen.as_screen_mut().on_saved();
                        self.toasts.success("Limites salvos.");
                    }
                    Err(e) => self.report_error(&e, Action::Save),
                }
            }
            ScreenAction::SaveEntry(entry) => {
                match self.services.tracker.save_journal_entry(&entry) {
                    Ok(()) => {
                        info!("Journal entry saved");
                        self.screen.as_screen_mut().on_saved();
                        self.toasts.success("Entrada salva no diário.");
                    }
                    Err(e) => self.report_error(&e, Action::Save),
                }
            }
            ScreenAction::RefreshMetrics => {
                if self.refresh_metrics() {
                    self.toasts.info("Dados atualizados.");
                }
            }
            ScreenAction::PanicActivated => {
                match self.services.panic_responder.on_panic_activated() {
                    Ok(()) => self.toasts.info(format!(
                        "Respire fundo. Contatos de ajuda em {} ({}).",
                        Destination::Support.title(),
                        self.config
                            .keymap
                            .get_key_display_for_action(Action::ShowSupport)
                    )),
                    Err(e) => self.report_error(&e, Action::Confirm),
                }
            }
            ScreenAction::OpenUri(url) => {
                if let Err(e) = self.services.uri_opener.open_external_uri(&url) {
                    self.report_error(&e, Action::Confirm);
                }
            }
            ScreenAction::ShowWarning(message) => self.toasts.warning(message),
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Quit => self.should_quit = true,
        }
    }

    /// Log a collaborator failure and tell the user about it.
    ///
    /// Retryable failures name the key that repeats the action.
    fn report_error(&mut self, e: &ServiceError, retry: Action) {
        match e {
            ServiceError::ExternalOpen { url, source } => {
                warn!("Failed to open {}: {}", url, source);
                self.toasts.warning(format!("{}.", e));
            }
            _ if e.is_retryable() => {
                error!("{}", e);
                self.toasts.error(format!(
                    "Erro: {}. Pressione {} para tentar novamente.",
                    e,
                    self.config.keymap.get_key_display_for_action(retry)
                ));
            }
            _ => {
                error!("{}", e);
                self.toasts.error(format!("Erro: {}.", e));
            }
        }
    }
}
