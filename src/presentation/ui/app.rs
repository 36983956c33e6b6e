//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::services::DetailViewModel;
use crate::application::{
    DetailPresenter, ListPresenter, NotificationManager, SelectionPayload, StartupOutcome,
    StartupSequencer,
};
use crate::domain::keybinding::{Action, KeyContext, action_for, bindings_for};
use crate::domain::{Creature, ImageResolver, Locale, PreferencesPort, TextRef, TextResolver};
use crate::infrastructure::config::{AppConfig, ThemeMode};
use crate::presentation::events::{EventResult, is_resize, key_press};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{
    AboutPopup, DetailLabels, DetailScreen, ListScreen, ListScreenState, NotificationPopup,
    SettingsScreen, SettingsView, SplashScreen,
};
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, FooterItem, HeaderBar, HeaderBarStyle,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

/// Host settings the app needs beyond its ports.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Live locale at startup.
    pub locale: Locale,
    /// Skip the splash delay.
    pub native_splash: bool,
    /// Splash delay when there is no native splash.
    pub splash_delay: Duration,
    /// How long notices stay up.
    pub notification_duration: Duration,
    /// Accent color name or hex code.
    pub accent_color: String,
}

impl AppOptions {
    /// Takes the options from a merged config.
    #[must_use]
    pub fn from_config(config: &AppConfig, locale: Locale) -> Self {
        Self {
            locale,
            native_splash: config.native_splash,
            splash_delay: config.splash_delay(),
            notification_duration: config.notification_duration(),
            accent_color: config.theme.accent_color.clone(),
        }
    }
}

enum CurrentScreen {
    Splash(Box<SplashScreen>),
    List,
    Detail(Box<(DetailViewModel, DetailLabels)>),
    Settings(SettingsView),
}

impl CurrentScreen {
    const fn key_context(&self, about_open: bool) -> Option<KeyContext> {
        match self {
            Self::Splash(_) => None,
            Self::List if about_open => Some(KeyContext::About),
            Self::List => Some(KeyContext::List),
            Self::Detail(_) => Some(KeyContext::Detail),
            Self::Settings(_) => Some(KeyContext::Settings),
        }
    }
}

/// Terminal host owning the screens, ports and startup sequence.
pub struct App {
    text: Arc<dyn TextResolver>,
    images: Arc<dyn ImageResolver>,
    preferences: Arc<dyn PreferencesPort>,
    sequencer: StartupSequencer,
    screen: CurrentScreen,
    list: ListScreenState,
    notifications: NotificationManager,
    locale: Locale,
    accent_color: String,
    theme: Theme,
    pending_outcome: Option<StartupOutcome>,
    welcomed: bool,
    about_open: bool,
    running: bool,
}

impl App {
    /// Creates the app on the splash screen. Nothing runs until [`App::run`].
    #[must_use]
    pub fn new(
        text: Arc<dyn TextResolver>,
        images: Arc<dyn ImageResolver>,
        preferences: Arc<dyn PreferencesPort>,
        options: AppOptions,
    ) -> Self {
        let sequencer = StartupSequencer::new(preferences.clone(), options.native_splash)
            .with_delay(options.splash_delay);
        let list = ListScreenState::new(ListPresenter::new(
            text.clone(),
            images.clone(),
            options.locale,
        ));
        let subtitle = text.resolve(&TextRef::from_static("splash_subtitle"), options.locale);
        let theme = Theme::for_mode(ThemeMode::Light, &options.accent_color);
        let splash = SplashScreen::new(subtitle).style(theme.base_style);

        Self {
            text,
            images,
            preferences,
            sequencer,
            screen: CurrentScreen::Splash(Box::new(splash)),
            list,
            notifications: NotificationManager::new(options.notification_duration),
            locale: options.locale,
            accent_color: options.accent_color,
            theme,
            pending_outcome: None,
            welcomed: false,
            about_open: false,
            running: true,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(locale = %self.locale, "Application starting");

        if let Some(outcome) = self.sequencer.begin() {
            self.enter_list(outcome);
        }

        self.run_event_loop(terminal).await?;

        self.sequencer.cancel();
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                outcome = self.sequencer.wait_ready() => {
                    self.on_startup_ready(outcome);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    self.tick(ANIMATION_TICK_RATE);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(&event) == EventResult::Exit {
                        self.running = false;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn on_startup_ready(&mut self, outcome: StartupOutcome) {
        if let CurrentScreen::Splash(splash) = &mut self.screen {
            splash.set_ready();
            self.pending_outcome = Some(outcome);
        } else {
            self.enter_list(outcome);
        }
    }

    fn tick(&mut self, elapsed: Duration) {
        if let CurrentScreen::Splash(splash) = &mut self.screen {
            splash.tick(elapsed);
            if splash.state.animation_complete
                && let Some(outcome) = self.pending_outcome.take()
            {
                self.enter_list(outcome);
            }
        }
        self.notifications.tick();
    }

    /// Applies the startup outcome and replaces the splash with the list.
    fn enter_list(&mut self, outcome: StartupOutcome) {
        self.apply_theme(outcome.dark_mode);
        self.screen = CurrentScreen::List;

        if !self.welcomed {
            self.welcomed = true;
            let welcome = self.label("welcome");
            self.notifications.info(welcome);
        }
    }

    fn apply_theme(&mut self, dark_mode: bool) {
        self.theme = Theme::for_mode(ThemeMode::from_dark_mode(dark_mode), &self.accent_color);
        debug!(dark_mode, "Theme applied");
    }

    fn label(&self, key: &'static str) -> String {
        self.text.resolve(&TextRef::from_static(key), self.locale)
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        if is_resize(event) {
            return EventResult::Consumed;
        }
        match key_press(event) {
            Some(key) => self.handle_key(&key),
            None => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        let Some(context) = self.screen.key_context(self.about_open) else {
            // Splash: only quitting is possible.
            return match action_for(KeyContext::List, key) {
                Some(Action::Quit) => {
                    self.sequencer.cancel();
                    EventResult::Exit
                }
                _ => EventResult::Continue,
            };
        };

        match action_for(context, key) {
            Some(action) => self.handle_action(action),
            None => EventResult::Continue,
        }
    }

    fn handle_action(&mut self, action: Action) -> EventResult {
        match action {
            Action::Quit => return EventResult::Exit,
            Action::Back => self.screen = CurrentScreen::List,
            Action::ToggleAbout => self.about_open = !self.about_open,
            Action::OpenSettings => self.open_settings(),
            Action::ToggleDarkMode => self.toggle_dark_mode(),
            Action::ToggleLanguage => self.toggle_language(),
            Action::Select => {
                if let Some(event) = self.list.handle_action(Action::Select) {
                    self.open_detail(event.creature);
                }
            }
            Action::NavigateUp
            | Action::NavigateDown
            | Action::NavigateLeft
            | Action::NavigateRight => {
                self.list.handle_action(action);
            }
        }
        EventResult::Consumed
    }

    fn open_detail(&mut self, creature: &Creature) {
        let payload = SelectionPayload::pack(creature);
        let detail = payload.unpack(self.text.as_ref(), self.locale);
        let presenter = DetailPresenter::new(self.text.clone(), self.images.clone(), self.locale);
        let activation = presenter.activate(&detail);

        self.notifications.push(activation.notice);
        let labels = DetailLabels::resolve(self.text.as_ref(), self.locale);
        self.screen = CurrentScreen::Detail(Box::new((activation.view, labels)));
    }

    fn open_settings(&mut self) {
        self.screen = CurrentScreen::Settings(self.settings_view());
    }

    fn settings_view(&self) -> SettingsView {
        SettingsView::new(
            self.preferences.is_dark_mode(),
            self.locale,
            self.text.as_ref(),
        )
    }

    fn toggle_dark_mode(&mut self) {
        let dark_mode = !self.preferences.is_dark_mode();
        self.preferences.set_dark_mode(dark_mode);
        self.apply_theme(dark_mode);
        self.open_settings();
    }

    fn toggle_language(&mut self) {
        self.locale = self.locale.toggled();
        self.preferences.set_locale(self.locale.code());
        info!(locale = %self.locale, "Language changed");

        self.list.relocalize(ListPresenter::new(
            self.text.clone(),
            self.images.clone(),
            self.locale,
        ));
        self.open_settings();
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(self.theme.base_style), area);

        if let CurrentScreen::Splash(splash) = &mut self.screen {
            frame.render_widget(splash.as_mut(), area);
            return;
        }

        let [header_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = match &self.screen {
            CurrentScreen::Detail(_) => self.label("detail_title"),
            CurrentScreen::Settings(view) => view.title.clone(),
            _ => String::new(),
        };
        frame.render_widget(
            HeaderBar::new(crate::NAME, crate::VERSION)
                .title(&title)
                .locale(self.locale)
                .style(HeaderBarStyle::from_theme(&self.theme)),
            header_area,
        );

        match &self.screen {
            CurrentScreen::List | CurrentScreen::Splash(_) => {
                let no_image = self.label("no_image");
                frame.render_stateful_widget(
                    ListScreen::new(&self.theme).no_image(&no_image),
                    content_area,
                    &mut self.list,
                );
            }
            CurrentScreen::Detail(detail) => {
                let (view, labels) = detail.as_ref();
                frame.render_widget(DetailScreen::new(view, labels, &self.theme), content_area);
            }
            CurrentScreen::Settings(view) => {
                frame.render_widget(SettingsScreen::new(view, &self.theme), content_area);
            }
        }

        self.render_footer(frame, footer_area);

        if self.about_open {
            let title = self.label("about_title");
            let body = self.label("developed_by");
            let ok = self.label("ok");
            frame.render_widget(
                AboutPopup::new(&title, &body, &self.theme)
                    .ok_label(&ok)
                    .version(crate::VERSION),
                content_area,
            );
        }

        if let Some(notification) = self.notifications.current_notification() {
            let title = self.label("app_title");
            frame.render_widget(
                NotificationPopup::new(notification, &title, &self.theme),
                area,
            );
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let Some(context) = self.screen.key_context(self.about_open) else {
            return;
        };
        let items =
            FooterItem::from_bindings(&bindings_for(context), self.text.as_ref(), self.locale);
        let position = matches!(self.screen, CurrentScreen::List).then(|| {
            let cursor = self.list.cursor();
            format!("{}/{} ", cursor.index() + 1, cursor.len())
        });

        frame.render_widget(
            FooterBar::new(&items)
                .right_info(position.as_deref())
                .style(FooterBarStyle::from_theme(&self.theme)),
            area,
        );
    }

    /// Screen currently shown, for logging and tests.
    #[must_use]
    pub const fn screen_name(&self) -> &'static str {
        match self.screen {
            CurrentScreen::Splash(_) => "splash",
            CurrentScreen::List => "list",
            CurrentScreen::Detail(_) => "detail",
            CurrentScreen::Settings(_) => "settings",
        }
    }

    /// Live locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{InMemoryPreferences, SpriteSheet, StringCatalog};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn options(native_splash: bool) -> AppOptions {
        AppOptions {
            locale: Locale::Es,
            native_splash,
            splash_delay: Duration::from_millis(2000),
            notification_duration: Duration::from_secs(3),
            accent_color: "#D94A38".to_string(),
        }
    }

    fn app_with(preferences: Arc<dyn PreferencesPort>, native_splash: bool) -> App {
        App::new(
            Arc::new(StringCatalog::bundled()),
            Arc::new(SpriteSheet::new()),
            preferences,
            options(native_splash),
        )
    }

    fn started_app(preferences: Arc<dyn PreferencesPort>) -> App {
        let mut app = app_with(preferences, true);
        let outcome = app.sequencer.begin().unwrap();
        app.enter_list(outcome);
        app
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_native_splash_goes_straight_to_list_with_welcome() {
        let app = started_app(Arc::new(InMemoryPreferences::new()));

        assert_eq!(app.screen_name(), "list");
        assert_eq!(
            app.notifications.current_notification().unwrap().message,
            "¡Bienvenido al mundo Pikmin!"
        );
    }

    #[test]
    fn test_stored_dark_mode_applied_on_startup() {
        let preferences = Arc::new(InMemoryPreferences::new());
        preferences.set_dark_mode(true);

        let app = started_app(preferences);
        assert!(app.theme.is_dark());
    }

    #[test]
    fn test_select_opens_detail_with_notice_and_back_returns() {
        let mut app = started_app(Arc::new(InMemoryPreferences::new()));
        app.notifications.clear();

        assert_eq!(press(&mut app, KeyCode::Enter), EventResult::Consumed);
        assert_eq!(app.screen_name(), "detail");
        assert_eq!(
            app.notifications.current_notification().unwrap().message,
            "Se ha seleccionado: Pikmin rojo"
        );

        let text = draw(&mut app);
        assert!(text.contains("Pikmin rojo"));
        assert!(text.contains("[x] Terrestre"));
        assert!(!text.contains("Característica 3"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen_name(), "list");
    }

    #[test]
    fn test_language_toggle_persists_and_relocalizes() {
        let preferences = Arc::new(InMemoryPreferences::new());
        let mut app = started_app(preferences.clone());

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen_name(), "settings");

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.locale(), Locale::En);
        assert_eq!(preferences.get_locale(), "en");
        assert_eq!(app.list.rows()[0].name, "Red Pikmin");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        let CurrentScreen::Detail(detail) = &app.screen else {
            panic!("expected detail screen");
        };
        assert_eq!(detail.0.name, "Red Pikmin");
    }

    #[test]
    fn test_dark_mode_toggle_persists_and_restyles() {
        let preferences = Arc::new(InMemoryPreferences::new());
        let mut app = started_app(preferences.clone());

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('d'));

        assert!(preferences.is_dark_mode());
        assert!(app.theme.is_dark());
        let CurrentScreen::Settings(view) = &app.screen else {
            panic!("expected settings screen");
        };
        assert!(view.dark_mode.on);
    }

    #[test]
    fn test_about_overlay_and_quit() {
        let mut app = started_app(Arc::new(InMemoryPreferences::new()));

        press(&mut app, KeyCode::Char('a'));
        assert!(app.about_open);
        assert!(draw(&mut app).contains("Desarrollado por"));

        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Continue);
        press(&mut app, KeyCode::Enter);
        assert!(!app.about_open);

        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Exit);
    }

    #[test]
    fn test_grid_navigation_updates_footer_position() {
        let mut app = started_app(Arc::new(InMemoryPreferences::new()));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.list.cursor().index(), 4);
        assert!(draw(&mut app).contains("5/23"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_splash_holds_until_timer_then_outro() {
        let mut app = app_with(Arc::new(InMemoryPreferences::new()), false);
        assert!(app.sequencer.begin().is_none());
        assert_eq!(app.screen_name(), "splash");

        let outcome = app.sequencer.wait_ready().await;
        app.on_startup_ready(outcome);
        assert_eq!(app.screen_name(), "splash");

        for _ in 0..60 {
            app.tick(ANIMATION_TICK_RATE);
            draw(&mut app);
        }
        assert_eq!(app.screen_name(), "list");
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_during_splash_cancels_timer() {
        let mut app = app_with(Arc::new(InMemoryPreferences::new()), false);
        app.sequencer.begin();
        assert!(app.sequencer.is_armed());

        assert_eq!(press(&mut app, KeyCode::Enter), EventResult::Continue);
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Exit);
        assert!(!app.sequencer.is_armed());
    }
}
