//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::controller::DashboardController;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardViewState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub latest_version: Option<String>,
}

impl UIConfig {
    pub fn new(with_background_color: bool, latest_version: Option<String>) -> Self {
        Self {
            with_background_color,
            latest_version,
        }
    }
}

/// The different screens in the application.
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying account, market, and donation state.
    Dashboard(Box<DashboardViewState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Controller owning the dashboard data.
    controller: DashboardController,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from worker tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// Whether to enable background colors
    with_background_color: bool,

    /// Latest version available, if newer than the running one.
    latest_version: Option<String>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        controller: DashboardController,
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            controller,
            environment,
            current_screen: Screen::Splash,
            event_receiver,
            shutdown_sender,
            with_background_color: ui_config.with_background_color,
            latest_version: ui_config.latest_version,
        }
    }

    fn dashboard_state(&self) -> Box<DashboardViewState> {
        let ui_config = UIConfig::new(self.with_background_color, self.latest_version.clone());
        Box::new(DashboardViewState::new(
            &self.controller,
            self.environment.clone(),
            self.start_time,
            ui_config,
        ))
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Update the state based on the current screen
        match &mut app.current_screen {
            Screen::Splash => {}
            Screen::Dashboard(state) => {
                // Pull the latest data snapshot and process queued events
                state.update();
            }
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.current_screen = Screen::Dashboard(app.dashboard_state());
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    // Send shutdown signal to workers
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                // Any other key press skips the splash screen
                if matches!(app.current_screen, Screen::Splash) {
                    app.current_screen = Screen::Dashboard(app.dashboard_state());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
