use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::Paragraph,
    widgets::canvas::{Canvas, Points},
};

use jangsik_config::Config;
use jangsik_core::Theme;
use jangsik_engine::{Engine, EngineSettings};

mod host;
mod transform;

use host::{TermHost, pixel_dims};

fn main() -> color_eyre::Result<()> {
    // Logs go to stderr; redirect (2>jangsik.log) to capture them under
    // the raw-mode display.
    env_logger::init();
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded configuration.
    config: Config,
    /// Current rendering theme.
    theme: Theme,
    /// The decorative-animation engine.
    engine: Engine,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let engine = Engine::new(
            0.0,
            0.0,
            EngineSettings {
                type_count: config.type_count,
                max_graphics: config.max_graphics,
                theme: config.theme,
                motion: config.motion,
            },
        );
        Self {
            running: false,
            theme: config.theme,
            config,
            engine,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        let (width, height) = pixel_dims(size.width, size.height);
        self.engine.handle_resize(width, height);
        self.engine.seed();

        let tick = Duration::from_millis(1000 / self.config.frame_rate_hz.max(1));
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(tick)?;
        }
        Ok(())
    }

    /// Renders one frame: the decorative canvas behind centered foreground
    /// text that the engine's exclusion zone keeps clear.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let (width, height) = self.engine.viewport();

        let mut bridge = TermHost::new(width, height);
        self.engine.render_frame(&mut bridge);

        let batches = bridge.color_batches();
        let canvas = Canvas::default()
            .background_color(bridge.background())
            .marker(Marker::Braille)
            .x_bounds([0.0, width as f64])
            .y_bounds([0.0, height as f64])
            .paint(|ctx| {
                for (color, coords) in &batches {
                    ctx.draw(&Points {
                        coords,
                        color: *color,
                    });
                }
            });
        frame.render_widget(canvas, area);

        let fg = self.theme.foreground();
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Top padding
            Constraint::Length(1), // Title
            Constraint::Fill(1),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let title = Paragraph::new("j a n g s i k")
            .style(Style::new().fg(fg).bold())
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let help = Line::from(vec![
            "space".bold().fg(fg),
            " new shape  ".dark_gray(),
            "t".bold().fg(fg),
            " theme  ".dark_gray(),
            "q".bold().fg(fg),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[3]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout to keep a steady frame cadence.
    fn handle_crossterm_events(&mut self, tick: Duration) -> color_eyre::Result<()> {
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(cols, rows) => {
                    let (width, height) = pixel_dims(cols, rows);
                    self.engine.handle_resize(width, height);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ') | KeyCode::Enter) => self.engine.trigger(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            _ => {}
        }
    }

    /// Toggle between dark and light themes.
    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.engine.set_theme(self.theme);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
