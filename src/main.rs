use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

/// Drilldown Menu TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the menu tree JSON file (default: bundled sample menu)
    #[arg(short, long)]
    tree: Option<PathBuf>,

    /// Root level title (overrides the config file)
    #[arg(long)]
    title: Option<String>,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Enable debug logging to the temp dir
    #[arg(short, long)]
    debug: bool,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod app;
mod config;
mod handlers;
mod logic;
mod model;
mod ui;
mod utils;

use drilltui::DisplayMode;
use model::NavigationState;
use ui::icons::{IconMode, IconRenderer};

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// How long a leaf-selection toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(2);

pub struct App {
    /// The navigation core; everything else here is presentation state
    pub nav: NavigationState,

    /// One cursor slot per level, in lockstep with `nav.levels()`
    pub cursors: Vec<Option<usize>>,

    pub display_mode: DisplayMode,
    pub vim_mode: bool,
    pub icon_renderer: IconRenderer,

    toast: Option<(String, Instant)>,
    should_quit: bool,
}

impl App {
    fn new(nav: NavigationState, vim_mode: bool, icon_renderer: IconRenderer) -> Self {
        let first = if nav.current().items.is_empty() {
            None
        } else {
            Some(0)
        };
        Self {
            nav,
            cursors: vec![first],
            display_mode: DisplayMode::Off,
            vim_mode,
            icon_renderer,
            toast: None,
            should_quit: false,
        }
    }

    pub(crate) fn show_toast(&mut self, message: String) {
        self.toast = Some((message, Instant::now()));
    }

    /// Current toast text, if one is showing
    pub fn toast_message(&self) -> Option<String> {
        self.toast.as_ref().map(|(msg, _)| msg.clone())
    }

    fn dismiss_expired_toast(&mut self) {
        if let Some((_, shown_at)) = &self.toast {
            if shown_at.elapsed() >= TOAST_DURATION {
                self.toast = None;
            }
        }
    }

    pub(crate) fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggle();
    }

    pub(crate) fn quit(&mut self) {
        self.should_quit = true;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    let cfg = config::load_config(args.config.as_deref())?;
    let vim_mode = args.vim || cfg.vim_mode;
    let tree_path = args.tree.or(cfg.tree_path);
    let root_title = args.title.unwrap_or(cfg.root_title);

    let tree = config::load_tree(tree_path.as_deref())?;
    log_debug(&format!(
        "loaded tree: {} top-level items, root title {:?}",
        tree.len(),
        root_title
    ));

    let nav = NavigationState::new(tree, root_title);
    let icon_renderer = IconRenderer::new(IconMode::from_config(&cfg.icon_mode));
    let mut app = App::new(nav, vim_mode, icon_renderer);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore the terminal even when the loop bailed with an error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.dismiss_expired_toast();
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handlers::keyboard::handle_key(app, key)?;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
