//! Terminal front end for the kubenav navigation core: converts crossterm
//! key events into chords, draws the dashboard with ratatui and runs the
//! event loop.

mod app;
mod cli;
mod content;
mod controller;
mod keymap;
mod layout;
mod logging;
mod terminal;
mod view;

pub use app::App;
pub use cli::Cli;
pub use content::PanelContents;
pub use controller::DashboardController;
pub use controller::KeyHint;
pub use layout::DashboardLayout;
pub use view::DashboardView;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use std::io::Write;
use tracing::info;

const PLACEHOLDER_LINES: usize = 40;

pub fn run_main(cli: Cli) -> Result<()> {
    let config = cli
        .navigation_config()
        .wrap_err("failed to load navigation config")?;
    if cli.print_config {
        let rendered = config.to_toml_string()?;
        std::io::stdout().lock().write_all(rendered.as_bytes())?;
        return Ok(());
    }

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    let _log_guard = logging::init(&log_path)?;

    let controller =
        DashboardController::from_config(&config).wrap_err("invalid navigation config")?;
    let contents = PanelContents::placeholder(&controller.snapshot(), PLACEHOLDER_LINES);
    let mut app = App::new(controller, contents);
    info!(log = %log_path.display(), "starting dashboard");

    let mut terminal = terminal::init()?;
    let result = app.run(&mut terminal);
    terminal::restore()?;
    result
}
