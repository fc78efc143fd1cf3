use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::io::Stdout;
use std::io::stdout;

pub(crate) type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

pub(crate) fn init() -> io::Result<DashboardTerminal> {
    enable_raw_mode()?;
    undo_on_error(execute!(stdout(), EnterAlternateScreen), disable_raw_mode)?;
    set_panic_hook();
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

pub(crate) fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Runs `undo` when `result` is an error and returns the original error.
fn undo_on_error<T>(
    result: io::Result<T>,
    undo: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err() {
        let _ = undo();
    }
    result
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_step_is_rolled_back() {
        let undone = Cell::new(false);
        let result: io::Result<()> = undo_on_error(Err(io::Error::other("no tty")), || {
            undone.set(true);
            Ok(())
        });
        assert_eq!(result.unwrap_err().to_string(), "no tty");
        assert!(undone.get());
    }

    #[test]
    fn successful_setup_step_is_kept() {
        let undone = Cell::new(false);
        let result = undo_on_error(Ok(7), || {
            undone.set(true);
            Ok(())
        });
        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }
}
