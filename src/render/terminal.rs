//! Terminal output
//!
//! Presents frames through a ratatui terminal on a crossterm backend, in raw
//! mode on the alternate screen.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, Terminal};

use super::Presenter;

pub struct TerminalPresenter {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalPresenter {
    /// Switch the terminal into raw mode on the alternate screen
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(Self { terminal })
    }

    /// Put the terminal back the way we found it
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl Presenter for TerminalPresenter {
    type Error = io::Error;

    fn present(&mut self, source: &Buffer) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area().intersection(source.area);
            let target = frame.buffer_mut();
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    target[(x, y)] = source[(x, y)].clone();
                }
            }
        })?;
        Ok(())
    }
}
