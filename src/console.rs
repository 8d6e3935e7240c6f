//! Terminal collaborator: one raw keypress per read, cooked line prompts.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;

/// Blocking terminal surface the dispatcher talks to.
///
/// One raw character per [`Console::read_key`] call, no buffering or line
/// editing; prompts are plain line reads; output is ordered text only.
pub trait Console {
    /// Blocks until the operator presses a character key and returns it.
    fn read_key(&mut self) -> io::Result<char>;
    /// Prints `label` and reads one line of input, trailing newline stripped.
    fn prompt(&mut self, label: &str) -> io::Result<String>;
    /// Writes `text` verbatim.
    fn print(&mut self, text: &str) -> io::Result<()>;
}

/// Real terminal backed by crossterm raw mode and stdin line reads.
///
/// Raw mode is held only around the single key read, so line prompts keep the
/// terminal's normal echo and editing behavior.
#[derive(Debug, Default)]
pub struct CrosstermConsole;

impl CrosstermConsole {
    /// Creates a console over the process stdin/stdout.
    pub fn new() -> Self {
        Self
    }
}

impl Console for CrosstermConsole {
    fn read_key(&mut self) -> io::Result<char> {
        terminal::enable_raw_mode()?;
        let key = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let KeyCode::Char(c) = key.code {
                        break Ok(c);
                    }
                }
                Ok(_) => {}
                Err(err) => break Err(err),
            }
        };
        terminal::disable_raw_mode()?;
        key
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        let mut out = io::stdout();
        write!(out, "{label}: ")?;
        out.flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}
