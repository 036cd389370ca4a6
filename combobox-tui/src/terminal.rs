use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use crate::page::{Line, LineStyle};

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Redraw the whole screen, one page line per terminal row.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )?;

        for (row, line) in lines.iter().enumerate() {
            let Ok(row) = u16::try_from(row) else {
                break;
            };
            queue!(self.stdout, cursor::MoveTo(0, row))?;
            match line.style {
                LineStyle::Plain => {}
                LineStyle::Dim => queue!(self.stdout, SetAttribute(Attribute::Dim))?,
                LineStyle::Bold => queue!(self.stdout, SetAttribute(Attribute::Bold))?,
                LineStyle::Reverse => queue!(self.stdout, SetAttribute(Attribute::Reverse))?,
            }
            queue!(
                self.stdout,
                Print(&line.text),
                SetAttribute(Attribute::Reset)
            )?;
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
