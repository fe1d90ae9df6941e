//! Terminal setup, teardown and drawing.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use signup_form::{Field, FormView, StatusView};
use unicode_width::UnicodeWidthStr;

const LEFT: u16 = 2;
const TOP: u16 = 1;
const INPUT_WIDTH: usize = 32;

const HELP: &str = "Tab/Shift+Tab: move  Enter: next/submit  Ctrl+S: submit  Ctrl+R: reset  Esc: quit";

/// Owns the terminal while the form runs and restores it on drop.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the panic message is printed
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    /// Draw one frame.
    ///
    /// `cursor` places the text cursor inside a field's input, as a column
    /// offset from the start of the value.
    pub fn draw(&mut self, view: &FormView, cursor: Option<(Field, u16)>) -> io::Result<()> {
        let out = &mut self.stdout;
        queue!(out, Clear(ClearType::All), cursor::Hide)?;

        let mut row = TOP;
        let mut cursor_pos = None;

        for field in &view.fields {
            queue!(out, cursor::MoveTo(LEFT, row))?;
            if field.focused {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(&field.label), SetAttribute(Attribute::Reset))?;
            row += 1;

            let pad = INPUT_WIDTH.saturating_sub(field.display.width());
            let border = if field.error.is_some() {
                Color::Red
            } else if field.focused {
                Color::Cyan
            } else {
                Color::DarkGrey
            };
            queue!(
                out,
                cursor::MoveTo(LEFT, row),
                SetForegroundColor(border),
                Print("["),
                ResetColor,
                Print(&field.display),
                Print(" ".repeat(pad)),
                SetForegroundColor(border),
                Print("]"),
                ResetColor
            )?;
            if let Some((_, offset)) = cursor.filter(|(target, _)| *target == field.field) {
                cursor_pos = Some((LEFT + 1 + offset, row));
            }
            row += 1;

            if let Some(error) = &field.error {
                queue!(
                    out,
                    cursor::MoveTo(LEFT, row),
                    SetForegroundColor(Color::Red),
                    Print(error),
                    ResetColor
                )?;
                row += 1;
            }
            row += 1;
        }

        let button = format!("[ {} ]", view.button.label);
        queue!(out, cursor::MoveTo(LEFT, row))?;
        if view.button.disabled {
            queue!(out, SetForegroundColor(Color::DarkGrey))?;
        } else if view.button.focused {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(out, Print(button), SetAttribute(Attribute::Reset), ResetColor)?;
        row += 2;

        if let Some(status) = &view.status {
            let (color, text) = match status {
                StatusView::Success(text) => (Color::Green, text),
                StatusView::Failure(text) => (Color::Red, text),
            };
            queue!(
                out,
                cursor::MoveTo(LEFT, row),
                SetForegroundColor(color),
                Print(text),
                ResetColor
            )?;
            row += 2;
        }

        queue!(
            out,
            cursor::MoveTo(LEFT, row),
            SetForegroundColor(Color::DarkGrey),
            Print(HELP),
            ResetColor
        )?;

        if let Some((x, y)) = cursor_pos {
            queue!(out, cursor::MoveTo(x, y), cursor::Show)?;
        }

        out.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}
