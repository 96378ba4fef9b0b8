use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    style::{Attribute, SetAttribute},
    terminal::{self, ClearType},
    ExecutableCommand,
};

const NAV_HINT: &str = "Use ↑/↓ to navigate · Enter to run · ESC to go back";

#[derive(Clone)]
struct MenuEntry {
    command: &'static str,
    description: &'static str,
}

#[derive(Debug)]
pub enum MenuError {
    Interrupted,
    Io(io::Error),
}

impl From<io::Error> for MenuError {
    fn from(err: io::Error) -> Self {
        MenuError::Io(err)
    }
}

/// Arrow-key navigable menu over the shell's main views.
pub struct MainMenu {
    entries: Vec<MenuEntry>,
    selected_index: usize,
    max_command_len: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        let entries = vec![
            MenuEntry {
                command: "shop list",
                description: "Browse the storefront",
            },
            MenuEntry {
                command: "shop cart",
                description: "Review your cart",
            },
            MenuEntry {
                command: "product list",
                description: "Catalog products",
            },
            MenuEntry {
                command: "customer list",
                description: "Customers",
            },
            MenuEntry {
                command: "sale list",
                description: "Recorded sales",
            },
            MenuEntry {
                command: "purchase list",
                description: "Stock purchases",
            },
            MenuEntry {
                command: "expense list",
                description: "Expenses",
            },
            MenuEntry {
                command: "cashflow",
                description: "Cash-flow feed",
            },
            MenuEntry {
                command: "report dashboard",
                description: "Dashboard overview",
            },
            MenuEntry {
                command: "report pnl",
                description: "Profit & loss",
            },
            MenuEntry {
                command: "login",
                description: "Unlock admin views",
            },
            MenuEntry {
                command: "exit",
                description: "Quit the shell",
            },
        ];

        let max_command_len = entries
            .iter()
            .map(|entry| entry.command.len())
            .max()
            .unwrap_or(0);

        Self {
            entries,
            selected_index: 0,
            max_command_len,
        }
    }

    /// Renders the menu, captures keyboard navigation, and returns the
    /// selected command line, or `None` when the user backs out.
    pub fn show(&mut self, banner: &str) -> Result<Option<String>, MenuError> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        stdout.execute(cursor::Hide)?;

        let loop_result = loop {
            self.render(&mut stdout, banner)?;

            let event = event::read()?;
            let Event::Key(key) = event else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            {
                break Err(MenuError::Interrupted);
            }

            match key.code {
                KeyCode::Up => self.move_selection(-1),
                KeyCode::Down => self.move_selection(1),
                KeyCode::Home => self.selected_index = 0,
                KeyCode::End => self.selected_index = self.entries.len().saturating_sub(1),
                KeyCode::Esc => break Ok(None),
                KeyCode::Enter => {
                    break Ok(Some(self.entries[self.selected_index].command.to_string()))
                }
                _ => continue,
            }
        };

        let clear_outcome = self.clear_screen(&mut stdout);
        stdout.execute(cursor::Show).ok();
        terminal::disable_raw_mode().ok();

        clear_outcome?;
        loop_result
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.entries.len() as isize;
        if len == 0 {
            return;
        }
        let current = self.selected_index as isize;
        let next = (current + delta).rem_euclid(len);
        self.selected_index = next as usize;
    }

    fn render(&self, stdout: &mut Stdout, banner: &str) -> Result<(), io::Error> {
        self.clear_screen(stdout)?;
        writeln!(stdout, "{banner}")?;
        writeln!(stdout, "{NAV_HINT}")?;
        writeln!(stdout)?;

        for (index, entry) in self.entries.iter().enumerate() {
            if index == self.selected_index {
                stdout.execute(SetAttribute(Attribute::Reverse))?;
            } else {
                stdout.execute(SetAttribute(Attribute::Reset))?;
            }
            write!(
                stdout,
                "  {:<width$}  {}",
                entry.command,
                entry.description,
                width = self.max_command_len + 2
            )?;
            stdout.execute(SetAttribute(Attribute::Reset))?;
            writeln!(stdout)?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn clear_screen(&self, stdout: &mut Stdout) -> Result<(), io::Error> {
        stdout.execute(terminal::Clear(ClearType::All))?;
        stdout.execute(cursor::MoveTo(0, 0))?;
        Ok(())
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}
