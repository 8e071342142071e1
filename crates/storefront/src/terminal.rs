//! Interactive terminal host.
//!
//! Prints each screen as text with numbered controls and reads one command
//! per line. The controls of the last printed screen are the only ones that
//! can be activated; a re-render replaces them.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cart::KeyValueStore;
use crate::error::Result;
use crate::navigation::{Action, Notice, Storefront};
use crate::views::Screen;

const HELP: &str = "\
Commands:
  <number>            activate the control with that number
  landing | home      go to the landing page
  products | plants   go to the plant listing
  cart                go to the cart
  go <page>           follow a nav link by page id
  help                show this help
  quit                leave the shop";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Control(usize),
    /// Follow the nav link carrying this page identifier.
    Go(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse one line of input.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    if let Ok(id) = line.parse::<usize>() {
        return Command::Control(id);
    }

    let lower = line.to_ascii_lowercase();
    match lower.split_whitespace().collect::<Vec<_>>().as_slice() {
        ["q" | "quit" | "exit"] => Command::Quit,
        ["help" | "?"] => Command::Help,
        ["landing" | "home"] => Command::Go("landing".to_string()),
        ["products" | "plants"] => Command::Go("products".to_string()),
        ["cart"] => Command::Go("cart".to_string()),
        ["go", page] => Command::Go((*page).to_string()),
        _ => Command::Unknown(line.to_string()),
    }
}

/// Terminal session over any line reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    html_snapshot: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a session reading commands from `input`.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            html_snapshot: None,
        }
    }

    /// Also write the HTML of every render to `path`.
    #[must_use]
    pub fn with_html_snapshot(mut self, path: Option<PathBuf>) -> Self {
        self.html_snapshot = path;
        self
    }

    /// Run until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal I/O, the HTML snapshot write, or template
    /// rendering fails.
    pub fn run<S: KeyValueStore>(&mut self, shop: &mut Storefront<S>) -> Result<()> {
        let mut screen = self.present(shop)?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let action = match parse_command(&line) {
                Command::Quit => break,
                Command::Empty => continue,
                Command::Help => {
                    writeln!(self.output, "{HELP}")?;
                    continue;
                }
                Command::Go(page_id) => Action::NavLink(page_id),
                Command::Control(id) => {
                    if let Some(action) = screen.activate(id) {
                        action
                    } else {
                        writeln!(self.output, "No active control [{id}] on this page.")?;
                        continue;
                    }
                }
                Command::Unknown(input) => {
                    writeln!(
                        self.output,
                        "Unknown command `{input}`. Type `help` for commands."
                    )?;
                    continue;
                }
            };

            let dispatch = shop.dispatch(action);
            if let Some(notice) = &dispatch.notice {
                self.acknowledge(notice)?;
            }
            if dispatch.rerender {
                screen = self.present(shop)?;
            } else if dispatch.notice.is_some() {
                writeln!(self.output, "Cart ({})", shop.cart_count())?;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Give back the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn present<S>(&mut self, shop: &Storefront<S>) -> Result<Screen> {
        let screen = shop.screen();
        writeln!(self.output, "\n{}", screen.render_text()?)?;

        if let Some(path) = &self.html_snapshot {
            screen.write_html_snapshot(path)?;
        }
        Ok(screen)
    }

    /// Show a confirmation and block until the user presses Enter.
    fn acknowledge(&mut self, notice: &Notice) -> Result<()> {
        writeln!(self.output, "\n  {notice}")?;
        write!(self.output, "  [press Enter to continue]")?;
        self.output.flush()?;
        self.read_line()?;
        writeln!(self.output)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
