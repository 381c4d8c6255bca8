//! Terminal I/O for the interactive mode

use std::io::{self, Write};

use colored::{Color, Colorize};

/// Console handles terminal I/O with colored formatting
pub struct Console {
    user_color: Color,
    assistant_color: Color,
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            user_color: Color::Cyan,
            assistant_color: Color::Green,
        }
    }

    /// Print the startup banner
    pub fn print_banner(&self) {
        println!();
        println!("{}", "Local Privacy Agent".bold());
        println!("{}", "Ask something, or type 'exit' to quit.".dimmed());
        println!();
    }

    /// Print the prompt marker and read one line of user input
    pub fn read_input(&self) -> io::Result<String> {
        print!("{} ", "you>".color(self.user_color).bold());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Print an assistant response
    pub fn print_assistant(&self, text: &str) {
        println!("{} {}", "agent>".color(self.assistant_color).bold(), text);
    }

    /// Print a system notice
    pub fn print_system(&self, text: &str) {
        println!("{}", text.dimmed());
    }

    /// Print an error message
    pub fn print_error(&self, text: &str) {
        eprintln!("{} {}", "error:".red().bold(), text);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
