//! Styled status lines for the terminal.
//!
//! Styling is dropped when `NO_COLOR` is set.

use console::style;

/// Kind of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Error => "[ERROR]",
        }
    }
}

/// Whether styled output is allowed.
#[must_use]
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Render a status line, styled when `color` is set.
#[must_use]
pub fn status_line(status: Status, text: &str, color: bool) -> String {
    if !color {
        return format!("{} {text}", status.tag());
    }
    let tag = match status {
        Status::Ok => style(status.tag()).green(),
        Status::Error => style(status.tag()).red(),
    };
    format!("{} {text}", tag.bold())
}

/// Render a section banner, styled when `color` is set.
#[must_use]
pub fn banner(title: &str, color: bool) -> String {
    let plain = format!("=== {title} ===");
    if color {
        style(plain).bold().cyan().to_string()
    } else {
        plain
    }
}

pub fn print_header(title: &str) {
    println!("{}", banner(title, color_enabled()));
}

pub fn print_success(text: &str) {
    println!("{}", status_line(Status::Ok, text, color_enabled()));
}

/// Errors go to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", status_line(Status::Error, text, color_enabled()));
}
