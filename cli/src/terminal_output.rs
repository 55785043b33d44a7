//! Terminal rendering of a decoded menu, plus formatted notes.

use menulens_core::{Menu, Presenter};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM").map(|t| t != "dumb").unwrap_or(false))
}

/// Print a formatted ERROR note.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

/// Render a decoded menu as plain text (no ANSI), one section per block.
pub fn render_menu(menu: &Menu) -> String {
    let mut out = String::new();

    if let Some(name) = &menu.restaurant_name {
        out.push_str(&format!("== {name} ==\n\n"));
    }

    for section in &menu.sections {
        out.push_str(&format!("{}\n", section.category_name));
        if let Some(desc) = &section.description {
            out.push_str(&format!("  {desc}\n"));
        }
        if let Some(styles) = &section.available_styles {
            out.push_str(&format!("  Available styles: {}\n", styles.join(", ")));
        }
        for item in &section.items {
            out.push_str(&format!(
                "  {:<40} {:>12}\n",
                item.name,
                menu.format_price(item.price)
            ));
            if let Some(desc) = &item.description {
                out.push_str(&format!("      {desc}\n"));
            }
        }
        out.push('\n');
    }

    out
}

/// Presenter writing the decoded menu (or an error note) to the terminal.
pub struct TerminalPresenter {
    /// Emit raw JSON instead of the formatted listing.
    json: bool,
}

impl TerminalPresenter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl Presenter for TerminalPresenter {
    fn present_menu(&self, menu: &Menu) {
        if self.json {
            match serde_json::to_string_pretty(menu) {
                Ok(text) => println!("{text}"),
                Err(e) => note_error(&format!("could not serialize menu: {e}")),
            }
            return;
        }

        if supports_color() {
            // Re-render with a bold header and dim descriptions.
            if let Some(name) = &menu.restaurant_name {
                println!("{BOLD}== {name} =={RESET}\n");
            }
            for section in &menu.sections {
                println!("{CYAN}{BOLD}{}{RESET}", section.category_name);
                if let Some(desc) = &section.description {
                    println!("  {DIM}{desc}{RESET}");
                }
                if let Some(styles) = &section.available_styles {
                    println!("  {DIM}Available styles: {}{RESET}", styles.join(", "));
                }
                for item in &section.items {
                    println!(
                        "  {:<40} {BOLD}{:>12}{RESET}",
                        item.name,
                        menu.format_price(item.price)
                    );
                    if let Some(desc) = &item.description {
                        println!("      {DIM}{desc}{RESET}");
                    }
                }
                println!();
            }
        } else {
            print!("{}", render_menu(menu));
        }
    }

    fn present_error(&self, message: &str) {
        note_error(message);
    }
}
