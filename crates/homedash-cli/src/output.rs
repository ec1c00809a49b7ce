//! Terminal output formatting.

use colored::Colorize;
use homedash_client::store::{GlobalState, QueuedNotification};
use homedash_core::app::model::App;
use homedash_core::push::PushMessage;
use unicode_width::UnicodeWidthStr;

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 24;
const PIN_WIDTH: usize = 8;

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

/// Print apps as a table.
pub fn print_apps_table(apps: &[App]) {
    if apps.is_empty() {
        println!("{}", "No apps found.".dimmed());
        return;
    }

    let url_width = term_width()
        .saturating_sub(ID_WIDTH + NAME_WIDTH + PIN_WIDTH + 3)
        .max(16);

    println!(
        "{} {} {} {}",
        pad_right("ID", ID_WIDTH).bold(),
        pad_right("Name", NAME_WIDTH).bold(),
        pad_right("Pinned", PIN_WIDTH).bold(),
        "URL".bold()
    );
    println!("{}", "-".repeat(ID_WIDTH + NAME_WIDTH + PIN_WIDTH + 3 + url_width));

    for app in apps {
        let name = pad_right(&truncate_visual(&app.name, NAME_WIDTH), NAME_WIDTH);
        let pinned = if app.is_pinned {
            pad_right("yes", PIN_WIDTH).green()
        } else {
            pad_right("no", PIN_WIDTH).dimmed()
        };

        println!(
            "{} {} {} {}",
            pad_right(&app.id.to_string(), ID_WIDTH).dimmed(),
            name.cyan(),
            pinned,
            truncate_visual(&app.url, url_width)
        );
    }
}

/// Print a single app.
pub fn print_app(app: &App) {
    println!("{} {}", app.name.cyan().bold(), format!("(#{})", app.id).dimmed());
    println!("{}: {}", "URL".bold(), app.url);
    if !app.icon.is_empty() {
        println!("{}: {}", "Icon".bold(), app.icon);
    }
    println!(
        "{}: {}",
        "Pinned".bold(),
        if app.is_pinned { "yes".green() } else { "no".dimmed() }
    );
    println!("{}: {}", "Created".bold(), app.created_at.to_rfc3339());
    println!("{}: {}", "Updated".bold(), app.updated_at.to_rfc3339());
}

pub fn print_notification(notification: &QueuedNotification) {
    println!(
        "{} {}",
        format!("{}:", notification.title).green().bold(),
        notification.message
    );
}

/// Print every pending notification and the fetch error, if any.
pub fn print_feedback(state: &GlobalState) {
    for notification in &state.notification.notifications {
        print_notification(notification);
    }
    if let Some(error) = &state.app.error {
        println!("{} {}", "Error:".red().bold(), error);
    }
}

pub fn print_push_message(msg: &PushMessage) {
    let label = match msg {
        PushMessage::AppCreated { .. } => "created".green(),
        PushMessage::AppUpdated { .. } => "updated".yellow(),
        PushMessage::AppDeleted { .. } => "deleted".red(),
        PushMessage::AppsRefresh => "refresh".cyan(),
    };
    match msg.app_id() {
        Some(id) => println!("{} {} app #{}", "push".dimmed(), label, id),
        None => println!("{} {}", "push".dimmed(), label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("short", 10), "short");
        assert_eq!(truncate_visual("a-very-long-name", 8), "a-very..");
        assert_eq!(truncate_visual("abcdef", 3), "...");
    }

    #[test]
    fn test_pad_right_counts_wide_chars() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("日本", 6), "日本  ");
    }
}
