//! Output functions for consistent CLI formatting

use super::context::UiContext;
use console::style;

/// Print a bold heading
pub fn heading(ctx: &UiContext, title: &str) {
    if ctx.is_styled() {
        println!("{}", style(title).cyan().bold());
    } else {
        println!("{}", title);
    }
}

/// Display a success step
pub fn step_ok(ctx: &UiContext, message: &str) {
    if ctx.is_styled() {
        println!("{} {}", style("✓").green(), message);
    } else {
        println!("[OK] {}", message);
    }
}

/// Display a warning step
pub fn step_warn(ctx: &UiContext, message: &str) {
    if ctx.is_styled() {
        println!("{} {}", style("!").yellow(), message);
    } else {
        println!("[WARN] {}", message);
    }
}

/// Display an info step
pub fn step_info(ctx: &UiContext, message: &str) {
    if ctx.is_styled() {
        println!("{} {}", style("•").cyan(), message);
    } else {
        println!("[INFO] {}", message);
    }
}

/// Display a dimmed remark
pub fn remark(ctx: &UiContext, message: &str) {
    if ctx.is_styled() {
        println!("  {}", style(message).dim());
    } else {
        println!("  {}", message);
    }
}

/// Print a key-value pair, `-` standing in for unset values
pub fn key_value(ctx: &UiContext, key: &str, value: Option<&str>) {
    let value = value.unwrap_or("-");
    if ctx.is_styled() {
        println!("  {}: {}", style(key).dim(), value);
    } else {
        println!("  {}: {}", key, value);
    }
}
