use colored::Colorize;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::config::StockroomConfig;
use stockroom::model::Item;
use unicode_width::UnicodeWidthStr;

const NAME_HEADER: &str = "Name";
const STOCK_HEADER: &str = "Stock";
const MAX_NAME_WIDTH: usize = 60;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }
    print!("{}", render_items(items));
}

pub(super) fn print_config(config: &StockroomConfig) {
    for key in StockroomConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Two-column table: names left-aligned, stock right-aligned, negatives in red.
fn render_items(items: &[Item]) -> String {
    let stock_strings: Vec<String> = items.iter().map(|i| i.stock_count.to_string()).collect();

    let name_width = items
        .iter()
        .map(|i| i.name.width())
        .chain(std::iter::once(NAME_HEADER.width()))
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);
    let stock_width = stock_strings
        .iter()
        .map(|s| s.width())
        .chain(std::iter::once(STOCK_HEADER.width()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}\n",
        pad_right(NAME_HEADER, name_width).bold(),
        format!("{:>w$}", STOCK_HEADER, w = stock_width).bold()
    ));

    for (item, stock) in items.iter().zip(&stock_strings) {
        let name = truncate_to_width(&item.name, name_width);
        let stock_cell = format!("{:>w$}", stock, w = stock_width);
        let stock_cell = if item.stock_count < 0 {
            stock_cell.red()
        } else {
            stock_cell.normal()
        };
        out.push_str(&format!("{}  {}\n", pad_right(&name, name_width), stock_cell));
    }
    out
}

fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_aligned_columns() {
        colored::control::set_override(false);
        let items = vec![Item::new("Widget", 5), Item::new("Big gadget", -12)];
        let rendered = render_items(&items);
        assert_eq!(
            rendered,
            "Name        Stock\nWidget          5\nBig gadget    -12\n"
        );
    }

    #[test]
    fn truncates_long_names() {
        let long = "x".repeat(80);
        let cut = truncate_to_width(&long, 10);
        assert_eq!(cut.width(), 10);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn pads_wide_characters_by_display_width() {
        assert_eq!(pad_right("日本", 6), "日本  ");
    }
}
