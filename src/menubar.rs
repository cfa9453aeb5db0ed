use std::io::Write;

use crossterm::{cursor, queue, style, terminal};

/// Key hints shown while a show is playing.
pub const PLAYER_ITEMS: &[&str] = &[
    "[Space] pause",
    "[r] relaunch",
    "[F11] full",
    "[q][Esc] quit",
];

/// Draw the menu bar on the top row.
pub fn render_menubar(out: &mut impl Write, items: &[&str]) -> anyhow::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        style::ResetColor,
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::Print(" "),
    )?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            queue!(out, style::Print("  "))?;
        }
        print_menu_item(out, item)?;
    }
    out.flush()?;
    Ok(())
}

/// Print a menu item, bolding key names in `[...]` and dimming the rest.
pub fn print_menu_item(out: &mut impl Write, item: &str) -> anyhow::Result<()> {
    for (text, is_key) in split_keys(item) {
        let attr = if is_key {
            style::Attribute::Bold
        } else {
            style::Attribute::Dim
        };
        queue!(
            out,
            style::SetAttribute(attr),
            style::Print(text),
            style::SetAttribute(style::Attribute::Reset),
        )?;
    }
    Ok(())
}

/// Split an item into runs, flagging the bracketed key runs.
/// An unclosed bracket is kept as plain text.
fn split_keys(item: &str) -> Vec<(&str, bool)> {
    let mut runs = Vec::new();
    let mut rest = item;
    while !rest.is_empty() {
        let Some(open) = rest.find('[') else {
            runs.push((rest, false));
            break;
        };
        if open > 0 {
            runs.push((&rest[..open], false));
        }
        rest = &rest[open..];
        match rest.find(']') {
            Some(close) => {
                runs.push((&rest[..=close], true));
                rest = &rest[close + 1..];
            }
            None => {
                runs.push((rest, false));
                break;
            }
        }
    }
    runs
}
