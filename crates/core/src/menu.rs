//! Menu banner rendering.

use std::io::{self, Write};

use crate::config::DisplayConfig;

/// Help rows shown under the banner, as `(keys, description)`.
pub const MENU_ENTRIES: [(&str, &str); 9] = [
    ("+", "Add (A = A + B)"),
    ("-", "Subtract (A = A - B)"),
    ("*", "Multiply (A = A * B)"),
    ("/", "Divide (A = A / B)"),
    ("a-d", "Enter a value for register A-D"),
    ("1-4", "Clear register A-D"),
    ("m", "Show this menu"),
    ("p", "Print registers"),
    ("q", "Quit"),
];

/// Writes a separator line of `width` dashes.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn print_line<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(width))
}

/// Writes `title` centered in `width` columns.
///
/// When the padding is uneven the extra column goes on the right. A title
/// wider than `width` is written as-is.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn print_title<W: Write>(out: &mut W, title: &str, width: usize) -> io::Result<()> {
    writeln!(out, "{title:^width$}")
}

/// Writes the full menu: banner, one row per command, closing separator.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn print_menu<W: Write>(out: &mut W, display: &DisplayConfig) -> io::Result<()> {
    let width = display.menu_width;
    print_line(out, width)?;
    print_title(out, &display.title, width)?;
    print_line(out, width)?;
    for (keys, description) in MENU_ENTRIES {
        writeln!(out, "{keys}\t{description}")?;
    }
    print_line(out, width)
}
