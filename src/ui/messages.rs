use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, Write};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged<T: fmt::Display>(
    out: &mut dyn Write,
    style: Style,
    icon: &str,
    msg: T,
) -> io::Result<()> {
    writeln!(out, "{} {}", style.paint(icon), msg)
}

pub fn info<T: fmt::Display>(out: &mut dyn Write, msg: T) -> io::Result<()> {
    tagged(out, Colour::Blue.bold(), ICON_INFO, msg)
}

pub fn success<T: fmt::Display>(out: &mut dyn Write, msg: T) -> io::Result<()> {
    tagged(out, Colour::Green.bold(), ICON_OK, msg)
}

pub fn warning<T: fmt::Display>(out: &mut dyn Write, msg: T) -> io::Result<()> {
    tagged(out, Colour::Yellow.bold(), ICON_WARN, msg)
}

pub fn error<T: fmt::Display>(out: &mut dyn Write, msg: T) -> io::Result<()> {
    tagged(out, Colour::Red.bold(), ICON_ERR, msg)
}
