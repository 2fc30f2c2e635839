//! Line-oriented chat shell over [`ChatScreen`].

use std::io::{BufRead, Write};

use falsegrip_core::chat::ChatScreen;
use falsegrip_core::render::{
    Alignment, INPUT_PLACEHOLDER, RenderedRow, SCREEN_SUBTITLE, SCREEN_TITLE, render_transcript,
};

use crate::Result;

/// Typing this on its own line ends the session.
pub const QUIT_COMMAND: &str = "/quit";

/// Reads messages from `input` until EOF or [`QUIT_COMMAND`], printing the
/// transcript to `out` as it grows.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, width: usize) -> Result<()> {
    let mut screen = ChatScreen::new();

    writeln!(out, "{SCREEN_TITLE}")?;
    writeln!(out, "{SCREEN_SUBTITLE}")?;
    writeln!(out, "{}", "─".repeat(width))?;
    for row in render_transcript(&screen) {
        write_row(&mut out, &row, width)?;
    }
    writeln!(out, "({INPUT_PLACEHOLDER}, {QUIT_COMMAND} to exit)")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim() == QUIT_COMMAND {
            break;
        }

        screen.update_input(line);
        if screen.send().is_none() {
            continue;
        }

        if let Some(row) = render_transcript(&screen).last() {
            write_row(&mut out, row, width)?;
        }
        out.flush()?;
    }

    log::info!("session ended with {} messages", screen.messages().len());
    Ok(())
}

/// Writes one bubble, wrapped to 80% of the screen and aligned by role.
fn write_row<W: Write>(out: &mut W, row: &RenderedRow<'_>, width: usize) -> Result<()> {
    let bubble_width = (width * 4 / 5).max(1);
    for line in wrap(row.content, bubble_width) {
        match row.style.alignment {
            Alignment::Start => writeln!(out, "{line}")?,
            Alignment::End => writeln!(out, "{line:>width$}")?,
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Greedy word wrap. Words longer than `max` are split.
fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();

            while !chars.is_empty() {
                let room = if current_len == 0 {
                    max
                } else {
                    max.saturating_sub(current_len + 1)
                };

                if chars.len() <= room {
                    if current_len > 0 {
                        current.push(' ');
                        current_len += 1;
                    }
                    current.extend(chars.iter());
                    current_len += chars.len();
                    chars.clear();
                } else if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                } else {
                    let rest = chars.split_off(max);
                    lines.push(chars.iter().collect());
                    chars = rest;
                }
            }
        }

        if current_len > 0 || lines.is_empty() {
            lines.push(current);
        }
    }

    lines
}
