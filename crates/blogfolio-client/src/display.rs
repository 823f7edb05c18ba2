// crates/blogfolio-client/src/display.rs
//
// Pure functions that produce ANSI output for the terminal page.
// Nothing here writes to stdout; main.rs owns the writer.

use blogfolio_terminal::caret::{caret_offset, TextMeasure};
use blogfolio_terminal::{Line, LineStyle};
use unicode_width::UnicodeWidthStr;

/// Measures text in terminal columns.
pub struct ColumnMeasure;

impl TextMeasure for ColumnMeasure {
    fn measure(&self, text: &str) -> Option<f64> {
        Some(text.width() as f64)
    }

    fn font_size(&self) -> f64 {
        1.0
    }
}

fn style_code(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Prompt => "\x1b[32m",
        LineStyle::Output => "",
        LineStyle::Info => "\x1b[36m",
        LineStyle::Error => "\x1b[31m",
        LineStyle::Warning => "\x1b[33m",
    }
}

/// One scrollback line, colored by style, newline-terminated.
pub fn render_line(line: &Line) -> String {
    let code = style_code(line.style);
    if code.is_empty() {
        format!("{}\r\n", line.text)
    } else {
        format!("{}{}\x1b[0m\r\n", code, line.text)
    }
}

pub fn render_lines(lines: &[Line]) -> String {
    lines.iter().map(render_line).collect()
}

/// Clear the screen and draw the header row and the whole scrollback from
/// the top.
pub fn render_redraw(header: &str, lines: &[Line]) -> String {
    format!("\x1b[2J\x1b[H{}\r\n{}", header, render_lines(lines))
}

/// Draw the input row: prompt, typed text, then park the cursor right after
/// the text.
pub fn render_prompt(prompt: &str, input: &str, measure: &dyn TextMeasure) -> String {
    let column = prompt.width() as u32 + 1 + caret_offset(input, measure) + 1;
    format!(
        "\r\x1b[K\x1b[32m{}\x1b[0m {}\x1b[{}G",
        prompt, input, column
    )
}

/// Rows the prompt plus `input` occupied once the terminal wrapped them.
pub fn input_rows(prompt: &str, input: &str, cols: u16) -> u16 {
    let cols = usize::from(cols.max(1));
    let width = prompt.width() + 1 + input.width();
    width.div_ceil(cols).clamp(1, usize::from(u16::MAX)) as u16
}

/// Remove the line the user just typed, including rows it wrapped onto, so
/// the echoed prompt line replaces it.
pub fn render_erase_input(prompt: &str, input: &str, cols: u16) -> String {
    format!("\x1b[{}A\r\x1b[J", input_rows(prompt, input, cols))
}

/// Header row with the theme icon and the view counter, redrawn in place on
/// every animation tick.
pub fn render_counter(theme_icon: &str, count_text: &str) -> String {
    format!("\r\x1b[K{}  \x1b[2m👁️ {} views\x1b[0m", theme_icon, count_text)
}

/// The header row as its own line, printed again whenever the theme icon or
/// the counter text changes after the page has loaded.
pub fn render_header(theme_icon: &str, count_text: &str) -> String {
    format!("{}\r\n", render_counter(theme_icon, count_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ansi(input: &str, cols: u16, rows: u16) -> vt100::Parser {
        let mut parser = vt100::Parser::new(rows, cols, 0);
        parser.process(input.as_bytes());
        parser
    }

    fn get_row(screen: &vt100::Screen, row: u16, cols: u16) -> String {
        screen.rows(0, cols).nth(row as usize).unwrap_or_default()
    }

    #[test]
    fn test_render_line_styles() {
        let err = render_line(&Line::new(LineStyle::Error, "Command not found: x"));
        assert!(err.starts_with("\x1b[31m"));
        assert!(err.ends_with("\x1b[0m\r\n"));

        let plain = render_line(&Line::new(LineStyle::Output, "asnan"));
        assert_eq!(plain, "asnan\r\n");
    }

    #[test]
    fn test_lines_render_one_per_row() {
        let lines = vec![
            Line::new(LineStyle::Prompt, "asnan@blogfolio:~$ ls"),
            Line::new(LineStyle::Info, "Files in current directory:"),
            Line::new(LineStyle::Output, "about.txt"),
        ];
        let parser = parse_ansi(&render_lines(&lines), 60, 10);
        let screen = parser.screen();
        assert_eq!(get_row(screen, 0, 60).trim_end(), "asnan@blogfolio:~$ ls");
        assert_eq!(get_row(screen, 1, 60).trim_end(), "Files in current directory:");
        assert_eq!(get_row(screen, 2, 60).trim_end(), "about.txt");
    }

    #[test]
    fn test_redraw_clears_previous_content() {
        let mut parser = vt100::Parser::new(10, 40, 0);
        parser.process(b"old junk\r\nmore junk\r\n");
        let lines = vec![Line::new(LineStyle::Info, "fresh")];
        parser.process(render_redraw(&render_counter("☀️", "0"), &lines).as_bytes());
        let screen = parser.screen();
        assert!(get_row(screen, 0, 40).contains("0 views"));
        assert_eq!(get_row(screen, 1, 40).trim_end(), "fresh");
        assert_eq!(get_row(screen, 2, 40).trim_end(), "");
    }

    #[test]
    fn test_prompt_cursor_follows_input() {
        let cols: u16 = 60;
        let output = render_prompt("asnan@blogfolio:~$", "echo hi", &ColumnMeasure);
        let parser = parse_ansi(&output, cols, 5);
        let screen = parser.screen();
        assert_eq!(get_row(screen, 0, cols).trim_end(), "asnan@blogfolio:~$ echo hi");
        // 18 prompt columns + space + 7 input columns.
        assert_eq!(screen.cursor_position(), (0, 26));
    }

    #[test]
    fn test_prompt_cursor_with_empty_input() {
        let output = render_prompt("$", "", &ColumnMeasure);
        let parser = parse_ansi(&output, 20, 5);
        assert_eq!(parser.screen().cursor_position(), (0, 2));
    }

    #[test]
    fn test_prompt_cursor_with_wide_chars() {
        let output = render_prompt("$", "日本", &ColumnMeasure);
        let parser = parse_ansi(&output, 20, 5);
        assert_eq!(parser.screen().cursor_position(), (0, 6));
    }

    #[test]
    fn test_erase_input_moves_up_and_clears() {
        let mut parser = vt100::Parser::new(5, 40, 0);
        parser.process(b"first\r\n$ whoami\r\n");
        parser.process(render_erase_input("$", "whoami", 40).as_bytes());
        let screen = parser.screen();
        assert_eq!(get_row(screen, 1, 40).trim_end(), "");
        assert_eq!(screen.cursor_position(), (1, 0));
        assert_eq!(get_row(screen, 0, 40).trim_end(), "first");
    }

    #[test]
    fn test_erase_input_clears_wrapped_rows() {
        let cols: u16 = 20;
        let typed = "echo ".to_string() + &"x".repeat(30);
        let mut parser = vt100::Parser::new(6, cols, 0);
        parser.process(b"first\r\n");
        parser.process(format!("$ {}\r\n", typed).as_bytes());
        assert_eq!(input_rows("$", &typed, cols), 2);

        parser.process(render_erase_input("$", &typed, cols).as_bytes());
        let screen = parser.screen();
        assert_eq!(get_row(screen, 0, cols).trim_end(), "first");
        assert_eq!(get_row(screen, 1, cols).trim_end(), "");
        assert_eq!(get_row(screen, 2, cols).trim_end(), "");
        assert_eq!(screen.cursor_position(), (1, 0));
    }

    #[test]
    fn test_input_rows_boundaries() {
        assert_eq!(input_rows("$", "", 20), 1);
        // "$ " plus 18 columns fills the row exactly without wrapping.
        assert_eq!(input_rows("$", &"x".repeat(18), 20), 1);
        assert_eq!(input_rows("$", &"x".repeat(19), 20), 2);
        assert_eq!(input_rows("$", "abc", 0), 5);
    }

    #[test]
    fn test_header_is_its_own_line() {
        let mut parser = vt100::Parser::new(5, 40, 0);
        parser.process(b"Theme toggled!\r\n");
        parser.process(render_header("☀️", "0").as_bytes());
        let screen = parser.screen();
        assert_eq!(get_row(screen, 0, 40).trim_end(), "Theme toggled!");
        assert!(get_row(screen, 1, 40).contains("0 views"));
        assert_eq!(screen.cursor_position(), (2, 0));
    }

    #[test]
    fn test_counter_redraws_in_place() {
        let mut parser = vt100::Parser::new(5, 40, 0);
        parser.process(render_counter("🌙", "1").as_bytes());
        parser.process(render_counter("🌙", "1.5K").as_bytes());
        let row = get_row(parser.screen(), 0, 40);
        assert!(row.contains("1.5K views"));
        assert!(!row.contains(" 1 views"));
    }
}
