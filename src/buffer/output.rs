use ansi_to_tui::IntoText;
use ratatui::text::Span;

/// Where a log line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Stdout,
    Stderr,
    /// Produced by the front-end itself (launch errors, exit status)
    Notice,
}

/// One line of captured output
#[derive(Debug, Clone)]
pub struct OutputLine {
    pub kind: OutputKind,
    /// Pre-parsed spans with styles (for rendering)
    spans: Vec<Span<'static>>,
}

impl OutputLine {
    /// Create a new OutputLine
    ///
    /// Parses ANSI escape sequences into styled spans.
    pub fn new(kind: OutputKind, content: String) -> Self {
        let spans = match content.as_str().into_text() {
            Ok(text) => text
                .lines
                .into_iter()
                .next()
                .map(|line| line.spans)
                .unwrap_or_default(),
            Err(_) => vec![Span::raw(content)],
        };

        Self { kind, spans }
    }

    /// Line emitted by the front-end rather than the child
    pub fn notice(content: impl Into<String>) -> Self {
        Self::new(OutputKind::Notice, content.into())
    }

    pub fn spans(&self) -> &[Span<'static>] {
        &self.spans
    }

    /// Plain text without ANSI escape sequences (derived from spans)
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.content.as_ref()).collect()
    }
}

/// Append-only log of everything the session has shown.
///
/// Lines are never evicted; the buffer lives as long as the session.
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: Vec<OutputLine>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    /// Get lines in specified range
    ///
    /// Empty or partial result if out of bounds.
    pub fn get_range(&self, start: usize, count: usize) -> &[OutputLine] {
        let start = start.min(self.lines.len());
        let end = start.saturating_add(count).min(self.lines.len());
        &self.lines[start..end]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutputLine> {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_buffer_push_adds_line_to_buffer() {
        let mut buffer = LogBuffer::new();
        buffer.push(OutputLine::new(OutputKind::Stdout, "hello".into()));

        assert_eq!(buffer.len(), 1);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn log_buffer_never_evicts() {
        let mut buffer = LogBuffer::new();
        for i in 0..5000 {
            buffer.push(OutputLine::new(OutputKind::Stdout, format!("line{}", i)));
        }

        assert_eq!(buffer.len(), 5000);
        assert_eq!(buffer.get_range(0, 1)[0].plain(), "line0");
    }

    #[test]
    fn log_buffer_get_range_returns_correct_lines() {
        let mut buffer = LogBuffer::new();
        for i in 0..10 {
            buffer.push(OutputLine::new(OutputKind::Stdout, format!("line{}", i)));
        }

        let lines: Vec<_> = buffer.get_range(3, 4).iter().map(|l| l.plain()).collect();
        assert_eq!(lines, vec!["line3", "line4", "line5", "line6"]);
    }

    #[test]
    fn log_buffer_get_range_returns_partial_when_exceeds_buffer() {
        let mut buffer = LogBuffer::new();
        for i in 0..5 {
            buffer.push(OutputLine::new(OutputKind::Stdout, format!("line{}", i)));
        }

        let lines = buffer.get_range(3, 10);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].plain(), "line4");
        assert!(buffer.get_range(10, 5).is_empty());
    }

    #[test]
    fn log_buffer_iter_preserves_push_order_across_kinds() {
        let mut buffer = LogBuffer::new();
        buffer.push(OutputLine::new(OutputKind::Stdout, "line1".into()));
        buffer.push(OutputLine::new(OutputKind::Stderr, "line2".into()));
        buffer.push(OutputLine::notice("line3"));

        let contents: Vec<_> = buffer.iter().map(|l| (l.kind, l.plain())).collect();
        assert_eq!(
            contents,
            vec![
                (OutputKind::Stdout, "line1".to_string()),
                (OutputKind::Stderr, "line2".to_string()),
                (OutputKind::Notice, "line3".to_string()),
            ]
        );
    }

    #[test]
    fn output_line_spans_contains_parsed_ansi_styles() {
        use ratatui::style::Color;

        let line = OutputLine::new(OutputKind::Stdout, "\x1b[31mERROR\x1b[0m: timeout".into());
        let spans = line.spans();

        assert_eq!(spans[0].content, "ERROR");
        assert_eq!(spans[0].style.fg, Some(Color::Red));
        assert_eq!(line.plain(), "ERROR: timeout");
    }

    #[test]
    fn output_line_spans_handles_plain_text() {
        let line = OutputLine::new(OutputKind::Stdout, "hello world".into());
        let spans = line.spans();

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "hello world");
    }

    #[test]
    fn output_line_empty_content_has_no_spans() {
        let line = OutputLine::new(OutputKind::Stdout, String::new());
        assert_eq!(line.plain(), "");
    }
}
