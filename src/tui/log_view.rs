use crate::buffer::{LogBuffer, OutputLine};

/// Scrollable window over the session log
#[derive(Debug)]
pub struct LogView {
    buffer: LogBuffer,
    scroll_offset: usize,
    horizontal_scroll: usize,
    follow: bool,
    visible_lines: usize,
}

impl Default for LogView {
    fn default() -> Self {
        Self::new()
    }
}

impl LogView {
    pub fn new() -> Self {
        Self {
            buffer: LogBuffer::new(),
            scroll_offset: 0,
            horizontal_scroll: 0,
            follow: true,
            visible_lines: 0,
        }
    }

    /// Append a line, keeping the bottom in view while following
    pub fn push(&mut self, line: OutputLine) {
        self.buffer.push(line);
        if self.follow {
            self.scroll_to_bottom();
        }
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    /// Lines currently in the window
    pub fn visible(&self) -> &[OutputLine] {
        self.buffer.get_range(self.scroll_offset, self.visible_lines)
    }

    pub fn set_visible_lines(&mut self, lines: usize) {
        self.visible_lines = lines;
        if self.follow {
            self.scroll_to_bottom();
        } else {
            self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        }
    }

    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll_offset() {
            self.scroll_offset += 1;
        }
    }

    /// Scrolling up stops following the tail
    pub fn scroll_up(&mut self) {
        self.follow = false;
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_half_page_down(&mut self) {
        let half_page = self.visible_lines / 2;
        self.scroll_offset = (self.scroll_offset + half_page).min(self.max_scroll_offset());
    }

    pub fn scroll_half_page_up(&mut self) {
        self.follow = false;
        let half_page = self.visible_lines / 2;
        self.scroll_offset = self.scroll_offset.saturating_sub(half_page);
    }

    pub fn scroll_to_top(&mut self) {
        self.follow = false;
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll_offset();
    }

    pub fn follow(&self) -> bool {
        self.follow
    }

    pub fn toggle_follow(&mut self) {
        self.follow = !self.follow;
        if self.follow {
            self.scroll_to_bottom();
        }
    }

    pub fn horizontal_scroll(&self) -> usize {
        self.horizontal_scroll
    }

    pub fn scroll_left(&mut self) {
        self.horizontal_scroll = self.horizontal_scroll.saturating_sub(1);
    }

    pub fn scroll_right(&mut self) {
        self.horizontal_scroll += 1;
    }

    fn max_scroll_offset(&self) -> usize {
        self.buffer.len().saturating_sub(self.visible_lines)
    }
}
