/// Editable text buffer with a character-indexed cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextSurface {
    content: String,
    cursor_chars: usize,
}

impl TextSurface {
    pub fn with_text(text: impl Into<String>) -> Self {
        let content = text.into();
        let cursor_chars = content.chars().count();
        Self {
            content,
            cursor_chars,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the whole buffer and parks the cursor at the end.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.move_cursor_to_end();
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_index = self.byte_index_for_cursor(self.cursor_chars);
        self.content.insert(byte_index, c);
        self.cursor_chars = self.cursor_chars.saturating_add(1);
    }

    pub fn insert_str(&mut self, text: &str) {
        let byte_index = self.byte_index_for_cursor(self.cursor_chars);
        self.content.insert_str(byte_index, text);
        self.cursor_chars = self.cursor_chars.saturating_add(text.chars().count());
    }

    pub fn insert_line_break(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_backward(&mut self) -> bool {
        let cursor = self.cursor_chars();
        if cursor == 0 {
            return false;
        }
        let end = self.byte_index_for_cursor(cursor);
        let start = self.byte_index_for_cursor(cursor - 1);
        if start >= end {
            return false;
        }
        self.content.drain(start..end);
        self.cursor_chars = cursor - 1;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        let cursor = self.cursor_chars();
        if cursor >= self.content.chars().count() {
            return false;
        }
        let start = self.byte_index_for_cursor(cursor);
        let end = self.byte_index_for_cursor(cursor + 1);
        self.content.drain(start..end);
        true
    }

    pub fn cursor_chars(&self) -> usize {
        self.cursor_chars.min(self.content.chars().count())
    }

    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor_chars() == 0 {
            return false;
        }
        self.cursor_chars = self.cursor_chars().saturating_sub(1);
        true
    }

    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor_chars() >= self.content.chars().count() {
            return false;
        }
        self.cursor_chars = self.cursor_chars().saturating_add(1);
        true
    }

    pub fn move_cursor_up(&mut self) -> bool {
        self.move_cursor_vertically(-1)
    }

    pub fn move_cursor_down(&mut self) -> bool {
        self.move_cursor_vertically(1)
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor_chars = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor_chars = self.content.chars().count();
    }

    fn byte_index_for_cursor(&self, cursor_chars: usize) -> usize {
        self.content
            .char_indices()
            .nth(cursor_chars)
            .map(|(index, _)| index)
            .unwrap_or(self.content.len())
    }

    fn cursor_line_column(&self) -> (usize, usize) {
        let mut line = 0_usize;
        let mut column = 0_usize;
        for ch in self.content.chars().take(self.cursor_chars()) {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    fn cursor_index_for_line_column(&self, target_line: usize, target_column: usize) -> usize {
        let mut line = 0_usize;
        let mut column = 0_usize;
        for (index, ch) in self.content.chars().enumerate() {
            if line == target_line && column == target_column {
                return index;
            }
            if ch == '\n' {
                if line == target_line {
                    return index;
                }
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        self.content.chars().count()
    }

    fn move_cursor_vertically(&mut self, delta_lines: isize) -> bool {
        let line_lengths: Vec<usize> = self
            .content
            .split('\n')
            .map(|line| line.chars().count())
            .collect();
        if line_lengths.len() <= 1 {
            return false;
        }
        let (line, column) = self.cursor_line_column();
        let target_line = line
            .saturating_add_signed(delta_lines)
            .min(line_lengths.len() - 1);
        if target_line == line {
            return false;
        }

        let target_column = column.min(line_lengths[target_line]);
        self.cursor_chars = self.cursor_index_for_line_column(target_line, target_column);
        true
    }
}
