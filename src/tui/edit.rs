/// What the text typed into the prompt will be used for.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptKind {
    AddStudent,
    AddGrade(String),
    Command,
}

impl PromptKind {
    pub fn label(&self) -> String {
        match self {
            PromptKind::AddStudent => "New student".to_string(),
            PromptKind::AddGrade(name) => format!("Grade for {}", name),
            PromptKind::Command => ":".to_string(),
        }
    }
}

/// Single-line input buffer with a UTF-8 aware cursor.
pub struct EditState {
    pub prompt: Option<PromptKind>,
    pub edit_buffer: String,
    pub edit_cursor_position: usize,
}

impl EditState {
    pub fn new() -> Self {
        Self {
            prompt: None,
            edit_buffer: String::new(),
            edit_cursor_position: 0,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn enter_edit_mode(&mut self, prompt: PromptKind) {
        self.edit_buffer.clear();
        self.edit_cursor_position = 0;
        self.prompt = Some(prompt);
    }

    /// Leaves edit mode, handing back the prompt and whatever was typed.
    pub fn exit_edit_mode(&mut self) -> Option<(PromptKind, String)> {
        let prompt = self.prompt.take()?;
        let content = std::mem::take(&mut self.edit_buffer);
        self.edit_cursor_position = 0;
        Some((prompt, content))
    }

    pub fn insert_char(&mut self, c: char) {
        self.edit_buffer.insert(self.edit_cursor_position, c);
        self.edit_cursor_position += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(previous) = self.previous_boundary() {
            self.edit_buffer.remove(previous);
            self.edit_cursor_position = previous;
        }
    }

    pub fn delete(&mut self) {
        if self.edit_cursor_position < self.edit_buffer.len() {
            self.edit_buffer.remove(self.edit_cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(previous) = self.previous_boundary() {
            self.edit_cursor_position = previous;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.edit_buffer[self.edit_cursor_position..].chars().next() {
            self.edit_cursor_position += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.edit_cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.edit_cursor_position = self.edit_buffer.len();
    }

    fn previous_boundary(&self) -> Option<usize> {
        self.edit_buffer[..self.edit_cursor_position]
            .char_indices()
            .next_back()
            .map(|(index, _)| index)
    }
}
