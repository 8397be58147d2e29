use crate::gradebook::models::Grade;
use crate::gradebook::{parser, report, Gradebook};
use crate::tui::edit::{EditState, PromptKind};
use crate::tui::handlers::{EditModeAction, HelpModeAction, KeyHandler, NormalModeAction};
use crate::tui::navigation::NavigationState;
use anyhow::Result;
use crossterm::event::KeyEvent;

pub struct App {
    pub gradebook: Gradebook,
    pub navigation: NavigationState,
    pub edit: EditState,
    pub help_mode: bool,
    pub should_quit: bool,
    pub status: Option<String>,
    pub log_lines: usize,
}

impl App {
    pub fn new(gradebook: Gradebook, log_lines: usize) -> Self {
        Self {
            gradebook,
            navigation: NavigationState::new(),
            edit: EditState::new(),
            help_mode: false,
            should_quit: false,
            status: None,
            log_lines,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else if self.edit.is_editing() {
            self.handle_edit_mode_key(key_event);
        } else {
            self.handle_normal_mode_key(key_event);
        }
        Ok(())
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::ClearStatus => self.status = None,
            NormalModeAction::MoveSelectionUp => self.navigation.move_selection_up(),
            NormalModeAction::MoveSelectionDown => {
                self.navigation.move_selection_down(self.gradebook.len())
            }
            NormalModeAction::AddStudent => self.edit.enter_edit_mode(PromptKind::AddStudent),
            NormalModeAction::AddGrade => match self.selected_student() {
                Some(name) => self.edit.enter_edit_mode(PromptKind::AddGrade(name)),
                None => self.status = Some("Add a student first".to_string()),
            },
            NormalModeAction::RemoveStudent => self.remove_selected_student(),
            NormalModeAction::Undo => self.undo(),
            NormalModeAction::EnterCommandMode => self.edit.enter_edit_mode(PromptKind::Command),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
            self.help_mode = false;
        }
    }

    fn handle_edit_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_edit_mode_key(key_event) {
            EditModeAction::CancelEdit => {
                self.edit.exit_edit_mode();
            }
            EditModeAction::ConfirmEdit => self.confirm_edit(),
            EditModeAction::Backspace => self.edit.backspace(),
            EditModeAction::Delete => self.edit.delete(),
            EditModeAction::MoveCursorLeft => self.edit.move_cursor_left(),
            EditModeAction::MoveCursorRight => self.edit.move_cursor_right(),
            EditModeAction::MoveCursorHome => self.edit.move_cursor_home(),
            EditModeAction::MoveCursorEnd => self.edit.move_cursor_end(),
            EditModeAction::InsertChar(c) => self.edit.insert_char(c),
            EditModeAction::None => {}
        }
    }

    fn confirm_edit(&mut self) {
        let Some((prompt, content)) = self.edit.exit_edit_mode() else {
            return;
        };
        let content = content.trim();

        match prompt {
            PromptKind::AddStudent => self.add_student(content),
            PromptKind::AddGrade(name) => self.add_grade(&name, content),
            PromptKind::Command => self.run_command(content),
        }
    }

    pub fn selected_student(&self) -> Option<String> {
        self.gradebook
            .students()
            .get(self.navigation.selected_index)
            .map(|(name, _)| name.to_string())
    }

    pub fn add_student(&mut self, name: &str) {
        if name.is_empty() {
            self.status = Some("Student name cannot be empty".to_string());
            return;
        }

        if self.gradebook.add_student(name) {
            self.select_student(name);
            self.status = Some(format!("Added student {}", name));
        } else {
            self.status = Some(format!("Student {} already exists", name));
        }
    }

    pub fn add_grade(&mut self, name: &str, input: &str) {
        let grade = match input.parse::<Grade>() {
            Ok(grade) => grade,
            Err(_) => {
                self.status = Some(format!("'{}' is not a valid whole number", input));
                return;
            }
        };

        self.status = Some(if self.gradebook.add_grade(name, grade) {
            format!("Added grade {} for {}", grade, name)
        } else {
            format!("No student named {}", name)
        });
    }

    pub fn remove_selected_student(&mut self) {
        let Some(name) = self.selected_student() else {
            self.status = Some("No student selected".to_string());
            return;
        };

        if self.gradebook.remove_student(&name) {
            self.status = Some(format!("Removed student {} (u to undo)", name));
        }
        self.navigation.clamp(self.gradebook.len());
    }

    pub fn undo(&mut self) {
        self.status = Some(if self.gradebook.undo() {
            "Undid last action".to_string()
        } else {
            "Nothing to undo".to_string()
        });
        self.navigation.clamp(self.gradebook.len());
    }

    pub fn run_command(&mut self, line: &str) {
        match parser::parse_line(line) {
            Ok(Some(command)) => {
                let output = report::execute(&mut self.gradebook, &command, self.log_lines);
                self.status = Some(output.join(" | "));
                self.navigation.clamp(self.gradebook.len());
            }
            Ok(None) => {}
            Err(e @ parser::ParseError::UnknownCommand(_)) => {
                self.status = Some(format!("{}. Press '?' for help.", e));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn select_student(&mut self, name: &str) {
        let students = self.gradebook.students();
        if let Some(index) = students.iter().position(|(student, _)| *student == name) {
            self.navigation.select(index, students.len());
        }
    }
}
