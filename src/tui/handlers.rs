use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Esc => NormalModeAction::ClearStatus,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveSelectionDown,
            KeyCode::Char('a') => NormalModeAction::AddStudent,
            KeyCode::Char('g') | KeyCode::Enter => NormalModeAction::AddGrade,
            KeyCode::Char('d') => NormalModeAction::RemoveStudent,
            KeyCode::Char('u') => NormalModeAction::Undo,
            KeyCode::Char(':') => NormalModeAction::EnterCommandMode,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    pub fn handle_edit_mode_key(key_event: KeyEvent) -> EditModeAction {
        match key_event.code {
            KeyCode::Esc => EditModeAction::CancelEdit,
            KeyCode::Enter => EditModeAction::ConfirmEdit,
            KeyCode::Backspace => EditModeAction::Backspace,
            KeyCode::Delete => EditModeAction::Delete,
            KeyCode::Left => EditModeAction::MoveCursorLeft,
            KeyCode::Right => EditModeAction::MoveCursorRight,
            KeyCode::Home => EditModeAction::MoveCursorHome,
            KeyCode::End => EditModeAction::MoveCursorEnd,
            KeyCode::Char(c) => EditModeAction::InsertChar(c),
            _ => EditModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    ClearStatus,
    MoveSelectionUp,
    MoveSelectionDown,
    AddStudent,
    AddGrade,
    RemoveStudent,
    Undo,
    EnterCommandMode,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum EditModeAction {
    None,
    CancelEdit,
    ConfirmEdit,
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_basic_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ClearStatus);

        let key_event = KeyEvent::from(KeyCode::Char('?'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::None);
    }

    #[test]
    fn test_normal_mode_navigation_keys() {
        let key_event = KeyEvent::from(KeyCode::Up);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionUp);

        let key_event = KeyEvent::from(KeyCode::Char('j'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionDown);

        let key_event = KeyEvent::from(KeyCode::Char('k'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionUp);
    }

    #[test]
    fn test_normal_mode_gradebook_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('a'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::AddStudent);

        let key_event = KeyEvent::from(KeyCode::Char('g'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::AddGrade);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::AddGrade);

        let key_event = KeyEvent::from(KeyCode::Char('d'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::RemoveStudent);

        let key_event = KeyEvent::from(KeyCode::Char('u'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Undo);

        let key_event = KeyEvent::from(KeyCode::Char(':'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::EnterCommandMode);
    }

    #[test]
    fn test_normal_mode_ctrl_keys() {
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);
    }

    #[test]
    fn test_help_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('?'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::None);
    }

    #[test]
    fn test_edit_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::CancelEdit);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::ConfirmEdit);

        let key_event = KeyEvent::from(KeyCode::Backspace);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::Backspace);

        let key_event = KeyEvent::from(KeyCode::Delete);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::Delete);

        let key_event = KeyEvent::from(KeyCode::Home);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::MoveCursorHome);

        // Typing 'q' in a prompt must not quit
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::InsertChar('q'));
    }
}
