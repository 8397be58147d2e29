use super::models::Grade;
use std::collections::HashMap;

/// The inverse of one roster mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum UndoAction {
    RemoveLastGrade { student: String },
    RestoreStudent { student: String, grades: Vec<Grade> },
}

impl UndoAction {
    pub fn kind(&self) -> &'static str {
        match self {
            UndoAction::RemoveLastGrade { .. } => "remove-last-grade",
            UndoAction::RestoreStudent { .. } => "restore-student",
        }
    }

    /// Applies the reversal to the live roster. Returns `false` if the roster
    /// no longer has anything for this action to reverse.
    pub fn revert(self, roster: &mut HashMap<String, Vec<Grade>>) -> bool {
        match self {
            UndoAction::RemoveLastGrade { student } => roster
                .get_mut(&student)
                .and_then(|grades| grades.pop())
                .is_some(),
            UndoAction::RestoreStudent { student, grades } => {
                // A student re-added since removal is replaced by the snapshot
                roster.insert(student, grades);
                true
            }
        }
    }
}

pub struct UndoManager {
    pub undo_stack: Vec<UndoAction>,
    limit: Option<usize>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            limit: None,
        }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn push(&mut self, action: UndoAction) {
        self.undo_stack.push(action);

        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.remove(0);
            }
        }
    }

    pub fn pop(&mut self) -> Option<UndoAction> {
        self.undo_stack.pop()
    }

    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new()
    }
}
