use super::activity::ActivityLog;
use super::models::{self, Grade, LetterGrade};
use super::undo::{UndoAction, UndoManager};
use std::collections::HashMap;

/// A roster of students and their grades, with undo and an activity log.
///
/// Every operation reports anticipated failures (unknown student, duplicate
/// student, nothing to undo, no grades) through its return value.
#[derive(Default)]
pub struct Gradebook {
    grades_by_student: HashMap<String, Vec<Grade>>,
    undo_manager: UndoManager,
    activity_log: ActivityLog,
}

impl Gradebook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a gradebook whose activity log and undo stack keep at most the
    /// given number of entries. `None` leaves the corresponding store unbounded.
    pub fn bounded(log_capacity: Option<usize>, undo_limit: Option<usize>) -> Self {
        Self {
            grades_by_student: HashMap::new(),
            undo_manager: undo_limit.map_or_else(UndoManager::new, UndoManager::with_limit),
            activity_log: log_capacity.map_or_else(ActivityLog::new, ActivityLog::bounded),
        }
    }

    pub fn find_student_grades(&self, name: &str) -> Option<&[Grade]> {
        self.grades_by_student.get(name).map(Vec::as_slice)
    }

    pub fn add_student(&mut self, name: &str) -> bool {
        if self.grades_by_student.contains_key(name) {
            return false;
        }

        self.grades_by_student.insert(name.to_string(), Vec::new());
        log::debug!("added student {:?}", name);
        self.activity_log.record(format!("Added student {}", name));
        true
    }

    pub fn add_grade(&mut self, name: &str, grade: Grade) -> bool {
        let Some(grades) = self.grades_by_student.get_mut(name) else {
            return false;
        };

        grades.push(grade);
        self.undo_manager.push(UndoAction::RemoveLastGrade {
            student: name.to_string(),
        });
        log::debug!("added grade {} for {:?}", grade, name);
        self.activity_log
            .record(format!("Added grade {} for {}", grade, name));
        true
    }

    pub fn remove_student(&mut self, name: &str) -> bool {
        // The grades move into the undo action, so the restore sees exactly
        // what the student held at removal time.
        let Some(grades) = self.grades_by_student.remove(name) else {
            return false;
        };

        log::debug!("removed student {:?} with {} grades", name, grades.len());
        self.undo_manager.push(UndoAction::RestoreStudent {
            student: name.to_string(),
            grades,
        });
        self.activity_log.record(format!("Removed student {}", name));
        true
    }

    /// Reverses the most recent grade addition or student removal.
    ///
    /// Returns `false` without touching any state when there is nothing to undo.
    /// Adding a student is not undoable.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.undo_manager.pop() else {
            log::debug!("undo requested with an empty stack");
            return false;
        };

        log::debug!("undoing {:?}", action);
        let kind = action.kind();
        if !action.revert(&mut self.grades_by_student) {
            log::warn!("{} undo had nothing to revert", kind);
        }

        self.activity_log.record("Undid last action");
        true
    }

    pub fn average_for(&self, name: &str) -> Option<f64> {
        self.find_student_grades(name).and_then(models::mean)
    }

    pub fn letter_grade_for(&self, name: &str) -> Option<LetterGrade> {
        self.average_for(name).map(LetterGrade::from_average)
    }

    /// Mean over every individual grade in the roster, not a mean of
    /// per-student averages.
    pub fn class_average(&self) -> Option<f64> {
        models::mean(self.grades_by_student.values().flatten())
    }

    pub fn recent_log(&self, max_items: usize) -> Vec<&str> {
        self.activity_log.recent(max_items)
    }

    /// Every student and their grades, ordered by name.
    pub fn students(&self) -> Vec<(&str, &[Grade])> {
        let mut students: Vec<(&str, &[Grade])> = self
            .grades_by_student
            .iter()
            .map(|(name, grades)| (name.as_str(), grades.as_slice()))
            .collect();
        students.sort_by(|a, b| a.0.cmp(b.0));
        students
    }

    pub fn len(&self) -> usize {
        self.grades_by_student.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades_by_student.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_manager.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_manager.depth()
    }
}
