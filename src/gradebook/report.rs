use super::book::Gradebook;
use super::models::Grade;
use super::parser::Command;

/// Runs a single command against the gradebook and renders the outcome as
/// display lines.
pub fn execute(book: &mut Gradebook, command: &Command, log_lines: usize) -> Vec<String> {
    match command {
        Command::AddStudent(name) => {
            if book.add_student(name) {
                vec![format!("Added student {}", name)]
            } else {
                vec![format!("Student {} already exists", name)]
            }
        }
        Command::AddGrade { name, grade } => {
            if book.add_grade(name, *grade) {
                vec![format!("Added grade {} for {}", grade, name)]
            } else {
                vec![missing_student(name)]
            }
        }
        Command::RemoveStudent(name) => {
            if book.remove_student(name) {
                vec![format!("Removed student {}", name)]
            } else {
                vec![missing_student(name)]
            }
        }
        Command::Undo => {
            if book.undo() {
                vec!["Undid last action".to_string()]
            } else {
                vec!["Nothing to undo".to_string()]
            }
        }
        Command::Show(name) => match book.find_student_grades(name) {
            Some(grades) => vec![format!("{}: {}", name, format_grades(grades))],
            None => vec![missing_student(name)],
        },
        Command::Average(name) => {
            if book.find_student_grades(name).is_none() {
                return vec![missing_student(name)];
            }
            vec![format!("{}: {}", name, format_average(book.average_for(name)))]
        }
        Command::Letter(name) => {
            if book.find_student_grades(name).is_none() {
                return vec![missing_student(name)];
            }
            let letter = book
                .letter_grade_for(name)
                .map_or_else(|| "n/a".to_string(), |letter| letter.to_string());
            vec![format!("{}: {}", name, letter)]
        }
        Command::ClassAverage => {
            vec![format!("Class average: {}", format_average(book.class_average()))]
        }
        Command::Log(count) => book
            .recent_log(count.unwrap_or(log_lines))
            .into_iter()
            .map(str::to_string)
            .collect(),
        Command::List => list_students(book),
    }
}

pub fn list_students(book: &Gradebook) -> Vec<String> {
    if book.is_empty() {
        return vec!["No students".to_string()];
    }

    book.students()
        .into_iter()
        .map(|(name, grades)| format_student_line(book, name, grades))
        .collect()
}

pub fn format_student_line(book: &Gradebook, name: &str, grades: &[Grade]) -> String {
    let letter = book
        .letter_grade_for(name)
        .map_or("-", |letter| letter.as_str());
    format!(
        "{} [{}] avg {} {}",
        name,
        format_grades(grades),
        format_average(book.average_for(name)),
        letter
    )
}

pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(average) => format!("{:.2}", average),
        None => "n/a".to_string(),
    }
}

pub fn format_grades(grades: &[Grade]) -> String {
    grades
        .iter()
        .map(|grade| grade.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn missing_student(name: &str) -> String {
    format!("No student named {}", name)
}
