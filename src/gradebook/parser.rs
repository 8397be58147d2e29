use super::models::Grade;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddStudent(String),
    AddGrade { name: String, grade: Grade },
    RemoveStudent(String),
    Undo,
    Show(String),
    Average(String),
    Letter(String),
    ClassAverage,
    /// `None` means "use the configured number of lines".
    Log(Option<usize>),
    List,
}

/// Parses one line of the command language. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    let command = match keyword.to_lowercase().as_str() {
        "add" => Command::AddStudent(require_name(rest)?),
        "grade" => parse_grade(rest)?,
        "remove" => Command::RemoveStudent(require_name(rest)?),
        "undo" => Command::Undo,
        "show" => Command::Show(require_name(rest)?),
        "avg" | "average" => Command::Average(require_name(rest)?),
        "letter" => Command::Letter(require_name(rest)?),
        "class" => Command::ClassAverage,
        "log" => Command::Log(parse_log_count(rest)?),
        "list" => Command::List,
        _ => return Err(ParseError::UnknownCommand(keyword.to_string())),
    };

    Ok(Some(command))
}

/// Parses a whole script, tagging failures with their 1-based line number.
pub fn parse_script(content: &str) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();

    for (line_number, line) in content.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(command)) => commands.push(command),
            Ok(None) => {}
            Err(e) => return Err(ParseError::AtLine(line_number + 1, Box::new(e))),
        }
    }

    Ok(commands)
}

fn require_name(rest: &str) -> Result<String, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingName);
    }
    Ok(rest.to_string())
}

// The grade is the last token so names may contain spaces
fn parse_grade(rest: &str) -> Result<Command, ParseError> {
    let Some((name, grade)) = rest.rsplit_once(char::is_whitespace) else {
        return if rest.is_empty() {
            Err(ParseError::MissingName)
        } else {
            Err(ParseError::MissingGrade)
        };
    };

    let grade = grade
        .parse::<Grade>()
        .map_err(|_| ParseError::InvalidNumber(grade.to_string()))?;

    Ok(Command::AddGrade {
        name: require_name(name.trim())?,
        grade,
    })
}

fn parse_log_count(rest: &str) -> Result<Option<usize>, ParseError> {
    if rest.is_empty() {
        return Ok(None);
    }

    let count = rest
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber(rest.to_string()))?;

    // Negative counts ask for nothing
    Ok(Some(usize::try_from(count).unwrap_or(0)))
}

#[derive(Debug, PartialEq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingName,
    MissingGrade,
    InvalidNumber(String),
    AtLine(usize, Box<ParseError>),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownCommand(keyword) => {
                write!(f, "Unknown command '{}'", keyword)
            }
            ParseError::MissingName => {
                write!(f, "Missing student name")
            }
            ParseError::MissingGrade => {
                write!(f, "Missing grade, expected 'grade <name> <number>'")
            }
            ParseError::InvalidNumber(value) => {
                write!(f, "'{}' is not a valid whole number", value)
            }
            ParseError::AtLine(line, e) => {
                write!(f, "line {}: {}", line, e)
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_and_comment_lines() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# roster for period 3"), Ok(None));
    }

    #[test]
    fn test_parse_add_and_remove() {
        assert_eq!(
            parse_line("add Sara"),
            Ok(Some(Command::AddStudent("Sara".to_string())))
        );
        assert_eq!(
            parse_line("  remove   Mary Ann  "),
            Ok(Some(Command::RemoveStudent("Mary Ann".to_string())))
        );
        assert_eq!(parse_line("add"), Err(ParseError::MissingName));
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!(
            parse_line("grade Sara 97"),
            Ok(Some(Command::AddGrade { name: "Sara".to_string(), grade: 97 }))
        );
        assert_eq!(
            parse_line("grade Mary Ann -4"),
            Ok(Some(Command::AddGrade { name: "Mary Ann".to_string(), grade: -4 }))
        );
    }

    #[test]
    fn test_parse_grade_errors() {
        assert_eq!(parse_line("grade"), Err(ParseError::MissingName));
        assert_eq!(parse_line("grade Sara"), Err(ParseError::MissingGrade));
        assert_eq!(
            parse_line("grade Sara ninety"),
            Err(ParseError::InvalidNumber("ninety".to_string()))
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(parse_line("UNDO"), Ok(Some(Command::Undo)));
        assert_eq!(parse_line("Class"), Ok(Some(Command::ClassAverage)));
        assert_eq!(
            parse_line("Avg sara"),
            Ok(Some(Command::Average("sara".to_string())))
        );
    }

    #[test]
    fn test_parse_log_counts() {
        assert_eq!(parse_line("log"), Ok(Some(Command::Log(None))));
        assert_eq!(parse_line("log 3"), Ok(Some(Command::Log(Some(3)))));
        assert_eq!(parse_line("log -2"), Ok(Some(Command::Log(Some(0)))));
        assert_eq!(
            parse_line("log many"),
            Err(ParseError::InvalidNumber("many".to_string()))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line("curve Sara 10"),
            Err(ParseError::UnknownCommand("curve".to_string()))
        );
    }

    #[test]
    fn test_parse_script() {
        let script = "# setup\nadd Sara\n\ngrade Sara 97\nundo\n";
        let commands = parse_script(script).unwrap();

        assert_eq!(
            commands,
            vec![
                Command::AddStudent("Sara".to_string()),
                Command::AddGrade { name: "Sara".to_string(), grade: 97 },
                Command::Undo,
            ]
        );
    }

    #[test]
    fn test_parse_script_reports_line_number() {
        let err = parse_script("add Sara\nfrobnicate\n").unwrap_err();

        assert_eq!(
            err,
            ParseError::AtLine(2, Box::new(ParseError::UnknownCommand("frobnicate".to_string())))
        );
        assert_eq!(
            err.to_string(),
            "line 2: Unknown command 'frobnicate'"
        );
    }
}
