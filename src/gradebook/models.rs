use std::fmt;

pub type Grade = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Buckets an average by its truncated tens digit. Averages of 100 land on
    /// 10 and still count as an A; anything outside 6..=10 is an F.
    pub fn from_average(average: f64) -> Self {
        match (average as i64) / 10 {
            10 | 9 => Self::A,
            8 => Self::B,
            7 => Self::C,
            6 => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arithmetic mean of a grade sequence, or `None` when there is nothing to average.
pub fn mean<'a, I>(grades: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Grade>,
{
    let (sum, count) = grades
        .into_iter()
        .fold((0i64, 0usize), |(sum, count), &grade| (sum + i64::from(grade), count + 1));

    if count == 0 {
        return None;
    }

    Some(sum as f64 / count as f64)
}
