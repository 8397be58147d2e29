use std::collections::VecDeque;

/// Chronological record of every mutating gradebook operation.
///
/// Unbounded unless built with [`ActivityLog::bounded`], in which case the
/// oldest entries are evicted first.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<String>,
    capacity: Option<usize>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());

        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                self.entries.pop_front();
            }
        }
    }

    /// The last `max_items` entries, oldest first.
    pub fn recent(&self, max_items: usize) -> Vec<&str> {
        let start = self.entries.len().saturating_sub(max_items);
        self.entries.range(start..).map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
