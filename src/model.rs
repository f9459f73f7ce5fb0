use std::collections::HashMap;

/// Filters passed through to `git rev-list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub author: Option<String>,
    pub since: Option<String>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }
}

/// Standard output and exit code of a finished subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub stdout: Vec<u8>,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Number of commits per date key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionCounts {
    counts: HashMap<String, usize>,
}

impl RevisionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Entries ordered by key.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_builder() {
        let filters = Filters::new().with_author("Bob").with_since("2020-01-01");
        assert_eq!(filters.author.as_deref(), Some("Bob"));
        assert_eq!(filters.since.as_deref(), Some("2020-01-01"));
    }

    #[test]
    fn counts_start_at_zero() {
        let mut counts = RevisionCounts::new();
        assert_eq!(counts.get("2024-01-01"), 0);
        assert_eq!(counts.max_count(), 0);

        counts.increment("2024-01-02");
        counts.increment("2024-01-01");
        counts.increment("2024-01-02");

        assert_eq!(counts.get("2024-01-02"), 2);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.max_count(), 2);
        assert_eq!(counts.sorted(), vec![("2024-01-01", 1), ("2024-01-02", 2)]);
    }

    #[test]
    fn captured_success_requires_zero() {
        let ok = Captured { stdout: Vec::new(), code: Some(0) };
        let failed = Captured { stdout: Vec::new(), code: Some(1) };
        let killed = Captured { stdout: Vec::new(), code: None };
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }
}
