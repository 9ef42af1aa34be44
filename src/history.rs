/// In-memory command history, oldest entry first.
///
/// Blank lines are never stored. There is no capacity bound and no
/// deduplication; entries live until the process exits.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to history. Returns false if the line was blank and skipped.
    pub fn append(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        self.entries.push(line.to_string());
        log::debug!("history: appended entry #{}", self.entries.len());
        true
    }

    /// Get an entry counting back from the most recent one (0 = newest)
    pub fn get(&self, offset_from_end: usize) -> Option<&str> {
        let index = self.entries.len().checked_sub(offset_from_end)?.checked_sub(1)?;
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in submission order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_lines_are_skipped() {
        let mut history = History::new();
        assert!(!history.append(""));
        assert!(!history.append("   \t "));
        assert!(history.is_empty());
    }

    #[test]
    fn get_counts_back_from_newest() {
        let mut history = History::new();
        history.append("first");
        history.append("second");
        history.append("third");

        assert_eq!(history.get(0), Some("third"));
        assert_eq!(history.get(2), Some("first"));
        assert_eq!(history.get(3), None);
        assert_eq!(history.get(usize::MAX), None);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let mut history = History::new();
        history.append("echo a");
        history.append("echo a");
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["echo a", "echo a"]);
    }

    #[test]
    fn lines_are_stored_verbatim() {
        let mut history = History::new();
        history.append("  echo  spaced  ");
        assert_eq!(history.get(0), Some("  echo  spaced  "));
    }

    proptest! {
        #[test]
        fn count_matches_non_blank_submissions(lines in proptest::collection::vec("[ a-z\t]{0,8}", 0..32)) {
            let mut history = History::new();
            for line in &lines {
                history.append(line);
            }

            let non_blank: Vec<&String> = lines.iter().filter(|l| !l.trim().is_empty()).collect();
            prop_assert_eq!(history.len(), non_blank.len());
            if let Some(last) = non_blank.last() {
                prop_assert_eq!(history.get(0), Some(last.as_str()));
            }
        }
    }
}
