//! Location collaborator (the "URL hash")

/// Where the current navigation fragment lives.
///
/// Fragments are passed without the leading `#`.
pub trait NavigationSink {
    /// Current fragment
    fn read(&self) -> String;

    /// Rewrite the current fragment in place, without a new history entry
    fn replace(&mut self, fragment: &str);

    /// Whether the fragment was changed from outside since the last call
    /// (typed location, back/forward). The navigator polls this every tick.
    fn take_external_change(&mut self) -> bool {
        false
    }
}

/// In-memory location with a browser-like history stack
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<String>,
    index: usize,
    external_change: bool,
    replace_count: usize,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryLocation {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![strip_hash(initial).to_string()],
            index: 0,
            external_change: false,
            replace_count: 0,
        }
    }

    /// Navigate to a new fragment, pushing a history entry.
    /// Returns false (and signals nothing) when it equals the current one.
    pub fn navigate(&mut self, fragment: &str) -> bool {
        let fragment = strip_hash(fragment);
        if self.entries[self.index] == fragment {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(fragment.to_string());
        self.index += 1;
        self.external_change = true;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.external_change = true;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        self.external_change = true;
        true
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// Number of in-place rewrites so far
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }
}

impl NavigationSink for MemoryLocation {
    fn read(&self) -> String {
        self.entries[self.index].clone()
    }

    fn replace(&mut self, fragment: &str) {
        self.entries[self.index] = strip_hash(fragment).to_string();
        self.replace_count += 1;
    }

    fn take_external_change(&mut self) -> bool {
        std::mem::take(&mut self.external_change)
    }
}

fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_does_not_grow_history() {
        let mut location = MemoryLocation::new("#about");
        location.replace("career");
        location.replace("career/first-job");
        assert_eq!(location.read(), "career/first-job");
        assert_eq!(location.history_len(), 1);
        assert_eq!(location.replace_count(), 2);
        assert!(!location.take_external_change());
    }

    #[test]
    fn test_navigate_back_forward_signal_external_change() {
        let mut location = MemoryLocation::new("about");
        assert!(location.navigate("#skills"));
        assert!(location.take_external_change());
        assert!(!location.take_external_change());

        assert!(location.back());
        assert_eq!(location.read(), "about");
        assert!(location.take_external_change());

        assert!(location.forward());
        assert_eq!(location.read(), "skills");
        assert!(!location.forward());
    }

    #[test]
    fn test_navigate_to_same_fragment_is_noop() {
        let mut location = MemoryLocation::new("about");
        assert!(!location.navigate("#about"));
        assert!(!location.take_external_change());
    }

    #[test]
    fn test_navigate_drops_forward_entries() {
        let mut location = MemoryLocation::new("a");
        location.navigate("b");
        location.navigate("c");
        location.back();
        location.back();
        location.navigate("d");
        assert_eq!(location.history_len(), 2);
        assert!(!location.forward());
    }
}
