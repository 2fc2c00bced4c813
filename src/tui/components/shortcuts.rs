//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add j/k, g/G and paging
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("j/k", "Up/Down"));
        self.shortcuts.push(Shortcut::new("g/G", "Top/Bottom"));
        self.shortcuts.push(Shortcut::new("PgUp/PgDn", "Page Up/Dn"));
        self
    }

    /// Add q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().with_navigation().build();

        assert_eq!(shortcuts.len(), 3);
        assert!(shortcuts.iter().any(|s| s.key == "j/k"));
        assert!(shortcuts.iter().any(|s| s.key == "g/G"));
        assert!(shortcuts.iter().any(|s| s.key == "PgUp/PgDn"));
    }

    #[test]
    fn test_builder_keeps_order() {
        let shortcuts = ShortcutsBuilder::new()
            .add("n", "Report")
            .with_quit()
            .build();

        let keys: Vec<_> = shortcuts.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["n", "q"]);
    }

    #[test]
    fn test_empty_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().build();

        assert_eq!(shortcuts.len(), 0);
    }
}
