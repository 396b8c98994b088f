//! Selection key mapping
//!
//! Actions are picked with single letters. Letters are handed out in
//! alphabetical order, skipping the quit key, so pressing the quit key can
//! never be mistaken for a selection.

/// Maps letters to selection indices and recognizes the quit key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    quit: char,
}

impl KeyMap {
    /// Create a key map around the given quit key
    pub fn new(quit: char) -> Self {
        Self {
            quit: quit.to_ascii_lowercase(),
        }
    }

    /// The quit key, lowercase
    pub fn quit_key(&self) -> char {
        self.quit
    }

    /// Whether `key` ends the interaction loop (case-insensitive)
    pub fn is_quit(&self, key: char) -> bool {
        key.to_ascii_lowercase() == self.quit
    }

    /// How many actions can be given a key
    pub fn capacity(&self) -> usize {
        self.letters().count()
    }

    /// The key for a selection index
    pub fn key_for(&self, index: usize) -> Option<char> {
        self.letters().nth(index)
    }

    /// The selection index for a key (case-insensitive)
    pub fn index_for(&self, key: char) -> Option<usize> {
        let key = key.to_ascii_lowercase();
        self.letters().position(|letter| letter == key)
    }

    fn letters(&self) -> impl Iterator<Item = char> {
        let quit = self.quit;
        ('a'..='z').filter(move |&c| c != quit)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new('q')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_key_is_case_insensitive() {
        let keys = KeyMap::default();
        assert!(keys.is_quit('q'));
        assert!(keys.is_quit('Q'));
        assert!(!keys.is_quit('a'));
    }

    #[test]
    fn test_quit_key_is_never_a_selection() {
        let keys = KeyMap::default();
        assert_eq!(keys.capacity(), 25);
        assert_eq!(keys.index_for('q'), None);
        assert_eq!(keys.key_for(15), Some('p'));
        assert_eq!(keys.key_for(16), Some('r'));
        assert_eq!(keys.key_for(25), None);
    }

    #[test]
    fn test_index_round_trips_through_key() {
        let keys = KeyMap::new('x');
        for index in 0..keys.capacity() {
            let key = keys.key_for(index).unwrap();
            assert_eq!(keys.index_for(key), Some(index));
            assert_eq!(keys.index_for(key.to_ascii_uppercase()), Some(index));
        }
    }

    #[test]
    fn test_non_letters_do_not_select() {
        let keys = KeyMap::default();
        assert_eq!(keys.index_for('1'), None);
        assert_eq!(keys.index_for(' '), None);
    }
}
