/// Number of letters surname initials are drawn from.
pub const ALPHABET_LEN: usize = 26;

/// Per-letter usage counters for surname initials.
///
/// One counter per letter of the Latin alphabet. Counters only grow, and the
/// generator keeps the spread between the heaviest and lightest letter at
/// most 1. The table lives for a single generation run and is never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterLoads([u32; ALPHABET_LEN]);

impl LetterLoads {
    pub fn new() -> Self {
        Self([0; ALPHABET_LEN])
    }

    /// Current load of the letter at `index` (0 = 'a').
    pub fn load(&self, index: usize) -> u32 {
        self.0[index]
    }

    /// The lowest load across all letters.
    pub fn min(&self) -> u32 {
        self.0.iter().copied().min().unwrap_or(0)
    }

    /// The highest load across all letters.
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Difference between the heaviest and lightest letter.
    pub fn spread(&self) -> u32 {
        self.max() - self.min()
    }

    /// Total number of surnames recorded so far.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Indices of the letters currently at the minimum load.
    pub fn at_minimum(&self) -> Vec<usize> {
        let min = self.min();
        (0..ALPHABET_LEN).filter(|&i| self.0[i] == min).collect()
    }

    /// Records one more use of the letter at `index`.
    pub fn bump(&mut self, index: usize) {
        self.0[index] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_is_all_zero() {
        let loads = LetterLoads::new();
        assert_eq!(loads.min(), 0);
        assert_eq!(loads.max(), 0);
        assert_eq!(loads.total(), 0);
        assert_eq!(loads.at_minimum().len(), ALPHABET_LEN);
    }

    #[test]
    fn bump_removes_letter_from_minimum_set() {
        let mut loads = LetterLoads::new();
        loads.bump(0);
        assert_eq!(loads.load(0), 1);
        assert_eq!(loads.min(), 0);
        assert_eq!(loads.spread(), 1);
        assert!(!loads.at_minimum().contains(&0));
        assert_eq!(loads.at_minimum().len(), ALPHABET_LEN - 1);
    }

    #[test]
    fn minimum_set_resets_once_all_letters_are_level() {
        let mut loads = LetterLoads::new();
        for i in 0..ALPHABET_LEN {
            loads.bump(i);
        }
        assert_eq!(loads.min(), 1);
        assert_eq!(loads.spread(), 0);
        assert_eq!(loads.at_minimum().len(), ALPHABET_LEN);
        assert_eq!(loads.total(), ALPHABET_LEN as u32);
    }
}
