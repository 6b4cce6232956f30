//! Invitation code entry: a fixed row of single-character slots.

use thiserror::Error;

pub const CODE_LENGTH: usize = 6;

/// Anything other than one ASCII letter/digit or an empty string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invitation code slots only take a single letter or digit")]
pub struct InputRejected;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeVerdict {
    /// Every slot was filled. Nothing checks the code itself.
    Accepted(String),
    Incomplete,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodeEntry {
    slots: [Option<char>; CODE_LENGTH],
}

impl CodeEntry {
    /// Writes `value` into slot `index` and returns the slot that should take
    /// focus next, if any.
    pub fn input(&mut self, index: usize, value: &str) -> Result<Option<usize>, InputRejected> {
        if index >= CODE_LENGTH {
            return Err(InputRejected);
        }

        let mut chars = value.chars();
        let slot = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) if c.is_ascii_alphanumeric() => Some(c.to_ascii_uppercase()),
            _ => return Err(InputRejected),
        };

        self.slots[index] = slot;

        if slot.is_some() && index + 1 < CODE_LENGTH {
            return Ok(Some(index + 1));
        }
        Ok(None)
    }

    /// Backspace on an already empty slot moves focus one slot back.
    pub fn backspace(&self, index: usize) -> Option<usize> {
        if index == 0 || index >= CODE_LENGTH || self.slots[index].is_some() {
            return None;
        }
        Some(index - 1)
    }

    /// Judges the buffer and resets it, whatever the outcome.
    pub fn submit(&mut self) -> CodeVerdict {
        let verdict = if self.is_complete() {
            CodeVerdict::Accepted(self.code())
        } else {
            CodeVerdict::Incomplete
        };
        *self = Self::default();
        verdict
    }

    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Slot contents as shown in the inputs.
    pub fn slot_value(&self, index: usize) -> String {
        self.slot(index).map(String::from).unwrap_or_default()
    }

    pub fn code(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(code: &str) -> CodeEntry {
        let mut entry = CodeEntry::default();
        for (i, c) in code.chars().enumerate() {
            entry.input(i, &c.to_string()).unwrap();
        }
        entry
    }

    #[test]
    fn test_typing_advances_focus_and_uppercases() {
        let mut entry = CodeEntry::default();
        let mut moves = Vec::new();
        for (i, c) in "ab3dz9".chars().enumerate() {
            moves.push(entry.input(i, &c.to_string()).unwrap());
        }

        assert_eq!(entry.code(), "AB3DZ9");
        // Focus walks to the last slot and stays there.
        assert_eq!(moves, vec![Some(1), Some(2), Some(3), Some(4), Some(5), None]);
    }

    #[test]
    fn test_rejected_input_leaves_slot_alone() {
        let mut entry = filled("A");
        assert_eq!(entry.input(0, "#"), Err(InputRejected));
        assert_eq!(entry.input(0, "bc"), Err(InputRejected));
        assert_eq!(entry.input(0, "é"), Err(InputRejected));
        assert_eq!(entry.input(CODE_LENGTH, "a"), Err(InputRejected));
        assert_eq!(entry.slot(0), Some('A'));
    }

    #[test]
    fn test_clearing_a_slot_keeps_focus() {
        let mut entry = filled("AB");
        assert_eq!(entry.input(1, ""), Ok(None));
        assert_eq!(entry.slot(1), None);
    }

    #[test]
    fn test_backspace_only_retreats_from_empty_slots() {
        let mut entry = filled("AB");
        assert_eq!(entry.backspace(1), None);
        assert_eq!(entry.backspace(2), Some(1));
        assert_eq!(entry.backspace(0), None);
    }

    #[test]
    fn test_submit_incomplete_resets_buffer() {
        let mut entry = filled("ABC");
        assert_eq!(entry.submit(), CodeVerdict::Incomplete);
        assert_eq!(entry, CodeEntry::default());

        let mut gap = filled("ABCDEF");
        gap.input(2, "").unwrap();
        assert_eq!(gap.submit(), CodeVerdict::Incomplete);
        assert_eq!(gap, CodeEntry::default());
    }

    #[test]
    fn test_submit_complete_resets_buffer() {
        let mut entry = filled("x1y2z3");
        assert_eq!(entry.submit(), CodeVerdict::Accepted("X1Y2Z3".to_string()));
        assert_eq!(entry, CodeEntry::default());
    }

    #[test]
    fn test_submit_on_empty_buffer() {
        let mut entry = CodeEntry::default();
        assert_eq!(entry.submit(), CodeVerdict::Incomplete);
        assert_eq!(entry, CodeEntry::default());
    }
}
