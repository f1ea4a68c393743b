//! Escalating captions for the evading "No" button.

pub const PHRASES: &[&str] = &[
    "No",
    "Are you sure?",
    "Really sure?",
    "Think again!",
    "Last chance!",
    "Surely not?",
    "You might regret this!",
    "Give it another thought!",
    "Are you absolutely certain?",
    "This could be a mistake!",
    "Have a heart!",
    "Don't be so cold!",
    "Change of heart?",
    "Wouldn't you reconsider?",
    "Is that your final answer?",
    "You're breaking my heart ;(",
];

/// Phrase for the given evasion count, sticking on the last entry once the
/// list runs out. Falls back to `"No"` for an empty list.
pub fn phrase_for<S: AsRef<str>>(phrases: &[S], evasion_count: u32) -> &str {
    match phrases.len() {
        0 => PHRASES[0],
        len => {
            let idx = (evasion_count as usize).min(len - 1);
            phrases[idx].as_ref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_phrase_is_no() {
        assert_eq!(phrase_for(PHRASES, 0), "No");
        assert_eq!(phrase_for(PHRASES, 1), "Are you sure?");
    }

    #[test]
    fn clamps_to_last_entry() {
        let last = PHRASES[PHRASES.len() - 1];
        assert_eq!(last, "You're breaking my heart ;(");
        for count in (PHRASES.len() as u32 - 1)..200 {
            assert_eq!(phrase_for(PHRASES, count), last);
        }
        assert_eq!(phrase_for(PHRASES, u32::MAX), last);
    }

    #[test]
    fn never_empty() {
        assert_eq!(PHRASES.len(), 16);
        for count in 0..64 {
            assert!(!phrase_for(PHRASES, count).is_empty());
        }
        let none: [&str; 0] = [];
        assert_eq!(phrase_for(&none, 3), "No");
    }

    #[test]
    fn works_with_owned_lists() {
        let custom = vec!["Nope".to_string(), "Sure?".to_string()];
        assert_eq!(phrase_for(&custom, 0), "Nope");
        assert_eq!(phrase_for(&custom, 9), "Sure?");
    }
}
