//! Hidden admin trigger: a rolling keystroke buffer matched against "admin".
//!
//! This is a streaming suffix match over the live keystroke stream, bounded
//! to a fixed lookback window. It is decoupled from any input-event API —
//! callers feed it plain characters — so the state machine is unit-testable
//! without a terminal.

/// The literal sequence that toggles the admin panel.
const SECRET: &str = "admin";

/// Buffer length at which the lookback window is trimmed.
const TRIM_AT: usize = 10;

/// Characters kept when the buffer is trimmed. Must be at least the secret
/// length or a match spanning the trim point would be lost.
const KEEP_ON_TRIM: usize = 5;

/// Rolling buffer of recently typed characters.
#[derive(Debug, Default)]
pub struct SecretTrigger {
    buffer: String,
}

impl SecretTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one typed character. Returns `true` when the buffer's suffix
    /// spells the secret; the buffer is cleared after a match, so "adminadmin"
    /// fires twice. Characters are lowercased on entry, matching the
    /// case-insensitive trigger of the original.
    pub fn push(&mut self, c: char) -> bool {
        self.buffer.extend(c.to_lowercase());

        if self.buffer.ends_with(SECRET) {
            self.buffer.clear();
            return true;
        }

        if self.buffer.chars().count() > TRIM_AT {
            let tail: String = self
                .buffer
                .chars()
                .rev()
                .take(KEEP_ON_TRIM)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            self.buffer = tail;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed a string, counting how many times the trigger fires.
    fn fire_count(trigger: &mut SecretTrigger, input: &str) -> usize {
        input.chars().filter(|&c| trigger.push(c)).count()
    }

    #[test]
    fn test_plain_secret_fires_once() {
        let mut t = SecretTrigger::new();
        assert_eq!(fire_count(&mut t, "admin"), 1);
    }

    #[test]
    fn test_double_secret_fires_twice() {
        let mut t = SecretTrigger::new();
        assert_eq!(fire_count(&mut t, "adminadmin"), 2);
    }

    #[test]
    fn test_interleaved_prefix_does_not_block_match() {
        let mut t = SecretTrigger::new();
        // Noise before the sequence; the last five characters spell the secret
        assert_eq!(fire_count(&mut t, "xyzadmin"), 1);
    }

    #[test]
    fn test_uppercase_input_matches() {
        let mut t = SecretTrigger::new();
        assert_eq!(fire_count(&mut t, "ADmIn"), 1);
    }

    #[test]
    fn test_broken_sequence_does_not_fire() {
        let mut t = SecretTrigger::new();
        assert_eq!(fire_count(&mut t, "admxin"), 0);
    }

    #[test]
    fn test_trim_keeps_enough_lookback_for_a_match() {
        let mut t = SecretTrigger::new();
        // Long noise forces a trim; a subsequent clean sequence still fires
        assert_eq!(fire_count(&mut t, "qqqqqqqqqqqqqqqq"), 0);
        assert_eq!(fire_count(&mut t, "admin"), 1);
    }

    #[test]
    fn test_match_spanning_trim_boundary_still_fires() {
        let mut t = SecretTrigger::new();
        // 9 noise chars then "adm" pushes past the trim point mid-sequence;
        // the trim keeps the last 5 chars so "in" completes the match.
        assert_eq!(fire_count(&mut t, "qqqqqqqqqadmin"), 1);
    }

    #[test]
    fn test_buffer_cleared_after_match() {
        let mut t = SecretTrigger::new();
        fire_count(&mut t, "admin");
        // "in" alone must not complete anything after the clear
        assert_eq!(fire_count(&mut t, "in"), 0);
    }
}
