//! Rule-based planner
//!
//! Maps `(goal text, step index)` to the next [`Action`]. Pure and
//! deterministic: keyword intents over the lowercased goal, an ordered
//! decision table, and payload extraction from the first `note:` marker.
//! Stands in for a real LLM planner; it never looks at prior observations.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::action::Action;

/// Substrings that signal a read intent.
const READ_TOKENS: [&str; 4] = ["show", "list", "read", "notes"];

/// Substrings that signal a write intent.
const WRITE_TOKENS: [&str; 3] = ["save", "write", "remember"];

/// Explicit payload marker, matched case-insensitively.
const NOTE_MARKER: &str = "note:";

/// Stricter "save/write ... note" phrasing. Exists so the bare word
/// "notes" (as in "show notes") does not by itself count as a write.
static WRITE_NOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(save|write)\b.*\bnote\b").unwrap());

/// Case-insensitive scan for the first `note:` marker.
static NOTE_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)note:").unwrap());

/// Decide the next action for `goal` at `step`.
///
/// Keyword matching is substring-based, not whole-word: "renotes" matches
/// "notes". Accepted behavior, kept for parity with the rule table.
pub fn decide(goal: &str, step: usize) -> Action {
    let lower = goal.to_lowercase();
    let wants_read = READ_TOKENS.iter().any(|t| lower.contains(t));
    let wants_write = WRITE_TOKENS.iter().any(|t| lower.contains(t))
        || WRITE_NOTE_RE.is_match(goal)
        || lower.contains(NOTE_MARKER);

    if wants_write {
        return match step {
            0 => Action::WriteNote {
                payload: Some(extract_payload(goal)),
            },
            1 if wants_read => Action::ReadNotes,
            _ => Action::Done,
        };
    }
    if wants_read {
        return if step == 0 {
            Action::ReadNotes
        } else {
            Action::Done
        };
    }
    Action::Done
}

/// Extract the note text from the original-case goal.
///
/// Everything after the first `note:` marker, trimmed; falls back to the
/// whole goal when the marker is absent or followed only by whitespace.
fn extract_payload(goal: &str) -> String {
    if let Some(m) = NOTE_MARKER_RE.find(goal) {
        let rest = goal[m.end()..].trim();
        if !rest.is_empty() {
            return rest.to_string();
        }
    }
    goal.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::MAX_STEPS;

    #[test]
    fn test_write_goal_starts_with_write() {
        let action = decide("save a note: hello world", 0);
        assert_eq!(
            action,
            Action::WriteNote {
                payload: Some("hello world".to_string())
            }
        );
    }

    #[test]
    fn test_write_without_marker_uses_full_goal() {
        let goal = "remember that the demo is on friday";
        let action = decide(goal, 0);
        assert_eq!(
            action,
            Action::WriteNote {
                payload: Some(goal.to_string())
            }
        );
    }

    #[test]
    fn test_write_then_read_sequence() {
        let goal = "save a note: hello, then show notes";
        assert_eq!(decide(goal, 0).kind(), "WRITE_NOTE");
        assert_eq!(decide(goal, 1), Action::ReadNotes);
        assert_eq!(decide(goal, 2), Action::Done);
    }

    #[test]
    fn test_write_only_goal_finishes_after_write() {
        // "save" without any read token: step 1 skips the read.
        let goal = "save a memo about the meeting";
        assert_eq!(decide(goal, 0).kind(), "WRITE_NOTE");
        assert_eq!(decide(goal, 1), Action::Done);
    }

    #[test]
    fn test_read_only_goal() {
        assert_eq!(decide("show notes", 0), Action::ReadNotes);
        assert_eq!(decide("show notes", 1), Action::Done);
    }

    #[test]
    fn test_neutral_goal_is_done_immediately() {
        assert_eq!(decide("do nothing special", 0), Action::Done);
        assert_eq!(decide("", 0), Action::Done);
    }

    #[test]
    fn test_bare_notes_word_does_not_write() {
        // "notes" is a read token only; the stricter pattern requires
        // save/write phrasing or an explicit marker.
        assert_eq!(decide("notes", 0), Action::ReadNotes);
    }

    #[test]
    fn test_marker_alone_triggers_write() {
        let action = decide("note: buy milk", 0);
        assert_eq!(
            action,
            Action::WriteNote {
                payload: Some("buy milk".to_string())
            }
        );
    }

    #[test]
    fn test_marker_is_case_insensitive_payload_keeps_case() {
        let action = decide("NOTE: Buy Milk", 0);
        assert_eq!(
            action,
            Action::WriteNote {
                payload: Some("Buy Milk".to_string())
            }
        );
    }

    #[test]
    fn test_only_first_marker_splits() {
        let action = decide("save a note: first note: second", 0);
        assert_eq!(
            action,
            Action::WriteNote {
                payload: Some("first note: second".to_string())
            }
        );
    }

    #[test]
    fn test_empty_marker_falls_back_to_goal() {
        let goal = "save a note:   ";
        // Planner sees the trimmed goal in practice, but must not panic or
        // emit an empty payload either way.
        let action = decide(goal, 0);
        assert_eq!(
            action,
            Action::WriteNote {
                payload: Some(goal.to_string())
            }
        );
    }

    #[test]
    fn test_substring_matching_is_accepted() {
        // "renotes" contains "notes": substring matching, not whole-word.
        assert_eq!(decide("renotes", 0), Action::ReadNotes);
    }

    #[test]
    fn test_total_over_goals_and_steps() {
        let goals = [
            "save a note: x, then show notes",
            "show notes",
            "do nothing special",
            "note: y",
            "remember everything and list it",
            "",
            "   ",
        ];
        for goal in goals {
            for step in 0..MAX_STEPS {
                // Must always produce exactly one well-formed action.
                let action = decide(goal, step);
                assert!(matches!(
                    action,
                    Action::WriteNote { .. } | Action::ReadNotes | Action::Done
                ));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let goal = "save a note: stable output, then show notes";
        for step in 0..MAX_STEPS {
            assert_eq!(decide(goal, step), decide(goal, step));
        }
    }
}
