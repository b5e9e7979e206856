//! Negation detection within a bounded lookback window
//!
//! Callers first check that a phrase is contained in the text, then ask
//! whether the occurrence is negated by a nearby preceding cue word.

/// Negation cue words. The `n't` entry matches any contracted token
/// (don't, can't, won't, ...); all others match by token equality.
const NEGATION_CUES: [&str; 10] = [
    "not", "n't", "no", "never", "hardly", "barely", "without", "none", "nothing", "nowhere",
];

/// How many tokens before the match are inspected for a cue
const LOOKBACK_TOKENS: usize = 4;

fn is_negation_cue(token: &str) -> bool {
    token.ends_with("n't") || NEGATION_CUES.contains(&token)
}

/// Whether `phrase` occurs negated in `normalized_text`.
///
/// Tokenizes on whitespace, locates every token equal to the terminal
/// token of `phrase`, and returns true if any of the 4 tokens immediately
/// preceding such an occurrence is a negation cue.
pub fn is_negated(normalized_text: &str, phrase: &str) -> bool {
    let Some(terminal) = phrase.split_whitespace().last() else {
        return false;
    };
    let tokens: Vec<&str> = normalized_text.split_whitespace().collect();
    tokens.iter().enumerate().any(|(i, tok)| {
        *tok == terminal
            && tokens[i.saturating_sub(LOOKBACK_TOKENS)..i]
                .iter()
                .copied()
                .any(is_negation_cue)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contracted_negation() {
        assert!(is_negated("i don't feel calm at all", "calm"));
        assert!(is_negated("i can't smile today", "smile"));
    }

    #[test]
    fn test_plain_negation_cues() {
        assert!(is_negated("i am not happy", "happy"));
        assert!(is_negated("never felt calm before", "calm"));
        assert!(is_negated("a day without joy", "joy"));
    }

    #[test]
    fn test_no_negation() {
        assert!(!is_negated("i feel calm today", "calm"));
        assert!(!is_negated("", "calm"));
    }

    #[test]
    fn test_lookback_window_is_bounded() {
        // Cue sits five tokens before the match, outside the window.
        assert!(!is_negated("not aaa bbb ccc ddd calm", "calm"));
        // Exactly four tokens back is still inside.
        assert!(is_negated("not aaa bbb ccc calm", "calm"));
    }

    #[test]
    fn test_multiword_phrase_uses_terminal_token() {
        assert!(is_negated("this hasn't made my day", "made my day"));
        assert!(!is_negated("you made my day", "made my day"));
    }

    #[test]
    fn test_any_occurrence_counts() {
        // First occurrence clean, second negated.
        assert!(is_negated("calm before but not calm now", "calm"));
    }

    #[test]
    fn test_punctuation_blocks_token_match() {
        // Terminal token matching is exact; "calm." is a different token.
        assert!(!is_negated("i am not calm.", "calm"));
    }
}
