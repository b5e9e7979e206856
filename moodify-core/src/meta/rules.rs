//! Rule modules for the meta-emotion pipeline
//!
//! Every rule is a pure function of the request context and returns the
//! meta-emotion it maps to, or `None` to fall through to the next rule.
//! All phrase matching runs against normalized (lower-cased) text.

use crate::negation;

use super::engine::RuleContext;

const BURNOUT_PHRASES: [&str; 17] = [
    "feel numb",
    "feel empty",
    "feel drained",
    "feel exhausted",
    "feel overwhelmed",
    "running on empty",
    "can't anymore",
    "feel pointless",
    "it's pointless",
    "feels pointless",
    "i'm numb",
    "nothing affects",
    "don't feel anything",
    "just existing",
    "no energy",
    "don't have the energy",
    "feel anything",
];

const ANXIETY_PHRASES: [&str; 16] = [
    "can't stop overthinking",
    "can't stop thinking",
    "mind won't shut up",
    "thoughts racing",
    "on edge",
    "can't calm",
    "worried i'll",
    "what if",
    "thoughts won't stop",
    "feel on edge",
    "won't shut up",
    "racing",
    "constantly on edge",
    "thoughts won't stop racing",
    "my thoughts",
    "thoughts won't",
];

const ANXIETY_KEYWORDS: [&str; 5] = [
    "racing",
    "on edge",
    "overthinking",
    "won't shut up",
    "can't calm",
];

/// Objects that mark an anxiety phrase as directed at something negative
const NEGATIVE_OBJECTS: [&str; 8] = [
    "it",
    "this",
    "everything",
    "the situation",
    "my life",
    "all of that",
    "my mind",
    "my thoughts",
];

const POSITIVE_WORDS: [&str; 10] = [
    "smile",
    "smiling",
    "happy",
    "excited",
    "made my day",
    "so good",
    "energized",
    "buzzing",
    "omg",
    "literally",
];

const CALM_WORDS: [&str; 8] = [
    "calm",
    "peaceful",
    "relieved",
    "relief",
    "breathe",
    "breathing",
    "finally breathe",
    "feel calm",
];

/// Sarcasm cues that disqualify a calm reading
const CALM_SARCASM_MARKERS: [&str; 6] =
    ["whatever", "i guess", "anyway", "go ahead", "i'm done", "just done"];

const CARE_WORDS: [&str; 7] = [
    "love",
    "care",
    "grateful",
    "appreciate",
    "mean a lot",
    "means a lot",
    "didn't have to",
];

const SARCASM_MARKERS: [&str; 6] = ["whatever", "i guess", "sure", "obviously", "go ahead", "fine"];

/// Sentence templates that spell out passive frustration
const PASSIVE_FRUSTRATION_PATTERNS: [&str; 9] = [
    "i'm not mad",
    "i am not mad",
    "i'm not upset",
    "i'm just tired",
    "i am just tired",
    "done explaining myself",
    "whatever you want",
    "i don't care anymore",
    "it's fine i guess",
];

const WEAK_NEGATIVES: [&str; 3] = ["annoyance", "disappointment", "disapproval"];

const DESIRE_WORDS: [&str; 3] = ["drawn to", "want this", "can't help wanting"];

// ---------------------------------------------------------------------------
// Critical-pattern layer
// ---------------------------------------------------------------------------

/// Burnout phrase detection. The "just existing" literal always wins;
/// other phrases fire only when the model is unsure or sadness backs
/// them up.
pub(super) fn burnout(ctx: &RuleContext) -> Option<String> {
    if !BURNOUT_PHRASES.iter().any(|p| ctx.text.contains(p)) {
        return None;
    }
    if ctx.text.contains("just existing") {
        return Some("burnout_exhaustion".to_string());
    }
    if !ctx.confident || ctx.active.score("sadness") > 0.20 {
        return Some("burnout_exhaustion".to_string());
    }
    None
}

/// Anxiety phrase detection, with romantic rumination routed to desire.
/// Whatever matched is returned only when the model is unsure or fear
/// backs it up.
pub(super) fn anxiety_phrase(ctx: &RuleContext) -> Option<String> {
    let hit = match_anxiety_phrase(ctx.text)?;
    if !ctx.confident || ctx.active.score("fear") > 0.40 {
        Some(hit.to_string())
    } else {
        None
    }
}

fn match_anxiety_phrase(text: &str) -> Option<&'static str> {
    // "can't stop thinking about you" reads romantic, not anxious
    if text.contains("can't stop thinking") && text.contains("you") {
        return Some("desire_block");
    }
    if ANXIETY_KEYWORDS.iter().any(|k| text.contains(k)) {
        return Some("anxiety_block");
    }
    if ANXIETY_PHRASES.iter().any(|p| text.contains(p))
        && NEGATIVE_OBJECTS.iter().any(|o| text.contains(o))
    {
        return Some("anxiety_block");
    }
    if text.contains("can't help")
        && (text.contains("wanting") || text.contains("desire") || text.contains("wish"))
    {
        return Some("desire_block");
    }
    None
}

// ---------------------------------------------------------------------------
// Model-dominant layer
// ---------------------------------------------------------------------------

/// Combined care signal across gratitude, caring and love
pub(super) fn care_signal(ctx: &RuleContext) -> Option<String> {
    let sum =
        ctx.active.score("gratitude") + ctx.active.score("caring") + ctx.active.score("love");
    (sum > 0.50).then(|| "care_block".to_string())
}

/// Strong admiration paired with care wording in the text
pub(super) fn admiration_care(ctx: &RuleContext) -> Option<String> {
    (ctx.active.score("admiration") > 0.70 && CARE_WORDS.iter().any(|w| ctx.text.contains(w)))
        .then(|| "care_block".to_string())
}

/// Strong fear outranks the group aggregation; nervousness tips it from
/// raw negative into anxiety.
pub(super) fn fear_priority(ctx: &RuleContext) -> Option<String> {
    if ctx.active.score("fear") > 0.70 {
        if ctx.active.score("nervousness") > 0.30 {
            Some("anxiety_block".to_string())
        } else {
            Some("negative_strong".to_string())
        }
    } else {
        None
    }
}

/// Strong surprise splits on whether joy or excitement accompany it
pub(super) fn surprise_peak(ctx: &RuleContext) -> Option<String> {
    if ctx.active.score("surprise") > 0.70 {
        if ctx.active.score("joy") > 0.25 || ctx.active.score("excitement") > 0.25 {
            Some("positive_excited".to_string())
        } else {
            Some("calm_relief".to_string())
        }
    } else {
        None
    }
}

/// Group-score aggregation over the active set; detachment and the other
/// aggregate metas emerge from this one.
pub(super) fn dominant_group(ctx: &RuleContext) -> Option<String> {
    ctx.groups.dominant(ctx.active).map(|name| name.to_string())
}

// ---------------------------------------------------------------------------
// Rule-assisted layer
// ---------------------------------------------------------------------------

/// Explicit passive-frustration sentence templates, confirmed by a
/// neutral-dominated vector with a weak negative undertone.
pub(super) fn passive_frustration_pattern(ctx: &RuleContext) -> Option<String> {
    if !PASSIVE_FRUSTRATION_PATTERNS
        .iter()
        .any(|p| ctx.text.contains(p))
    {
        return None;
    }
    if ctx.prob("neutral") > 0.60 && WEAK_NEGATIVES.iter().any(|w| ctx.prob(w) > 0.10) {
        return Some("passive_frustration".to_string());
    }
    None
}

/// Sarcasm cue words combined with weak negatives, or with moderately
/// strong positives the sarcasm undercuts.
pub(super) fn passive_frustration_sarcasm(ctx: &RuleContext) -> Option<String> {
    if !SARCASM_MARKERS.iter().any(|m| ctx.text.contains(m)) {
        return None;
    }
    if WEAK_NEGATIVES.iter().any(|w| ctx.active.score(w) > 0.10) {
        return Some("passive_frustration".to_string());
    }
    if ctx.active.score("joy") > 0.30 || ctx.active.score("approval") > 0.30 {
        return Some("passive_frustration".to_string());
    }
    None
}

/// Weak passive-frustration signal via an approval + neutral combination
pub(super) fn passive_frustration_blend(ctx: &RuleContext) -> Option<String> {
    if ctx.active.score("approval") > 0.50
        && ctx.active.score("neutral") > 0.20
        && WEAK_NEGATIVES.iter().any(|w| ctx.active.score(w) > 0.10)
    {
        Some("passive_frustration".to_string())
    } else {
        None
    }
}

/// Non-negated upbeat wording overrides a weak model reading
pub(super) fn positive_words(ctx: &RuleContext) -> Option<String> {
    for word in POSITIVE_WORDS {
        if ctx.text.contains(word) && !negation::is_negated(ctx.text, word) {
            return Some("positive_excited".to_string());
        }
    }
    None
}

pub(super) fn desire_keywords(ctx: &RuleContext) -> Option<String> {
    DESIRE_WORDS
        .iter()
        .any(|w| ctx.text.contains(w))
        .then(|| "desire_block".to_string())
}

/// Care wording, with sarcastic "no worries ... don't have to" and
/// "don't have to care" constructions excluded up front.
pub(super) fn care_keywords(ctx: &RuleContext) -> Option<String> {
    if ctx.text.contains("no worries") && ctx.text.contains("don't have to") {
        return None;
    }
    if ctx.text.contains("don't have to care") {
        return None;
    }
    if ctx.text.contains("don't have to") && CARE_WORDS.iter().any(|w| ctx.text.contains(w)) {
        return None;
    }

    for word in CARE_WORDS {
        if !ctx.text.contains(word) {
            continue;
        }
        if negation::is_negated(ctx.text, word) {
            return None;
        }
        if ctx.active.score("gratitude") > 0.15 || ctx.active.score("caring") > 0.15 {
            return Some("care_block".to_string());
        }
        // Text-only care when the model saw (almost) nothing
        if ctx.active.len() <= 1 {
            return Some("care_block".to_string());
        }
    }
    None
}

/// Calm/relief wording, disqualified by sarcasm markers and negation
pub(super) fn calm_keywords(ctx: &RuleContext) -> Option<String> {
    if CALM_SARCASM_MARKERS.iter().any(|m| ctx.text.contains(m)) {
        return None;
    }
    for word in CALM_WORDS {
        if !ctx.text.contains(word) || negation::is_negated(ctx.text, word) {
            continue;
        }
        // Text-only calm when the model saw nothing beyond neutral
        if ctx.active.is_empty() || (ctx.active.len() == 1 && ctx.active.contains("neutral")) {
            return Some("calm_relief".to_string());
        }
        if ctx.active.score("relief") > 0.10 || ctx.active.score("joy") > 0.35 {
            return Some("calm_relief".to_string());
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Fallback layer
// ---------------------------------------------------------------------------

pub(super) fn neutral_only(ctx: &RuleContext) -> Option<String> {
    (ctx.active.len() == 1 && ctx.active.contains("neutral")).then(|| "neutral".to_string())
}

/// A single active label maps to the first group containing it; labels
/// belonging to no group fall through to the aggregation.
pub(super) fn single_active_label(ctx: &RuleContext) -> Option<String> {
    if ctx.active.len() != 1 {
        return None;
    }
    let (label, _) = ctx.active.iter().next()?;
    ctx.groups
        .first_containing(label)
        .map(|name| name.to_string())
}

pub(super) fn empty_active(ctx: &RuleContext) -> Option<String> {
    ctx.active.is_empty().then(|| "neutral".to_string())
}
