/// Fixed lead-in for every mirror string.
pub const MIRROR_PREFIX: &str = "你说：";

/// Judgment words stripped from the input before mirroring. Removal is
/// literal substring replacement, not word-boundary aware, so occurrences
/// inside longer words are removed too.
const JUDGMENT_WORDS: &[&str] = &[
    "好", "坏", "对", "错", "应该", "不应该", "必须", "糟糕", "完美",
];

/// Maximum character count of the mirrored body before truncation applies.
const MAX_BODY_CHARS: usize = 50;

/// Characters kept when a long body is truncated, before the `...` marker.
const TRUNCATED_BODY_CHARS: usize = 47;

/// Produce a neutral reflection of the user's text: trim, strip judgment
/// words, truncate long input, and prefix with the fixed lead-in.
///
/// Counts are Unicode scalar values, not bytes, so truncation never splits
/// a character.
pub fn create_mirror(user_text: &str) -> String {
    let mut text = user_text.trim().to_string();
    for word in JUDGMENT_WORDS {
        text = text.replace(word, "");
    }

    if text.chars().count() > MAX_BODY_CHARS {
        let head: String = text.chars().take(TRUNCATED_BODY_CHARS).collect();
        text = format!("{head}...");
    }

    format!("{MIRROR_PREFIX}{text}")
}
