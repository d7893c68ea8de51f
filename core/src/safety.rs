/// Crisis-related terms that override normal template output. Matching is
/// plain substring containment over the lower-cased input — a deliberately
/// blunt static list, not a classifier. False positives inside unrelated
/// words are accepted.
const CRISIS_KEYWORDS: &[&str] = &[
    "绝望",
    "自伤",
    "无意义",
    "想死",
    "自杀",
    "结束生命",
    "活不下去",
    "despair",
    "self-harm",
    "meaningless",
    "suicide",
    "end life",
];

/// Returns true if the text contains any crisis keyword.
///
/// Lower-casing is best-effort: it catches ASCII case variants but not
/// scripts without case folding.
pub fn has_crisis_keywords(text: &str) -> bool {
    let lower = text.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}
