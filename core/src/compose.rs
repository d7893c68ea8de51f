use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::mirror::create_mirror;
use crate::safety::has_crisis_keywords;
use crate::templates::Intent;

/// Policy note attached to every non-crisis response.
const PRACTICE_POLICY_NOTE: &str = "此为引导练习，非悟境评判。";

/// Fixed safety response text. A crisis-flagged request never receives a
/// koan; it receives breathing guidance and the hotline reference instead.
const CRISIS_MIRROR: &str = "听到你的困难。";
const CRISIS_PRACTICE: &str = "深呼吸三次，寻求专业帮助。";
const CRISIS_POLICY_NOTE: &str = "如需帮助，请联系心理健康热线：400-161-9995";

/// Request body for POST /koan/generate.
#[derive(Debug, Deserialize, ToSchema)]
pub struct KoanRequest {
    /// Free-text user input.
    pub user_text: String,
    /// Optional ordered intent hints; only the first is consulted.
    #[serde(default)]
    pub hints: Vec<String>,
}

/// Response body for POST /koan/generate.
#[derive(Debug, Serialize, ToSchema)]
pub struct KoanResponse {
    /// Neutral restatement of the input, stripped of judgment language.
    pub mirror: String,
    /// Contemplative prompt; empty when the safety filter fires.
    pub koan: String,
    pub micro_practice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    pub policy_note: String,
}

/// Compose a response from user text and hints.
///
/// The crisis check runs first and short-circuits everything else. The
/// non-crisis path mirrors the input and fills in the selected template.
/// Total over strings; there is no error path in here.
pub fn generate_koan_response(user_text: &str, hints: &[String]) -> KoanResponse {
    if has_crisis_keywords(user_text) {
        return KoanResponse {
            mirror: CRISIS_MIRROR.to_string(),
            koan: String::new(),
            micro_practice: CRISIS_PRACTICE.to_string(),
            quote: Some(String::new()),
            policy_note: CRISIS_POLICY_NOTE.to_string(),
        };
    }

    let template = Intent::select(hints).template();

    KoanResponse {
        mirror: create_mirror(user_text),
        koan: template.koan.to_string(),
        micro_practice: template.practice.to_string(),
        quote: template.quote.map(str::to_string),
        policy_note: PRACTICE_POLICY_NOTE.to_string(),
    }
}
