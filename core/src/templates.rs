/// A pre-authored contemplative-practice template. All text is static data
/// fixed at compile time, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub koan: &'static str,
    pub practice: &'static str,
    pub quote: Option<&'static str>,
}

/// The five intent labels a caller may hint at. Unrecognized or missing
/// hints fall back to [`Intent::Scattered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Seeking,
    ClingingForm,
    Scattered,
    EmptinessFixation,
    EgoFocus,
}

impl Intent {
    /// Parse a caller-supplied hint label. Labels are exact-match only.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "seeking" => Some(Self::Seeking),
            "clinging_form" => Some(Self::ClingingForm),
            "scattered" => Some(Self::Scattered),
            "emptiness_fixation" => Some(Self::EmptinessFixation),
            "ego_focus" => Some(Self::EgoFocus),
            _ => None,
        }
    }

    /// Selection rule: the first hint wins if it names a known label,
    /// otherwise default to `scattered`. No fallback chain beyond that.
    pub fn select(hints: &[String]) -> Self {
        hints
            .first()
            .and_then(|label| Self::from_label(label))
            .unwrap_or(Self::Scattered)
    }

    pub fn template(self) -> Template {
        match self {
            Self::Seeking => Template {
                koan: "未起求心前，谁在要？",
                practice: "只数三息；起评判即从一再来。",
                quote: Some("念起即觉。"),
            },
            Self::ClingingForm => Template {
                koan: "境来谁见？离见者境自立否？",
                practice: "聆听三种声，只知'声'。",
                quote: Some("回光即是道。"),
            },
            Self::Scattered => Template {
                koan: "念与念间，谁在知？",
                practice: "数息至三，失数即从一。",
                quote: None,
            },
            Self::EmptinessFixation => Template {
                koan: "空空何所空？知空者安在？",
                practice: "双掌相触二十秒，只知触。",
                quote: None,
            },
            Self::EgoFocus => Template {
                koan: "我在何处？请于一吸一呼呈上。",
                practice: "鼻尖触觉三息。",
                quote: None,
            },
        }
    }
}
