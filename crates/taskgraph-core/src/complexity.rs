use std::fmt;

use serde::{Deserialize, Serialize};

/// How much decomposition a task calls for.
///
/// Tiers are ordered by severity, so `Simple < Moderate < Complex < VeryComplex`.
/// The tier drives both duration scaling and skeleton truncation in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplexityTier {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl ComplexityTier {
    /// All tiers, least severe first.
    pub const ALL: [ComplexityTier; 4] = [
        ComplexityTier::Simple,
        ComplexityTier::Moderate,
        ComplexityTier::Complex,
        ComplexityTier::VeryComplex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Simple => "simple",
            ComplexityTier::Moderate => "moderate",
            ComplexityTier::Complex => "complex",
            ComplexityTier::VeryComplex => "very-complex",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ComplexityTier::Simple => "Simple",
            ComplexityTier::Moderate => "Moderate",
            ComplexityTier::Complex => "Complex",
            ComplexityTier::VeryComplex => "Very Complex",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "simple" => Some(ComplexityTier::Simple),
            "moderate" => Some(ComplexityTier::Moderate),
            "complex" => Some(ComplexityTier::Complex),
            "very-complex" => Some(ComplexityTier::VeryComplex),
            _ => None,
        }
    }

    /// Position in [`ComplexityTier::ALL`].
    pub fn index(&self) -> usize {
        match self {
            ComplexityTier::Simple => 0,
            ComplexityTier::Moderate => 1,
            ComplexityTier::Complex => 2,
            ComplexityTier::VeryComplex => 3,
        }
    }

    /// Fixed note describing the decomposition rationale applied at this tier.
    pub fn strategy_description(&self) -> &'static str {
        match self {
            ComplexityTier::Simple => {
                "Streamlined breakdown: core steps only with short estimates."
            }
            ComplexityTier::Moderate => {
                "Balanced breakdown: full template with moderate estimates."
            }
            ComplexityTier::Complex => {
                "Detailed breakdown: full template with extended estimates for review and testing."
            }
            ComplexityTier::VeryComplex => {
                "Comprehensive breakdown: full template with maximum estimates and coordination buffer."
            }
        }
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Keyword sets, most severe tier first. The first tier with any matching
/// keyword wins, so a text mentioning both "launch" and "fix" is very complex.
const KEYWORD_TIERS: &[(ComplexityTier, &[&str])] = &[
    (
        ComplexityTier::VeryComplex,
        &[
            "launch",
            "full implementation",
            "end-to-end",
            "end to end",
            "from scratch",
            "overhaul",
            "migrate",
            "migration",
            "enterprise",
        ],
    ),
    (
        ComplexityTier::Complex,
        &[
            "implement",
            "develop",
            "design and build",
            "build",
            "architect",
            "integrate",
            "organize",
            "prepare",
        ],
    ),
    (
        ComplexityTier::Moderate,
        &[
            "update",
            "refactor",
            "optimize",
            "improve",
            "review",
            "revise",
            "extend",
            "enhance",
            "configure",
        ],
    ),
    (
        ComplexityTier::Simple,
        &[
            "fix", "add", "remove", "rename", "delete", "tweak", "buy", "call", "email",
        ],
    ),
];

/// Above this many characters an unmatched text is treated as complex.
const COMPLEX_LENGTH: usize = 200;
/// Above this many characters an unmatched text is treated as moderate.
const MODERATE_LENGTH: usize = 100;

/// Join a task title and optional description into the text the classifier
/// and selector match against.
pub fn task_text(title: &str, description: &str) -> String {
    let description = description.trim();
    if description.is_empty() {
        title.to_lowercase()
    } else {
        format!("{title} {description}").to_lowercase()
    }
}

/// Classify task text into a complexity tier.
///
/// Never fails: text with no keyword match falls back to a length
/// heuristic, which puts the empty string at `Simple`.
pub fn classify(text: &str) -> ComplexityTier {
    let text = text.to_lowercase();

    for (tier, keywords) in KEYWORD_TIERS {
        if keywords.iter().any(|k| text.contains(k)) {
            return *tier;
        }
    }

    let len = text.chars().count();
    if len > COMPLEX_LENGTH {
        ComplexityTier::Complex
    } else if len > MODERATE_LENGTH {
        ComplexityTier::Moderate
    } else {
        ComplexityTier::Simple
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_simple() {
        assert_eq!(classify(""), ComplexityTier::Simple);
    }

    #[test]
    fn most_severe_tier_wins() {
        assert_eq!(
            classify("launch the full end-to-end platform"),
            ComplexityTier::VeryComplex
        );
        // "launch" outranks "fix"
        assert_eq!(
            classify("fix the typo before we launch"),
            ComplexityTier::VeryComplex
        );
        // "implement" outranks "update"
        assert_eq!(
            classify("implement the update flow"),
            ComplexityTier::Complex
        );
    }

    #[test]
    fn keyword_per_tier() {
        assert_eq!(classify("Develop a mobile client"), ComplexityTier::Complex);
        assert_eq!(classify("refactor the parser"), ComplexityTier::Moderate);
        assert_eq!(classify("remove stale branch"), ComplexityTier::Simple);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("LAUNCH Day"), ComplexityTier::VeryComplex);
        assert_eq!(classify("Optimize Queries"), ComplexityTier::Moderate);
    }

    #[test]
    fn length_fallback() {
        let short = "x".repeat(100);
        let medium = "x".repeat(101);
        let long = "x".repeat(201);
        assert_eq!(classify(&short), ComplexityTier::Simple);
        assert_eq!(classify(&medium), ComplexityTier::Moderate);
        assert_eq!(classify(&long), ComplexityTier::Complex);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 60 chars, 120 bytes
        let text = "é".repeat(60);
        assert_eq!(classify(&text), ComplexityTier::Simple);
    }

    #[test]
    fn task_text_joins_and_lowercases() {
        assert_eq!(task_text("Buy Milk", ""), "buy milk");
        assert_eq!(task_text("Buy Milk", "  "), "buy milk");
        assert_eq!(task_text("Plan", "The Offsite"), "plan the offsite");
    }

    #[test]
    fn tier_ordering() {
        assert!(ComplexityTier::Simple < ComplexityTier::Moderate);
        assert!(ComplexityTier::Complex < ComplexityTier::VeryComplex);
        for (i, tier) in ComplexityTier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
        }
    }

    #[test]
    fn tier_parse_str_round_trip() {
        for tier in ComplexityTier::ALL {
            assert_eq!(ComplexityTier::parse_str(tier.as_str()), Some(tier));
        }
        assert_eq!(ComplexityTier::parse_str("very_complex"), None);
        assert_eq!(ComplexityTier::parse_str(""), None);
    }

    #[test]
    fn tier_serializes_kebab_case() {
        let json = serde_json::to_string(&ComplexityTier::VeryComplex).unwrap();
        assert_eq!(json, "\"very-complex\"");
        assert_eq!(format!("{}", ComplexityTier::VeryComplex), "Very Complex");
    }
}
