use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::CATALOG;
use crate::complexity::{task_text, ComplexityTier};

/// A named decomposition pattern.
///
/// Declaration order is selection precedence: the selector walks
/// [`Archetype::ALL`] front to back and the first trigger hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    WebProject,
    Presentation,
    Report,
    Event,
    Launch,
    Learning,
    Writing,
    Generic,
}

impl Archetype {
    pub const ALL: [Archetype; 8] = [
        Archetype::WebProject,
        Archetype::Presentation,
        Archetype::Report,
        Archetype::Event,
        Archetype::Launch,
        Archetype::Learning,
        Archetype::Writing,
        Archetype::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::WebProject => "web-project",
            Archetype::Presentation => "presentation",
            Archetype::Report => "report",
            Archetype::Event => "event",
            Archetype::Launch => "launch",
            Archetype::Learning => "learning",
            Archetype::Writing => "writing",
            Archetype::Generic => "generic",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Archetype::WebProject => "Web Project",
            Archetype::Presentation => "Presentation",
            Archetype::Report => "Report",
            Archetype::Event => "Event",
            Archetype::Launch => "Launch",
            Archetype::Learning => "Learning",
            Archetype::Writing => "Writing",
            Archetype::Generic => "Generic",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "web-project" => Some(Archetype::WebProject),
            "presentation" => Some(Archetype::Presentation),
            "report" => Some(Archetype::Report),
            "event" => Some(Archetype::Event),
            "launch" => Some(Archetype::Launch),
            "learning" => Some(Archetype::Learning),
            "writing" => Some(Archetype::Writing),
            "generic" => Some(Archetype::Generic),
            _ => None,
        }
    }

    /// The catalog entry for this archetype.
    pub fn template(&self) -> &'static Template {
        CATALOG
            .iter()
            .find(|t| t.archetype == *self)
            .unwrap_or(&CATALOG[CATALOG.len() - 1])
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Per-tier duration estimates for one skeleton step, in minutes.
///
/// Entries may be left out; [`Durations::resolve`] falls back to the nearest
/// defined tier, preferring the more severe one on a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations([Option<u32>; 4]);

impl Durations {
    /// Every tier defined explicitly.
    pub const fn all(simple: u32, moderate: u32, complex: u32, very_complex: u32) -> Self {
        Self([
            Some(simple),
            Some(moderate),
            Some(complex),
            Some(very_complex),
        ])
    }

    /// Only the three upper tiers; simple resolves to the moderate value.
    pub const fn from_moderate(moderate: u32, complex: u32, very_complex: u32) -> Self {
        Self([None, Some(moderate), Some(complex), Some(very_complex)])
    }

    /// Two variants: `low` for simple, `high` for very complex.
    pub const fn span(low: u32, high: u32) -> Self {
        Self([Some(low), None, None, Some(high)])
    }

    pub fn get(&self, tier: ComplexityTier) -> Option<u32> {
        self.0[tier.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Minutes for `tier`, or the nearest defined tier's value.
    /// Returns `None` only for an empty table.
    pub fn resolve(&self, tier: ComplexityTier) -> Option<u32> {
        let at = tier.index();
        for distance in 0..self.0.len() {
            let above = at + distance;
            if above < self.0.len() {
                if let Some(minutes) = self.0[above] {
                    return Some(minutes);
                }
            }
            if let Some(below) = at.checked_sub(distance) {
                if let Some(minutes) = self.0[below] {
                    return Some(minutes);
                }
            }
        }
        None
    }
}

/// Blueprint for one subtask before ids and durations are instantiated.
#[derive(Debug, Clone, Copy)]
pub struct SkeletonStep {
    pub title: &'static str,
    pub description: &'static str,
    pub durations: Durations,
    /// Skeleton-local indices of steps that must finish first.
    /// Always strictly lower than this step's own index.
    pub depends_on: &'static [usize],
}

#[derive(Debug)]
pub struct Template {
    pub archetype: Archetype,
    /// Prefix for generated subtask ids (`{prefix}-{n}`).
    pub id_prefix: &'static str,
    /// Lowercase substrings that select this template.
    pub triggers: &'static [&'static str],
    /// Number of leading steps kept for simple tasks.
    pub core_steps: usize,
    pub steps: &'static [SkeletonStep],
}

impl Template {
    /// The steps emitted for a task of the given tier.
    pub fn steps_for(&self, tier: ComplexityTier) -> &'static [SkeletonStep] {
        match tier {
            ComplexityTier::Simple => &self.steps[..self.core_steps.min(self.steps.len())],
            _ => self.steps,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|t| text.contains(t))
    }
}

/// Pick the decomposition archetype for a task.
///
/// Strict precedence, not a score: the first archetype in declaration order
/// with any trigger contained in the lowercased text wins, even when a later
/// archetype's triggers also appear.
pub fn select_template(title: &str, description: &str) -> Archetype {
    let text = task_text(title, description);
    CATALOG
        .iter()
        .find(|t| t.matches(&text))
        .map(|t| t.archetype)
        .unwrap_or(Archetype::Generic)
}
