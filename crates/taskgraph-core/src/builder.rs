use chrono::Utc;
use tracing::debug;

use crate::breakdown::{Breakdown, Subtask, SCHEMA_VERSION};
use crate::complexity::{classify, task_text};
use crate::template::select_template;

/// Decompose a task into a fresh subtask graph.
///
/// Classifies the text, selects a template, then instantiates the
/// template's skeleton: ids are `{prefix}-{n}` with `n` starting at 1,
/// durations come from the tier's column, and skeleton-local dependency
/// indices become ids. Simple tasks keep only the template's core prefix.
///
/// Always succeeds. The result is acyclic because skeleton dependencies
/// only reference earlier steps.
pub fn build(title: &str, description: &str) -> Breakdown {
    let text = task_text(title, description);
    let tier = classify(&text);
    let archetype = select_template(title, description);
    let template = archetype.template();
    let steps = template.steps_for(tier);

    let id_for = |index: usize| format!("{}-{}", template.id_prefix, index + 1);

    let subtasks: Vec<Subtask> = steps
        .iter()
        .enumerate()
        .map(|(index, step)| Subtask {
            id: id_for(index),
            title: step.title.to_string(),
            description: step.description.to_string(),
            estimated_duration_minutes: step.durations.resolve(tier).unwrap_or(0),
            order: (index + 1) as u32,
            completed: false,
            depends_on: step.depends_on.iter().map(|&dep| id_for(dep)).collect(),
        })
        .collect();

    let total_estimated_minutes: u32 = subtasks
        .iter()
        .map(|s| s.estimated_duration_minutes)
        .sum();

    debug!(
        tier = tier.as_str(),
        archetype = archetype.as_str(),
        subtasks = subtasks.len(),
        total_estimated_minutes,
        "built breakdown"
    );

    Breakdown {
        schema_version: SCHEMA_VERSION,
        original_task_text: original_text(title, description),
        subtasks,
        total_estimated_minutes,
        complexity_tier: tier,
        archetype,
        strategy_description: tier.strategy_description().to_string(),
        created_at: Utc::now(),
    }
}

fn original_text(title: &str, description: &str) -> String {
    if description.trim().is_empty() {
        title.to_string()
    } else {
        format!("{title}\n\n{description}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::ComplexityTier;
    use crate::graph::{topological_order, validate};
    use crate::template::Archetype;

    #[test]
    fn marketing_website_scenario() {
        let b = build("Launch new marketing website", "");
        assert_eq!(b.complexity_tier, ComplexityTier::VeryComplex);
        assert_eq!(b.archetype, Archetype::WebProject);
        assert_eq!(b.subtasks.len(), 8);
        assert_eq!(b.total_estimated_minutes, 2940);

        let expected: u32 = Archetype::WebProject
            .template()
            .steps
            .iter()
            .map(|s| s.durations.get(ComplexityTier::VeryComplex).unwrap())
            .sum();
        assert_eq!(b.total_estimated_minutes, expected);
    }

    #[test]
    fn simple_tasks_keep_only_core_steps() {
        let b = build("fix the website footer", "");
        assert_eq!(b.complexity_tier, ComplexityTier::Simple);
        assert_eq!(b.archetype, Archetype::WebProject);
        assert_eq!(b.subtasks.len(), 4);
        let ids: Vec<&str> = b.subtasks.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["web-1", "web-2", "web-3", "web-4"]);
    }

    #[test]
    fn non_simple_tasks_get_full_skeleton() {
        let b = build("refactor the website navigation", "");
        assert_eq!(b.complexity_tier, ComplexityTier::Moderate);
        assert_eq!(b.subtasks.len(), 8);
        // simple is unlisted for "Integrate content and data"; moderate is used directly
        assert_eq!(b.subtasks[4].estimated_duration_minutes, 90);
    }

    #[test]
    fn empty_text_builds_simple_generic() {
        let b = build("", "");
        assert_eq!(b.complexity_tier, ComplexityTier::Simple);
        assert_eq!(b.archetype, Archetype::Generic);
        assert_eq!(b.subtasks.len(), 3);
        assert_eq!(b.original_task_text, "");
    }

    #[test]
    fn ids_orders_and_dependencies() {
        let b = build("Launch new marketing website", "");
        for (i, s) in b.subtasks.iter().enumerate() {
            assert_eq!(s.id, format!("web-{}", i + 1));
            assert_eq!(s.order, (i + 1) as u32);
            assert!(!s.completed);
        }
        assert!(b.subtasks[0].depends_on.is_empty());
        assert_eq!(b.subtasks[3].depends_on, ["web-2", "web-3"]);
        assert_eq!(b.subtasks[7].depends_on, ["web-7"]);
    }

    #[test]
    fn total_is_sum_of_subtasks() {
        for title in [
            "",
            "buy milk",
            "Write a blog post about X",
            "plan the team offsite meeting",
            "Prepare the quarterly report",
            "Launch the mobile app",
            "study for the rust certification",
            "give a talk at the meetup",
        ] {
            let b = build(title, "with a description that adds some context");
            let sum: u32 = b.subtasks.iter().map(|s| s.estimated_duration_minutes).sum();
            assert_eq!(b.total_estimated_minutes, sum, "{title}");
        }
    }

    #[test]
    fn every_archetype_and_tier_builds_a_valid_dag() {
        let tier_words = ["buy", "revise", "develop", "overhaul"];
        let archetype_words = [
            "website", "slides", "report", "party", "release", "course", "essay", "errand",
        ];
        for tw in tier_words {
            for aw in archetype_words {
                let b = build(&format!("{tw} {aw}"), "");
                validate(&b).unwrap();
                assert_eq!(topological_order(&b).unwrap().len(), b.subtasks.len());
                assert!(b.subtasks.iter().all(|s| s.estimated_duration_minutes > 0));
            }
        }
    }

    #[test]
    fn strategy_description_follows_tier() {
        let b = build("buy milk", "");
        assert_eq!(
            b.strategy_description,
            ComplexityTier::Simple.strategy_description()
        );
    }

    #[test]
    fn original_text_keeps_description() {
        let b = build("Offsite", "Book a venue for 20 people");
        assert_eq!(b.original_task_text, "Offsite\n\nBook a venue for 20 people");
    }
}
