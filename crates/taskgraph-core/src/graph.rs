use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::breakdown::{Breakdown, Subtask};
use crate::error::GraphError;

/// The longest duration-weighted dependency chain through a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalPath {
    /// Subtask ids from the first step of the chain to the last.
    pub subtask_ids: Vec<String>,
    pub total_minutes: u64,
}

/// Map each id to its position, rejecting malformed node sets and edges.
fn index_subtasks(breakdown: &Breakdown) -> Result<HashMap<&str, usize>, GraphError> {
    let mut index = HashMap::with_capacity(breakdown.subtasks.len());
    for (pos, subtask) in breakdown.subtasks.iter().enumerate() {
        if subtask.id.trim().is_empty() {
            return Err(GraphError::EmptyId);
        }
        if index.insert(subtask.id.as_str(), pos).is_some() {
            return Err(GraphError::DuplicateId(subtask.id.clone()));
        }
    }
    for subtask in &breakdown.subtasks {
        for dep in &subtask.depends_on {
            if *dep == subtask.id {
                return Err(GraphError::SelfDependency(subtask.id.clone()));
            }
            if !index.contains_key(dep.as_str()) {
                return Err(GraphError::UnknownDependency {
                    subtask: subtask.id.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }
    Ok(index)
}

/// Topologically sorted positions (Kahn's algorithm). Among startable
/// nodes the lowest `order`, then the earliest position, goes first.
fn sorted_positions(breakdown: &Breakdown) -> Result<Vec<usize>, GraphError> {
    let index = index_subtasks(breakdown)?;
    let subtasks = &breakdown.subtasks;

    let mut indegree = vec![0usize; subtasks.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); subtasks.len()];
    for (pos, subtask) in subtasks.iter().enumerate() {
        for dep in &subtask.depends_on {
            let dep_pos = index[dep.as_str()];
            indegree[pos] += 1;
            dependents[dep_pos].push(pos);
        }
    }

    let mut ready: BTreeSet<(u32, usize)> = subtasks
        .iter()
        .enumerate()
        .filter(|(pos, _)| indegree[*pos] == 0)
        .map(|(pos, s)| (s.order, pos))
        .collect();

    let mut sorted = Vec::with_capacity(subtasks.len());
    while let Some(next) = ready.pop_first() {
        let pos = next.1;
        sorted.push(pos);
        for &dependent in &dependents[pos] {
            indegree[dependent] -= 1;
            if indegree[dependent] == 0 {
                ready.insert((subtasks[dependent].order, dependent));
            }
        }
    }

    if sorted.len() < subtasks.len() {
        let stuck = subtasks
            .iter()
            .enumerate()
            .filter(|(pos, _)| indegree[*pos] > 0)
            .map(|(_, s)| s.id.clone())
            .collect();
        return Err(GraphError::Cycle(stuck));
    }
    Ok(sorted)
}

/// Check that ids are unique and non-empty, that every dependency names
/// another subtask of the same breakdown, and that there is no cycle.
/// Every subtask needs a positive duration, and the recorded total must
/// equal their sum.
pub fn validate(breakdown: &Breakdown) -> Result<(), GraphError> {
    sorted_positions(breakdown)?;

    if let Some(s) = breakdown
        .subtasks
        .iter()
        .find(|s| s.estimated_duration_minutes == 0)
    {
        return Err(GraphError::ZeroDuration(s.id.clone()));
    }
    let computed: u64 = breakdown
        .subtasks
        .iter()
        .map(|s| u64::from(s.estimated_duration_minutes))
        .sum();
    if computed != u64::from(breakdown.total_estimated_minutes) {
        return Err(GraphError::TotalMismatch {
            recorded: breakdown.total_estimated_minutes,
            computed,
        });
    }
    Ok(())
}

/// Subtasks in an order where every subtask follows all of its dependencies.
pub fn topological_order(breakdown: &Breakdown) -> Result<Vec<&Subtask>, GraphError> {
    Ok(sorted_positions(breakdown)?
        .into_iter()
        .map(|pos| &breakdown.subtasks[pos])
        .collect())
}

/// Longest duration-weighted chain of dependent subtasks.
///
/// Completion state is ignored; this bounds the minimum end-to-end time of
/// the whole plan. Ties go to the chain that appears first in topological
/// order. An empty breakdown has an empty path of zero minutes.
pub fn critical_path(breakdown: &Breakdown) -> Result<CriticalPath, GraphError> {
    let sorted = sorted_positions(breakdown)?;
    let subtasks = &breakdown.subtasks;
    if sorted.is_empty() {
        return Ok(CriticalPath {
            subtask_ids: Vec::new(),
            total_minutes: 0,
        });
    }

    let index: HashMap<&str, usize> = subtasks
        .iter()
        .enumerate()
        .map(|(pos, s)| (s.id.as_str(), pos))
        .collect();
    let mut rank = vec![0usize; subtasks.len()];
    for (r, &pos) in sorted.iter().enumerate() {
        rank[pos] = r;
    }

    // finish[pos]: longest chain ending at pos, including pos itself
    let mut finish = vec![0u64; subtasks.len()];
    let mut via: Vec<Option<usize>> = vec![None; subtasks.len()];
    for &pos in &sorted {
        let mut best: Option<usize> = None;
        for dep in &subtasks[pos].depends_on {
            let dep_pos = index[dep.as_str()];
            best = match best {
                Some(b)
                    if finish[b] > finish[dep_pos]
                        || (finish[b] == finish[dep_pos] && rank[b] < rank[dep_pos]) =>
                {
                    Some(b)
                }
                _ => Some(dep_pos),
            };
        }
        let before = best.map(|b| finish[b]).unwrap_or(0);
        finish[pos] = before + u64::from(subtasks[pos].estimated_duration_minutes);
        via[pos] = best;
    }

    let mut end = sorted[0];
    for &pos in &sorted {
        if finish[pos] > finish[end] {
            end = pos;
        }
    }

    let mut chain = vec![end];
    let mut cursor = end;
    while let Some(prev) = via[cursor] {
        chain.push(prev);
        cursor = prev;
    }
    chain.reverse();

    Ok(CriticalPath {
        subtask_ids: chain.into_iter().map(|pos| subtasks[pos].id.clone()).collect(),
        total_minutes: finish[end],
    })
}

/// Incomplete subtasks whose dependencies are all completed.
pub fn ready_subtasks(breakdown: &Breakdown) -> Vec<&Subtask> {
    breakdown
        .subtasks
        .iter()
        .filter(|s| !s.completed)
        .filter(|s| {
            s.depends_on
                .iter()
                .all(|dep| breakdown.subtask(dep).is_some_and(|d| d.completed))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;

    fn node(id: &str, minutes: u32, order: u32, deps: &[&str]) -> Subtask {
        Subtask {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            estimated_duration_minutes: minutes,
            order,
            completed: false,
            depends_on: deps.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn graph(subtasks: Vec<Subtask>) -> Breakdown {
        let mut b = build("", "");
        b.total_estimated_minutes = subtasks
            .iter()
            .map(|s| s.estimated_duration_minutes)
            .fold(0u32, u32::saturating_add);
        b.subtasks = subtasks;
        b
    }

    #[test]
    fn built_graphs_are_valid() {
        let b = build("Launch new marketing website", "");
        validate(&b).unwrap();
        let order: Vec<&str> = topological_order(&b)
            .unwrap()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(
            order,
            ["web-1", "web-2", "web-3", "web-4", "web-5", "web-6", "web-7", "web-8"]
        );
    }

    #[test]
    fn detects_cycle() {
        let b = graph(vec![
            node("a", 10, 1, &["c"]),
            node("b", 10, 2, &["a"]),
            node("c", 10, 3, &["b"]),
            node("d", 10, 4, &[]),
        ]);
        assert_eq!(
            validate(&b),
            Err(GraphError::Cycle(vec!["a".into(), "b".into(), "c".into()]))
        );
        assert!(critical_path(&b).is_err());
    }

    #[test]
    fn detects_bad_edges_and_ids() {
        let b = graph(vec![node("a", 10, 1, &["ghost"])]);
        assert_eq!(
            validate(&b),
            Err(GraphError::UnknownDependency {
                subtask: "a".into(),
                dependency: "ghost".into()
            })
        );

        let b = graph(vec![node("a", 10, 1, &["a"])]);
        assert_eq!(validate(&b), Err(GraphError::SelfDependency("a".into())));

        let b = graph(vec![node("a", 10, 1, &[]), node("a", 5, 2, &[])]);
        assert_eq!(validate(&b), Err(GraphError::DuplicateId("a".into())));

        let b = graph(vec![node(" ", 10, 1, &[])]);
        assert_eq!(validate(&b), Err(GraphError::EmptyId));
    }

    #[test]
    fn rejects_zero_durations_and_wrong_totals() {
        let mut b = graph(vec![node("a", 10, 1, &[]), node("b", 0, 2, &["a"])]);
        assert_eq!(validate(&b), Err(GraphError::ZeroDuration("b".into())));

        b.subtasks[1].estimated_duration_minutes = 5;
        b.total_estimated_minutes = 7;
        assert_eq!(
            validate(&b),
            Err(GraphError::TotalMismatch {
                recorded: 7,
                computed: 15
            })
        );

        b.total_estimated_minutes = 15;
        validate(&b).unwrap();
    }

    #[test]
    fn critical_path_does_not_overflow_on_large_durations() {
        let big = u32::MAX / 2 + 1;
        let mut b = graph(vec![
            node("a", big, 1, &[]),
            node("b", big, 2, &["a"]),
            node("c", big, 3, &["b"]),
        ]);
        // The sum exceeds what a recorded total can hold
        b.total_estimated_minutes = u32::MAX;
        assert!(matches!(
            validate(&b),
            Err(GraphError::TotalMismatch { .. })
        ));

        let path = critical_path(&b).unwrap();
        assert_eq!(path.total_minutes, 3 * u64::from(big));
        assert_eq!(path.subtask_ids, ["a", "b", "c"]);
    }

    #[test]
    fn topological_order_respects_order_field_among_ready_nodes() {
        let b = graph(vec![
            node("late", 10, 5, &[]),
            node("early", 10, 1, &[]),
            node("after", 10, 2, &["late"]),
        ]);
        let ids: Vec<&str> = topological_order(&b)
            .unwrap()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, ["early", "late", "after"]);
    }

    #[test]
    fn critical_path_of_web_project() {
        let b = build("Launch new marketing website", "");
        let path = critical_path(&b).unwrap();
        // 240 + 360 + 960 + 480 + 240 + 180
        assert_eq!(path.total_minutes, 2460);
        assert_eq!(
            path.subtask_ids,
            ["web-1", "web-2", "web-4", "web-5", "web-7", "web-8"]
        );
    }

    #[test]
    fn critical_path_prefers_heavier_branch() {
        let b = graph(vec![
            node("start", 10, 1, &[]),
            node("light", 5, 2, &["start"]),
            node("heavy", 50, 3, &["start"]),
            node("end", 1, 4, &["light", "heavy"]),
            node("island", 30, 5, &[]),
        ]);
        let path = critical_path(&b).unwrap();
        assert_eq!(path.subtask_ids, ["start", "heavy", "end"]);
        assert_eq!(path.total_minutes, 61);
    }

    #[test]
    fn critical_path_ties_go_to_first_chain() {
        let b = graph(vec![node("a", 30, 1, &[]), node("b", 30, 2, &[])]);
        let path = critical_path(&b).unwrap();
        assert_eq!(path.subtask_ids, ["a"]);
        assert_eq!(path.total_minutes, 30);
    }

    #[test]
    fn critical_path_of_empty_graph() {
        let b = graph(vec![]);
        let path = critical_path(&b).unwrap();
        assert!(path.subtask_ids.is_empty());
        assert_eq!(path.total_minutes, 0);
    }

    #[test]
    fn ready_subtasks_follow_completion() {
        let mut b = build("Launch new marketing website", "");
        let ready: Vec<&str> = ready_subtasks(&b).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ready, ["web-1"]);

        b.set_completed("web-1", true);
        let ready: Vec<&str> = ready_subtasks(&b).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ready, ["web-2", "web-3"]);

        b.set_completed("web-2", true);
        let ready: Vec<&str> = ready_subtasks(&b).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ready, ["web-3"]);

        for s in &mut b.subtasks {
            s.completed = true;
        }
        assert!(ready_subtasks(&b).is_empty());
    }
}
