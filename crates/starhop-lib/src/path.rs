use crate::catalog::SystemId;
use crate::reach::Predecessors;

/// Walk the predecessor chain from `goal` back to `start` and return the
/// forward path.
///
/// Returns `None` when `goal` was never reached. The chain ends at the entry
/// whose parent is `None`, which is the exploration start.
pub fn reconstruct_path(
    predecessors: &Predecessors,
    start: SystemId,
    goal: SystemId,
) -> Option<Vec<SystemId>> {
    if !predecessors.contains(goal) {
        return None;
    }

    let mut path = Vec::with_capacity(predecessors.depth(goal).map_or(1, |d| d + 1));
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = predecessors.parent(node).flatten();
    }
    path.reverse();
    Some(path)
}
