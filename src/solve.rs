use crate::{Configuration, Direction, Path};

type IndexSet<K> = indexmap::IndexSet<K, fxhash::FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Shortest path from the start to the target, `None` if the target is
    /// unreachable.
    pub path: Option<Path>,
    /// Number of distinct configurations ever enqueued, the start included.
    pub visited: usize,
}

/// Breadth-first search from `start` to any configuration laid out like
/// `target`.
///
/// `on_visit` is called with the visited count every time a new configuration
/// is enqueued.
pub fn bfs(
    start: &Configuration,
    target: &Configuration,
    mut on_visit: impl FnMut(usize),
) -> SearchResult {
    log::debug!("Searching from {:?} to {:?}", start.layout(), target.layout());

    // Entries before the cursor are expanded, the rest is the frontier.
    let mut visited = IndexSet::default();
    let mut start = start.clone();
    start.path = Path::new();
    visited.insert(start);
    on_visit(visited.len());

    let mut cursor = 0;
    while let Some(current) = visited.get_index(cursor) {
        if current == target {
            log::info!(
                "Found a path of {} moves, {} configurations traversed",
                current.path.len(),
                visited.len(),
            );
            return SearchResult {
                path: Some(current.path.clone()),
                visited: visited.len(),
            };
        }

        let current = current.clone();
        log::trace!("Expanding {:?} at depth {}", current.layout(), current.path.len());
        for dir in Direction::ALL {
            let mut next = current.clone();
            let Ok(()) = next.go(dir) else { continue };
            // The path takes no part in hashing, so a revisit is still rejected.
            next.record(dir);
            if visited.insert(next) {
                on_visit(visited.len());
            }
        }
        cursor += 1;
    }

    log::info!("No path found, {} configurations traversed", visited.len());
    SearchResult {
        path: None,
        visited: visited.len(),
    }
}
