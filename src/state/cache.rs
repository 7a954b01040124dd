/// In-memory mirror of the remote pair collection
///
/// The remote store is authoritative; this cache only ever changes in
/// response to an acknowledged API call and is never persisted. It is
/// owned by the single-threaded UI state, so no locking is involved.

use super::data::Pair;

/// Ordered sequence of the last known server state.
///
/// Holds at most one entry per id. Mutations mirror the four store
/// operations: a full reload replaces the snapshot wholesale, while
/// create/update/delete acknowledgments apply incrementally.
#[derive(Debug, Default)]
pub struct PairCache {
    pairs: Vec<Pair>,
}

impl PairCache {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// All cached pairs in their stored order
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up a pair by its server-assigned id
    pub fn get(&self, id: &str) -> Option<&Pair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    /// Replace the whole snapshot with a freshly fetched collection
    pub fn replace_all(&mut self, pairs: Vec<Pair>) {
        self.pairs = pairs;
    }

    /// Append a pair the server just acknowledged creating.
    /// Existing entries keep their positions.
    pub fn append(&mut self, pair: Pair) {
        self.pairs.push(pair);
    }

    /// Swap the entry with the same id for its updated version,
    /// preserving its position. Returns false when the id is unknown
    /// (e.g. the pair was deleted before the update acknowledgment
    /// arrived); the cache is left unchanged in that case.
    pub fn replace_by_id(&mut self, pair: Pair) -> bool {
        match self.pairs.iter_mut().find(|p| p.id == pair.id) {
            Some(slot) => {
                *slot = pair;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with the given id, leaving all other entries in
    /// their relative order. Returns false when the id is unknown.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|p| p.id != id);
        self.pairs.len() < before
    }

    /// Pairs whose name contains `term`, ignoring case.
    /// An empty term matches everything.
    pub fn filter(&self, term: &str) -> Vec<&Pair> {
        let needle = term.to_lowercase();
        self.pairs
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }
}
