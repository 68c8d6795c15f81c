//! Task name interning.
//!
//! Maps task names to dense node indices so the graph and the search only
//! ever touch small integers. Names are resolved back at the boundary.

use rustc_hash::FxHashMap;

/// Dense node index of a task in the conflict graph.
pub type NodeId = u32;

/// Bidirectional map between task names and node indices.
#[derive(Debug, Clone)]
pub struct TaskNameInterner {
    to_id: FxHashMap<String, NodeId>,
    from_id: Vec<String>,
}

impl TaskNameInterner {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_id: Vec::with_capacity(capacity),
        }
    }

    /// Intern a name, returning its node index and whether it was new.
    pub fn intern(&mut self, name: &str) -> (NodeId, bool) {
        if let Some(&id) = self.to_id.get(name) {
            return (id, false);
        }
        let id = self.from_id.len() as NodeId;
        self.from_id.push(name.to_string());
        self.to_id.insert(name.to_string(), id);
        (id, true)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.to_id.get(name).copied()
    }

    #[inline]
    pub fn resolve(&self, id: NodeId) -> Option<&str> {
        self.from_id.get(id as usize).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.from_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_id.is_empty()
    }
}

impl Default for TaskNameInterner {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
