use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type GroupId = u32;
pub type CountList = Vec<i64>;

/// Baseline value of every freshly generated folder counter
pub const BASELINE: i64 = 1;

/// Per-group folder counters, keyed by group id.
///
/// Serializes as a JSON object whose keys are the decimal form of each group id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct IdCounts {
    pub groups: BTreeMap<GroupId, CountList>,
}

/// Number of consumed folders (counters away from the baseline) for one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupStatus {
    pub group_id: GroupId,
    pub consumed: usize,
}

impl IdCounts {
    /// Groups `1..=num_groups`, each owning its own list of `num_folders` ones.
    pub fn new(num_folders: usize, num_groups: GroupId) -> Self {
        let groups = (1..=num_groups)
            .map(|group_id| (group_id, vec![BASELINE; num_folders]))
            .collect();

        IdCounts { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn status_report(&self) -> Vec<GroupStatus> {
        self.groups
            .iter()
            .map(|(&group_id, counts)| GroupStatus {
                group_id,
                consumed: counts.iter().filter(|&&count| count != BASELINE).count(),
            })
            .collect()
    }
}
