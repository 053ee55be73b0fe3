use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    AllocationId, AllocationStatus, AllocationType, EntityKind, ForeignKey, FpId, InsertPosition,
    Record,
};

/// Monthly lead quota of one FP.
///
/// `status` and `completion_date` follow the counts: the quota is 完了 once
/// `completed_allocations` reaches `total_allocations`, and only a completed
/// quota has a completion date. The edit rules keep both in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingAllocation {
    pub id: AllocationId,
    pub fp_id: FpId,
    pub allocation_type: AllocationType,
    pub completed_allocations: u32,
    pub total_allocations: u32,
    pub status: AllocationStatus,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
}

impl MatchingAllocation {
    /// Status implied by the counts
    pub fn derived_status(&self) -> AllocationStatus {
        if self.completed_allocations >= self.total_allocations {
            AllocationStatus::Completed
        } else {
            AllocationStatus::Incomplete
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status != AllocationStatus::Completed
    }

    /// Share of the quota already matched, in percent
    pub fn completion_rate(&self) -> f64 {
        if self.total_allocations == 0 {
            return 0.0;
        }
        self.completed_allocations as f64 * 100.0 / self.total_allocations as f64
    }
}

/// Status is not part of the draft; it is derived from the submitted counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchingAllocationDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fp_id: Option<FpId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_type: Option<AllocationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_allocations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_allocations: Option<u32>,
}

impl Record for MatchingAllocation {
    type Id = AllocationId;

    const PREFIX: &'static str = "ALLOC";
    const KIND: EntityKind = EntityKind::Allocation;
    const INSERT_AT: InsertPosition = InsertPosition::Back;

    fn id(&self) -> &AllocationId {
        &self.id
    }

    fn display_name(&self) -> &str {
        self.id.as_ref()
    }

    fn references(&self) -> Vec<ForeignKey> {
        vec![ForeignKey::new("fp_id", EntityKind::Fp, &self.fp_id)]
    }
}
