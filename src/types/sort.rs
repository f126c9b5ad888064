//! Sort state and the direction cycle driven by header taps.

use serde::{Deserialize, Serialize};

use crate::types::ColumnId;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Stable ordinal used in persisted snapshots (0 = ascending).
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Ascending => 0,
            Self::Descending => 1,
        }
    }

    /// Inverse of [`ordinal`](Self::ordinal); unknown ordinals map to `None`.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Ascending),
            1 => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Current sort selection.
///
/// The "direction none implies no column" invariant is structural: an
/// inactive state holds no column id at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(ColumnId, SortDirection)>,
}

impl SortState {
    /// No sort applied.
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Sort by `id` in the given direction.
    pub fn sorted(id: impl Into<ColumnId>, direction: SortDirection) -> Self {
        Self {
            active: Some((id.into(), direction)),
        }
    }

    /// Id of the sorted column, if a sort is active.
    pub fn column_id(&self) -> Option<&str> {
        self.active.as_ref().map(|(id, _)| id.as_str())
    }

    /// Direction of the active sort.
    pub fn direction(&self) -> Option<SortDirection> {
        self.active.as_ref().map(|&(_, d)| d)
    }

    /// Direction shown on the given column's header indicator.
    pub fn direction_for(&self, id: &str) -> Option<SortDirection> {
        match &self.active {
            Some((active_id, d)) if active_id == id => Some(*d),
            _ => None,
        }
    }

    /// True when any column is sorted.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Advance the cycle for `id`: on the already-sorted column,
    /// ascending → descending → inactive; on any other column, reset to
    /// ascending on that column.
    pub fn sort_by(&mut self, id: &str) {
        self.active = match self.active.take() {
            Some((active_id, SortDirection::Ascending)) if active_id == id => {
                Some((active_id, SortDirection::Descending))
            }
            Some((active_id, SortDirection::Descending)) if active_id == id => None,
            _ => Some((id.to_string(), SortDirection::Ascending)),
        };
    }

    /// Drop any active sort.
    pub fn clear(&mut self) {
        self.active = None;
    }
}
