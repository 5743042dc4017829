//! Bed Registry
//!
//! Client-side ordered cache of beds. Replaced wholesale on load,
//! patched one record at a time after each successful transition.

use crate::domain::{Bed, BedState};

/// Counters shown above the bed grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateSummary {
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
}

impl StateSummary {
    pub fn get(&self, state: BedState) -> usize {
        match state {
            BedState::Available => self.available,
            BedState::Occupied => self.occupied,
            BedState::Maintenance => self.maintenance,
        }
    }

    pub fn total(&self) -> usize {
        self.available + self.occupied + self.maintenance
    }
}

/// Dashboard filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateFilter {
    #[default]
    All,
    Only(BedState),
}

impl StateFilter {
    pub fn matches(&self, bed: &Bed) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Only(state) => bed.state == *state,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BedRegistry {
    beds: Vec<Bed>,
}

impl BedRegistry {
    pub fn new(beds: Vec<Bed>) -> Self {
        Self { beds }
    }

    /// Replace the whole collection with a fresh snapshot
    pub fn replace_all(&mut self, beds: Vec<Bed>) {
        let inconsistent = beds.iter().filter(|bed| !bed.is_consistent()).count();
        if inconsistent > 0 {
            log::warn!("snapshot contains {} bed(s) with inconsistent patient fields", inconsistent);
        }
        self.beds = beds;
    }

    /// Replace the record with the same id in place.
    ///
    /// Returns `false` (and changes nothing) when no record matches.
    pub fn apply_update(&mut self, updated: Bed) -> bool {
        if !updated.is_consistent() {
            log::warn!("bed {} ({}) has inconsistent patient fields", updated.id, updated.bed_number);
        }
        match self.beds.iter_mut().find(|bed| bed.id == updated.id) {
            Some(bed) => {
                *bed = updated;
                true
            }
            None => {
                log::debug!("ignoring update for unknown bed {}", updated.id);
                false
            }
        }
    }

    pub fn count_by_state(&self, state: BedState) -> usize {
        self.beds.iter().filter(|bed| bed.state == state).count()
    }

    pub fn summary(&self) -> StateSummary {
        self.beds.iter().fold(StateSummary::default(), |mut summary, bed| {
            match bed.state {
                BedState::Available => summary.available += 1,
                BedState::Occupied => summary.occupied += 1,
                BedState::Maintenance => summary.maintenance += 1,
            }
            summary
        })
    }

    pub fn get(&self, id: u32) -> Option<&Bed> {
        self.beds.iter().find(|bed| bed.id == id)
    }

    pub fn beds(&self) -> &[Bed] {
        &self.beds
    }

    /// Beds passing `filter`, in registry order
    pub fn filtered(&self, filter: StateFilter) -> Vec<Bed> {
        self.beds.iter().filter(|bed| filter.matches(bed)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.beds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beds.is_empty()
    }
}
