use serde::{Deserialize, Serialize};

use crate::classroom::ClassroomAddress;
use crate::slot::{Slot, DAYS_IN_WEEK};

/// One required subject delivery: a professor, a complexity weight, the
/// weekdays it may run on, the groups attending, and the candidate
/// classrooms it may be held in.
///
/// Immutable once constructed; `new` normalizes `groups` and `classrooms`
/// (deduplicated, ascending) and expands an empty `week_days` into "every
/// day allowed".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectRequest {
    id: u64,
    professor: u32,
    complexity: u8,
    week_days: [bool; DAYS_IN_WEEK as usize],
    groups: Vec<u32>,
    classrooms: Vec<ClassroomAddress>,
}

impl SubjectRequest {
    pub fn new(
        id: u64,
        professor: u32,
        complexity: u8,
        week_days: impl IntoIterator<Item = bool>,
        groups: impl IntoIterator<Item = u32>,
        classrooms: impl IntoIterator<Item = ClassroomAddress>,
    ) -> Self {
        let mut days = [false; DAYS_IN_WEEK as usize];
        let mut any_set = false;
        for (slot, value) in days.iter_mut().zip(week_days.into_iter()) {
            *slot = value;
            any_set |= value;
        }
        if !any_set {
            days = [true; DAYS_IN_WEEK as usize];
        }

        let mut groups: Vec<u32> = groups.into_iter().collect();
        groups.sort_unstable();
        groups.dedup();

        let mut classrooms: Vec<ClassroomAddress> = classrooms.into_iter().collect();
        classrooms.sort_unstable();
        classrooms.dedup();

        Self {
            id,
            professor,
            complexity: complexity.clamp(crate::slot::MIN_COMPLEXITY, crate::slot::MAX_COMPLEXITY),
            week_days: days,
            groups,
            classrooms,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn professor(&self) -> u32 {
        self.professor
    }

    pub fn complexity(&self) -> u8 {
        self.complexity
    }

    pub fn groups(&self) -> &[u32] {
        &self.groups
    }

    pub fn classrooms(&self) -> &[ClassroomAddress] {
        &self.classrooms
    }

    /// `d` is taken mod `DAYS_IN_WEEK`, matching the two-week schedule's
    /// repeating weekday admissibility.
    pub fn requested_week_day(&self, d: u32) -> bool {
        self.week_days[(d % DAYS_IN_WEEK) as usize]
    }

    pub fn groups_intersect(&self, other: &SubjectRequest) -> bool {
        self.groups.iter().any(|g| other.groups.binary_search(g).is_ok())
    }
}

/// Pins a subject request to an exact slot; must hold in every individual.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lock {
    pub subject_request_id: u64,
    pub slot: Slot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_week_days_means_all_days_allowed() {
        let r = SubjectRequest::new(0, 1, 2, [], [1, 2], []);
        for d in 0..DAYS_IN_WEEK {
            assert!(r.requested_week_day(d));
        }
    }

    #[test]
    fn groups_and_classrooms_are_deduplicated_and_sorted() {
        let r = SubjectRequest::new(
            0,
            1,
            2,
            [true, false, false, false, false, false],
            [3, 1, 1, 2],
            [ClassroomAddress::new(1, 1), ClassroomAddress::new(0, 5), ClassroomAddress::new(1, 1)],
        );
        assert_eq!(r.groups(), &[1, 2, 3]);
        assert_eq!(
            r.classrooms(),
            &[ClassroomAddress::new(0, 5), ClassroomAddress::new(1, 1)]
        );
        assert!(r.requested_week_day(0));
        assert!(!r.requested_week_day(1));
    }

    #[test]
    fn complexity_is_clamped_to_the_documented_range() {
        let r = SubjectRequest::new(0, 1, 9, [], [], []);
        assert_eq!(r.complexity(), crate::slot::MAX_COMPLEXITY);
    }
}
