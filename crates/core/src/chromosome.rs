//! The dual-vector chromosome: one lesson slot and one classroom per
//! subject request, plus the conflict predicates every mutation and
//! crossover decision is built from.

use types::{is_late_saturday, ClassroomAddress, Slot, DAYS_IN_SCHEDULE, NO_LESSON, PERIODS};

use crate::catalog::ScheduleData;

/// `lesson[r]` / `classroom[r]` assignments for every subject request in a
/// [`ScheduleData`], indexed by request position (not request id).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chromosomes {
    lesson: Vec<Slot>,
    classroom: Vec<ClassroomAddress>,
}

impl Chromosomes {
    pub fn len(&self) -> usize {
        self.lesson.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lesson.is_empty()
    }

    pub fn lesson(&self, r: usize) -> Slot {
        self.lesson[r]
    }

    pub fn classroom(&self, r: usize) -> ClassroomAddress {
        self.classroom[r]
    }

    pub fn set_lesson(&mut self, r: usize, slot: Slot) {
        self.lesson[r] = slot;
    }

    pub fn set_classroom(&mut self, r: usize, classroom: ClassroomAddress) {
        self.classroom[r] = classroom;
    }

    pub fn lessons(&self) -> &[Slot] {
        &self.lesson
    }

    pub fn classrooms(&self) -> &[ClassroomAddress] {
        &self.classroom
    }

    /// Builds a fresh chromosome pair for `data`: locked requests are seeded
    /// first at their pinned slot, then every remaining request scans
    /// `(period, day)` in lexicographic order for the first admissible slot
    /// and classroom. A request with no admissible slot is left unassigned
    /// (`NO_LESSON`, `NoClassroom`).
    pub fn seeded(data: &ScheduleData) -> Self {
        let n = data.requests().len();
        let mut chromosomes = Self {
            lesson: vec![NO_LESSON; n],
            classroom: vec![ClassroomAddress::NO_CLASSROOM; n],
        };

        for r in 0..n {
            if let Some(slot) = data.locked_slot(r) {
                chromosomes.lesson[r] = slot;
                for &cand in data.requests()[r].classrooms() {
                    if !chromosomes.conflict_room(slot, cand) {
                        chromosomes.classroom[r] = cand;
                        break;
                    }
                }
            }
        }

        for r in 0..n {
            if !data.has_locked_lesson(r) {
                chromosomes.seed_request(data, r);
            }
        }

        chromosomes
    }

    fn seed_request(&mut self, data: &ScheduleData, r: usize) {
        let req = &data.requests()[r];
        for p in 0..PERIODS {
            for d in 0..DAYS_IN_SCHEDULE {
                if !req.requested_week_day(d) {
                    continue;
                }
                let slot = d * PERIODS + p;
                if is_late_saturday(slot) {
                    continue;
                }
                if self.conflict_slot(data, r, slot) {
                    continue;
                }

                self.lesson[r] = slot;
                if req.classrooms().is_empty() {
                    self.classroom[r] = ClassroomAddress::ANY;
                    return;
                }
                for &cand in req.classrooms() {
                    if !self.conflict_room(slot, cand) {
                        self.classroom[r] = cand;
                        return;
                    }
                }
                self.lesson[r] = NO_LESSON;
            }
        }
    }

    /// True if placing `r` at `slot` would collide with another request
    /// sharing its professor or any of its groups, wherever that other
    /// request currently sits.
    pub fn conflict_slot(&self, data: &ScheduleData, r: usize, slot: Slot) -> bool {
        let req = &data.requests()[r];
        self.lesson.iter().enumerate().any(|(r2, &l2)| {
            r2 != r
                && l2 == slot
                && {
                    let other = &data.requests()[r2];
                    req.professor() == other.professor() || req.groups_intersect(other)
                }
        })
    }

    /// True if `addr` is a real classroom (not `Any`) already booked at `slot`
    /// by some request in this chromosome.
    pub fn conflict_room(&self, slot: Slot, addr: ClassroomAddress) -> bool {
        if addr.is_any() {
            return false;
        }
        self.classroom
            .iter()
            .zip(self.lesson.iter())
            .any(|(&c, &l)| c == addr && l == slot)
    }

    /// `conflict_slot` plus, when `r`'s own classroom is a real room, a check
    /// that room is free at `slot`.
    pub fn conflict_full(&self, data: &ScheduleData, r: usize, slot: Slot) -> bool {
        if self.conflict_slot(data, r, slot) {
            return true;
        }
        if self.classroom[r].is_any() {
            return false;
        }
        self.conflict_room(slot, self.classroom[r])
    }
}

/// True if swapping requests `first_r` and `second_r`'s lessons between
/// `first` and `second` would leave both admissible: neither inherited
/// classroom conflicts with the chromosome it lands in, and neither
/// inherited slot collides with that chromosome's own professor/group/room
/// assignments.
pub fn ready_to_crossover(first: &Chromosomes, second: &Chromosomes, data: &ScheduleData, r: usize) -> bool {
    let first_lesson = first.lesson(r);
    let first_classroom = first.classroom(r);
    let second_lesson = second.lesson(r);
    let second_classroom = second.classroom(r);

    if first.conflict_room(second_lesson, second_classroom) || second.conflict_room(first_lesson, first_classroom) {
        return false;
    }
    if first.conflict_full(data, r, second_lesson) || second.conflict_full(data, r, first_lesson) {
        return false;
    }
    true
}

/// Swaps request `r`'s lesson and classroom between `first` and `second`.
/// Caller must have already confirmed [`ready_to_crossover`].
pub fn crossover(first: &mut Chromosomes, second: &mut Chromosomes, r: usize) {
    let first_lesson = first.lesson(r);
    let first_classroom = first.classroom(r);
    let second_lesson = second.lesson(r);
    let second_classroom = second.classroom(r);

    first.set_lesson(r, second_lesson);
    first.set_classroom(r, second_classroom);
    second.set_lesson(r, first_lesson);
    second.set_classroom(r, first_classroom);
}
