//! Property-based coverage for the catalog/chromosome invariants that must
//! hold for any admissible request set, not just the handful of fixed
//! scenarios in the unit tests.

use proptest::prelude::*;
use sched_core::{crossover, ready_to_crossover, Chromosomes, ScheduleData};
use types::{ClassroomAddress, SubjectRequest, NO_LESSON};

fn arb_catalog(request_count: usize) -> ScheduleData {
    let requests: Vec<SubjectRequest> = (0..request_count)
        .map(|i| {
            SubjectRequest::new(
                i as u64,
                (i % 3) as u32,
                1 + (i % 4) as u8,
                [],
                [(i % 4) as u32, (i % 5) as u32],
                [ClassroomAddress::new((i % 2) as u32, (i % 3) as u32)],
            )
        })
        .collect();
    ScheduleData::new(requests, vec![]).unwrap()
}

proptest! {
    /// A freshly seeded chromosome pair never double-books a professor or a
    /// shared group at the same slot.
    #[test]
    fn seeding_is_conflict_free(request_count in 2usize..16) {
        let data = arb_catalog(request_count);
        let chromosomes = Chromosomes::seeded(&data);
        for r in 0..chromosomes.len() {
            let slot = chromosomes.lesson(r);
            if slot == NO_LESSON {
                continue;
            }
            prop_assert!(!chromosomes.conflict_slot(&data, r, slot));
        }
    }

    /// `ready_to_crossover` is symmetric: swapping which chromosome is
    /// "first" and which is "second" cannot change the verdict, since the
    /// underlying check is an OR of two symmetric conflict tests.
    #[test]
    fn crossover_readiness_is_symmetric(request_count in 2usize..10, perturb_a in 0u32..84, perturb_b in 0u32..84) {
        let data = arb_catalog(request_count);
        let mut a = Chromosomes::seeded(&data);
        let mut b = Chromosomes::seeded(&data);
        a.set_lesson(0, perturb_a);
        b.set_lesson(0, perturb_b);

        prop_assert_eq!(
            ready_to_crossover(&a, &b, &data, 0),
            ready_to_crossover(&b, &a, &data, 0)
        );
    }

    /// Applying the same crossover swap twice returns both chromosomes to
    /// their starting state.
    #[test]
    fn crossover_is_an_involution(request_count in 2usize..10, perturb in 0u32..84) {
        let data = arb_catalog(request_count);
        let mut a = Chromosomes::seeded(&data);
        let mut b = Chromosomes::seeded(&data);
        b.set_lesson(0, perturb);

        let before_a = a.clone();
        let before_b = b.clone();
        crossover(&mut a, &mut b, 0);
        crossover(&mut a, &mut b, 0);
        prop_assert_eq!(a, before_a);
        prop_assert_eq!(b, before_b);
    }
}
