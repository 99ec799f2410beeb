//! Every generation mutates the whole population unconditionally (including
//! whatever individual happens to hold the current best fitness), so the
//! population's best fitness is only expected to improve in expectation, not
//! as a hard guarantee — running longer can make it worse. What must hold
//! regardless of generation count is the population's structural shape: a
//! stable size and ascending sort order by fitness.

use std::sync::Arc;

use ga::{Ga, GaParams};
use proptest::prelude::*;
use sched_core::ScheduleData;
use types::{ClassroomAddress, SubjectRequest};

fn arb_catalog(request_count: usize) -> Arc<ScheduleData> {
    let requests: Vec<SubjectRequest> = (0..request_count)
        .map(|i| {
            SubjectRequest::new(
                i as u64,
                (i % 4) as u32,
                1 + (i % 4) as u8,
                [],
                [(i % 5) as u32],
                [ClassroomAddress::new((i % 2) as u32, 1)],
            )
        })
        .collect();
    Arc::new(ScheduleData::new(requests, vec![]).unwrap())
}

proptest! {
    #[test]
    fn differing_generation_counts_still_yield_a_validly_sorted_population(
        request_count in 3usize..12,
        seed in any::<u64>(),
        extra_generations in 1usize..20,
    ) {
        let data = arb_catalog(request_count);
        let params = GaParams::new(16, 5, 5, 6, 60).unwrap();
        let shorter = Ga::new(params).run(data.clone(), Some(seed));

        let longer_params = GaParams::new(16, 5 + extra_generations, 5, 6, 60).unwrap();
        let longer = Ga::new(longer_params).run(data, Some(seed));

        for population in [&shorter, &longer] {
            prop_assert_eq!(population.len(), 16);
            for pair in population.windows(2) {
                prop_assert!(pair[0].fitness().unwrap() <= pair[1].fitness().unwrap());
            }
        }
    }
}
