//! Synthetic catalog generation for benchmarking and local smoke-testing,
//! without needing a real institution's data on hand.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use types::{ClassroomAddress, SubjectRequest, MAX_COMPLEXITY, MIN_COMPLEXITY};

pub fn random_catalog(seed: u64, request_count: usize) -> Vec<SubjectRequest> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let professor_count = (request_count / 3).max(1) as u32;
    let group_count = (request_count / 2).max(1) as u32;
    let building_count = 3u32;
    let rooms_per_building = 4u32;

    (0..request_count)
        .map(|i| {
            let professor = rng.gen_range(0..professor_count);
            let group_draws = rng.gen_range(1..=2u32.min(group_count));
            let groups: Vec<u32> = (0..group_draws).map(|_| rng.gen_range(0..group_count)).collect();

            let classroom_draws = rng.gen_range(1..=3);
            let classrooms: Vec<ClassroomAddress> = (0..classroom_draws)
                .map(|_| ClassroomAddress::new(rng.gen_range(0..building_count), rng.gen_range(0..rooms_per_building)))
                .collect();

            let complexity = rng.gen_range(MIN_COMPLEXITY..=MAX_COMPLEXITY);
            SubjectRequest::new(i as u64, professor, complexity, [], groups, classrooms)
        })
        .collect()
}
