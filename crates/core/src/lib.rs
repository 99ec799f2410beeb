pub mod alloc;
pub mod catalog;
pub mod chromosome;
pub mod evaluator;
pub mod flatmap;

pub use alloc::Arena;
pub use catalog::ScheduleData;
pub use chromosome::{crossover, ready_to_crossover, Chromosomes};
pub use evaluator::evaluate;
pub use flatmap::SortedFlatMap;
