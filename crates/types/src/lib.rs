pub mod classroom;
pub mod error;
pub mod request;
pub mod slot;

pub use classroom::ClassroomAddress;
pub use error::{ConfigError, LookupError};
pub use request::{Lock, SubjectRequest};
pub use slot::{
    day, is_late_saturday, period, Slot, DAYS_IN_SCHEDULE, DAYS_IN_WEEK, MAX_COMPLEXITY,
    MAX_LESSONS_COUNT, MIN_COMPLEXITY, NO_LESSON, PERIODS,
};
