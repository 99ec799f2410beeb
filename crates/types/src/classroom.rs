use serde::{Deserialize, Serialize};

/// A `(building, room)` address. Ordered lexicographically on the pair.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassroomAddress {
    pub building: u32,
    pub room: u32,
}

impl ClassroomAddress {
    /// "No specific classroom required" — participates in conflict checks as a wildcard.
    pub const ANY: ClassroomAddress = ClassroomAddress { building: 0, room: 0 };
    /// "Unassigned" — participates in conflict checks as absent.
    pub const NO_CLASSROOM: ClassroomAddress = ClassroomAddress {
        building: u32::MAX,
        room: u32::MAX,
    };

    pub fn new(building: u32, room: u32) -> Self {
        Self { building, room }
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }

    #[inline]
    pub fn is_no_classroom(&self) -> bool {
        *self == Self::NO_CLASSROOM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        let a = ClassroomAddress::new(0, 5);
        let b = ClassroomAddress::new(1, 0);
        assert!(a < b);
        assert!(ClassroomAddress::new(2, 1) < ClassroomAddress::new(2, 2));
    }

    #[test]
    fn sentinels_are_distinct_from_real_addresses() {
        assert!(ClassroomAddress::ANY.is_any());
        assert!(ClassroomAddress::NO_CLASSROOM.is_no_classroom());
        assert_ne!(ClassroomAddress::ANY, ClassroomAddress::NO_CLASSROOM);
    }
}
