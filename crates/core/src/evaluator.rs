//! Fitness function. Lower is better; zero is a perfectly admissible,
//! perfectly compact schedule.
//!
//! Walks every request once to build per-day aggregates (group/professor
//! free-period bitmaps, per-group total complexity, per-group per-period
//! building occupied), then walks the aggregates once to price gaps in the
//! day, cross-building travel, and the single heaviest day's complexity.
//! All scratch containers are backed by one [`Arena`] for the whole call.

use types::{ClassroomAddress, DAYS_IN_SCHEDULE, NO_LESSON, PERIODS};

use crate::alloc::Arena;
use crate::catalog::ScheduleData;
use crate::chromosome::Chromosomes;
use crate::flatmap::SortedFlatMap;

const UNASSIGNED_PENALTY: u64 = 100;
const NO_CLASSROOM_PENALTY: u64 = 100;
const GAP_WEIGHT_GROUP: u64 = 3;
const GAP_WEIGHT_PROFESSOR: u64 = 2;
const BUILDING_CHANGE_WEIGHT: u64 = 64;
const NO_BUILDING: u32 = u32::MAX;

type Windows = [bool; PERIODS as usize];
type Buildings = [u32; PERIODS as usize];

pub fn evaluate(data: &ScheduleData, chromosomes: &Chromosomes, arena: &Arena) -> u64 {
    let days = DAYS_IN_SCHEDULE as usize;
    let mut complexity: Vec<SortedFlatMap<u32, u32>> = (0..days).map(|_| SortedFlatMap::new(arena)).collect();
    let mut group_windows: Vec<SortedFlatMap<u32, Windows>> = (0..days).map(|_| SortedFlatMap::new(arena)).collect();
    let mut professor_windows: Vec<SortedFlatMap<u32, Windows>> =
        (0..days).map(|_| SortedFlatMap::new(arena)).collect();
    let mut group_buildings: Vec<SortedFlatMap<u32, Buildings>> =
        (0..days).map(|_| SortedFlatMap::new(arena)).collect();

    let mut score: u64 = 0;

    for (r, request) in data.requests().iter().enumerate() {
        let slot = chromosomes.lesson(r);
        if slot == NO_LESSON {
            score += UNASSIGNED_PENALTY;
            continue;
        }

        let d = types::day(slot) as usize;
        let p = types::period(slot) as usize;

        professor_windows[d].get_or_insert_with(request.professor(), || [false; PERIODS as usize])[p] = true;

        let classroom = chromosomes.classroom(r);
        for &group in request.groups() {
            *complexity[d].get_or_insert_with(group, || 0) += p as u32 * request.complexity() as u32;
            group_windows[d].get_or_insert_with(group, || [false; PERIODS as usize])[p] = true;
            let buildings = group_buildings[d].get_or_insert_with(group, || [NO_BUILDING; PERIODS as usize]);

            if classroom == ClassroomAddress::NO_CLASSROOM {
                score += NO_CLASSROOM_PENALTY;
                continue;
            }
            buildings[p] = classroom.building;
        }
    }

    let mut max_complexity: u64 = 0;
    for d in 0..days {
        for (_, &value) in complexity[d].iter() {
            max_complexity = max_complexity.max(value as u64);
        }
        score += score_gaps(&group_windows[d], GAP_WEIGHT_GROUP);
        score += score_gaps(&professor_windows[d], GAP_WEIGHT_PROFESSOR);
        score += score_building_changes(&group_buildings[d]);
    }

    score + max_complexity
}

fn score_gaps(windows: &SortedFlatMap<u32, Windows>, weight: u64) -> u64 {
    let mut total = 0u64;
    for (_, bitmap) in windows.iter() {
        let mut previous: Option<u32> = None;
        for (p, &occupied) in bitmap.iter().enumerate() {
            if !occupied {
                continue;
            }
            let p = p as u32;
            if let Some(prev) = previous {
                let gap = p - prev;
                if gap > 1 {
                    total += weight * gap as u64;
                }
            }
            previous = Some(p);
        }
    }
    total
}

fn score_building_changes(buildings: &SortedFlatMap<u32, Buildings>) -> u64 {
    let mut total = 0u64;
    for (_, row) in buildings.iter() {
        let mut previous = NO_BUILDING;
        for &current in row.iter() {
            if current != NO_BUILDING && previous != NO_BUILDING && current != previous {
                total += BUILDING_CHANGE_WEIGHT;
            }
            previous = current;
        }
    }
    total
}
