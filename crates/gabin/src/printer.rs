//! Plain-text rendering of a solved schedule, grouped by day and period.

use sched_core::{Chromosomes, ScheduleData};
use types::{day, period, DAYS_IN_SCHEDULE, NO_LESSON, PERIODS};

pub fn render(data: &ScheduleData, chromosomes: &Chromosomes) -> String {
    let mut out = String::new();

    for d in 0..DAYS_IN_SCHEDULE {
        let mut day_lines = Vec::new();
        for p in 0..PERIODS {
            let mut entries = Vec::new();
            for r in 0..chromosomes.len() {
                let slot = chromosomes.lesson(r);
                if slot == NO_LESSON || day(slot) != d || period(slot) != p {
                    continue;
                }
                let request = &data.requests()[r];
                entries.push(format!("#{} @ {:?}", request.id(), chromosomes.classroom(r)));
            }
            if !entries.is_empty() {
                day_lines.push(format!("  period {p}: {}", entries.join(", ")));
            }
        }
        if !day_lines.is_empty() {
            out.push_str(&format!("day {d}\n{}\n", day_lines.join("\n")));
        }
    }

    let unassigned: Vec<u64> = (0..chromosomes.len())
        .filter(|&r| chromosomes.lesson(r) == NO_LESSON)
        .map(|r| data.requests()[r].id())
        .collect();
    if !unassigned.is_empty() {
        out.push_str(&format!("unassigned: {unassigned:?}\n"));
    }

    out
}
