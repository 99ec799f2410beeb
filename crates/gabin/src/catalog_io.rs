//! JSON catalog loading. Subject requests are read into a plain DTO first
//! and routed through [`SubjectRequest::new`] so normalization (sorted,
//! deduplicated groups/classrooms; clamped complexity; empty `week_days`
//! meaning "every day") always applies, regardless of what the file on disk
//! actually contains.

use std::path::Path;

use serde::Deserialize;
use types::{ClassroomAddress, Lock, SubjectRequest};

#[derive(Deserialize)]
struct RequestDto {
    id: u64,
    professor: u32,
    complexity: u8,
    #[serde(default)]
    week_days: Vec<bool>,
    groups: Vec<u32>,
    #[serde(default)]
    classrooms: Vec<ClassroomAddress>,
}

#[derive(Deserialize)]
struct CatalogFile {
    requests: Vec<RequestDto>,
    #[serde(default)]
    locks: Vec<Lock>,
}

pub fn load(path: &Path) -> anyhow::Result<(Vec<SubjectRequest>, Vec<Lock>)> {
    let text = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&text)?;
    let requests = file
        .requests
        .into_iter()
        .map(|r| SubjectRequest::new(r.id, r.professor, r.complexity, r.week_days, r.groups, r.classrooms))
        .collect();
    Ok((requests, file.locks))
}
