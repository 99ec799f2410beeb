//! Owns the validated, deduplicated set of subject requests and locks a
//! solve runs against. Built once per solve and shared read-only across the
//! whole population.

use std::collections::HashMap;

use tracing::warn;
use types::{ConfigError, Lock, LookupError, Slot, SubjectRequest};

/// A catalog of subject requests plus the locks pinning some of them to
/// fixed slots. Requests and locks are sorted and deduplicated by id at
/// construction so `index_of` can binary search.
#[derive(Debug, Clone)]
pub struct ScheduleData {
    requests: Vec<SubjectRequest>,
    locks: Vec<Lock>,
    locked_slot: Vec<Option<Slot>>,
    professor_index: HashMap<u32, Vec<usize>>,
    group_index: HashMap<u32, Vec<usize>>,
}

impl ScheduleData {
    pub fn new(mut requests: Vec<SubjectRequest>, mut locks: Vec<Lock>) -> Result<Self, ConfigError> {
        if requests.is_empty() {
            return Err(ConfigError::EmptyRequests);
        }

        requests.sort_by_key(|r| r.id());
        let before = requests.len();
        requests.dedup_by_key(|r| r.id());
        if requests.len() != before {
            warn!(dropped = before - requests.len(), "dropped duplicate subject request ids");
        }

        locks.sort_by_key(|l| l.subject_request_id);
        let before = locks.len();
        locks.dedup_by_key(|l| l.subject_request_id);
        if locks.len() != before {
            warn!(dropped = before - locks.len(), "dropped duplicate locks");
        }

        let mut locked_slot = vec![None; requests.len()];
        for lock in &locks {
            let r = requests
                .binary_search_by_key(&lock.subject_request_id, |r| r.id())
                .map_err(|_| ConfigError::LockReferencesUnknownRequest(lock.subject_request_id))?;
            locked_slot[r] = Some(lock.slot);
        }

        let mut professor_index: HashMap<u32, Vec<usize>> = HashMap::new();
        let mut group_index: HashMap<u32, Vec<usize>> = HashMap::new();
        for (r, req) in requests.iter().enumerate() {
            professor_index.entry(req.professor()).or_default().push(r);
            for &g in req.groups() {
                group_index.entry(g).or_default().push(r);
            }
        }

        Ok(Self {
            requests,
            locks,
            locked_slot,
            professor_index,
            group_index,
        })
    }

    pub fn requests(&self) -> &[SubjectRequest] {
        &self.requests
    }

    pub fn locks(&self) -> &[Lock] {
        &self.locks
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn index_of(&self, id: u64) -> Result<usize, LookupError> {
        self.requests
            .binary_search_by_key(&id, |r| r.id())
            .map_err(|_| LookupError::UnknownRequestId(id))
    }

    pub fn locked_slot(&self, r: usize) -> Option<Slot> {
        self.locked_slot[r]
    }

    pub fn has_locked_lesson(&self, r: usize) -> bool {
        self.locked_slot[r].is_some()
    }

    pub fn requests_for_professor(&self, professor: u32) -> &[usize] {
        self.professor_index.get(&professor).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn requests_for_group(&self, group: u32) -> &[usize] {
        self.group_index.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }
}
