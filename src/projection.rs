//! Derived relationship projection.
//!
//! A breed's homes are never stored: they are computed at read time from two
//! repository queries (the breed's cats, then those cats' owners). The
//! functions here are pure so the deduplication rules can be tested without a
//! database. First-seen order is preserved, but callers must treat the output
//! as a set; any ordering is an artifact of what the repository returned.

use rustc_hash::FxHashSet;

use crate::{
    cats::models::Cat,
    homes::models::HomeUuid,
    humans::models::{Human, HumanUuid},
};

/// The distinct owners of a slice of cats. Two cats sharing an owner
/// contribute that owner once.
pub(crate) fn distinct_owners(cats: &[Cat]) -> Vec<HumanUuid> {
    let mut seen = FxHashSet::default();

    cats.iter()
        .map(|cat| cat.owner_uuid)
        .filter(|owner| seen.insert(*owner))
        .collect()
}

/// The distinct homes of a slice of humans. Two owners sharing a home
/// contribute that home once.
pub(crate) fn distinct_homes(owners: &[Human]) -> Vec<HomeUuid> {
    let mut seen = FxHashSet::default();

    owners
        .iter()
        .map(|human| human.home_uuid)
        .filter(|home| seen.insert(*home))
        .collect()
}
