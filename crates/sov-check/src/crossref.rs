//! Cross-reference checker: set differences between tasks and speech clips.

use std::collections::BTreeSet;

use sov_core::EntryKey;

/// Task keys with no clip, in sorted order.
#[must_use]
pub fn find_missing_assets(
    tasks: &BTreeSet<EntryKey>,
    assets: &BTreeSet<EntryKey>,
) -> Vec<EntryKey> {
    tasks.difference(assets).cloned().collect()
}

/// Clip keys with no task, in sorted order.
#[must_use]
pub fn find_orphan_assets(
    tasks: &BTreeSet<EntryKey>,
    assets: &BTreeSet<EntryKey>,
) -> Vec<EntryKey> {
    assets.difference(tasks).cloned().collect()
}
