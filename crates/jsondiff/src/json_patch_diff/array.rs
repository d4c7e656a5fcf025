//! Array reconciler.
//!
//! Turns an old array into a new one with `remove`, `move`, `add` and
//! (through recursion) nested operations. The work is done in passes:
//!
//! 1. **Match.** Each old element, in index order, claims the lowest-indexed
//!    new element that is deep-equal to it and not yet claimed.
//! 2. **Pair slots.** An unmatched old element at index `i` is paired with the
//!    new element at `i` when that one is unmatched too. The pair is diffed in
//!    place instead of being removed and re-added.
//! 3. **Remove.** Old elements that are neither matched nor paired are
//!    removed, in index order, at their live position.
//! 4. **Place.** For each new index `j`, in order: a matched or paired element
//!    that is not already at `j` is moved there; a new element is added at
//!    `j`. Once `j` is handled, positions `0..=j` hold their final elements.
//! 5. **Recurse.** Each slot pair is diffed at its final index.
//!
//! Every emitted index is a live index: it addresses the array as left by the
//! operations before it, so the output replays with RFC 6902 semantics.

use jsondiff_json_pointer::{child, format_json_pointer};
use jsondiff_util::deep_equal;
use serde_json::Value;
use tracing::trace;

use super::{diff_values, DiffOptions};
use crate::json_patch::types::Op;

/// What occupies a position of the array while the patch is replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiveEntry {
    /// The old element with this index.
    Orig(usize),
    /// An element inserted by an `add`.
    Added,
}

/// The array as it looks after the operations emitted so far.
#[derive(Debug)]
struct LiveState {
    entries: Vec<LiveEntry>,
}

impl LiveState {
    fn new(len: usize) -> Self {
        Self {
            entries: (0..len).map(LiveEntry::Orig).collect(),
        }
    }

    fn position_of(&self, orig: usize) -> Option<usize> {
        self.entries.iter().position(|e| *e == LiveEntry::Orig(orig))
    }

    fn remove(&mut self, pos: usize) {
        self.entries.remove(pos);
    }

    fn relocate(&mut self, from: usize, to: usize) {
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
    }

    fn insert_added(&mut self, pos: usize) {
        self.entries.insert(pos, LiveEntry::Added);
    }
}

/// Index correspondence between the old and the new array.
#[derive(Debug)]
struct Matching {
    /// `orig_to_update[i] == Some(j)`: old element `i` is deep-equal to new element `j`.
    orig_to_update: Vec<Option<usize>>,
    update_to_orig: Vec<Option<usize>>,
}

impl Matching {
    fn build(src: &[Value], dst: &[Value]) -> Self {
        let mut orig_to_update = vec![None; src.len()];
        let mut update_to_orig: Vec<Option<usize>> = vec![None; dst.len()];
        for (i, item) in src.iter().enumerate() {
            let found = dst
                .iter()
                .enumerate()
                .position(|(j, candidate)| update_to_orig[j].is_none() && deep_equal(item, candidate));
            if let Some(j) = found {
                orig_to_update[i] = Some(j);
                update_to_orig[j] = Some(i);
            }
        }
        Self {
            orig_to_update,
            update_to_orig,
        }
    }

    /// Old indices paired with the new element at the same index.
    fn slots(&self, enabled: bool) -> Vec<usize> {
        if !enabled {
            return Vec::new();
        }
        (0..self.orig_to_update.len())
            .filter(|&i| {
                self.orig_to_update[i].is_none()
                    && self.update_to_orig.get(i).is_some_and(Option::is_none)
            })
            .collect()
    }
}

pub(crate) fn diff_array(
    ops: &mut Vec<Op>,
    path: &[String],
    src: &[Value],
    dst: &[Value],
    opts: &DiffOptions,
) {
    if src.is_empty() && dst.is_empty() {
        return;
    }
    let start = ops.len();
    let matching = Matching::build(src, dst);
    let slots = matching.slots(opts.recurse_slots);

    // Old index whose element ends up at each new index.
    let mut source: Vec<Option<usize>> = matching.update_to_orig.clone();
    for &i in &slots {
        source[i] = Some(i);
    }
    let mut kept = vec![false; src.len()];
    for &i in source.iter().flatten() {
        kept[i] = true;
    }

    let mut live = LiveState::new(src.len());
    let mut removed = 0usize;
    for i in (0..src.len()).filter(|&i| !kept[i]) {
        let pos = i - removed;
        ops.push(Op::Remove {
            path: child(path, pos),
        });
        live.remove(pos);
        removed += 1;
    }

    let mut moved = 0usize;
    for (j, item) in dst.iter().enumerate() {
        let current = source[j].and_then(|i| live.position_of(i));
        match current {
            Some(pos) if pos == j => {}
            Some(pos) => {
                ops.push(Op::Move {
                    from: child(path, pos),
                    path: child(path, j),
                });
                live.relocate(pos, j);
                moved += 1;
            }
            None => {
                debug_assert!(source[j].is_none(), "kept element missing from live state");
                ops.push(Op::Add {
                    path: child(path, j),
                    value: item.clone(),
                });
                live.insert_added(j);
            }
        }
    }

    for &i in &slots {
        diff_values(ops, &child(path, i), &src[i], &dst[i], opts);
    }

    trace!(
        path = %format_json_pointer(path),
        removed,
        moved,
        slots = slots.len(),
        ops = ops.len() - start,
        "array reconciled"
    );
}
