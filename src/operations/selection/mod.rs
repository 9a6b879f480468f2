mod ids;

pub use ids::{LineId, PointIndex};

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::BuildHasher;

use tracing::debug;

use crate::geometry::{Boundary, Segment};

/// Read access to line geometry by id.
///
/// `None` means the line does not exist (for example, it was deleted
/// after being selected).
pub trait LineLookup {
    /// Returns the segment for `id`, if present.
    fn line(&self, id: LineId) -> Option<Segment>;
}

impl LineLookup for BTreeMap<LineId, Segment> {
    fn line(&self, id: LineId) -> Option<Segment> {
        self.get(&id).copied()
    }
}

impl<S: BuildHasher> LineLookup for HashMap<LineId, Segment, S> {
    fn line(&self, id: LineId) -> Option<Segment> {
        self.get(&id).copied()
    }
}

impl<F> LineLookup for F
where
    F: Fn(LineId) -> Option<Segment>,
{
    fn line(&self, id: LineId) -> Option<Segment> {
        self(id)
    }
}

/// Resolves selected point indices to the segments of their lines.
///
/// Point indices are collapsed to line ids (`index >> 1`), deduplicated and
/// looked up in ascending id order. Ids the lookup does not know are dropped.
#[derive(Debug, Clone, Default)]
pub struct ResolveLines {
    line_ids: BTreeSet<LineId>,
}

impl ResolveLines {
    /// Creates a new `ResolveLines` query from selected point indices.
    #[must_use]
    pub fn new<I>(selected_points: I) -> Self
    where
        I: IntoIterator<Item = PointIndex>,
    {
        Self {
            line_ids: selected_points.into_iter().map(LineId::from).collect(),
        }
    }

    /// Returns the distinct line ids in ascending order.
    #[must_use]
    pub fn line_ids(&self) -> &BTreeSet<LineId> {
        &self.line_ids
    }

    /// Executes the query, returning the resolved boundary.
    #[must_use]
    pub fn execute<L>(&self, lookup: &L) -> Boundary
    where
        L: LineLookup + ?Sized,
    {
        let mut boundary = Boundary::new();
        let mut dropped = 0_usize;
        for &id in &self.line_ids {
            if let Some(segment) = lookup.line(id) {
                boundary.push(segment);
            } else {
                debug!(%id, "selected line no longer exists");
                dropped += 1;
            }
        }
        debug!(
            resolved = boundary.len(),
            dropped, "resolved selected lines"
        );
        boundary
    }
}
