use std::collections::BTreeSet;
use std::fmt;

use crate::geometry::Segment;
use crate::operations::{LineLookup, PointIndex};

/// Identifier of an editor tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolId(pub String);

impl ToolId {
    /// The host's selection tool.
    #[must_use]
    pub fn select() -> Self {
        Self("SELECT_TOOL".to_owned())
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A state-changing command understood by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Adds lines to the uncommitted working set.
    AddSegments { segments: Vec<Segment>, tag: String },
    /// Drops everything added since the last finalize.
    RevertUncommitted,
    /// Makes the uncommitted working set permanent.
    FinalizeCommitted,
    /// Switches the active editor tool.
    SetActiveTool(ToolId),
}

/// The selection tool's state at the time of a recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub points: BTreeSet<PointIndex>,
    /// Whether the selection was made in multi-select mode.
    pub multi: bool,
}

/// The editor state and command interface the preview controller talks to.
///
/// Line lookups read committed geometry only; lines added through
/// [`HostCommand::AddSegments`] are not visible until finalized.
pub trait TrackHost: LineLookup {
    /// Returns the current selection.
    fn selection(&self) -> SelectionSnapshot;

    /// Returns the stroke width currently configured for new lines.
    fn stroke_width(&self) -> f64;

    /// Applies a command.
    fn dispatch(&mut self, command: HostCommand);
}
