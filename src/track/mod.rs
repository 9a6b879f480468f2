use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use crate::error::{Result, TrackError};
use crate::geometry::Segment;
use crate::operations::{LineId, LineLookup, PointIndex};
use crate::preview::{HostCommand, SelectionSnapshot, ToolId, TrackHost};

/// In-memory editor track implementing [`TrackHost`].
///
/// Lines live either in the committed set, which lookups read, or in the
/// uncommitted working set filled by [`HostCommand::AddSegments`]. Every
/// dispatched command is recorded in order.
#[derive(Debug)]
pub struct TrackStore {
    committed: BTreeMap<LineId, Segment>,
    uncommitted: Vec<(LineId, Segment)>,
    next_id: u32,
    selection: SelectionSnapshot,
    stroke_width: f64,
    active_tool: Option<ToolId>,
    commands: Vec<HostCommand>,
}

impl Default for TrackStore {
    fn default() -> Self {
        Self {
            committed: BTreeMap::new(),
            uncommitted: Vec::new(),
            next_id: 0,
            selection: SelectionSnapshot::default(),
            stroke_width: 1.0,
            active_tool: None,
            commands: Vec::new(),
        }
    }
}

impl TrackStore {
    /// Creates a new, empty track.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out ids up to [`LineId::MAX`] so every line keeps valid
    /// point indices.
    fn allocate_id(&mut self) -> Result<LineId> {
        if self.next_id > LineId::MAX.0 {
            return Err(TrackError::IdsExhausted.into());
        }
        let id = LineId(self.next_id);
        self.next_id += 1;
        Ok(id)
    }

    // --- Committed geometry ---

    /// Inserts a committed line and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `TrackError::IdsExhausted` once every id has been handed out.
    pub fn add_line(&mut self, segment: Segment) -> Result<LineId> {
        let id = self.allocate_id()?;
        self.committed.insert(id, segment);
        Ok(id)
    }

    /// Removes a committed line, returning it if it existed.
    pub fn remove_line(&mut self, id: LineId) -> Option<Segment> {
        self.committed.remove(&id)
    }

    /// Returns all committed lines in id order.
    #[must_use]
    pub fn committed_lines(&self) -> &BTreeMap<LineId, Segment> {
        &self.committed
    }

    /// Returns the lines added since the last finalize or revert.
    pub fn uncommitted_lines(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.uncommitted.iter().map(|(_, segment)| segment)
    }

    // --- Selection ---

    /// Adds both endpoints of a line to the selection.
    pub fn select_line(&mut self, id: LineId) {
        match id.point_indices() {
            Some(points) => self.selection.points.extend(points),
            None => warn!(%id, "line id has no point indices"),
        }
    }

    /// Adds raw point indices to the selection.
    pub fn select_points<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = PointIndex>,
    {
        self.selection.points.extend(points);
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        self.selection.points.clear();
    }

    /// Sets whether the selection counts as a multi-selection.
    pub fn set_multi_select(&mut self, multi: bool) {
        self.selection.multi = multi;
    }

    // --- Settings ---

    /// Sets the stroke width reported to the controller.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    /// Returns the tool set by the last `SetActiveTool`.
    #[must_use]
    pub fn active_tool(&self) -> Option<&ToolId> {
        self.active_tool.as_ref()
    }

    // --- Command log ---

    /// Returns every dispatched command in order.
    #[must_use]
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Drains the command log.
    pub fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl LineLookup for TrackStore {
    fn line(&self, id: LineId) -> Option<Segment> {
        self.committed.get(&id).copied()
    }
}

impl TrackHost for TrackStore {
    fn selection(&self) -> SelectionSnapshot {
        self.selection.clone()
    }

    fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    fn dispatch(&mut self, command: HostCommand) {
        trace!(?command, "dispatch");
        match &command {
            HostCommand::AddSegments { segments, tag } => {
                let mut added = 0_usize;
                for &segment in segments {
                    let Ok(id) = self.allocate_id() else {
                        warn!(dropped = segments.len() - added, "line ids exhausted");
                        break;
                    };
                    self.uncommitted.push((id, segment));
                    added += 1;
                }
                debug!(count = added, %tag, "added uncommitted lines");
            }
            HostCommand::RevertUncommitted => {
                debug!(count = self.uncommitted.len(), "reverted uncommitted lines");
                self.uncommitted.clear();
            }
            HostCommand::FinalizeCommitted => {
                debug!(count = self.uncommitted.len(), "finalized uncommitted lines");
                self.committed.extend(self.uncommitted.drain(..));
            }
            HostCommand::SetActiveTool(tool) => {
                self.active_tool = Some(tool.clone());
            }
        }
        self.commands.push(command);
    }
}
