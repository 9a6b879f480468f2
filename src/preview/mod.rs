//! Live fill preview driven by editor state changes.
//!
//! The controller keeps at most one uncommitted preview in the host. Every
//! recomputation first reverts the previous preview, then adds a fresh one,
//! so previews never accumulate and never survive next to their finalized copy.

mod config;
mod host;

pub use config::{FillParams, PreviewConfig, ANGLE_RANGE, MIN_SPACING, SPACING_RANGE};
pub use host::{HostCommand, SelectionSnapshot, ToolId, TrackHost};

use tracing::{debug, info, warn};

use crate::error::{PreviewError, Result};
use crate::geometry::{LineKind, LineStyle};
use crate::operations::{ResolveLines, ScanlineFill};

/// Lifecycle state of a [`FillPreview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewState {
    /// The fill tool is off; upstream changes are ignored.
    #[default]
    Inactive,
    /// Active with no uncommitted preview in the host.
    Clean,
    /// Active with an uncommitted preview in the host.
    Dirty,
}

/// Result of the most recent recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputeOutcome {
    /// A preview of `segments` strokes was added.
    Previewed { segments: usize },
    /// Nothing selected, or every selected line has been deleted.
    EmptySelection,
    /// The selection was not made in multi-select mode.
    MultiSelectRequired,
    /// Lines were resolved but the fill produced no strokes.
    NoFill,
}

/// Controller that keeps a fill preview in sync with the editor.
#[derive(Debug, Clone)]
pub struct FillPreview {
    config: PreviewConfig,
    params: FillParams,
    state: PreviewState,
    last_outcome: Option<RecomputeOutcome>,
}

impl Default for FillPreview {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}

impl FillPreview {
    /// Creates an inactive controller.
    ///
    /// The initial spacing is floored to `min_spacing` like any later edit.
    #[must_use]
    pub fn new(config: PreviewConfig) -> Self {
        let mut params = config.initial;
        if let Err(err) = params.set_spacing(params.spacing, config.min_spacing) {
            // Rejected again by the engine on activation.
            warn!(%err, "initial spacing left unfloored");
        }
        Self {
            params,
            config,
            state: PreviewState::Inactive,
            last_outcome: None,
        }
    }

    /// Returns the controller configuration.
    #[must_use]
    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Returns the current fill parameters.
    #[must_use]
    pub fn params(&self) -> FillParams {
        self.params
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// Returns `true` unless the controller is [`PreviewState::Inactive`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state != PreviewState::Inactive
    }

    /// Returns the outcome of the last recomputation, or `None` if the fill
    /// has not run since the controller was created.
    #[must_use]
    pub fn last_outcome(&self) -> Option<RecomputeOutcome> {
        self.last_outcome
    }

    /// Turns the fill tool on, switches the host to the selection tool and
    /// computes a first preview.
    ///
    /// # Errors
    ///
    /// Returns an error if the current parameters are rejected by the fill engine.
    pub fn activate<H: TrackHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        if self.state == PreviewState::Inactive {
            host.dispatch(HostCommand::SetActiveTool(self.config.select_tool.clone()));
            self.state = PreviewState::Clean;
            debug!("fill preview activated");
        }
        self.on_upstream_change(host)
    }

    /// Turns the fill tool off, reverting any uncommitted preview.
    pub fn deactivate<H: TrackHost + ?Sized>(&mut self, host: &mut H) {
        if self.state == PreviewState::Dirty {
            host.dispatch(HostCommand::RevertUncommitted);
        }
        self.state = PreviewState::Inactive;
        debug!("fill preview deactivated");
    }

    /// Activates when inactive, deactivates otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if activation fails.
    pub fn toggle<H: TrackHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        if self.is_active() {
            self.deactivate(host);
            Ok(())
        } else {
            self.activate(host)
        }
    }

    /// Recomputes the preview from the host's current selection.
    ///
    /// Does nothing while inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the current parameters are rejected by the fill engine.
    pub fn on_upstream_change<H: TrackHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        if self.state == PreviewState::Inactive {
            return Ok(());
        }
        if self.state == PreviewState::Dirty {
            host.dispatch(HostCommand::RevertUncommitted);
            self.state = PreviewState::Clean;
        }

        let outcome = self.regenerate(host)?;
        debug!(?outcome, "fill preview recomputed");
        self.last_outcome = Some(outcome);
        Ok(())
    }

    fn regenerate<H: TrackHost + ?Sized>(&mut self, host: &mut H) -> Result<RecomputeOutcome> {
        let selection = host.selection();
        if selection.points.is_empty() {
            return Ok(RecomputeOutcome::EmptySelection);
        }
        if self.config.require_multi_select && !selection.multi {
            return Ok(RecomputeOutcome::MultiSelectRequired);
        }

        let boundary = ResolveLines::new(selection.points.iter().copied()).execute(&*host);
        if boundary.is_empty() {
            return Ok(RecomputeOutcome::EmptySelection);
        }

        let style = LineStyle::clamped(self.params.line_kind, host.stroke_width());
        let fill = ScanlineFill::new(self.params.angle_degrees, self.params.spacing)?.with_style(style);
        let segments = fill.collect_into_vec(&boundary);
        if segments.is_empty() {
            return Ok(RecomputeOutcome::NoFill);
        }

        let count = segments.len();
        host.dispatch(HostCommand::AddSegments {
            segments,
            tag: self.config.tag.clone(),
        });
        self.state = PreviewState::Dirty;
        Ok(RecomputeOutcome::Previewed { segments: count })
    }

    /// Makes the current preview permanent.
    ///
    /// Dispatches `FinalizeCommitted` followed by `RevertUncommitted`, which
    /// clears the uncommitted bookkeeping without touching finalized lines.
    ///
    /// # Errors
    ///
    /// Returns `PreviewError::Inactive` when the tool is off and
    /// `PreviewError::NothingToCommit` when no preview exists.
    pub fn commit<H: TrackHost + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        match self.state {
            PreviewState::Inactive => Err(PreviewError::Inactive.into()),
            PreviewState::Clean => Err(PreviewError::NothingToCommit.into()),
            PreviewState::Dirty => {
                host.dispatch(HostCommand::FinalizeCommitted);
                host.dispatch(HostCommand::RevertUncommitted);
                self.state = PreviewState::Clean;
                info!("fill preview committed");
                Ok(())
            }
        }
    }

    /// Sets the fill angle and recomputes.
    ///
    /// # Errors
    ///
    /// Returns an error if the angle is not finite.
    pub fn set_angle<H: TrackHost + ?Sized>(&mut self, host: &mut H, angle_degrees: f64) -> Result<()> {
        self.params.set_angle(angle_degrees)?;
        self.on_upstream_change(host)
    }

    /// Sets the spacing (floored to the configured minimum) and recomputes.
    ///
    /// # Errors
    ///
    /// Returns an error if the spacing is not finite or the floored value is
    /// rejected by the fill engine.
    pub fn set_spacing<H: TrackHost + ?Sized>(&mut self, host: &mut H, spacing: f64) -> Result<()> {
        self.params.set_spacing(spacing, self.config.min_spacing)?;
        self.on_upstream_change(host)
    }

    /// Sets the kind of generated lines and recomputes.
    ///
    /// # Errors
    ///
    /// Returns an error if recomputation fails.
    pub fn set_line_kind<H: TrackHost + ?Sized>(&mut self, host: &mut H, line_kind: LineKind) -> Result<()> {
        self.params.line_kind = line_kind;
        self.on_upstream_change(host)
    }

    /// Sets the kind of generated lines from the host's numeric index.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::UnknownLineKind` for an index outside `0..=2`.
    pub fn set_line_kind_index<H: TrackHost + ?Sized>(&mut self, host: &mut H, index: u8) -> Result<()> {
        let line_kind = LineKind::try_from(index)?;
        self.set_line_kind(host, line_kind)
    }
}
