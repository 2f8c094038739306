use crate::coords::DocSize;

/// Lifecycle of a session.
///
/// Visible implies enabled: there is no "stopped but shown" state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SessionState {
    /// Not tracking, overlay hidden.
    #[default]
    Stopped,
    /// Tracking movement, overlay hidden.
    Tracking,
    /// Tracking movement, overlay shown.
    Visible,
}

impl SessionState {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self != SessionState::Stopped
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self == SessionState::Visible
    }
}

/// Lifecycle notifications, consumed by whatever control toggles the overlay.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionSignal {
    Started,
    Stopped,
    Shown,
    Hidden,
}

/// Host environment collaborator.
///
/// Supplies the full-document size on demand and a one-shot display-refresh
/// request. A requested frame must eventually reach
/// [`HeatmapSession::on_frame`](super::HeatmapSession::on_frame).
pub trait HeatmapHost {
    fn document_size(&self) -> DocSize;
    fn request_frame(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_implies_enabled() {
        for s in [SessionState::Stopped, SessionState::Tracking, SessionState::Visible] {
            assert!(!s.is_visible() || s.is_enabled());
        }
        assert!(!SessionState::default().is_enabled());
    }
}
