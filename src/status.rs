use crate::constants::{STATUS_LOADING_TEXT, STATUS_WAITING_TEXT};

/// Page-level capture state. Both flags flip together when the camera
/// reports ready; hand samples are ignored until then.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureStatus {
    pub loading: bool,
    pub camera_active: bool,
}

impl Default for CaptureStatus {
    fn default() -> Self {
        Self {
            loading: true,
            camera_active: false,
        }
    }
}

impl CaptureStatus {
    /// Returns true when this call changed the state.
    pub fn camera_ready(&mut self) -> bool {
        let changed = self.loading || !self.camera_active;
        self.loading = false;
        self.camera_active = true;
        changed
    }

    #[inline]
    pub fn accepts_hands(&self) -> bool {
        self.camera_active
    }

    #[inline]
    pub fn show_loading_overlay(&self) -> bool {
        self.loading
    }

    /// Text over the camera preview, `None` once the camera is live.
    pub fn label(&self) -> Option<&'static str> {
        match (self.camera_active, self.loading) {
            (true, _) => None,
            (false, true) => Some(STATUS_LOADING_TEXT),
            (false, false) => Some(STATUS_WAITING_TEXT),
        }
    }
}
