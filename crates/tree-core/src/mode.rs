use crate::gesture::HandSample;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TreeMode {
    #[default]
    Merged,
    Scattered,
}

impl TreeMode {
    #[inline]
    pub fn is_merged(self) -> bool {
        matches!(self, TreeMode::Merged)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TreeMode::Merged => "merged",
            TreeMode::Scattered => "scattered",
        }
    }
}

/// Edge-triggered mode state driven by classified hand samples.
///
/// A fist merges, an open hand scatters. Missing or indeterminate samples
/// leave the mode alone, and repeating the gesture that produced the current
/// mode is a no-op.
#[derive(Clone, Debug, Default)]
pub struct ModeController {
    mode: TreeMode,
    transitions: u64,
}

impl ModeController {
    pub fn new(initial: TreeMode) -> Self {
        Self {
            mode: initial,
            transitions: 0,
        }
    }

    #[inline]
    pub fn mode(&self) -> TreeMode {
        self.mode
    }

    /// Number of mode changes since construction.
    #[inline]
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Apply one sample; returns the new mode if a transition happened.
    pub fn observe(&mut self, sample: Option<&HandSample>) -> Option<TreeMode> {
        let sample = sample?;
        let next = if sample.is_fist && self.mode != TreeMode::Merged {
            TreeMode::Merged
        } else if sample.is_open && self.mode != TreeMode::Scattered {
            TreeMode::Scattered
        } else {
            return None;
        };
        log::info!(
            "[mode] {} -> {} (pointer {:.2},{:.2})",
            self.mode.as_str(),
            next.as_str(),
            sample.x,
            sample.y
        );
        self.mode = next;
        self.transitions += 1;
        Some(next)
    }
}
