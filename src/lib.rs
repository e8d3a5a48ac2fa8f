//! Tactile feedback with a hidden-switch fallback.
//!
//! Interactive UIs want a physical click when the user confirms an action.
//! Most platforms expose a vibration capability for this; Apple's touch
//! devices do not, but their native toggle controls produce a comparable
//! tactile click through the platform's own input feedback pipeline. This
//! crate owns that decision: it classifies the device from its
//! identification string, vibrates natively where it can, and otherwise
//! synthetically clicks a hidden switch element kept mounted in the
//! document body.
//!
//! The surrounding environment is injected through the [`host`] traits, so
//! the same controller runs over a real webview bridge, a server-side
//! context with no window at all, or an instrumented test double.
//!
//! ```
//! use haptic_feedback::host::Headless;
//! use haptic_feedback::{HapticController, HapticOptions};
//!
//! // A headless host has nothing to buzz; every operation is a no-op.
//! let mut haptic = HapticController::new(Headless, HapticOptions::new().with_duration(200));
//! haptic.activate();
//! haptic.trigger()?;
//! haptic.deactivate();
//! # Ok::<(), haptic_feedback::HapticError>(())
//! ```

#![warn(missing_docs)]

mod controller;
mod detect;
pub mod host;

pub use controller::HapticController;
pub use detect::is_apple_touch_device;

use thiserror::Error;

/// Errors that can occur when triggering haptic feedback.
///
/// Absence never errors: a missing window, a missing vibration capability,
/// or a missing fallback switch all degrade to silent no-ops. What does
/// surface is the platform capability misbehaving after it was selected.
#[derive(Debug, Clone, Error)]
pub enum HapticError {
    /// The native vibration capability failed or rejected the request.
    #[error("vibration request failed: {0}")]
    Vibration(String),
    /// An unknown error occurred in the platform backend.
    #[error("unknown error: {0}")]
    Unknown(String),
}

/// Configuration for a [`HapticController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticOptions {
    /// Duration of a native vibration pulse in milliseconds.
    ///
    /// Passed through to the platform unmodified. Ignored on the fallback
    /// path, where the tactile click has a fixed feel.
    pub duration_ms: u32,
}

impl HapticOptions {
    /// Options with the default 100ms pulse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vibration pulse duration.
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

impl Default for HapticOptions {
    fn default() -> Self {
        Self { duration_ms: 100 }
    }
}
