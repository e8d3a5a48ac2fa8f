//! The feedback controller.

use core::fmt;

use crate::detect::is_apple_touch_device;
use crate::host::{Host, SwitchHandle, Window};
use crate::{HapticError, HapticOptions};

/// Decides and executes the best-available tactile feedback mechanism.
///
/// The controller brackets its use of the document with `activate` and
/// `deactivate`, mirroring the mount/unmount cycle of the UI component
/// that owns it. While active it keeps exactly one hidden fallback switch
/// mounted in the document body; `trigger` then either vibrates natively
/// or clicks that switch, depending on what the device supports.
///
/// `deactivate` is safe at any point after construction, including before
/// `activate` and after a previous `deactivate`.
pub struct HapticController<H: Host> {
    host: H,
    options: HapticOptions,
    switch: Option<<H::Window as Window>::Switch>,
}

impl<H: Host> HapticController<H> {
    /// Create a controller over `host`. Construction touches nothing; the
    /// document is only mutated by `activate`.
    pub fn new(host: H, options: HapticOptions) -> Self {
        Self {
            host,
            options,
            switch: None,
        }
    }

    /// Mount the hidden fallback switch into the document body.
    ///
    /// Without a graphical window this does nothing and the controller
    /// stays inert. Activating an already active controller releases the
    /// previous switch first, so at most one is ever mounted; a
    /// re-activation always gets a fresh element.
    pub fn activate(&mut self) {
        self.deactivate();
        if let Some(window) = self.host.window() {
            self.switch = Some(window.mount_switch());
            log::trace!("mounted fallback switch");
        }
    }

    /// Remove the fallback switch from the document body.
    ///
    /// The element is detached only if it is still attached there.
    /// Idempotent, and harmless when no switch was ever mounted.
    pub fn deactivate(&mut self) {
        if let Some(switch) = self.switch.take() {
            if switch.is_attached() {
                switch.detach();
                log::trace!("detached fallback switch");
            }
        }
    }

    /// Fire one round of tactile feedback.
    ///
    /// Whether native vibration is usable is recomputed on every call from
    /// the current capability flags: the device must not be an Apple touch
    /// device and the window must expose a vibration capability. On the
    /// native path the configured duration is passed straight through; on
    /// the fallback path the mounted switch is clicked once, and if none
    /// is mounted (before activation, after deactivation, headless) the
    /// call silently does nothing.
    ///
    /// # Errors
    /// Propagates a [`HapticError`] only when the native vibration call
    /// itself fails. Absence of a window, of the capability, or of the
    /// fallback switch is never an error.
    pub fn trigger(&self) -> Result<(), HapticError> {
        let Some(window) = self.host.window() else {
            return Ok(());
        };
        let can_vibrate = !is_apple_touch_device(window) && window.supports_vibration();
        if can_vibrate {
            log::debug!("native vibration for {}ms", self.options.duration_ms);
            window.vibrate(self.options.duration_ms)
        } else {
            if let Some(switch) = &self.switch {
                log::debug!("clicking fallback switch");
                switch.click();
            }
            Ok(())
        }
    }
}

impl<H: Host> fmt::Debug for HapticController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HapticController")
            .field("options", &self.options)
            .field("switch_mounted", &self.switch.is_some())
            .finish_non_exhaustive()
    }
}
