//! Host capability seams.
//!
//! The controller never touches platform globals directly. Everything it
//! needs from the surrounding environment comes in through the traits
//! here, so an embedder wires up its webview bridge once and tests
//! substitute instrumented fakes.

use core::convert::Infallible;

use crate::HapticError;

/// The runtime environment hosting the UI.
///
/// The single method is an existence probe: `None` means there is no
/// graphical window at all (server-side rendering, headless tooling), and
/// every haptic operation degrades to a no-op.
pub trait Host {
    /// The window type this host exposes.
    type Window: Window;

    /// Returns the graphical window, if one exists.
    fn window(&self) -> Option<&Self::Window>;
}

/// A live graphical window and its document.
pub trait Window {
    /// Handle to a mounted fallback switch element.
    type Switch: SwitchHandle;

    /// The identification string the platform reports for itself.
    fn user_agent(&self) -> String;

    /// Number of simultaneous touch points the platform supports.
    fn max_touch_points(&self) -> u32;

    /// Whether a native vibration capability is exposed.
    ///
    /// Presence is runtime-dependent and must be probed, never assumed.
    fn supports_vibration(&self) -> bool;

    /// Drive the vibration motor for `duration_ms` milliseconds.
    ///
    /// # Errors
    /// Returns an error when the capability itself fails mid-invocation,
    /// e.g. revoked by the platform after
    /// [`supports_vibration`](Window::supports_vibration) reported it
    /// present.
    fn vibrate(&self, duration_ms: u32) -> Result<(), HapticError>;

    /// Construct the hidden fallback switch and append it to the document
    /// body.
    ///
    /// Implementations create a label wrapping a checkbox-type input that
    /// carries a `switch` attribute, visually hidden: zero opacity, no
    /// pointer events, absolutely positioned off-screen at `left: -9999px`.
    /// The element must be attached to the live document, not merely
    /// constructed; synthetic clicks on detached elements do not reliably
    /// reach the platform's input feedback pipeline.
    fn mount_switch(&self) -> Self::Switch;
}

/// An opaque handle to one mounted fallback switch.
pub trait SwitchHandle {
    /// Synthetically activate the switch.
    fn click(&self);

    /// Whether the element is still attached to the document body.
    fn is_attached(&self) -> bool;

    /// Remove the element from the document body.
    fn detach(&self);
}

/// A host with no graphical window.
///
/// The server-side analog: the probe always returns `None`, and a
/// controller built over it stays inert without erroring.
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Host for Headless {
    type Window = Infallible;

    fn window(&self) -> Option<&Infallible> {
        None
    }
}

// `Infallible` stands in for the window a headless host can never produce.
impl Window for Infallible {
    type Switch = Infallible;

    fn user_agent(&self) -> String {
        match *self {}
    }

    fn max_touch_points(&self) -> u32 {
        match *self {}
    }

    fn supports_vibration(&self) -> bool {
        match *self {}
    }

    fn vibrate(&self, _duration_ms: u32) -> Result<(), HapticError> {
        match *self {}
    }

    fn mount_switch(&self) -> Infallible {
        match *self {}
    }
}

impl SwitchHandle for Infallible {
    fn click(&self) {
        match *self {}
    }

    fn is_attached(&self) -> bool {
        match *self {}
    }

    fn detach(&self) {
        match *self {}
    }
}
