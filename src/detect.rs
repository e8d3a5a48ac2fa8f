//! Device-family classification.

use crate::host::Window;

/// Whether the window belongs to an Apple touch device (iPhone, iPod or
/// iPad), the family whose browsers expose no vibration capability.
///
/// iPads running desktop-class browsers identify themselves as
/// `Macintosh`; the multi-touch probe tells those apart from actual
/// desktops. The match is a best-effort scan of the identification string
/// and will need revisiting as platforms converge.
pub fn is_apple_touch_device(window: &impl Window) -> bool {
    let ua = window.user_agent();
    let is_phone = ua.contains("iPhone") || ua.contains("iPod");
    let is_tablet =
        ua.contains("iPad") || (ua.contains("Macintosh") && window.max_touch_points() > 1);
    is_phone || is_tablet
}
