//! Static recovery templates per failure category

use crate::types::FailureCategory;

const PERMISSION: &[&str] = &[
    "Open System Settings > Privacy & Security > Accessibility and enable the automation host",
    "Restart the automation host after granting permission",
    "Check that the target application is not running with elevated privileges",
];

const ELEMENT_DETECTION: &[&str] = &[
    "Bring the target window to the front before searching",
    "Scroll or expand the containing view so the element is rendered",
    "Search by role or partial text instead of the exact label",
    "Wait for the interface to finish loading and retry",
];

const PERFORMANCE: &[&str] = &[
    "Restrict the search to the focused window",
    "Lower the search depth of the element tree",
    "Close unused windows and tabs in the target application",
    "Increase the search timeout",
];

const SYSTEM: &[&str] = &[
    "Verify the automation framework is installed and importable",
    "Restart the target application",
    "Check system logs for accessibility API errors",
    "Update the operating system accessibility components",
];

/// Recovery steps for a category; unknown failures have none
pub fn recovery_template(category: FailureCategory) -> &'static [&'static str] {
    match category {
        FailureCategory::Permission => PERMISSION,
        FailureCategory::ElementDetection => ELEMENT_DETECTION,
        FailureCategory::Performance => PERFORMANCE,
        FailureCategory::System => SYSTEM,
        FailureCategory::Unknown => &[],
    }
}

/// Checklist emitted when nothing more specific applies
pub const GENERIC_CHECKLIST: &[&str] = &[
    "Verify the target element is visible on screen",
    "Make sure the target application window has focus",
    "Try a partial or simplified version of the target text",
    "Confirm accessibility permissions are granted",
];
