//! Tooltip containers: at most one is open at a time.
//!
//! Whether the target is open is read from the markup on every click, so
//! containers closed by other scripts or controls stay in step.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

/// What a click on a tooltip trigger does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipAction {
    /// Close every open container; the target was the open one.
    CloseAll,
    /// Close every open container, then open the target.
    OpenTarget,
}

impl TooltipAction {
    /// Decide from whether the target container is currently open.
    #[must_use]
    pub fn for_click(target_open: bool) -> Self {
        if target_open { Self::CloseAll } else { Self::OpenTarget }
    }

    #[must_use]
    pub fn opens_target(self) -> bool {
        self == Self::OpenTarget
    }
}
