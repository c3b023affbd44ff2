use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Timing and distance thresholds for pointer gestures.
pub struct InputOptions {
    /// Maximum gap between two clicks of a double click, in milliseconds.
    #[schemars(title = "Double Click Delay", range(min = 100, max = 1000), extend("step" = 10))]
    pub double_click_delay_ms: u64,
    /// Idle time after the last move before `mousestop` fires, in
    /// milliseconds.
    #[schemars(title = "Mouse Stop Delay", range(min = 10, max = 1000), extend("step" = 10))]
    pub mouse_stop_delay_ms: u64,
    /// Maximum gap between two taps of a double tap, in milliseconds.
    #[schemars(title = "Double Touch Delay", range(min = 100, max = 1000), extend("step" = 10))]
    pub double_touch_delay_ms: u64,
    /// Maximum distance between two taps of a double tap, in pixels.
    #[schemars(title = "Double Touch Radius", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub double_touch_radius: f64,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            double_click_delay_ms: 300,
            mouse_stop_delay_ms: 100,
            double_touch_delay_ms: 550,
            double_touch_radius: 10.0,
        }
    }
}

impl InputOptions {
    /// Double click window.
    #[must_use]
    pub const fn double_click_delay(&self) -> Duration {
        Duration::from_millis(self.double_click_delay_ms)
    }

    /// Mouse stop debounce.
    #[must_use]
    pub const fn mouse_stop_delay(&self) -> Duration {
        Duration::from_millis(self.mouse_stop_delay_ms)
    }

    /// Double tap window.
    #[must_use]
    pub const fn double_touch_delay(&self) -> Duration {
        Duration::from_millis(self.double_touch_delay_ms)
    }
}
