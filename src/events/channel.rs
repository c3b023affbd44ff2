use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

/// Named event channel.
///
/// The string forms (`"lclick"`, `"touchstart"`, ...) are stable and used
/// for configuration, logging and replay scripts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Left button click.
    #[serde(rename = "lclick")]
    LeftClick,
    /// Right button click.
    #[serde(rename = "rclick")]
    RightClick,
    /// Middle button click.
    #[serde(rename = "mclick")]
    MiddleClick,
    /// Left button double click.
    #[serde(rename = "ldblclick")]
    LeftDoubleClick,
    /// Right button double click.
    #[serde(rename = "rdblclick")]
    RightDoubleClick,
    /// Middle button double click.
    #[serde(rename = "mdblclick")]
    MiddleDoubleClick,
    /// Left button released.
    #[serde(rename = "lup")]
    LeftUp,
    /// Right button released.
    #[serde(rename = "rup")]
    RightUp,
    /// Middle button released.
    #[serde(rename = "mup")]
    MiddleUp,
    /// Left button pressed this frame.
    #[serde(rename = "ldown")]
    LeftDown,
    /// Right button pressed this frame.
    #[serde(rename = "rdown")]
    RightDown,
    /// Middle button pressed this frame.
    #[serde(rename = "mdown")]
    MiddleDown,
    /// Left button still held.
    #[serde(rename = "lhold")]
    LeftHold,
    /// Right button still held.
    #[serde(rename = "rhold")]
    RightHold,
    /// Middle button still held.
    #[serde(rename = "mhold")]
    MiddleHold,
    /// Wheel rotated.
    MouseWheel,
    /// Pointer moved.
    MouseMove,
    /// Pointer came to rest after moving.
    MouseStop,
    /// Pointer entered a pickable object.
    MouseEnter,
    /// Pointer left a pickable object.
    MouseLeave,
    /// Touch started.
    TouchStart,
    /// Touch ended.
    TouchEnd,
    /// Touch cancelled by the platform.
    TouchCancel,
    /// Touch moved.
    TouchMove,
    /// Double tap.
    DoubleTouch,
    /// Touch entered a pickable object.
    TouchEnter,
    /// Touch left a pickable object.
    TouchLeave,
    /// Key held during this frame.
    KeyPress,
}

impl Channel {
    /// Every channel, in declaration order.
    pub const ALL: [Self; 28] = [
        Self::LeftClick,
        Self::RightClick,
        Self::MiddleClick,
        Self::LeftDoubleClick,
        Self::RightDoubleClick,
        Self::MiddleDoubleClick,
        Self::LeftUp,
        Self::RightUp,
        Self::MiddleUp,
        Self::LeftDown,
        Self::RightDown,
        Self::MiddleDown,
        Self::LeftHold,
        Self::RightHold,
        Self::MiddleHold,
        Self::MouseWheel,
        Self::MouseMove,
        Self::MouseStop,
        Self::MouseEnter,
        Self::MouseLeave,
        Self::TouchStart,
        Self::TouchEnd,
        Self::TouchCancel,
        Self::TouchMove,
        Self::DoubleTouch,
        Self::TouchEnter,
        Self::TouchLeave,
        Self::KeyPress,
    ];

    /// Stable channel name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftClick => "lclick",
            Self::RightClick => "rclick",
            Self::MiddleClick => "mclick",
            Self::LeftDoubleClick => "ldblclick",
            Self::RightDoubleClick => "rdblclick",
            Self::MiddleDoubleClick => "mdblclick",
            Self::LeftUp => "lup",
            Self::RightUp => "rup",
            Self::MiddleUp => "mup",
            Self::LeftDown => "ldown",
            Self::RightDown => "rdown",
            Self::MiddleDown => "mdown",
            Self::LeftHold => "lhold",
            Self::RightHold => "rhold",
            Self::MiddleHold => "mhold",
            Self::MouseWheel => "mousewheel",
            Self::MouseMove => "mousemove",
            Self::MouseStop => "mousestop",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
            Self::TouchMove => "touchmove",
            Self::DoubleTouch => "doubletouch",
            Self::TouchEnter => "touchenter",
            Self::TouchLeave => "touchleave",
            Self::KeyPress => "keypress",
        }
    }

    /// Click channel for a button.
    #[must_use]
    pub const fn click(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LeftClick,
            MouseButton::Right => Self::RightClick,
            MouseButton::Middle => Self::MiddleClick,
        }
    }

    /// Double-click channel for a button.
    #[must_use]
    pub const fn double_click(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LeftDoubleClick,
            MouseButton::Right => Self::RightDoubleClick,
            MouseButton::Middle => Self::MiddleDoubleClick,
        }
    }

    /// Press channel for a button.
    #[must_use]
    pub const fn down(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LeftDown,
            MouseButton::Right => Self::RightDown,
            MouseButton::Middle => Self::MiddleDown,
        }
    }

    /// Hold channel for a button.
    #[must_use]
    pub const fn hold(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LeftHold,
            MouseButton::Right => Self::RightHold,
            MouseButton::Middle => Self::MiddleHold,
        }
    }

    /// Release channel for a button.
    #[must_use]
    pub const fn up(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LeftUp,
            MouseButton::Right => Self::RightUp,
            MouseButton::Middle => Self::MiddleUp,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown channel name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChannel(pub String);

impl fmt::Display for UnknownChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event channel '{}'", self.0)
    }
}

impl std::error::Error for UnknownChannel {}

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.name() == s)
            .ok_or_else(|| UnknownChannel(s.to_owned()))
    }
}
