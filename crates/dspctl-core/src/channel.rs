//! Channel-role and active-channel tables.
//!
//! Both tables are fixed for one to eight channels. Any other count yields an
//! empty role list and a zero mask; encoders still size their channel map for
//! the declared count and leave it zero-filled.

use serde::{Deserialize, Serialize};

/// Largest channel count with a defined role assignment.
pub const MAX_MAPPED_CHANNELS: u16 = 8;

/// Positional role of one PCM channel, carrying its firmware channel code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelRole {
    /// Front left.
    Left,
    /// Front right.
    Right,
    /// Front center.
    Center,
    /// Side left.
    LeftSurround,
    /// Side right.
    RightSurround,
    /// Low-frequency effects.
    LowFrequency,
    /// Center surround.
    CenterSurround,
    /// Back left.
    LeftBack,
    /// Back right.
    RightBack,
}

impl ChannelRole {
    /// Firmware channel code.
    pub const fn code(self) -> u8 {
        match self {
            ChannelRole::Left => 1,
            ChannelRole::Right => 2,
            ChannelRole::Center => 3,
            ChannelRole::LeftSurround => 4,
            ChannelRole::RightSurround => 5,
            ChannelRole::LowFrequency => 6,
            ChannelRole::CenterSurround => 7,
            ChannelRole::LeftBack => 8,
            ChannelRole::RightBack => 9,
        }
    }

    /// Short label as printed in diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            ChannelRole::Left => "L",
            ChannelRole::Right => "R",
            ChannelRole::Center => "C",
            ChannelRole::LeftSurround => "LS",
            ChannelRole::RightSurround => "RS",
            ChannelRole::LowFrequency => "LFE",
            ChannelRole::CenterSurround => "CS",
            ChannelRole::LeftBack => "LB",
            ChannelRole::RightBack => "RB",
        }
    }
}

/// Role assignment for `count` channels.
///
/// Returns an empty list for counts outside 1..=8.
pub fn channel_roles(count: u16) -> Vec<ChannelRole> {
    use ChannelRole::*;
    let roles: &[ChannelRole] = match count {
        1 => &[Center],
        2 => &[Left, Right],
        3 => &[Left, Right, Center],
        4 => &[Left, Right, LeftBack, RightBack],
        5 => &[Left, Right, Center, LeftBack, RightBack],
        6 => &[Left, Right, Center, LowFrequency, LeftBack, RightBack],
        7 => &[
            Left,
            Right,
            Center,
            LeftSurround,
            RightSurround,
            LeftBack,
            RightBack,
        ],
        8 => &[
            Left,
            Right,
            Center,
            LeftSurround,
            RightSurround,
            CenterSurround,
            LeftBack,
            RightBack,
        ],
        _ => &[],
    };
    roles.to_vec()
}

/// Bitmask with the low `count` bits set, for counts 1..=8; zero otherwise.
pub const fn active_channel_mask(count: u16) -> u32 {
    if count >= 1 && count <= MAX_MAPPED_CHANNELS {
        (1u32 << count) - 1
    } else {
        0
    }
}
