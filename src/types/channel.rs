//! Channel kinds, as used by channel option filters.

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Kind of a channel, transmitted as an integer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum ChannelType {
    GuildText = 0,
    Dm = 1,
    GuildVoice = 2,
    GroupDm = 3,
    GuildCategory = 4,
    GuildAnnouncement = 5,
    AnnouncementThread = 10,
    PublicThread = 11,
    PrivateThread = 12,
    GuildStageVoice = 13,
}

impl ChannelType {
    /// Human-readable list of the kinds accepted by [`is_selectable`].
    ///
    /// [`is_selectable`]: Self::is_selectable
    pub const SELECTABLE_NAMES: &'static str = "GuildText, GuildVoice, GuildCategory, \
        GuildAnnouncement, AnnouncementThread, PublicThread, PrivateThread, GuildStageVoice";

    /// Whether a channel option may be restricted to this kind.
    ///
    /// Direct messages and group direct messages never are.
    pub const fn is_selectable(self) -> bool {
        !matches!(self, Self::Dm | Self::GroupDm)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::GuildText => "GuildText",
            Self::Dm => "Dm",
            Self::GuildVoice => "GuildVoice",
            Self::GroupDm => "GroupDm",
            Self::GuildCategory => "GuildCategory",
            Self::GuildAnnouncement => "GuildAnnouncement",
            Self::AnnouncementThread => "AnnouncementThread",
            Self::PublicThread => "PublicThread",
            Self::PrivateThread => "PrivateThread",
            Self::GuildStageVoice => "GuildStageVoice",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChannelType;
    use serde_test::Token;

    #[test]
    fn serializes_as_integer() {
        serde_test::assert_tokens(&ChannelType::GuildText, &[Token::U8(0)]);
        serde_test::assert_tokens(&ChannelType::PublicThread, &[Token::U8(11)]);
        serde_test::assert_tokens(&ChannelType::GuildStageVoice, &[Token::U8(13)]);
    }

    #[test]
    fn direct_message_kinds_are_not_selectable() {
        assert!(!ChannelType::Dm.is_selectable());
        assert!(!ChannelType::GroupDm.is_selectable());
        assert!(ChannelType::GuildCategory.is_selectable());
        assert!(ChannelType::AnnouncementThread.is_selectable());
    }
}
