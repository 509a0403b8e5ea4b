use std::fmt;

/// Slack Web API methods this crate binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ApiTest,
    AuthTest,
    ChannelsHistory,
    ChannelsInfo,
    ChannelsList,
    ChannelsMark,
    ChannelsSetPurpose,
    ChannelsSetTopic,
    ChatDelete,
    ChatPostMessage,
    ChatUpdate,
    DndInfo,
    DndTeamInfo,
    EmojiList,
    FilesCommentsAdd,
    FilesCommentsEdit,
    FilesCommentsDelete,
    FilesDelete,
    FilesUpload,
    GroupsClose,
    GroupsHistory,
    GroupsInfo,
    GroupsList,
    GroupsMark,
    GroupsOpen,
    GroupsSetPurpose,
    GroupsSetTopic,
    ImClose,
    ImHistory,
    ImList,
    ImMark,
    ImOpen,
    MpimClose,
    MpimHistory,
    MpimList,
    MpimMark,
    MpimOpen,
    PinsAdd,
    PinsRemove,
    ReactionsAdd,
    ReactionsGet,
    ReactionsList,
    ReactionsRemove,
    RtmStart,
    StarsAdd,
    StarsRemove,
    TeamInfo,
    UsersGetPresence,
    UsersInfo,
    UsersList,
    UsersSetActive,
    UsersSetPresence,
}

impl Endpoint {
    pub const ALL: [Endpoint; 52] = [
        Endpoint::ApiTest,
        Endpoint::AuthTest,
        Endpoint::ChannelsHistory,
        Endpoint::ChannelsInfo,
        Endpoint::ChannelsList,
        Endpoint::ChannelsMark,
        Endpoint::ChannelsSetPurpose,
        Endpoint::ChannelsSetTopic,
        Endpoint::ChatDelete,
        Endpoint::ChatPostMessage,
        Endpoint::ChatUpdate,
        Endpoint::DndInfo,
        Endpoint::DndTeamInfo,
        Endpoint::EmojiList,
        Endpoint::FilesCommentsAdd,
        Endpoint::FilesCommentsEdit,
        Endpoint::FilesCommentsDelete,
        Endpoint::FilesDelete,
        Endpoint::FilesUpload,
        Endpoint::GroupsClose,
        Endpoint::GroupsHistory,
        Endpoint::GroupsInfo,
        Endpoint::GroupsList,
        Endpoint::GroupsMark,
        Endpoint::GroupsOpen,
        Endpoint::GroupsSetPurpose,
        Endpoint::GroupsSetTopic,
        Endpoint::ImClose,
        Endpoint::ImHistory,
        Endpoint::ImList,
        Endpoint::ImMark,
        Endpoint::ImOpen,
        Endpoint::MpimClose,
        Endpoint::MpimHistory,
        Endpoint::MpimList,
        Endpoint::MpimMark,
        Endpoint::MpimOpen,
        Endpoint::PinsAdd,
        Endpoint::PinsRemove,
        Endpoint::ReactionsAdd,
        Endpoint::ReactionsGet,
        Endpoint::ReactionsList,
        Endpoint::ReactionsRemove,
        Endpoint::RtmStart,
        Endpoint::StarsAdd,
        Endpoint::StarsRemove,
        Endpoint::TeamInfo,
        Endpoint::UsersGetPresence,
        Endpoint::UsersInfo,
        Endpoint::UsersList,
        Endpoint::UsersSetActive,
        Endpoint::UsersSetPresence,
    ];

    /// Method name as it appears in the request path.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::ApiTest => "api.test",
            Endpoint::AuthTest => "auth.test",
            Endpoint::ChannelsHistory => "channels.history",
            Endpoint::ChannelsInfo => "channels.info",
            Endpoint::ChannelsList => "channels.list",
            Endpoint::ChannelsMark => "channels.mark",
            Endpoint::ChannelsSetPurpose => "channels.setPurpose",
            Endpoint::ChannelsSetTopic => "channels.setTopic",
            Endpoint::ChatDelete => "chat.delete",
            Endpoint::ChatPostMessage => "chat.postMessage",
            Endpoint::ChatUpdate => "chat.update",
            Endpoint::DndInfo => "dnd.info",
            Endpoint::DndTeamInfo => "dnd.teamInfo",
            Endpoint::EmojiList => "emoji.list",
            Endpoint::FilesCommentsAdd => "files.comments.add",
            Endpoint::FilesCommentsEdit => "files.comments.edit",
            Endpoint::FilesCommentsDelete => "files.comments.delete",
            Endpoint::FilesDelete => "files.delete",
            Endpoint::FilesUpload => "files.upload",
            Endpoint::GroupsClose => "groups.close",
            Endpoint::GroupsHistory => "groups.history",
            Endpoint::GroupsInfo => "groups.info",
            Endpoint::GroupsList => "groups.list",
            Endpoint::GroupsMark => "groups.mark",
            Endpoint::GroupsOpen => "groups.open",
            Endpoint::GroupsSetPurpose => "groups.setPurpose",
            Endpoint::GroupsSetTopic => "groups.setTopic",
            Endpoint::ImClose => "im.close",
            Endpoint::ImHistory => "im.history",
            Endpoint::ImList => "im.list",
            Endpoint::ImMark => "im.mark",
            Endpoint::ImOpen => "im.open",
            Endpoint::MpimClose => "mpim.close",
            Endpoint::MpimHistory => "mpim.history",
            Endpoint::MpimList => "mpim.list",
            Endpoint::MpimMark => "mpim.mark",
            Endpoint::MpimOpen => "mpim.open",
            Endpoint::PinsAdd => "pins.add",
            Endpoint::PinsRemove => "pins.remove",
            Endpoint::ReactionsAdd => "reactions.add",
            Endpoint::ReactionsGet => "reactions.get",
            Endpoint::ReactionsList => "reactions.list",
            Endpoint::ReactionsRemove => "reactions.remove",
            Endpoint::RtmStart => "rtm.start",
            Endpoint::StarsAdd => "stars.add",
            Endpoint::StarsRemove => "stars.remove",
            Endpoint::TeamInfo => "team.info",
            Endpoint::UsersGetPresence => "users.getPresence",
            Endpoint::UsersInfo => "users.info",
            Endpoint::UsersList => "users.list",
            Endpoint::UsersSetActive => "users.setActive",
            Endpoint::UsersSetPresence => "users.setPresence",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
