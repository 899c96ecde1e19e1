use super::{AttributeMap, EnumMap, FieldKind};
use once_cell::sync::Lazy;

pub static ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  AttributeMap::new(&[
    ("allowexternalmembers", "allowExternalMembers"),
    ("allowwebposting", "allowWebPosting"),
    ("archiveonly", "archiveOnly"),
    ("customfootertext", "customFooterText"),
    ("customreplyto", "customReplyTo"),
    (
      "customrolesenabledforsettingstobemerged",
      "customRolesEnabledForSettingsToBeMerged",
    ),
    ("defaultmessagedenynotificationtext", "defaultMessageDenyNotificationText"),
    ("defaultsender", "defaultSender"),
    ("description", "description"),
    ("email", "email"),
    ("enablecollaborativeinbox", "enableCollaborativeInbox"),
    ("favoriterepliesontop", "favoriteRepliesOnTop"),
    ("includecustomfooter", "includeCustomFooter"),
    ("includeinglobaladdresslist", "includeInGlobalAddressList"),
    ("isarchived", "isArchived"),
    ("kind", "kind"),
    ("memberscanpostasthegroup", "membersCanPostAsTheGroup"),
    ("messagemoderationlevel", "messageModerationLevel"),
    ("name", "name"),
    ("primarylanguage", "primaryLanguage"),
    ("replyto", "replyTo"),
    ("sendmessagedenynotification", "sendMessageDenyNotification"),
    ("spammoderationlevel", "spamModerationLevel"),
    ("whocanassistcontent", "whoCanAssistContent"),
    ("whocancontactowner", "whoCanContactOwner"),
    ("whocandiscovergroup", "whoCanDiscoverGroup"),
    ("whocanjoin", "whoCanJoin"),
    ("whocanleavegroup", "whoCanLeaveGroup"),
    ("whocanmoderatecontent", "whoCanModerateContent"),
    ("whocanmoderatemembers", "whoCanModerateMembers"),
    ("whocanpostmessage", "whoCanPostMessage"),
    ("whocanviewgroup", "whoCanViewGroup"),
    ("whocanviewmembership", "whoCanViewMembership"),
  ])
});

pub static BATCH_ATTRIBUTES: Lazy<AttributeMap> = Lazy::new(|| {
  let mut pairs: Vec<(&'static str, &'static str)> = ATTRIBUTES
    .iter()
    .filter(|(_, canonical)| SETTINGS.iter().any(|(name, _)| name == canonical))
    .collect();
  pairs.push(("groupkey", super::group::KEY));

  AttributeMap::new(&pairs)
});

/// Writable settings and how their values are interpreted
pub static SETTINGS: &[(&str, FieldKind)] = &[
  ("allowExternalMembers", FieldKind::BooleanText),
  ("allowWebPosting", FieldKind::BooleanText),
  ("archiveOnly", FieldKind::BooleanText),
  ("customFooterText", FieldKind::Text),
  ("customReplyTo", FieldKind::Text),
  ("customRolesEnabledForSettingsToBeMerged", FieldKind::BooleanText),
  ("defaultMessageDenyNotificationText", FieldKind::Text),
  ("defaultSender", FieldKind::Enum(&DEFAULT_SENDER)),
  ("description", FieldKind::Text),
  ("enableCollaborativeInbox", FieldKind::BooleanText),
  ("favoriteRepliesOnTop", FieldKind::BooleanText),
  ("includeCustomFooter", FieldKind::BooleanText),
  ("includeInGlobalAddressList", FieldKind::BooleanText),
  ("isArchived", FieldKind::BooleanText),
  ("membersCanPostAsTheGroup", FieldKind::BooleanText),
  ("messageModerationLevel", FieldKind::Enum(&MESSAGE_MODERATION_LEVEL)),
  ("name", FieldKind::Text),
  ("primaryLanguage", FieldKind::Enum(&LANGUAGES)),
  ("replyTo", FieldKind::Enum(&REPLY_TO)),
  ("sendMessageDenyNotification", FieldKind::BooleanText),
  ("spamModerationLevel", FieldKind::Enum(&SPAM_MODERATION_LEVEL)),
  ("whoCanAssistContent", FieldKind::Enum(&WHO_CAN_ASSIST_CONTENT)),
  ("whoCanContactOwner", FieldKind::Enum(&WHO_CAN_CONTACT_OWNER)),
  ("whoCanDiscoverGroup", FieldKind::Enum(&WHO_CAN_DISCOVER_GROUP)),
  ("whoCanJoin", FieldKind::Enum(&WHO_CAN_JOIN)),
  ("whoCanLeaveGroup", FieldKind::Enum(&WHO_CAN_LEAVE_GROUP)),
  ("whoCanModerateContent", FieldKind::Enum(&WHO_CAN_MODERATE)),
  ("whoCanModerateMembers", FieldKind::Enum(&WHO_CAN_MODERATE)),
  ("whoCanPostMessage", FieldKind::Enum(&WHO_CAN_POST_MESSAGE)),
  ("whoCanViewGroup", FieldKind::Enum(&WHO_CAN_VIEW_GROUP)),
  ("whoCanViewMembership", FieldKind::Enum(&WHO_CAN_VIEW_MEMBERSHIP)),
];

/// Text settings an empty cell clears
pub static CLEARABLE: &[&str] = &[
  "customFooterText",
  "customReplyTo",
  "defaultMessageDenyNotificationText",
  "description",
];

pub static DEFAULT_SENDER: EnumMap = EnumMap::new("default sender", &["DEFAULT_SELF", "GROUP"]);

pub static MESSAGE_MODERATION_LEVEL: EnumMap = EnumMap::new(
  "message moderation level",
  &[
    "MODERATE_ALL_MESSAGES",
    "MODERATE_NEW_MEMBERS",
    "MODERATE_NONE",
    "MODERATE_NON_MEMBERS",
  ],
);

pub static REPLY_TO: EnumMap = EnumMap::new(
  "reply to",
  &[
    "REPLY_TO_CUSTOM",
    "REPLY_TO_IGNORE",
    "REPLY_TO_LIST",
    "REPLY_TO_MANAGERS",
    "REPLY_TO_OWNER",
    "REPLY_TO_SENDER",
  ],
);

pub static SPAM_MODERATION_LEVEL: EnumMap = EnumMap::new(
  "spam moderation level",
  &["ALLOW", "MODERATE", "REJECT", "SILENTLY_MODERATE"],
);

pub static WHO_CAN_ASSIST_CONTENT: EnumMap = EnumMap::new(
  "who can assist content",
  &[
    "ALL_MEMBERS",
    "MANAGERS_ONLY",
    "NONE",
    "OWNERS_AND_MANAGERS",
    "OWNERS_ONLY",
  ],
);

pub static WHO_CAN_CONTACT_OWNER: EnumMap = EnumMap::new(
  "who can contact owner",
  &[
    "ALL_IN_DOMAIN_CAN_CONTACT",
    "ALL_MANAGERS_CAN_CONTACT",
    "ALL_MEMBERS_CAN_CONTACT",
    "ANYONE_CAN_CONTACT",
  ],
);

pub static WHO_CAN_DISCOVER_GROUP: EnumMap = EnumMap::new(
  "who can discover group",
  &[
    "ALL_IN_DOMAIN_CAN_DISCOVER",
    "ALL_MEMBERS_CAN_DISCOVER",
    "ANYONE_CAN_DISCOVER",
  ],
);

pub static WHO_CAN_JOIN: EnumMap = EnumMap::new(
  "who can join",
  &[
    "ALL_IN_DOMAIN_CAN_JOIN",
    "ANYONE_CAN_JOIN",
    "CAN_REQUEST_TO_JOIN",
    "INVITED_CAN_JOIN",
  ],
);

pub static WHO_CAN_LEAVE_GROUP: EnumMap = EnumMap::new(
  "who can leave group",
  &[
    "ALL_MANAGERS_CAN_LEAVE",
    "ALL_MEMBERS_CAN_LEAVE",
    "NONE_CAN_LEAVE",
  ],
);

pub static WHO_CAN_MODERATE: EnumMap = EnumMap::new(
  "who can moderate",
  &["ALL_MEMBERS", "NONE", "OWNERS_AND_MANAGERS", "OWNERS_ONLY"],
);

pub static WHO_CAN_POST_MESSAGE: EnumMap = EnumMap::new(
  "who can post message",
  &[
    "ALL_IN_DOMAIN_CAN_POST",
    "ALL_MANAGERS_CAN_POST",
    "ALL_MEMBERS_CAN_POST",
    "ALL_OWNERS_CAN_POST",
    "ANYONE_CAN_POST",
    "NONE_CAN_POST",
  ],
);

pub static WHO_CAN_VIEW_GROUP: EnumMap = EnumMap::new(
  "who can view group",
  &[
    "ALL_IN_DOMAIN_CAN_VIEW",
    "ALL_MANAGERS_CAN_VIEW",
    "ALL_MEMBERS_CAN_VIEW",
    "ALL_OWNERS_CAN_VIEW",
    "ANYONE_CAN_VIEW",
  ],
);

pub static WHO_CAN_VIEW_MEMBERSHIP: EnumMap = EnumMap::new(
  "who can view membership",
  &[
    "ALL_IN_DOMAIN_CAN_VIEW",
    "ALL_MANAGERS_CAN_VIEW",
    "ALL_MEMBERS_CAN_VIEW",
    "ALL_OWNERS_CAN_VIEW",
  ],
);

pub static LANGUAGES: EnumMap = EnumMap::new(
  "language code",
  &[
    "af", "ar", "az", "be", "bg", "bn", "bs", "ca", "chr", "cs", "cy", "da", "de", "el", "en",
    "en-GB", "en-US", "es", "es-419", "et", "eu", "fa", "fi", "fil", "fr", "fr-CA", "ga", "gl",
    "gu", "hi", "hr", "hu", "hy", "id", "is", "it", "iw", "ja", "ka", "km", "kn", "ko", "lo",
    "lt", "lv", "ml", "mn", "mr", "ms", "my", "ne", "nl", "no", "or", "pl", "pt-BR", "pt-PT",
    "ro", "ru", "si", "sk", "sl", "sr", "sv", "sw", "ta", "te", "th", "tr", "uk", "ur", "vi",
    "zh-CN", "zh-HK", "zh-TW", "zu",
  ],
);
