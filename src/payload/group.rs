use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Group request payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

/// Group member request payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
  #[serde(
    rename = "delivery_settings",
    skip_serializing_if = "Option::is_none"
  )]
  pub delivery_settings: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

/// Email alias request payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Alias {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub alias: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}

/// Group settings request payload. The remote API carries boolean settings
/// as the strings `true` and `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupSettings {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allow_external_members: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allow_web_posting: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archive_only: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_footer_text: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_reply_to: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub custom_roles_enabled_for_settings_to_be_merged: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_message_deny_notification_text: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_sender: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub enable_collaborative_inbox: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub favorite_replies_on_top: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub include_custom_footer: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub include_in_global_address_list: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_archived: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub members_can_post_as_the_group: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_moderation_level: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub primary_language: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub send_message_deny_notification: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub spam_moderation_level: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub who_can_assist_content: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub who_can_contact_owner: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub who_can_discover_group: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub who_can_join: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub who_can_leave_group: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub who_can_moderate_content: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub who_can_moderate_members: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub who_can_post_message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub who_can_view_group: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub who_can_view_membership: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}
