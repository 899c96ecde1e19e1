use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Organizational unit request payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrgUnit {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub block_inheritance: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent_org_unit_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent_org_unit_path: Option<String>,
  #[serde(skip)]
  pub force_send_fields: BTreeSet<String>,
}
