use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Permission level of the session within the current organization
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}
