use crate::imports::*;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheck {
    pub success: bool,
    pub is_admin: bool,
}
