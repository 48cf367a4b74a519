use crate::imports::*;

/// Upload payload; `data` is the base64-encoded file body, as the admin
/// page submits it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentUpload {
    pub file_name: String,
    #[serde(default)]
    pub mime_type: String,
    pub data: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentReceipt {
    pub success: bool,
    pub file_id: String,
}
