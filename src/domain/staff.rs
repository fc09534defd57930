use serde::{Deserialize, Serialize};

/// Response of the remote staff login endpoint. Only the bearer token is
/// guaranteed; the staff name is optional.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StaffSession {
    pub token: String,
    #[serde(default)]
    pub name: Option<String>,
}
