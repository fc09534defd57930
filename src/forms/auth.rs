use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Staff login credentials forwarded to the remote API.
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
