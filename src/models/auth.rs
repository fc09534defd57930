//! Session-backed staff identity.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload};
use serde::{Deserialize, Serialize};

/// Staff member authenticated against the remote API. The bearer token is
/// stored in the identity cookie at login and attached to every remote
/// request; it is never decoded locally.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub token: String,
    pub name: String,
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let result = Identity::from_request(req, payload)
            .into_inner()
            .and_then(|identity| {
                identity
                    .id()
                    .map_err(|e| ErrorUnauthorized(e.to_string()))
            })
            .and_then(|id| {
                serde_json::from_str(&id).map_err(|e| ErrorUnauthorized(e.to_string()))
            });
        ready(result)
    }
}
