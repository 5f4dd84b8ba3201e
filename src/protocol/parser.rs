//! Request body decoding

use log::warn;

use crate::auth::User;

/// Decode a `{"name", "password"}` body.
///
/// A body that is not valid JSON is logged and replaced with an empty record;
/// the workflows then reject it like any other empty username.
pub fn decode_user(route: &str, body: &[u8]) -> User {
    match serde_json::from_slice(body) {
        Ok(user) => user,
        Err(e) => {
            warn!("Malformed {} body: {}", route, e);
            User::default()
        }
    }
}
