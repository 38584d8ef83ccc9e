use crate::config::Config;
use crate::types::UserIdentity;

/// Reads the identity the host page's authentication layer left in
/// `localStorage`. Returns `None` when storage is unavailable or empty.
pub fn load_identity(config: &Config) -> Option<UserIdentity> {
    let storage = web_sys::window()?.local_storage().ok()??;
    match storage.get_item(&config.session_storage_key) {
        Ok(Some(raw)) => {
            let identity = UserIdentity::parse(&raw);
            if identity.is_none() {
                log::warn!(
                    "ignoring malformed identity under {}",
                    config.session_storage_key
                );
            }
            identity
        }
        Ok(None) => None,
        Err(err) => {
            log::error!("failed to read session storage: {:?}", err);
            None
        }
    }
}
