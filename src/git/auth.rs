//! Token authentication for remote operations
//!
//! The token travels as the password of HTTP Basic credentials. The username
//! is a placeholder; hosted providers only require it to be non-empty.

use super::Session;
use git2::{Cred, CredentialType, RemoteCallbacks};

/// Callbacks answering credential requests for `session`
///
/// libgit2 asks again after a rejected credential, so a second request for
/// the same operation is turned into an error instead of an endless retry.
pub(crate) fn remote_callbacks(session: &Session) -> RemoteCallbacks<'_> {
    let mut callbacks = RemoteCallbacks::new();
    let mut attempts = 0u32;

    callbacks.credentials(move |_url, _username_from_url, allowed| {
        attempts += 1;
        if attempts > 1 {
            return Err(git2::Error::from_str(
                "authentication failed: the remote rejected the access token",
            ));
        }

        if allowed.contains(CredentialType::USER_PASS_PLAINTEXT) {
            Cred::userpass_plaintext(&session.username, session.credential.expose())
        } else {
            Err(git2::Error::from_str(
                "remote does not accept username/password authentication",
            ))
        }
    });

    callbacks
}

/// Credential callbacks plus console progress for fetches
pub(crate) fn fetch_callbacks(session: &Session) -> RemoteCallbacks<'_> {
    let mut callbacks = remote_callbacks(session);
    let logger = session.logger();

    callbacks.sideband_progress(move |data| {
        let text = String::from_utf8_lossy(data);
        let text = text.trim_end_matches(['\r', '\n']);
        if !text.is_empty() {
            logger.info(&format!("remote: {}", text));
        }
        true
    });

    let mut finished = false;
    callbacks.transfer_progress(move |stats| {
        let total = stats.total_objects();
        if total > 0 && !finished {
            let received = stats.received_objects();
            finished = received == total;
            logger.progress(
                &format!(
                    "Receiving objects: {:3}% ({}/{})",
                    received * 100 / total,
                    received,
                    total
                ),
                received == total,
            );
        }
        true
    });

    callbacks
}
