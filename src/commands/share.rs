//! Custom game link command
//!
//! Turns a chosen answer and attempt budget into a shareable token and URL.

use crate::core::{AttemptLimit, Mode};
use crate::game::{DescriptorError, ShareDescriptor, share};

/// A ready-to-send custom game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub descriptor: ShareDescriptor,
    pub token: String,
    pub url: String,
}

/// Validate the custom game and build its link
///
/// # Errors
///
/// Returns `DescriptorError` if the answer does not fit `mode` or the budget
/// is zero.
pub fn create_share_link(
    mode: Mode,
    answer: &str,
    max_attempts: AttemptLimit,
    base_url: &str,
) -> Result<ShareLink, DescriptorError> {
    let descriptor = ShareDescriptor::new(mode, answer, max_attempts).validated()?;
    let token = share::encode(&descriptor);
    let url = share::share_url(base_url, &descriptor);

    tracing::debug!(%mode, %max_attempts, "Share link created");

    Ok(ShareLink {
        descriptor,
        token,
        url,
    })
}
