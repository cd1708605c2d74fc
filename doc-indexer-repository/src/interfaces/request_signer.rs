//! Request signer trait definition.

use crate::errors::PublishError;

/// Signs an outgoing HTTP request so the receiving service can verify its
/// origin without a separate login step.
///
/// The signer is constructed once at process start from explicitly passed
/// credentials and injected into the publisher. Keeping the credential
/// handling behind this seam makes the publisher unit-testable with a fake
/// signer.
pub trait RequestSigner: Send + Sync {
    /// Add the authentication headers for `request` in place.
    ///
    /// # Arguments
    ///
    /// * `request` - The fully built request, including body and headers
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the signature headers were applied
    /// * `Err(PublishError::SigningError)` - If the signature could not be
    ///   derived
    fn sign(&self, request: &mut http::Request<Vec<u8>>) -> Result<(), PublishError>;
}
