//! SigV4 request signer.
//!
//! Derives the request signature from credentials resolved once at process
//! start plus the configured region and service name. The credential handle
//! is owned by the signer and shared read-only across items.

use std::time::SystemTime;

use aws_credential_types::Credentials;
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningParams, SigningSettings};
use aws_sigv4::sign::v4;

use crate::config::SigningScope;
use crate::errors::PublishError;
use crate::interfaces::RequestSigner;

/// Signs requests with AWS Signature Version 4.
pub struct SigV4Signer {
    credentials: Credentials,
    scope: SigningScope,
}

impl SigV4Signer {
    /// Create a signer from credentials resolved at process start.
    ///
    /// # Arguments
    ///
    /// * `credentials` - The resolved credential set, passed by value
    /// * `scope` - Region and service name the signature covers
    pub fn new(credentials: Credentials, scope: SigningScope) -> Self {
        Self { credentials, scope }
    }
}

impl RequestSigner for SigV4Signer {
    fn sign(&self, request: &mut http::Request<Vec<u8>>) -> Result<(), PublishError> {
        let identity = self.credentials.clone().into();
        let params: SigningParams<'_> = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.scope.region)
            .name(&self.scope.service)
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| PublishError::signing(e.to_string()))?
            .into();

        let mut headers = Vec::with_capacity(request.headers().len());
        for (name, value) in request.headers() {
            let value = value
                .to_str()
                .map_err(|e| PublishError::signing(format!("header {}: {}", name, e)))?;
            headers.push((name.as_str(), value));
        }

        let signable = SignableRequest::new(
            request.method().as_str(),
            request.uri().to_string(),
            headers.into_iter(),
            SignableBody::Bytes(request.body().as_slice()),
        )
        .map_err(|e| PublishError::signing(e.to_string()))?;

        let (instructions, _signature) = sign(signable, &params)
            .map_err(|e| PublishError::signing(e.to_string()))?
            .into_parts();

        instructions.apply_to_request_http1x(request);
        Ok(())
    }
}
