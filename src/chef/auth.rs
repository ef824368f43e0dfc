use std::fs;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha2::{Digest, Sha256};
use crate::error::InventoryError;

pub(crate) const SIGN_VERSION: &str = "1.3";
pub(crate) const SERVER_API_VERSION: &str = "1";
const AUTHORIZATION_CHUNK: usize = 60;

/// Signs Chef server requests with the client's private key (protocol 1.3).
pub(crate) struct RequestSigner {
    user_id: String,
    signing_key: SigningKey<Sha256>,
}

impl RequestSigner {
    pub(crate) fn from_key_file(user_id: &str, path: &str) -> Result<Self, InventoryError> {
        debug!("load client key {}", path);
        let pem = fs::read_to_string(path)
            .map_err(|err| InventoryError::ClientKey(format!("{}: {}", path, err)))?;

        Self::from_pem(user_id, &pem)
    }

    pub(crate) fn from_pem(user_id: &str, pem: &str) -> Result<Self, InventoryError> {
        let key = RsaPrivateKey::from_pkcs1_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
            .map_err(|err| InventoryError::ClientKey(format!("{}", err)))?;

        Ok(RequestSigner {
            user_id: user_id.to_string(),
            signing_key: SigningKey::<Sha256>::new(key),
        })
    }

    /// Headers to attach to a request for `path` carrying `body`.
    pub(crate) fn headers(&self, method: &str, path: &str, body: &[u8], timestamp: &str) -> Result<Vec<(String, String)>, InventoryError> {
        let content_hash = hash_body(body);
        let canonical = canonical_request(method, path, &content_hash, timestamp, &self.user_id);
        let signature = self.sign(canonical.as_bytes())?;

        let mut headers = vec![
            ("X-Ops-Sign".to_string(), format!("algorithm=sha256;version={}", SIGN_VERSION)),
            ("X-Ops-Userid".to_string(), self.user_id.clone()),
            ("X-Ops-Timestamp".to_string(), timestamp.to_string()),
            ("X-Ops-Content-Hash".to_string(), content_hash),
            ("X-Ops-Server-API-Version".to_string(), SERVER_API_VERSION.to_string()),
        ];

        for (index, chunk) in signature.as_bytes().chunks(AUTHORIZATION_CHUNK).enumerate() {
            headers.push((
                format!("X-Ops-Authorization-{}", index + 1),
                String::from_utf8_lossy(chunk).into_owned(),
            ));
        }

        Ok(headers)
    }

    fn sign(&self, message: &[u8]) -> Result<String, InventoryError> {
        let signature = self.signing_key
            .try_sign(message)
            .map_err(|err| InventoryError::ClientKey(format!("signing failed: {}", err)))?;

        Ok(STANDARD.encode(signature.to_bytes()))
    }
}

pub(crate) fn hash_body(body: &[u8]) -> String {
    STANDARD.encode(Sha256::digest(body))
}

pub(crate) fn canonical_path(path: &str) -> String {
    let mut canonical = String::with_capacity(path.len());
    let mut previous_slash = false;

    for c in path.chars() {
        if c == '/' && previous_slash {
            continue;
        }
        previous_slash = c == '/';
        canonical.push(c);
    }

    if canonical.len() > 1 && canonical.ends_with('/') {
        canonical.pop();
    }

    canonical
}

pub(crate) fn canonical_request(method: &str, path: &str, content_hash: &str, timestamp: &str, user_id: &str) -> String {
    format!(
        "Method:{}\nPath:{}\nX-Ops-Content-Hash:{}\nX-Ops-Sign:version={}\nX-Ops-Timestamp:{}\nX-Ops-UserId:{}\nX-Ops-Server-API-Version:{}",
        method.to_uppercase(),
        canonical_path(path),
        content_hash,
        SIGN_VERSION,
        timestamp,
        user_id,
        SERVER_API_VERSION,
    )
}

pub(crate) fn timestamp_now() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
