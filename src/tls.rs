use std::path::Path;
use std::{fs::File, io::BufReader};

use rustls::{Certificate, PrivateKey, ServerConfig};
use rustls_pemfile::{certs, pkcs8_private_keys};

use crate::errors::CallbackError;

// TODO: accept RSA (PKCS#1) keys as well as PKCS#8
pub fn load_rustls_config(
    cert_file_path: &Path,
    key_file_path: &Path,
) -> Result<rustls::ServerConfig, CallbackError> {
    // init server config builder with safe defaults
    let config = ServerConfig::builder()
        .with_safe_defaults()
        .with_no_client_auth();

    let cert_buf = &mut BufReader::new(File::open(cert_file_path)?);
    let key_buf = &mut BufReader::new(File::open(key_file_path)?);

    let cert_chain: Vec<Certificate> = certs(cert_buf)?.into_iter().map(Certificate).collect();
    let mut keys: Vec<PrivateKey> = pkcs8_private_keys(key_buf)?
        .into_iter()
        .map(PrivateKey)
        .collect();

    if cert_chain.is_empty() {
        return Err(CallbackError::TlsError(format!(
            "No certificates found in file: {:?}",
            cert_file_path
        )));
    }
    if keys.is_empty() {
        return Err(CallbackError::TlsError(format!(
            "No private keys found in file: {:?}",
            key_file_path
        )));
    }

    config
        .with_single_cert(cert_chain, keys.remove(0))
        .map_err(|e| CallbackError::TlsError(format!("Error loading TLS key/cert files: {e}")))
}

#[cfg(test)]
mod unit_tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn pem_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn it_fails_on_a_missing_file() {
        let key = pem_file("");
        let result = load_rustls_config(Path::new("/nonexistent/cert.pem"), key.path());
        assert!(matches!(result, Err(CallbackError::IoError(_))));
    }

    #[test]
    fn it_fails_without_certificates() {
        let cert = pem_file("not a pem file\n");
        let key = pem_file("");
        let result = load_rustls_config(cert.path(), key.path());
        match result {
            Err(CallbackError::TlsError(msg)) => assert!(msg.contains("No certificates")),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn it_fails_without_private_keys() {
        let cert = pem_file("-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n");
        let key = pem_file("");
        let result = load_rustls_config(cert.path(), key.path());
        match result {
            Err(CallbackError::TlsError(msg)) => assert!(msg.contains("No private keys")),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
