use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{fs, io};

use rustls::client::WebPkiServerVerifier;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, PrivateKeyDer, ServerName, UnixTime};
use rustls::{
    CertificateError, ClientConfig, DigitallySignedStruct, Error, RootCertStore, SignatureScheme,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TlsError {
    #[error("Could not read {note} file {filename:?}: {err}")]
    FileReadFailed {
        note: &'static str,
        filename: PathBuf,
        err: io::Error,
    },
    #[error("Identity certificate is missing a key")]
    MissingKey,
    #[error("Certificate file contains no certificates")]
    MissingCertificate,
    #[error("Could not parse certificate in {filename:?}: {err}")]
    CertificateParse { filename: PathBuf, err: io::Error },
    #[error("Could not parse private key in {filename:?}: {err}")]
    PrivateKeyParse { filename: PathBuf, err: io::Error },
    #[error("Error building TLS config: {0}")]
    TlsBuild(rustls::Error),
    #[error("Error adding a certificate to a store: {0}")]
    AddCertToStore(rustls::Error),
    #[error("{0}")]
    VerifierBuild(rustls::client::VerifierBuilderError),
    #[error("Load native certs: {0}")]
    NativeCerts(io::Error),
}

const fn default_true() -> bool {
    true
}

/// TLS options for the connection to the XenAPI endpoint.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TlsConfig {
    /// Path to a CA certificate file in PEM format. The system roots are
    /// used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<PathBuf>,

    /// Path to a client certificate in PEM format, "key" must be set too.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<PathBuf>,

    /// Path to the PKCS#8 private key of "cert" in PEM format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<PathBuf>,

    /// Enables certificate verification.
    ///
    /// XenServer hosts ship a self-signed certificate out of the box, pin
    /// it with "ca" rather than turning this off.
    #[serde(default = "default_true")]
    pub verify_certificate: bool,

    /// Enables hostname verification.
    #[serde(default = "default_true")]
    pub verify_hostname: bool,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            ca: None,
            cert: None,
            key: None,
            verify_certificate: true,
            verify_hostname: true,
        }
    }
}

impl TlsConfig {
    pub fn client_config(&self) -> Result<ClientConfig, TlsError> {
        let certs = match &self.ca {
            Some(ca_file) => load_certs(ca_file)?,
            None => native_certs()?,
        };

        let mut root_store = RootCertStore::empty();
        for cert in certs {
            root_store.add(cert).map_err(TlsError::AddCertToStore)?;
        }

        let root_store = Arc::new(root_store);
        let builder = ClientConfig::builder().with_root_certificates(Arc::clone(&root_store));
        let mut config = match (&self.cert, &self.key) {
            (Some(cert_file), Some(key_file)) => {
                let certs = load_certs(cert_file)?;
                let key = load_private_key(key_file)?;

                builder
                    .with_client_auth_cert(certs, key)
                    .map_err(TlsError::TlsBuild)?
            }
            (Some(_), None) => return Err(TlsError::MissingKey),
            (None, Some(_)) => return Err(TlsError::MissingCertificate),
            (None, None) => builder.with_no_client_auth(),
        };

        config
            .dangerous()
            .set_certificate_verifier(Arc::new(HostVerifier {
                inner: WebPkiServerVerifier::builder(root_store)
                    .build()
                    .map_err(TlsError::VerifierBuild)?,
                leniency: Leniency {
                    verify_certificate: self.verify_certificate,
                    verify_hostname: self.verify_hostname,
                },
            }));

        Ok(config)
    }
}

fn native_certs() -> Result<Vec<CertificateDer<'static>>, TlsError> {
    let result = rustls_native_certs::load_native_certs();
    if !result.errors.is_empty() {
        warn!(
            message = "native root CA certificate loading errors",
            errs = ?result.errors
        );

        if result.certs.is_empty() {
            return Err(TlsError::NativeCerts(io::Error::other(
                "no native root CA certificate could be loaded",
            )));
        }
    }

    Ok(result.certs)
}

/// The server certificate failures a connection lets through.
#[derive(Clone, Copy, Debug)]
struct Leniency {
    verify_certificate: bool,
    verify_hostname: bool,
}

impl Leniency {
    fn tolerates(&self, err: &Error) -> bool {
        if !self.verify_certificate {
            return true;
        }

        !self.verify_hostname
            && matches!(
                err,
                Error::InvalidCertificate(
                    CertificateError::NotValidForName
                        | CertificateError::NotValidForNameContext { .. }
                )
            )
    }
}

/// The webpki verifier, relaxed as far as the [`Leniency`] allows.
#[derive(Debug)]
struct HostVerifier {
    inner: Arc<WebPkiServerVerifier>,
    leniency: Leniency,
}

impl ServerCertVerifier for HostVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, Error> {
        match self.inner.verify_server_cert(
            end_entity,
            intermediates,
            server_name,
            ocsp_response,
            now,
        ) {
            Err(err) if self.leniency.tolerates(&err) => {
                debug!(message = "Accepting server certificate", %err);
                Ok(ServerCertVerified::assertion())
            }
            result => result,
        }
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, Error> {
        match self.inner.verify_tls12_signature(message, cert, dss) {
            Err(_) if !self.leniency.verify_certificate => Ok(HandshakeSignatureValid::assertion()),
            result => result,
        }
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, Error> {
        match self.inner.verify_tls13_signature(message, cert, dss) {
            Err(_) if !self.leniency.verify_certificate => Ok(HandshakeSignatureValid::assertion()),
            result => result,
        }
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.inner.supported_verify_schemes()
    }
}

fn load_certs(filename: &Path) -> Result<Vec<CertificateDer<'static>>, TlsError> {
    let content = fs::read(filename).map_err(|err| TlsError::FileReadFailed {
        note: "cert",
        filename: filename.to_path_buf(),
        err,
    })?;

    let certs = pem::parse_many(content)
        .map_err(|err| TlsError::CertificateParse {
            filename: filename.to_path_buf(),
            err: io::Error::new(io::ErrorKind::InvalidData, err),
        })?
        .into_iter()
        .filter(|p| p.tag() == "CERTIFICATE")
        .map(|p| CertificateDer::from(p.into_contents()))
        .collect::<Vec<_>>();

    if certs.is_empty() {
        return Err(TlsError::MissingCertificate);
    }

    Ok(certs)
}

fn load_private_key(filename: &Path) -> Result<PrivateKeyDer<'static>, TlsError> {
    let content = fs::read(filename).map_err(|err| TlsError::FileReadFailed {
        note: "private key",
        filename: filename.to_path_buf(),
        err,
    })?;

    let parse_err = |err: io::Error| TlsError::PrivateKeyParse {
        filename: filename.to_path_buf(),
        err,
    };

    let key = pem::parse_many(content)
        .map_err(|err| parse_err(io::Error::new(io::ErrorKind::InvalidData, err)))?
        .into_iter()
        .find(|p| p.tag().ends_with("PRIVATE KEY") && !p.tag().starts_with("ENCRYPTED"))
        .ok_or_else(|| {
            parse_err(io::Error::new(
                io::ErrorKind::InvalidData,
                "no private key found in PEM file",
            ))
        })?;

    PrivateKeyDer::try_from(key.into_contents())
        .map_err(|err| parse_err(io::Error::new(io::ErrorKind::InvalidData, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_ca_file() {
        let config = TlsConfig {
            ca: Some("/nonexistent/ca.pem".into()),
            ..Default::default()
        };

        assert!(matches!(
            config.client_config(),
            Err(TlsError::FileReadFailed { note: "cert", .. })
        ));
    }

    #[test]
    fn ca_file_without_certificates() {
        let dir = std::env::temp_dir().join(format!("xenapi-tls-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let ca = dir.join("ca.pem");
        fs::write(&ca, "not a pem file").unwrap();

        let config = TlsConfig {
            ca: Some(ca),
            ..Default::default()
        };
        assert!(matches!(
            config.client_config(),
            Err(TlsError::MissingCertificate)
        ));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn private_key_file_without_key() {
        let dir = std::env::temp_dir().join(format!("xenapi-key-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("key.pem");
        fs::write(
            &path,
            "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n",
        )
        .unwrap();

        assert!(matches!(
            load_private_key(&path),
            Err(TlsError::PrivateKeyParse { .. })
        ));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn leniency() {
        let wrong_name = Error::InvalidCertificate(CertificateError::NotValidForName);
        let expired = Error::InvalidCertificate(CertificateError::Expired);

        let strict = Leniency {
            verify_certificate: true,
            verify_hostname: true,
        };
        assert!(!strict.tolerates(&wrong_name));
        assert!(!strict.tolerates(&expired));

        let any_name = Leniency {
            verify_certificate: true,
            verify_hostname: false,
        };
        assert!(any_name.tolerates(&wrong_name));
        assert!(!any_name.tolerates(&expired));

        let anything = Leniency {
            verify_certificate: false,
            verify_hostname: true,
        };
        assert!(anything.tolerates(&expired));
        assert!(anything.tolerates(&Error::InvalidCertificate(CertificateError::UnknownIssuer)));
    }

    #[test]
    fn deserialize_defaults() {
        let config: TlsConfig = serde_yaml::from_str("ca: /etc/xensource/ca.pem").unwrap();

        assert_eq!(config.ca, Some(PathBuf::from("/etc/xensource/ca.pem")));
        assert!(config.verify_certificate);
        assert!(config.verify_hostname);
    }
}
