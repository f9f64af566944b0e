use x509_parser::prelude::*;

use crate::{Error, Result};

/// Extracts the subject common name from a DER encoded X.509 certificate.
/// Party identifiers on the wire are exactly these names.
pub fn extract_common_name(der: &[u8]) -> Result<String> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|_| Error::CertificateParseError)?;

    let common_name = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(str::to_owned)
        .ok_or(Error::CertificateFieldMissing);
    common_name
}
