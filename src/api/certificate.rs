//! `Certificate`: an X509 certificate used for TLS connections.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::*;
use crate::{record, rpc};

record! {
    pub struct CertificateRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// The name of the certificate, only present on certificates of type 'ca'
        name: String = "name",
        /// The type of the certificate, either 'ca', 'host' or
        /// 'host_internal'
        typ: CertificateType = "type",
        /// The host where the certificate is installed
        host: HostRef = "host",
        /// Date after which the certificate is valid
        not_before: DateTime<Utc> = "not_before",
        /// Date before which the certificate is valid
        not_after: DateTime<Utc> = "not_after",
        /// The certificate's SHA256 fingerprint / hash
        fingerprint: String = "fingerprint",
    }
}

rpc! {
    pub fn get_record(
        "Certificate.get_record",
        self_: &CertificateRef = "self",
    ) -> CertificateRecord;
    pub fn get_by_uuid("Certificate.get_by_uuid", uuid: &str = "uuid") -> CertificateRef;
    pub fn get_uuid("Certificate.get_uuid", self_: &CertificateRef = "self") -> String;
    pub fn get_name("Certificate.get_name", self_: &CertificateRef = "self") -> String;
    pub fn get_type("Certificate.get_type", self_: &CertificateRef = "self") -> CertificateType;
    pub fn get_host("Certificate.get_host", self_: &CertificateRef = "self") -> HostRef;
    pub fn get_not_before(
        "Certificate.get_not_before",
        self_: &CertificateRef = "self",
    ) -> DateTime<Utc>;
    pub fn get_not_after(
        "Certificate.get_not_after",
        self_: &CertificateRef = "self",
    ) -> DateTime<Utc>;
    pub fn get_fingerprint(
        "Certificate.get_fingerprint",
        self_: &CertificateRef = "self",
    ) -> String;
    pub fn get_all("Certificate.get_all") -> Vec<CertificateRef>;
    pub fn get_all_records(
        "Certificate.get_all_records",
    ) -> HashMap<CertificateRef, CertificateRecord>;
}
