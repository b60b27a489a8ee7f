//! `blob`: a placeholder for a binary blob.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::*;
use crate::{record, rpc};

record! {
    pub struct BlobRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// a human-readable name
        name_label: String = "name_label",
        /// a notes field containing human-readable description
        name_description: String = "name_description",
        /// Size of the binary data, in bytes
        size: i64 = "size",
        /// True if the blob is publicly accessible
        public: bool = "public",
        /// Time at which the data in the blob was last updated
        last_updated: DateTime<Utc> = "last_updated",
        /// The mime type associated with this object. Defaults to 'application/octet-
        /// stream' if the empty string is supplied
        mime_type: String = "mime_type",
    }
}

rpc! {
    pub fn get_record("blob.get_record", self_: &BlobRef = "self") -> BlobRecord;
    pub fn get_by_uuid("blob.get_by_uuid", uuid: &str = "uuid") -> BlobRef;
    pub fn get_by_name_label("blob.get_by_name_label", label: &str = "label") -> Vec<BlobRef>;
    /// Create a placeholder for a binary blob
    pub fn create("blob.create", mime_type: &str = "mime_type", public: bool = "public") -> BlobRef;
    /// Create a placeholder for a binary blob
    pub fn create2("blob.create", mime_type: &str = "mime_type") -> BlobRef;
    pub fn destroy("blob.destroy", self_: &BlobRef = "self") -> ();
    pub fn get_uuid("blob.get_uuid", self_: &BlobRef = "self") -> String;
    pub fn get_name_label("blob.get_name_label", self_: &BlobRef = "self") -> String;
    pub fn get_name_description("blob.get_name_description", self_: &BlobRef = "self") -> String;
    pub fn get_size("blob.get_size", self_: &BlobRef = "self") -> i64;
    pub fn get_public("blob.get_public", self_: &BlobRef = "self") -> bool;
    pub fn get_last_updated("blob.get_last_updated", self_: &BlobRef = "self") -> DateTime<Utc>;
    pub fn get_mime_type("blob.get_mime_type", self_: &BlobRef = "self") -> String;
    pub fn set_name_label(
        "blob.set_name_label",
        self_: &BlobRef = "self",
        value: &str = "value",
    ) -> ();
    pub fn set_name_label2("blob.set_name_label", value: &str = "value") -> ();
    pub fn set_name_description(
        "blob.set_name_description",
        self_: &BlobRef = "self",
        value: &str = "value",
    ) -> ();
    pub fn set_name_description2("blob.set_name_description", value: &str = "value") -> ();
    pub fn set_public("blob.set_public", self_: &BlobRef = "self", value: bool = "value") -> ();
    pub fn set_public2("blob.set_public", self_: &BlobRef = "self") -> ();
    pub fn get_all("blob.get_all") -> Vec<BlobRef>;
    pub fn get_all_records("blob.get_all_records") -> HashMap<BlobRef, BlobRecord>;
}
