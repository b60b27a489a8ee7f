//! `Feature`: a feature that may be restricted by licensing.

use std::collections::HashMap;

use super::*;
use crate::{record, rpc};

record! {
    pub struct FeatureRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// a human-readable name
        name_label: String = "name_label",
        /// a notes field containing human-readable description
        name_description: String = "name_description",
        /// Indicates whether the feature is enabled
        enabled: bool = "enabled",
        /// Indicates whether the feature is experimental (as opposed to stable and fully supported)
        experimental: bool = "experimental",
        /// The version of this feature
        version: String = "version",
        /// The host where this feature is available
        host: HostRef = "host",
    }
}

rpc! {
    pub fn get_record("Feature.get_record", self_: &FeatureRef = "self") -> FeatureRecord;
    pub fn get_by_uuid("Feature.get_by_uuid", uuid: &str = "uuid") -> FeatureRef;
    pub fn get_by_name_label("Feature.get_by_name_label", label: &str = "label") -> Vec<FeatureRef>;
    pub fn get_uuid("Feature.get_uuid", self_: &FeatureRef = "self") -> String;
    pub fn get_name_label("Feature.get_name_label", self_: &FeatureRef = "self") -> String;
    pub fn get_name_description(
        "Feature.get_name_description",
        self_: &FeatureRef = "self",
    ) -> String;
    pub fn get_enabled("Feature.get_enabled", self_: &FeatureRef = "self") -> bool;
    pub fn get_experimental("Feature.get_experimental", self_: &FeatureRef = "self") -> bool;
    pub fn get_version("Feature.get_version", self_: &FeatureRef = "self") -> String;
    pub fn get_host("Feature.get_host", self_: &FeatureRef = "self") -> HostRef;
    pub fn get_all("Feature.get_all") -> Vec<FeatureRef>;
    pub fn get_all_records("Feature.get_all_records") -> HashMap<FeatureRef, FeatureRecord>;
}
