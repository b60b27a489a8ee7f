//! `VLAN`: a VLAN mux/demux.

use std::collections::HashMap;

use super::*;
use crate::{record, rpc};

record! {
    pub struct VlanRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// interface on which traffic is tagged
        tagged_pif: PifRef = "tagged_PIF",
        /// interface on which traffic is untagged
        untagged_pif: PifRef = "untagged_PIF",
        /// VLAN tag in use
        tag: i64 = "tag",
        /// additional configuration
        other_config: HashMap<String, String> = "other_config",
    }
}

rpc! {
    pub fn get_record("VLAN.get_record", self_: &VlanRef = "self") -> VlanRecord;
    pub fn get_by_uuid("VLAN.get_by_uuid", uuid: &str = "uuid") -> VlanRef;
    /// Create a VLAN mux/demuxer
    pub fn create(
        "VLAN.create",
        tagged_pif: &PifRef = "tagged_PIF",
        tag: i64 = "tag",
        network: &NetworkRef = "network",
    ) -> VlanRef, async async_create;
    /// Destroy a VLAN mux/demuxer
    pub fn destroy("VLAN.destroy", self_: &VlanRef = "self") -> (), async async_destroy;
    pub fn get_uuid("VLAN.get_uuid", self_: &VlanRef = "self") -> String;
    pub fn get_tagged_pif("VLAN.get_tagged_PIF", self_: &VlanRef = "self") -> PifRef;
    pub fn get_untagged_pif("VLAN.get_untagged_PIF", self_: &VlanRef = "self") -> PifRef;
    pub fn get_tag("VLAN.get_tag", self_: &VlanRef = "self") -> i64;
    pub fn get_other_config(
        "VLAN.get_other_config",
        self_: &VlanRef = "self",
    ) -> HashMap<String, String>;
    pub fn set_other_config(
        "VLAN.set_other_config",
        self_: &VlanRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_other_config(
        "VLAN.add_to_other_config",
        self_: &VlanRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_other_config(
        "VLAN.remove_from_other_config",
        self_: &VlanRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn get_all("VLAN.get_all") -> Vec<VlanRef>;
    pub fn get_all_records("VLAN.get_all_records") -> HashMap<VlanRef, VlanRecord>;
}
