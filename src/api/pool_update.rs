//! `pool_update`: pool-wide updates to the host software.

use std::collections::HashMap;

use super::*;
use crate::{record, rpc};

record! {
    pub struct PoolUpdateRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// a human-readable name
        name_label: String = "name_label",
        /// a notes field containing human-readable description
        name_description: String = "name_description",
        /// Update version number
        version: String = "version",
        /// Size of the update in bytes
        installation_size: i64 = "installation_size",
        /// GPG key of the update
        key: String = "key",
        /// What the client should do after this update has been applied.
        after_apply_guidance: Vec<UpdateAfterApplyGuidance> = "after_apply_guidance",
        /// VDI the update was uploaded to
        vdi: VdiRef = "vdi",
        /// The hosts that have applied this update.
        hosts: Vec<HostRef> = "hosts",
        /// additional configuration
        other_config: HashMap<String, String> = "other_config",
        /// Flag - if true, all hosts in a pool must apply this update
        enforce_homogeneity: bool = "enforce_homogeneity",
    }
}

rpc! {
    pub fn get_record("pool_update.get_record", self_: &PoolUpdateRef = "self") -> PoolUpdateRecord;
    pub fn get_by_uuid("pool_update.get_by_uuid", uuid: &str = "uuid") -> PoolUpdateRef;
    pub fn get_by_name_label(
        "pool_update.get_by_name_label",
        label: &str = "label",
    ) -> Vec<PoolUpdateRef>;
    /// Removes the database entry. Only works on unapplied update.
    pub fn destroy(
        "pool_update.destroy",
        self_: &PoolUpdateRef = "self",
    ) -> (), async async_destroy;
    pub fn get_uuid("pool_update.get_uuid", self_: &PoolUpdateRef = "self") -> String;
    pub fn get_name_label("pool_update.get_name_label", self_: &PoolUpdateRef = "self") -> String;
    pub fn get_name_description(
        "pool_update.get_name_description",
        self_: &PoolUpdateRef = "self",
    ) -> String;
    pub fn get_version("pool_update.get_version", self_: &PoolUpdateRef = "self") -> String;
    pub fn get_installation_size(
        "pool_update.get_installation_size",
        self_: &PoolUpdateRef = "self",
    ) -> i64;
    pub fn get_key("pool_update.get_key", self_: &PoolUpdateRef = "self") -> String;
    pub fn get_after_apply_guidance(
        "pool_update.get_after_apply_guidance",
        self_: &PoolUpdateRef = "self",
    ) -> Vec<UpdateAfterApplyGuidance>;
    pub fn get_vdi("pool_update.get_vdi", self_: &PoolUpdateRef = "self") -> VdiRef;
    pub fn get_hosts("pool_update.get_hosts", self_: &PoolUpdateRef = "self") -> Vec<HostRef>;
    pub fn get_other_config(
        "pool_update.get_other_config",
        self_: &PoolUpdateRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_enforce_homogeneity(
        "pool_update.get_enforce_homogeneity",
        self_: &PoolUpdateRef = "self",
    ) -> bool;
    pub fn set_other_config(
        "pool_update.set_other_config",
        self_: &PoolUpdateRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn set_other_config2("pool_update.set_other_config", self_: &PoolUpdateRef = "self") -> ();
    pub fn add_to_other_config(
        "pool_update.add_to_other_config",
        self_: &PoolUpdateRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn add_to_other_config2(
        "pool_update.add_to_other_config",
        self_: &PoolUpdateRef = "self",
    ) -> ();
    pub fn remove_from_other_config(
        "pool_update.remove_from_other_config",
        self_: &PoolUpdateRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn remove_from_other_config2(
        "pool_update.remove_from_other_config",
        self_: &PoolUpdateRef = "self",
    ) -> ();
    /// Removes the update's files from all hosts in the pool, but does not revert the update
    pub fn pool_clean(
        "pool_update.pool_clean",
        self_: &PoolUpdateRef = "self",
    ) -> (), async async_pool_clean;
    /// Apply the selected update to all hosts in the pool
    pub fn pool_apply(
        "pool_update.pool_apply",
        self_: &PoolUpdateRef = "self",
    ) -> (), async async_pool_apply;
    /// Apply the selected update to a host
    pub fn apply(
        "pool_update.apply",
        self_: &PoolUpdateRef = "self",
        host: &HostRef = "host",
    ) -> (), async async_apply;
    /// Execute the precheck stage of the selected update on a host
    pub fn precheck(
        "pool_update.precheck",
        self_: &PoolUpdateRef = "self",
        host: &HostRef = "host",
    ) -> LivepatchStatus, async async_precheck;
    /// Introduce update VDI
    pub fn introduce(
        "pool_update.introduce",
        vdi: &VdiRef = "vdi",
    ) -> PoolUpdateRef, async async_introduce;
    pub fn get_all("pool_update.get_all") -> Vec<PoolUpdateRef>;
    pub fn get_all_records(
        "pool_update.get_all_records",
    ) -> HashMap<PoolUpdateRef, PoolUpdateRecord>;
}
