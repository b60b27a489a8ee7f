//! `pool_patch`: pool-wide patches.

use std::collections::HashMap;

use super::*;
use crate::{record, rpc};

record! {
    pub struct PoolPatchRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// a human-readable name
        name_label: String = "name_label",
        /// a notes field containing human-readable description
        name_description: String = "name_description",
        /// Patch version number
        version: String = "version",
        /// Size of the patch
        size: i64 = "size",
        /// This patch should be applied across the entire pool
        pool_applied: bool = "pool_applied",
        /// This hosts this patch is applied to.
        host_patches: Vec<HostPatchRef> = "host_patches",
        /// What the client should do after this patch has been applied.
        after_apply_guidance: Vec<AfterApplyGuidance> = "after_apply_guidance",
        /// A reference to the associated pool_update object
        pool_update: PoolUpdateRef = "pool_update",
        /// additional configuration
        other_config: HashMap<String, String> = "other_config",
    }
}

rpc! {
    pub fn get_record("pool_patch.get_record", self_: &PoolPatchRef = "self") -> PoolPatchRecord;
    pub fn get_by_uuid("pool_patch.get_by_uuid", uuid: &str = "uuid") -> PoolPatchRef;
    pub fn get_by_name_label(
        "pool_patch.get_by_name_label",
        label: &str = "label",
    ) -> Vec<PoolPatchRef>;
    /// Removes the patch's files from all hosts in the pool, and removes the database entries.
    /// Only works on unapplied patches.
    pub fn destroy("pool_patch.destroy", self_: &PoolPatchRef = "self") -> (), async async_destroy;
    pub fn get_uuid("pool_patch.get_uuid", self_: &PoolPatchRef = "self") -> String;
    pub fn get_name_label("pool_patch.get_name_label", self_: &PoolPatchRef = "self") -> String;
    pub fn get_name_description(
        "pool_patch.get_name_description",
        self_: &PoolPatchRef = "self",
    ) -> String;
    pub fn get_version("pool_patch.get_version", self_: &PoolPatchRef = "self") -> String;
    pub fn get_size("pool_patch.get_size", self_: &PoolPatchRef = "self") -> i64;
    pub fn get_pool_applied("pool_patch.get_pool_applied", self_: &PoolPatchRef = "self") -> bool;
    pub fn get_host_patches(
        "pool_patch.get_host_patches",
        self_: &PoolPatchRef = "self",
    ) -> Vec<HostPatchRef>;
    pub fn get_after_apply_guidance(
        "pool_patch.get_after_apply_guidance",
        self_: &PoolPatchRef = "self",
    ) -> Vec<AfterApplyGuidance>;
    pub fn get_pool_update(
        "pool_patch.get_pool_update",
        self_: &PoolPatchRef = "self",
    ) -> PoolUpdateRef;
    pub fn get_other_config(
        "pool_patch.get_other_config",
        self_: &PoolPatchRef = "self",
    ) -> HashMap<String, String>;
    pub fn set_other_config(
        "pool_patch.set_other_config",
        self_: &PoolPatchRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_other_config(
        "pool_patch.add_to_other_config",
        self_: &PoolPatchRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_other_config(
        "pool_patch.remove_from_other_config",
        self_: &PoolPatchRef = "self",
        key: &str = "key",
    ) -> ();
    /// Removes the patch's files from the specified host
    pub fn clean_on_host(
        "pool_patch.clean_on_host",
        self_: &PoolPatchRef = "self",
        host: &HostRef = "host",
    ) -> (), async async_clean_on_host;
    /// Removes the patch's files from all hosts in the pool, but does not remove the database
    /// entries
    pub fn pool_clean(
        "pool_patch.pool_clean",
        self_: &PoolPatchRef = "self",
    ) -> (), async async_pool_clean;
    /// Removes the patch's files from the server
    pub fn clean("pool_patch.clean", self_: &PoolPatchRef = "self") -> (), async async_clean;
    /// Execute the precheck stage of the selected patch on a host and return its output
    pub fn precheck(
        "pool_patch.precheck",
        self_: &PoolPatchRef = "self",
        host: &HostRef = "host",
    ) -> String, async async_precheck;
    /// Apply the selected patch to all hosts in the pool and return a map of host_ref -> patch
    /// output
    pub fn pool_apply(
        "pool_patch.pool_apply",
        self_: &PoolPatchRef = "self",
    ) -> (), async async_pool_apply;
    /// Apply the selected patch to a host and return its output
    pub fn apply(
        "pool_patch.apply",
        self_: &PoolPatchRef = "self",
        host: &HostRef = "host",
    ) -> String, async async_apply;
    pub fn get_all("pool_patch.get_all") -> Vec<PoolPatchRef>;
    pub fn get_all_records("pool_patch.get_all_records") -> HashMap<PoolPatchRef, PoolPatchRecord>;
}
