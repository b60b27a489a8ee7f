//! `network`: a virtual network.

use std::collections::HashMap;

use super::*;
use crate::{record, rpc};

record! {
    pub struct NetworkRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// a human-readable name
        name_label: String = "name_label",
        /// a notes field containing human-readable description
        name_description: String = "name_description",
        /// list of the operations allowed in this state. This list is advisory only and the server
        /// state may have changed by the time this field is read by a client.
        allowed_operations: Vec<NetworkOperations> = "allowed_operations",
        /// links each of the running tasks using this object (by reference) to a current_operation
        /// enum which describes the nature of the task.
        current_operations: HashMap<String, NetworkOperations> = "current_operations",
        /// list of connected vifs
        vifs: Vec<VifRef> = "VIFs",
        /// list of connected pifs
        pifs: Vec<PifRef> = "PIFs",
        /// MTU in octets
        mtu: i64 = "MTU",
        /// additional configuration
        other_config: HashMap<String, String> = "other_config",
        /// name of the bridge corresponding to this network on the local host
        bridge: String = "bridge",
        /// true if the bridge is managed by xapi
        managed: bool = "managed",
        /// Binary blobs associated with this network
        blobs: HashMap<String, BlobRef> = "blobs",
        /// user-specified tags for categorization purposes
        tags: Vec<String> = "tags",
        /// The network will use this value to determine the behaviour of all VIFs where
        /// locking_mode = default
        default_locking_mode: NetworkDefaultLockingMode = "default_locking_mode",
        /// The IP addresses assigned to VIFs on networks that have active xapi-managed DHCP
        assigned_ips: HashMap<VifRef, String> = "assigned_ips",
        /// Set of purposes for which the server will use this network
        purpose: Vec<NetworkPurpose> = "purpose",
    }
}

rpc! {
    pub fn get_record("network.get_record", self_: &NetworkRef = "self") -> NetworkRecord;
    pub fn get_by_uuid("network.get_by_uuid", uuid: &str = "uuid") -> NetworkRef;
    pub fn get_by_name_label("network.get_by_name_label", label: &str = "label") -> Vec<NetworkRef>;
    /// Create a new network instance, and return its handle. The constructor args are: name_label,
    /// name_description, MTU, other_config*, bridge, managed, tags (* = non-optional).
    pub fn create(
        "network.create",
        args: &NetworkRecord = "args",
    ) -> NetworkRef, async async_create;
    /// Destroy the specified network instance.
    pub fn destroy("network.destroy", self_: &NetworkRef = "self") -> (), async async_destroy;
    pub fn get_uuid("network.get_uuid", self_: &NetworkRef = "self") -> String;
    pub fn get_name_label("network.get_name_label", self_: &NetworkRef = "self") -> String;
    pub fn get_name_description(
        "network.get_name_description",
        self_: &NetworkRef = "self",
    ) -> String;
    pub fn get_allowed_operations(
        "network.get_allowed_operations",
        self_: &NetworkRef = "self",
    ) -> Vec<NetworkOperations>;
    pub fn get_current_operations(
        "network.get_current_operations",
        self_: &NetworkRef = "self",
    ) -> HashMap<String, NetworkOperations>;
    pub fn get_vifs("network.get_VIFs", self_: &NetworkRef = "self") -> Vec<VifRef>;
    pub fn get_pifs("network.get_PIFs", self_: &NetworkRef = "self") -> Vec<PifRef>;
    pub fn get_mtu("network.get_MTU", self_: &NetworkRef = "self") -> i64;
    pub fn get_other_config(
        "network.get_other_config",
        self_: &NetworkRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_bridge("network.get_bridge", self_: &NetworkRef = "self") -> String;
    pub fn get_managed("network.get_managed", self_: &NetworkRef = "self") -> bool;
    pub fn get_blobs("network.get_blobs", self_: &NetworkRef = "self") -> HashMap<String, BlobRef>;
    pub fn get_tags("network.get_tags", self_: &NetworkRef = "self") -> Vec<String>;
    pub fn get_default_locking_mode(
        "network.get_default_locking_mode",
        self_: &NetworkRef = "self",
    ) -> NetworkDefaultLockingMode;
    pub fn get_assigned_ips(
        "network.get_assigned_ips",
        self_: &NetworkRef = "self",
    ) -> HashMap<VifRef, String>;
    pub fn get_purpose("network.get_purpose", self_: &NetworkRef = "self") -> Vec<NetworkPurpose>;
    pub fn set_name_label(
        "network.set_name_label",
        self_: &NetworkRef = "self",
        value: &str = "value",
    ) -> ();
    pub fn set_name_description(
        "network.set_name_description",
        self_: &NetworkRef = "self",
        value: &str = "value",
    ) -> ();
    pub fn set_mtu("network.set_MTU", self_: &NetworkRef = "self", value: i64 = "value") -> ();
    pub fn set_mtu2("network.set_MTU", self_: &NetworkRef = "self") -> ();
    pub fn set_other_config(
        "network.set_other_config",
        self_: &NetworkRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_other_config(
        "network.add_to_other_config",
        self_: &NetworkRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_other_config(
        "network.remove_from_other_config",
        self_: &NetworkRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn set_tags(
        "network.set_tags",
        self_: &NetworkRef = "self",
        value: &[String] = "value",
    ) -> ();
    pub fn set_tags2("network.set_tags", self_: &NetworkRef = "self") -> ();
    pub fn add_tags("network.add_tags", self_: &NetworkRef = "self", value: &str = "value") -> ();
    pub fn add_tags2("network.add_tags", self_: &NetworkRef = "self") -> ();
    pub fn remove_tags(
        "network.remove_tags",
        self_: &NetworkRef = "self",
        value: &str = "value",
    ) -> ();
    pub fn remove_tags2("network.remove_tags", self_: &NetworkRef = "self") -> ();
    pub fn set_default_locking_mode(
        "network.set_default_locking_mode",
        network: &NetworkRef = "network",
        value: &NetworkDefaultLockingMode = "value",
    ) -> (), async async_set_default_locking_mode;
    pub fn add_purpose(
        "network.add_purpose",
        self_: &NetworkRef = "self",
        value: &NetworkPurpose = "value",
    ) -> (), async async_add_purpose;
    pub fn remove_purpose(
        "network.remove_purpose",
        self_: &NetworkRef = "self",
        value: &NetworkPurpose = "value",
    ) -> (), async async_remove_purpose;
    /// Create a placeholder for a named binary blob of data that is associated with this pool
    pub fn create_new_blob(
        "network.create_new_blob",
        network: &NetworkRef = "network",
        name: &str = "name",
        mime_type: &str = "mime_type",
        public: bool = "public",
    ) -> BlobRef, async async_create_new_blob;
    /// Create a placeholder for a named binary blob of data that is associated with this pool
    pub fn create_new_blob4(
        "network.create_new_blob",
        network: &NetworkRef = "network",
        name: &str = "name",
        mime_type: &str = "mime_type",
    ) -> BlobRef, async async_create_new_blob4;
    pub fn get_all("network.get_all") -> Vec<NetworkRef>;
    pub fn get_all_records("network.get_all_records") -> HashMap<NetworkRef, NetworkRecord>;
}
