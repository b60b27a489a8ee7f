//! `pool`: pool-wide information.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::*;
use crate::{record, rpc};

record! {
    pub struct PoolRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// Short name
        name_label: String = "name_label",
        /// Description
        name_description: String = "name_description",
        /// The host that is pool master
        master: HostRef = "master",
        /// Default SR for VDIs
        default_sr: SrRef = "default_SR",
        /// The SR in which VDIs for suspend images are created
        suspend_image_sr: SrRef = "suspend_image_SR",
        /// The SR in which VDIs for crash dumps are created
        crash_dump_sr: SrRef = "crash_dump_SR",
        /// additional configuration
        other_config: HashMap<String, String> = "other_config",
        /// true if HA is enabled on the pool, false otherwise
        ha_enabled: bool = "ha_enabled",
        /// The current HA configuration
        ha_configuration: HashMap<String, String> = "ha_configuration",
        /// HA statefile VDIs in use
        ha_statefiles: Vec<String> = "ha_statefiles",
        /// Number of host failures to tolerate before the Pool is declared to be overcommitted
        ha_host_failures_to_tolerate: i64 = "ha_host_failures_to_tolerate",
        /// Number of future host failures we have managed to find a plan for. Once this reaches
        /// zero any future host failures will cause the failure of protected VMs.
        ha_plan_exists_for: i64 = "ha_plan_exists_for",
        /// If set to false then operations which would cause the Pool to become overcommitted will
        /// be blocked.
        ha_allow_overcommit: bool = "ha_allow_overcommit",
        /// True if the Pool is considered to be overcommitted i.e. if there exist insufficient
        /// physical resources to tolerate the configured number of host failures
        ha_overcommitted: bool = "ha_overcommitted",
        /// Binary blobs associated with this pool
        blobs: HashMap<String, BlobRef> = "blobs",
        /// user-specified tags for categorization purposes
        tags: Vec<String> = "tags",
        /// gui-specific configuration for pool
        gui_config: HashMap<String, String> = "gui_config",
        /// Configuration for the automatic health check feature
        health_check_config: HashMap<String, String> = "health_check_config",
        /// Url for the configured workload balancing host
        wlb_url: String = "wlb_url",
        /// Username for accessing the workload balancing host
        wlb_username: String = "wlb_username",
        /// true if workload balancing is enabled on the pool, false otherwise
        wlb_enabled: bool = "wlb_enabled",
        /// true if communication with the WLB server should enforce TLS certificate verification.
        wlb_verify_cert: bool = "wlb_verify_cert",
        /// true a redo-log is to be used other than when HA is enabled, false otherwise
        redo_log_enabled: bool = "redo_log_enabled",
        /// indicates the VDI to use for the redo-log other than when HA is enabled
        redo_log_vdi: VdiRef = "redo_log_vdi",
        /// address of the vswitch controller
        vswitch_controller: String = "vswitch_controller",
        /// Pool-wide restrictions currently in effect
        restrictions: HashMap<String, String> = "restrictions",
        /// The set of currently known metadata VDIs for this pool
        metadata_vdis: Vec<VdiRef> = "metadata_VDIs",
        /// The HA cluster stack that is currently in use. Only valid when HA is enabled.
        ha_cluster_stack: String = "ha_cluster_stack",
        /// list of the operations allowed in this state. This list is advisory only and the server
        /// state may have changed by the time this field is read by a client.
        allowed_operations: Vec<PoolAllowedOperations> = "allowed_operations",
        /// links each of the running tasks using this object (by reference) to a current_operation
        /// enum which describes the nature of the task.
        current_operations: HashMap<String, PoolAllowedOperations> = "current_operations",
        /// Pool-wide guest agent configuration information
        guest_agent_config: HashMap<String, String> = "guest_agent_config",
        /// Details about the physical CPUs on the pool
        cpu_info: HashMap<String, String> = "cpu_info",
        /// The pool-wide policy for clients on whether to use the vendor device or not on newly
        /// created VMs. This field will also be consulted if the 'has_vendor_device'
        /// field is not specified in the VM.create call.
        policy_no_vendor_device: bool = "policy_no_vendor_device",
        /// The pool-wide flag to show if the live patching feauture is disabled or not.
        live_patching_disabled: bool = "live_patching_disabled",
        /// true if IGMP snooping is enabled in the pool, false otherwise.
        igmp_snooping_enabled: bool = "igmp_snooping_enabled",
        /// The UEFI certificates allowing Secure Boot
        uefi_certificates: String = "uefi_certificates",
        /// Custom UEFI certificates allowing Secure Boot
        custom_uefi_certificates: String = "custom_uefi_certificates",
        /// True if either a PSR is running or we are waiting for a PSR to be re-run
        is_psr_pending: bool = "is_psr_pending",
        /// True iff TLS certificate verification is enabled
        tls_verification_enabled: bool = "tls_verification_enabled",
        /// The set of currently enabled repositories
        repositories: Vec<RepositoryRef> = "repositories",
        /// True if authentication by TLS client certificates is enabled
        client_certificate_auth_enabled: bool = "client_certificate_auth_enabled",
        /// The name (CN/SAN) that an incoming client certificate must have to allow authentication
        client_certificate_auth_name: String = "client_certificate_auth_name",
        /// Url of the proxy used in syncing with the enabled repositories
        repository_proxy_url: String = "repository_proxy_url",
        /// Username for the authentication of the proxy used in syncing with the enabled
        /// repositories
        repository_proxy_username: String = "repository_proxy_username",
        /// Password for the authentication of the proxy used in syncing with the enabled
        /// repositories
        repository_proxy_password: SecretRef = "repository_proxy_password",
        /// Default behaviour during migration, True if stream compression should be used
        migration_compression: bool = "migration_compression",
        /// true if bias against pool master when scheduling vms is enabled, false otherwise
        coordinator_bias: bool = "coordinator_bias",
        /// Maximum number of threads to use for PAM authentication
        local_auth_max_threads: i64 = "local_auth_max_threads",
        /// Maximum number of threads to use for external (AD) authentication
        ext_auth_max_threads: i64 = "ext_auth_max_threads",
        /// The UUID of the pool for identification of telemetry data
        telemetry_uuid: SecretRef = "telemetry_uuid",
        /// How often the telemetry collection will be carried out
        telemetry_frequency: TelemetryFrequency = "telemetry_frequency",
        /// The earliest timestamp (in UTC) when the next round of telemetry collection can be
        /// carried out
        telemetry_next_collection: DateTime<Utc> = "telemetry_next_collection",
        /// time of the last update sychronization
        last_update_sync: DateTime<Utc> = "last_update_sync",
        /// The frequency at which updates are synchronized from a remote CDN: daily or weekly.
        update_sync_frequency: UpdateSyncFrequency = "update_sync_frequency",
        /// The day of the week the update synchronizations will be scheduled, based on pool's
        /// local timezone. Ignored when update_sync_frequency is daily
        update_sync_day: i64 = "update_sync_day",
        /// Whether periodic update synchronization is enabled or not
        update_sync_enabled: bool = "update_sync_enabled",
    }
}

rpc! {
    pub fn get_record("pool.get_record", self_: &PoolRef = "self") -> PoolRecord;
    pub fn get_by_uuid("pool.get_by_uuid", uuid: &str = "uuid") -> PoolRef;
    pub fn get_uuid("pool.get_uuid", self_: &PoolRef = "self") -> String;
    pub fn get_name_label("pool.get_name_label", self_: &PoolRef = "self") -> String;
    pub fn get_name_description("pool.get_name_description", self_: &PoolRef = "self") -> String;
    pub fn get_master("pool.get_master", self_: &PoolRef = "self") -> HostRef;
    pub fn get_default_sr("pool.get_default_SR", self_: &PoolRef = "self") -> SrRef;
    pub fn get_suspend_image_sr("pool.get_suspend_image_SR", self_: &PoolRef = "self") -> SrRef;
    pub fn get_crash_dump_sr("pool.get_crash_dump_SR", self_: &PoolRef = "self") -> SrRef;
    pub fn get_other_config(
        "pool.get_other_config",
        self_: &PoolRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_ha_enabled("pool.get_ha_enabled", self_: &PoolRef = "self") -> bool;
    pub fn get_ha_configuration(
        "pool.get_ha_configuration",
        self_: &PoolRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_ha_statefiles("pool.get_ha_statefiles", self_: &PoolRef = "self") -> Vec<String>;
    pub fn get_ha_host_failures_to_tolerate(
        "pool.get_ha_host_failures_to_tolerate",
        self_: &PoolRef = "self",
    ) -> i64;
    pub fn get_ha_plan_exists_for("pool.get_ha_plan_exists_for", self_: &PoolRef = "self") -> i64;
    pub fn get_ha_allow_overcommit(
        "pool.get_ha_allow_overcommit",
        self_: &PoolRef = "self",
    ) -> bool;
    pub fn get_ha_overcommitted("pool.get_ha_overcommitted", self_: &PoolRef = "self") -> bool;
    pub fn get_blobs("pool.get_blobs", self_: &PoolRef = "self") -> HashMap<String, BlobRef>;
    pub fn get_tags("pool.get_tags", self_: &PoolRef = "self") -> Vec<String>;
    pub fn get_gui_config(
        "pool.get_gui_config",
        self_: &PoolRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_health_check_config(
        "pool.get_health_check_config",
        self_: &PoolRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_wlb_url("pool.get_wlb_url", self_: &PoolRef = "self") -> String;
    pub fn get_wlb_username("pool.get_wlb_username", self_: &PoolRef = "self") -> String;
    pub fn get_wlb_enabled("pool.get_wlb_enabled", self_: &PoolRef = "self") -> bool;
    pub fn get_wlb_verify_cert("pool.get_wlb_verify_cert", self_: &PoolRef = "self") -> bool;
    pub fn get_redo_log_enabled("pool.get_redo_log_enabled", self_: &PoolRef = "self") -> bool;
    pub fn get_redo_log_vdi("pool.get_redo_log_vdi", self_: &PoolRef = "self") -> VdiRef;
    pub fn get_vswitch_controller(
        "pool.get_vswitch_controller",
        self_: &PoolRef = "self",
    ) -> String;
    pub fn get_restrictions(
        "pool.get_restrictions",
        self_: &PoolRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_metadata_vdis("pool.get_metadata_VDIs", self_: &PoolRef = "self") -> Vec<VdiRef>;
    pub fn get_ha_cluster_stack("pool.get_ha_cluster_stack", self_: &PoolRef = "self") -> String;
    pub fn get_allowed_operations(
        "pool.get_allowed_operations",
        self_: &PoolRef = "self",
    ) -> Vec<PoolAllowedOperations>;
    pub fn get_current_operations(
        "pool.get_current_operations",
        self_: &PoolRef = "self",
    ) -> HashMap<String, PoolAllowedOperations>;
    pub fn get_guest_agent_config(
        "pool.get_guest_agent_config",
        self_: &PoolRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_cpu_info("pool.get_cpu_info", self_: &PoolRef = "self") -> HashMap<String, String>;
    pub fn get_policy_no_vendor_device(
        "pool.get_policy_no_vendor_device",
        self_: &PoolRef = "self",
    ) -> bool;
    pub fn get_live_patching_disabled(
        "pool.get_live_patching_disabled",
        self_: &PoolRef = "self",
    ) -> bool;
    pub fn get_igmp_snooping_enabled(
        "pool.get_igmp_snooping_enabled",
        self_: &PoolRef = "self",
    ) -> bool;
    pub fn get_uefi_certificates("pool.get_uefi_certificates", self_: &PoolRef = "self") -> String;
    pub fn get_custom_uefi_certificates(
        "pool.get_custom_uefi_certificates",
        self_: &PoolRef = "self",
    ) -> String;
    pub fn get_is_psr_pending("pool.get_is_psr_pending", self_: &PoolRef = "self") -> bool;
    pub fn get_tls_verification_enabled(
        "pool.get_tls_verification_enabled",
        self_: &PoolRef = "self",
    ) -> bool;
    pub fn get_repositories(
        "pool.get_repositories",
        self_: &PoolRef = "self",
    ) -> Vec<RepositoryRef>;
    pub fn get_client_certificate_auth_enabled(
        "pool.get_client_certificate_auth_enabled",
        self_: &PoolRef = "self",
    ) -> bool;
    pub fn get_client_certificate_auth_name(
        "pool.get_client_certificate_auth_name",
        self_: &PoolRef = "self",
    ) -> String;
    pub fn get_repository_proxy_url(
        "pool.get_repository_proxy_url",
        self_: &PoolRef = "self",
    ) -> String;
    pub fn get_repository_proxy_username(
        "pool.get_repository_proxy_username",
        self_: &PoolRef = "self",
    ) -> String;
    pub fn get_repository_proxy_password(
        "pool.get_repository_proxy_password",
        self_: &PoolRef = "self",
    ) -> SecretRef;
    pub fn get_migration_compression(
        "pool.get_migration_compression",
        self_: &PoolRef = "self",
    ) -> bool;
    pub fn get_coordinator_bias("pool.get_coordinator_bias", self_: &PoolRef = "self") -> bool;
    pub fn get_local_auth_max_threads(
        "pool.get_local_auth_max_threads",
        self_: &PoolRef = "self",
    ) -> i64;
    pub fn get_ext_auth_max_threads(
        "pool.get_ext_auth_max_threads",
        self_: &PoolRef = "self",
    ) -> i64;
    pub fn get_telemetry_uuid("pool.get_telemetry_uuid", self_: &PoolRef = "self") -> SecretRef;
    pub fn get_telemetry_frequency(
        "pool.get_telemetry_frequency",
        self_: &PoolRef = "self",
    ) -> TelemetryFrequency;
    pub fn get_telemetry_next_collection(
        "pool.get_telemetry_next_collection",
        self_: &PoolRef = "self",
    ) -> DateTime<Utc>;
    pub fn get_last_update_sync(
        "pool.get_last_update_sync",
        self_: &PoolRef = "self",
    ) -> DateTime<Utc>;
    pub fn get_update_sync_frequency(
        "pool.get_update_sync_frequency",
        self_: &PoolRef = "self",
    ) -> UpdateSyncFrequency;
    pub fn get_update_sync_day("pool.get_update_sync_day", self_: &PoolRef = "self") -> i64;
    pub fn get_update_sync_enabled(
        "pool.get_update_sync_enabled",
        self_: &PoolRef = "self",
    ) -> bool;
    pub fn set_name_label(
        "pool.set_name_label",
        self_: &PoolRef = "self",
        value: &str = "value",
    ) -> ();
    pub fn set_name_description(
        "pool.set_name_description",
        self_: &PoolRef = "self",
        value: &str = "value",
    ) -> ();
    pub fn set_default_sr(
        "pool.set_default_SR",
        self_: &PoolRef = "self",
        value: &SrRef = "value",
    ) -> ();
    pub fn set_suspend_image_sr(
        "pool.set_suspend_image_SR",
        self_: &PoolRef = "self",
        value: &SrRef = "value",
    ) -> ();
    pub fn set_crash_dump_sr(
        "pool.set_crash_dump_SR",
        self_: &PoolRef = "self",
        value: &SrRef = "value",
    ) -> ();
    pub fn set_other_config(
        "pool.set_other_config",
        self_: &PoolRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_other_config(
        "pool.add_to_other_config",
        self_: &PoolRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_other_config(
        "pool.remove_from_other_config",
        self_: &PoolRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn set_ha_host_failures_to_tolerate(
        "pool.set_ha_host_failures_to_tolerate",
        self_: &PoolRef = "self",
        value: i64 = "value",
    ) -> (), async async_set_ha_host_failures_to_tolerate;
    pub fn set_ha_allow_overcommit(
        "pool.set_ha_allow_overcommit",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> ();
    pub fn set_tags("pool.set_tags", self_: &PoolRef = "self", value: &[String] = "value") -> ();
    pub fn add_tags("pool.add_tags", self_: &PoolRef = "self", value: &str = "value") -> ();
    pub fn remove_tags("pool.remove_tags", self_: &PoolRef = "self", value: &str = "value") -> ();
    pub fn set_gui_config(
        "pool.set_gui_config",
        self_: &PoolRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_gui_config(
        "pool.add_to_gui_config",
        self_: &PoolRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_gui_config(
        "pool.remove_from_gui_config",
        self_: &PoolRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn set_health_check_config(
        "pool.set_health_check_config",
        self_: &PoolRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_health_check_config(
        "pool.add_to_health_check_config",
        self_: &PoolRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_health_check_config(
        "pool.remove_from_health_check_config",
        self_: &PoolRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn set_wlb_enabled(
        "pool.set_wlb_enabled",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> ();
    pub fn set_wlb_verify_cert(
        "pool.set_wlb_verify_cert",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> ();
    pub fn set_vswitch_controller(
        "pool.set_vswitch_controller",
        address: &str = "address",
    ) -> (), async async_set_vswitch_controller;
    pub fn add_to_guest_agent_config(
        "pool.add_to_guest_agent_config",
        self_: &PoolRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> (), async async_add_to_guest_agent_config;
    pub fn remove_from_guest_agent_config(
        "pool.remove_from_guest_agent_config",
        self_: &PoolRef = "self",
        key: &str = "key",
    ) -> (), async async_remove_from_guest_agent_config;
    pub fn set_policy_no_vendor_device(
        "pool.set_policy_no_vendor_device",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> ();
    pub fn set_live_patching_disabled(
        "pool.set_live_patching_disabled",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> ();
    pub fn set_igmp_snooping_enabled(
        "pool.set_igmp_snooping_enabled",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> (), async async_set_igmp_snooping_enabled;
    pub fn set_uefi_certificates(
        "pool.set_uefi_certificates",
        self_: &PoolRef = "self",
        value: &str = "value",
    ) -> (), async async_set_uefi_certificates;
    pub fn set_custom_uefi_certificates(
        "pool.set_custom_uefi_certificates",
        self_: &PoolRef = "self",
        value: &str = "value",
    ) -> (), async async_set_custom_uefi_certificates;
    pub fn set_is_psr_pending(
        "pool.set_is_psr_pending",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> ();
    pub fn set_repositories(
        "pool.set_repositories",
        self_: &PoolRef = "self",
        value: &[RepositoryRef] = "value",
    ) -> (), async async_set_repositories;
    pub fn set_migration_compression(
        "pool.set_migration_compression",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> ();
    pub fn set_coordinator_bias(
        "pool.set_coordinator_bias",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> ();
    pub fn set_local_auth_max_threads(
        "pool.set_local_auth_max_threads",
        self_: &PoolRef = "self",
        value: i64 = "value",
    ) -> ();
    pub fn set_ext_auth_max_threads(
        "pool.set_ext_auth_max_threads",
        self_: &PoolRef = "self",
        value: i64 = "value",
    ) -> ();
    pub fn set_telemetry_next_collection(
        "pool.set_telemetry_next_collection",
        self_: &PoolRef = "self",
        value: DateTime<Utc> = "value",
    ) -> (), async async_set_telemetry_next_collection;
    pub fn set_update_sync_enabled(
        "pool.set_update_sync_enabled",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> (), async async_set_update_sync_enabled;
    /// Instruct host to join a new pool
    ///
    /// Errors:
    /// JOINING_HOST_CANNOT_CONTAIN_SHARED_SRS - The server joining the pool cannot contain any
    /// shared storage.
    pub fn join(
        "pool.join",
        master_address: &str = "master_address",
        master_username: &str = "master_username",
        master_password: &str = "master_password",
    ) -> (), async async_join;
    /// Instruct host to join a new pool
    pub fn join_force(
        "pool.join_force",
        master_address: &str = "master_address",
        master_username: &str = "master_username",
        master_password: &str = "master_password",
    ) -> (), async async_join_force;
    /// Instruct a pool master to eject a host from the pool
    pub fn eject("pool.eject", host: &HostRef = "host") -> (), async async_eject;
    /// Instruct host that's currently a slave to transition to being master
    pub fn emergency_transition_to_master("pool.emergency_transition_to_master") -> ();
    /// Instruct a slave already in a pool that the master has changed
    pub fn emergency_reset_master(
        "pool.emergency_reset_master",
        master_address: &str = "master_address",
    ) -> ();
    /// Instruct a pool master, M, to try and contact its slaves and, if slaves are in emergency
    /// mode, reset their master address to M.
    pub fn recover_slaves("pool.recover_slaves") -> Vec<HostRef>, async async_recover_slaves;
    /// Create PIFs, mapping a network to the same physical interface/VLAN on each host. This call
    /// is deprecated: use Pool.create_VLAN_from_PIF instead.
    ///
    /// Errors:
    /// VLAN_TAG_INVALID - You tried to create a VLAN, but the tag you gave was invalid -- it must
    /// be between 0 and 4094. The parameter echoes the VLAN tag you gave.
    pub fn create_vlan(
        "pool.create_VLAN",
        device: &str = "device",
        network: &NetworkRef = "network",
        vlan: i64 = "VLAN",
    ) -> Vec<PifRef>, async async_create_vlan;
    /// Reconfigure the management network interface for all Hosts in the Pool
    ///
    /// Errors:
    /// HA_IS_ENABLED - The operation could not be performed because HA is enabled on the Pool
    /// PIF_NOT_PRESENT - This host has no PIF on the given network.
    /// CANNOT_PLUG_BOND_SLAVE - This PIF is a bond member and cannot be plugged.
    /// PIF_INCOMPATIBLE_PRIMARY_ADDRESS_TYPE - The primary address types are not compatible
    /// PIF_HAS_NO_NETWORK_CONFIGURATION - PIF has no IP configuration (mode currently set to
    /// 'none')
    /// PIF_HAS_NO_V6_NETWORK_CONFIGURATION - PIF has no IPv6 configuration (mode currently set to
    /// 'none')
    pub fn management_reconfigure(
        "pool.management_reconfigure",
        network: &NetworkRef = "network",
    ) -> (), async async_management_reconfigure;
    /// Create a pool-wide VLAN by taking the PIF.
    ///
    /// Errors:
    /// VLAN_TAG_INVALID - You tried to create a VLAN, but the tag you gave was invalid -- it must
    /// be between 0 and 4094. The parameter echoes the VLAN tag you gave.
    pub fn create_vlan_from_pif(
        "pool.create_VLAN_from_PIF",
        pif: &PifRef = "pif",
        network: &NetworkRef = "network",
        vlan: i64 = "VLAN",
    ) -> Vec<PifRef>, async async_create_vlan_from_pif;
    /// Turn on High Availability mode
    pub fn enable_ha(
        "pool.enable_ha",
        heartbeat_srs: &[SrRef] = "heartbeat_srs",
        configuration: &HashMap<String, String> = "configuration",
    ) -> (), async async_enable_ha;
    /// Turn off High Availability mode
    pub fn disable_ha("pool.disable_ha") -> (), async async_disable_ha;
    /// Forcibly synchronise the database now
    pub fn sync_database("pool.sync_database") -> (), async async_sync_database;
    /// Perform an orderly handover of the role of master to the referenced host.
    pub fn designate_new_master(
        "pool.designate_new_master",
        host: &HostRef = "host",
    ) -> (), async async_designate_new_master;
    /// When this call returns the VM restart logic will not run for the requested number of
    /// seconds. If the argument is zero then the restart thread is immediately unblocked
    pub fn ha_prevent_restarts_for("pool.ha_prevent_restarts_for", seconds: i64 = "seconds") -> ();
    /// Returns true if a VM failover plan exists for up to 'n' host failures
    pub fn ha_failover_plan_exists("pool.ha_failover_plan_exists", n: i64 = "n") -> bool;
    /// Returns the maximum number of host failures we could tolerate before we would be unable to
    /// restart configured VMs
    pub fn ha_compute_max_host_failures_to_tolerate(
        "pool.ha_compute_max_host_failures_to_tolerate",
    ) -> i64;
    /// Returns the maximum number of host failures we could tolerate before we would be unable to
    /// restart the provided VMs
    pub fn ha_compute_hypothetical_max_host_failures_to_tolerate(
        "pool.ha_compute_hypothetical_max_host_failures_to_tolerate",
        configuration: &HashMap<VmRef, String> = "configuration",
    ) -> i64;
    /// Return a VM failover plan assuming a given subset of hosts fail
    pub fn ha_compute_vm_failover_plan(
        "pool.ha_compute_vm_failover_plan",
        failed_hosts: &[HostRef] = "failed_hosts",
        failed_vms: &[VmRef] = "failed_vms",
    ) -> HashMap<VmRef, HashMap<String, String>>;
    /// Create a placeholder for a named binary blob of data that is associated with this pool
    pub fn create_new_blob(
        "pool.create_new_blob",
        pool: &PoolRef = "pool",
        name: &str = "name",
        mime_type: &str = "mime_type",
        public: bool = "public",
    ) -> BlobRef, async async_create_new_blob;
    /// This call enables external authentication on all the hosts of the pool
    pub fn enable_external_auth(
        "pool.enable_external_auth",
        pool: &PoolRef = "pool",
        config: &HashMap<String, String> = "config",
        service_name: &str = "service_name",
        auth_type: &str = "auth_type",
    ) -> ();
    /// This call disables external authentication on all the hosts of the pool
    pub fn disable_external_auth(
        "pool.disable_external_auth",
        pool: &PoolRef = "pool",
        config: &HashMap<String, String> = "config",
    ) -> ();
    /// This call asynchronously detects if the external authentication configuration in any slave
    /// is different from that in the master and raises appropriate alerts
    pub fn detect_nonhomogeneous_external_auth(
        "pool.detect_nonhomogeneous_external_auth",
        pool: &PoolRef = "pool",
    ) -> ();
    /// Initializes workload balancing monitoring on this pool with the specified wlb server
    pub fn initialize_wlb(
        "pool.initialize_wlb",
        wlb_url: &str = "wlb_url",
        wlb_username: &str = "wlb_username",
        wlb_password: &str = "wlb_password",
        xenserver_username: &str = "xenserver_username",
        xenserver_password: &str = "xenserver_password",
    ) -> (), async async_initialize_wlb;
    /// Permanently deconfigures workload balancing monitoring on this pool
    pub fn deconfigure_wlb("pool.deconfigure_wlb") -> (), async async_deconfigure_wlb;
    /// Sets the pool optimization criteria for the workload balancing server
    pub fn send_wlb_configuration(
        "pool.send_wlb_configuration",
        config: &HashMap<String, String> = "config",
    ) -> (), async async_send_wlb_configuration;
    /// Retrieves the pool optimization criteria from the workload balancing server
    pub fn retrieve_wlb_configuration(
        "pool.retrieve_wlb_configuration",
    ) -> HashMap<String, String>, async async_retrieve_wlb_configuration;
    /// Retrieves vm migrate recommendations for the pool from the workload balancing server
    pub fn retrieve_wlb_recommendations(
        "pool.retrieve_wlb_recommendations",
    ) -> HashMap<VmRef, Vec<String>>, async async_retrieve_wlb_recommendations;
    /// Send the given body to the given host and port, using HTTPS, and print the response.  This
    /// is used for debugging the SSL layer.
    pub fn send_test_post(
        "pool.send_test_post",
        host: &str = "host",
        port: i64 = "port",
        body: &str = "body",
    ) -> String, async async_send_test_post;
    /// Install a TLS CA certificate, pool-wide.
    pub fn certificate_install(
        "pool.certificate_install",
        name: &str = "name",
        cert: &str = "cert",
    ) -> (), async async_certificate_install;
    /// Remove a pool-wide TLS CA certificate.
    pub fn certificate_uninstall(
        "pool.certificate_uninstall",
        name: &str = "name",
    ) -> (), async async_certificate_uninstall;
    /// List the names of all installed TLS CA certificates.
    pub fn certificate_list("pool.certificate_list") -> Vec<String>, async async_certificate_list;
    /// Install a TLS CA certificate, pool-wide.
    pub fn install_ca_certificate(
        "pool.install_ca_certificate",
        name: &str = "name",
        cert: &str = "cert",
    ) -> (), async async_install_ca_certificate;
    /// Remove a pool-wide TLS CA certificate.
    pub fn uninstall_ca_certificate(
        "pool.uninstall_ca_certificate",
        name: &str = "name",
    ) -> (), async async_uninstall_ca_certificate;
    /// Install a TLS CA-issued Certificate Revocation List, pool-wide.
    pub fn crl_install(
        "pool.crl_install",
        name: &str = "name",
        cert: &str = "cert",
    ) -> (), async async_crl_install;
    /// Remove a pool-wide TLS CA-issued Certificate Revocation List.
    pub fn crl_uninstall(
        "pool.crl_uninstall",
        name: &str = "name",
    ) -> (), async async_crl_uninstall;
    /// List the names of all installed TLS CA-issued Certificate Revocation Lists.
    pub fn crl_list("pool.crl_list") -> Vec<String>, async async_crl_list;
    /// Copy the TLS CA certificates and CRLs of the master to all slaves.
    pub fn certificate_sync("pool.certificate_sync") -> (), async async_certificate_sync;
    /// Enable TLS server certificate verification
    pub fn enable_tls_verification("pool.enable_tls_verification") -> ();
    /// Enable the redo log on the given SR and start using it, unless HA is enabled.
    pub fn enable_redo_log(
        "pool.enable_redo_log",
        sr: &SrRef = "sr",
    ) -> (), async async_enable_redo_log;
    /// Disable the redo log if in use, unless HA is enabled.
    pub fn disable_redo_log("pool.disable_redo_log") -> (), async async_disable_redo_log;
    /// This call tests if a location is valid
    pub fn test_archive_target(
        "pool.test_archive_target",
        self_: &PoolRef = "self",
        config: &HashMap<String, String> = "config",
    ) -> String;
    /// This call attempts to enable pool-wide local storage caching
    pub fn enable_local_storage_caching(
        "pool.enable_local_storage_caching",
        self_: &PoolRef = "self",
    ) -> (), async async_enable_local_storage_caching;
    /// This call disables pool-wide local storage caching
    pub fn disable_local_storage_caching(
        "pool.disable_local_storage_caching",
        self_: &PoolRef = "self",
    ) -> (), async async_disable_local_storage_caching;
    pub fn get_license_state(
        "pool.get_license_state",
        self_: &PoolRef = "self",
    ) -> HashMap<String, String>, async async_get_license_state;
    /// Apply an edition to all hosts in the pool
    pub fn apply_edition(
        "pool.apply_edition",
        self_: &PoolRef = "self",
        edition: &str = "edition",
    ) -> (), async async_apply_edition;
    /// Sets ssl_legacy true on each host, pool-master last. See Host.ssl_legacy and
    /// Host.set_ssl_legacy.
    pub fn enable_ssl_legacy(
        "pool.enable_ssl_legacy",
        self_: &PoolRef = "self",
    ) -> (), async async_enable_ssl_legacy;
    /// Sets ssl_legacy false on each host, pool-master last. See Host.ssl_legacy and
    /// Host.set_ssl_legacy.
    pub fn disable_ssl_legacy(
        "pool.disable_ssl_legacy",
        self_: &PoolRef = "self",
    ) -> (), async async_disable_ssl_legacy;
    /// Return true if the extension is available on the pool
    pub fn has_extension(
        "pool.has_extension",
        self_: &PoolRef = "self",
        name: &str = "name",
    ) -> bool, async async_has_extension;
    /// Errors:
    /// INTERNAL_ERROR - The server failed to handle your request, due to an internal error. The
    /// given message may give details useful for debugging the problem.
    /// HOST_IS_SLAVE - You cannot make regular API calls directly on a supporter. Please pass API
    /// calls via the coordinator host.
    /// CANNOT_CONTACT_HOST - Cannot forward messages because the server cannot be contacted. The
    /// server may be switched off or there may be network connectivity problems.
    /// HA_IS_ENABLED - The operation could not be performed because HA is enabled on the Pool
    /// NOT_SUPPORTED_DURING_UPGRADE - This operation is not supported during an upgrade.
    pub fn rotate_secret("pool.rotate_secret") -> (), async async_rotate_secret;
    /// Add a repository to the enabled set
    pub fn add_repository(
        "pool.add_repository",
        self_: &PoolRef = "self",
        value: &RepositoryRef = "value",
    ) -> (), async async_add_repository;
    /// Remove a repository from the enabled set
    pub fn remove_repository(
        "pool.remove_repository",
        self_: &PoolRef = "self",
        value: &RepositoryRef = "value",
    ) -> (), async async_remove_repository;
    /// Sync with the enabled repository
    pub fn sync_updates(
        "pool.sync_updates",
        self_: &PoolRef = "self",
        force: bool = "force",
        token: &str = "token",
        token_id: &str = "token_id",
    ) -> String, async async_sync_updates;
    /// Check if the pool is ready to be updated. If not, report the reasons.
    pub fn check_update_readiness(
        "pool.check_update_readiness",
        self_: &PoolRef = "self",
        requires_reboot: bool = "requires_reboot",
    ) -> Vec<Vec<String>>, async async_check_update_readiness;
    /// Enable client certificate authentication on the pool
    pub fn enable_client_certificate_auth(
        "pool.enable_client_certificate_auth",
        self_: &PoolRef = "self",
        name: &str = "name",
    ) -> (), async async_enable_client_certificate_auth;
    /// Disable client certificate authentication on the pool
    pub fn disable_client_certificate_auth(
        "pool.disable_client_certificate_auth",
        self_: &PoolRef = "self",
    ) -> (), async async_disable_client_certificate_auth;
    /// Configure proxy for RPM package repositories.
    pub fn configure_repository_proxy(
        "pool.configure_repository_proxy",
        self_: &PoolRef = "self",
        url: &str = "url",
        username: &str = "username",
        password: &str = "password",
    ) -> (), async async_configure_repository_proxy;
    /// Disable the proxy for RPM package repositories.
    pub fn disable_repository_proxy(
        "pool.disable_repository_proxy",
        self_: &PoolRef = "self",
    ) -> (), async async_disable_repository_proxy;
    /// updates all the host firewalls in the pool to open or close port 80 depending on the value
    pub fn set_https_only(
        "pool.set_https_only",
        self_: &PoolRef = "self",
        value: bool = "value",
    ) -> (), async async_set_https_only;
    /// Assign a new UUID to telemetry data.
    pub fn reset_telemetry_uuid(
        "pool.reset_telemetry_uuid",
        self_: &PoolRef = "self",
    ) -> (), async async_reset_telemetry_uuid;
    /// Configure periodic update synchronization to sync updates from a remote CDN
    pub fn configure_update_sync(
        "pool.configure_update_sync",
        self_: &PoolRef = "self",
        update_sync_frequency: &UpdateSyncFrequency = "update_sync_frequency",
        update_sync_day: i64 = "update_sync_day",
    ) -> (), async async_configure_update_sync;
    pub fn get_all("pool.get_all") -> Vec<PoolRef>;
    pub fn get_all_records("pool.get_all_records") -> HashMap<PoolRef, PoolRecord>;
}
