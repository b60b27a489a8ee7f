//! `host`: a physical host.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::*;
use crate::{record, rpc};

record! {
    pub struct HostRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// a human-readable name
        name_label: String = "name_label",
        /// a notes field containing human-readable description
        name_description: String = "name_description",
        /// Virtualization memory overhead (bytes).
        memory_overhead: i64 = "memory_overhead",
        /// list of the operations allowed in this state. This list is advisory only and the server
        /// state may have changed by the time this field is read by a client.
        allowed_operations: Vec<HostAllowedOperations> = "allowed_operations",
        /// links each of the running tasks using this object (by reference) to a current_operation
        /// enum which describes the nature of the task.
        current_operations: HashMap<String, HostAllowedOperations> = "current_operations",
        /// major version number
        api_version_major: i64 = "API_version_major",
        /// minor version number
        api_version_minor: i64 = "API_version_minor",
        /// identification of vendor
        api_version_vendor: String = "API_version_vendor",
        /// details of vendor implementation
        api_version_vendor_implementation: HashMap<String, String> = "API_version_vendor_implementation",
        /// True if the host is currently enabled
        enabled: bool = "enabled",
        /// version strings
        software_version: HashMap<String, String> = "software_version",
        /// additional configuration
        other_config: HashMap<String, String> = "other_config",
        /// Xen capabilities
        capabilities: Vec<String> = "capabilities",
        /// The CPU configuration on this host.  May contain keys such as "nr_nodes",
        /// "sockets_per_node", "cores_per_socket", or
        /// "threads_per_core"
        cpu_configuration: HashMap<String, String> = "cpu_configuration",
        /// Scheduler policy currently in force on this host
        sched_policy: String = "sched_policy",
        /// a list of the bootloaders installed on the machine
        supported_bootloaders: Vec<String> = "supported_bootloaders",
        /// list of VMs currently resident on host
        resident_vms: Vec<VmRef> = "resident_VMs",
        /// logging configuration
        logging: HashMap<String, String> = "logging",
        /// physical network interfaces
        pifs: Vec<PifRef> = "PIFs",
        /// The SR in which VDIs for suspend images are created
        suspend_image_sr: SrRef = "suspend_image_sr",
        /// The SR in which VDIs for crash dumps are created
        crash_dump_sr: SrRef = "crash_dump_sr",
        /// Set of host crash dumps
        crashdumps: Vec<HostCrashdumpRef> = "crashdumps",
        /// Set of host patches
        patches: Vec<HostPatchRef> = "patches",
        /// Set of updates
        updates: Vec<PoolUpdateRef> = "updates",
        /// physical blockdevices
        pbds: Vec<PbdRef> = "PBDs",
        /// The physical CPUs on this host
        host_cpus: Vec<HostCpuRef> = "host_CPUs",
        /// Details about the physical CPUs on this host
        cpu_info: HashMap<String, String> = "cpu_info",
        /// The hostname of this host
        hostname: String = "hostname",
        /// The address by which this host can be contacted from any other host in the pool
        address: String = "address",
        /// metrics associated with this host
        metrics: HostMetricsRef = "metrics",
        /// State of the current license
        license_params: HashMap<String, String> = "license_params",
        /// The set of statefiles accessible from this host
        ha_statefiles: Vec<String> = "ha_statefiles",
        /// The set of hosts visible via the network from this host
        ha_network_peers: Vec<String> = "ha_network_peers",
        /// Binary blobs associated with this host
        blobs: HashMap<String, BlobRef> = "blobs",
        /// user-specified tags for categorization purposes
        tags: Vec<String> = "tags",
        /// type of external authentication service configured; empty if none configured.
        external_auth_type: String = "external_auth_type",
        /// name of external authentication service configured; empty if none configured.
        external_auth_service_name: String = "external_auth_service_name",
        /// configuration specific to external authentication service
        external_auth_configuration: HashMap<String, String> = "external_auth_configuration",
        /// Product edition
        edition: String = "edition",
        /// Contact information of the license server
        license_server: HashMap<String, String> = "license_server",
        /// BIOS strings
        bios_strings: HashMap<String, String> = "bios_strings",
        /// The power on mode
        power_on_mode: String = "power_on_mode",
        /// The power on config
        power_on_config: HashMap<String, String> = "power_on_config",
        /// The SR that is used as a local cache
        local_cache_sr: SrRef = "local_cache_sr",
        /// Information about chipset features
        chipset_info: HashMap<String, String> = "chipset_info",
        /// List of PCI devices in the host
        pcis: Vec<PciRef> = "PCIs",
        /// List of physical GPUs in the host
        pgpus: Vec<PgpuRef> = "PGPUs",
        /// List of physical USBs in the host
        pusbs: Vec<PusbRef> = "PUSBs",
        /// Allow SSLv3 protocol and ciphersuites as used by older server versions. This controls
        /// both incoming and outgoing connections. When this is set to a different value, the host
        /// immediately restarts its SSL/TLS listening service; typically this takes less than a
        /// second but existing connections to it will be broken. API login sessions will remain
        /// valid.
        ssl_legacy: bool = "ssl_legacy",
        /// VCPUs params to apply to all resident guests
        guest_vcpus_params: HashMap<String, String> = "guest_VCPUs_params",
        /// indicates whether the host is configured to output its console to a physical display
        /// device
        display: HostDisplay = "display",
        /// The set of versions of the virtual hardware platform that the host can offer to its
        /// guests
        virtual_hardware_platform_versions: Vec<i64> = "virtual_hardware_platform_versions",
        /// The control domain (domain 0)
        control_domain: VmRef = "control_domain",
        /// List of updates which require reboot
        updates_requiring_reboot: Vec<PoolUpdateRef> = "updates_requiring_reboot",
        /// List of features available on this host
        features: Vec<FeatureRef> = "features",
        /// The initiator IQN for the host
        iscsi_iqn: String = "iscsi_iqn",
        /// Specifies whether multipathing is enabled
        multipathing: bool = "multipathing",
        /// The UEFI certificates allowing Secure Boot
        uefi_certificates: String = "uefi_certificates",
        /// List of certificates installed in the host
        certificates: Vec<CertificateRef> = "certificates",
        /// List of all available product editions
        editions: Vec<String> = "editions",
        /// The set of pending mandatory guidances after applying updates, which must be applied, as
        /// otherwise there may be e.g. VM failures
        pending_guidances: Vec<UpdateGuidances> = "pending_guidances",
        /// True if this host has TLS verifcation enabled
        tls_verification_enabled: bool = "tls_verification_enabled",
        /// Date and time when the last software update was applied
        last_software_update: DateTime<Utc> = "last_software_update",
        /// Reflects whether port 80 is open (false) or not (true)
        https_only: bool = "https_only",
        /// Default as 'unknown', 'yes' if the host is up to date with updates
        /// synced from remote CDN, otherwise 'no'
        latest_synced_updates_applied: LatestSyncedUpdatesAppliedState = "latest_synced_updates_applied",
        /// NUMA-aware VM memory and vCPU placement policy
        numa_affinity_policy: HostNumaAffinityPolicy = "numa_affinity_policy",
        /// The set of pending recommended guidances after applying updates, which most users should
        /// follow to make the updates effective, but if not followed, will not cause a failure
        pending_guidances_recommended: Vec<UpdateGuidances> = "pending_guidances_recommended",
        /// The set of pending full guidances after applying updates, which a user should follow to
        /// make some updates, e.g. specific hardware drivers or CPU features, fully effective, but
        /// the 'average user' doesn't need to
        pending_guidances_full: Vec<UpdateGuidances> = "pending_guidances_full",
        /// The SHA256 checksum of updateinfo of the most recently applied update on the host
        last_update_hash: String = "last_update_hash",
    }
}

rpc! {
    pub fn get_record("host.get_record", self_: &HostRef = "self") -> HostRecord;
    pub fn get_by_uuid("host.get_by_uuid", uuid: &str = "uuid") -> HostRef;
    pub fn get_by_name_label("host.get_by_name_label", label: &str = "label") -> Vec<HostRef>;
    /// Destroy specified host record in database
    pub fn destroy("host.destroy", self_: &HostRef = "self") -> (), async async_destroy;
    pub fn get_uuid("host.get_uuid", self_: &HostRef = "self") -> String;
    pub fn get_name_label("host.get_name_label", self_: &HostRef = "self") -> String;
    pub fn get_name_description("host.get_name_description", self_: &HostRef = "self") -> String;
    pub fn get_memory_overhead("host.get_memory_overhead", self_: &HostRef = "self") -> i64;
    pub fn get_allowed_operations(
        "host.get_allowed_operations",
        self_: &HostRef = "self",
    ) -> Vec<HostAllowedOperations>;
    pub fn get_current_operations(
        "host.get_current_operations",
        self_: &HostRef = "self",
    ) -> HashMap<String, HostAllowedOperations>;
    pub fn get_api_version_major("host.get_API_version_major", self_: &HostRef = "self") -> i64;
    pub fn get_api_version_minor("host.get_API_version_minor", self_: &HostRef = "self") -> i64;
    pub fn get_api_version_vendor(
        "host.get_API_version_vendor",
        self_: &HostRef = "self",
    ) -> String;
    pub fn get_api_version_vendor_implementation(
        "host.get_API_version_vendor_implementation",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_enabled("host.get_enabled", self_: &HostRef = "self") -> bool;
    pub fn get_software_version(
        "host.get_software_version",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_other_config(
        "host.get_other_config",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_capabilities("host.get_capabilities", self_: &HostRef = "self") -> Vec<String>;
    pub fn get_cpu_configuration(
        "host.get_cpu_configuration",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_sched_policy("host.get_sched_policy", self_: &HostRef = "self") -> String;
    pub fn get_supported_bootloaders(
        "host.get_supported_bootloaders",
        self_: &HostRef = "self",
    ) -> Vec<String>;
    pub fn get_resident_vms("host.get_resident_VMs", self_: &HostRef = "self") -> Vec<VmRef>;
    pub fn get_logging("host.get_logging", self_: &HostRef = "self") -> HashMap<String, String>;
    pub fn get_pifs("host.get_PIFs", self_: &HostRef = "self") -> Vec<PifRef>;
    pub fn get_suspend_image_sr("host.get_suspend_image_sr", self_: &HostRef = "self") -> SrRef;
    pub fn get_crash_dump_sr("host.get_crash_dump_sr", self_: &HostRef = "self") -> SrRef;
    pub fn get_crashdumps("host.get_crashdumps", self_: &HostRef = "self") -> Vec<HostCrashdumpRef>;
    pub fn get_patches("host.get_patches", self_: &HostRef = "self") -> Vec<HostPatchRef>;
    pub fn get_updates("host.get_updates", self_: &HostRef = "self") -> Vec<PoolUpdateRef>;
    pub fn get_pbds("host.get_PBDs", self_: &HostRef = "self") -> Vec<PbdRef>;
    pub fn get_host_cpus("host.get_host_CPUs", self_: &HostRef = "self") -> Vec<HostCpuRef>;
    pub fn get_cpu_info("host.get_cpu_info", self_: &HostRef = "self") -> HashMap<String, String>;
    pub fn get_hostname("host.get_hostname", self_: &HostRef = "self") -> String;
    pub fn get_address("host.get_address", self_: &HostRef = "self") -> String;
    pub fn get_metrics("host.get_metrics", self_: &HostRef = "self") -> HostMetricsRef;
    pub fn get_license_params(
        "host.get_license_params",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_ha_statefiles("host.get_ha_statefiles", self_: &HostRef = "self") -> Vec<String>;
    pub fn get_ha_network_peers(
        "host.get_ha_network_peers",
        self_: &HostRef = "self",
    ) -> Vec<String>;
    pub fn get_blobs("host.get_blobs", self_: &HostRef = "self") -> HashMap<String, BlobRef>;
    pub fn get_tags("host.get_tags", self_: &HostRef = "self") -> Vec<String>;
    pub fn get_external_auth_type(
        "host.get_external_auth_type",
        self_: &HostRef = "self",
    ) -> String;
    pub fn get_external_auth_service_name(
        "host.get_external_auth_service_name",
        self_: &HostRef = "self",
    ) -> String;
    pub fn get_external_auth_configuration(
        "host.get_external_auth_configuration",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_edition("host.get_edition", self_: &HostRef = "self") -> String;
    pub fn get_license_server(
        "host.get_license_server",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_bios_strings(
        "host.get_bios_strings",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_power_on_mode("host.get_power_on_mode", self_: &HostRef = "self") -> String;
    pub fn get_power_on_config(
        "host.get_power_on_config",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_local_cache_sr("host.get_local_cache_sr", self_: &HostRef = "self") -> SrRef;
    pub fn get_chipset_info(
        "host.get_chipset_info",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_pcis("host.get_PCIs", self_: &HostRef = "self") -> Vec<PciRef>;
    pub fn get_pgpus("host.get_PGPUs", self_: &HostRef = "self") -> Vec<PgpuRef>;
    pub fn get_pusbs("host.get_PUSBs", self_: &HostRef = "self") -> Vec<PusbRef>;
    pub fn get_ssl_legacy("host.get_ssl_legacy", self_: &HostRef = "self") -> bool;
    pub fn get_guest_vcpus_params(
        "host.get_guest_VCPUs_params",
        self_: &HostRef = "self",
    ) -> HashMap<String, String>;
    pub fn get_display("host.get_display", self_: &HostRef = "self") -> HostDisplay;
    pub fn get_virtual_hardware_platform_versions(
        "host.get_virtual_hardware_platform_versions",
        self_: &HostRef = "self",
    ) -> Vec<i64>;
    pub fn get_control_domain("host.get_control_domain", self_: &HostRef = "self") -> VmRef;
    pub fn get_updates_requiring_reboot(
        "host.get_updates_requiring_reboot",
        self_: &HostRef = "self",
    ) -> Vec<PoolUpdateRef>;
    pub fn get_features("host.get_features", self_: &HostRef = "self") -> Vec<FeatureRef>;
    pub fn get_iscsi_iqn("host.get_iscsi_iqn", self_: &HostRef = "self") -> String;
    pub fn get_multipathing("host.get_multipathing", self_: &HostRef = "self") -> bool;
    pub fn get_uefi_certificates("host.get_uefi_certificates", self_: &HostRef = "self") -> String;
    pub fn get_certificates(
        "host.get_certificates",
        self_: &HostRef = "self",
    ) -> Vec<CertificateRef>;
    pub fn get_editions("host.get_editions", self_: &HostRef = "self") -> Vec<String>;
    pub fn get_pending_guidances(
        "host.get_pending_guidances",
        self_: &HostRef = "self",
    ) -> Vec<UpdateGuidances>;
    pub fn get_tls_verification_enabled(
        "host.get_tls_verification_enabled",
        self_: &HostRef = "self",
    ) -> bool;
    pub fn get_last_software_update(
        "host.get_last_software_update",
        self_: &HostRef = "self",
    ) -> DateTime<Utc>;
    pub fn get_https_only("host.get_https_only", self_: &HostRef = "self") -> bool;
    pub fn get_latest_synced_updates_applied(
        "host.get_latest_synced_updates_applied",
        self_: &HostRef = "self",
    ) -> LatestSyncedUpdatesAppliedState;
    pub fn get_numa_affinity_policy(
        "host.get_numa_affinity_policy",
        self_: &HostRef = "self",
    ) -> HostNumaAffinityPolicy;
    pub fn get_pending_guidances_recommended(
        "host.get_pending_guidances_recommended",
        self_: &HostRef = "self",
    ) -> Vec<UpdateGuidances>;
    pub fn get_pending_guidances_full(
        "host.get_pending_guidances_full",
        self_: &HostRef = "self",
    ) -> Vec<UpdateGuidances>;
    pub fn get_last_update_hash("host.get_last_update_hash", self_: &HostRef = "self") -> String;
    pub fn set_name_label(
        "host.set_name_label",
        self_: &HostRef = "self",
        value: &str = "value",
    ) -> ();
    pub fn set_name_description(
        "host.set_name_description",
        self_: &HostRef = "self",
        value: &str = "value",
    ) -> ();
    pub fn set_other_config(
        "host.set_other_config",
        self_: &HostRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_other_config(
        "host.add_to_other_config",
        self_: &HostRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_other_config(
        "host.remove_from_other_config",
        self_: &HostRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn set_logging(
        "host.set_logging",
        self_: &HostRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_logging(
        "host.add_to_logging",
        self_: &HostRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_logging(
        "host.remove_from_logging",
        self_: &HostRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn set_suspend_image_sr(
        "host.set_suspend_image_sr",
        self_: &HostRef = "self",
        value: &SrRef = "value",
    ) -> ();
    pub fn set_crash_dump_sr(
        "host.set_crash_dump_sr",
        self_: &HostRef = "self",
        value: &SrRef = "value",
    ) -> ();
    pub fn set_hostname("host.set_hostname", self_: &HostRef = "self", value: &str = "value") -> ();
    pub fn set_address("host.set_address", self_: &HostRef = "self", value: &str = "value") -> ();
    pub fn set_tags("host.set_tags", self_: &HostRef = "self", value: &[String] = "value") -> ();
    pub fn add_tags("host.add_tags", self_: &HostRef = "self", value: &str = "value") -> ();
    pub fn remove_tags("host.remove_tags", self_: &HostRef = "self", value: &str = "value") -> ();
    pub fn set_license_server(
        "host.set_license_server",
        self_: &HostRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_license_server(
        "host.add_to_license_server",
        self_: &HostRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_license_server(
        "host.remove_from_license_server",
        self_: &HostRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn set_power_on_mode(
        "host.set_power_on_mode",
        self_: &HostRef = "self",
        power_on_mode: &str = "power_on_mode",
        power_on_config: &HashMap<String, String> = "power_on_config",
    ) -> (), async async_set_power_on_mode;
    pub fn set_ssl_legacy(
        "host.set_ssl_legacy",
        self_: &HostRef = "self",
        value: bool = "value",
    ) -> (), async async_set_ssl_legacy;
    pub fn set_guest_vcpus_params(
        "host.set_guest_VCPUs_params",
        self_: &HostRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn add_to_guest_vcpus_params(
        "host.add_to_guest_VCPUs_params",
        self_: &HostRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn remove_from_guest_vcpus_params(
        "host.remove_from_guest_VCPUs_params",
        self_: &HostRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn set_display(
        "host.set_display",
        self_: &HostRef = "self",
        value: &HostDisplay = "value",
    ) -> ();
    pub fn set_iscsi_iqn(
        "host.set_iscsi_iqn",
        host: &HostRef = "host",
        value: &str = "value",
    ) -> (), async async_set_iscsi_iqn;
    pub fn set_multipathing(
        "host.set_multipathing",
        host: &HostRef = "host",
        value: bool = "value",
    ) -> (), async async_set_multipathing;
    pub fn set_uefi_certificates(
        "host.set_uefi_certificates",
        host: &HostRef = "host",
        value: &str = "value",
    ) -> (), async async_set_uefi_certificates;
    pub fn set_https_only(
        "host.set_https_only",
        self_: &HostRef = "self",
        value: bool = "value",
    ) -> (), async async_set_https_only;
    pub fn set_numa_affinity_policy(
        "host.set_numa_affinity_policy",
        self_: &HostRef = "self",
        value: &HostNumaAffinityPolicy = "value",
    ) -> (), async async_set_numa_affinity_policy;
    /// Puts the host into a state in which no new VMs can be started. Currently active VMs on the
    /// host continue to execute.
    pub fn disable("host.disable", host: &HostRef = "host") -> (), async async_disable;
    /// Puts the host into a state in which new VMs can be started.
    pub fn enable("host.enable", host: &HostRef = "host") -> (), async async_enable;
    /// Shutdown the host. (This function can only be called if there are no currently running VMs
    /// on the host and it is disabled.)
    pub fn shutdown("host.shutdown", host: &HostRef = "host") -> (), async async_shutdown;
    /// Reboot the host. (This function can only be called if there are no currently running VMs on
    /// the host and it is disabled.)
    pub fn reboot("host.reboot", host: &HostRef = "host") -> (), async async_reboot;
    /// Get the host xen dmesg.
    pub fn dmesg("host.dmesg", host: &HostRef = "host") -> String, async async_dmesg;
    /// Get the host xen dmesg, and clear the buffer.
    pub fn dmesg_clear(
        "host.dmesg_clear",
        host: &HostRef = "host",
    ) -> String, async async_dmesg_clear;
    pub fn get_log("host.get_log", host: &HostRef = "host") -> String, async async_get_log;
    /// Inject the given string as debugging keys into Xen
    pub fn send_debug_keys(
        "host.send_debug_keys",
        host: &HostRef = "host",
        keys: &str = "keys",
    ) -> (), async async_send_debug_keys;
    /// Run xen-bugtool --yestoall and upload the output to support
    pub fn bugreport_upload(
        "host.bugreport_upload",
        host: &HostRef = "host",
        url: &str = "url",
        options: &HashMap<String, String> = "options",
    ) -> (), async async_bugreport_upload;
    /// List all supported methods
    pub fn list_methods("host.list_methods") -> Vec<String>;
    /// Apply a new license to a host
    ///
    /// Errors:
    /// LICENSE_PROCESSING_ERROR - There was an error processing your license. Please contact your
    /// support representative.
    pub fn license_apply(
        "host.license_apply",
        host: &HostRef = "host",
        contents: &str = "contents",
    ) -> (), async async_license_apply;
    /// Apply a new license to a host
    ///
    /// Errors:
    /// LICENSE_PROCESSING_ERROR - There was an error processing your license. Please contact your
    /// support representative.
    pub fn license_add(
        "host.license_add",
        host: &HostRef = "host",
        contents: &str = "contents",
    ) -> (), async async_license_add;
    /// Remove any license file from the specified host, and switch that host to the unlicensed
    /// edition
    pub fn license_remove(
        "host.license_remove",
        host: &HostRef = "host",
    ) -> (), async async_license_remove;
    /// Attempt to power-on the host (if the capability exists).
    pub fn power_on("host.power_on", host: &HostRef = "host") -> (), async async_power_on;
    /// This call disables HA on the local host. This should only be used with extreme care.
    pub fn emergency_ha_disable("host.emergency_ha_disable", soft: bool = "soft") -> ();
    pub fn get_data_sources(
        "host.get_data_sources",
        host: &HostRef = "host",
    ) -> Vec<DataSourceRecord>;
    /// Start recording the specified data source
    pub fn record_data_source(
        "host.record_data_source",
        host: &HostRef = "host",
        data_source: &str = "data_source",
    ) -> ();
    /// Query the latest value of the specified data source
    pub fn query_data_source(
        "host.query_data_source",
        host: &HostRef = "host",
        data_source: &str = "data_source",
    ) -> f64;
    /// Forget the recorded statistics related to the specified data source
    pub fn forget_data_source_archives(
        "host.forget_data_source_archives",
        host: &HostRef = "host",
        data_source: &str = "data_source",
    ) -> ();
    /// Check this host can be evacuated.
    pub fn assert_can_evacuate(
        "host.assert_can_evacuate",
        host: &HostRef = "host",
    ) -> (), async async_assert_can_evacuate;
    pub fn get_vms_which_prevent_evacuation(
        "host.get_vms_which_prevent_evacuation",
        self_: &HostRef = "self",
    ) -> HashMap<VmRef, Vec<String>>, async async_get_vms_which_prevent_evacuation;
    pub fn get_uncooperative_resident_vms(
        "host.get_uncooperative_resident_VMs",
        self_: &HostRef = "self",
    ) -> Vec<VmRef>, async async_get_uncooperative_resident_vms;
    /// Migrate all VMs off of this host, where possible.
    pub fn evacuate(
        "host.evacuate",
        host: &HostRef = "host",
        network: &NetworkRef = "network",
        evacuate_batch_size: i64 = "evacuate_batch_size",
    ) -> (), async async_evacuate;
    /// Re-configure syslog logging
    pub fn syslog_reconfigure(
        "host.syslog_reconfigure",
        host: &HostRef = "host",
    ) -> (), async async_syslog_reconfigure;
    /// Reconfigure the management network interface
    pub fn management_reconfigure(
        "host.management_reconfigure",
        pif: &PifRef = "pif",
    ) -> (), async async_management_reconfigure;
    /// Reconfigure the management network interface. Should only be used if
    /// Host.management_reconfigure is impossible because the network configuration is broken.
    pub fn local_management_reconfigure(
        "host.local_management_reconfigure",
        interface: &str = "interface",
    ) -> ();
    /// Disable the management network interface
    pub fn management_disable("host.management_disable") -> ();
    pub fn get_management_interface(
        "host.get_management_interface",
        host: &HostRef = "host",
    ) -> PifRef, async async_get_management_interface;
    pub fn get_system_status_capabilities(
        "host.get_system_status_capabilities",
        host: &HostRef = "host",
    ) -> String;
    /// Restarts the agent after a 10 second pause. WARNING: this is a dangerous operation. Any
    /// operations in progress will be aborted, and unrecoverable data loss may occur. The caller is
    /// responsible for ensuring that there are no operations in progress when this method is
    /// called.
    pub fn restart_agent(
        "host.restart_agent",
        host: &HostRef = "host",
    ) -> (), async async_restart_agent;
    /// Shuts the agent down after a 10 second pause. WARNING: this is a dangerous operation. Any
    /// operations in progress will be aborted, and unrecoverable data loss may occur. The caller is
    /// responsible for ensuring that there are no operations in progress when this method is
    /// called.
    pub fn shutdown_agent("host.shutdown_agent") -> ();
    /// Sets the host name to the specified string.  Both the API and lower-level system hostname
    /// are changed immediately.
    ///
    /// Errors:
    /// HOST_NAME_INVALID - The server name is invalid.
    pub fn set_hostname_live(
        "host.set_hostname_live",
        host: &HostRef = "host",
        hostname: &str = "hostname",
    ) -> ();
    /// Computes the amount of free memory on the host.
    pub fn compute_free_memory(
        "host.compute_free_memory",
        host: &HostRef = "host",
    ) -> i64, async async_compute_free_memory;
    /// Computes the virtualization memory overhead of a host.
    pub fn compute_memory_overhead(
        "host.compute_memory_overhead",
        host: &HostRef = "host",
    ) -> i64, async async_compute_memory_overhead;
    /// This causes the synchronisation of the non-database data (messages, RRDs and so on) stored
    /// on the master to be synchronised with the host
    pub fn sync_data("host.sync_data", host: &HostRef = "host") -> ();
    /// This causes the RRDs to be backed up to the master
    pub fn backup_rrds("host.backup_rrds", host: &HostRef = "host", delay: f64 = "delay") -> ();
    /// Create a placeholder for a named binary blob of data that is associated with this host
    pub fn create_new_blob(
        "host.create_new_blob",
        host: &HostRef = "host",
        name: &str = "name",
        mime_type: &str = "mime_type",
        public: bool = "public",
    ) -> BlobRef, async async_create_new_blob;
    /// Call an API plugin on this host
    pub fn call_plugin(
        "host.call_plugin",
        host: &HostRef = "host",
        plugin: &str = "plugin",
        func: &str = "fn",
        args: &HashMap<String, String> = "args",
    ) -> String, async async_call_plugin;
    /// Return true if the extension is available on the host
    pub fn has_extension(
        "host.has_extension",
        host: &HostRef = "host",
        name: &str = "name",
    ) -> bool, async async_has_extension;
    /// Call an API extension on this host
    pub fn call_extension(
        "host.call_extension",
        host: &HostRef = "host",
        call: &str = "call",
    ) -> String;
    pub fn get_servertime("host.get_servertime", host: &HostRef = "host") -> DateTime<Utc>;
    pub fn get_server_localtime(
        "host.get_server_localtime",
        host: &HostRef = "host",
    ) -> DateTime<Utc>;
    /// This call enables external authentication on a host
    pub fn enable_external_auth(
        "host.enable_external_auth",
        host: &HostRef = "host",
        config: &HashMap<String, String> = "config",
        service_name: &str = "service_name",
        auth_type: &str = "auth_type",
    ) -> ();
    /// This call disables external authentication on the local host
    pub fn disable_external_auth(
        "host.disable_external_auth",
        host: &HostRef = "host",
        config: &HashMap<String, String> = "config",
    ) -> ();
    /// Retrieves recommended host migrations to perform when evacuating the host from the wlb
    /// server. If a VM cannot be migrated from the host the reason is listed instead of a
    /// recommendation.
    pub fn retrieve_wlb_evacuate_recommendations(
        "host.retrieve_wlb_evacuate_recommendations",
        self_: &HostRef = "self",
    ) -> HashMap<VmRef, Vec<String>>, async async_retrieve_wlb_evacuate_recommendations;
    pub fn get_server_certificate(
        "host.get_server_certificate",
        host: &HostRef = "host",
    ) -> String, async async_get_server_certificate;
    /// Replace the internal self-signed host certficate with a new one.
    pub fn refresh_server_certificate(
        "host.refresh_server_certificate",
        host: &HostRef = "host",
    ) -> (), async async_refresh_server_certificate;
    /// Install the TLS server certificate.
    pub fn install_server_certificate(
        "host.install_server_certificate",
        host: &HostRef = "host",
        certificate: &str = "certificate",
        private_key: &str = "private_key",
        certificate_chain: &str = "certificate_chain",
    ) -> (), async async_install_server_certificate;
    /// Delete the current TLS server certificate and replace by a new, self-signed one. This should
    /// only be used with extreme care.
    pub fn emergency_reset_server_certificate("host.emergency_reset_server_certificate") -> ();
    /// Delete the current TLS server certificate and replace by a new, self-signed one. This should
    /// only be used with extreme care.
    pub fn reset_server_certificate(
        "host.reset_server_certificate",
        host: &HostRef = "host",
    ) -> (), async async_reset_server_certificate;
    /// Change to another edition, or reactivate the current edition after a license has expired.
    /// This may be subject to the successful checkout of an appropriate license.
    pub fn apply_edition(
        "host.apply_edition",
        host: &HostRef = "host",
        edition: &str = "edition",
        force: bool = "force",
    ) -> ();
    /// Refresh the list of installed Supplemental Packs.
    pub fn refresh_pack_info(
        "host.refresh_pack_info",
        host: &HostRef = "host",
    ) -> (), async async_refresh_pack_info;
    /// Set the CPU features to be used after a reboot, if the given features string is valid.
    pub fn set_cpu_features(
        "host.set_cpu_features",
        host: &HostRef = "host",
        features: &str = "features",
    ) -> ();
    /// Remove the feature mask, such that after a reboot all features of the CPU are enabled.
    pub fn reset_cpu_features("host.reset_cpu_features", host: &HostRef = "host") -> ();
    /// Enable the use of a local SR for caching purposes
    pub fn enable_local_storage_caching(
        "host.enable_local_storage_caching",
        host: &HostRef = "host",
        sr: &SrRef = "sr",
    ) -> ();
    /// Disable the use of a local SR for caching purposes
    pub fn disable_local_storage_caching(
        "host.disable_local_storage_caching",
        host: &HostRef = "host",
    ) -> ();
    /// Prepare to receive a VM, returning a token which can be passed to VM.migrate.
    pub fn migrate_receive(
        "host.migrate_receive",
        host: &HostRef = "host",
        network: &NetworkRef = "network",
        options: &HashMap<String, String> = "options",
    ) -> HashMap<String, String>, async async_migrate_receive;
    /// Declare that a host is dead. This is a dangerous operation, and should only be called if the
    /// administrator is absolutely sure the host is definitely dead
    pub fn declare_dead(
        "host.declare_dead",
        host: &HostRef = "host",
    ) -> (), async async_declare_dead;
    /// Enable console output to the physical display device next time this host boots
    pub fn enable_display(
        "host.enable_display",
        host: &HostRef = "host",
    ) -> HostDisplay, async async_enable_display;
    /// Disable console output to the physical display device next time this host boots
    pub fn disable_display(
        "host.disable_display",
        host: &HostRef = "host",
    ) -> HostDisplay, async async_disable_display;
    pub fn set_sched_gran(
        "host.set_sched_gran",
        self_: &HostRef = "self",
        value: &HostSchedGran = "value",
    ) -> (), async async_set_sched_gran;
    pub fn get_sched_gran(
        "host.get_sched_gran",
        self_: &HostRef = "self",
    ) -> HostSchedGran, async async_get_sched_gran;
    /// Disable TLS verification for this host only
    pub fn emergency_disable_tls_verification("host.emergency_disable_tls_verification") -> ();
    /// Reenable TLS verification for this host only
    pub fn emergency_reenable_tls_verification("host.emergency_reenable_tls_verification") -> ();
    /// apply updates from current enabled repository on a host
    pub fn apply_updates(
        "host.apply_updates",
        self_: &HostRef = "self",
        hash: &str = "hash",
    ) -> Vec<Vec<String>>, async async_apply_updates;
    /// apply all recommended guidances both on the host and on all HVM VMs on the host after
    /// updates are applied on the host
    pub fn apply_recommended_guidances(
        "host.apply_recommended_guidances",
        self_: &HostRef = "self",
    ) -> (), async async_apply_recommended_guidances;
    /// Clear the pending mandatory guidance on this host
    pub fn emergency_clear_mandatory_guidance("host.emergency_clear_mandatory_guidance") -> ();
    pub fn get_all("host.get_all") -> Vec<HostRef>;
    pub fn get_all_records("host.get_all_records") -> HashMap<HostRef, HostRecord>;
}
