//! Full records as the server sends them, with every member the client
//! declares and a few it does not know yet.

mod util;

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use testify::xapi::Reply;
use xenapi::api::{
    self, HostAllowedOperations, HostCpuRef, HostDisplay, HostMetricsRef, HostNumaAffinityPolicy,
    HostRef, PoolAllowedOperations, PoolRef, RepositoryRef, SrRef,
    TelemetryFrequency, UpdateGuidances, UpdateSyncFrequency, VdiRef, VmRef,
};
use xenapi::api::host::HostRecord;
use xenapi::api::pool::PoolRecord;
use xenapi::{ErrorKind, FromValue, ToValue, Value};

use util::SESSION;

fn strings(items: &[&str]) -> Value {
    Value::Array(items.iter().map(|item| Value::from(*item)).collect())
}

fn members(pairs: &[(&str, &str)]) -> Value {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), Value::from(*value)))
        .collect()
}

fn empty_struct() -> Value {
    members(&[])
}

fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
}

fn other_config() -> HashMap<String, String> {
    [("k1", "v1"), ("k2", "v2")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Every `host` member, the way a server sends it.
fn host_wire() -> Value {
    [
        ("uuid", Value::from("6a1b3f2e-8c4d-4e5f-9a0b-1c2d3e4f5a6b")),
        ("name_label", Value::from("xs01")),
        ("name_description", Value::from("Default install")),
        ("memory_overhead", Value::from("2207744000")),
        ("allowed_operations", strings(&["provision", "evacuate"])),
        ("current_operations", members(&[("OpaqueRef:T7", "evacuate")])),
        ("API_version_major", Value::Int(2)),
        ("API_version_minor", Value::Int(21)),
        ("API_version_vendor", Value::from("XenSource")),
        ("API_version_vendor_implementation", empty_struct()),
        ("enabled", Value::Bool(true)),
        ("software_version", members(&[("product_version", "8.4.0"), ("xapi", "24.19")])),
        ("other_config", members(&[("k1", "v1"), ("k2", "v2")])),
        ("capabilities", strings(&["xen-3.0-x86_64", "hvm-3.0-x86_64"])),
        ("cpu_configuration", empty_struct()),
        ("sched_policy", Value::from("credit")),
        ("supported_bootloaders", Value::Array(Vec::new())),
        ("resident_VMs", strings(&["OpaqueRef:VM0", "OpaqueRef:VM1"])),
        ("logging", empty_struct()),
        ("PIFs", strings(&["OpaqueRef:PIF0"])),
        ("suspend_image_sr", Value::from("OpaqueRef:NULL")),
        ("crash_dump_sr", Value::from("OpaqueRef:NULL")),
        ("crashdumps", Value::Array(Vec::new())),
        ("patches", Value::Array(Vec::new())),
        ("updates", Value::Array(Vec::new())),
        ("PBDs", strings(&["OpaqueRef:PBD0", "OpaqueRef:PBD1"])),
        ("host_CPUs", strings(&["OpaqueRef:CPU0", "OpaqueRef:CPU1"])),
        ("cpu_info", empty_struct()),
        ("hostname", Value::from("xs01")),
        ("address", Value::from("10.0.0.11")),
        ("metrics", Value::from("OpaqueRef:HM1")),
        ("license_params", empty_struct()),
        ("ha_statefiles", Value::Array(Vec::new())),
        ("ha_network_peers", Value::Array(Vec::new())),
        ("blobs", members(&[("motd", "OpaqueRef:B1")])),
        ("tags", strings(&["rack-4"])),
        ("external_auth_type", Value::from("")),
        ("external_auth_service_name", Value::from("")),
        ("external_auth_configuration", empty_struct()),
        ("edition", Value::from("xcp-ng")),
        ("license_server", empty_struct()),
        ("bios_strings", empty_struct()),
        ("power_on_mode", Value::from("")),
        ("power_on_config", empty_struct()),
        ("local_cache_sr", Value::from("OpaqueRef:NULL")),
        ("chipset_info", empty_struct()),
        ("PCIs", Value::Array(Vec::new())),
        ("PGPUs", Value::Array(Vec::new())),
        ("PUSBs", Value::Array(Vec::new())),
        ("ssl_legacy", Value::Bool(false)),
        ("guest_VCPUs_params", empty_struct()),
        ("display", Value::from("enabled")),
        ("virtual_hardware_platform_versions", Value::Array(vec![Value::Int(0), Value::Int(1), Value::Int(2)])),
        ("control_domain", Value::from("OpaqueRef:VM0")),
        ("updates_requiring_reboot", Value::Array(Vec::new())),
        ("features", Value::Array(Vec::new())),
        ("iscsi_iqn", Value::from("")),
        ("multipathing", Value::Bool(true)),
        ("uefi_certificates", Value::from("")),
        ("certificates", Value::Array(Vec::new())),
        ("editions", Value::Array(Vec::new())),
        ("pending_guidances", strings(&["reboot_host"])),
        ("tls_verification_enabled", Value::Bool(true)),
        ("last_software_update", Value::from(timestamp())),
        ("https_only", Value::Bool(false)),
        ("latest_synced_updates_applied", Value::from("yes")),
        ("numa_affinity_policy", Value::from("best_effort")),
        ("pending_guidances_recommended", Value::Array(Vec::new())),
        ("pending_guidances_full", Value::Array(Vec::new())),
        ("last_update_hash", Value::from("")),
        ("added_in_a_later_release", Value::from("ignored")),
    ]
    .into_iter()
    .collect()
}

/// Every `pool` member, the way a server sends it.
fn pool_wire() -> Value {
    [
        ("uuid", Value::from("0f9e8d7c-6b5a-4c3d-2e1f-0a9b8c7d6e5f")),
        ("name_label", Value::from("pool0")),
        ("name_description", Value::from("")),
        ("master", Value::from("OpaqueRef:H1")),
        ("default_SR", Value::from("OpaqueRef:SR1")),
        ("suspend_image_SR", Value::from("OpaqueRef:NULL")),
        ("crash_dump_SR", Value::from("OpaqueRef:NULL")),
        ("other_config", members(&[("k1", "v1"), ("k2", "v2")])),
        ("ha_enabled", Value::Bool(true)),
        ("ha_configuration", empty_struct()),
        ("ha_statefiles", Value::Array(Vec::new())),
        ("ha_host_failures_to_tolerate", Value::from("1")),
        ("ha_plan_exists_for", Value::Int(0)),
        ("ha_allow_overcommit", Value::Bool(false)),
        ("ha_overcommitted", Value::Bool(false)),
        ("blobs", empty_struct()),
        ("tags", strings(&["prod"])),
        ("gui_config", empty_struct()),
        ("health_check_config", empty_struct()),
        ("wlb_url", Value::from("")),
        ("wlb_username", Value::from("")),
        ("wlb_enabled", Value::Bool(false)),
        ("wlb_verify_cert", Value::Bool(false)),
        ("redo_log_enabled", Value::Bool(false)),
        ("redo_log_vdi", Value::from("OpaqueRef:NULL")),
        ("vswitch_controller", Value::from("")),
        ("restrictions", empty_struct()),
        ("metadata_VDIs", strings(&["OpaqueRef:VDI1"])),
        ("ha_cluster_stack", Value::from("")),
        ("allowed_operations", strings(&["ha_disable"])),
        ("current_operations", members(&[("OpaqueRef:T9", "ha_enable")])),
        ("guest_agent_config", empty_struct()),
        ("cpu_info", empty_struct()),
        ("policy_no_vendor_device", Value::Bool(false)),
        ("live_patching_disabled", Value::Bool(false)),
        ("igmp_snooping_enabled", Value::Bool(false)),
        ("uefi_certificates", Value::from("")),
        ("custom_uefi_certificates", Value::from("")),
        ("is_psr_pending", Value::Bool(false)),
        ("tls_verification_enabled", Value::Bool(true)),
        ("repositories", strings(&["OpaqueRef:R1", "OpaqueRef:R2"])),
        ("client_certificate_auth_enabled", Value::Bool(false)),
        ("client_certificate_auth_name", Value::from("")),
        ("repository_proxy_url", Value::from("")),
        ("repository_proxy_username", Value::from("")),
        ("repository_proxy_password", Value::from("OpaqueRef:NULL")),
        ("migration_compression", Value::Bool(false)),
        ("coordinator_bias", Value::Bool(false)),
        ("local_auth_max_threads", Value::Int(0)),
        ("ext_auth_max_threads", Value::Int(0)),
        ("telemetry_uuid", Value::from("OpaqueRef:NULL")),
        ("telemetry_frequency", Value::from("weekly")),
        ("telemetry_next_collection", Value::from(DateTime::<Utc>::UNIX_EPOCH)),
        ("last_update_sync", Value::from(timestamp())),
        ("update_sync_frequency", Value::from("daily")),
        ("update_sync_day", Value::Int(1)),
        ("update_sync_enabled", Value::Bool(true)),
        ("added_in_a_later_release", Value::from("ignored")),
    ]
    .into_iter()
    .collect()
}

fn remove_member(record: &mut Value, name: &str) {
    if let Value::Struct(members) = record {
        members.shift_remove(name);
    }
}

#[tokio::test]
async fn host_record() {
    let (server, session) = util::logged_in().await;
    server.on("host.get_record", Reply::Value(host_wire()));

    let record = api::host::get_record(&session, &HostRef::new("OpaqueRef:H1"))
        .await
        .unwrap();

    assert_eq!(
        server.calls_to("host.get_record")[0].params,
        vec![Value::from(SESSION), Value::from("OpaqueRef:H1")]
    );

    assert_eq!(record.name_label, "xs01");
    assert_eq!(record.other_config, other_config());
    assert_eq!(record.memory_overhead, 2_207_744_000);
    assert_eq!((record.api_version_major, record.api_version_minor), (2, 21));
    assert_eq!(record.software_version["xapi"], "24.19");
    assert_eq!(
        record.resident_vms,
        vec![VmRef::new("OpaqueRef:VM0"), VmRef::new("OpaqueRef:VM1")]
    );
    assert_eq!(
        record.host_cpus,
        vec![HostCpuRef::new("OpaqueRef:CPU0"), HostCpuRef::new("OpaqueRef:CPU1")]
    );
    assert_eq!(record.pifs.len(), 1);
    assert_eq!(record.pbds.len(), 2);
    assert_eq!(record.metrics, HostMetricsRef::new("OpaqueRef:HM1"));
    assert!(record.suspend_image_sr.is_null());
    assert_eq!(record.crash_dump_sr, SrRef::NULL);
    assert_eq!(
        record.allowed_operations,
        vec![HostAllowedOperations::Provision, HostAllowedOperations::Evacuate]
    );
    assert_eq!(
        record.current_operations["OpaqueRef:T7"],
        HostAllowedOperations::Evacuate
    );
    assert_eq!(record.display, HostDisplay::Enabled);
    assert_eq!(record.numa_affinity_policy, HostNumaAffinityPolicy::BestEffort);
    assert_eq!(record.pending_guidances, vec![UpdateGuidances::RebootHost]);
    assert_eq!(record.virtual_hardware_platform_versions, vec![0, 1, 2]);
    assert_eq!(record.last_software_update, timestamp());
    assert!(record.multipathing);
}

#[test]
fn host_record_writes_every_member() {
    let record = HostRecord::from_value("host.get_record -> ", &host_wire()).unwrap();

    let written = record.to_value("host.set_record").unwrap();
    let wire = host_wire();
    let expected = wire.as_struct().unwrap();
    let members = written.as_struct().unwrap();

    // the unknown member is dropped, everything else comes back
    assert_eq!(members.len(), expected.len() - 1);
    assert!(members.keys().all(|key| expected.contains_key(key)));
    assert_eq!(HostRecord::from_value("", &written).unwrap(), record);
}

#[test]
fn host_record_missing_member() {
    let mut wire = host_wire();
    remove_member(&mut wire, "host_CPUs");

    let err = HostRecord::from_value("host.get_record -> ", &wire).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Deserialize);
    assert_eq!(err.context(), "host.get_record -> .host_CPUs");
}

#[tokio::test]
async fn pool_records() {
    let (server, session) = util::logged_in().await;
    let all: Value = [("OpaqueRef:P1", pool_wire())].into_iter().collect();
    server.on("pool.get_all_records", Reply::Value(all));
    server.on("pool.get_record", Reply::Value(pool_wire()));

    let records = api::pool::get_all_records(&session).await.unwrap();
    assert_eq!(records.len(), 1);

    let pool = PoolRef::new("OpaqueRef:P1");
    let record = &records[&pool];
    assert_eq!(record.name_label, "pool0");
    assert_eq!(record.other_config, other_config());
    assert_eq!(record.master, HostRef::new("OpaqueRef:H1"));
    assert_eq!(record.default_sr, SrRef::new("OpaqueRef:SR1"));
    assert!(record.redo_log_vdi.is_null());
    assert_eq!(record.metadata_vdis, vec![VdiRef::new("OpaqueRef:VDI1")]);
    assert_eq!(
        record.repositories,
        vec![RepositoryRef::new("OpaqueRef:R1"), RepositoryRef::new("OpaqueRef:R2")]
    );
    assert!(record.ha_enabled);
    assert_eq!(record.ha_host_failures_to_tolerate, 1);
    assert_eq!(record.allowed_operations, vec![PoolAllowedOperations::HaDisable]);
    assert_eq!(
        record.current_operations["OpaqueRef:T9"],
        PoolAllowedOperations::HaEnable
    );
    assert_eq!(record.telemetry_frequency, TelemetryFrequency::Weekly);
    assert_eq!(record.update_sync_frequency, UpdateSyncFrequency::Daily);
    assert_eq!(record.last_update_sync, timestamp());

    let single = api::pool::get_record(&session, &pool).await.unwrap();
    assert_eq!(&single, record);
}

#[test]
fn pool_record_writes_every_member() {
    let record = PoolRecord::from_value("pool.get_record -> ", &pool_wire()).unwrap();

    let written = record.to_value("").unwrap();
    let wire = pool_wire();

    assert_eq!(
        written.as_struct().unwrap().len(),
        wire.as_struct().unwrap().len() - 1
    );
    assert_eq!(PoolRecord::from_value("", &written).unwrap(), record);
}

#[test]
fn pool_record_unknown_enum_tag() {
    let mut wire = pool_wire();
    if let Value::Struct(members) = &mut wire {
        members.insert("telemetry_frequency".to_string(), Value::from("hourly"));
    }

    let record = PoolRecord::from_value("", &wire).unwrap();

    assert_eq!(
        record.telemetry_frequency,
        TelemetryFrequency::Unknown("hourly".to_string())
    );
}
