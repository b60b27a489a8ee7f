//! `host_metrics`: the metrics associated with a host.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::*;
use crate::{record, rpc};

record! {
    pub struct HostMetricsRecord {
        /// Unique identifier/object reference
        uuid: String = "uuid",
        /// Total host memory (bytes)
        memory_total: i64 = "memory_total",
        /// Free host memory (bytes)
        memory_free: i64 = "memory_free",
        /// Pool master thinks this host is live
        live: bool = "live",
        /// Time at which this information was last updated
        last_updated: DateTime<Utc> = "last_updated",
        /// additional configuration
        other_config: HashMap<String, String> = "other_config",
    }
}

rpc! {
    pub fn get_record(
        "host_metrics.get_record",
        self_: &HostMetricsRef = "self",
    ) -> HostMetricsRecord;
    pub fn get_by_uuid("host_metrics.get_by_uuid", uuid: &str = "uuid") -> HostMetricsRef;
    pub fn get_uuid("host_metrics.get_uuid", self_: &HostMetricsRef = "self") -> String;
    pub fn get_memory_total(
        "host_metrics.get_memory_total",
        self_: &HostMetricsRef = "self",
    ) -> i64;
    pub fn get_memory_free("host_metrics.get_memory_free", self_: &HostMetricsRef = "self") -> i64;
    pub fn get_live("host_metrics.get_live", self_: &HostMetricsRef = "self") -> bool;
    pub fn get_last_updated(
        "host_metrics.get_last_updated",
        self_: &HostMetricsRef = "self",
    ) -> DateTime<Utc>;
    pub fn get_other_config(
        "host_metrics.get_other_config",
        self_: &HostMetricsRef = "self",
    ) -> HashMap<String, String>;
    pub fn set_other_config(
        "host_metrics.set_other_config",
        self_: &HostMetricsRef = "self",
        value: &HashMap<String, String> = "value",
    ) -> ();
    pub fn set_other_config2(
        "host_metrics.set_other_config",
        self_: &HostMetricsRef = "self",
    ) -> ();
    pub fn add_to_other_config(
        "host_metrics.add_to_other_config",
        self_: &HostMetricsRef = "self",
        key: &str = "key",
        value: &str = "value",
    ) -> ();
    pub fn add_to_other_config2(
        "host_metrics.add_to_other_config",
        self_: &HostMetricsRef = "self",
    ) -> ();
    pub fn remove_from_other_config(
        "host_metrics.remove_from_other_config",
        self_: &HostMetricsRef = "self",
        key: &str = "key",
    ) -> ();
    pub fn remove_from_other_config2(
        "host_metrics.remove_from_other_config",
        self_: &HostMetricsRef = "self",
    ) -> ();
    pub fn get_all("host_metrics.get_all") -> Vec<HostMetricsRef>;
    pub fn get_all_records(
        "host_metrics.get_all_records",
    ) -> HashMap<HostMetricsRef, HostMetricsRecord>;
}
