//! The server classes, one module of operations per class.
//!
//! Operations are free functions taking the [`Session`](crate::Session)
//! first. Those the server can run in the background also come as an
//! `async_*` variant returning a [`TaskRef`], see [`crate::task::wait`].

pub mod blob;
pub mod certificate;
pub mod class;
mod data_source;
mod enums;
pub mod feature;
pub mod host;
pub mod host_metrics;
pub mod network;
pub mod pool;
pub mod pool_patch;
pub mod pool_update;
pub mod session;
pub mod task;
pub mod vlan;

pub use data_source::DataSourceRecord;
pub use enums::*;

use crate::Ref;

pub type BlobRef = Ref<class::Blob>;
pub type CertificateRef = Ref<class::Certificate>;
pub type FeatureRef = Ref<class::Feature>;
pub type HostCpuRef = Ref<class::HostCpu>;
pub type HostCrashdumpRef = Ref<class::HostCrashdump>;
pub type HostMetricsRef = Ref<class::HostMetrics>;
pub type HostPatchRef = Ref<class::HostPatch>;
pub type HostRef = Ref<class::Host>;
pub type NetworkRef = Ref<class::Network>;
pub type PbdRef = Ref<class::Pbd>;
pub type PciRef = Ref<class::Pci>;
pub type PgpuRef = Ref<class::Pgpu>;
pub type PifRef = Ref<class::Pif>;
pub type PoolPatchRef = Ref<class::PoolPatch>;
pub type PoolRef = Ref<class::Pool>;
pub type PoolUpdateRef = Ref<class::PoolUpdate>;
pub type PusbRef = Ref<class::Pusb>;
pub type RepositoryRef = Ref<class::Repository>;
pub type SecretRef = Ref<class::Secret>;
pub type SessionRef = Ref<class::Session>;
pub type SrRef = Ref<class::Sr>;
pub type SubjectRef = Ref<class::Subject>;
pub type TaskRef = Ref<class::Task>;
pub type UserRef = Ref<class::User>;
pub type VdiRef = Ref<class::Vdi>;
pub type VifRef = Ref<class::Vif>;
pub type VlanRef = Ref<class::Vlan>;
pub type VmRef = Ref<class::Vm>;
