//! Error codes the server puts first in a fault description.
//!
//! Compare with [`Error::is`](crate::Error::is):
//!
//! ```
//! # fn check(err: xenapi::Error) {
//! if err.is(xenapi::codes::SESSION_INVALID) {
//!     // log in again
//! }
//! # }
//! ```

pub const ACTIVATION_WHILE_NOT_FREE: &str = "ACTIVATION_WHILE_NOT_FREE";
pub const ADDRESS_VIOLATES_LOCKING_CONSTRAINT: &str = "ADDRESS_VIOLATES_LOCKING_CONSTRAINT";
pub const APPLY_GUIDANCE_FAILED: &str = "APPLY_GUIDANCE_FAILED";
pub const APPLY_LIVEPATCH_FAILED: &str = "APPLY_LIVEPATCH_FAILED";
pub const APPLY_UPDATES_FAILED: &str = "APPLY_UPDATES_FAILED";
pub const APPLY_UPDATES_IN_PROGRESS: &str = "APPLY_UPDATES_IN_PROGRESS";
pub const AUTH_ALREADY_ENABLED: &str = "AUTH_ALREADY_ENABLED";
pub const AUTH_DISABLE_FAILED: &str = "AUTH_DISABLE_FAILED";
pub const AUTH_DISABLE_FAILED_PERMISSION_DENIED: &str = "AUTH_DISABLE_FAILED_PERMISSION_DENIED";
pub const AUTH_DISABLE_FAILED_WRONG_CREDENTIALS: &str = "AUTH_DISABLE_FAILED_WRONG_CREDENTIALS";
pub const AUTH_ENABLE_FAILED: &str = "AUTH_ENABLE_FAILED";
pub const AUTH_ENABLE_FAILED_DOMAIN_LOOKUP_FAILED: &str = "AUTH_ENABLE_FAILED_DOMAIN_LOOKUP_FAILED";
pub const AUTH_ENABLE_FAILED_INVALID_ACCOUNT: &str = "AUTH_ENABLE_FAILED_INVALID_ACCOUNT";
pub const AUTH_ENABLE_FAILED_INVALID_OU: &str = "AUTH_ENABLE_FAILED_INVALID_OU";
pub const AUTH_ENABLE_FAILED_PERMISSION_DENIED: &str = "AUTH_ENABLE_FAILED_PERMISSION_DENIED";
pub const AUTH_ENABLE_FAILED_UNAVAILABLE: &str = "AUTH_ENABLE_FAILED_UNAVAILABLE";
pub const AUTH_ENABLE_FAILED_WRONG_CREDENTIALS: &str = "AUTH_ENABLE_FAILED_WRONG_CREDENTIALS";
pub const AUTH_IS_DISABLED: &str = "AUTH_IS_DISABLED";
pub const AUTH_SERVICE_ERROR: &str = "AUTH_SERVICE_ERROR";
pub const AUTH_UNKNOWN_TYPE: &str = "AUTH_UNKNOWN_TYPE";
pub const BACKUP_SCRIPT_FAILED: &str = "BACKUP_SCRIPT_FAILED";
pub const BALLOONING_DISABLED: &str = "BALLOONING_DISABLED";
pub const BALLOONING_TIMEOUT_BEFORE_MIGRATION: &str = "BALLOONING_TIMEOUT_BEFORE_MIGRATION";
pub const BOOTLOADER_FAILED: &str = "BOOTLOADER_FAILED";
pub const BRIDGE_NAME_EXISTS: &str = "BRIDGE_NAME_EXISTS";
pub const BRIDGE_NOT_AVAILABLE: &str = "BRIDGE_NOT_AVAILABLE";
pub const CANNOT_ADD_TUNNEL_TO_BOND_SLAVE: &str = "CANNOT_ADD_TUNNEL_TO_BOND_SLAVE";
pub const CANNOT_ADD_TUNNEL_TO_SRIOV_LOGICAL: &str = "CANNOT_ADD_TUNNEL_TO_SRIOV_LOGICAL";
pub const CANNOT_ADD_TUNNEL_TO_VLAN_ON_SRIOV_LOGICAL: &str = "CANNOT_ADD_TUNNEL_TO_VLAN_ON_SRIOV_LOGICAL";
pub const CANNOT_ADD_VLAN_TO_BOND_SLAVE: &str = "CANNOT_ADD_VLAN_TO_BOND_SLAVE";
pub const CANNOT_CHANGE_PIF_PROPERTIES: &str = "CANNOT_CHANGE_PIF_PROPERTIES";
pub const CANNOT_CONTACT_HOST: &str = "CANNOT_CONTACT_HOST";
pub const CANNOT_CREATE_STATE_FILE: &str = "CANNOT_CREATE_STATE_FILE";
pub const CANNOT_DESTROY_DISASTER_RECOVERY_TASK: &str = "CANNOT_DESTROY_DISASTER_RECOVERY_TASK";
pub const CANNOT_DESTROY_SYSTEM_NETWORK: &str = "CANNOT_DESTROY_SYSTEM_NETWORK";
pub const CANNOT_ENABLE_REDO_LOG: &str = "CANNOT_ENABLE_REDO_LOG";
pub const CANNOT_EVACUATE_HOST: &str = "CANNOT_EVACUATE_HOST";
pub const CANNOT_FETCH_PATCH: &str = "CANNOT_FETCH_PATCH";
pub const CANNOT_FIND_OEM_BACKUP_PARTITION: &str = "CANNOT_FIND_OEM_BACKUP_PARTITION";
pub const CANNOT_FIND_PATCH: &str = "CANNOT_FIND_PATCH";
pub const CANNOT_FIND_STATE_PARTITION: &str = "CANNOT_FIND_STATE_PARTITION";
pub const CANNOT_FIND_UPDATE: &str = "CANNOT_FIND_UPDATE";
pub const CANNOT_FORGET_SRIOV_LOGICAL: &str = "CANNOT_FORGET_SRIOV_LOGICAL";
pub const CANNOT_PLUG_BOND_SLAVE: &str = "CANNOT_PLUG_BOND_SLAVE";
pub const CANNOT_PLUG_VIF: &str = "CANNOT_PLUG_VIF";
pub const CANNOT_RESET_CONTROL_DOMAIN: &str = "CANNOT_RESET_CONTROL_DOMAIN";
pub const CANNOT_RESTART_DEVICE_MODEL: &str = "CANNOT_RESTART_DEVICE_MODEL";
pub const CA_CERTIFICATE_EXPIRED: &str = "CA_CERTIFICATE_EXPIRED";
pub const CA_CERTIFICATE_INVALID: &str = "CA_CERTIFICATE_INVALID";
pub const CA_CERTIFICATE_NOT_VALID_YET: &str = "CA_CERTIFICATE_NOT_VALID_YET";
pub const CERTIFICATE_ALREADY_EXISTS: &str = "CERTIFICATE_ALREADY_EXISTS";
pub const CERTIFICATE_CORRUPT: &str = "CERTIFICATE_CORRUPT";
pub const CERTIFICATE_DOES_NOT_EXIST: &str = "CERTIFICATE_DOES_NOT_EXIST";
pub const CERTIFICATE_LIBRARY_CORRUPT: &str = "CERTIFICATE_LIBRARY_CORRUPT";
pub const CERTIFICATE_NAME_INVALID: &str = "CERTIFICATE_NAME_INVALID";
pub const CERT_REFRESH_IN_PROGRESS: &str = "CERT_REFRESH_IN_PROGRESS";
pub const CHANGE_PASSWORD_REJECTED: &str = "CHANGE_PASSWORD_REJECTED";
pub const CLIENT_ERROR: &str = "CLIENT_ERROR";
pub const CLUSTERED_SR_DEGRADED: &str = "CLUSTERED_SR_DEGRADED";
pub const CLUSTERING_DISABLED: &str = "CLUSTERING_DISABLED";
pub const CLUSTERING_ENABLED: &str = "CLUSTERING_ENABLED";
pub const CLUSTER_ALREADY_EXISTS: &str = "CLUSTER_ALREADY_EXISTS";
pub const CLUSTER_CREATE_IN_PROGRESS: &str = "CLUSTER_CREATE_IN_PROGRESS";
pub const CLUSTER_DOES_NOT_HAVE_ONE_NODE: &str = "CLUSTER_DOES_NOT_HAVE_ONE_NODE";
pub const CLUSTER_FORCE_DESTROY_FAILED: &str = "CLUSTER_FORCE_DESTROY_FAILED";
pub const CLUSTER_HAS_NO_CERTIFICATE: &str = "CLUSTER_HAS_NO_CERTIFICATE";
pub const CLUSTER_HOST_IS_LAST: &str = "CLUSTER_HOST_IS_LAST";
pub const CLUSTER_HOST_NOT_JOINED: &str = "CLUSTER_HOST_NOT_JOINED";
pub const CLUSTER_STACK_IN_USE: &str = "CLUSTER_STACK_IN_USE";
pub const CONFIGURE_REPOSITORIES_IN_PROGRESS: &str = "CONFIGURE_REPOSITORIES_IN_PROGRESS";
pub const COULD_NOT_FIND_NETWORK_INTERFACE_WITH_SPECIFIED_DEVICE_NAME_AND_MAC_ADDRESS: &str = "COULD_NOT_FIND_NETWORK_INTERFACE_WITH_SPECIFIED_DEVICE_NAME_AND_MAC_ADDRESS";
pub const COULD_NOT_IMPORT_DATABASE: &str = "COULD_NOT_IMPORT_DATABASE";
pub const COULD_NOT_UPDATE_IGMP_SNOOPING_EVERYWHERE: &str = "COULD_NOT_UPDATE_IGMP_SNOOPING_EVERYWHERE";
pub const CPU_FEATURE_MASKING_NOT_SUPPORTED: &str = "CPU_FEATURE_MASKING_NOT_SUPPORTED";
pub const CREATEREPO_FAILED: &str = "CREATEREPO_FAILED";
pub const CRL_ALREADY_EXISTS: &str = "CRL_ALREADY_EXISTS";
pub const CRL_CORRUPT: &str = "CRL_CORRUPT";
pub const CRL_DOES_NOT_EXIST: &str = "CRL_DOES_NOT_EXIST";
pub const CRL_NAME_INVALID: &str = "CRL_NAME_INVALID";
pub const DB_UNIQUENESS_CONSTRAINT_VIOLATION: &str = "DB_UNIQUENESS_CONSTRAINT_VIOLATION";
pub const DEFAULT_SR_NOT_FOUND: &str = "DEFAULT_SR_NOT_FOUND";
pub const DESIGNATE_NEW_MASTER_IN_PROGRESS: &str = "DESIGNATE_NEW_MASTER_IN_PROGRESS";
pub const DEVICE_ALREADY_ATTACHED: &str = "DEVICE_ALREADY_ATTACHED";
pub const DEVICE_ALREADY_DETACHED: &str = "DEVICE_ALREADY_DETACHED";
pub const DEVICE_ALREADY_EXISTS: &str = "DEVICE_ALREADY_EXISTS";
pub const DEVICE_ATTACH_TIMEOUT: &str = "DEVICE_ATTACH_TIMEOUT";
pub const DEVICE_DETACH_REJECTED: &str = "DEVICE_DETACH_REJECTED";
pub const DEVICE_DETACH_TIMEOUT: &str = "DEVICE_DETACH_TIMEOUT";
pub const DEVICE_NOT_ATTACHED: &str = "DEVICE_NOT_ATTACHED";
pub const DISK_VBD_MUST_BE_READWRITE_FOR_HVM: &str = "DISK_VBD_MUST_BE_READWRITE_FOR_HVM";
pub const DOMAIN_BUILDER_ERROR: &str = "DOMAIN_BUILDER_ERROR";
pub const DOMAIN_EXISTS: &str = "DOMAIN_EXISTS";
pub const DUPLICATE_MAC_SEED: &str = "DUPLICATE_MAC_SEED";
pub const DUPLICATE_PIF_DEVICE_NAME: &str = "DUPLICATE_PIF_DEVICE_NAME";
pub const DUPLICATE_VM: &str = "DUPLICATE_VM";
pub const EVENTS_LOST: &str = "EVENTS_LOST";
pub const EVENT_FROM_TOKEN_PARSE_FAILURE: &str = "EVENT_FROM_TOKEN_PARSE_FAILURE";
pub const EVENT_SUBSCRIPTION_PARSE_FAILURE: &str = "EVENT_SUBSCRIPTION_PARSE_FAILURE";
pub const EXTENSION_PROTOCOL_FAILURE: &str = "EXTENSION_PROTOCOL_FAILURE";
pub const FAILED_TO_START_EMULATOR: &str = "FAILED_TO_START_EMULATOR";
pub const FEATURE_REQUIRES_HVM: &str = "FEATURE_REQUIRES_HVM";
pub const FEATURE_RESTRICTED: &str = "FEATURE_RESTRICTED";
pub const FIELD_TYPE_ERROR: &str = "FIELD_TYPE_ERROR";
pub const GET_HOST_UPDATES_FAILED: &str = "GET_HOST_UPDATES_FAILED";
pub const GET_UPDATES_FAILED: &str = "GET_UPDATES_FAILED";
pub const GET_UPDATES_IN_PROGRESS: &str = "GET_UPDATES_IN_PROGRESS";
pub const GPU_GROUP_CONTAINS_NO_PGPUS: &str = "GPU_GROUP_CONTAINS_NO_PGPUS";
pub const GPU_GROUP_CONTAINS_PGPU: &str = "GPU_GROUP_CONTAINS_PGPU";
pub const GPU_GROUP_CONTAINS_VGPU: &str = "GPU_GROUP_CONTAINS_VGPU";
pub const HANDLE_INVALID: &str = "HANDLE_INVALID";
pub const HA_ABORT_NEW_MASTER: &str = "HA_ABORT_NEW_MASTER";
pub const HA_CANNOT_CHANGE_BOND_STATUS_OF_MGMT_IFACE: &str = "HA_CANNOT_CHANGE_BOND_STATUS_OF_MGMT_IFACE";
pub const HA_CONSTRAINT_VIOLATION_NETWORK_NOT_SHARED: &str = "HA_CONSTRAINT_VIOLATION_NETWORK_NOT_SHARED";
pub const HA_CONSTRAINT_VIOLATION_SR_NOT_SHARED: &str = "HA_CONSTRAINT_VIOLATION_SR_NOT_SHARED";
pub const HA_DISABLE_IN_PROGRESS: &str = "HA_DISABLE_IN_PROGRESS";
pub const HA_ENABLE_IN_PROGRESS: &str = "HA_ENABLE_IN_PROGRESS";
pub const HA_FAILED_TO_FORM_LIVESET: &str = "HA_FAILED_TO_FORM_LIVESET";
pub const HA_HEARTBEAT_DAEMON_STARTUP_FAILED: &str = "HA_HEARTBEAT_DAEMON_STARTUP_FAILED";
pub const HA_HOST_CANNOT_ACCESS_STATEFILE: &str = "HA_HOST_CANNOT_ACCESS_STATEFILE";
pub const HA_HOST_CANNOT_SEE_PEERS: &str = "HA_HOST_CANNOT_SEE_PEERS";
pub const HA_HOST_IS_ARMED: &str = "HA_HOST_IS_ARMED";
pub const HA_IS_ENABLED: &str = "HA_IS_ENABLED";
pub const HA_LOST_STATEFILE: &str = "HA_LOST_STATEFILE";
pub const HA_NOT_ENABLED: &str = "HA_NOT_ENABLED";
pub const HA_NOT_INSTALLED: &str = "HA_NOT_INSTALLED";
pub const HA_NO_PLAN: &str = "HA_NO_PLAN";
pub const HA_OPERATION_WOULD_BREAK_FAILOVER_PLAN: &str = "HA_OPERATION_WOULD_BREAK_FAILOVER_PLAN";
pub const HA_POOL_IS_ENABLED_BUT_HOST_IS_DISABLED: &str = "HA_POOL_IS_ENABLED_BUT_HOST_IS_DISABLED";
pub const HA_SHOULD_BE_FENCED: &str = "HA_SHOULD_BE_FENCED";
pub const HA_TOO_FEW_HOSTS: &str = "HA_TOO_FEW_HOSTS";
pub const HOSTS_FAILED_TO_DISABLE_CACHING: &str = "HOSTS_FAILED_TO_DISABLE_CACHING";
pub const HOSTS_FAILED_TO_ENABLE_CACHING: &str = "HOSTS_FAILED_TO_ENABLE_CACHING";
pub const HOSTS_NOT_COMPATIBLE: &str = "HOSTS_NOT_COMPATIBLE";
pub const HOSTS_NOT_HOMOGENEOUS: &str = "HOSTS_NOT_HOMOGENEOUS";
pub const HOST_BROKEN: &str = "HOST_BROKEN";
pub const HOST_CANNOT_ATTACH_NETWORK: &str = "HOST_CANNOT_ATTACH_NETWORK";
pub const HOST_CANNOT_DESTROY_SELF: &str = "HOST_CANNOT_DESTROY_SELF";
pub const HOST_CANNOT_READ_METRICS: &str = "HOST_CANNOT_READ_METRICS";
pub const HOST_CANNOT_SEE_SR: &str = "HOST_CANNOT_SEE_SR";
pub const HOST_CD_DRIVE_EMPTY: &str = "HOST_CD_DRIVE_EMPTY";
pub const HOST_DISABLED: &str = "HOST_DISABLED";
pub const HOST_DISABLED_UNTIL_REBOOT: &str = "HOST_DISABLED_UNTIL_REBOOT";
pub const HOST_EVACUATE_IN_PROGRESS: &str = "HOST_EVACUATE_IN_PROGRESS";
pub const HOST_EVACUATION_IS_REQUIRED: &str = "HOST_EVACUATION_IS_REQUIRED";
pub const HOST_HAS_NO_MANAGEMENT_IP: &str = "HOST_HAS_NO_MANAGEMENT_IP";
pub const HOST_HAS_RESIDENT_VMS: &str = "HOST_HAS_RESIDENT_VMS";
pub const HOST_IN_EMERGENCY_MODE: &str = "HOST_IN_EMERGENCY_MODE";
pub const HOST_IN_USE: &str = "HOST_IN_USE";
pub const HOST_IS_LIVE: &str = "HOST_IS_LIVE";
pub const HOST_IS_SLAVE: &str = "HOST_IS_SLAVE";
pub const HOST_ITS_OWN_SLAVE: &str = "HOST_ITS_OWN_SLAVE";
pub const HOST_MASTER_CANNOT_TALK_BACK: &str = "HOST_MASTER_CANNOT_TALK_BACK";
pub const HOST_NAME_INVALID: &str = "HOST_NAME_INVALID";
pub const HOST_NOT_DISABLED: &str = "HOST_NOT_DISABLED";
pub const HOST_NOT_ENOUGH_FREE_MEMORY: &str = "HOST_NOT_ENOUGH_FREE_MEMORY";
pub const HOST_NOT_ENOUGH_PCPUS: &str = "HOST_NOT_ENOUGH_PCPUS";
pub const HOST_NOT_LIVE: &str = "HOST_NOT_LIVE";
pub const HOST_OFFLINE: &str = "HOST_OFFLINE";
pub const HOST_PENDING_MANDATORY_GUIDANCE_NOT_EMPTY: &str = "HOST_PENDING_MANDATORY_GUIDANCE_NOT_EMPTY";
pub const HOST_POWER_ON_MODE_DISABLED: &str = "HOST_POWER_ON_MODE_DISABLED";
pub const HOST_STILL_BOOTING: &str = "HOST_STILL_BOOTING";
pub const HOST_UNKNOWN_TO_MASTER: &str = "HOST_UNKNOWN_TO_MASTER";
pub const HOST_XAPI_VERSION_HIGHER_THAN_COORDINATOR: &str = "HOST_XAPI_VERSION_HIGHER_THAN_COORDINATOR";
pub const ILLEGAL_IN_FIPS_MODE: &str = "ILLEGAL_IN_FIPS_MODE";
pub const ILLEGAL_VBD_DEVICE: &str = "ILLEGAL_VBD_DEVICE";
pub const IMPORT_ERROR: &str = "IMPORT_ERROR";
pub const IMPORT_ERROR_ATTACHED_DISKS_NOT_FOUND: &str = "IMPORT_ERROR_ATTACHED_DISKS_NOT_FOUND";
pub const IMPORT_ERROR_CANNOT_HANDLE_CHUNKED: &str = "IMPORT_ERROR_CANNOT_HANDLE_CHUNKED";
pub const IMPORT_ERROR_FAILED_TO_FIND_OBJECT: &str = "IMPORT_ERROR_FAILED_TO_FIND_OBJECT";
pub const IMPORT_ERROR_PREMATURE_EOF: &str = "IMPORT_ERROR_PREMATURE_EOF";
pub const IMPORT_ERROR_SOME_CHECKSUMS_FAILED: &str = "IMPORT_ERROR_SOME_CHECKSUMS_FAILED";
pub const IMPORT_ERROR_UNEXPECTED_FILE: &str = "IMPORT_ERROR_UNEXPECTED_FILE";
pub const IMPORT_INCOMPATIBLE_VERSION: &str = "IMPORT_INCOMPATIBLE_VERSION";
pub const INCOMPATIBLE_CLUSTER_STACK_ACTIVE: &str = "INCOMPATIBLE_CLUSTER_STACK_ACTIVE";
pub const INCOMPATIBLE_PIF_PROPERTIES: &str = "INCOMPATIBLE_PIF_PROPERTIES";
pub const INCOMPATIBLE_STATEFILE_SR: &str = "INCOMPATIBLE_STATEFILE_SR";
pub const INTERFACE_HAS_NO_IP: &str = "INTERFACE_HAS_NO_IP";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
pub const INVALID_BASE_URL: &str = "INVALID_BASE_URL";
pub const INVALID_CIDR_ADDRESS_SPECIFIED: &str = "INVALID_CIDR_ADDRESS_SPECIFIED";
pub const INVALID_CLUSTER_STACK: &str = "INVALID_CLUSTER_STACK";
pub const INVALID_DEVICE: &str = "INVALID_DEVICE";
pub const INVALID_EDITION: &str = "INVALID_EDITION";
pub const INVALID_FEATURE_STRING: &str = "INVALID_FEATURE_STRING";
pub const INVALID_GPGKEY_PATH: &str = "INVALID_GPGKEY_PATH";
pub const INVALID_IP_ADDRESS_SPECIFIED: &str = "INVALID_IP_ADDRESS_SPECIFIED";
pub const INVALID_PATCH: &str = "INVALID_PATCH";
pub const INVALID_PATCH_WITH_LOG: &str = "INVALID_PATCH_WITH_LOG";
pub const INVALID_REPOMD_XML: &str = "INVALID_REPOMD_XML";
pub const INVALID_REPOSITORY_DOMAIN_ALLOWLIST: &str = "INVALID_REPOSITORY_DOMAIN_ALLOWLIST";
pub const INVALID_REPOSITORY_PROXY_CREDENTIAL: &str = "INVALID_REPOSITORY_PROXY_CREDENTIAL";
pub const INVALID_REPOSITORY_PROXY_URL: &str = "INVALID_REPOSITORY_PROXY_URL";
pub const INVALID_UPDATE: &str = "INVALID_UPDATE";
pub const INVALID_UPDATEINFO_XML: &str = "INVALID_UPDATEINFO_XML";
pub const INVALID_UPDATE_SYNC_DAY: &str = "INVALID_UPDATE_SYNC_DAY";
pub const INVALID_VALUE: &str = "INVALID_VALUE";
pub const IS_TUNNEL_ACCESS_PIF: &str = "IS_TUNNEL_ACCESS_PIF";
pub const JOINING_HOST_CANNOT_BE_MASTER_OF_OTHER_HOSTS: &str = "JOINING_HOST_CANNOT_BE_MASTER_OF_OTHER_HOSTS";
pub const JOINING_HOST_CANNOT_CONTAIN_SHARED_SRS: &str = "JOINING_HOST_CANNOT_CONTAIN_SHARED_SRS";
pub const JOINING_HOST_CANNOT_HAVE_RUNNING_OR_SUSPENDED_VMS: &str = "JOINING_HOST_CANNOT_HAVE_RUNNING_OR_SUSPENDED_VMS";
pub const JOINING_HOST_CANNOT_HAVE_RUNNING_VMS: &str = "JOINING_HOST_CANNOT_HAVE_RUNNING_VMS";
pub const JOINING_HOST_CANNOT_HAVE_VMS_WITH_CURRENT_OPERATIONS: &str = "JOINING_HOST_CANNOT_HAVE_VMS_WITH_CURRENT_OPERATIONS";
pub const JOINING_HOST_CONNECTION_FAILED: &str = "JOINING_HOST_CONNECTION_FAILED";
pub const JOINING_HOST_SERVICE_FAILED: &str = "JOINING_HOST_SERVICE_FAILED";
pub const LICENCE_RESTRICTION: &str = "LICENCE_RESTRICTION";
pub const LICENSE_CANNOT_DOWNGRADE_WHILE_IN_POOL: &str = "LICENSE_CANNOT_DOWNGRADE_WHILE_IN_POOL";
pub const LICENSE_CHECKOUT_ERROR: &str = "LICENSE_CHECKOUT_ERROR";
pub const LICENSE_DOES_NOT_SUPPORT_POOLING: &str = "LICENSE_DOES_NOT_SUPPORT_POOLING";
pub const LICENSE_DOES_NOT_SUPPORT_XHA: &str = "LICENSE_DOES_NOT_SUPPORT_XHA";
pub const LICENSE_EXPIRED: &str = "LICENSE_EXPIRED";
pub const LICENSE_FILE_DEPRECATED: &str = "LICENSE_FILE_DEPRECATED";
pub const LICENSE_HOST_POOL_MISMATCH: &str = "LICENSE_HOST_POOL_MISMATCH";
pub const LICENSE_PROCESSING_ERROR: &str = "LICENSE_PROCESSING_ERROR";
pub const LOCATION_NOT_UNIQUE: &str = "LOCATION_NOT_UNIQUE";
pub const MAC_DOES_NOT_EXIST: &str = "MAC_DOES_NOT_EXIST";
pub const MAC_INVALID: &str = "MAC_INVALID";
pub const MAC_STILL_EXISTS: &str = "MAC_STILL_EXISTS";
pub const MAP_DUPLICATE_KEY: &str = "MAP_DUPLICATE_KEY";
pub const MEMORY_CONSTRAINT_VIOLATION: &str = "MEMORY_CONSTRAINT_VIOLATION";
pub const MEMORY_CONSTRAINT_VIOLATION_MAXPIN: &str = "MEMORY_CONSTRAINT_VIOLATION_MAXPIN";
pub const MEMORY_CONSTRAINT_VIOLATION_ORDER: &str = "MEMORY_CONSTRAINT_VIOLATION_ORDER";
pub const MESSAGE_DEPRECATED: &str = "MESSAGE_DEPRECATED";
pub const MESSAGE_METHOD_UNKNOWN: &str = "MESSAGE_METHOD_UNKNOWN";
pub const MESSAGE_PARAMETER_COUNT_MISMATCH: &str = "MESSAGE_PARAMETER_COUNT_MISMATCH";
pub const MESSAGE_REMOVED: &str = "MESSAGE_REMOVED";
pub const MIRROR_FAILED: &str = "MIRROR_FAILED";
pub const MISSING_CONNECTION_DETAILS: &str = "MISSING_CONNECTION_DETAILS";
pub const MULTIPLE_UPDATE_REPOSITORIES_ENABLED: &str = "MULTIPLE_UPDATE_REPOSITORIES_ENABLED";
pub const NETWORK_ALREADY_CONNECTED: &str = "NETWORK_ALREADY_CONNECTED";
pub const NETWORK_CONTAINS_PIF: &str = "NETWORK_CONTAINS_PIF";
pub const NETWORK_CONTAINS_VIF: &str = "NETWORK_CONTAINS_VIF";
pub const NETWORK_HAS_INCOMPATIBLE_SRIOV_PIFS: &str = "NETWORK_HAS_INCOMPATIBLE_SRIOV_PIFS";
pub const NETWORK_HAS_INCOMPATIBLE_VLAN_ON_SRIOV_PIFS: &str = "NETWORK_HAS_INCOMPATIBLE_VLAN_ON_SRIOV_PIFS";
pub const NETWORK_INCOMPATIBLE_PURPOSES: &str = "NETWORK_INCOMPATIBLE_PURPOSES";
pub const NETWORK_INCOMPATIBLE_WITH_BOND: &str = "NETWORK_INCOMPATIBLE_WITH_BOND";
pub const NETWORK_INCOMPATIBLE_WITH_SRIOV: &str = "NETWORK_INCOMPATIBLE_WITH_SRIOV";
pub const NETWORK_INCOMPATIBLE_WITH_TUNNEL: &str = "NETWORK_INCOMPATIBLE_WITH_TUNNEL";
pub const NETWORK_INCOMPATIBLE_WITH_VLAN_ON_BRIDGE: &str = "NETWORK_INCOMPATIBLE_WITH_VLAN_ON_BRIDGE";
pub const NETWORK_INCOMPATIBLE_WITH_VLAN_ON_SRIOV: &str = "NETWORK_INCOMPATIBLE_WITH_VLAN_ON_SRIOV";
pub const NETWORK_SRIOV_ALREADY_ENABLED: &str = "NETWORK_SRIOV_ALREADY_ENABLED";
pub const NETWORK_SRIOV_DISABLE_FAILED: &str = "NETWORK_SRIOV_DISABLE_FAILED";
pub const NETWORK_SRIOV_ENABLE_FAILED: &str = "NETWORK_SRIOV_ENABLE_FAILED";
pub const NETWORK_SRIOV_INSUFFICIENT_CAPACITY: &str = "NETWORK_SRIOV_INSUFFICIENT_CAPACITY";
pub const NETWORK_UNMANAGED: &str = "NETWORK_UNMANAGED";
pub const NOT_ALLOWED_ON_OEM_EDITION: &str = "NOT_ALLOWED_ON_OEM_EDITION";
pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";
pub const NOT_IN_EMERGENCY_MODE: &str = "NOT_IN_EMERGENCY_MODE";
pub const NOT_SUPPORTED_DURING_UPGRADE: &str = "NOT_SUPPORTED_DURING_UPGRADE";
pub const NOT_SYSTEM_DOMAIN: &str = "NOT_SYSTEM_DOMAIN";
pub const NO_CLUSTER_HOSTS_REACHABLE: &str = "NO_CLUSTER_HOSTS_REACHABLE";
pub const NO_COMPATIBLE_CLUSTER_HOST: &str = "NO_COMPATIBLE_CLUSTER_HOST";
pub const NO_HOSTS_AVAILABLE: &str = "NO_HOSTS_AVAILABLE";
pub const NO_LOCAL_STORAGE: &str = "NO_LOCAL_STORAGE";
pub const NO_MORE_REDO_LOGS_ALLOWED: &str = "NO_MORE_REDO_LOGS_ALLOWED";
pub const NO_REPOSITORIES_CONFIGURED: &str = "NO_REPOSITORIES_CONFIGURED";
pub const NO_REPOSITORY_ENABLED: &str = "NO_REPOSITORY_ENABLED";
pub const NVIDIA_SRIOV_MISCONFIGURED: &str = "NVIDIA_SRIOV_MISCONFIGURED";
pub const NVIDIA_TOOLS_ERROR: &str = "NVIDIA_TOOLS_ERROR";
pub const OBJECT_NOLONGER_EXISTS: &str = "OBJECT_NOLONGER_EXISTS";
pub const ONLY_ALLOWED_ON_OEM_EDITION: &str = "ONLY_ALLOWED_ON_OEM_EDITION";
pub const OPENVSWITCH_NOT_ACTIVE: &str = "OPENVSWITCH_NOT_ACTIVE";
pub const OPERATION_BLOCKED: &str = "OPERATION_BLOCKED";
pub const OPERATION_NOT_ALLOWED: &str = "OPERATION_NOT_ALLOWED";
pub const OPERATION_PARTIALLY_FAILED: &str = "OPERATION_PARTIALLY_FAILED";
pub const OTHER_OPERATION_IN_PROGRESS: &str = "OTHER_OPERATION_IN_PROGRESS";
pub const OUT_OF_SPACE: &str = "OUT_OF_SPACE";
pub const PATCH_ALREADY_APPLIED: &str = "PATCH_ALREADY_APPLIED";
pub const PATCH_ALREADY_EXISTS: &str = "PATCH_ALREADY_EXISTS";
pub const PATCH_APPLY_FAILED: &str = "PATCH_APPLY_FAILED";
pub const PATCH_APPLY_FAILED_BACKUP_FILES_EXIST: &str = "PATCH_APPLY_FAILED_BACKUP_FILES_EXIST";
pub const PATCH_IS_APPLIED: &str = "PATCH_IS_APPLIED";
pub const PATCH_PRECHECK_FAILED_ISO_MOUNTED: &str = "PATCH_PRECHECK_FAILED_ISO_MOUNTED";
pub const PATCH_PRECHECK_FAILED_OUT_OF_SPACE: &str = "PATCH_PRECHECK_FAILED_OUT_OF_SPACE";
pub const PATCH_PRECHECK_FAILED_PREREQUISITE_MISSING: &str = "PATCH_PRECHECK_FAILED_PREREQUISITE_MISSING";
pub const PATCH_PRECHECK_FAILED_UNKNOWN_ERROR: &str = "PATCH_PRECHECK_FAILED_UNKNOWN_ERROR";
pub const PATCH_PRECHECK_FAILED_VM_RUNNING: &str = "PATCH_PRECHECK_FAILED_VM_RUNNING";
pub const PATCH_PRECHECK_FAILED_WRONG_SERVER_BUILD: &str = "PATCH_PRECHECK_FAILED_WRONG_SERVER_BUILD";
pub const PATCH_PRECHECK_FAILED_WRONG_SERVER_VERSION: &str = "PATCH_PRECHECK_FAILED_WRONG_SERVER_VERSION";
pub const PBD_EXISTS: &str = "PBD_EXISTS";
pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
pub const PGPU_INSUFFICIENT_CAPACITY_FOR_VGPU: &str = "PGPU_INSUFFICIENT_CAPACITY_FOR_VGPU";
pub const PGPU_IN_USE_BY_VM: &str = "PGPU_IN_USE_BY_VM";
pub const PGPU_NOT_COMPATIBLE_WITH_GPU_GROUP: &str = "PGPU_NOT_COMPATIBLE_WITH_GPU_GROUP";
pub const PIF_ALLOWS_UNPLUG: &str = "PIF_ALLOWS_UNPLUG";
pub const PIF_ALREADY_BONDED: &str = "PIF_ALREADY_BONDED";
pub const PIF_BOND_MORE_THAN_ONE_IP: &str = "PIF_BOND_MORE_THAN_ONE_IP";
pub const PIF_BOND_NEEDS_MORE_MEMBERS: &str = "PIF_BOND_NEEDS_MORE_MEMBERS";
pub const PIF_CANNOT_BOND_CROSS_HOST: &str = "PIF_CANNOT_BOND_CROSS_HOST";
pub const PIF_CONFIGURATION_ERROR: &str = "PIF_CONFIGURATION_ERROR";
pub const PIF_DEVICE_NOT_FOUND: &str = "PIF_DEVICE_NOT_FOUND";
pub const PIF_DOES_NOT_ALLOW_UNPLUG: &str = "PIF_DOES_NOT_ALLOW_UNPLUG";
pub const PIF_HAS_FCOE_SR_IN_USE: &str = "PIF_HAS_FCOE_SR_IN_USE";
pub const PIF_HAS_NO_NETWORK_CONFIGURATION: &str = "PIF_HAS_NO_NETWORK_CONFIGURATION";
pub const PIF_HAS_NO_V6_NETWORK_CONFIGURATION: &str = "PIF_HAS_NO_V6_NETWORK_CONFIGURATION";
pub const PIF_INCOMPATIBLE_PRIMARY_ADDRESS_TYPE: &str = "PIF_INCOMPATIBLE_PRIMARY_ADDRESS_TYPE";
pub const PIF_IS_MANAGEMENT_INTERFACE: &str = "PIF_IS_MANAGEMENT_INTERFACE";
pub const PIF_IS_NOT_PHYSICAL: &str = "PIF_IS_NOT_PHYSICAL";
pub const PIF_IS_NOT_SRIOV_CAPABLE: &str = "PIF_IS_NOT_SRIOV_CAPABLE";
pub const PIF_IS_PHYSICAL: &str = "PIF_IS_PHYSICAL";
pub const PIF_IS_SRIOV_LOGICAL: &str = "PIF_IS_SRIOV_LOGICAL";
pub const PIF_IS_VLAN: &str = "PIF_IS_VLAN";
pub const PIF_NOT_ATTACHED_TO_HOST: &str = "PIF_NOT_ATTACHED_TO_HOST";
pub const PIF_NOT_PRESENT: &str = "PIF_NOT_PRESENT";
pub const PIF_SRIOV_STILL_EXISTS: &str = "PIF_SRIOV_STILL_EXISTS";
pub const PIF_TUNNEL_STILL_EXISTS: &str = "PIF_TUNNEL_STILL_EXISTS";
pub const PIF_UNMANAGED: &str = "PIF_UNMANAGED";
pub const PIF_VLAN_EXISTS: &str = "PIF_VLAN_EXISTS";
pub const PIF_VLAN_STILL_EXISTS: &str = "PIF_VLAN_STILL_EXISTS";
pub const POOL_AUTH_ALREADY_ENABLED: &str = "POOL_AUTH_ALREADY_ENABLED";
pub const POOL_AUTH_DISABLE_FAILED: &str = "POOL_AUTH_DISABLE_FAILED";
pub const POOL_AUTH_DISABLE_FAILED_INVALID_ACCOUNT: &str = "POOL_AUTH_DISABLE_FAILED_INVALID_ACCOUNT";
pub const POOL_AUTH_DISABLE_FAILED_PERMISSION_DENIED: &str = "POOL_AUTH_DISABLE_FAILED_PERMISSION_DENIED";
pub const POOL_AUTH_DISABLE_FAILED_WRONG_CREDENTIALS: &str = "POOL_AUTH_DISABLE_FAILED_WRONG_CREDENTIALS";
pub const POOL_AUTH_ENABLE_FAILED: &str = "POOL_AUTH_ENABLE_FAILED";
pub const POOL_AUTH_ENABLE_FAILED_DOMAIN_LOOKUP_FAILED: &str = "POOL_AUTH_ENABLE_FAILED_DOMAIN_LOOKUP_FAILED";
pub const POOL_AUTH_ENABLE_FAILED_DUPLICATE_HOSTNAME: &str = "POOL_AUTH_ENABLE_FAILED_DUPLICATE_HOSTNAME";
pub const POOL_AUTH_ENABLE_FAILED_INVALID_ACCOUNT: &str = "POOL_AUTH_ENABLE_FAILED_INVALID_ACCOUNT";
pub const POOL_AUTH_ENABLE_FAILED_INVALID_OU: &str = "POOL_AUTH_ENABLE_FAILED_INVALID_OU";
pub const POOL_AUTH_ENABLE_FAILED_PERMISSION_DENIED: &str = "POOL_AUTH_ENABLE_FAILED_PERMISSION_DENIED";
pub const POOL_AUTH_ENABLE_FAILED_UNAVAILABLE: &str = "POOL_AUTH_ENABLE_FAILED_UNAVAILABLE";
pub const POOL_AUTH_ENABLE_FAILED_WRONG_CREDENTIALS: &str = "POOL_AUTH_ENABLE_FAILED_WRONG_CREDENTIALS";
pub const POOL_JOINING_EXTERNAL_AUTH_MISMATCH: &str = "POOL_JOINING_EXTERNAL_AUTH_MISMATCH";
pub const POOL_JOINING_HOST_CA_CERTIFICATES_CONFLICT: &str = "POOL_JOINING_HOST_CA_CERTIFICATES_CONFLICT";
pub const POOL_JOINING_HOST_HAS_BONDS: &str = "POOL_JOINING_HOST_HAS_BONDS";
pub const POOL_JOINING_HOST_HAS_NETWORK_SRIOVS: &str = "POOL_JOINING_HOST_HAS_NETWORK_SRIOVS";
pub const POOL_JOINING_HOST_HAS_NON_MANAGEMENT_VLANS: &str = "POOL_JOINING_HOST_HAS_NON_MANAGEMENT_VLANS";
pub const POOL_JOINING_HOST_HAS_TUNNELS: &str = "POOL_JOINING_HOST_HAS_TUNNELS";
pub const POOL_JOINING_HOST_MANAGEMENT_VLAN_DOES_NOT_MATCH: &str = "POOL_JOINING_HOST_MANAGEMENT_VLAN_DOES_NOT_MATCH";
pub const POOL_JOINING_HOST_MUST_HAVE_PHYSICAL_MANAGEMENT_NIC: &str = "POOL_JOINING_HOST_MUST_HAVE_PHYSICAL_MANAGEMENT_NIC";
pub const POOL_JOINING_HOST_MUST_HAVE_SAME_API_VERSION: &str = "POOL_JOINING_HOST_MUST_HAVE_SAME_API_VERSION";
pub const POOL_JOINING_HOST_MUST_HAVE_SAME_DB_SCHEMA: &str = "POOL_JOINING_HOST_MUST_HAVE_SAME_DB_SCHEMA";
pub const POOL_JOINING_HOST_MUST_HAVE_SAME_PRODUCT_VERSION: &str = "POOL_JOINING_HOST_MUST_HAVE_SAME_PRODUCT_VERSION";
pub const POOL_JOINING_HOST_MUST_ONLY_HAVE_PHYSICAL_PIFS: &str = "POOL_JOINING_HOST_MUST_ONLY_HAVE_PHYSICAL_PIFS";
pub const POOL_JOINING_HOST_TLS_VERIFICATION_MISMATCH: &str = "POOL_JOINING_HOST_TLS_VERIFICATION_MISMATCH";
pub const POOL_SECRET_ROTATION_PENDING: &str = "POOL_SECRET_ROTATION_PENDING";
pub const PROVISION_FAILED_OUT_OF_SPACE: &str = "PROVISION_FAILED_OUT_OF_SPACE";
pub const PROVISION_ONLY_ALLOWED_ON_TEMPLATE: &str = "PROVISION_ONLY_ALLOWED_ON_TEMPLATE";
pub const PUSB_VDI_CONFLICT: &str = "PUSB_VDI_CONFLICT";
pub const PVS_CACHE_STORAGE_ALREADY_PRESENT: &str = "PVS_CACHE_STORAGE_ALREADY_PRESENT";
pub const PVS_CACHE_STORAGE_IS_IN_USE: &str = "PVS_CACHE_STORAGE_IS_IN_USE";
pub const PVS_PROXY_ALREADY_PRESENT: &str = "PVS_PROXY_ALREADY_PRESENT";
pub const PVS_SERVER_ADDRESS_IN_USE: &str = "PVS_SERVER_ADDRESS_IN_USE";
pub const PVS_SITE_CONTAINS_RUNNING_PROXIES: &str = "PVS_SITE_CONTAINS_RUNNING_PROXIES";
pub const PVS_SITE_CONTAINS_SERVERS: &str = "PVS_SITE_CONTAINS_SERVERS";
pub const RBAC_PERMISSION_DENIED: &str = "RBAC_PERMISSION_DENIED";
pub const REDO_LOG_IS_ENABLED: &str = "REDO_LOG_IS_ENABLED";
pub const REPOSITORY_ALREADY_EXISTS: &str = "REPOSITORY_ALREADY_EXISTS";
pub const REPOSITORY_CLEANUP_FAILED: &str = "REPOSITORY_CLEANUP_FAILED";
pub const REPOSITORY_IS_IN_USE: &str = "REPOSITORY_IS_IN_USE";
pub const REPOSYNC_FAILED: &str = "REPOSYNC_FAILED";
pub const REQUIRED_PIF_IS_UNPLUGGED: &str = "REQUIRED_PIF_IS_UNPLUGGED";
pub const RESTORE_INCOMPATIBLE_VERSION: &str = "RESTORE_INCOMPATIBLE_VERSION";
pub const RESTORE_SCRIPT_FAILED: &str = "RESTORE_SCRIPT_FAILED";
pub const RESTORE_TARGET_MGMT_IF_NOT_IN_BACKUP: &str = "RESTORE_TARGET_MGMT_IF_NOT_IN_BACKUP";
pub const RESTORE_TARGET_MISSING_DEVICE: &str = "RESTORE_TARGET_MISSING_DEVICE";
pub const REVERT_ONLY_ALLOWED_ON_SNAPSHOT: &str = "REVERT_ONLY_ALLOWED_ON_SNAPSHOT";
pub const ROLE_ALREADY_EXISTS: &str = "ROLE_ALREADY_EXISTS";
pub const ROLE_NOT_FOUND: &str = "ROLE_NOT_FOUND";
pub const SERVER_CERTIFICATE_CHAIN_INVALID: &str = "SERVER_CERTIFICATE_CHAIN_INVALID";
pub const SERVER_CERTIFICATE_EXPIRED: &str = "SERVER_CERTIFICATE_EXPIRED";
pub const SERVER_CERTIFICATE_INVALID: &str = "SERVER_CERTIFICATE_INVALID";
pub const SERVER_CERTIFICATE_KEY_ALGORITHM_NOT_SUPPORTED: &str = "SERVER_CERTIFICATE_KEY_ALGORITHM_NOT_SUPPORTED";
pub const SERVER_CERTIFICATE_KEY_INVALID: &str = "SERVER_CERTIFICATE_KEY_INVALID";
pub const SERVER_CERTIFICATE_KEY_MISMATCH: &str = "SERVER_CERTIFICATE_KEY_MISMATCH";
pub const SERVER_CERTIFICATE_KEY_RSA_LENGTH_NOT_SUPPORTED: &str = "SERVER_CERTIFICATE_KEY_RSA_LENGTH_NOT_SUPPORTED";
pub const SERVER_CERTIFICATE_KEY_RSA_MULTI_NOT_SUPPORTED: &str = "SERVER_CERTIFICATE_KEY_RSA_MULTI_NOT_SUPPORTED";
pub const SERVER_CERTIFICATE_NOT_VALID_YET: &str = "SERVER_CERTIFICATE_NOT_VALID_YET";
pub const SERVER_CERTIFICATE_SIGNATURE_NOT_SUPPORTED: &str = "SERVER_CERTIFICATE_SIGNATURE_NOT_SUPPORTED";
pub const SESSION_AUTHENTICATION_FAILED: &str = "SESSION_AUTHENTICATION_FAILED";
pub const SESSION_AUTHORIZATION_FAILED: &str = "SESSION_AUTHORIZATION_FAILED";
pub const SESSION_INVALID: &str = "SESSION_INVALID";
pub const SESSION_NOT_REGISTERED: &str = "SESSION_NOT_REGISTERED";
pub const SLAVE_REQUIRES_MANAGEMENT_INTERFACE: &str = "SLAVE_REQUIRES_MANAGEMENT_INTERFACE";
pub const SM_PLUGIN_COMMUNICATION_FAILURE: &str = "SM_PLUGIN_COMMUNICATION_FAILURE";
pub const SR_ATTACHED: &str = "SR_ATTACHED";
pub const SR_ATTACH_FAILED: &str = "SR_ATTACH_FAILED";
pub const SR_BACKEND_FAILURE: &str = "SR_BACKEND_FAILURE";
pub const SR_DEVICE_IN_USE: &str = "SR_DEVICE_IN_USE";
pub const SR_DOES_NOT_SUPPORT_MIGRATION: &str = "SR_DOES_NOT_SUPPORT_MIGRATION";
pub const SR_FULL: &str = "SR_FULL";
pub const SR_HAS_MULTIPLE_PBDS: &str = "SR_HAS_MULTIPLE_PBDS";
pub const SR_HAS_NO_PBDS: &str = "SR_HAS_NO_PBDS";
pub const SR_HAS_PBD: &str = "SR_HAS_PBD";
pub const SR_INDESTRUCTIBLE: &str = "SR_INDESTRUCTIBLE";
pub const SR_IS_CACHE_SR: &str = "SR_IS_CACHE_SR";
pub const SR_NOT_ATTACHED: &str = "SR_NOT_ATTACHED";
pub const SR_NOT_EMPTY: &str = "SR_NOT_EMPTY";
pub const SR_NOT_SHARABLE: &str = "SR_NOT_SHARABLE";
pub const SR_NOT_SHARED: &str = "SR_NOT_SHARED";
pub const SR_OPERATION_NOT_SUPPORTED: &str = "SR_OPERATION_NOT_SUPPORTED";
pub const SR_REQUIRES_UPGRADE: &str = "SR_REQUIRES_UPGRADE";
pub const SR_SOURCE_SPACE_INSUFFICIENT: &str = "SR_SOURCE_SPACE_INSUFFICIENT";
pub const SR_UNKNOWN_DRIVER: &str = "SR_UNKNOWN_DRIVER";
pub const SR_UUID_EXISTS: &str = "SR_UUID_EXISTS";
pub const SR_VDI_LOCKING_FAILED: &str = "SR_VDI_LOCKING_FAILED";
pub const SSL_VERIFY_ERROR: &str = "SSL_VERIFY_ERROR";
pub const SUBJECT_ALREADY_EXISTS: &str = "SUBJECT_ALREADY_EXISTS";
pub const SUBJECT_CANNOT_BE_RESOLVED: &str = "SUBJECT_CANNOT_BE_RESOLVED";
pub const SUSPEND_IMAGE_NOT_ACCESSIBLE: &str = "SUSPEND_IMAGE_NOT_ACCESSIBLE";
pub const SUSPEND_VDI_REPLACEMENT_IS_NOT_IDENTICAL: &str = "SUSPEND_VDI_REPLACEMENT_IS_NOT_IDENTICAL";
pub const SYNC_UPDATES_IN_PROGRESS: &str = "SYNC_UPDATES_IN_PROGRESS";
pub const SYSTEM_STATUS_MUST_USE_TAR_ON_OEM: &str = "SYSTEM_STATUS_MUST_USE_TAR_ON_OEM";
pub const SYSTEM_STATUS_RETRIEVAL_FAILED: &str = "SYSTEM_STATUS_RETRIEVAL_FAILED";
pub const TASK_CANCELLED: &str = "TASK_CANCELLED";
pub const TELEMETRY_NEXT_COLLECTION_TOO_LATE: &str = "TELEMETRY_NEXT_COLLECTION_TOO_LATE";
pub const TLS_CONNECTION_FAILED: &str = "TLS_CONNECTION_FAILED";
pub const TLS_VERIFICATION_ENABLE_IN_PROGRESS: &str = "TLS_VERIFICATION_ENABLE_IN_PROGRESS";
pub const TOO_BUSY: &str = "TOO_BUSY";
pub const TOO_MANY_PENDING_TASKS: &str = "TOO_MANY_PENDING_TASKS";
pub const TOO_MANY_STORAGE_MIGRATES: &str = "TOO_MANY_STORAGE_MIGRATES";
pub const TOO_MANY_VUSBS: &str = "TOO_MANY_VUSBS";
pub const TRANSPORT_PIF_NOT_CONFIGURED: &str = "TRANSPORT_PIF_NOT_CONFIGURED";
pub const UNIMPLEMENTED_IN_SM_BACKEND: &str = "UNIMPLEMENTED_IN_SM_BACKEND";
pub const UNKNOWN_BOOTLOADER: &str = "UNKNOWN_BOOTLOADER";
pub const UPDATEINFO_HASH_MISMATCH: &str = "UPDATEINFO_HASH_MISMATCH";
pub const UPDATE_ALREADY_APPLIED: &str = "UPDATE_ALREADY_APPLIED";
pub const UPDATE_ALREADY_APPLIED_IN_POOL: &str = "UPDATE_ALREADY_APPLIED_IN_POOL";
pub const UPDATE_ALREADY_EXISTS: &str = "UPDATE_ALREADY_EXISTS";
pub const UPDATE_APPLY_FAILED: &str = "UPDATE_APPLY_FAILED";
pub const UPDATE_IS_APPLIED: &str = "UPDATE_IS_APPLIED";
pub const UPDATE_POOL_APPLY_FAILED: &str = "UPDATE_POOL_APPLY_FAILED";
pub const UPDATE_PRECHECK_FAILED_CONFLICT_PRESENT: &str = "UPDATE_PRECHECK_FAILED_CONFLICT_PRESENT";
pub const UPDATE_PRECHECK_FAILED_GPGKEY_NOT_IMPORTED: &str = "UPDATE_PRECHECK_FAILED_GPGKEY_NOT_IMPORTED";
pub const UPDATE_PRECHECK_FAILED_OUT_OF_SPACE: &str = "UPDATE_PRECHECK_FAILED_OUT_OF_SPACE";
pub const UPDATE_PRECHECK_FAILED_PREREQUISITE_MISSING: &str = "UPDATE_PRECHECK_FAILED_PREREQUISITE_MISSING";
pub const UPDATE_PRECHECK_FAILED_UNKNOWN_ERROR: &str = "UPDATE_PRECHECK_FAILED_UNKNOWN_ERROR";
pub const UPDATE_PRECHECK_FAILED_WRONG_SERVER_VERSION: &str = "UPDATE_PRECHECK_FAILED_WRONG_SERVER_VERSION";
pub const USB_ALREADY_ATTACHED: &str = "USB_ALREADY_ATTACHED";
pub const USB_GROUP_CONFLICT: &str = "USB_GROUP_CONFLICT";
pub const USB_GROUP_CONTAINS_NO_PUSBS: &str = "USB_GROUP_CONTAINS_NO_PUSBS";
pub const USB_GROUP_CONTAINS_PUSB: &str = "USB_GROUP_CONTAINS_PUSB";
pub const USB_GROUP_CONTAINS_VUSB: &str = "USB_GROUP_CONTAINS_VUSB";
pub const USER_IS_NOT_LOCAL_SUPERUSER: &str = "USER_IS_NOT_LOCAL_SUPERUSER";
pub const UUID_INVALID: &str = "UUID_INVALID";
pub const V6D_FAILURE: &str = "V6D_FAILURE";
pub const VALUE_NOT_SUPPORTED: &str = "VALUE_NOT_SUPPORTED";
pub const VBD_CDS_MUST_BE_READONLY: &str = "VBD_CDS_MUST_BE_READONLY";
pub const VBD_IS_EMPTY: &str = "VBD_IS_EMPTY";
pub const VBD_MISSING: &str = "VBD_MISSING";
pub const VBD_NOT_EMPTY: &str = "VBD_NOT_EMPTY";
pub const VBD_NOT_REMOVABLE_MEDIA: &str = "VBD_NOT_REMOVABLE_MEDIA";
pub const VBD_NOT_UNPLUGGABLE: &str = "VBD_NOT_UNPLUGGABLE";
pub const VBD_TRAY_LOCKED: &str = "VBD_TRAY_LOCKED";
pub const VCPU_MAX_NOT_CORES_PER_SOCKET_MULTIPLE: &str = "VCPU_MAX_NOT_CORES_PER_SOCKET_MULTIPLE";
pub const VDI_CBT_ENABLED: &str = "VDI_CBT_ENABLED";
pub const VDI_CONTAINS_METADATA_OF_THIS_POOL: &str = "VDI_CONTAINS_METADATA_OF_THIS_POOL";
pub const VDI_CONTENT_ID_MISSING: &str = "VDI_CONTENT_ID_MISSING";
pub const VDI_COPY_FAILED: &str = "VDI_COPY_FAILED";
pub const VDI_HAS_RRDS: &str = "VDI_HAS_RRDS";
pub const VDI_INCOMPATIBLE_TYPE: &str = "VDI_INCOMPATIBLE_TYPE";
pub const VDI_IN_USE: &str = "VDI_IN_USE";
pub const VDI_IO_ERROR: &str = "VDI_IO_ERROR";
pub const VDI_IS_A_PHYSICAL_DEVICE: &str = "VDI_IS_A_PHYSICAL_DEVICE";
pub const VDI_IS_ENCRYPTED: &str = "VDI_IS_ENCRYPTED";
pub const VDI_IS_NOT_ISO: &str = "VDI_IS_NOT_ISO";
pub const VDI_IS_SHARABLE: &str = "VDI_IS_SHARABLE";
pub const VDI_LOCATION_MISSING: &str = "VDI_LOCATION_MISSING";
pub const VDI_MISSING: &str = "VDI_MISSING";
pub const VDI_NEEDS_VM_FOR_MIGRATE: &str = "VDI_NEEDS_VM_FOR_MIGRATE";
pub const VDI_NOT_AVAILABLE: &str = "VDI_NOT_AVAILABLE";
pub const VDI_NOT_IN_MAP: &str = "VDI_NOT_IN_MAP";
pub const VDI_NOT_MANAGED: &str = "VDI_NOT_MANAGED";
pub const VDI_NOT_SPARSE: &str = "VDI_NOT_SPARSE";
pub const VDI_NO_CBT_METADATA: &str = "VDI_NO_CBT_METADATA";
pub const VDI_ON_BOOT_MODE_INCOMPATIBLE_WITH_OPERATION: &str = "VDI_ON_BOOT_MODE_INCOMPATIBLE_WITH_OPERATION";
pub const VDI_READONLY: &str = "VDI_READONLY";
pub const VDI_TOO_LARGE: &str = "VDI_TOO_LARGE";
pub const VDI_TOO_SMALL: &str = "VDI_TOO_SMALL";
pub const VGPU_DESTINATION_INCOMPATIBLE: &str = "VGPU_DESTINATION_INCOMPATIBLE";
pub const VGPU_GUEST_DRIVER_LIMIT: &str = "VGPU_GUEST_DRIVER_LIMIT";
pub const VGPU_SUSPENSION_NOT_SUPPORTED: &str = "VGPU_SUSPENSION_NOT_SUPPORTED";
pub const VGPU_TYPE_NOT_COMPATIBLE: &str = "VGPU_TYPE_NOT_COMPATIBLE";
pub const VGPU_TYPE_NOT_COMPATIBLE_WITH_RUNNING_TYPE: &str = "VGPU_TYPE_NOT_COMPATIBLE_WITH_RUNNING_TYPE";
pub const VGPU_TYPE_NOT_ENABLED: &str = "VGPU_TYPE_NOT_ENABLED";
pub const VGPU_TYPE_NOT_SUPPORTED: &str = "VGPU_TYPE_NOT_SUPPORTED";
pub const VGPU_TYPE_NO_LONGER_SUPPORTED: &str = "VGPU_TYPE_NO_LONGER_SUPPORTED";
pub const VIF_IN_USE: &str = "VIF_IN_USE";
pub const VIF_NOT_IN_MAP: &str = "VIF_NOT_IN_MAP";
pub const VLAN_IN_USE: &str = "VLAN_IN_USE";
pub const VLAN_TAG_INVALID: &str = "VLAN_TAG_INVALID";
pub const VMPP_ARCHIVE_MORE_FREQUENT_THAN_BACKUP: &str = "VMPP_ARCHIVE_MORE_FREQUENT_THAN_BACKUP";
pub const VMPP_HAS_VM: &str = "VMPP_HAS_VM";
pub const VMSS_HAS_VM: &str = "VMSS_HAS_VM";
pub const VMS_FAILED_TO_COOPERATE: &str = "VMS_FAILED_TO_COOPERATE";
pub const VM_ASSIGNED_TO_PROTECTION_POLICY: &str = "VM_ASSIGNED_TO_PROTECTION_POLICY";
pub const VM_ASSIGNED_TO_SNAPSHOT_SCHEDULE: &str = "VM_ASSIGNED_TO_SNAPSHOT_SCHEDULE";
pub const VM_ATTACHED_TO_MORE_THAN_ONE_VDI_WITH_TIMEOFFSET_MARKED_AS_RESET_ON_BOOT: &str = "VM_ATTACHED_TO_MORE_THAN_ONE_VDI_WITH_TIMEOFFSET_MARKED_AS_RESET_ON_BOOT";
pub const VM_BAD_POWER_STATE: &str = "VM_BAD_POWER_STATE";
pub const VM_BIOS_STRINGS_ALREADY_SET: &str = "VM_BIOS_STRINGS_ALREADY_SET";
pub const VM_CALL_PLUGIN_RATE_LIMIT: &str = "VM_CALL_PLUGIN_RATE_LIMIT";
pub const VM_CANNOT_DELETE_DEFAULT_TEMPLATE: &str = "VM_CANNOT_DELETE_DEFAULT_TEMPLATE";
pub const VM_CHECKPOINT_RESUME_FAILED: &str = "VM_CHECKPOINT_RESUME_FAILED";
pub const VM_CHECKPOINT_SUSPEND_FAILED: &str = "VM_CHECKPOINT_SUSPEND_FAILED";
pub const VM_CRASHED: &str = "VM_CRASHED";
pub const VM_DUPLICATE_VBD_DEVICE: &str = "VM_DUPLICATE_VBD_DEVICE";
pub const VM_FAILED_SHUTDOWN_ACKNOWLEDGMENT: &str = "VM_FAILED_SHUTDOWN_ACKNOWLEDGMENT";
pub const VM_FAILED_SUSPEND_ACKNOWLEDGMENT: &str = "VM_FAILED_SUSPEND_ACKNOWLEDGMENT";
pub const VM_HALTED: &str = "VM_HALTED";
pub const VM_HAS_CHECKPOINT: &str = "VM_HAS_CHECKPOINT";
pub const VM_HAS_NO_SUSPEND_VDI: &str = "VM_HAS_NO_SUSPEND_VDI";
pub const VM_HAS_PCI_ATTACHED: &str = "VM_HAS_PCI_ATTACHED";
pub const VM_HAS_SRIOV_VIF: &str = "VM_HAS_SRIOV_VIF";
pub const VM_HAS_TOO_MANY_SNAPSHOTS: &str = "VM_HAS_TOO_MANY_SNAPSHOTS";
pub const VM_HAS_VGPU: &str = "VM_HAS_VGPU";
pub const VM_HAS_VUSBS: &str = "VM_HAS_VUSBS";
pub const VM_HOST_INCOMPATIBLE_VERSION: &str = "VM_HOST_INCOMPATIBLE_VERSION";
pub const VM_HOST_INCOMPATIBLE_VERSION_MIGRATE: &str = "VM_HOST_INCOMPATIBLE_VERSION_MIGRATE";
pub const VM_HOST_INCOMPATIBLE_VIRTUAL_HARDWARE_PLATFORM_VERSION: &str = "VM_HOST_INCOMPATIBLE_VIRTUAL_HARDWARE_PLATFORM_VERSION";
pub const VM_HVM_REQUIRED: &str = "VM_HVM_REQUIRED";
pub const VM_INCOMPATIBLE_WITH_THIS_HOST: &str = "VM_INCOMPATIBLE_WITH_THIS_HOST";
pub const VM_IS_IMMOBILE: &str = "VM_IS_IMMOBILE";
pub const VM_IS_PART_OF_AN_APPLIANCE: &str = "VM_IS_PART_OF_AN_APPLIANCE";
pub const VM_IS_PROTECTED: &str = "VM_IS_PROTECTED";
pub const VM_IS_SNAPSHOT: &str = "VM_IS_SNAPSHOT";
pub const VM_IS_TEMPLATE: &str = "VM_IS_TEMPLATE";
pub const VM_IS_USING_NESTED_VIRT: &str = "VM_IS_USING_NESTED_VIRT";
pub const VM_LACKS_FEATURE: &str = "VM_LACKS_FEATURE";
pub const VM_LACKS_FEATURE_SHUTDOWN: &str = "VM_LACKS_FEATURE_SHUTDOWN";
pub const VM_LACKS_FEATURE_STATIC_IP_SETTING: &str = "VM_LACKS_FEATURE_STATIC_IP_SETTING";
pub const VM_LACKS_FEATURE_SUSPEND: &str = "VM_LACKS_FEATURE_SUSPEND";
pub const VM_LACKS_FEATURE_VCPU_HOTPLUG: &str = "VM_LACKS_FEATURE_VCPU_HOTPLUG";
pub const VM_MEMORY_SIZE_TOO_LOW: &str = "VM_MEMORY_SIZE_TOO_LOW";
pub const VM_MEMORY_TARGET_WAIT_TIMEOUT: &str = "VM_MEMORY_TARGET_WAIT_TIMEOUT";
pub const VM_MIGRATE_CONTACT_REMOTE_SERVICE_FAILED: &str = "VM_MIGRATE_CONTACT_REMOTE_SERVICE_FAILED";
pub const VM_MIGRATE_FAILED: &str = "VM_MIGRATE_FAILED";
pub const VM_MISSING_PV_DRIVERS: &str = "VM_MISSING_PV_DRIVERS";
pub const VM_NOT_RESIDENT_HERE: &str = "VM_NOT_RESIDENT_HERE";
pub const VM_NO_CRASHDUMP_SR: &str = "VM_NO_CRASHDUMP_SR";
pub const VM_NO_EMPTY_CD_VBD: &str = "VM_NO_EMPTY_CD_VBD";
pub const VM_NO_SUSPEND_SR: &str = "VM_NO_SUSPEND_SR";
pub const VM_NO_VCPUS: &str = "VM_NO_VCPUS";
pub const VM_OLD_PV_DRIVERS: &str = "VM_OLD_PV_DRIVERS";
pub const VM_PCI_BUS_FULL: &str = "VM_PCI_BUS_FULL";
pub const VM_PV_DRIVERS_IN_USE: &str = "VM_PV_DRIVERS_IN_USE";
pub const VM_REBOOTED: &str = "VM_REBOOTED";
pub const VM_REQUIRES_GPU: &str = "VM_REQUIRES_GPU";
pub const VM_REQUIRES_IOMMU: &str = "VM_REQUIRES_IOMMU";
pub const VM_REQUIRES_NETWORK: &str = "VM_REQUIRES_NETWORK";
pub const VM_REQUIRES_SR: &str = "VM_REQUIRES_SR";
pub const VM_REQUIRES_VDI: &str = "VM_REQUIRES_VDI";
pub const VM_REQUIRES_VGPU: &str = "VM_REQUIRES_VGPU";
pub const VM_REQUIRES_VUSB: &str = "VM_REQUIRES_VUSB";
pub const VM_REVERT_FAILED: &str = "VM_REVERT_FAILED";
pub const VM_SHUTDOWN_TIMEOUT: &str = "VM_SHUTDOWN_TIMEOUT";
pub const VM_SNAPSHOT_FAILED: &str = "VM_SNAPSHOT_FAILED";
pub const VM_SNAPSHOT_WITH_QUIESCE_FAILED: &str = "VM_SNAPSHOT_WITH_QUIESCE_FAILED";
pub const VM_SNAPSHOT_WITH_QUIESCE_NOT_SUPPORTED: &str = "VM_SNAPSHOT_WITH_QUIESCE_NOT_SUPPORTED";
pub const VM_SNAPSHOT_WITH_QUIESCE_PLUGIN_DEOS_NOT_RESPOND: &str = "VM_SNAPSHOT_WITH_QUIESCE_PLUGIN_DEOS_NOT_RESPOND";
pub const VM_SNAPSHOT_WITH_QUIESCE_TIMEOUT: &str = "VM_SNAPSHOT_WITH_QUIESCE_TIMEOUT";
pub const VM_SUSPEND_TIMEOUT: &str = "VM_SUSPEND_TIMEOUT";
pub const VM_TOO_MANY_VCPUS: &str = "VM_TOO_MANY_VCPUS";
pub const VM_TO_IMPORT_IS_NOT_NEWER_VERSION: &str = "VM_TO_IMPORT_IS_NOT_NEWER_VERSION";
pub const VM_UNSAFE_BOOT: &str = "VM_UNSAFE_BOOT";
pub const VTPM_MAX_AMOUNT_REACHED: &str = "VTPM_MAX_AMOUNT_REACHED";
pub const WLB_AUTHENTICATION_FAILED: &str = "WLB_AUTHENTICATION_FAILED";
pub const WLB_CONNECTION_REFUSED: &str = "WLB_CONNECTION_REFUSED";
pub const WLB_CONNECTION_RESET: &str = "WLB_CONNECTION_RESET";
pub const WLB_DISABLED: &str = "WLB_DISABLED";
pub const WLB_INTERNAL_ERROR: &str = "WLB_INTERNAL_ERROR";
pub const WLB_MALFORMED_REQUEST: &str = "WLB_MALFORMED_REQUEST";
pub const WLB_MALFORMED_RESPONSE: &str = "WLB_MALFORMED_RESPONSE";
pub const WLB_NOT_INITIALIZED: &str = "WLB_NOT_INITIALIZED";
pub const WLB_TIMEOUT: &str = "WLB_TIMEOUT";
pub const WLB_UNKNOWN_HOST: &str = "WLB_UNKNOWN_HOST";
pub const WLB_URL_INVALID: &str = "WLB_URL_INVALID";
pub const WLB_XENSERVER_AUTHENTICATION_FAILED: &str = "WLB_XENSERVER_AUTHENTICATION_FAILED";
pub const WLB_XENSERVER_CONNECTION_REFUSED: &str = "WLB_XENSERVER_CONNECTION_REFUSED";
pub const WLB_XENSERVER_MALFORMED_RESPONSE: &str = "WLB_XENSERVER_MALFORMED_RESPONSE";
pub const WLB_XENSERVER_TIMEOUT: &str = "WLB_XENSERVER_TIMEOUT";
pub const WLB_XENSERVER_UNKNOWN_HOST: &str = "WLB_XENSERVER_UNKNOWN_HOST";
pub const XAPI_HOOK_FAILED: &str = "XAPI_HOOK_FAILED";
pub const XENAPI_MISSING_PLUGIN: &str = "XENAPI_MISSING_PLUGIN";
pub const XENAPI_PLUGIN_FAILURE: &str = "XENAPI_PLUGIN_FAILURE";
pub const XEN_INCOMPATIBLE: &str = "XEN_INCOMPATIBLE";
pub const XEN_VSS_REQ_ERROR_ADDING_VOLUME_TO_SNAPSET_FAILED: &str = "XEN_VSS_REQ_ERROR_ADDING_VOLUME_TO_SNAPSET_FAILED";
pub const XEN_VSS_REQ_ERROR_CREATING_SNAPSHOT: &str = "XEN_VSS_REQ_ERROR_CREATING_SNAPSHOT";
pub const XEN_VSS_REQ_ERROR_CREATING_SNAPSHOT_XML_STRING: &str = "XEN_VSS_REQ_ERROR_CREATING_SNAPSHOT_XML_STRING";
pub const XEN_VSS_REQ_ERROR_INIT_FAILED: &str = "XEN_VSS_REQ_ERROR_INIT_FAILED";
pub const XEN_VSS_REQ_ERROR_NO_VOLUMES_SUPPORTED: &str = "XEN_VSS_REQ_ERROR_NO_VOLUMES_SUPPORTED";
pub const XEN_VSS_REQ_ERROR_PREPARING_WRITERS: &str = "XEN_VSS_REQ_ERROR_PREPARING_WRITERS";
pub const XEN_VSS_REQ_ERROR_PROV_NOT_LOADED: &str = "XEN_VSS_REQ_ERROR_PROV_NOT_LOADED";
pub const XEN_VSS_REQ_ERROR_START_SNAPSHOT_SET_FAILED: &str = "XEN_VSS_REQ_ERROR_START_SNAPSHOT_SET_FAILED";
pub const XMLRPC_UNMARSHAL_FAILURE: &str = "XMLRPC_UNMARSHAL_FAILURE";
