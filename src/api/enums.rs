use crate::enumeration;

enumeration! {
    pub enum AfterApplyGuidance {
        /// This patch requires HVM guests to be restarted once applied.
        RestartHvm = "restartHVM",
        /// This patch requires PV guests to be restarted once applied.
        RestartPv = "restartPV",
        /// This patch requires the host to be restarted once applied.
        RestartHost = "restartHost",
        /// This patch requires XAPI to be restarted once applied.
        RestartXapi = "restartXAPI",
    }
}

enumeration! {
    pub enum CertificateType {
        /// Certificate that is trusted by the whole pool
        Ca = "ca",
        /// Certificate that identifies a single host to entities outside the pool
        Host = "host",
        /// Certificate that identifies a single host to other pool members
        HostInternal = "host_internal",
    }
}

enumeration! {
    pub enum HostAllowedOperations {
        /// Indicates this host is able to provision another VM
        Provision = "provision",
        /// Indicates this host is evacuating
        Evacuate = "evacuate",
        /// Indicates this host is in the process of shutting itself down
        Shutdown = "shutdown",
        /// Indicates this host is in the process of rebooting
        Reboot = "reboot",
        /// Indicates this host is in the process of being powered on
        PowerOn = "power_on",
        /// This host is starting a VM
        VmStart = "vm_start",
        /// This host is resuming a VM
        VmResume = "vm_resume",
        /// This host is the migration target of a VM
        VmMigrate = "vm_migrate",
        /// Indicates this host is being updated
        ApplyUpdates = "apply_updates",
        /// Indicates this host is in the process of enabling
        Enable = "enable",
    }
}

enumeration! {
    pub enum HostDisplay {
        /// This host is outputting its console to a physical display device
        Enabled = "enabled",
        /// The host will stop outputting its console to a physical display device on next boot
        DisableOnReboot = "disable_on_reboot",
        /// This host is not outputting its console to a physical display device
        Disabled = "disabled",
        /// The host will start outputting its console to a physical display device on next boot
        EnableOnReboot = "enable_on_reboot",
    }
}

enumeration! {
    pub enum HostNumaAffinityPolicy {
        /// VMs are spread across all available NUMA nodes
        Any = "any",
        /// VMs are placed on the smallest number of NUMA nodes that they fit using soft-pinning,
        /// but the policy doesn't guarantee a balanced placement, falling back to the
        /// 'any' policy.
        BestEffort = "best_effort",
        /// Use the NUMA affinity policy that is the default for the current version
        DefaultPolicy = "default_policy",
    }
}

enumeration! {
    pub enum HostSchedGran {
        /// core scheduling
        Core = "core",
        /// CPU scheduling
        Cpu = "cpu",
        /// socket scheduling
        Socket = "socket",
    }
}

enumeration! {
    pub enum LatestSyncedUpdatesAppliedState {
        /// The host is up to date with the latest updates synced from remote CDN
        Yes = "yes",
        /// The host is outdated with the latest updates synced from remote CDN
        No = "no",
        /// If the host is up to date with the latest updates synced from remote CDN is unknown
        UnknownState = "unknown",
    }
}

enumeration! {
    pub enum LivepatchStatus {
        /// An applicable live patch exists for every required component
        OkLivepatchComplete = "ok_livepatch_complete",
        /// An applicable live patch exists but it is not sufficient
        OkLivepatchIncomplete = "ok_livepatch_incomplete",
        /// There is no applicable live patch
        Ok = "ok",
    }
}

enumeration! {
    pub enum NetworkDefaultLockingMode {
        /// Treat all VIFs on this network with locking_mode = 'default' as if they have
        /// locking_mode = 'unlocked'
        Unlocked = "unlocked",
        /// Treat all VIFs on this network with locking_mode = 'default' as if they have
        /// locking_mode = 'disabled'
        Disabled = "disabled",
    }
}

enumeration! {
    pub enum NetworkOperations {
        /// Indicates this network is attaching to a VIF or PIF
        Attaching = "attaching",
    }
}

enumeration! {
    pub enum NetworkPurpose {
        /// Network Block Device service using TLS
        Nbd = "nbd",
        /// Network Block Device service without integrity or confidentiality: NOT RECOMMENDED
        InsecureNbd = "insecure_nbd",
    }
}

enumeration! {
    pub enum PoolAllowedOperations {
        /// Indicates this pool is in the process of enabling HA
        HaEnable = "ha_enable",
        /// Indicates this pool is in the process of disabling HA
        HaDisable = "ha_disable",
        /// Indicates this pool is in the process of creating a cluster
        ClusterCreate = "cluster_create",
        /// Indicates this pool is in the process of changing master
        DesignateNewMaster = "designate_new_master",
        /// Indicates this pool is in the process of configuring repositories
        ConfigureRepositories = "configure_repositories",
        /// Indicates this pool is in the process of syncing updates
        SyncUpdates = "sync_updates",
        /// Indicates this pool is in the process of getting updates
        GetUpdates = "get_updates",
        /// Indicates this pool is in the process of applying updates
        ApplyUpdates = "apply_updates",
        /// Indicates this pool is in the process of enabling TLS verification
        TlsVerificationEnable = "tls_verification_enable",
        /// A certificate refresh and distribution is in progress
        CertRefresh = "cert_refresh",
        /// Indicates this pool is exchanging internal certificates with a new joiner
        ExchangeCertificatesOnJoin = "exchange_certificates_on_join",
        /// Indicates this pool is exchanging ca certificates with a new joiner
        ExchangeCaCertificatesOnJoin = "exchange_ca_certificates_on_join",
        /// Indicates the primary host is sending its certificates to another host
        CopyPrimaryHostCerts = "copy_primary_host_certs",
        /// Ejection of a host from the pool is under way
        Eject = "eject",
    }
}

enumeration! {
    pub enum TaskAllowedOperations {
        /// refers to the operation "cancel"
        Cancel = "cancel",
        /// refers to the operation "destroy"
        Destroy = "destroy",
    }
}

enumeration! {
    pub enum TaskStatusType {
        /// task is in progress
        Pending = "pending",
        /// task was completed successfully
        Success = "success",
        /// task has failed
        Failure = "failure",
        /// task is being cancelled
        Cancelling = "cancelling",
        /// task has been cancelled
        Cancelled = "cancelled",
    }
}

enumeration! {
    pub enum TelemetryFrequency {
        /// Run telemetry task daily
        Daily = "daily",
        /// Run telemetry task weekly
        Weekly = "weekly",
        /// Run telemetry task monthly
        Monthly = "monthly",
    }
}

enumeration! {
    pub enum UpdateAfterApplyGuidance {
        /// This update requires HVM guests to be restarted once applied.
        RestartHvm = "restartHVM",
        /// This update requires PV guests to be restarted once applied.
        RestartPv = "restartPV",
        /// This update requires the host to be restarted once applied.
        RestartHost = "restartHost",
        /// This update requires XAPI to be restarted once applied.
        RestartXapi = "restartXAPI",
    }
}

enumeration! {
    pub enum UpdateGuidances {
        /// Indicates the updated host should reboot as soon as possible
        RebootHost = "reboot_host",
        /// Indicates the updated host should reboot as soon as possible since one or more
        /// livepatch(es) failed to be applied.
        RebootHostOnLivepatchFailure = "reboot_host_on_livepatch_failure",
        /// Indicates the updated host should reboot as soon as possible since one or more kernel
        /// livepatch(es) failed to be applied.
        RebootHostOnKernelLivepatchFailure = "reboot_host_on_kernel_livepatch_failure",
        /// Indicates the updated host should reboot as soon as possible since one or more xen
        /// livepatch(es) failed to be applied.
        RebootHostOnXenLivepatchFailure = "reboot_host_on_xen_livepatch_failure",
        /// Indicates the Toolstack running on the updated host should restart as soon as possible
        RestartToolstack = "restart_toolstack",
        /// Indicates the device model of a running VM should restart as soon as possible
        RestartDeviceModel = "restart_device_model",
        /// Indicates the VM should restart as soon as possible
        RestartVm = "restart_vm",
    }
}

enumeration! {
    pub enum UpdateSyncFrequency {
        /// The update synchronizations happen every day
        Daily = "daily",
        /// The update synchronizations happen every week on the chosen day
        Weekly = "weekly",
    }
}
