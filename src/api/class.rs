//! Marker types naming the server classes, see [`Ref`](crate::Ref).

use crate::marshal::Class;

macro_rules! classes {
    ($( $(#[$meta:meta])* $marker:ident = $wire:literal; )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $marker {}

            impl Class for $marker {
                const NAME: &'static str = $wire;
            }
        )*
    };
}

classes! {
    Blob = "blob";
    Certificate = "Certificate";
    Feature = "Feature";
    HostCpu = "host_cpu";
    HostCrashdump = "host_crashdump";
    HostMetrics = "host_metrics";
    HostPatch = "host_patch";
    /// A physical host.
    Host = "host";
    Network = "network";
    Pbd = "PBD";
    Pci = "PCI";
    Pgpu = "PGPU";
    Pif = "PIF";
    PoolPatch = "pool_patch";
    /// A pool of hosts sharing storage and networks.
    Pool = "pool";
    PoolUpdate = "pool_update";
    Pusb = "PUSB";
    Repository = "Repository";
    Secret = "secret";
    Session = "session";
    Sr = "SR";
    Subject = "subject";
    Task = "task";
    User = "user";
    Vdi = "VDI";
    Vif = "VIF";
    Vlan = "VLAN";
    Vm = "VM";
}
