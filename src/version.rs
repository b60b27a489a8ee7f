use std::fmt;

macro_rules! api_versions {
    ($( $variant:ident = ($major:literal, $minor:literal, $release:literal); )*) => {
        /// The API revision a server speaks.
        ///
        /// Ordered by age, [`ApiVersion::Unknown`] sorts before every known
        /// revision so `version >= ApiVersion::V2_15` style checks fail
        /// closed.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ApiVersion {
            #[default]
            Unknown,
            $(
                #[doc = $release]
                $variant,
            )*
        }

        impl ApiVersion {
            pub fn from_parts(major: i64, minor: i64) -> ApiVersion {
                match (major, minor) {
                    $( ($major, $minor) => ApiVersion::$variant, )*
                    _ => ApiVersion::Unknown,
                }
            }

            /// `(major, minor)`, `None` for unknown versions.
            pub fn parts(&self) -> Option<(i64, i64)> {
                match self {
                    $( ApiVersion::$variant => Some(($major, $minor)), )*
                    ApiVersion::Unknown => None,
                }
            }

            /// The product release that introduced this revision.
            pub fn release(&self) -> &'static str {
                match self {
                    $( ApiVersion::$variant => $release, )*
                    ApiVersion::Unknown => "unknown",
                }
            }
        }
    };
}

api_versions! {
    V1_1 = (1, 1, "XenServer 4.0 (rio)");
    V1_2 = (1, 2, "XenServer 4.1 (miami)");
    V1_3 = (1, 3, "XenServer 5.0 (orlando)");
    V1_4 = (1, 4, "Unreleased");
    V1_5 = (1, 5, "XenServer 5.0 update 3");
    V1_6 = (1, 6, "XenServer 5.5 (george)");
    V1_7 = (1, 7, "XenServer 5.6 (midnight-ride)");
    V1_8 = (1, 8, "XenServer 5.6 FP1 (cowley)");
    V1_9 = (1, 9, "XenServer 6.0 (boston)");
    V1_10 = (1, 10, "XenServer 6.1 (tampa)");
    V2_0 = (2, 0, "XenServer 6.2 (clearwater)");
    V2_1 = (2, 1, "XenServer 6.2 SP1 (vgpu-productisation)");
    V2_2 = (2, 2, "XenServer 6.2 SP1 Hotfix 4 (clearwater-felton)");
    V2_3 = (2, 3, "XenServer 6.5 (creedence)");
    V2_4 = (2, 4, "XenServer 6.5 SP1 (cream)");
    V2_5 = (2, 5, "XenServer 7.0 (dundee)");
    V2_6 = (2, 6, "XenServer 7.1 (ely)");
    V2_7 = (2, 7, "XenServer 7.2 (falcon)");
    V2_8 = (2, 8, "XenServer 7.3 (inverness)");
    V2_9 = (2, 9, "XenServer 7.4 (jura)");
    V2_10 = (2, 10, "XenServer 7.5 (kolkata)");
    V2_11 = (2, 11, "XenServer 7.6 (lima)");
    V2_12 = (2, 12, "Citrix Hypervisor 8.0 (naples)");
    V2_13 = (2, 13, "Unreleased (oslo)");
    V2_14 = (2, 14, "Citrix Hypervisor 8.1 (quebec)");
    V2_15 = (2, 15, "Citrix Hypervisor 8.2 (stockholm)");
    V2_20 = (2, 20, "XenServer 8 Preview (nile-preview)");
    V2_21 = (2, 21, "XenServer 8 (nile)");
}

impl ApiVersion {
    /// The newest revision this client knows about.
    pub const LATEST: ApiVersion = ApiVersion::V2_21;
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parts() {
            Some((major, minor)) => write!(f, "{major}.{minor}"),
            None => f.write_str("unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts() {
        assert_eq!(ApiVersion::from_parts(2, 21), ApiVersion::LATEST);
        assert_eq!(ApiVersion::from_parts(1, 10), ApiVersion::V1_10);
        assert_eq!(ApiVersion::from_parts(2, 16), ApiVersion::Unknown);
        assert_eq!(ApiVersion::from_parts(-1, 0), ApiVersion::Unknown);
    }

    #[test]
    fn display_and_order() {
        assert_eq!(ApiVersion::V2_15.to_string(), "2.15");
        assert_eq!(ApiVersion::Unknown.to_string(), "unknown");
        assert_eq!(ApiVersion::V2_21.release(), "XenServer 8 (nile)");

        assert!(ApiVersion::V1_10 < ApiVersion::V2_0);
        assert!(ApiVersion::LATEST >= ApiVersion::V2_15);
        assert!(ApiVersion::Unknown < ApiVersion::V1_1);
    }
}
