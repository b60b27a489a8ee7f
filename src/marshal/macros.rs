/// Declares a record struct and its conversions. Every field names the
/// member it is stored under on the wire.
///
/// ```ignore
/// record! {
///     pub struct VlanRecord {
///         uuid: String = "uuid",
///         tagged_pif: PifRef = "tagged_PIF",
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::marshal::ToValue for $name {
            fn to_value(
                &self,
                context: &str,
            ) -> ::std::result::Result<$crate::Value, $crate::Error> {
                let members = [
                    $(
                        (
                            $wire,
                            $crate::marshal::ToValue::to_value(
                                &self.$field,
                                &::std::format!("{}.{}", context, $wire),
                            )?,
                        ),
                    )*
                ];

                Ok(members.into_iter().collect())
            }
        }

        impl $crate::marshal::FromValue for $name {
            fn from_value(
                context: &str,
                value: &$crate::Value,
            ) -> ::std::result::Result<Self, $crate::Error> {
                let members = $crate::marshal::expect_struct(context, value)?;

                Ok($name {
                    $(
                        $field: $crate::marshal::field(context, members, $wire)?,
                    )*
                })
            }
        }
    };
}

/// Declares an enum whose variants map to wire tags. Tags the client does
/// not know decode into `Unknown` instead of failing.
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $tag:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A tag this client does not know, kept verbatim.
            Unknown(::std::string::String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $tag, )*
                    $name::Unknown(tag) => tag,
                }
            }

            /// Tags compare case-insensitively.
            pub fn from_tag(tag: &str) -> Self {
                $(
                    if tag.eq_ignore_ascii_case($tag) {
                        return $name::$variant;
                    }
                )*

                $name::Unknown(tag.to_string())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::marshal::ToValue for $name {
            fn to_value(
                &self,
                _context: &str,
            ) -> ::std::result::Result<$crate::Value, $crate::Error> {
                Ok($crate::Value::String(self.as_str().to_string()))
            }
        }

        impl $crate::marshal::FromValue for $name {
            fn from_value(
                context: &str,
                value: &$crate::Value,
            ) -> ::std::result::Result<Self, $crate::Error> {
                $crate::marshal::expect_str(context, value).map($name::from_tag)
            }
        }
    };
}

/// Declares the operations of a class as `async fn`s over a [`Session`].
///
/// Each entry names the wire method and the wire name of every argument,
/// a trailing `async name` also generates the `Async.` form returning a
/// task reference.
///
/// ```ignore
/// rpc! {
///     pub fn get_tag("VLAN.get_tag", self_: &VlanRef = "self") -> i64;
///     pub fn destroy("VLAN.destroy", self_: &VlanRef = "self") -> (), async async_destroy;
/// }
/// ```
///
/// [`Session`]: crate::Session
#[macro_export]
macro_rules! rpc {
    (@op [$(#[$meta:meta])*] $name:ident
        ($method:literal $(, $arg:ident : $ty:ty = $wire:literal)* $(,)?) $ret:ty
    ) => {
        $(#[$meta])*
        pub async fn $name(
            session: &$crate::Session,
            $( $arg: $ty, )*
        ) -> ::std::result::Result<$ret, $crate::Error> {
            let args = ::std::vec![
                $(
                    $crate::marshal::ToValue::to_value(
                        &$arg,
                        ::std::concat!($method, "(", $wire, ")"),
                    )?,
                )*
            ];

            let result = session.invoke($method, args).await?;
            $crate::marshal::FromValue::from_value(::std::concat!($method, " -> "), &result)
        }
    };

    (@async $name:ident
        ($method:literal $(, $arg:ident : $ty:ty = $wire:literal)* $(,)?)
    ) => {
        #[doc = ::std::concat!("Starts `", $method, "` as a server task.")]
        pub async fn $name(
            session: &$crate::Session,
            $( $arg: $ty, )*
        ) -> ::std::result::Result<$crate::api::TaskRef, $crate::Error> {
            let args = ::std::vec![
                $(
                    $crate::marshal::ToValue::to_value(
                        &$arg,
                        ::std::concat!("Async.", $method, "(", $wire, ")"),
                    )?,
                )*
            ];

            let result = session.invoke(::std::concat!("Async.", $method), args).await?;
            $crate::marshal::FromValue::from_value(
                ::std::concat!("Async.", $method, " -> "),
                &result,
            )
        }
    };

    (
        $(
            $(#[$meta:meta])*
            pub fn $name:ident $params:tt -> $ret:ty $(, async $async_name:ident)?;
        )*
    ) => {
        $(
            $crate::rpc!(@op [$(#[$meta])*] $name $params $ret);
            $( $crate::rpc!(@async $async_name $params); )?
        )*
    };
}
