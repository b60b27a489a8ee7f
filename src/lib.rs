//! A typed client for the XenAPI management interface.
//!
//! Every server class lives under [`api`] as a module of free functions
//! taking a logged in [`Session`]:
//!
//! ```no_run
//! use xenapi::{ClientConfig, Session, api};
//!
//! # async fn run() -> Result<(), xenapi::Error> {
//! let config = ClientConfig::new("https://xen.example.com/".parse().unwrap());
//! let session = Session::new(config)?;
//! session.login_with_password("root", "secret").await?;
//!
//! for host in api::host::get_all(&session).await? {
//!     let record = api::host::get_record(&session, &host).await?;
//!     println!("{} {}", host, record.name_label);
//! }
//!
//! session.logout().await
//! # }
//! ```

#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod codes;
mod config;
mod error;
mod http;
#[macro_use]
pub mod marshal;
mod session;
pub mod task;
mod tls;
mod version;

pub use config::{ClientConfig, PollConfig};
pub use error::{Error, ErrorKind, RpcError, TransportError};
pub use http::HttpError;
pub use marshal::{Class, FromValue, Ref, ToValue};
pub use session::Session;
pub use tls::{TlsConfig, TlsError};
pub use version::ApiVersion;
pub use xmlrpc::Value;

#[macro_use]
extern crate tracing;
