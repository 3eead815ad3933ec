//! Typed async client for the Marzban panel REST API.
//!
//! A [`PanelClient`] holds one [`Session`] (panel address, TLS flag, bearer
//! token) and a [`Transport`]. Operations are grouped by resource under
//! [`resources`], each a free function taking the client:
//!
//! ```no_run
//! use sarban::{resources::user, ClientConfig, PanelClient};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = PanelClient::new(&ClientConfig::new("panel.example.com:8000"))?;
//! client.login("admin", "secret").await?;
//!
//! let page = user::list_users(&client, &Default::default()).await?;
//! println!("{} users", page.total);
//! # Ok(())
//! # }
//! ```
//!
//! Every failure is a [`PanelError`]; its [`code`](PanelError::code) is one
//! of the stable strings in [`error::codes`].

pub mod client;
pub mod config;
pub mod error;
pub mod interpret;
pub mod mock;
pub mod resources;
pub mod session;
pub mod transport;

pub use sarban_api as api;

pub use client::PanelClient;
pub use config::{ClientConfig, ConfigError};
pub use error::PanelError;
pub use resources::subscription::subscription_link;
pub use session::Session;
pub use transport::{HttpTransport, Method, PanelRequest, RawResponse, Transport};
