//! # chargehound
//!
//! Typed bindings for the Chargehound dispute API.
//!
#![deny(unsafe_code)]

//! ## Features
//!
//! - **Disputes**: create, retrieve, list, update, submit, accept and fetch the submitted response.
//! - **Sparse updates**: only the fields you set are sent, so partial updates never clobber evidence.
//! - **Pluggable transport**: swap the HTTP layer per client or per call through [`HttpTransport`].
//! - **Classified errors**: API failures surface as [`ApiError`] with an [`ErrorKind`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chargehound::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Chargehound::new("test_123")?;
//!
//!     let dispute = client.disputes().retrieve("dp_xxx", None).await?;
//!     println!("{} is {:?}", dispute.id, dispute.state);
//!
//!     let update = DisputeUpdate::new()
//!         .template("unrecognized")
//!         .field("customer_name", "Susie Chargeback");
//!     client.disputes().submit("dp_xxx", &update, None).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod resources;
pub mod types;
pub mod utils;

pub use builder::ChargehoundBuilder;
pub use client::{Chargehound, ClientParams};
pub use config::ClientConfig;
pub use error::{ApiError, ChargehoundError, ErrorKind};
pub use execution::http::interceptor::{HttpInterceptor, HttpRequestContext};
pub use execution::http::transport::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport,
};
pub use resources::Disputes;
pub use types::*;

/// Commonly used items.
pub mod prelude {
    pub use crate::builder::ChargehoundBuilder;
    pub use crate::client::{Chargehound, ClientParams};
    pub use crate::error::{ApiError, ChargehoundError, ErrorKind};
    pub use crate::execution::http::transport::HttpTransport;
    pub use crate::types::{
        CallOptions, CreateDisputeParams, Dispute, DisputeList, DisputeResponse, DisputeUpdate,
        EvidenceFields, FieldValue, ListDisputesParams, Product, ResourceResult,
    };
}
