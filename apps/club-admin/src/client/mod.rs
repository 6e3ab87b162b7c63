//! Access to the REST backend.
//!
//! Views depend on the [`ApiClient`] trait only; production wiring uses
//! [`HttpApiClient`], tests substitute an in-memory fake.

pub mod api;
pub mod fetch;
pub mod http;
pub mod submit;

pub use api::{ApiClient, ClientError, FormMethod};
pub use http::HttpApiClient;
pub use submit::{submit, SubmitMethod, SubmitOutcome, SubmitRequest};
