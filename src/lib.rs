//! Client bindings for the Stack Exchange 2.x JSON API.
//!
//! Builds request URLs from structured parameters, performs the HTTP
//! call, and decodes the generic response wrapper into whatever entity
//! type the caller names. Pagination, quota, and backoff metadata come
//! back on every call; acting on them is left to the caller.
//!
//! <https://api.stackexchange.com/>
//!
//! ```no_run
//! use stackexchange_client::client::Client;
//! use stackexchange_client::models::Question;
//! use stackexchange_client::params::{Order, Params, Sort};
//! use stackexchange_client::{constants, endpoint};
//!
//! # async fn demo() -> Result<(), stackexchange_client::error::Error> {
//! let client = Client::new();
//! let params = Params {
//!     site: constants::STACK_OVERFLOW.to_string(),
//!     sort: Some(Sort::Score),
//!     order: Some(Order::Desc),
//!     page_size: 5,
//!     ..Params::default()
//! };
//! let (wrapper, questions): (_, Vec<Question>) =
//!     client.request(endpoint::QUESTIONS, &params).await?;
//! println!("{} of quota left", wrapper.quota_remaining);
//! for question in questions {
//!     println!("{} ({})", question.title, question.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod params;
pub mod timestamp;
pub mod wrapper;
