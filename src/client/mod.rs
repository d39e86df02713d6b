//! Client module - enrollment API transports for both WASM and no-WASM environments
//!
//! Both backends implement [`EnrollmentApi`](crate::interface::EnrollmentApi):
//! reqwest outside the browser, gloo_net (the browser's fetch API) inside it.

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::ReqwestClient;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::GlooClient;
