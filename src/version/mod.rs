//! Version descriptors, their XML form, and remote update checks
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│  XML codec  │◀────│   Checker   │
//! │  (fetch)    │     │ (en/decode) │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Sources   │     │ Descriptor  │
//! │   (http)    │     │ notes, urls │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`]: `VersionNote` and `VersionUrl` value objects
//! - [`descriptor`]: the `ApplicationVersion` aggregate
//! - [`xml`]: canonical XML encoding and decoding
//! - [`source`]: fetch capability trait for retrieving descriptor files
//! - [`sources`]: concrete source implementations (HTTP)
//! - [`checker`]: current-vs-latest version checking
//! - [`error`]: error types for descriptor, codec, fetch and checker layers

pub mod checker;
pub mod descriptor;
pub mod error;
pub mod source;
pub mod sources;
pub mod types;
pub(crate) mod xml;
