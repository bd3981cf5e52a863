//! # rota-id
//!
//! Typed identifiers for the rota scheduling engine.
//!
//! ## Design Principles
//!
//! - IDs are opaque labels; display names live on the records they identify
//! - Every ID has a canonical string form with strict parsing
//! - IDs are typed so a worker id can never be passed where a shift id is expected
//!
//! ## ID Format
//!
//! Any short ASCII token is accepted, so records imported from elsewhere keep
//! their ids (`w1`, `S1`, `sh1`). IDs minted by this crate use a prefixed ULID:
//!
//! - `wkr_01HV4Z2WQXKJNM8GPQY6VBKC3D`
//! - `site_01HV4Z3MXNKPQR9HSTZ7WCLD4E`
//! - `shft_01HV4Z4NYPLTRS0JTUA8XDME5F`

mod error;
mod macros;
mod types;

pub use error::IdError;
#[doc(hidden)]
pub use macros::validate as validate_id;
pub use macros::MAX_ID_LEN;
pub use types::*;

/// Re-export ulid for consumers that need raw ULID operations
pub use ulid::Ulid;
