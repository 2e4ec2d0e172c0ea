//! Service layer for the tagstat application.
//!
//! This module contains the remote API access logic:
//! - Enveloped GET with retry/rate-limit handling (`ApiClient`)
//! - Contest enumeration (`fetch_contests`)
//! - Standings retrieval (`fetch_standings`)

mod client;
mod contests;
mod standings;

pub use client::ApiClient;
pub use contests::fetch_contests;
pub use standings::fetch_standings;
