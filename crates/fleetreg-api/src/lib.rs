// fleetreg-api: async client for the fleet-registration suite's REST service.
//
// One `RegistryClient` instance is shared by every console (main, police,
// DVLA, supervisor). Failed or unreachable calls degrade to a deterministic
// synthetic catalogue so screens always receive well-formed data.

pub mod classify;
pub mod client;
pub mod error;
pub mod models;
pub mod portal;
pub mod synthetic;
pub mod token;
pub mod transport;

// Endpoint families, implemented as inherent methods on `RegistryClient`.
pub mod auth;
pub mod dvla;
pub mod vehicles;
pub mod violations;

pub use client::{ClientConfig, OriginMode, RegistryClient};
pub use error::Error;
pub use portal::Portal;
pub use token::{Session, SessionStore};
pub use transport::TransportConfig;
