//! Superficie de lectura de datos estáticos, independiente del transporte.

pub mod challenges;

pub use challenges::{ChallengesEndpoint, EndpointResponse};
