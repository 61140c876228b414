//! Service layer

pub mod contract;

pub use contract::{CarContract, MedicalContract, PublicAssetContract};
