//! Asset families
//!
//! A family names the asset kind in messages and decides who may create one.

use shared_types::RequiredAttribute;

/// Refusal message for car creation without the manufacturer attribute.
pub const MANUFACTURER_MESSAGE: &str = "You must be a manufacturer to carry out this transaction!";

/// A kind of public asset.
pub trait AssetFamily: Send + Sync + 'static {
    /// Lowercase noun used in error messages.
    const NAME: &'static str;

    /// Attribute a caller must carry to create this kind of asset.
    fn create_requirement() -> Option<RequiredAttribute> {
        None
    }

    /// Message returned when the create requirement is not met.
    fn denial_message() -> String {
        format!("You are not allowed to create a {}", Self::NAME)
    }
}

/// Cars: creation restricted to manufacturers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Car;

impl AssetFamily for Car {
    const NAME: &'static str = "car";

    fn create_requirement() -> Option<RequiredAttribute> {
        Some(RequiredAttribute::new("manufacturer", "true"))
    }

    fn denial_message() -> String {
        MANUFACTURER_MESSAGE.to_string()
    }
}

/// Medical records: unrestricted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Medical;

impl AssetFamily for Medical {
    const NAME: &'static str = "medical";
}
