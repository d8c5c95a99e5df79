//! User profile domain model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Profile data collected during onboarding.
///
/// Age, height and weight are kept as the integer strings the UI collects
/// them as; parsing and range validation happen at the submission boundary
/// (see `fitscan-api`), not here. The profile is replaced wholesale on
/// onboarding submission and reset to empty on logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in years.
    pub age: String,
    /// Height in centimeters.
    pub height: String,
    /// Weight in kilograms.
    pub weight: String,
    /// Local path of the body photo used for the last analysis, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_image: Option<PathBuf>,
}

impl Profile {
    /// Creates a fully populated profile.
    pub fn new(
        age: impl Into<String>,
        height: impl Into<String>,
        weight: impl Into<String>,
        body_image: Option<PathBuf>,
    ) -> Self {
        Self {
            age: age.into(),
            height: height.into(),
            weight: weight.into(),
            body_image,
        }
    }

    /// Returns true if no field has been filled in.
    pub fn is_empty(&self) -> bool {
        self.age.is_empty()
            && self.height.is_empty()
            && self.weight.is_empty()
            && self.body_image.is_none()
    }
}
