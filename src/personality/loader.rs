//! Load custom personality profiles from TOML
//!
//! ```toml
//! name = "miner"
//! resource_weights = { ore = 1.8, energy = 1.0, biomass = 0.4, data = 0.6 }
//! risk_tolerance = 0.7
//! long_term_planning = 0.4
//!
//! [priorities]
//! expansion = 1.5
//! defense = 0.8
//! research = 0.7
//! balance = 0.6
//! ```

use crate::core::error::Result;
use crate::personality::profile::PersonalityProfile;
use std::fs;
use std::path::Path;

/// Parse and validate a profile from TOML text
pub fn parse_personality(contents: &str) -> Result<PersonalityProfile> {
    let profile: PersonalityProfile = toml::from_str(contents)?;
    profile.validate()?;
    Ok(profile)
}

/// Load a profile from a TOML file
///
/// When the file has no `name`, the file stem is used.
pub fn load_personality(path: &Path) -> Result<PersonalityProfile> {
    let contents = fs::read_to_string(path)?;
    let mut profile = parse_personality(&contents)?;
    if profile.name.is_empty() {
        profile.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("custom")
            .to_string();
    }
    Ok(profile)
}
