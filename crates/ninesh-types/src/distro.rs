//! Display presets selectable with `setdistro`.
//!
//! A distro only changes cosmetic output (the `neofetch` logo and OS line).
//! It never affects filesystem state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the fixed display presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distro {
    #[default]
    Arch,
    Debian,
    Ubuntu,
    Fedora,
    Gentoo,
}

/// Returned when a name matches no preset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown distro: {0}")]
pub struct UnknownDistro(pub String);

impl Distro {
    /// Every preset, in the order they are offered to the user.
    pub const ALL: [Distro; 5] = [
        Distro::Arch,
        Distro::Debian,
        Distro::Ubuntu,
        Distro::Fedora,
        Distro::Gentoo,
    ];

    /// Lowercase identifier, as typed after `setdistro`.
    pub fn name(self) -> &'static str {
        match self {
            Distro::Arch => "arch",
            Distro::Debian => "debian",
            Distro::Ubuntu => "ubuntu",
            Distro::Fedora => "fedora",
            Distro::Gentoo => "gentoo",
        }
    }

    /// Capitalized name for the `OS:` line.
    pub fn pretty_name(self) -> &'static str {
        match self {
            Distro::Arch => "Arch",
            Distro::Debian => "Debian",
            Distro::Ubuntu => "Ubuntu",
            Distro::Fedora => "Fedora",
            Distro::Gentoo => "Gentoo",
        }
    }

    /// Comma-separated list of every valid name.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distro {
    type Err = UnknownDistro;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == lowered)
            .ok_or(UnknownDistro(lowered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lower("arch", Distro::Arch)]
    #[case::upper("DEBIAN", Distro::Debian)]
    #[case::mixed("UbUnTu", Distro::Ubuntu)]
    #[case::fedora("fedora", Distro::Fedora)]
    #[case::gentoo("gentoo", Distro::Gentoo)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: Distro) {
        assert_eq!(input.parse::<Distro>(), Ok(expected));
    }

    #[test]
    fn unknown_name_is_lowercased_in_error() {
        let err = "Bogus".parse::<Distro>().unwrap_err();
        assert_eq!(err, UnknownDistro("bogus".to_string()));
    }

    #[test]
    fn valid_names_in_offer_order() {
        assert_eq!(Distro::valid_names(), "arch, debian, ubuntu, fedora, gentoo");
    }

    #[test]
    fn default_is_arch() {
        assert_eq!(Distro::default(), Distro::Arch);
        assert_eq!(Distro::default().pretty_name(), "Arch");
    }
}
