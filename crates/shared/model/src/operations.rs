use crate::error::ModelError;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Operations a resource supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Operations: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
        const EXECUTE = 1 << 2;

        const RW = Self::READ.bits() | Self::WRITE.bits();
    }
}

impl Operations {
    #[must_use]
    pub const fn is_readable(self) -> bool {
        self.contains(Self::READ)
    }

    #[must_use]
    pub const fn is_writable(self) -> bool {
        self.contains(Self::WRITE)
    }

    #[must_use]
    pub const fn is_executable(self) -> bool {
        self.contains(Self::EXECUTE)
    }
}

impl fmt::Display for Operations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        if self.is_readable() {
            f.write_str("R")?;
        }
        if self.is_writable() {
            f.write_str("W")?;
        }
        if self.is_executable() {
            f.write_str("E")?;
        }
        Ok(())
    }
}

impl FromStr for Operations {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Self::empty());
        }

        s.chars().try_fold(Self::empty(), |ops, c| {
            let flag = match c.to_ascii_uppercase() {
                'R' => Self::READ,
                'W' => Self::WRITE,
                'E' => Self::EXECUTE,
                _ => return Err(ModelError::InvalidOperations { value: s.to_owned().into() }),
            };
            Ok(ops | flag)
        })
    }
}

impl Serialize for Operations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Operations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registry_notation() {
        assert_eq!("RW".parse::<Operations>().unwrap(), Operations::RW);
        assert_eq!("e".parse::<Operations>().unwrap(), Operations::EXECUTE);
        assert_eq!("NONE".parse::<Operations>().unwrap(), Operations::empty());
        assert_eq!("".parse::<Operations>().unwrap(), Operations::empty());
        assert!("RX".parse::<Operations>().is_err());
    }

    #[test]
    fn displays_in_canonical_order() {
        assert_eq!((Operations::WRITE | Operations::READ).to_string(), "RW");
        assert_eq!(Operations::all().to_string(), "RWE");
        assert_eq!(Operations::empty().to_string(), "NONE");
    }
}
