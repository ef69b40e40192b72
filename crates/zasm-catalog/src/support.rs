//! Architecture support bit set and the active-architecture filter.
//!
//! The low nibble of the bit set holds the first Z-series generation the
//! instruction appeared in ("since" ordering); the remaining bits flag the
//! legacy architectures individually. Entries marked `UNKNOWN` are always
//! available.

/// Architecture support of one catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupportedSystem(pub(crate) u16);

const ZS_MASK: u16 = 0x0f;

pub const UNI: SupportedSystem = SupportedSystem(1 << 4);
pub const DOS: SupportedSystem = SupportedSystem(1 << 5);
pub const _370: SupportedSystem = SupportedSystem(1 << 6);
pub const XA: SupportedSystem = SupportedSystem(1 << 7);
pub const ESA: SupportedSystem = SupportedSystem(1 << 8);
pub const UNKNOWN: SupportedSystem = SupportedSystem(1 << 9);

/// Support since the given Z-series generation (1-9).
#[inline]
pub const fn since_zs(generation: u16) -> SupportedSystem {
    SupportedSystem(generation & ZS_MASK)
}

impl SupportedSystem {
    /// No support flags at all.
    pub const NONE: SupportedSystem = SupportedSystem(0);

    /// Combine two support sets.
    #[inline]
    pub const fn with(self, other: SupportedSystem) -> SupportedSystem {
        SupportedSystem(self.0 | other.0)
    }

    #[inline]
    fn contains(self, other: SupportedSystem) -> bool {
        self.0 & other.0 == other.0
    }

    /// First Z-series generation with support, 0 when none.
    #[inline]
    pub fn zs_since(self) -> u16 {
        self.0 & ZS_MASK
    }

    /// Whether an entry with this support set is available under `arch`.
    ///
    /// Legacy architectures are bit-tested; Z-series generations compare
    /// through the monotone "since" ordering of the low nibble.
    pub fn is_supported(self, arch: SystemArchitecture) -> bool {
        if self.contains(UNKNOWN) {
            return true;
        }

        match arch {
            SystemArchitecture::Uni => self.contains(UNI),
            SystemArchitecture::Dos => self.contains(DOS),
            SystemArchitecture::_370 => self.contains(_370),
            SystemArchitecture::Xa => self.contains(XA),
            SystemArchitecture::Esa => self.contains(ESA),
            zs => {
                let since = self.zs_since();
                since != 0 && since <= zs.zs_generation().unwrap_or(0)
            }
        }
    }
}

/// The active instruction-set architecture (OPTABLE equivalent).
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemArchitecture {
    Uni,
    Dos,
    _370,
    Xa,
    Esa,
    Zs1,
    Zs2,
    Zs3,
    Zs4,
    Zs5,
    Zs6,
    Zs7,
    Zs8,
    Zs9,
}

impl SystemArchitecture {
    /// Z-series generation number, `None` for legacy architectures.
    pub fn zs_generation(self) -> Option<u16> {
        match self {
            SystemArchitecture::Zs1 => Some(1),
            SystemArchitecture::Zs2 => Some(2),
            SystemArchitecture::Zs3 => Some(3),
            SystemArchitecture::Zs4 => Some(4),
            SystemArchitecture::Zs5 => Some(5),
            SystemArchitecture::Zs6 => Some(6),
            SystemArchitecture::Zs7 => Some(7),
            SystemArchitecture::Zs8 => Some(8),
            SystemArchitecture::Zs9 => Some(9),
            _ => None,
        }
    }

    /// Parse an architecture name (`UNI`, `DOS`, `370`, `XA`, `ESA`,
    /// `Z1`-`Z9` or `ZS1`-`ZS9`).
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_ascii_uppercase();
        let arch = match upper.as_str() {
            "UNI" => SystemArchitecture::Uni,
            "DOS" => SystemArchitecture::Dos,
            "370" | "_370" => SystemArchitecture::_370,
            "XA" => SystemArchitecture::Xa,
            "ESA" => SystemArchitecture::Esa,
            _ => {
                let digits = upper.strip_prefix("ZS").or_else(|| upper.strip_prefix('Z'))?;
                return match digits {
                    "1" => Some(SystemArchitecture::Zs1),
                    "2" => Some(SystemArchitecture::Zs2),
                    "3" => Some(SystemArchitecture::Zs3),
                    "4" => Some(SystemArchitecture::Zs4),
                    "5" => Some(SystemArchitecture::Zs5),
                    "6" => Some(SystemArchitecture::Zs6),
                    "7" => Some(SystemArchitecture::Zs7),
                    "8" => Some(SystemArchitecture::Zs8),
                    "9" => Some(SystemArchitecture::Zs9),
                    _ => None,
                };
            }
        };
        Some(arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_bit_test() {
        let support = UNI.with(ESA).with(since_zs(1));
        assert!(support.is_supported(SystemArchitecture::Uni));
        assert!(support.is_supported(SystemArchitecture::Esa));
        assert!(!support.is_supported(SystemArchitecture::Dos));
        assert!(!support.is_supported(SystemArchitecture::_370));
    }

    #[test]
    fn test_zs_since_ordering() {
        let support = UNI.with(since_zs(5));
        assert!(!support.is_supported(SystemArchitecture::Zs4));
        assert!(support.is_supported(SystemArchitecture::Zs5));
        assert!(support.is_supported(SystemArchitecture::Zs9));
    }

    #[test]
    fn test_no_zs_support() {
        let support = UNI.with(ESA);
        assert!(!support.is_supported(SystemArchitecture::Zs9));
    }

    #[test]
    fn test_unknown_always_supported() {
        assert!(UNKNOWN.is_supported(SystemArchitecture::Dos));
        assert!(UNKNOWN.is_supported(SystemArchitecture::Zs1));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(SystemArchitecture::from_name("uni"), Some(SystemArchitecture::Uni));
        assert_eq!(SystemArchitecture::from_name("370"), Some(SystemArchitecture::_370));
        assert_eq!(SystemArchitecture::from_name("Z7"), Some(SystemArchitecture::Zs7));
        assert_eq!(SystemArchitecture::from_name("ZS3"), Some(SystemArchitecture::Zs3));
        assert_eq!(SystemArchitecture::from_name("Z10"), None);
        assert_eq!(SystemArchitecture::from_name("HAL"), None);
    }
}
