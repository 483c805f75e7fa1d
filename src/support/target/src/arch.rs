use data_units::ByteUnits;
use std::{fmt::Display, str::FromStr};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetArch {
    X86,
    X86_64,
    Arm,
    Aarch64,
}

impl TargetArch {
    pub fn pointer_width(&self) -> ByteUnits {
        match self {
            Self::X86 | Self::Arm => ByteUnits::of(4),
            Self::X86_64 | Self::Aarch64 => ByteUnits::of(8),
        }
    }

    /// Largest natural alignment any scalar may have on this architecture.
    ///
    /// Scalars wider than the word still align at the word boundary,
    /// like 8-byte integers on 32-bit ABIs.
    pub fn max_scalar_alignment(&self) -> ByteUnits {
        self.pointer_width()
    }

    pub fn is_32_bit(&self) -> bool {
        self.pointer_width() == ByteUnits::of(4)
    }
}

impl Display for TargetArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::X86 => "x86",
            Self::X86_64 => "x86_64",
            Self::Arm => "arm",
            Self::Aarch64 => "aarch64",
        })
    }
}

impl FromStr for TargetArch {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "x86" | "i686" => Ok(Self::X86),
            "x86_64" | "x86-64" | "amd64" => Ok(Self::X86_64),
            "arm" | "armv7" => Ok(Self::Arm),
            "aarch64" | "arm64" => Ok(Self::Aarch64),
            _ => Err(()),
        }
    }
}
