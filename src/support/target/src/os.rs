use std::{fmt::Display, str::FromStr};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetOs {
    Windows,
    Mac,
    Linux,
}

impl TargetOs {
    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }

    pub fn is_mac(&self) -> bool {
        matches!(self, Self::Mac)
    }

    pub fn is_linux(&self) -> bool {
        matches!(self, Self::Linux)
    }
}

impl Display for TargetOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Windows => "windows",
            Self::Mac => "macos",
            Self::Linux => "linux",
        })
    }
}

impl FromStr for TargetOs {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "windows" => Ok(Self::Windows),
            "macos" | "mac" | "darwin" => Ok(Self::Mac),
            "linux" => Ok(Self::Linux),
            _ => Err(()),
        }
    }
}
