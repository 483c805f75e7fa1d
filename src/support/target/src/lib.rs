mod arch;
mod os;
mod scalar;

pub use arch::TargetArch;
pub use os::TargetOs;
pub use scalar::ScalarKind;

/// The platform whose layout rules are being simulated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Target {
    os: TargetOs,
    arch: TargetArch,
}

impl Target {
    pub const fn new(os: TargetOs, arch: TargetArch) -> Self {
        Self { os, arch }
    }

    pub fn os(&self) -> TargetOs {
        self.os
    }

    pub fn arch(&self) -> TargetArch {
        self.arch
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::new(TargetOs::Linux, TargetArch::X86_64)
    }
}

#[test]
fn test_pointer_width() {
    use data_units::ByteUnits;

    assert_eq!(TargetArch::X86_64.pointer_width(), ByteUnits::of(8));
    assert_eq!(TargetArch::Aarch64.pointer_width(), ByteUnits::of(8));
    assert_eq!(TargetArch::X86.pointer_width(), ByteUnits::of(4));
    assert_eq!(TargetArch::Arm.pointer_width(), ByteUnits::of(4));
}

#[test]
fn test_parse_names() {
    assert_eq!("amd64".parse(), Ok(TargetArch::X86_64));
    assert_eq!("arm64".parse(), Ok(TargetArch::Aarch64));
    assert_eq!("riscv".parse::<TargetArch>(), Err(()));
    assert_eq!("darwin".parse(), Ok(TargetOs::Mac));
    assert_eq!("beos".parse::<TargetOs>(), Err(()));
}
