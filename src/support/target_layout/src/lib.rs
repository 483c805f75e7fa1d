mod record_layout;
mod type_layout;

use data_units::ByteUnits;
pub use record_layout::{
    FieldDescriptor, FieldLayout, InvalidConfiguration, LayoutResult, RecordLayoutBuilder,
    RecordSpec,
};
use target::{ScalarKind, Target};
pub use type_layout::TypeLayout;

pub trait TargetLayout {
    fn pointer_layout(&self) -> TypeLayout;
    fn bool_layout(&self) -> TypeLayout;
    fn char_layout(&self) -> TypeLayout;
    fn short_layout(&self) -> TypeLayout;
    fn int_layout(&self) -> TypeLayout;
    fn long_layout(&self) -> TypeLayout;
    fn longlong_layout(&self) -> TypeLayout;
    fn float_layout(&self) -> TypeLayout;
    fn double_layout(&self) -> TypeLayout;
    fn scalar_layout(&self, kind: ScalarKind) -> TypeLayout;
}

impl TargetLayout for Target {
    fn pointer_layout(&self) -> TypeLayout {
        TypeLayout::basic(self.arch().pointer_width())
    }

    fn bool_layout(&self) -> TypeLayout {
        TypeLayout::basic(ByteUnits::of(1))
    }

    fn char_layout(&self) -> TypeLayout {
        TypeLayout::basic(ByteUnits::of(1))
    }

    fn short_layout(&self) -> TypeLayout {
        natural(self, ByteUnits::of(2))
    }

    fn int_layout(&self) -> TypeLayout {
        natural(self, ByteUnits::of(4))
    }

    fn long_layout(&self) -> TypeLayout {
        if self.os().is_windows() {
            natural(self, ByteUnits::of(4))
        } else {
            natural(self, self.arch().pointer_width())
        }
    }

    fn longlong_layout(&self) -> TypeLayout {
        natural(self, ByteUnits::of(8))
    }

    fn float_layout(&self) -> TypeLayout {
        natural(self, ByteUnits::of(4))
    }

    fn double_layout(&self) -> TypeLayout {
        natural(self, ByteUnits::of(8))
    }

    fn scalar_layout(&self, kind: ScalarKind) -> TypeLayout {
        match kind {
            ScalarKind::Bool => self.bool_layout(),
            ScalarKind::Char | ScalarKind::U8 => self.char_layout(),
            ScalarKind::Short | ScalarKind::U16 => self.short_layout(),
            ScalarKind::Int | ScalarKind::U32 => self.int_layout(),
            ScalarKind::Long => self.long_layout(),
            ScalarKind::LongLong | ScalarKind::U64 => self.longlong_layout(),
            ScalarKind::Float => self.float_layout(),
            ScalarKind::Double => self.double_layout(),
            ScalarKind::Ptr => self.pointer_layout(),
        }
    }
}

/// Natural alignment equals the size, capped at the architecture's word width.
fn natural(target: &Target, size: ByteUnits) -> TypeLayout {
    TypeLayout {
        width: size,
        alignment: size.min(target.arch().max_scalar_alignment()),
    }
}

#[cfg(test)]
use target::{TargetArch, TargetOs};

#[cfg(test)]
fn linux(arch: TargetArch) -> Target {
    Target::new(TargetOs::Linux, arch)
}

#[test]
fn test_scalar_layouts_on_64_bit() {
    let target = linux(TargetArch::X86_64);

    assert_eq!(target.bool_layout(), TypeLayout::basic(ByteUnits::of(1)));
    assert_eq!(target.int_layout(), TypeLayout::basic(ByteUnits::of(4)));
    assert_eq!(target.double_layout(), TypeLayout::basic(ByteUnits::of(8)));
    assert_eq!(target.longlong_layout(), TypeLayout::basic(ByteUnits::of(8)));
    assert_eq!(target.pointer_layout(), TypeLayout::basic(ByteUnits::of(8)));
}

#[test]
fn test_wide_scalars_cap_at_word_width_on_32_bit() {
    let target = linux(TargetArch::Arm);

    let longlong = target.longlong_layout();
    assert_eq!(longlong.width, ByteUnits::of(8));
    assert_eq!(longlong.alignment, ByteUnits::of(4));

    let double = target.double_layout();
    assert_eq!(double.width, ByteUnits::of(8));
    assert_eq!(double.alignment, ByteUnits::of(4));

    assert_eq!(target.pointer_layout(), TypeLayout::basic(ByteUnits::of(4)));
}

#[test]
fn test_long_depends_on_os() {
    let windows = Target::new(TargetOs::Windows, TargetArch::X86_64);
    assert_eq!(windows.long_layout().width, ByteUnits::of(4));

    assert_eq!(
        linux(TargetArch::X86_64).long_layout().width,
        ByteUnits::of(8)
    );
}

#[test]
fn test_array_layout_keeps_element_alignment() {
    let target = linux(TargetArch::X86_64);
    let payload = target.char_layout().array(16);

    assert_eq!(payload.width, ByteUnits::of(16));
    assert_eq!(payload.alignment, ByteUnits::of(1));
}
