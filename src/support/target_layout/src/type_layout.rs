use data_units::ByteUnits;

/// Width and natural alignment of a type on some target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeLayout {
    pub width: ByteUnits,
    pub alignment: ByteUnits,
}

impl TypeLayout {
    /// Layout of a scalar whose alignment equals its size.
    pub const fn basic(size: ByteUnits) -> Self {
        Self {
            width: size,
            alignment: size,
        }
    }

    /// Layout of a fixed-length array of this type.
    ///
    /// The array aligns like its element, not like its total size.
    pub fn array(self, length: u64) -> Self {
        Self {
            width: self.width * length,
            alignment: self.alignment,
        }
    }
}
