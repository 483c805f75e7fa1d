use super::{
    builder::RecordLayoutBuilder, error::InvalidConfiguration, result::LayoutResult,
};
use crate::type_layout::TypeLayout;
use data_units::ByteUnits;

/// A single named field: how many bytes it occupies and the alignment
/// it wants when no packing cap interferes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub size: ByteUnits,
    pub natural_alignment: ByteUnits,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, size: ByteUnits, natural_alignment: ByteUnits) -> Self {
        Self {
            name: name.into(),
            size,
            natural_alignment,
        }
    }

    /// Field of a scalar type as laid out on some target.
    pub fn scalar(name: impl Into<String>, layout: TypeLayout) -> Self {
        Self::new(name, layout.width, layout.alignment)
    }

    /// Fixed-length array field. Occupies `length` elements back to back
    /// and aligns like a single element.
    pub fn array(name: impl Into<String>, element: TypeLayout, length: u64) -> Self {
        let layout = element.array(length);
        Self::new(name, layout.width, layout.alignment)
    }
}

/// An ordered sequence of fields plus an optional packing cap.
///
/// Declaration order is preserved verbatim when the layout is computed.
/// [`sorted_by_alignment`](Self::sorted_by_alignment) produces the
/// size-optimized ordering as a separate spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSpec {
    name: String,
    fields: Vec<FieldDescriptor>,
    pack_cap: Option<ByteUnits>,
}

impl RecordSpec {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
            pack_cap: None,
        }
    }

    /// Same as [`new`](Self::new), but with a `#pragma pack`-style cap on
    /// every field's alignment.
    pub fn packed(
        name: impl Into<String>,
        pack_cap: ByteUnits,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            fields,
            pack_cap: Some(pack_cap),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn pack_cap(&self) -> Option<ByteUnits> {
        self.pack_cap
    }

    /// Alignment the field will actually be placed with.
    ///
    /// A cap only ever shrinks a field's alignment, never grows it.
    pub fn effective_alignment(&self, field: &FieldDescriptor) -> ByteUnits {
        match self.pack_cap {
            Some(cap) => field.natural_alignment.min(cap),
            None => field.natural_alignment,
        }
    }

    /// Copy of this spec with fields stably sorted by descending natural
    /// alignment, the ordering that minimizes padding.
    pub fn sorted_by_alignment(&self, name: impl Into<String>) -> Self {
        let mut fields = self.fields.clone();
        fields.sort_by_key(|field| std::cmp::Reverse(field.natural_alignment));

        Self {
            name: name.into(),
            fields,
            pack_cap: self.pack_cap,
        }
    }

    /// Computes sizes, offsets, and padding for this record.
    ///
    /// Pure and deterministic; evaluating the same spec twice yields
    /// identical results.
    pub fn compute_layout(&self) -> Result<LayoutResult, InvalidConfiguration> {
        self.validate()?;
        Ok(RecordLayoutBuilder::new(self).layout())
    }

    fn validate(&self) -> Result<(), InvalidConfiguration> {
        if let Some(cap) = self.pack_cap {
            if !cap.is_power_of_2() {
                return Err(InvalidConfiguration::PackCapNotPowerOfTwo { cap });
            }
        }

        for field in &self.fields {
            if field.size.is_zero() {
                return Err(InvalidConfiguration::FieldSizeZero {
                    field: field.name.clone(),
                });
            }

            if !field.natural_alignment.is_power_of_2() {
                return Err(InvalidConfiguration::FieldAlignmentNotPowerOfTwo {
                    field: field.name.clone(),
                    alignment: field.natural_alignment,
                });
            }
        }

        Ok(())
    }
}
