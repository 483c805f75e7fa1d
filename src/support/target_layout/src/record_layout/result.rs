use data_units::ByteUnits;

/// Where one field landed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: String,
    pub offset: ByteUnits,
    pub size: ByteUnits,
    /// Filler between the end of the previous field and this one.
    pub padding_before: ByteUnits,
}

/// Computed layout of a whole record. Derived and read-only; recomputed
/// on every evaluation, never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutResult {
    pub total_size: ByteUnits,
    pub record_alignment: ByteUnits,
    /// Filler after the last field that rounds the record up to a
    /// multiple of its own alignment.
    pub tail_padding: ByteUnits,
    pub fields: Vec<FieldLayout>,
}

impl LayoutResult {
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Total filler bytes, between fields and at the tail.
    pub fn padding_total(&self) -> ByteUnits {
        self.fields
            .iter()
            .map(|field| field.padding_before)
            .sum::<ByteUnits>()
            + self.tail_padding
    }
}
