use super::{
    result::{FieldLayout, LayoutResult},
    spec::{FieldDescriptor, RecordSpec},
};
use data_units::ByteUnits;

/// Cursor sweep over a record's fields in declaration order.
///
/// Each field lands at the next offset aligned to its effective
/// alignment, and the record's own alignment is the largest effective
/// alignment seen. The caller validates the spec first; the sweep itself
/// cannot fail.
#[derive(Debug)]
pub struct RecordLayoutBuilder<'a> {
    spec: &'a RecordSpec,
    size: ByteUnits,
    alignment: ByteUnits,
    fields: Vec<FieldLayout>,
}

impl<'a> RecordLayoutBuilder<'a> {
    pub fn new(spec: &'a RecordSpec) -> Self {
        Self {
            spec,
            size: ByteUnits::ZERO,
            alignment: ByteUnits::of(1),
            fields: Vec::with_capacity(spec.fields().len()),
        }
    }

    pub fn layout(mut self) -> LayoutResult {
        self.layout_fields();
        self.finish_layout()
    }

    fn layout_fields(&mut self) {
        let spec = self.spec;

        for field in spec.fields() {
            self.layout_field(field);
        }
    }

    fn layout_field(&mut self, field: &FieldDescriptor) {
        let field_alignment = self.spec.effective_alignment(field);
        let field_offset = self.size.align_to(field_alignment);

        self.fields.push(FieldLayout {
            name: field.name.clone(),
            offset: field_offset,
            size: field.size,
            padding_before: field_offset - self.size,
        });

        self.size = field_offset + field.size;
        self.update_alignment(field_alignment);
    }

    fn finish_layout(self) -> LayoutResult {
        // Round the record up to its own alignment so that back-to-back
        // copies keep every element's fields aligned.
        let total_size = self.size.align_to(self.alignment);

        LayoutResult {
            total_size,
            record_alignment: self.alignment,
            tail_padding: total_size - self.size,
            fields: self.fields,
        }
    }

    fn update_alignment(&mut self, new_alignment: ByteUnits) {
        if new_alignment > self.alignment {
            self.alignment = new_alignment;
        }
    }
}

#[cfg(test)]
use super::error::InvalidConfiguration;

#[cfg(test)]
fn demo_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("byte1", ByteUnits::of(1), ByteUnits::of(1)),
        FieldDescriptor::new("integer", ByteUnits::of(4), ByteUnits::of(4)),
        FieldDescriptor::new("floating", ByteUnits::of(8), ByteUnits::of(8)),
        FieldDescriptor::new("byte2", ByteUnits::of(1), ByteUnits::of(1)),
    ]
}

#[cfg(test)]
fn offsets(layout: &LayoutResult) -> Vec<u64> {
    layout
        .fields
        .iter()
        .map(|field| field.offset.bytes())
        .collect()
}

#[test]
fn test_natural_layout() {
    let layout = RecordSpec::new("Default", demo_fields())
        .compute_layout()
        .unwrap();

    assert_eq!(offsets(&layout), [0, 4, 8, 16]);
    assert_eq!(layout.total_size, ByteUnits::of(24));
    assert_eq!(layout.record_alignment, ByteUnits::of(8));
    assert_eq!(layout.tail_padding, ByteUnits::of(7));
}

#[test]
fn test_pack_cap_one_removes_all_padding() {
    let spec = RecordSpec::packed("Packed", ByteUnits::of(1), demo_fields());
    let layout = spec.compute_layout().unwrap();

    assert_eq!(offsets(&layout), [0, 1, 5, 13]);
    assert_eq!(layout.total_size, ByteUnits::of(14));
    assert_eq!(layout.record_alignment, ByteUnits::of(1));
    assert_eq!(layout.padding_total(), ByteUnits::ZERO);

    let sum_of_sizes = spec.fields().iter().map(|field| field.size).sum();
    assert_eq!(layout.total_size, sum_of_sizes);
}

#[test]
fn test_pack_cap_two() {
    let layout = RecordSpec::packed("TwoByte", ByteUnits::of(2), demo_fields())
        .compute_layout()
        .unwrap();

    assert_eq!(offsets(&layout), [0, 2, 6, 14]);
    assert_eq!(layout.total_size, ByteUnits::of(16));
    assert_eq!(layout.record_alignment, ByteUnits::of(2));
    assert_eq!(layout.tail_padding, ByteUnits::of(1));
}

#[test]
fn test_pack_cap_never_raises_alignment() {
    let fields = vec![
        FieldDescriptor::new("flag", ByteUnits::of(1), ByteUnits::of(1)),
        FieldDescriptor::new("count", ByteUnits::of(2), ByteUnits::of(2)),
    ];

    let natural = RecordSpec::new("Counter", fields.clone())
        .compute_layout()
        .unwrap();
    let capped = RecordSpec::packed("Counter", ByteUnits::of(8), fields)
        .compute_layout()
        .unwrap();

    assert_eq!(natural, capped);
}

#[test]
fn test_fields_never_overlap_and_stay_aligned() {
    let spec = RecordSpec::packed(
        "Mixed",
        ByteUnits::of(4),
        vec![
            FieldDescriptor::new("flag1", ByteUnits::of(1), ByteUnits::of(1)),
            FieldDescriptor::new("value1", ByteUnits::of(8), ByteUnits::of(8)),
            FieldDescriptor::new("flag2", ByteUnits::of(1), ByteUnits::of(1)),
            FieldDescriptor::new("value2", ByteUnits::of(2), ByteUnits::of(2)),
            FieldDescriptor::new("value3", ByteUnits::of(8), ByteUnits::of(8)),
            FieldDescriptor::new("array", ByteUnits::of(3), ByteUnits::of(1)),
        ],
    );
    let layout = spec.compute_layout().unwrap();

    for (field, descriptor) in layout.fields.iter().zip(spec.fields()) {
        let alignment = spec.effective_alignment(descriptor);
        assert!((field.offset % alignment).is_zero());
    }

    for pair in layout.fields.windows(2) {
        assert!(pair[0].offset + pair[0].size <= pair[1].offset);
    }

    assert!((layout.total_size % layout.record_alignment).is_zero());
}

#[test]
fn test_layout_is_deterministic() {
    let spec = RecordSpec::packed("Packed", ByteUnits::of(2), demo_fields());
    assert_eq!(spec.compute_layout().unwrap(), spec.compute_layout().unwrap());
}

#[test]
fn test_declaration_order_is_preserved() {
    let layout = RecordSpec::new("Default", demo_fields())
        .compute_layout()
        .unwrap();

    let names = layout
        .fields
        .iter()
        .map(|field| field.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["byte1", "integer", "floating", "byte2"]);
}

#[test]
fn test_sorted_by_alignment_shrinks_record() {
    let spec = RecordSpec::new("Default", demo_fields());
    let optimized = spec.sorted_by_alignment("Optimized");

    let names = optimized
        .fields()
        .iter()
        .map(|field| field.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["floating", "integer", "byte1", "byte2"]);

    assert_eq!(
        spec.compute_layout().unwrap().total_size,
        ByteUnits::of(24)
    );
    assert_eq!(
        optimized.compute_layout().unwrap().total_size,
        ByteUnits::of(16)
    );
}

#[test]
fn test_empty_record() {
    let layout = RecordSpec::new("Empty", vec![]).compute_layout().unwrap();

    assert_eq!(layout.total_size, ByteUnits::ZERO);
    assert_eq!(layout.record_alignment, ByteUnits::of(1));
    assert!(layout.fields.is_empty());
}

#[test]
fn test_invalid_pack_cap() {
    for cap in [0, 3, 6] {
        let spec = RecordSpec::packed("Bad", ByteUnits::of(cap), demo_fields());

        assert_eq!(
            spec.compute_layout(),
            Err(InvalidConfiguration::PackCapNotPowerOfTwo {
                cap: ByteUnits::of(cap)
            })
        );
    }
}

#[test]
fn test_invalid_field() {
    let zero_sized = RecordSpec::new(
        "Bad",
        vec![FieldDescriptor::new(
            "nothing",
            ByteUnits::ZERO,
            ByteUnits::of(1),
        )],
    );
    assert_eq!(
        zero_sized.compute_layout(),
        Err(InvalidConfiguration::FieldSizeZero {
            field: "nothing".into()
        })
    );

    let misaligned = RecordSpec::new(
        "Bad",
        vec![FieldDescriptor::new(
            "odd",
            ByteUnits::of(4),
            ByteUnits::of(3),
        )],
    );
    assert_eq!(
        misaligned.compute_layout(),
        Err(InvalidConfiguration::FieldAlignmentNotPowerOfTwo {
            field: "odd".into(),
            alignment: ByteUnits::of(3)
        })
    );
}
