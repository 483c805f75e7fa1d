use data_units::ByteUnits;
use target::{ScalarKind, Target};
use target_layout::{FieldDescriptor, RecordSpec, TargetLayout};

// The example records the demo lays out: a plain struct next to its
// size-optimized ordering, the same fields under pack caps 1/2/4, two
// packed wire formats, and a pair of architecture-flavored records.

fn field(target: &Target, name: &str, kind: ScalarKind) -> FieldDescriptor {
    FieldDescriptor::scalar(name, target.scalar_layout(kind))
}

pub fn default_alignment(target: &Target) -> RecordSpec {
    RecordSpec::new(
        "DefaultAlignment",
        vec![
            field(target, "byte1", ScalarKind::Char),
            field(target, "integer", ScalarKind::Int),
            field(target, "floating", ScalarKind::Double),
            field(target, "byte2", ScalarKind::Char),
        ],
    )
}

pub fn optimized_alignment(target: &Target) -> RecordSpec {
    default_alignment(target).sorted_by_alignment("OptimizedAlignment")
}

fn packable_fields(target: &Target) -> Vec<FieldDescriptor> {
    vec![
        field(target, "byte1", ScalarKind::Char),
        field(target, "integer", ScalarKind::Int),
        field(target, "floating", ScalarKind::Double),
        field(target, "byte2", ScalarKind::Char),
        field(target, "short_value", ScalarKind::Short),
    ]
}

pub fn packed_struct(target: &Target) -> RecordSpec {
    RecordSpec::packed("PackedStruct", ByteUnits::of(1), packable_fields(target))
}

pub fn two_byte_aligned(target: &Target) -> RecordSpec {
    RecordSpec::packed("TwoByteAligned", ByteUnits::of(2), packable_fields(target))
}

pub fn four_byte_aligned(target: &Target) -> RecordSpec {
    RecordSpec::packed("FourByteAligned", ByteUnits::of(4), packable_fields(target))
}

pub fn network_header(target: &Target) -> RecordSpec {
    RecordSpec::packed(
        "NetworkHeader",
        ByteUnits::of(1),
        vec![
            field(target, "version", ScalarKind::U8),
            field(target, "type", ScalarKind::U8),
            field(target, "length", ScalarKind::U16),
            field(target, "sequence", ScalarKind::U32),
            field(target, "checksum", ScalarKind::U32),
            FieldDescriptor::array("payload", target.scalar_layout(ScalarKind::Char), 16),
        ],
    )
}

pub fn bitmap_header(target: &Target) -> RecordSpec {
    RecordSpec::packed(
        "BitmapHeader",
        ByteUnits::of(1),
        vec![
            field(target, "signature", ScalarKind::U16),
            field(target, "file_size", ScalarKind::U32),
            field(target, "reserved1", ScalarKind::U16),
            field(target, "reserved2", ScalarKind::U16),
            field(target, "data_offset", ScalarKind::U32),
            field(target, "header_size", ScalarKind::U32),
            field(target, "width", ScalarKind::U32),
            field(target, "height", ScalarKind::U32),
        ],
    )
}

fn mixed_fields(target: &Target) -> Vec<FieldDescriptor> {
    vec![
        field(target, "flag1", ScalarKind::Bool),
        field(target, "value1", ScalarKind::Double),
        field(target, "flag2", ScalarKind::Char),
        field(target, "value2", ScalarKind::Short),
        field(target, "value3", ScalarKind::LongLong),
        FieldDescriptor::array("array", target.scalar_layout(ScalarKind::Char), 3),
    ]
}

pub fn mixed_types(target: &Target) -> RecordSpec {
    RecordSpec::new("MixedTypes", mixed_fields(target))
}

pub fn mixed_types_packed(target: &Target) -> RecordSpec {
    RecordSpec::packed("MixedTypesPacked", ByteUnits::of(1), mixed_fields(target))
}

pub fn arm_optimized(target: &Target) -> RecordSpec {
    RecordSpec::packed(
        "ARMOptimized",
        ByteUnits::of(4),
        vec![
            field(target, "arm_register", ScalarKind::U32),
            field(target, "status_flags", ScalarKind::U16),
            field(target, "data_pointer", ScalarKind::U32),
            FieldDescriptor::array("buffer", target.scalar_layout(ScalarKind::Char), 8),
        ],
    )
}

pub fn x86_optimized(target: &Target) -> RecordSpec {
    RecordSpec::new(
        "X86Optimized",
        vec![
            field(target, "register64", ScalarKind::U64),
            field(target, "register32", ScalarKind::U32),
            field(target, "flags", ScalarKind::U16),
            FieldDescriptor::array("buffer", target.scalar_layout(ScalarKind::Char), 8),
        ],
    )
}

#[cfg(test)]
use target::{TargetArch, TargetOs};

#[cfg(test)]
fn x86_64_linux() -> Target {
    Target::new(TargetOs::Linux, TargetArch::X86_64)
}

#[cfg(test)]
fn total_size(spec: &RecordSpec) -> u64 {
    spec.compute_layout().unwrap().total_size.bytes()
}

#[test]
fn test_catalog_sizes_on_x86_64() {
    let target = x86_64_linux();

    assert_eq!(total_size(&default_alignment(&target)), 24);
    assert_eq!(total_size(&optimized_alignment(&target)), 16);
    assert_eq!(total_size(&packed_struct(&target)), 16);
    assert_eq!(total_size(&two_byte_aligned(&target)), 18);
    assert_eq!(total_size(&four_byte_aligned(&target)), 20);
    assert_eq!(total_size(&network_header(&target)), 28);
    assert_eq!(total_size(&bitmap_header(&target)), 26);
    assert_eq!(total_size(&mixed_types(&target)), 40);
    assert_eq!(total_size(&mixed_types_packed(&target)), 23);
    assert_eq!(total_size(&arm_optimized(&target)), 20);
    assert_eq!(total_size(&x86_optimized(&target)), 24);
}

#[test]
fn test_network_header_is_gapless() {
    let layout = network_header(&x86_64_linux()).compute_layout().unwrap();

    let offsets = layout
        .fields
        .iter()
        .map(|field| field.offset.bytes())
        .collect::<Vec<_>>();
    assert_eq!(offsets, [0, 1, 2, 4, 8, 12]);
    assert_eq!(layout.padding_total(), data_units::ByteUnits::ZERO);
}

#[test]
fn test_mixed_types_shrink_on_32_bit() {
    // 8-byte scalars only align to 4 there, so less padding is needed
    let target = Target::new(TargetOs::Linux, TargetArch::Arm);
    let layout = mixed_types(&target).compute_layout().unwrap();

    assert_eq!(layout.record_alignment.bytes(), 4);
    assert_eq!(layout.total_size.bytes(), 28);
}
