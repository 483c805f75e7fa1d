use super::{DemoCommand, catalog, report};
use crate::Invoke;
use target_layout::{LayoutResult, RecordSpec};

impl Invoke for DemoCommand {
    fn invoke(self) -> Result<(), ()> {
        let target = &self.target;

        report::print_banner("MEMORY ALIGNMENT AND PACKING EXAMPLES");
        println!("target: {} {}", target.arch(), target.os());

        report::print_section("DEFAULT VS OPTIMIZED ALIGNMENT");
        print_size_of(&catalog::default_alignment(target))?;
        print_size_of(&catalog::optimized_alignment(target))?;

        report::print_section("DIFFERENT PACK CAPS");
        print_size_of(&catalog::packed_struct(target))?;
        print_size_of(&catalog::two_byte_aligned(target))?;
        print_size_of(&catalog::four_byte_aligned(target))?;

        report::print_section("PRACTICAL EXAMPLES");
        print_size_of(&catalog::network_header(target))?;
        print_size_of(&catalog::bitmap_header(target))?;

        report::print_section("MIXED TYPES COMPARISON");
        print_size_of(&catalog::mixed_types(target))?;
        print_size_of(&catalog::mixed_types_packed(target))?;

        report::print_section("ARCHITECTURE SPECIFIC");
        print_size_of(&catalog::arm_optimized(target))?;
        print_size_of(&catalog::x86_optimized(target))?;

        report::print_section("MEMORY LAYOUT EXAMPLE");
        let network = catalog::network_header(target);
        report::print_field_offsets(network.name(), &compute(&network)?);

        report::print_section("PADDING DEMONSTRATION");
        let default = catalog::default_alignment(target);
        let layout = compute(&default)?;
        report::print_field_offsets(default.name(), &layout);
        println!();
        report::print_padding(&layout);

        Ok(())
    }
}

fn compute(spec: &RecordSpec) -> Result<LayoutResult, ()> {
    spec.compute_layout().map_err(|error| {
        eprintln!("error: {}", error);
    })
}

fn print_size_of(spec: &RecordSpec) -> Result<(), ()> {
    let layout = compute(spec)?;
    report::print_size(spec.name(), &layout);
    Ok(())
}
