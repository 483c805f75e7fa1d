use colored::Colorize;
use itertools::Itertools;
use target_layout::LayoutResult;

pub fn print_banner(title: &str) {
    println!("{}", title.bold());
    println!("{}", "=".repeat(60));
}

pub fn print_section(title: &str) {
    println!();
    println!("{}", "=".repeat(50));
    println!("{}", title.cyan().bold());
    println!("{}", "=".repeat(50));
}

pub fn print_size(name: &str, layout: &LayoutResult) {
    println!("{:<25}: {:>3} bytes", name, layout.total_size);
}

pub fn print_field_offsets(name: &str, layout: &LayoutResult) {
    println!("{} field offsets:", name.bold());
    println!("Structure size: {} bytes", layout.total_size);

    for field in &layout.fields {
        println!(
            "{:<12}: offset {:>2}, size {:>2}",
            field.name, field.offset, field.size
        );
    }
}

/// The padding walkthrough, computed from offsets rather than live
/// field addresses.
pub fn print_padding(layout: &LayoutResult) {
    println!("Padding bytes between fields:");

    for (field, next) in layout.fields.iter().tuple_windows() {
        println!("After {:<12}: {} bytes", field.name, next.padding_before);
    }

    println!("At end of record  : {} bytes", layout.tail_padding);
    println!("Total padding     : {} bytes", layout.padding_total());
}
