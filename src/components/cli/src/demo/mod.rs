mod catalog;
mod invoke;
mod parse;
mod report;

use target::Target;

/// Lays out the example record catalog for a target and prints the
/// resulting sizes, offsets, and padding.
#[derive(Clone, Debug)]
pub struct DemoCommand {
    pub target: Target,
}
