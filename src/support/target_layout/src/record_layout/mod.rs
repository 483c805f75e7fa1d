mod builder;
mod error;
mod result;
mod spec;

pub use builder::RecordLayoutBuilder;
pub use error::InvalidConfiguration;
pub use result::{FieldLayout, LayoutResult};
pub use spec::{FieldDescriptor, RecordSpec};
