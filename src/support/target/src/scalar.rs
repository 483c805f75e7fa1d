/// Fixed-width scalar types that can appear as record fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    Char,
    Short,
    Int,
    Long,
    LongLong,
    Float,
    Double,
    U8,
    U16,
    U32,
    U64,
    Ptr,
}
