mod collection;
mod iterator;
mod range;
mod successors;
mod values;

pub(crate) use collection::{Collection, Entries};
pub(crate) use iterator::OneShot;
pub(crate) use range::Range;
pub(crate) use successors::Successors;
pub(crate) use values::Values;
