//! Dynamic arrays with optional sorted/unique insertion.

#[allow(clippy::module_inception)]
mod array;
mod iter;
mod options;

pub use array::{Array, Comparator, Destructor};
pub use iter::ArrayEnum;
pub use options::ArrayOptions;
