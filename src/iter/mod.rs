mod owned_iter;
mod pruners;
mod pruning_iter;
mod ref_iter;

pub use owned_iter::*;
pub(crate) use pruners::*;
pub(crate) use pruning_iter::*;
pub(crate) use ref_iter::*;
