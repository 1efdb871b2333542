//! Handler extensions.

mod depot;
mod result;

pub(crate) use depot::DepotExt;
pub(crate) use result::ResultExt;
