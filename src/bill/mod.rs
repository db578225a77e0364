mod bill;
mod record;

pub use bill::*;
pub use record::*;
