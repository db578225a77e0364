mod class;
mod instructor;
mod template;

pub use class::*;
pub use instructor::*;
pub use template::*;
