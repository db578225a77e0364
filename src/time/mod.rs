mod date;
pub use date::*;
mod month;
pub use month::*;
mod period;
pub use period::*;
mod time_stamp;
pub use time_stamp::*;
mod week_day;
pub use week_day::*;
mod year;
pub use year::*;
