pub mod duration;
pub mod months;
pub mod projection;
pub mod weeks;
