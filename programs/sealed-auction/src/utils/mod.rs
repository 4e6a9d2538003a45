pub mod auction;

pub mod item;
