mod admin;
pub use admin::*;

mod auction;
pub use auction::*;

mod claim;
pub use claim::*;

mod settle;
pub use settle::*;
