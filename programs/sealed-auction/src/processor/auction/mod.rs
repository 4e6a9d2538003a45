mod bid;
pub use bid::*;

mod create;
pub use create::*;

mod query;
pub use query::*;

mod withdraw_refund;
pub use withdraw_refund::*;
