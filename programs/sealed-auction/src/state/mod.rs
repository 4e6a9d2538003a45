mod auction;
pub use auction::*;

mod custodian;
pub use custodian::*;

mod pending_refund;
pub use pending_refund::*;
