mod proceeds_token;
pub use proceeds_token::*;

mod unseal_gap;
pub use unseal_gap::*;
