mod set_hash;
pub use set_hash::*;

mod unseal;
pub use unseal::*;
