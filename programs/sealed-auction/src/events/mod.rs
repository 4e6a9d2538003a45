mod auction_created;
pub use auction_created::*;

mod auction_unsealed;
pub use auction_unsealed::*;

mod bid_placed;
pub use bid_placed::*;

mod item_claimed;
pub use item_claimed::*;

mod refund_withdrawn;
pub use refund_withdrawn::*;

mod seed_recorded;
pub use seed_recorded::*;
