mod amount_state;
mod denomination;
mod gift_level;
mod pledge_term;

pub use amount_state::AmountState;
pub use denomination::Denomination;
pub use gift_level::{DEFAULT_GIFT_LEVELS, GiftLevel};
pub use pledge_term::PledgeTerm;
