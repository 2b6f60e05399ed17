mod balance;
mod capability;
mod channel;
mod money;
mod movement;
mod node;
mod transaction;
mod wire;

pub use balance::*;
pub use capability::*;
pub use channel::*;
pub use money::*;
pub use movement::*;
pub use node::*;
pub use transaction::*;
