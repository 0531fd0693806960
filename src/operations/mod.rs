// Operations module - everything the agent does against the game

pub mod bootstrap;
pub mod crew;
pub mod identity;
pub mod mining;
pub mod procurement;
pub mod ship;
pub mod trading;

pub use bootstrap::*;
pub use crew::*;
pub use identity::*;
pub use mining::*;
pub use procurement::*;
pub use ship::*;
pub use trading::*;
