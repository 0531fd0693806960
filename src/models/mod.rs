// Models module - typed records for every service payload

pub mod crew;
pub mod market;
pub mod navigation;
pub mod player;
pub mod responses;
pub mod ship;
pub mod station;

pub use crew::*;
pub use market::*;
pub use navigation::*;
pub use player::*;
pub use responses::*;
pub use ship::*;
pub use station::*;
