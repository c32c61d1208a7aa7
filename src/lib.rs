pub mod body;
pub mod config;
pub mod driver;
pub mod frame;
pub mod galaxy;
pub mod term;
pub mod vec2;

pub use body::{Particle, Star};
pub use config::Settings;
pub use driver::FrameDriver;
pub use frame::Frame;
pub use galaxy::Galaxy;
pub use term::{CrosstermTerminal, Terminal};
pub use vec2::Vec2;
