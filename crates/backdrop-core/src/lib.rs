//! Platform-independent core of the token backdrop: particle store,
//! simulation, 2D rendering over an abstract surface, and the frame
//! scheduler. The web front end supplies the canvas and input events.

pub mod config;
pub mod constants;
pub mod error;
pub mod particles;
pub mod render;
pub mod rng;
pub mod scheduler;
pub mod simulate;
pub mod state;
pub mod surface;
pub mod text;

pub use config::*;
pub use error::BackdropError;
pub use particles::*;
pub use render::Renderer;
pub use scheduler::*;
pub use simulate::*;
pub use state::*;
pub use surface::*;
