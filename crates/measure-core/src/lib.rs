pub mod constants;
pub mod markers;
pub mod presenter;
pub mod scene;
pub mod session;

pub use constants::*;
pub use markers::*;
pub use presenter::*;
pub use scene::*;
pub use session::*;
