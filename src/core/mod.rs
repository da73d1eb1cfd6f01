// Target-independent page logic. Nothing in here touches the DOM, so every
// module is exercised from the host-side tests.
pub mod constants;
pub mod context;
pub mod inquiry;
pub mod motion;
pub mod reveal;
pub mod retry;
pub mod scroll;
pub mod splash;
pub mod tween;
pub mod visualizer;

pub use context::*;
pub use inquiry::*;
pub use retry::*;
pub use reveal::*;
pub use scroll::*;
pub use splash::*;
pub use tween::*;
pub use visualizer::*;
