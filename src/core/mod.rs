pub mod constants;
pub mod page;
pub mod particles;
pub mod surface;
pub mod typewriter;

pub use page::*;
pub use particles::*;
pub use surface::*;
pub use typewriter::*;
