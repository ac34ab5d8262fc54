mod cameras;
mod live;
mod recordings;
mod settings;

pub use cameras::*;
pub use live::*;
pub use recordings::*;
pub use settings::*;
