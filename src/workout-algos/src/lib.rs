pub(crate) mod training;
pub use training::{Training, TrainingBase};

pub(crate) mod running;
pub use running::Running;

pub(crate) mod walking;
pub use walking::SportsWalking;

pub(crate) mod swimming;
pub use swimming::Swimming;

pub(crate) mod workout;
pub use workout::Workout;
