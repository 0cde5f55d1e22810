pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, ImmersiveError, ScreenError};
pub use id::{new_id, EntityId, TextureId};
pub use types::{Color, FieldOfView, MAX_HORIZONTAL_FOV, MAX_VERTICAL_FOV, MIN_FOV_DEGREES};

pub type Result<T> = std::result::Result<T, ImmersiveError>;
