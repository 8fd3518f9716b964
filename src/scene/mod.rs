pub(crate) mod camera;
pub(crate) mod light;
pub(crate) mod model;

pub use camera::{Camera, Orbit};
pub use light::{AreaLight, LightSource};
pub use model::{SDL_VERSION, Scene, SceneItem};
