pub(crate) mod fingerprint;
pub(crate) mod options;
pub(crate) mod sdl;
pub(crate) mod serializer;

pub use fingerprint::SceneFingerprint;
pub use options::SdlOptions;
pub use serializer::Serializer;
