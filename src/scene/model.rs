use crate::foundation::core::positive;
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::foundation::format;
use crate::object::Object;
use crate::scene::camera::Camera;
use crate::scene::light::LightSource;
use crate::serialize::sdl::{Emit, Encoder, Sdl};
use crate::value::Color;

/// Language version written in the document header.
pub const SDL_VERSION: &str = "3.7";

/// Top-level light or object, kept in one list to preserve declaration order.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneItem {
    /// `light_source { }`
    Light(LightSource),
    /// Any geometric object.
    Object(Object),
}

impl Emit for SceneItem {
    fn emit(&self, enc: &Encoder) -> Sdl {
        match self {
            Self::Light(l) => l.emit(enc),
            Self::Object(o) => o.emit(enc),
        }
    }
}

/// Complete scene: header, global settings, one camera, lights and objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    includes: Vec<String>,
    assumed_gamma: f64,
    ambient_light: Option<Color>,
    background: Option<Color>,
    camera: Option<Camera>,
    items: Vec<SceneItem>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            assumed_gamma: 1.0,
            ambient_light: None,
            background: None,
            camera: None,
            items: Vec::new(),
        }
    }
}

impl Scene {
    /// Empty scene with gamma 1 and no camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// `#include "<file>"`, e.g. `colors.inc` for named colors.
    pub fn include(mut self, file: &str) -> RaysceneResult<Self> {
        if file.is_empty() {
            return Err(RaysceneError::value("include file name must be non-empty"));
        }
        self.includes.push(format::quoted(file)?);
        Ok(self)
    }

    /// `assumed_gamma` in `global_settings`.
    pub fn assumed_gamma(mut self, gamma: f64) -> RaysceneResult<Self> {
        self.assumed_gamma = positive("assumed_gamma", gamma)?;
        Ok(self)
    }

    /// `ambient_light` in `global_settings`.
    pub fn ambient_light(mut self, color: Color) -> Self {
        self.ambient_light = Some(color);
        self
    }

    /// `background { color ... }`.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the camera; a scene takes exactly one.
    pub fn camera(mut self, camera: Camera) -> RaysceneResult<Self> {
        if self.camera.is_some() {
            return Err(RaysceneError::value("scene already has a camera"));
        }
        self.camera = Some(camera);
        Ok(self)
    }

    /// Append a light source.
    pub fn light(mut self, light: LightSource) -> Self {
        self.items.push(SceneItem::Light(light));
        self
    }

    /// Append an object.
    pub fn object(mut self, object: Object) -> Self {
        self.items.push(SceneItem::Object(object));
        self
    }

    /// Append several objects in order.
    pub fn objects(mut self, objects: impl IntoIterator<Item = Object>) -> Self {
        self.items.extend(objects.into_iter().map(SceneItem::Object));
        self
    }

    /// The camera, if set.
    pub fn camera_ref(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Lights and objects in declaration order.
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    /// Number of light sources.
    pub fn light_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i, SceneItem::Light(_)))
            .count()
    }

    /// Document text with default [`SdlOptions`](crate::SdlOptions).
    pub fn to_sdl(&self) -> RaysceneResult<String> {
        crate::serialize::Serializer::default().serialize(self)
    }

    /// Top-level nodes of the document, in output order.
    pub(crate) fn emit_document(&self, enc: &Encoder) -> RaysceneResult<Vec<Sdl>> {
        let camera = self.camera.as_ref().ok_or(RaysceneError::MissingCamera)?;

        let mut out = Vec::with_capacity(self.items.len() + self.includes.len() + 4);
        out.push(Sdl::line(format!("#version {SDL_VERSION};")));
        out.extend(
            self.includes
                .iter()
                .map(|f| Sdl::line(format!("#include {f}"))),
        );

        let mut global = vec![Sdl::line(format!(
            "assumed_gamma {}",
            enc.num(self.assumed_gamma)
        ))];
        if let Some(c) = &self.ambient_light {
            global.push(Sdl::line(format!("ambient_light {}", c.encode(enc))));
        }
        out.push(Sdl::block("global_settings", global));

        if let Some(c) = &self.background {
            out.push(Sdl::block(
                "background",
                vec![Sdl::line(format!("color {}", c.encode(enc)))],
            ));
        }
        out.push(camera.emit(enc));
        out.extend(self.items.iter().map(|i| i.emit(enc)));
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
