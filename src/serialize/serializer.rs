use rayon::prelude::*;

use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::object::Object;
use crate::scene::Scene;
use crate::serialize::fingerprint::{SceneFingerprint, fingerprint_document};
use crate::serialize::options::SdlOptions;
use crate::serialize::sdl::{Emit, Encoder, Sdl};

/// Walks a scene graph and writes the scene-description document.
///
/// Serialization is a pure read of the tree: every validation already happened when the
/// nodes were built, so the only failure a well-formed scene can hit is a missing camera.
#[derive(Clone, Debug, Default)]
pub struct Serializer {
    opts: SdlOptions,
}

impl Serializer {
    /// Serializer with explicit formatting options.
    pub fn new(opts: SdlOptions) -> RaysceneResult<Self> {
        opts.validate()?;
        Ok(Self { opts })
    }

    /// Formatting options in use.
    pub fn options(&self) -> &SdlOptions {
        &self.opts
    }

    /// Write the complete document for `scene`.
    #[tracing::instrument(skip_all, fields(items = scene.items().len()))]
    pub fn serialize(&self, scene: &Scene) -> RaysceneResult<String> {
        let enc = Encoder::new(&self.opts);
        let nodes = scene.emit_document(&enc)?;
        let doc = self.write_nodes(&nodes)?;
        tracing::debug!(bytes = doc.len(), "scene serialized");
        Ok(doc)
    }

    /// Write a single object block, e.g. to embed in a hand-written document.
    pub fn serialize_object(&self, object: &Object) -> RaysceneResult<String> {
        let enc = Encoder::new(&self.opts);
        self.write_nodes(&[object.emit(&enc)])
    }

    /// Serialize independent scenes in parallel; documents come back in input order.
    ///
    /// The first failing scene, in input order, determines the error.
    #[tracing::instrument(skip_all, fields(scenes = scenes.len()))]
    pub fn serialize_all(&self, scenes: &[Scene]) -> RaysceneResult<Vec<String>> {
        let docs = scenes
            .par_iter()
            .map(|scene| self.serialize(scene))
            .collect::<Vec<_>>();

        let mut out = Vec::with_capacity(docs.len());
        for doc in docs {
            out.push(doc?);
        }
        Ok(out)
    }

    /// Stable 128-bit digest of the document `serialize` would write.
    pub fn fingerprint(&self, scene: &Scene) -> RaysceneResult<SceneFingerprint> {
        Ok(fingerprint_document(&self.serialize(scene)?))
    }

    fn write_nodes(&self, nodes: &[Sdl]) -> RaysceneResult<String> {
        let mut out = String::new();
        for node in nodes {
            node.write(&mut out, 0, &self.opts)
                .map_err(|e| RaysceneError::internal(format!("document write failed: {e}")))?;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/serializer.rs"]
mod tests;
