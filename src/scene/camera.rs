use glam::DVec3;

use crate::foundation::core::{IntoVector, Vector, finite, positive};
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::foundation::math;
use crate::serialize::sdl::{Emit, Encoder, Sdl};

/// Spherical placement of an orbit camera around its look-at point.
///
/// Longitude 0 lies on +x and 90 on +y; latitude 90 looks straight down from +z.
#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    /// Azimuth in degrees.
    pub longitude: f64,
    /// Elevation in degrees.
    pub latitude: f64,
    /// Half-height of the view plane; smaller zooms in.
    pub view_scale: f64,
    /// Distance from look-at point to camera.
    pub distance: f64,
    /// Roll about the view axis in degrees.
    pub tilt: f64,
    /// Point at the image center.
    pub look_at: [f64; 3],
    /// Image width over height.
    pub aspect_ratio: f64,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            longitude: 0.0,
            latitude: 0.0,
            view_scale: 1.0,
            distance: 10.0,
            tilt: 0.0,
            look_at: [0.0; 3],
            aspect_ratio: 4.0 / 3.0,
        }
    }
}

/// Camera frame derived from an [`Orbit`].
struct Frame {
    location: DVec3,
    direction: DVec3,
    right: DVec3,
    up: DVec3,
    sky: DVec3,
}

impl Orbit {
    fn frame(&self) -> RaysceneResult<Frame> {
        let phi = finite("camera longitude", self.longitude)?.to_radians();
        let theta = finite("camera latitude", self.latitude)?.to_radians();
        let tilt = finite("camera tilt", self.tilt)?.to_radians();
        let scale = positive("camera view scale", self.view_scale)?;
        let distance = positive("camera distance", self.distance)?;
        let ar = positive("camera aspect ratio", self.aspect_ratio)?.sqrt();
        let look_at = self
            .look_at
            .into_vector()?
            .to_dvec3()
            .ok_or_else(|| RaysceneError::internal("look_at lost its arity"))?;

        let z = math::from_spherical(phi, theta);
        let x = math::rotate_about(DVec3::new(-phi.sin(), phi.cos(), 0.0), z, tilt);
        let y = z.cross(x);
        let direction = z * distance;

        Ok(Frame {
            location: look_at + direction,
            direction,
            right: -2.0 * x * scale * ar,
            up: 2.0 * y * scale / ar,
            sky: y,
        })
    }
}

/// `camera { ... }`.
///
/// A scene holds exactly one camera.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    location: Vector,
    look_at: Vector,
    orthographic: bool,
    direction: Option<Vector>,
    right: Option<Vector>,
    up: Option<Vector>,
    sky: Option<Vector>,
    angle: Option<f64>,
    // Orbit cameras keep the frame order location, look_at, direction, right, up, sky.
    orbit: bool,
}

impl Camera {
    /// Camera at `location` looking at `look_at`.
    pub fn new(location: impl IntoVector, look_at: impl IntoVector) -> RaysceneResult<Self> {
        let location = location.into_vector()?.expect_3d("camera location")?;
        let look_at = look_at.into_vector()?.expect_3d("camera look_at")?;
        if location == look_at {
            return Err(RaysceneError::value(
                "camera location and look_at must differ",
            ));
        }
        Ok(Self {
            location,
            look_at,
            orthographic: false,
            direction: None,
            right: None,
            up: None,
            sky: None,
            angle: None,
            orbit: false,
        })
    }

    /// Camera placed on a sphere around `orbit.look_at`.
    pub fn orbit(orbit: &Orbit) -> RaysceneResult<Self> {
        let f = orbit.frame()?;
        let mut cam = Self::new(f.location, orbit.look_at)?;
        cam.direction = Some(f.direction.into_vector()?);
        cam.right = Some(f.right.into_vector()?);
        cam.up = Some(f.up.into_vector()?);
        cam.sky = Some(f.sky.into_vector()?);
        cam.orbit = true;
        tracing::debug!(
            longitude = orbit.longitude,
            latitude = orbit.latitude,
            "orbit camera"
        );
        Ok(cam)
    }

    /// Horizontal field of view in degrees, within (0, 180).
    pub fn angle(mut self, degrees: f64) -> RaysceneResult<Self> {
        let a = finite("camera angle", degrees)?;
        if a <= 0.0 || a >= 180.0 {
            return Err(RaysceneError::value(format!(
                "camera angle must be within (0, 180), got {a}"
            )));
        }
        self.angle = Some(a);
        Ok(self)
    }

    /// Parallel projection.
    pub fn orthographic(mut self) -> Self {
        self.orthographic = true;
        self
    }

    /// `direction <v>`.
    pub fn direction(mut self, v: impl IntoVector) -> RaysceneResult<Self> {
        self.direction = Some(nonzero(v, "camera direction")?);
        Ok(self)
    }

    /// `right <v>`.
    pub fn right(mut self, v: impl IntoVector) -> RaysceneResult<Self> {
        self.right = Some(nonzero(v, "camera right")?);
        Ok(self)
    }

    /// `up <v>`.
    pub fn up(mut self, v: impl IntoVector) -> RaysceneResult<Self> {
        self.up = Some(nonzero(v, "camera up")?);
        Ok(self)
    }

    /// `sky <v>`.
    pub fn sky(mut self, v: impl IntoVector) -> RaysceneResult<Self> {
        self.sky = Some(nonzero(v, "camera sky")?);
        Ok(self)
    }

    /// Camera position.
    pub fn location(&self) -> &Vector {
        &self.location
    }

    /// Point at the image center.
    pub fn look_at(&self) -> &Vector {
        &self.look_at
    }
}

fn nonzero(v: impl IntoVector, what: &str) -> RaysceneResult<Vector> {
    let v = v.into_vector()?.expect_3d(what)?;
    if v.is_zero() {
        return Err(RaysceneError::value(format!("{what} must be non-zero")));
    }
    Ok(v)
}

impl Emit for Camera {
    fn emit(&self, enc: &Encoder) -> Sdl {
        let vec_line = |key: &str, v: &Vector| Sdl::line(format!("{key} {}", enc.vector(v)));
        let optional = [
            ("direction", &self.direction),
            ("right", &self.right),
            ("up", &self.up),
            ("sky", &self.sky),
        ];

        let mut items = Vec::with_capacity(8);
        if self.orthographic {
            items.push(Sdl::line("orthographic"));
        }
        items.push(vec_line("location", &self.location));
        if self.orbit {
            items.push(vec_line("look_at", &self.look_at));
        }
        for (key, v) in optional {
            if let Some(v) = v {
                items.push(vec_line(key, v));
            }
        }
        // look_at after the frame vectors so the renderer aims the final frame.
        if !self.orbit {
            items.push(vec_line("look_at", &self.look_at));
        }
        if let Some(a) = self.angle {
            items.push(Sdl::line(format!("angle {}", enc.num(a))));
        }
        Sdl::block("camera", items)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/camera.rs"]
mod tests;
