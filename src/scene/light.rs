use crate::foundation::core::{IntoVector, Vector, finite, non_negative, positive};
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::scene::camera::Camera;
use crate::serialize::sdl::{Emit, Encoder, Sdl};
use crate::value::Color;

/// Rectangular array of point lights spanned by two axes.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaLight {
    axis1: Vector,
    axis2: Vector,
    size1: u32,
    size2: u32,
    adaptive: Option<u32>,
    jitter: bool,
}

impl AreaLight {
    /// `area_light <axis1>, <axis2>, size1, size2`.
    pub fn new(
        axis1: impl IntoVector,
        axis2: impl IntoVector,
        size1: u32,
        size2: u32,
    ) -> RaysceneResult<Self> {
        if size1 == 0 || size2 == 0 {
            return Err(RaysceneError::value(format!(
                "area light needs at least one sample per axis, got {size1}x{size2}"
            )));
        }
        Ok(Self {
            axis1: axis1.into_vector()?.expect_3d("area light axis")?,
            axis2: axis2.into_vector()?.expect_3d("area light axis")?,
            size1,
            size2,
            adaptive: None,
            jitter: false,
        })
    }

    /// Adaptive sampling depth.
    pub fn adaptive(mut self, level: u32) -> Self {
        self.adaptive = Some(level);
        self
    }

    /// Randomize sample positions.
    pub fn jitter(mut self) -> Self {
        self.jitter = true;
        self
    }

    fn emit_into(&self, enc: &Encoder, items: &mut Vec<Sdl>) {
        items.push(Sdl::line(format!(
            "area_light {}, {}, {}, {}",
            enc.vector(&self.axis1),
            enc.vector(&self.axis2),
            self.size1,
            self.size2
        )));
        if let Some(level) = self.adaptive {
            items.push(Sdl::line(format!("adaptive {level}")));
        }
        if self.jitter {
            items.push(Sdl::line("jitter"));
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Spot {
    radius: f64,
    falloff: f64,
    tightness: Option<f64>,
}

/// `light_source { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct LightSource {
    location: Vector,
    color: Option<Color>,
    spot: Option<Spot>,
    parallel: bool,
    point_at: Option<Vector>,
    area: Option<AreaLight>,
    shadowless: bool,
    fade_distance: Option<f64>,
    fade_power: Option<f64>,
}

impl LightSource {
    /// Point light at `location`.
    pub fn new(location: impl IntoVector) -> RaysceneResult<Self> {
        Ok(Self {
            location: location.into_vector()?.expect_3d("light location")?,
            color: None,
            spot: None,
            parallel: false,
            point_at: None,
            area: None,
            shadowless: false,
            fade_distance: None,
            fade_power: None,
        })
    }

    /// Point light at the camera position.
    pub fn at_camera(camera: &Camera) -> Self {
        Self {
            location: camera.location().clone(),
            color: None,
            spot: None,
            parallel: false,
            point_at: None,
            area: None,
            shadowless: false,
            fade_distance: None,
            fade_power: None,
        }
    }

    /// Light color; the renderer defaults to white.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Cone of light toward `point_at` with full intensity inside `radius` degrees,
    /// fading to zero at `falloff` degrees.
    pub fn spotlight(
        mut self,
        point_at: impl IntoVector,
        radius: f64,
        falloff: f64,
    ) -> RaysceneResult<Self> {
        let radius = non_negative("spotlight radius", radius)?;
        let falloff = non_negative("spotlight falloff", falloff)?;
        if radius > falloff {
            return Err(RaysceneError::value(format!(
                "spotlight radius {radius} exceeds falloff {falloff}"
            )));
        }
        self.point_at = Some(self.aim(point_at)?);
        self.spot = Some(Spot {
            radius,
            falloff,
            tightness: None,
        });
        Ok(self)
    }

    /// Spotlight edge sharpness.
    pub fn tightness(mut self, tightness: f64) -> RaysceneResult<Self> {
        let t = non_negative("spotlight tightness", tightness)?;
        let Some(spot) = self.spot.as_mut() else {
            return Err(RaysceneError::value("tightness applies to spotlights only"));
        };
        spot.tightness = Some(t);
        Ok(self)
    }

    /// Parallel rays aimed at `point_at`, as from a distant source.
    pub fn parallel(mut self, point_at: impl IntoVector) -> RaysceneResult<Self> {
        self.point_at = Some(self.aim(point_at)?);
        self.parallel = true;
        Ok(self)
    }

    /// Soft shadows from an area of lights.
    pub fn area(mut self, area: AreaLight) -> Self {
        self.area = Some(area);
        self
    }

    /// Cast no shadows.
    pub fn shadowless(mut self) -> Self {
        self.shadowless = true;
        self
    }

    /// Distance at which intensity is unattenuated.
    pub fn fade_distance(mut self, d: f64) -> RaysceneResult<Self> {
        self.fade_distance = Some(positive("light fade_distance", d)?);
        Ok(self)
    }

    /// Attenuation exponent.
    pub fn fade_power(mut self, p: f64) -> RaysceneResult<Self> {
        self.fade_power = Some(finite("light fade_power", p)?);
        Ok(self)
    }

    /// Light position.
    pub fn location(&self) -> &Vector {
        &self.location
    }

    fn aim(&self, point_at: impl IntoVector) -> RaysceneResult<Vector> {
        let p = point_at.into_vector()?.expect_3d("light point_at")?;
        if p == self.location {
            return Err(RaysceneError::value(
                "light point_at must differ from its location",
            ));
        }
        Ok(p)
    }
}

impl Emit for LightSource {
    fn emit(&self, enc: &Encoder) -> Sdl {
        let mut head = enc.vector(&self.location);
        if let Some(c) = &self.color {
            head.push_str(" color ");
            head.push_str(&c.encode(enc));
        }
        let mut items = vec![Sdl::line(head)];

        if let Some(spot) = &self.spot {
            items.push(Sdl::line("spotlight"));
            items.push(Sdl::line(format!("radius {}", enc.num(spot.radius))));
            items.push(Sdl::line(format!("falloff {}", enc.num(spot.falloff))));
            if let Some(t) = spot.tightness {
                items.push(Sdl::line(format!("tightness {}", enc.num(t))));
            }
        }
        if self.parallel {
            items.push(Sdl::line("parallel"));
        }
        if let Some(p) = &self.point_at {
            items.push(Sdl::line(format!("point_at {}", enc.vector(p))));
        }
        if let Some(area) = &self.area {
            area.emit_into(enc, &mut items);
        }
        if self.shadowless {
            items.push(Sdl::line("shadowless"));
        }
        if let Some(d) = self.fade_distance {
            items.push(Sdl::line(format!("fade_distance {}", enc.num(d))));
        }
        if let Some(p) = self.fade_power {
            items.push(Sdl::line(format!("fade_power {}", enc.num(p))));
        }
        Sdl::block("light_source", items)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/light.rs"]
mod tests;
