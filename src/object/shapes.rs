use glam::DVec3;

use crate::foundation::core::{IntoVector, Vector, finite, non_negative, positive};
use crate::foundation::error::{RaysceneError, RaysceneResult};
use crate::foundation::math;
use crate::object::Object;
use crate::object::csg::CsgOp;
use crate::serialize::sdl::{Encoder, Sdl};

/// Interpolation of a `sphere_sweep`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spline {
    /// `linear_spline`, straight segments.
    Linear,
    /// `b_spline`, approximating; needs 4 or more points.
    B,
    /// `cubic_spline`, interpolating the inner points; needs 4 or more points.
    Cubic,
}

impl Spline {
    fn keyword(self) -> &'static str {
        match self {
            Self::Linear => "linear_spline",
            Self::B => "b_spline",
            Self::Cubic => "cubic_spline",
        }
    }

    fn min_points(self) -> usize {
        match self {
            Self::Linear => 2,
            Self::B | Self::Cubic => 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Shape {
    Sphere {
        center: Vector,
        radius: f64,
    },
    Box {
        corner1: Vector,
        corner2: Vector,
    },
    Cylinder {
        base: Vector,
        cap: Vector,
        radius: f64,
        open: bool,
    },
    Cone {
        base: Vector,
        base_radius: f64,
        cap: Vector,
        cap_radius: f64,
        open: bool,
    },
    Plane {
        normal: Vector,
        distance: f64,
    },
    Torus {
        major: f64,
        minor: f64,
    },
    SphereSweep {
        spline: Spline,
        centers: Vec<Vector>,
        radii: Vec<f64>,
    },
    Csg {
        op: CsgOp,
        children: Vec<Object>,
    },
}

impl Shape {
    pub(crate) fn keyword(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Box { .. } => "box",
            Self::Cylinder { .. } => "cylinder",
            Self::Cone { .. } => "cone",
            Self::Plane { .. } => "plane",
            Self::Torus { .. } => "torus",
            Self::SphereSweep { .. } => "sphere_sweep",
            Self::Csg { op, .. } => op.keyword(),
        }
    }

    /// Positional arguments and shape switches, before any attachment.
    pub(crate) fn emit_args(&self, enc: &Encoder) -> Vec<Sdl> {
        let v = |x: &Vector| enc.vector(x);
        match self {
            Self::Sphere { center, radius } => {
                vec![Sdl::line(format!("{}, {}", v(center), enc.num(*radius)))]
            }
            Self::Box { corner1, corner2 } => {
                vec![Sdl::line(format!("{}, {}", v(corner1), v(corner2)))]
            }
            Self::Cylinder {
                base,
                cap,
                radius,
                open,
            } => with_open(
                format!("{}, {}, {}", v(base), v(cap), enc.num(*radius)),
                *open,
            ),
            Self::Cone {
                base,
                base_radius,
                cap,
                cap_radius,
                open,
            } => with_open(
                format!(
                    "{}, {}, {}, {}",
                    v(base),
                    enc.num(*base_radius),
                    v(cap),
                    enc.num(*cap_radius)
                ),
                *open,
            ),
            Self::Plane { normal, distance } => {
                vec![Sdl::line(format!("{}, {}", v(normal), enc.num(*distance)))]
            }
            Self::Torus { major, minor } => {
                vec![Sdl::line(format!(
                    "{}, {}",
                    enc.num(*major),
                    enc.num(*minor)
                ))]
            }
            Self::SphereSweep {
                spline,
                centers,
                radii,
            } => {
                let points: Vec<String> = centers
                    .iter()
                    .zip(radii)
                    .map(|(c, r)| format!("{}, {}", v(c), enc.num(*r)))
                    .collect();
                vec![
                    Sdl::line(format!("{}, {}", spline.keyword(), centers.len())),
                    Sdl::line(points.join(", ")),
                ]
            }
            Self::Csg { children, .. } => children.iter().map(|c| c.emit_node(enc)).collect(),
        }
    }
}

fn with_open(args: String, open: bool) -> Vec<Sdl> {
    let mut items = vec![Sdl::line(args)];
    if open {
        items.push(Sdl::line("open"));
    }
    items
}

fn point(v: impl IntoVector, what: &str) -> RaysceneResult<Vector> {
    v.into_vector()?.expect_3d(what)
}

fn distinct(a: &Vector, b: &Vector, what: &str) -> RaysceneResult<()> {
    if a == b {
        return Err(RaysceneError::value(format!(
            "{what} end points must differ"
        )));
    }
    Ok(())
}

fn collect_points<V: IntoVector>(
    centers: impl IntoIterator<Item = V>,
) -> RaysceneResult<Vec<Vector>> {
    centers
        .into_iter()
        .enumerate()
        .map(|(i, c)| point(c, &format!("sweep center {i}")))
        .collect()
}

/// One radius per center: a single radius repeats, otherwise lengths must match.
fn expand_radii(radii: &[f64], n: usize) -> RaysceneResult<Vec<f64>> {
    for r in radii {
        positive("sweep radius", *r)?;
    }
    match radii {
        [r] => Ok(vec![*r; n]),
        _ if radii.len() == n => Ok(radii.to_vec()),
        _ => Err(RaysceneError::value(format!(
            "sphere sweep needs 1 or {n} radii, got {}",
            radii.len()
        ))),
    }
}

impl Object {
    /// `sphere { center, radius }`.
    pub fn sphere(center: impl IntoVector, radius: f64) -> RaysceneResult<Self> {
        Ok(Self::from_shape(Shape::Sphere {
            center: point(center, "sphere center")?,
            radius: positive("sphere radius", radius)?,
        }))
    }

    /// `box { corner1, corner2 }`.
    pub fn box_from_corners(
        corner1: impl IntoVector,
        corner2: impl IntoVector,
    ) -> RaysceneResult<Self> {
        Ok(Self::from_shape(Shape::Box {
            corner1: point(corner1, "box corner")?,
            corner2: point(corner2, "box corner")?,
        }))
    }

    /// Axis-aligned cube with edge length `edge`, emitted as a `box`.
    pub fn cube(center: impl IntoVector, edge: f64) -> RaysceneResult<Self> {
        let edge = positive("cube edge", edge)?;
        Self::cuboid(center, [edge, edge, edge])
    }

    /// Axis-aligned box of the given size around `center`, emitted as a `box`.
    pub fn cuboid(center: impl IntoVector, size: impl IntoVector) -> RaysceneResult<Self> {
        let center = point(center, "cuboid center")?;
        let size = point(size, "cuboid size")?;
        for s in size.components() {
            positive("cuboid size", *s)?;
        }
        let (Some(c), Some(s)) = (center.to_dvec3(), size.to_dvec3()) else {
            return Err(RaysceneError::internal("cuboid inputs lost their arity"));
        };
        let half = s / 2.0;
        Self::box_from_corners(c - half, c + half)
    }

    /// `cylinder { base, cap, radius }`.
    pub fn cylinder(
        base: impl IntoVector,
        cap: impl IntoVector,
        radius: f64,
    ) -> RaysceneResult<Self> {
        let base = point(base, "cylinder base")?;
        let cap = point(cap, "cylinder cap")?;
        distinct(&base, &cap, "cylinder")?;
        Ok(Self::from_shape(Shape::Cylinder {
            base,
            cap,
            radius: positive("cylinder radius", radius)?,
            open: false,
        }))
    }

    /// `cone { base, base_radius, cap, cap_radius }`.
    pub fn cone(
        base: impl IntoVector,
        base_radius: f64,
        cap: impl IntoVector,
        cap_radius: f64,
    ) -> RaysceneResult<Self> {
        let base = point(base, "cone base")?;
        let cap = point(cap, "cone cap")?;
        distinct(&base, &cap, "cone")?;
        let base_radius = non_negative("cone base radius", base_radius)?;
        let cap_radius = non_negative("cone cap radius", cap_radius)?;
        if base_radius == 0.0 && cap_radius == 0.0 {
            return Err(RaysceneError::value("cone radii cannot both be zero"));
        }
        Ok(Self::from_shape(Shape::Cone {
            base,
            base_radius,
            cap,
            cap_radius,
            open: false,
        }))
    }

    /// `plane { normal, distance }`.
    pub fn plane(normal: impl IntoVector, distance: f64) -> RaysceneResult<Self> {
        let normal = point(normal, "plane normal")?;
        if normal.is_zero() {
            return Err(RaysceneError::value("plane normal must be non-zero"));
        }
        Ok(Self::from_shape(Shape::Plane {
            normal,
            distance: finite("plane distance", distance)?,
        }))
    }

    /// `torus { major, minor }` centered at the origin in the x-z plane.
    pub fn torus(major: f64, minor: f64) -> RaysceneResult<Self> {
        Ok(Self::from_shape(Shape::Torus {
            major: positive("torus major radius", major)?,
            minor: positive("torus minor radius", minor)?,
        }))
    }

    /// `sphere_sweep` through `centers` with one radius or one radius per center.
    ///
    /// A single center yields a `sphere`. B-splines and cubic splines with fewer than
    /// four centers fall back to a linear spline.
    pub fn sphere_sweep<V: IntoVector>(
        spline: Spline,
        centers: impl IntoIterator<Item = V>,
        radii: &[f64],
    ) -> RaysceneResult<Self> {
        let centers = collect_points(centers)?;
        Self::sweep_points(spline, centers, radii)
    }

    fn sweep_points(spline: Spline, centers: Vec<Vector>, radii: &[f64]) -> RaysceneResult<Self> {
        if centers.is_empty() {
            return Err(RaysceneError::value("sphere sweep needs at least one center"));
        }
        let radii = expand_radii(radii, centers.len())?;
        if let ([center], [radius]) = (centers.as_slice(), radii.as_slice()) {
            tracing::trace!("single-center sweep emitted as sphere");
            return Ok(Self::from_shape(Shape::Sphere {
                center: center.clone(),
                radius: *radius,
            }));
        }
        let spline = if centers.len() < spline.min_points() {
            tracing::trace!(
                points = centers.len(),
                spline = spline.keyword(),
                "too few points, falling back to linear_spline"
            );
            Spline::Linear
        } else {
            spline
        };
        Ok(Self::from_shape(Shape::SphereSweep {
            spline,
            centers,
            radii,
        }))
    }

    /// Broken line through `centers`, a linear `sphere_sweep`.
    pub fn polyline<V: IntoVector>(
        centers: impl IntoIterator<Item = V>,
        radii: &[f64],
    ) -> RaysceneResult<Self> {
        Self::sphere_sweep(Spline::Linear, centers, radii)
    }

    /// Polyline from separate coordinate columns of equal length.
    pub fn polyline_from_coordinates(
        xs: &[f64],
        ys: &[f64],
        zs: &[f64],
        radii: &[f64],
    ) -> RaysceneResult<Self> {
        if xs.len() != ys.len() || xs.len() != zs.len() {
            return Err(RaysceneError::value(format!(
                "coordinate columns differ in length: {}, {}, {}",
                xs.len(),
                ys.len(),
                zs.len()
            )));
        }
        let centers = xs
            .iter()
            .zip(ys)
            .zip(zs)
            .map(|((x, y), z)| [*x, *y, *z]);
        Self::polyline(centers, radii)
    }

    /// Smooth curve passing through every center, including both ends.
    ///
    /// Emitted as a cubic `sphere_sweep` with a ghost point mirrored through each end.
    pub fn curve<V: IntoVector>(
        centers: impl IntoIterator<Item = V>,
        radii: &[f64],
    ) -> RaysceneResult<Self> {
        let centers = collect_points(centers)?;
        if centers.len() < 2 {
            return Self::sweep_points(Spline::Linear, centers, radii);
        }
        let pts: Vec<DVec3> = centers.iter().filter_map(Vector::to_dvec3).collect();
        let n = pts.len();
        let first = math::reflect_point(pts[1], pts[0]);
        let last = math::reflect_point(pts[n - 2], pts[n - 1]);

        let mut with_ghosts = Vec::with_capacity(n + 2);
        with_ghosts.push(first.into_vector()?);
        with_ghosts.extend(centers);
        with_ghosts.push(last.into_vector()?);

        let radii = match radii {
            [_] => radii.to_vec(),
            [head, .., tail] if radii.len() == n => {
                let mut r = Vec::with_capacity(n + 2);
                r.push(*head);
                r.extend_from_slice(radii);
                r.push(*tail);
                r
            }
            _ => {
                return Err(RaysceneError::value(format!(
                    "curve needs 1 or {n} radii, got {}",
                    radii.len()
                )));
            }
        };
        Self::sweep_points(Spline::Cubic, with_ghosts, &radii)
    }

    /// Remove the end caps of a cylinder or cone.
    pub fn open(mut self) -> RaysceneResult<Self> {
        match &mut self.shape {
            Shape::Cylinder { open, .. } | Shape::Cone { open, .. } => {
                *open = true;
                Ok(self)
            }
            other => Err(RaysceneError::value(format!(
                "open applies to cylinder and cone, not {}",
                other.keyword()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/object/shapes.rs"]
mod tests;
