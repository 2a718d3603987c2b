//! Hookean spring force law.

use glam::Vec3;
use vela_types::constants::DEGENERATE_LENGTH_THRESHOLD;
use vela_types::Scalar;

/// Force exerted on the endpoint at `a` by a spring to `b`.
///
/// `f = k · (1 − l0/|b−a|) · (b−a)`, i.e. Hooke's law with the scale
/// factor applied to the full separation vector. The force pulls `a`
/// toward `b` when the spring is stretched beyond `rest_length` and
/// pushes it away when compressed. The opposite vector belongs on `b`.
///
/// Returns `None` when the endpoints (nearly) coincide: the direction
/// is undefined there and dividing by the separation length would
/// inject NaN into the state.
#[inline]
pub fn spring_force(a: Vec3, b: Vec3, stiffness: Scalar, rest_length: Scalar) -> Option<Vec3> {
    let u = b - a;
    let norm = u.length();
    if norm < DEGENERATE_LENGTH_THRESHOLD {
        return None;
    }
    Some(u * (stiffness * (1.0 - rest_length / norm)))
}
