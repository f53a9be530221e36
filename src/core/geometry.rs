//! Geometrie-Helfer: Distanzen, Winkelmessung, Winkelnormalisierung.

use glam::DVec2;
use std::f64::consts::PI;

/// Euklidische Distanz zwischen zwei Positionen.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (b - a).length()
}

/// Winkel zwischen zwei Strahlen ab einem gemeinsamen Scheitel, in Grad.
///
/// Arcus-Cosinus des normierten Skalarprodukts; das Argument wird vor dem
/// `acos` auf [-1, 1] geklemmt (Gleitkomma-Rundung). Hat einer der beiden
/// Strahlen Länge null, ist der Winkel als 0 Grad definiert.
pub fn angle_between_degrees(vertex: DVec2, far_a: DVec2, far_b: DVec2) -> f64 {
    let v1 = far_a - vertex;
    let v2 = far_b - vertex;
    let len1 = v1.length();
    let len2 = v2.length();

    if len1 == 0.0 || len2 == 0.0 {
        return 0.0;
    }

    let cos = (v1.dot(v2) / (len1 * len2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Normalisiert eine Winkeldifferenz in das Intervall (-PI, PI].
pub fn normalize_signed_angle(delta: f64) -> f64 {
    let mut d = delta % (2.0 * PI);
    if d <= -PI {
        d += 2.0 * PI;
    } else if d > PI {
        d -= 2.0 * PI;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn right_angle_measures_ninety_degrees() {
        let vertex = DVec2::new(10.0, 0.0);
        let far_a = DVec2::new(0.0, 0.0);
        let far_b = DVec2::new(10.0, 10.0);

        assert_relative_eq!(
            angle_between_degrees(vertex, far_a, far_b),
            90.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn collinear_rays_measure_zero_or_straight() {
        let vertex = DVec2::ZERO;
        let far = DVec2::new(5.0, 0.0);

        assert_relative_eq!(angle_between_degrees(vertex, far, far), 0.0, epsilon = 1e-9);
        assert_relative_eq!(
            angle_between_degrees(vertex, far, DVec2::new(-5.0, 0.0)),
            180.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn zero_length_ray_yields_zero_degrees() {
        let vertex = DVec2::new(3.0, 4.0);
        assert_eq!(angle_between_degrees(vertex, vertex, DVec2::ZERO), 0.0);
    }

    #[test]
    fn normalize_signed_angle_maps_into_half_open_interval() {
        assert_relative_eq!(normalize_signed_angle(PI), PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_signed_angle(-PI), PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_signed_angle(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_signed_angle(-1.5 * PI), 0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_signed_angle(0.25 * PI), 0.25 * PI, epsilon = 1e-12);
    }
}
