use serde::{Deserialize, Serialize};

/// Timing curve shared by every channel of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)` semantics.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Maps linear progress `t` in `[0.0, 1.0]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut if t < 0.5 => 2.0 * t * t,
            Self::EaseInOut => -1.0 + (4.0 - 2.0 * t) * t,
            Self::CubicBezier(x1, y1, x2, y2) => {
                let bezier_t = solve_bezier_t(t, x1, x2);
                sample_bezier(bezier_t, y1, y2)
            }
        }
    }
}

fn solve_bezier_t(x: f32, x1: f32, x2: f32) -> f32 {
    let mut t = x;

    for _ in 0..8 {
        let residual = sample_bezier(t, x1, x2) - x;

        if residual.abs() < 1e-6 {
            return t;
        }

        let slope = bezier_derivative(t, x1, x2);

        if slope.abs() < 1e-6 {
            break;
        }

        t -= residual / slope;
    }

    t
}

/// Cubic bezier with endpoints (0,0) and (1,1).
fn sample_bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
}

fn bezier_derivative(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;

    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}
