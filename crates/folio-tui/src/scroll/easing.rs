//! L4 Atomic Layer: Pure easing functions
//!
//! Map progress in [0, 1] to eased progress in [0, 1].

pub use folio_core::EasingType;

pub trait EasingTypeExt {
    /// Eased value of `t`, which is clamped to [0, 1] first
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => t.floor(),
            EasingType::Linear => t,
            EasingType::Cubic => ease_out_pow(t, 3),
            EasingType::Quintic => ease_out_pow(t, 5),
            EasingType::EaseOut if t >= 1.0 => 1.0,
            EasingType::EaseOut => 1.0 - 2.0_f64.powf(-10.0 * t),
            EasingType::EaseInOut if t < 0.5 => 4.0 * t.powi(3),
            EasingType::EaseInOut => 1.0 - (2.0 - 2.0 * t).powi(3) / 2.0,
        }
    }
}

/// 1 - (1 - t)^n
#[inline]
fn ease_out_pow(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}
