//! 转角变化率限制器

use crate::limits::AngleSteeringLimits;

/// 转角变化率限制接口
///
/// 输入目标转角与上一次下发的转角，返回本周期允许下发的转角。
/// 实现必须是全函数，任何输入都返回有限范围内的角度。
pub trait AngleRateLimiter: Send {
    /// # 参数
    ///
    /// - `target_deg`: 规划层期望的转角
    /// - `last_deg`: 上一次下发的转角
    /// - `v_ego`: 当前车速（m/s）
    /// - `measured_deg`: 当前实测方向盘转角
    /// - `lat_active`: 横向控制是否激活
    fn apply(
        &self,
        target_deg: f64,
        last_deg: f64,
        v_ego: f64,
        measured_deg: f64,
        lat_active: bool,
        limits: &AngleSteeringLimits,
    ) -> f64;
}

/// 标准角度限制器
///
/// 1. 目标与上次同号且幅值增大（远离中位）时使用 `rate_up`，否则 `rate_down`
/// 2. 按 `v_ego` 插值得到本周期变化上限，把目标钳位到 `last ± rate`
/// 3. 横向控制未激活时跟随实测转角
/// 4. 最终钳位到 `±steer_angle_max`
///
/// 非有限输入不会传播：`last_deg` 非有限时按 0 处理，
/// 目标或实测转角非有限时保持 `last_deg`。
#[derive(Debug, Clone, Copy, Default)]
pub struct StdAngleLimiter;

impl AngleRateLimiter for StdAngleLimiter {
    fn apply(
        &self,
        target_deg: f64,
        last_deg: f64,
        v_ego: f64,
        measured_deg: f64,
        lat_active: bool,
        limits: &AngleSteeringLimits,
    ) -> f64 {
        let last_deg = finite_or(last_deg, 0.0);
        let target_deg = finite_or(target_deg, last_deg);

        let steer_up = last_deg * target_deg >= 0.0 && target_deg.abs() > last_deg.abs();
        let table = if steer_up {
            &limits.rate_up
        } else {
            &limits.rate_down
        };
        // NaN.max(0.0) == 0.0
        let rate = table.rate_at(v_ego).max(0.0);

        let angle = if lat_active {
            target_deg.clamp(last_deg - rate, last_deg + rate)
        } else {
            finite_or(measured_deg, last_deg)
        };

        let max = limits.steer_angle_max.abs().max(0.0);
        angle.clamp(-max, max)
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
