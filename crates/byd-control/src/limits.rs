//! 转角限制参数
//!
//! 速度断点表按 m/s 索引，返回每个有效控制周期允许的转角变化（deg）。
//! 低速收紧、高速放宽。

/// 速度断点 → 每周期转角变化上限
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitTable {
    /// 速度断点（m/s，递增）
    pub speeds: &'static [f64],
    /// 对应的转角变化上限（deg / 周期）
    pub rates: &'static [f64],
}

impl RateLimitTable {
    /// 按车速插值得到变化上限
    pub fn rate_at(&self, v_ego: f64) -> f64 {
        interp(v_ego, self.speeds, self.rates)
    }
}

/// 转角控制限制
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSteeringLimits {
    /// 最大绝对转角（deg）
    pub steer_angle_max: f64,
    /// 转角远离中位（加大转向）时的变化上限
    pub rate_up: RateLimitTable,
    /// 转角回中时的变化上限
    pub rate_down: RateLimitTable,
}

/// 车辆接受的转角限制
pub const ANGLE_LIMITS: AngleSteeringLimits = AngleSteeringLimits {
    steer_angle_max: 220.0,
    rate_up: RateLimitTable {
        speeds: &[0.0, 5.0, 15.0],
        rates: &[4.0, 3.0, 2.0],
    },
    rate_down: RateLimitTable {
        speeds: &[0.0, 5.0, 15.0],
        rates: &[6.0, 4.0, 3.0],
    },
};

/// 分段线性插值，两端外取端点值
///
/// `xp` 必须递增。表为空时返回 0；长度不等时按较短者处理。
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    if n == 0 {
        return 0.0;
    }
    if x <= xp[0] {
        return fp[0];
    }

    for i in 1..n {
        if x < xp[i] {
            let (x0, x1) = (xp[i - 1], xp[i]);
            let (y0, y1) = (fp[i - 1], fp[i]);
            return y0 + (x - x0) * (y1 - y0) / (x1 - x0);
        }
    }
    fp[n - 1]
}
