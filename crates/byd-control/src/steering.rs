//! 转角控制器
//!
//! 车辆按半速率接受转角指令：只在偶数周期重新计算下发转角，
//! 奇数周期保持上一次的值。帧计数每周期递增，与编码器的 4 bit
//! 计数器截断自然对齐。

use crate::limiter::{AngleRateLimiter, StdAngleLimiter};
use crate::limits::{ANGLE_LIMITS, AngleSteeringLimits};
use tracing::{trace, warn};

/// 隔周期更新的转角控制器
///
/// 一次驾驶会话内持有两个持久量：下发转角与帧计数。
#[derive(Debug, Clone)]
pub struct AngleSteeringController<L = StdAngleLimiter> {
    limiter: L,
    limits: AngleSteeringLimits,
    apply_angle: f64,
    frame: u32,
}

impl Default for AngleSteeringController<StdAngleLimiter> {
    fn default() -> Self {
        Self::new(StdAngleLimiter)
    }
}

impl<L: AngleRateLimiter> AngleSteeringController<L> {
    /// 使用指定限制器与默认限制参数创建
    pub fn new(limiter: L) -> Self {
        Self {
            limiter,
            limits: ANGLE_LIMITS,
            apply_angle: 0.0,
            frame: 0,
        }
    }

    /// 替换限制参数
    pub fn with_limits(mut self, limits: AngleSteeringLimits) -> Self {
        self.limits = limits;
        self
    }

    /// 当前下发转角（deg）
    pub fn apply_angle(&self) -> f64 {
        self.apply_angle
    }

    /// 下一次 `update` 对应的帧号
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn limits(&self) -> &AngleSteeringLimits {
        &self.limits
    }

    /// 运行一个控制周期，返回本周期下发的转角
    pub fn update(
        &mut self,
        target_deg: f64,
        v_ego: f64,
        measured_deg: f64,
        lat_active: bool,
    ) -> f64 {
        if self.frame % 2 == 0 {
            let angle = self.limiter.apply(
                target_deg,
                self.apply_angle,
                v_ego,
                measured_deg,
                lat_active,
                &self.limits,
            );
            // 非有限结果不下发，保持上一次转角
            if angle.is_finite() {
                self.apply_angle = angle;
            } else {
                warn!(frame = self.frame, angle, "limiter returned non-finite angle, holding");
            }
            trace!(
                frame = self.frame,
                target_deg,
                apply_angle = self.apply_angle,
                "steering angle updated"
            );
        }

        self.frame = self.frame.wrapping_add(1);
        self.apply_angle
    }

    /// 新驾驶会话开始时清零
    pub fn reset(&mut self) {
        self.apply_angle = 0.0;
        self.frame = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// 每次调用返回一个新值的限制器
    #[derive(Default)]
    struct CountingLimiter {
        calls: AtomicU32,
    }

    impl AngleRateLimiter for CountingLimiter {
        fn apply(
            &self,
            _target_deg: f64,
            _last_deg: f64,
            _v_ego: f64,
            _measured_deg: f64,
            _lat_active: bool,
            _limits: &AngleSteeringLimits,
        ) -> f64 {
            f64::from(self.calls.fetch_add(1, Ordering::Relaxed) + 1) * 10.0
        }
    }

    #[test]
    fn test_updates_only_on_even_frames() {
        let mut controller = AngleSteeringController::new(CountingLimiter::default());

        let applied: Vec<f64> = (0..4)
            .map(|_| controller.update(0.0, 10.0, 0.0, true))
            .collect();

        // 第 0、2 周期变化，第 1、3 周期保持
        assert_eq!(applied, vec![10.0, 10.0, 20.0, 20.0]);
        assert_eq!(controller.frame(), 4);
        assert_eq!(controller.limiter.calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_frame_wraps() {
        let mut controller = AngleSteeringController::default();
        controller.frame = u32::MAX;
        controller.update(0.0, 0.0, 0.0, true);
        assert_eq!(controller.frame(), 0);
    }

    #[test]
    fn test_std_limiter_ramps_toward_target() {
        let mut controller = AngleSteeringController::default();
        let mut last = 0.0;
        for _ in 0..20 {
            last = controller.update(30.0, 20.0, 0.0, true);
        }
        // 10 次有效更新，每次 2 deg
        assert!((last - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_inputs_never_reach_output() {
        let mut controller = AngleSteeringController::default();
        let mut applied = Vec::new();
        for target in [f64::NAN, f64::NAN, f64::INFINITY, f64::INFINITY] {
            applied.push(controller.update(target, f64::NAN, f64::NAN, true));
        }
        for _ in 0..6 {
            applied.push(controller.update(5.0, 20.0, 0.0, true));
        }

        assert!(applied.iter().all(|a| a.is_finite() && a.abs() <= 220.0));
        assert_eq!(&applied[..4], &[0.0; 4]);
        // 恢复有限目标后照常爬升：2, 4, 5
        assert_eq!(&applied[4..], &[2.0, 2.0, 4.0, 4.0, 5.0, 5.0]);
    }

    struct NanLimiter;

    impl AngleRateLimiter for NanLimiter {
        fn apply(
            &self,
            _target_deg: f64,
            _last_deg: f64,
            _v_ego: f64,
            _measured_deg: f64,
            _lat_active: bool,
            _limits: &AngleSteeringLimits,
        ) -> f64 {
            f64::NAN
        }
    }

    #[test]
    fn test_non_finite_limiter_output_holds() {
        let mut controller = AngleSteeringController::new(NanLimiter);
        for _ in 0..4 {
            assert_eq!(controller.update(10.0, 10.0, 0.0, true), 0.0);
        }
        assert_eq!(controller.frame(), 4);
    }

    #[test]
    fn test_reset() {
        let mut controller = AngleSteeringController::default();
        controller.update(5.0, 20.0, 0.0, true);
        controller.reset();
        assert_eq!(controller.apply_angle(), 0.0);
        assert_eq!(controller.frame(), 0);
    }
}
