//! 每周期控制输出
//!
//! [`CarController`] 把期望执行量转换为出站命令帧：
//!
//! | 帧 | 条件 |
//! |---|---|
//! | `STEERING_MODULE_ADAS` | 每周期 |
//! | `LKAS_HUD_ADAS` | 每周期（回显摄像头 HUD） |
//! | `ACC_CMD` | 配置了纵向控制 |
//! | `PCM_BUTTONS` | 请求巡航按键 |
//!
//! 计数器取当前帧号，由编码器截断到 4 bit。

use crate::limiter::{AngleRateLimiter, StdAngleLimiter};
use crate::steering::AngleSteeringController;
use byd_carstate::{HudPassthrough, VehicleState};
use byd_protocol::{
    OutboundCommandFrame, create_accel_command, create_button_press, create_lkas_hud,
    create_steer_command,
};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// 单周期的出站帧（最多 4 帧，栈上分配）
pub type FrameBatch = SmallVec<[OutboundCommandFrame; 4]>;

/// 规划层给出的期望执行量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DesiredActuation {
    /// 目标方向盘转角（deg）
    pub steering_angle_deg: f64,
    /// 横向控制激活
    pub lat_active: bool,
    /// 车辆静止（影响转向帧填充字节）
    pub standstill: bool,
    /// 制动保持
    pub brake_hold: bool,
    /// 目标纵向加速度（m/s²）
    pub accel: f64,
    /// 纵向控制使能
    pub long_enabled: bool,
    /// 按下 SET/RES
    pub cruise_button: bool,
}

/// 控制器配置
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerConfig {
    /// 是否由本层发送 `ACC_CMD`
    pub longitudinal: bool,
}

/// 单周期控制输出
#[derive(Debug, Clone, PartialEq)]
pub struct ControlOutput {
    /// 本周期下发的转角（deg）
    pub applied_angle_deg: f64,
    /// 出站帧，顺序固定：转向、HUD、加速度、按键
    pub frames: FrameBatch,
}

/// 车辆控制器
#[derive(Debug)]
pub struct CarController<L = StdAngleLimiter> {
    steering: AngleSteeringController<L>,
    config: ControllerConfig,
}

impl CarController<StdAngleLimiter> {
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_steering(config, AngleSteeringController::default())
    }
}

impl<L: AngleRateLimiter> CarController<L> {
    /// 使用自定义的转角控制器
    pub fn with_steering(config: ControllerConfig, steering: AngleSteeringController<L>) -> Self {
        Self { steering, config }
    }

    pub fn config(&self) -> ControllerConfig {
        self.config
    }

    pub fn steering(&self) -> &AngleSteeringController<L> {
        &self.steering
    }

    /// 运行一个控制周期
    ///
    /// `state` 与 `hud` 来自同一周期（或更早周期）的解码结果。
    pub fn update(
        &mut self,
        actuation: &DesiredActuation,
        state: &VehicleState,
        hud: HudPassthrough,
    ) -> ControlOutput {
        let counter = self.steering.frame();
        let applied = self.steering.update(
            actuation.steering_angle_deg,
            state.v_ego,
            state.steering_angle_deg,
            actuation.lat_active,
        );

        if actuation.lat_active && !hud.eps_ok {
            debug!(counter, "lateral control requested while EPS reports not ok");
        }

        let mut frames = FrameBatch::new();
        frames.push(create_steer_command(
            applied,
            actuation.lat_active,
            actuation.standstill,
            counter,
        ));
        frames.push(create_lkas_hud(
            hud.tsr,
            hud.settings,
            actuation.lat_active,
            hud.lka_on,
            counter,
        ));
        if self.config.longitudinal {
            frames.push(create_accel_command(
                actuation.accel,
                actuation.long_enabled,
                actuation.brake_hold,
                counter,
            ));
        }
        if actuation.cruise_button {
            frames.push(create_button_press(true));
        }

        trace!(counter, applied, frames = frames.len(), "control cycle");
        ControlOutput {
            applied_angle_deg: applied,
            frames,
        }
    }

    pub fn reset(&mut self) {
        self.steering.reset();
    }
}
