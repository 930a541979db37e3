//! 驾驶会话
//!
//! [`DrivingSession`] 把解码会话与控制器串在一起：每周期先解码，
//! 再用同一周期的车辆状态与 HUD 缓存生成出站帧。

use crate::config::{ConfigError, VehicleConfig};
use byd_carstate::{CarState, VehicleState};
use byd_control::{CarController, DesiredActuation, FrameBatch};
use byd_protocol::RawSignalBundle;
use tracing::info;

/// 单周期输出
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutput {
    /// 本周期解码得到的车辆状态
    pub state: VehicleState,
    /// 本周期下发的转角（deg）
    pub applied_angle_deg: f64,
    /// 出站命令帧
    pub frames: FrameBatch,
}

/// 一次驾驶会话
#[derive(Debug)]
pub struct DrivingSession {
    car_state: CarState,
    controller: CarController,
}

impl DrivingSession {
    /// 按配置创建会话
    pub fn new(config: &VehicleConfig) -> Result<Self, ConfigError> {
        let car_state = CarState::new(config.decoder_config()?);
        let controller = CarController::new(config.controller_config());
        info!(
            variant = %config.variant,
            longitudinal = config.longitudinal,
            "driving session started"
        );
        Ok(Self::from_parts(car_state, controller))
    }

    pub fn from_parts(car_state: CarState, controller: CarController) -> Self {
        Self {
            car_state,
            controller,
        }
    }

    pub fn car_state(&self) -> &CarState {
        &self.car_state
    }

    pub fn controller(&self) -> &CarController {
        &self.controller
    }

    /// 运行一个控制周期
    pub fn step(&mut self, can: &RawSignalBundle<'_>, actuation: &DesiredActuation) -> CycleOutput {
        let state = self.car_state.update(can);
        let output = self
            .controller
            .update(actuation, &state, self.car_state.hud_passthrough());

        CycleOutput {
            state,
            applied_angle_deg: output.applied_angle_deg,
            frames: output.frames,
        }
    }

    /// 新驾驶会话开始时清空所有持久量
    pub fn reset(&mut self) {
        self.car_state.reset();
        self.controller.reset();
    }
}
