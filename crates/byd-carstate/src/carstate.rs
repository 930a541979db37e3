//! 车辆状态解码会话
//!
//! [`CarState`] 持有一次驾驶会话内的解码记忆：上一周期转角、
//! HUD 透传缓存和车速滤波器状态。解码结果只依赖当前快照与这些记忆，
//! 与墙上时间无关。

use crate::decoder::{DecodeContext, VariantDecoder, decoder_for};
use crate::hud::HudPassthrough;
use crate::speed::{DEFAULT_CONTROL_PERIOD_S, KalmanSpeedFilter, SpeedEstimator};
use crate::state::VehicleState;
use byd_protocol::constants::{HUD_MULTIPLIER, STANDSTILL_SPEED_THRESHOLD};
use byd_protocol::{MessageCheck, RawSignalBundle, ValueDefinitions, VehicleVariant};
use tracing::{info, trace};

/// 解码配置（启动时确定）
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    pub variant: VehicleVariant,
    /// 车辆是否配备盲区监测
    pub enable_bsm: bool,
    /// 控制周期（秒），用于转角变化率
    pub control_period_s: f64,
    /// 档位与跟车距离值表
    pub values: ValueDefinitions,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            variant: VehicleVariant::default(),
            enable_bsm: false,
            control_period_s: DEFAULT_CONTROL_PERIOD_S,
            values: ValueDefinitions::sealion(),
        }
    }
}

/// 车辆状态解码会话
pub struct CarState {
    decoder: Box<dyn VariantDecoder>,
    speed_filter: Box<dyn SpeedEstimator>,
    values: ValueDefinitions,
    enable_bsm: bool,
    control_period_s: f64,

    prev_angle: f64,
    hud: HudPassthrough,
}

impl CarState {
    /// 按配置创建会话（使用默认卡尔曼车速滤波）
    pub fn new(config: DecoderConfig) -> Self {
        let filter = KalmanSpeedFilter::new(config.control_period_s);
        Self::with_speed_filter(config, Box::new(filter))
    }

    /// 使用自定义车速估计器
    pub fn with_speed_filter(config: DecoderConfig, speed_filter: Box<dyn SpeedEstimator>) -> Self {
        info!(
            variant = %config.variant,
            enable_bsm = config.enable_bsm,
            "car state decoder initialized"
        );
        Self {
            decoder: decoder_for(config.variant),
            speed_filter,
            values: config.values,
            enable_bsm: config.enable_bsm,
            control_period_s: config.control_period_s,
            prev_angle: 0.0,
            hud: HudPassthrough::default(),
        }
    }

    pub fn variant(&self) -> VehicleVariant {
        self.decoder.variant()
    }

    /// 外部解析器需要订阅的动力总线报文
    pub fn pt_messages(&self) -> &'static [MessageCheck] {
        self.decoder.pt_messages()
    }

    /// 外部解析器需要订阅的摄像头总线报文
    pub fn cam_messages(&self) -> &'static [MessageCheck] {
        self.decoder.cam_messages()
    }

    /// 最近一次解码缓存的 HUD 透传值
    pub fn hud_passthrough(&self) -> HudPassthrough {
        self.hud
    }

    /// 上一周期的转角（deg）
    pub fn prev_angle(&self) -> f64 {
        self.prev_angle
    }

    /// 解码一个周期
    pub fn update(&mut self, can: &RawSignalBundle<'_>) -> VehicleState {
        let ctx = DecodeContext {
            values: &self.values,
            enable_bsm: self.enable_bsm,
        };

        let mut out = VehicleState::default();
        self.decoder.decode(can, &ctx, &mut out, &mut self.hud);

        // 两轮近似：左后 + 左前
        out.v_ego_raw = (out.wheel_speeds.rl + out.wheel_speeds.fl) / 2.0;
        let (v_ego, a_ego) = self.speed_filter.update(out.v_ego_raw);
        out.v_ego = v_ego;
        out.a_ego = a_ego;
        out.v_ego_cluster = out.v_ego * HUD_MULTIPLIER;
        out.standstill = out.v_ego_raw < STANDSTILL_SPEED_THRESHOLD;

        out.steering_rate_deg = if self.control_period_s > 0.0 {
            (out.steering_angle_deg - self.prev_angle) / self.control_period_s
        } else {
            0.0
        };
        self.prev_angle = out.steering_angle_deg;

        // stock AEB/FCW 暂无对应信号
        out.stock_aeb = false;
        out.stock_fcw = false;

        trace!(
            v_ego = out.v_ego,
            angle = out.steering_angle_deg,
            cruise_enabled = out.cruise_state.enabled,
            "car state decoded"
        );
        out
    }

    /// 重置会话记忆（新驾驶会话开始时）
    pub fn reset(&mut self) {
        self.speed_filter.reset();
        self.prev_angle = 0.0;
        self.hud = HudPassthrough::default();
    }
}

impl std::fmt::Debug for CarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarState")
            .field("variant", &self.decoder.variant())
            .field("enable_bsm", &self.enable_bsm)
            .field("prev_angle", &self.prev_angle)
            .field("hud", &self.hud)
            .finish()
    }
}
