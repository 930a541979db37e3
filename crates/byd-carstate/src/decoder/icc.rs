//! ICC 布局：动力总线 ICC 巡航 + 横摆角速度 + 备用轮速/车门/安全带
//!
//! 该布局没有以下信号，使用固定默认值：
//! - 油门踏板位置：`gas_pressed = false`
//! - 制动踏板位置：`brake` 取制动开关的 0/1
//! - EPS 健康：`steer_fault_temporary = false`，缓存的 `eps_ok = true`
//! - 摄像头 HUD：`settings = 0`、`tsr = 0`、`lka_on = false`

use super::layout::*;
use super::{DecodeContext, VariantDecoder};
use crate::hud::HudPassthrough;
use crate::state::VehicleState;
use byd_protocol::{Bus, MSG_BRAKE_SWITCH, RawSignalBundle, VehicleVariant};

/// `IccCruise` 布局解码器
#[derive(Debug, Clone, Copy, Default)]
pub struct IccCruiseDecoder;

impl VariantDecoder for IccCruiseDecoder {
    fn variant(&self) -> VehicleVariant {
        VehicleVariant::IccCruise
    }

    fn decode(
        &self,
        can: &RawSignalBundle<'_>,
        ctx: &DecodeContext<'_>,
        out: &mut VehicleState,
        hud: &mut HudPassthrough,
    ) {
        *hud = HudPassthrough::default();
        out.steer_fault_temporary = false;

        out.wheel_speeds = decode_wheel_speeds_alt(can);
        out.yaw_rate = decode_yaw_rate(can);
        out.gear_shifter = decode_gear(can, ctx);
        decode_body_alt(can, out);

        out.gas_pressed = false;
        out.brake_pressed = can.flag(Bus::Powertrain, MSG_BRAKE_SWITCH, "BRAKE_PRESSED");
        out.brake = if out.brake_pressed { 1.0 } else { 0.0 };

        decode_steering(can, out);

        out.cruise_state = decode_icc_cruise(can, ctx);
        decode_stalks(can, out);
        decode_blindspot(can, ctx, out);
    }
}
