//! 原始布局：摄像头 ADAS 巡航/LKAS + 仪表车门

use super::layout::*;
use super::{DecodeContext, VariantDecoder};
use crate::hud::HudPassthrough;
use crate::state::VehicleState;
use byd_protocol::{RawSignalBundle, VehicleVariant};

/// `AdasCamera` 布局解码器
#[derive(Debug, Clone, Copy, Default)]
pub struct AdasCameraDecoder;

impl VariantDecoder for AdasCameraDecoder {
    fn variant(&self) -> VehicleVariant {
        VehicleVariant::AdasCamera
    }

    fn decode(
        &self,
        can: &RawSignalBundle<'_>,
        ctx: &DecodeContext<'_>,
        out: &mut VehicleState,
        hud: &mut HudPassthrough,
    ) {
        out.steer_fault_temporary = decode_adas_hud(can, hud);

        out.wheel_speeds = decode_wheel_speeds_primary(can);
        out.gear_shifter = decode_gear(can, ctx);
        decode_body_cluster(can, out);
        decode_pedals(can, out);
        decode_steering(can, out);

        out.cruise_state = decode_adas_cruise(can, ctx);
        decode_stalks(can, out);
        decode_blindspot(can, ctx, out);
    }
}
