//! 各布局共用的信号段解码
//!
//! 每个函数只负责一组报文；单位换算统一使用 `byd_protocol::constants`。

use super::DecodeContext;
use crate::hud::HudPassthrough;
use crate::state::{CruiseState, GearShifter, VehicleState, WheelSpeeds};
use byd_protocol::constants::{
    BRAKE_PRESSED_THRESHOLD, DEG_TO_RAD, GAS_PRESSED_THRESHOLD, HUD_MULTIPLIER, KPH_TO_MS,
    MIN_CRUISE_SET_SPEED_KPH, STEER_PRESSED_TORQUE_THRESHOLD,
};
use byd_protocol::ids::*;
use byd_protocol::{LookupValue, RawSignalBundle, ValueTable};
use tracing::debug;

const PT: Bus = Bus::Powertrain;
const CAM: Bus = Bus::Camera;

// ============================================================================
// 所有布局共有
// ============================================================================

/// 档位（`DRIVE_STATE.GEAR`）
pub(crate) fn decode_gear(can: &RawSignalBundle<'_>, ctx: &DecodeContext<'_>) -> GearShifter {
    let raw = can.int(PT, MSG_DRIVE_STATE, "GEAR");
    let gear = GearShifter::from_label(ctx.values.gear.lookup(raw).label());
    if gear == GearShifter::Unknown {
        debug!(raw, "gear code not mapped");
    }
    gear
}

/// 转角、扭矩与手力判定
pub(crate) fn decode_steering(can: &RawSignalBundle<'_>, out: &mut VehicleState) {
    out.steering_angle_deg = can.get(PT, MSG_STEER_MODULE_2, "STEER_ANGLE_2");
    out.steering_angle_offset_deg = 0.0;
    out.steering_torque = can.get(PT, MSG_STEERING_TORQUE, "MAIN_TORQUE");
    out.steering_torque_eps = can.get(PT, MSG_STEER_MODULE_2, "DRIVER_EPS_TORQUE");
    out.steering_pressed = out.steering_torque_eps > STEER_PRESSED_TORQUE_THRESHOLD;
}

/// 转向灯拨杆
pub(crate) fn decode_stalks(can: &RawSignalBundle<'_>, out: &mut VehicleState) {
    out.left_blinker = can.flag(PT, MSG_STALKS, "LEFT_BLINKER");
    out.right_blinker = can.flag(PT, MSG_STALKS, "RIGHT_BLINKER");
    out.generic_toggle = can.flag(PT, MSG_STALKS, "GENERIC_TOGGLE");
    out.esp_disabled = false;
}

/// 盲区监测：未配备时保持 false
///
/// 用于变道提示，两侧都报接近即可。
pub(crate) fn decode_blindspot(
    can: &RawSignalBundle<'_>,
    ctx: &DecodeContext<'_>,
    out: &mut VehicleState,
) {
    if ctx.enable_bsm {
        out.left_blindspot = can.flag(PT, MSG_BSM, "LEFT_APPROACH");
        out.right_blindspot = can.flag(PT, MSG_BSM, "RIGHT_APPROACH");
    } else {
        out.left_blindspot = false;
        out.right_blindspot = false;
    }
}

/// 巡航车速：仪表值带 30 km/h 下限，`speed` 去除仪表偏差
///
/// 巡航不可用时仪表车速跟随轮速，这里报 0。
pub(crate) fn cruise_speeds(available: bool, raw_set_speed_kph: f64) -> (f64, f64) {
    let speed_cluster = if available {
        raw_set_speed_kph.trunc().max(MIN_CRUISE_SET_SPEED_KPH) * KPH_TO_MS
    } else {
        0.0
    };
    (speed_cluster / HUD_MULTIPLIER, speed_cluster)
}

fn lookup_set_distance(table: &ValueTable, raw: i64) -> LookupValue {
    let value = table.lookup(raw);
    if !value.is_known() {
        debug!(raw, "set distance code not mapped");
    }
    value
}

// ============================================================================
// 原始布局：WHEEL_SPEED / METER_CLUSTER / PEDAL
// ============================================================================

pub(crate) fn decode_wheel_speeds_primary(can: &RawSignalBundle<'_>) -> WheelSpeeds {
    WheelSpeeds {
        fl: can.get(PT, MSG_WHEEL_SPEED, "WHEELSPEED_FL") * KPH_TO_MS,
        fr: can.get(PT, MSG_WHEEL_SPEED, "WHEELSPEED_FR") * KPH_TO_MS,
        rl: can.get(PT, MSG_WHEEL_SPEED, "WHEELSPEED_BL") * KPH_TO_MS,
        rr: can.get(PT, MSG_WHEEL_SPEED, "WHEELSPEED_BR") * KPH_TO_MS,
    }
}

/// 仪表报文中的车门与主驾安全带
pub(crate) fn decode_body_cluster(can: &RawSignalBundle<'_>, out: &mut VehicleState) {
    out.door_open = [
        "BACK_LEFT_DOOR",
        "FRONT_LEFT_DOOR",
        "BACK_RIGHT_DOOR",
        "FRONT_RIGHT_DOOR",
    ]
    .into_iter()
    .any(|door| can.flag(PT, MSG_METER_CLUSTER, door));
    out.seatbelt_unlatched = can.get(PT, MSG_METER_CLUSTER, "SEATBELT_DRIVER") == 0.0;
}

/// 油门与制动踏板位置
pub(crate) fn decode_pedals(can: &RawSignalBundle<'_>, out: &mut VehicleState) {
    let gas = can.get(PT, MSG_PEDAL, "GAS_PEDAL");
    out.gas_pressed = gas >= GAS_PRESSED_THRESHOLD;
    out.brake = can.get(PT, MSG_PEDAL, "BRAKE_PEDAL");
    out.brake_pressed = out.brake > BRAKE_PRESSED_THRESHOLD;
}

// ============================================================================
// 备用布局：WHEEL_SPEED_2 / DOOR_STATUS / SEATBELT
// ============================================================================

pub(crate) fn decode_wheel_speeds_alt(can: &RawSignalBundle<'_>) -> WheelSpeeds {
    WheelSpeeds {
        fl: can.get(PT, MSG_WHEEL_SPEED_2, "WHEEL_SPEED_FL") * KPH_TO_MS,
        fr: can.get(PT, MSG_WHEEL_SPEED_2, "WHEEL_SPEED_FR") * KPH_TO_MS,
        rl: can.get(PT, MSG_WHEEL_SPEED_2, "WHEEL_SPEED_RL") * KPH_TO_MS,
        rr: can.get(PT, MSG_WHEEL_SPEED_2, "WHEEL_SPEED_RR") * KPH_TO_MS,
    }
}

pub(crate) fn decode_body_alt(can: &RawSignalBundle<'_>, out: &mut VehicleState) {
    out.door_open = ["DOOR_FL", "DOOR_FR", "DOOR_RL", "DOOR_RR"]
        .into_iter()
        .any(|door| can.flag(PT, MSG_DOOR_STATUS, door));
    out.seatbelt_unlatched = can.get(PT, MSG_SEATBELT, "DRIVER_BUCKLED") == 0.0;
}

// ============================================================================
// 摄像头 ADAS：ACC_HUD_ADAS / ACC_CMD / LKAS_HUD_ADAS / STEERING_MODULE_ADAS
// ============================================================================

/// 摄像头巡航状态
pub(crate) fn decode_adas_cruise(
    can: &RawSignalBundle<'_>,
    ctx: &DecodeContext<'_>,
) -> CruiseState {
    let available = can.flag(CAM, MSG_ACC_HUD_ADAS, "ACC_ON1")
        || can.flag(CAM, MSG_ACC_HUD_ADAS, "ACC_ON2");
    let (speed, speed_cluster) =
        cruise_speeds(available, can.get(CAM, MSG_ACC_HUD_ADAS, "SET_SPEED"));

    CruiseState {
        available,
        // CMD_REQ_ACTIVE_LOW 低有效
        enabled: !can.flag(CAM, MSG_ACC_CMD, "CMD_REQ_ACTIVE_LOW"),
        speed,
        speed_cluster,
        standstill: can.flag(CAM, MSG_ACC_CMD, "STANDSTILL_STATE"),
        non_adaptive: false,
        set_distance: lookup_set_distance(
            &ctx.values.set_distance,
            can.int(CAM, MSG_ACC_HUD_ADAS, "SET_DISTANCE"),
        ),
    }
}

/// 缓存摄像头 HUD 字段与 EPS 健康标志，返回 EPS 是否报错
pub(crate) fn decode_adas_hud(can: &RawSignalBundle<'_>, hud: &mut HudPassthrough) -> bool {
    hud.settings = can.int(CAM, MSG_LKAS_HUD_ADAS, "SETTINGS");
    hud.tsr = can.int(CAM, MSG_LKAS_HUD_ADAS, "TSR");
    hud.lka_on = can.flag(CAM, MSG_LKAS_HUD_ADAS, "LKAS_ENABLED");
    hud.eps_ok = can.flag(CAM, MSG_STEERING_MODULE_ADAS, "EPS_OK");
    !hud.eps_ok
}

// ============================================================================
// ICC：ICC_STATE / YAW_RATE / BRAKE_SWITCH
// ============================================================================

/// 动力总线 ICC 巡航状态
pub(crate) fn decode_icc_cruise(
    can: &RawSignalBundle<'_>,
    ctx: &DecodeContext<'_>,
) -> CruiseState {
    let available = can.flag(PT, MSG_ICC_STATE, "ICC_ON");
    let (speed, speed_cluster) =
        cruise_speeds(available, can.get(PT, MSG_ICC_STATE, "SET_SPEED"));

    CruiseState {
        available,
        enabled: can.flag(PT, MSG_ICC_STATE, "ICC_ACTIVE"),
        speed,
        speed_cluster,
        standstill: can.flag(PT, MSG_ICC_STATE, "STANDSTILL"),
        non_adaptive: false,
        set_distance: lookup_set_distance(
            &ctx.values.set_distance,
            can.int(PT, MSG_ICC_STATE, "SET_DISTANCE"),
        ),
    }
}

/// 横摆角速度（deg/s → rad/s）
pub(crate) fn decode_yaw_rate(can: &RawSignalBundle<'_>) -> f64 {
    can.get(PT, MSG_YAW_RATE, "YAW_RATE") * DEG_TO_RAD
}
