//! 控制帧构建
//!
//! 四个纯函数构建器，分别产出 `STEERING_MODULE_ADAS`、`ACC_CMD`、
//! `LKAS_HUD_ADAS` 和 `PCM_BUTTONS` 的信号值集合。
//!
//! 所有输入都视为已校验：超范围的加速度被钳位，计数器被截断到 4 bit，
//! 从不拒绝。缺一帧比发一帧钳位过的命令更糟。
//!
//! `CHECKSUM` 始终写 0，由外部帧构建器在序列化后用
//! [`byd_checksum`](crate::checksum::byd_checksum) 填写。

use crate::constants::*;
use crate::ids::{
    Bus, MSG_ACC_CMD, MSG_LKAS_HUD_ADAS, MSG_PCM_BUTTONS, MSG_STEERING_MODULE_ADAS,
};
use crate::signals::OutboundCommandFrame;
use tracing::trace;

/// 截断到 4 bit 的滚动计数器
#[inline]
pub fn mask_counter(counter: u32) -> i64 {
    i64::from(counter & u32::from(COUNTER_MASK))
}

// ============================================================================
// 转向指令 (STEERING_MODULE_ADAS)
// ============================================================================

/// 构建转向角指令
///
/// - `SET_ME_XE` 仅在请求转向时非零，静止与行驶取不同值（保留早期标定行为）
/// - `EPS_OK` 跟随 `steer_req`：只有在输出扭矩时才置位
pub fn create_steer_command(
    steer_angle_deg: f64,
    steer_req: bool,
    is_standstill: bool,
    counter: u32,
) -> OutboundCommandFrame {
    let fill = if is_standstill {
        STEER_FILL_STANDSTILL
    } else {
        STEER_FILL_MOVING
    };

    let mut frame = OutboundCommandFrame::new(MSG_STEERING_MODULE_ADAS, Bus::Powertrain);
    frame
        .set("STEER_REQ", steer_req)
        .set("STEER_ANGLE", steer_angle_deg)
        .set("SET_ME_XE", if steer_req { fill } else { 0 })
        .set("SET_ME_FF", STEER_SET_ME_FF)
        .set("SET_ME_F", STEER_SET_ME_F)
        .set("SET_ME_1_1", STEER_SET_ME_1)
        .set("SET_ME_1_2", STEER_SET_ME_1)
        .set("SET_ME_X01", STEER_SET_ME_X01)
        .set("EPS_OK", steer_req)
        .set("UNKNOWN", 0i64)
        .set("COUNTER", mask_counter(counter))
        .set("CHECKSUM", 0i64);
    frame
}

// ============================================================================
// 加速度指令 (ACC_CMD)
// ============================================================================

/// `ACCEL_FACTOR` 档位（按钳位后的原始加速度选择）
fn accel_factor(accel_raw: f64) -> i64 {
    if accel_raw >= ACCEL_FACTOR_ACCEL_THRESHOLD {
        ACCEL_FACTOR_ACCEL
    } else if accel_raw < 0.0 {
        ACCEL_FACTOR_BRAKE
    } else {
        ACCEL_FACTOR_CRUISE
    }
}

/// 将 m/s² 转为钳位后的原始加速度指令
pub fn scale_accel(accel: f64) -> f64 {
    let scaled = accel * ACCEL_CMD_SCALE;
    let clamped = scaled.clamp(ACCEL_CMD_MIN, ACCEL_CMD_MAX);
    if clamped != scaled {
        trace!(accel, scaled, clamped, "accel command clamped");
    }
    clamped
}

/// 构建纵向加速度指令
///
/// 制动保持总是覆盖使能请求：`enabled' = enabled && !brake_hold`，
/// 且加速度强制为 0。`CMD_REQ_ACTIVE_LOW` 低有效。
pub fn create_accel_command(
    accel: f64,
    enabled: bool,
    brake_hold: bool,
    counter: u32,
) -> OutboundCommandFrame {
    let mut accel_raw = scale_accel(accel);
    let factor = accel_factor(accel_raw);
    let enabled = enabled && !brake_hold;

    if brake_hold {
        accel_raw = 0.0;
    }

    let mut frame = OutboundCommandFrame::new(MSG_ACC_CMD, Bus::Powertrain);
    frame
        .set("ACCEL_CMD", accel_raw)
        .set("SET_ME_25_1", ACC_SET_ME_25)
        .set("SET_ME_25_2", ACC_SET_ME_25)
        .set("ACC_ON_1", enabled)
        .set("ACC_ON_2", enabled)
        .set("ACCEL_FACTOR", if enabled { factor } else { 0 })
        .set(
            "DECEL_FACTOR",
            if enabled { DECEL_FACTOR_ENGAGED } else { 0 },
        )
        .set("SET_ME_X8", ACC_SET_ME_X8)
        .set("SET_ME_1", ACC_SET_ME_1)
        .set("SET_ME_XF", ACC_SET_ME_XF)
        .set("CMD_REQ_ACTIVE_LOW", !enabled)
        .set("ACC_REQ_NOT_STANDSTILL", enabled)
        .set("ACC_CONTROLLABLE_AND_ON", enabled)
        .set("ACC_OVERRIDE_OR_STANDSTILL", brake_hold)
        .set("STANDSTILL_STATE", brake_hold)
        .set("STANDSTILL_RESUME", 0i64)
        .set("COUNTER", mask_counter(counter))
        .set("CHECKSUM", 0i64);
    frame
}

// ============================================================================
// LKAS HUD 指令 (LKAS_HUD_ADAS)
// ============================================================================

/// 构建 LKAS HUD 状态帧
///
/// 只填写与安全相关的位，其余视觉字段取关闭/0。
/// `tsr` 与 `settings` 为摄像头原始值的回显。
pub fn create_lkas_hud(
    tsr: i64,
    settings: i64,
    enabled: bool,
    lka_on: bool,
    counter: u32,
) -> OutboundCommandFrame {
    let steer_active_low = !(enabled && lka_on);

    let mut frame = OutboundCommandFrame::new(MSG_LKAS_HUD_ADAS, Bus::Powertrain);
    frame
        .set("SETTINGS", settings)
        .set("TSR", tsr)
        .set("HAND_ON_WHEEL_WARNING", 0i64)
        .set("LKAS_ENABLED", lka_on)
        .set("STEER_ACTIVE_ACTIVE_LOW", steer_active_low)
        .set("LEFT_LANE_VISIBLE", enabled)
        .set("RIGHT_LANE_VISIBLE", enabled)
        .set("LSS_STATE", 0i64)
        .set("HMA", 0i64)
        .set("PT2", 0i64)
        .set("PT3", 0i64)
        .set("PT4", 0i64)
        .set("PT5", 0i64)
        .set("TSR_STATUS", 0i64)
        .set("SET_ME_XFF", HUD_SET_ME_XFF)
        .set("SET_ME_1_2", HUD_SET_ME_1)
        .set("COUNTER", mask_counter(counter))
        .set("CHECKSUM", 0i64);
    frame
}

// ============================================================================
// 巡航按键 (PCM_BUTTONS)
// ============================================================================

/// 构建巡航按键帧（SET 与 RES 同步按下/释放）
pub fn create_button_press(pressed: bool) -> OutboundCommandFrame {
    let mut frame = OutboundCommandFrame::new(MSG_PCM_BUTTONS, Bus::Powertrain);
    frame
        .set("SET_BTN", pressed)
        .set("RES_BTN", pressed)
        .set("SET_ME_1_1", BUTTON_SET_ME_1)
        .set("SET_ME_1_2", BUTTON_SET_ME_1);
    frame
}
