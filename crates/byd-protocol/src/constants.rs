//! 协议常量定义
//!
//! 集中定义单位换算与逆向工程得到的常量，避免在解码/编码代码中散落"魔法数"。
//!
//! `SET_ME_*` 系列是车辆要求的固定字面值，含义未知，按观测值原样保留。

// ============================================================================
// 单位换算
// ============================================================================

/// km/h → m/s
pub const KPH_TO_MS: f64 = 1.0 / 3.6;

/// m/s → km/h
pub const MS_TO_KPH: f64 = 3.6;

/// 度 → 弧度
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// 仪表显示车速与 GPS/轮速真值之间的倍率
pub const HUD_MULTIPLIER: f64 = 1.068;

// ============================================================================
// 解码阈值
// ============================================================================

/// 低于该车速（m/s）视为静止
pub const STANDSTILL_SPEED_THRESHOLD: f64 = 0.01;

/// EPS 驾驶员扭矩超过该值视为手动转向
pub const STEER_PRESSED_TORQUE_THRESHOLD: f64 = 6.0;

/// 油门踏板位置阈值（>=）
pub const GAS_PRESSED_THRESHOLD: f64 = 0.01;

/// 制动踏板位置阈值（>）
pub const BRAKE_PRESSED_THRESHOLD: f64 = 0.01;

/// 仪表可显示的最低巡航设定车速（km/h）
pub const MIN_CRUISE_SET_SPEED_KPH: f64 = 30.0;

// ============================================================================
// 校验和与计数器
// ============================================================================

/// 校验和密钥
pub const CHECKSUM_KEY: u8 = 0xAF;

/// 滚动计数器掩码（4 bit）
pub const COUNTER_MASK: u8 = 0x0F;

// ============================================================================
// STEERING_MODULE_ADAS 固定字段
// ============================================================================

/// 转向请求激活且静止时的填充值
pub const STEER_FILL_STANDSTILL: i64 = 0xE;

/// 转向请求激活且行驶中的填充值
pub const STEER_FILL_MOVING: i64 = 0xB;

pub const STEER_SET_ME_FF: i64 = 0xFF;
pub const STEER_SET_ME_F: i64 = 0xF;
pub const STEER_SET_ME_1: i64 = 1;
pub const STEER_SET_ME_X01: i64 = 0x01;

// ============================================================================
// ACC_CMD 固定字段与系数
// ============================================================================

/// 加速度指令缩放系数（m/s² → 原始单位）
pub const ACCEL_CMD_SCALE: f64 = 13.0;

/// 加速度指令下限（原始单位）
pub const ACCEL_CMD_MIN: f64 = -50.0;

/// 加速度指令上限（原始单位）
pub const ACCEL_CMD_MAX: f64 = 30.0;

/// `ACCEL_FACTOR` 切换到加速档位的门限（原始单位）
pub const ACCEL_FACTOR_ACCEL_THRESHOLD: f64 = 2.0;

/// `ACCEL_FACTOR`：加速
pub const ACCEL_FACTOR_ACCEL: i64 = 12;

/// `ACCEL_FACTOR`：制动
pub const ACCEL_FACTOR_BRAKE: i64 = 5;

/// `ACCEL_FACTOR`：巡航
pub const ACCEL_FACTOR_CRUISE: i64 = 11;

/// `DECEL_FACTOR`：激活时的固定值
pub const DECEL_FACTOR_ENGAGED: i64 = 8;

pub const ACC_SET_ME_25: i64 = 25;
pub const ACC_SET_ME_X8: i64 = 8;
pub const ACC_SET_ME_1: i64 = 1;
pub const ACC_SET_ME_XF: i64 = 0xF;

// ============================================================================
// LKAS_HUD_ADAS / PCM_BUTTONS 固定字段
// ============================================================================

pub const HUD_SET_ME_XFF: i64 = 0xFF;
pub const HUD_SET_ME_1: i64 = 1;
pub const BUTTON_SET_ME_1: i64 = 1;
