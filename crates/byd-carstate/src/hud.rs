//! 摄像头 HUD 透传值
//!
//! 解码时从摄像头总线缓存，编码时回显到 `LKAS_HUD_ADAS`。
//! 单写者（解码会话）、多读者（控制器），按值传递。

/// 每周期缓存的摄像头 HUD 字段与 EPS 健康标志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HudPassthrough {
    /// `LKAS_HUD_ADAS.SETTINGS` 原始值
    pub settings: i64,
    /// `LKAS_HUD_ADAS.TSR` 原始值
    pub tsr: i64,
    /// `LKAS_HUD_ADAS.LKAS_ENABLED`
    pub lka_on: bool,
    /// `STEERING_MODULE_ADAS.EPS_OK`；没有该信号的布局视为正常
    pub eps_ok: bool,
}

impl Default for HudPassthrough {
    fn default() -> Self {
        Self {
            settings: 0,
            tsr: 0,
            lka_on: false,
            eps_ok: true,
        }
    }
}
