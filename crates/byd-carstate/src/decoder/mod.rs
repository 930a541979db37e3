//! 车型变体解码器
//!
//! 三种子型号共用一个 [`VariantDecoder`] 接口，由 [`decoder_for`] 按
//! [`VehicleVariant`] 选择实现。各布局共有的信号段在 `layout` 中只实现一次，
//! 变体只负责组合信号段并给出自身缺失信号的保守默认值。
//!
//! | 变体 | 巡航/LKAS | 轮速/车门/安全带 | 踏板 | EPS 健康 | 横摆 |
//! |---|---|---|---|---|---|
//! | `AdasCamera` | 摄像头 ADAS | 原始布局 + 仪表车门 | `PEDAL` | 有 | 无 |
//! | `IccCruise` | 动力总线 ICC | 备用布局 | 仅制动开关 | 无 | 有 |
//! | `HybridAdas` | 摄像头 ADAS | 备用布局 | `PEDAL` | 有 | 无 |

mod adas;
mod hybrid;
mod icc;
pub(crate) mod layout;

pub use adas::AdasCameraDecoder;
pub use hybrid::HybridAdasDecoder;
pub use icc::IccCruiseDecoder;

use crate::hud::HudPassthrough;
use crate::state::VehicleState;
use byd_protocol::{MessageCheck, RawSignalBundle, ValueDefinitions, VehicleVariant};

/// 解码时只读的上下文（启动时确定）
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    /// 档位、跟车距离值表
    pub values: &'a ValueDefinitions,
    /// 车辆是否配备盲区监测
    pub enable_bsm: bool,
}

/// 车型变体解码器
///
/// 实现必须是全函数：任何信号快照都产出完整的状态，缺失信号使用
/// 明确记录的默认值，从不失败。
pub trait VariantDecoder: Send + Sync {
    /// 对应的车型变体
    fn variant(&self) -> VehicleVariant;

    /// 从快照填充车辆状态与 HUD 透传值
    ///
    /// `out` 进入时为默认值；车速滤波、仪表车速、静止判定与转角变化率由
    /// 调用方在之后统一计算。
    fn decode(
        &self,
        can: &RawSignalBundle<'_>,
        ctx: &DecodeContext<'_>,
        out: &mut VehicleState,
        hud: &mut HudPassthrough,
    );

    /// 动力总线解析器配置
    fn pt_messages(&self) -> &'static [MessageCheck] {
        self.variant().pt_messages()
    }

    /// 摄像头总线解析器配置
    fn cam_messages(&self) -> &'static [MessageCheck] {
        self.variant().cam_messages()
    }
}

/// 按车型变体创建解码器
pub fn decoder_for(variant: VehicleVariant) -> Box<dyn VariantDecoder> {
    match variant {
        VehicleVariant::AdasCamera => Box::new(AdasCameraDecoder),
        VehicleVariant::IccCruise => Box::new(IccCruiseDecoder),
        VehicleVariant::HybridAdas => Box::new(HybridAdasDecoder),
    }
}
