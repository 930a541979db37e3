//! 枚举型信号的值表
//!
//! 档位与跟车距离等信号以原始整数编码传输，其含义由报文布局元数据中的
//! `VAL_` 条目给出（按报文 ID + 信号名索引）。值表在启动时构建一次，之后只读；查不到的原始码
//! 返回 [`LookupValue::Unknown`]，从不报错。

use crate::ProtocolError;
use crate::ids::{MSG_ACC_HUD_ADAS, MSG_DRIVE_STATE, MSG_ICC_STATE, VehicleVariant};
use can_dbc::DBC;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 档位信号名（`DRIVE_STATE`）
pub const SIGNAL_GEAR: &str = "GEAR";

/// 跟车距离信号名（`ACC_HUD_ADAS` / `ICC_STATE`）
pub const SIGNAL_SET_DISTANCE: &str = "SET_DISTANCE";

/// 值表查询结果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LookupValue {
    /// 已知标签
    Known(Arc<str>),
    /// 未映射的原始码
    Unknown(i64),
    /// 尚未解码
    #[default]
    Unset,
}

impl LookupValue {
    pub fn label(&self) -> Option<&str> {
        match self {
            LookupValue::Known(label) => Some(label.as_ref()),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, LookupValue::Known(_))
    }
}

impl fmt::Display for LookupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupValue::Known(label) => f.write_str(label),
            LookupValue::Unknown(raw) => write!(f, "unknown({raw})"),
            LookupValue::Unset => f.write_str("unset"),
        }
    }
}

/// 单个信号的值表（原始码 → 标签）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueTable {
    entries: BTreeMap<i64, Arc<str>>,
}

impl ValueTable {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (i64, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(raw, label)| (raw, Arc::<str>::from(label)))
                .collect(),
        }
    }

    /// 查询原始码
    pub fn lookup(&self, raw: i64) -> LookupValue {
        match self.entries.get(&raw) {
            Some(label) => LookupValue::Known(Arc::clone(label)),
            None => LookupValue::Unknown(raw),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 从 DBC 中取出 `(message, signal)` 的值表
    ///
    /// 按报文名解析出报文 ID，再按 ID + 信号名查 `VAL_` 条目；
    /// 不同报文上的同名信号互不干扰。
    pub fn from_dbc(dbc: &DBC, message: &str, signal: &str) -> Result<Self, ProtocolError> {
        let missing = || ProtocolError::MissingValueTable {
            message: message.to_string(),
            signal: signal.to_string(),
        };

        let message_id = dbc
            .messages()
            .iter()
            .find(|m| m.message_name() == message)
            .map(|m| m.message_id().clone())
            .ok_or_else(missing)?;

        let descriptions = dbc
            .value_descriptions_for_signal(message_id, signal)
            .filter(|d| !d.is_empty())
            .ok_or_else(missing)?;

        let entries = descriptions
            .iter()
            .map(|d| {
                let raw: f64 = d.a().to_owned();
                (raw as i64, Arc::<str>::from(d.b().as_str()))
            })
            .collect();

        Ok(Self { entries })
    }
}

/// 解码器需要的全部值表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDefinitions {
    pub gear: ValueTable,
    pub set_distance: ValueTable,
}

impl ValueDefinitions {
    /// 内置值表（与车载报文布局一致）
    pub fn sealion() -> Self {
        Self {
            gear: ValueTable::from_pairs([(1, "P"), (2, "R"), (3, "N"), (4, "D")]),
            set_distance: ValueTable::from_pairs([(1, "1"), (2, "2"), (3, "3"), (4, "4")]),
        }
    }

    /// 从布局元数据（DBC 文本）构建
    ///
    /// 档位取自 `DRIVE_STATE.GEAR`；跟车距离取自巡航 HUD 报文，
    /// 摄像头车型为 `ACC_HUD_ADAS`，ICC 车型为 `ICC_STATE`。
    pub fn from_metadata(text: &str, variant: VehicleVariant) -> Result<Self, ProtocolError> {
        let dbc =
            DBC::try_from(text).map_err(|e| ProtocolError::InvalidValueTable(format!("{e:?}")))?;

        let distance_message = if variant.has_camera_cruise() {
            MSG_ACC_HUD_ADAS
        } else {
            MSG_ICC_STATE
        };

        let defs = Self {
            gear: ValueTable::from_dbc(&dbc, MSG_DRIVE_STATE, SIGNAL_GEAR)?,
            set_distance: ValueTable::from_dbc(&dbc, distance_message, SIGNAL_SET_DISTANCE)?,
        };
        debug!(
            gear = defs.gear.len(),
            set_distance = defs.set_distance.len(),
            distance_message,
            "value tables loaded"
        );
        Ok(defs)
    }
}

impl Default for ValueDefinitions {
    fn default() -> Self {
        Self::sealion()
    }
}
