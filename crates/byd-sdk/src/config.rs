//! 车辆配置
//!
//! 启动时从 TOML 读取一次，之后不可变。
//!
//! ```toml
//! variant = "adas_camera"
//! enable_bsm = true
//! longitudinal = false
//! control_period_s = 0.01
//! # 可选：包含 VAL_ 条目的布局元数据
//! # value_metadata = "byd_general_pt.dbc"
//! ```

use byd_carstate::DecoderConfig;
use byd_control::ControllerConfig;
use byd_protocol::{ProtocolError, ValueDefinitions, VehicleVariant};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 读取配置或元数据文件失败
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TOML 语法或字段错误
    #[error("Invalid vehicle config: {0}")]
    Parse(#[from] toml::de::Error),

    /// 值表元数据错误
    #[error("Invalid value metadata: {0}")]
    Protocol(#[from] ProtocolError),

    /// 字段取值不合法
    #[error("Invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// 车辆配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VehicleConfig {
    /// 车型子型号布局
    pub variant: VehicleVariant,
    /// 是否配备盲区监测
    pub enable_bsm: bool,
    /// 是否由本层发送纵向加速度指令
    pub longitudinal: bool,
    /// 控制周期（秒）
    pub control_period_s: f64,
    /// 布局元数据路径（`VAL_` 条目），缺省使用内置值表
    ///
    /// 相对路径相对于配置文件所在目录。
    pub value_metadata: Option<PathBuf>,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            variant: VehicleVariant::default(),
            enable_bsm: false,
            longitudinal: false,
            control_period_s: 0.01,
            value_metadata: None,
        }
    }
}

impl VehicleConfig {
    /// 从 TOML 文本解析
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = read_file(path)?;
        let mut config = Self::from_toml_str(&text)?;

        if let (Some(metadata), Some(dir)) = (config.value_metadata.as_ref(), path.parent())
            && metadata.is_relative()
        {
            config.value_metadata = Some(dir.join(metadata));
        }

        debug!(path = %path.display(), variant = %config.variant, "vehicle config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.control_period_s.is_finite() && self.control_period_s > 0.0) {
            return Err(ConfigError::Invalid {
                field: "control_period_s",
                reason: format!("must be a positive number, got {}", self.control_period_s),
            });
        }
        Ok(())
    }

    /// 构建值表（读取元数据或使用内置值表）
    pub fn value_definitions(&self) -> Result<ValueDefinitions, ConfigError> {
        match &self.value_metadata {
            Some(path) => Ok(ValueDefinitions::from_metadata(
                &read_file(path)?,
                self.variant,
            )?),
            None => Ok(ValueDefinitions::sealion()),
        }
    }

    /// 解码会话配置
    pub fn decoder_config(&self) -> Result<DecoderConfig, ConfigError> {
        Ok(DecoderConfig {
            variant: self.variant,
            enable_bsm: self.enable_bsm,
            control_period_s: self.control_period_s,
            values: self.value_definitions()?,
        })
    }

    /// 控制器配置
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            longitudinal: self.longitudinal,
        }
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = VehicleConfig::from_toml_str("").unwrap();
        assert_eq!(config, VehicleConfig::default());
        assert_eq!(config.control_period_s, 0.01);
    }

    #[test]
    fn test_parse_full_config() {
        let config = VehicleConfig::from_toml_str(
            r#"
            variant = "icc_cruise"
            enable_bsm = true
            longitudinal = true
            control_period_s = 0.02
            "#,
        )
        .unwrap();

        assert_eq!(config.variant, VehicleVariant::IccCruise);
        assert!(config.enable_bsm);
        assert!(config.controller_config().longitudinal);

        let decoder = config.decoder_config().unwrap();
        assert_eq!(decoder.variant, VehicleVariant::IccCruise);
        assert_eq!(decoder.control_period_s, 0.02);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = VehicleConfig::from_toml_str(r#"variant = "tang""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = VehicleConfig::from_toml_str("bsm = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_non_positive_period_rejected() {
        let err = VehicleConfig::from_toml_str("control_period_s = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "control_period_s",
                ..
            }
        ));
        assert!(err.to_string().contains("control_period_s"));
    }
}
