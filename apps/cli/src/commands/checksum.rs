//! checksum 命令

use anyhow::{Context, Result, bail};
use byd_sdk::protocol::{byd_checksum, verify_checksum};
use clap::Args;
use std::io::Write;

/// 校验和命令参数
#[derive(Args, Debug)]
pub struct ChecksumCommand {
    /// 十六进制负载，最后一个字节为校验槽位（如 `12 34 56 78 9A BC DE 00`）
    #[arg(required = true, num_args = 1..)]
    pub payload: Vec<String>,

    /// 校验最后一个字节而不是计算
    #[arg(long)]
    pub verify: bool,
}

impl ChecksumCommand {
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        let bytes = parse_payload(&self.payload.join(""))?;

        if self.verify {
            let expected = byd_checksum(&bytes);
            if !verify_checksum(&bytes) {
                bail!(
                    "校验和不匹配: 期望 0x{:02X}, 实际 0x{:02X}",
                    expected,
                    bytes[bytes.len() - 1]
                );
            }
            writeln!(out, "ok")?;
        } else {
            writeln!(out, "0x{:02X}", byd_checksum(&bytes))?;
        }
        Ok(())
    }
}

/// 解析十六进制负载，允许 `0x` 前缀与空白/冒号分隔
fn parse_payload(text: &str) -> Result<Vec<u8>> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let cleaned = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);

    let bytes = hex::decode(cleaned).with_context(|| format!("无效的十六进制负载: {text}"))?;
    if bytes.is_empty() {
        bail!("负载不能为空");
    }
    Ok(bytes)
}
