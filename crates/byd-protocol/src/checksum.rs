//! BYD 半字节校验和
//!
//! 校验字节位于负载最后一个字节。算法把其余每个字节拆成高、低半字节
//! 分别累加，混入固定密钥 `0xAF` 后取反，并用低半字节和的进位修正高位。
//! 逆向工程所得，必须逐位复现。

use crate::constants::CHECKSUM_KEY;

/// 计算 BYD 校验和
///
/// `payload` 的最后一个字节是校验字节槽位，不参与计算。
/// 对任意长度的输入都有定义（空切片按空负载处理）。
///
/// # 示例
///
/// ```rust
/// use byd_protocol::byd_checksum;
///
/// assert_eq!(byd_checksum(&[0u8; 8]), 0xFF);
/// ```
pub fn byd_checksum(payload: &[u8]) -> u8 {
    let body = match payload.split_last() {
        Some((_, body)) => body,
        None => &[],
    };

    let (mut sum_high, mut sum_low) = body.iter().fold((0i64, 0i64), |(high, low), &b| {
        (high + i64::from(b >> 4), low + i64::from(b & 0x0F))
    });

    let remainder = (sum_low >> 4) & 0xFF;
    sum_high += i64::from(CHECKSUM_KEY & 0x0F);
    sum_low += i64::from(CHECKSUM_KEY >> 4);

    let inv_high = (9 - sum_high) & 0x0F;
    let inv_low = (9 - sum_low) & 0x0F;

    // 截断到低 8 位（负数按补码截断）
    ((((inv_high + (5 - remainder)) << 4) + inv_low) & 0xFF) as u8
}

/// 计算校验和并写入最后一个字节
///
/// 帧构建器在完成位打包后调用。空切片保持不变。
pub fn apply_checksum(payload: &mut [u8]) {
    let checksum = byd_checksum(payload);
    if let Some(slot) = payload.last_mut() {
        *slot = checksum;
    }
}

/// 校验最后一个字节是否与计算结果一致
pub fn verify_checksum(payload: &[u8]) -> bool {
    match payload.last() {
        Some(&stored) => stored == byd_checksum(payload),
        None => false,
    }
}
