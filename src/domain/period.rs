// ==========================================
// 教室课表查询系统 - 节次键定义
// ==========================================
// 职责: 节次键的归一化解析与排序
// 输入: 上游课表的节次键字符串（"第N节" 或四位数字 "SSEE"）
// 输出: 封闭和类型 PeriodKey
// ==========================================

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// 节次编号下限
pub const MIN_PERIOD: u8 = 1;

/// 节次编号上限（一天最多 13 节）
pub const MAX_PERIOD: u8 = 13;

/// 中文节次名称，下标 0 对应第 1 节
pub const PERIOD_NAMES: [&str; 13] = [
    "第一节",
    "第二节",
    "第三节",
    "第四节",
    "第五节",
    "第六节",
    "第七节",
    "第八节",
    "第九节",
    "第十节",
    "第十一节",
    "第十二节",
    "第十三节",
];

/// 返回第 n 节的中文名称，超出范围时回退到 "第N节" 数字形式
pub fn period_name(n: u8) -> String {
    PERIOD_NAMES
        .get(n.saturating_sub(1) as usize)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("第{}节", n))
}

// ==========================================
// 错误类型
// ==========================================

/// 节次键格式错误
///
/// 仅四位数字键与 "第N节" 键会产生该错误；其余格式一律归入
/// [`PeriodKey::Other`] 兜底，不报错。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedKey {
    #[error("节次区间颠倒: {start:02}{end:02}（起始节大于结束节）")]
    InvertedRange { start: u8, end: u8 },

    #[error("节次超出范围: {0}（有效范围 {MIN_PERIOD}-{MAX_PERIOD}）")]
    OutOfRange(u32),
}

// ==========================================
// PeriodKey - 节次键
// ==========================================

/// 节次键：同一课次在上游可能以单节或连排区间两种形式出现
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKey {
    /// 单节课，来自 "第N节"
    Single(u8),
    /// 连排区间，来自四位数字 "SSEE"（如 "0102" 表示第 1-2 节）
    Range { start: u8, end: u8 },
    /// 无法识别的上游格式，按字面保留、排在所有数字键之后
    Other(String),
}

impl PeriodKey {
    /// 解析上游节次键
    ///
    /// - 恰为四位数字 => `Range`，区间颠倒或越界时返回 [`MalformedKey`]
    /// - "第<数字>节" => `Single`，越界时返回 [`MalformedKey`]
    /// - 其余格式 => `Other`，不报错，保证展示层可以降级而非崩溃
    pub fn parse(raw: &str) -> Result<Self, MalformedKey> {
        if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
            // "SSEE" 零补齐格式
            let b = raw.as_bytes();
            let start = (b[0] - b'0') * 10 + (b[1] - b'0');
            let end = (b[2] - b'0') * 10 + (b[3] - b'0');
            if !(MIN_PERIOD..=MAX_PERIOD).contains(&start) {
                return Err(MalformedKey::OutOfRange(start as u32));
            }
            if !(MIN_PERIOD..=MAX_PERIOD).contains(&end) {
                return Err(MalformedKey::OutOfRange(end as u32));
            }
            if start > end {
                return Err(MalformedKey::InvertedRange { start, end });
            }
            return Ok(PeriodKey::Range { start, end });
        }

        if let Some(digits) = raw
            .strip_prefix('第')
            .and_then(|rest| rest.strip_suffix('节'))
        {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                // 超长数字串按溢出值处理，同样落入越界分支
                let n: u32 = digits.parse().unwrap_or(u32::MAX);
                if !(MIN_PERIOD as u32..=MAX_PERIOD as u32).contains(&n) {
                    return Err(MalformedKey::OutOfRange(n));
                }
                return Ok(PeriodKey::Single(n as u8));
            }
        }

        Ok(PeriodKey::Other(raw.to_string()))
    }

    /// 数字键的闭区间 `[start, end]`；`Other` 键无区间
    pub fn span(&self) -> Option<(u8, u8)> {
        match self {
            PeriodKey::Single(n) => Some((*n, *n)),
            PeriodKey::Range { start, end } => Some((*start, *end)),
            PeriodKey::Other(_) => None,
        }
    }

    /// 该键是否覆盖第 n 节
    pub fn covers(&self, n: u8) -> bool {
        self.span()
            .map(|(start, end)| start <= n && n <= end)
            .unwrap_or(false)
    }

    /// 回写为上游键格式：`Range` => "SSEE"，`Single` => "第N节"，`Other` 原样
    ///
    /// 与 [`PeriodKey::parse`] 互逆，规整结果可作为课表键再次接入。
    pub fn wire_key(&self) -> String {
        match self {
            PeriodKey::Single(n) => format!("第{}节", n),
            PeriodKey::Range { start, end } => format!("{:02}{:02}", start, end),
            PeriodKey::Other(raw) => raw.clone(),
        }
    }

    /// 排序次级键：同起始节时区间先于单节
    fn variant_rank(&self) -> u8 {
        match self {
            PeriodKey::Range { .. } => 0,
            PeriodKey::Single(_) => 1,
            PeriodKey::Other(_) => 2,
        }
    }
}

// ==========================================
// 排序契约
// ==========================================
// 依起始节升序；起始节相同时区间先于单节；
// Other 键排在所有数字键之后，彼此按字典序。
// ==========================================

impl Ord for PeriodKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.span(), other.span()) {
            (Some((a_start, a_end)), Some((b_start, b_end))) => a_start
                .cmp(&b_start)
                .then_with(|| self.variant_rank().cmp(&other.variant_rank()))
                .then_with(|| a_end.cmp(&b_end)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => match (self, other) {
                (PeriodKey::Other(a), PeriodKey::Other(b)) => a.cmp(b),
                _ => Ordering::Equal,
            },
        }
    }
}

impl PartialOrd for PeriodKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKey::Single(n) => write!(f, "第{}节", n),
            PeriodKey::Range { start, end } => write!(f, "第{}-{}节", start, end),
            PeriodKey::Other(raw) => write!(f, "{}", raw),
        }
    }
}

// ==========================================
// 测试
// ==========================================
