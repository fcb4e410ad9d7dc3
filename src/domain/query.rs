// ==========================================
// 教室课表查询系统 - 查询参数
// ==========================================
// 职责: 一次查询的全部参数与节次窗口
// 说明: 以不可变参数结构替代页面隐式状态，核心逻辑不耦合任何 UI
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use thiserror::Error;

use crate::domain::period::{MAX_PERIOD, MIN_PERIOD};

/// 学期周次上限
pub const MAX_WEEK: u8 = 20;

// ==========================================
// 错误类型
// ==========================================

/// 查询参数校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("周次超出范围: {0}（有效范围 1-{MAX_WEEK}）")]
    InvalidWeek(u8),

    #[error("星期超出范围: {0}（有效范围 1-7）")]
    InvalidDay(u8),

    #[error("节次窗口无效: 第{from}节 至 第{to}节（开始节次不能大于结束节次，范围 {MIN_PERIOD}-{MAX_PERIOD}）")]
    InvalidWindow { from: u8, to: u8 },

    #[error("教室/教学楼前缀不能为空")]
    EmptyRoomPrefix,
}

// ==========================================
// PeriodWindow - 节次窗口
// ==========================================

/// 用户选择的节次窗口
///
/// 两种输入方式并存：连续区间（起止节次下拉框）与离散节次集合
/// （逐节勾选）。离散集合按成员归属判定，而不是化成区间。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeriodWindow {
    /// 连续闭区间 [from, to]
    Span { from: u8, to: u8 },
    /// 离散节次集合
    Periods(BTreeSet<u8>),
}

impl PeriodWindow {
    /// 构造连续窗口，校验 from <= to 且两端都在 1-13 内
    pub fn span(from: u8, to: u8) -> Result<Self, QueryError> {
        let in_range = |n: u8| (MIN_PERIOD..=MAX_PERIOD).contains(&n);
        if from > to || !in_range(from) || !in_range(to) {
            return Err(QueryError::InvalidWindow { from, to });
        }
        Ok(PeriodWindow::Span { from, to })
    }

    /// 构造离散窗口，越界节次直接剔除
    pub fn periods(periods: impl IntoIterator<Item = u8>) -> Self {
        PeriodWindow::Periods(
            periods
                .into_iter()
                .filter(|n| (MIN_PERIOD..=MAX_PERIOD).contains(n))
                .collect(),
        )
    }

    /// 窗口与闭区间 [start, end] 是否相交
    ///
    /// 连续窗口用标准区间相交判定（端点相触计为相交）；
    /// 离散窗口判定集合中是否存在落在区间内的节次。
    pub fn overlaps(&self, start: u8, end: u8) -> bool {
        match self {
            PeriodWindow::Span { from, to } => !(end < *from || start > *to),
            PeriodWindow::Periods(set) => set.range(start..=end).next().is_some(),
        }
    }

    /// 窗口不含任何节次（离散集合为空时成立）
    pub fn is_empty(&self) -> bool {
        match self {
            PeriodWindow::Span { .. } => false,
            PeriodWindow::Periods(set) => set.is_empty(),
        }
    }
}

// ==========================================
// ClasstableQuery - 课表查询参数
// ==========================================

/// 一次课表/空闲教室查询的全部参数（不可变快照）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClasstableQuery {
    /// 学年学期，如 "2024-2025-2"
    pub term: String,

    /// 教室名称前缀，如 "格物楼B" 匹配该楼所有教室
    pub room_prefix: String,

    /// 周次 1-20
    pub week: u8,

    /// 星期 1-7；`None` 表示查询整周
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,

    /// 节次窗口；`None` 表示不限节次（不做高亮）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<PeriodWindow>,
}

impl ClasstableQuery {
    /// 参数校验；提交查询前调用
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.room_prefix.trim().is_empty() {
            return Err(QueryError::EmptyRoomPrefix);
        }
        if !(1..=MAX_WEEK).contains(&self.week) {
            return Err(QueryError::InvalidWeek(self.week));
        }
        if let Some(day) = self.day {
            if !(1..=7).contains(&day) {
                return Err(QueryError::InvalidDay(day));
            }
        }
        if let Some(PeriodWindow::Span { from, to }) = &self.window {
            // Span 构造即校验，这里兜底反序列化直接构造的值
            let in_range = |n: u8| (MIN_PERIOD..=MAX_PERIOD).contains(&n);
            if from > to || !in_range(*from) || !in_range(*to) {
                return Err(QueryError::InvalidWindow {
                    from: *from,
                    to: *to,
                });
            }
        }
        Ok(())
    }
}

// ==========================================
// QuerySequencer - 请求序号器
// ==========================================
// 乱序到达的响应只接受序号仍为最新者，旧响应直接丢弃，
// 避免慢请求覆盖新结果。
// ==========================================

/// 单调递增的请求序号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// 请求序号发放器
#[derive(Debug, Default)]
pub struct QuerySequencer {
    issued: AtomicU64,
}

impl QuerySequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 发起新查询时取号；旧号自动失效
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.issued.fetch_add(1, AtomicOrdering::SeqCst) + 1)
    }

    /// 响应到达时判定其序号是否仍为最新
    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.issued.load(AtomicOrdering::SeqCst)
    }
}
