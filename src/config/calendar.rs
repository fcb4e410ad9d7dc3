// ==========================================
// 教室课表查询系统 - 校历配置
// ==========================================
// 职责: 学期标识解析、当前学期推断、教学周与星期计算
// 存储: 各学期开学日期由配置 JSON 提供
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::domain::query::MAX_WEEK;

// ==========================================
// 错误类型
// ==========================================

/// 校历配置/计算错误
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("学期格式错误: {0}（期望 \"YYYY-YYYY-N\"，如 \"2024-2025-2\"）")]
    BadTermFormat(String),

    #[error("未配置学期 {0} 的开学日期")]
    UnknownTerm(String),

    #[error("校历配置 JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),
}

// ==========================================
// Term - 学期标识
// ==========================================

/// 学年学期，如 "2024-2025-2" 表示 2024-2025 学年第二学期
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    /// 学年起始年份
    pub start_year: i32,
    /// 学期序号，1 或 2
    pub term: u8,
}

impl Term {
    pub fn new(start_year: i32, term: u8) -> Self {
        Self { start_year, term }
    }

    /// 解析 "YYYY-YYYY-N" 格式，校验学年跨度与学期序号
    pub fn parse(raw: &str) -> Result<Self, CalendarError> {
        let bad = || CalendarError::BadTermFormat(raw.to_string());

        let mut parts = raw.split('-');
        let start_year: i32 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
        let end_year: i32 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
        let term: u8 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
        if parts.next().is_some() || end_year != start_year + 1 || !(1..=2).contains(&term) {
            return Err(bad());
        }
        Ok(Self { start_year, term })
    }

    /// 按日期推断当前学期
    ///
    /// 9-12 月为当年第一学期；1 月仍属上一学年第一学期；
    /// 2-8 月为上一学年第二学期。
    pub fn current(today: NaiveDate) -> Self {
        let year = today.year();
        match today.month() {
            9..=12 => Self::new(year, 1),
            1 => Self::new(year - 1, 1),
            _ => Self::new(year - 1, 2),
        }
    }

    /// 上一学期
    pub fn prev(self) -> Self {
        if self.term == 2 {
            Self::new(self.start_year, 1)
        } else {
            Self::new(self.start_year - 1, 2)
        }
    }

    /// 下一学期
    pub fn next(self) -> Self {
        if self.term == 1 {
            Self::new(self.start_year, 2)
        } else {
            Self::new(self.start_year + 1, 1)
        }
    }

    /// 以当前学期为中心的候选列表（前后各两个学期，时间升序），
    /// 用于学期下拉框
    pub fn surrounding(self) -> Vec<Term> {
        vec![
            self.prev().prev(),
            self.prev(),
            self,
            self.next(),
            self.next().next(),
        ]
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.start_year, self.start_year + 1, self.term)
    }
}

// ==========================================
// SemesterCalendar - 开学日期配置
// ==========================================

/// 当前教学周与星期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekDay {
    /// 教学周 1-20
    pub week: u8,
    /// 星期 1-7，周一为 1
    pub day: u8,
}

/// 各学期开学日期（开学日为该学期第 1 周的周一）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemesterCalendar {
    pub start_dates: BTreeMap<String, NaiveDate>,
}

impl SemesterCalendar {
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 计算某日期在指定学期内的教学周与星期
    ///
    /// 开学前的日期按第 1 周处理；超过 20 周钳制到第 20 周。
    pub fn week_and_day(&self, term: &str, today: NaiveDate) -> Result<WeekDay, CalendarError> {
        let start = self
            .start_dates
            .get(term)
            .ok_or_else(|| CalendarError::UnknownTerm(term.to_string()))?;

        let days_diff = (today - *start).num_days();
        let week = if days_diff < 0 {
            1
        } else {
            (days_diff / 7 + 1).clamp(1, MAX_WEEK as i64) as u8
        };
        let day = today.weekday().number_from_monday() as u8;

        Ok(WeekDay { week, day })
    }
}
