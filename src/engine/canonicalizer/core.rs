use std::collections::HashSet;

use crate::domain::period::PeriodKey;
use crate::domain::query::PeriodWindow;
use crate::domain::schedule::{CanonicalRow, DaySchedule, SessionRecord};
use crate::engine::overlap;

// ==========================================
// ScheduleCanonicalizer - 课表规整引擎
// ==========================================
pub struct ScheduleCanonicalizer {
    // 无状态引擎，每次调用只依赖自身输入
}

impl ScheduleCanonicalizer {
    pub fn new() -> Self {
        Self {}
    }

    /// 规整单日课表
    ///
    /// 处理步骤:
    /// 1) 解析节次键；无法解析的键从展示中丢弃并记日志（非致命）
    /// 2) 区间键全部作为主行；被任一区间覆盖的单节键丢弃
    ///    （区间行已在其覆盖跨度上展示该课次，单节片段只会重复）
    /// 3) 以日内全局身份键去重，区间主行先于晋升的单节行参与；
    ///    记录列表为空的键输出空闲行，记录全部已展示过的行整体折叠
    /// 4) 依起始节升序排序，同起点时区间在前
    ///
    /// 空课表返回空列表，由展示层呈现 "当日无课"，不是错误。
    pub fn canonicalize(&self, day: &DaySchedule) -> Vec<CanonicalRow> {
        // 1. 解析节次键
        let mut parsed: Vec<(PeriodKey, &Vec<SessionRecord>)> = Vec::with_capacity(day.len());
        for (raw, records) in day.slots() {
            match PeriodKey::parse(raw) {
                Ok(key) => parsed.push((key, records)),
                Err(err) => {
                    tracing::warn!(key = %raw, error = %err, "丢弃无法解析的节次键");
                }
            }
        }
        parsed.sort_by(|(a, _), (b, _)| a.cmp(b));

        // 2. 剔除被区间覆盖的单节键
        let spans: Vec<(u8, u8)> = parsed
            .iter()
            .filter_map(|(key, _)| match key {
                PeriodKey::Range { start, end } => Some((*start, *end)),
                _ => None,
            })
            .collect();
        let (primaries, promoted): (Vec<_>, Vec<_>) = parsed
            .into_iter()
            .filter(|(key, _)| match key {
                PeriodKey::Single(n) => !spans.iter().any(|(start, end)| start <= n && n <= end),
                _ => true,
            })
            .partition(|(key, _)| matches!(key, PeriodKey::Range { .. }));

        // 3. 日内全局身份去重：区间主行先行，其后是晋升的单节与兜底键
        let mut seen: HashSet<&str> = HashSet::new();
        let mut rows: Vec<CanonicalRow> = Vec::with_capacity(primaries.len() + promoted.len());
        for (key, records) in primaries.into_iter().chain(promoted) {
            if records.is_empty() {
                rows.push(CanonicalRow::free(key));
                continue;
            }
            let fresh: Vec<&SessionRecord> = records
                .iter()
                .filter(|record| seen.insert(record.identity_key()))
                .collect();
            // 名义上共用时段的多条记录只展示第一条未出现过的
            if let Some(first) = fresh.first() {
                rows.push(CanonicalRow::occupied(key, (*first).clone()));
            }
        }

        // 4. 最终排序
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        rows
    }

    /// 规整并按节次窗口标注高亮；窗口缺省时不标注任何行
    pub fn canonicalize_with_window(
        &self,
        day: &DaySchedule,
        window: Option<&PeriodWindow>,
    ) -> Vec<CanonicalRow> {
        let mut rows = self.canonicalize(day);
        if let Some(window) = window {
            overlap::mark_highlights(&mut rows, window);
        }
        rows
    }
}

impl Default for ScheduleCanonicalizer {
    fn default() -> Self {
        Self::new()
    }
}
