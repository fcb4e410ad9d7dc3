// ==========================================
// 教室课表查询系统 - 节次窗口重叠判定
// ==========================================
// 职责: 判定规整行与用户节次窗口是否相交，用于展示高亮
// 规则: 闭区间相交判定，端点相触计为相交；单节视为 [n, n]
// ==========================================

use crate::domain::period::PeriodKey;
use crate::domain::query::PeriodWindow;
use crate::domain::schedule::CanonicalRow;

/// 节次键与窗口是否相交
///
/// 兜底键（无数字区间）一律不相交。
pub fn key_overlaps(key: &PeriodKey, window: &PeriodWindow) -> bool {
    match key.span() {
        Some((start, end)) => window.overlaps(start, end),
        None => false,
    }
}

/// 为规整行标注高亮
///
/// 调用方仅在窗口存在时调用；无窗口即无高亮。
pub fn mark_highlights(rows: &mut [CanonicalRow], window: &PeriodWindow) {
    for row in rows.iter_mut() {
        row.highlighted = key_overlaps(&row.key, window);
    }
}
