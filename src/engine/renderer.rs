// ==========================================
// 教室课表查询系统 - 课表视图投影
// ==========================================
// 职责: 规整行 -> 展示网格的纯投影，不做任何业务判定
// 视图: 单日视图（逐行），整周视图（13 节 x 7 天）
// ==========================================

use serde::Serialize;

use crate::domain::period::{period_name, MAX_PERIOD};
use crate::domain::query::PeriodWindow;
use crate::domain::schedule::{CanonicalRow, RoomSchedule};
use crate::engine::canonicalizer::ScheduleCanonicalizer;

// ==========================================
// 视图类型
// ==========================================

/// 单日视图的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// 节次标签，如 "第1-2节" / "第3节"
    pub period_label: String,
    pub occupied: bool,
    pub highlighted: bool,
    /// 课程展示文本；空闲行为空
    pub lines: Vec<String>,
}

/// 整周视图的单元格
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeekCell {
    /// 空闲时段
    Free,
    /// 课次的首节：展示标题，后续内容折叠为 "查看详情"
    Class { title: String, has_detail: bool },
    /// 连排课程的后续节次，避免同一门课在视觉上重复
    Continuation,
}

/// 整周视图的一行（一个节次对应周一至周日 7 个单元格）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    pub period: u8,
    /// 中文节次名称，如 "第一节"
    pub label: String,
    pub highlighted: bool,
    pub cells: Vec<WeekCell>,
}

// ==========================================
// TableRenderer - 视图渲染器
// ==========================================
pub struct TableRenderer {
    canonicalizer: ScheduleCanonicalizer,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self {
            canonicalizer: ScheduleCanonicalizer::new(),
        }
    }

    /// 单日视图：每个规整行对应一个展示行
    pub fn day_view(&self, rows: &[CanonicalRow]) -> Vec<DayCell> {
        rows.iter()
            .map(|row| DayCell {
                period_label: row.key.to_string(),
                occupied: row.occupied,
                highlighted: row.highlighted,
                lines: row
                    .session
                    .as_ref()
                    .map(|session| session.display_lines())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// 整周视图：13 节 x 7 天网格
    ///
    /// 连排课程只在首节展示标题，其余节次渲染为延续单元格；
    /// 无数字区间的兜底键无法定位到网格，仅出现在单日视图中。
    /// 某天整体无数据与确认无课在网格上同样呈现为空闲。
    pub fn week_view(&self, room: &RoomSchedule, window: Option<&PeriodWindow>) -> Vec<WeekRow> {
        // 先按天规整，再把规整行铺到网格列上
        let mut columns: Vec<Vec<WeekCell>> = Vec::with_capacity(7);
        for day in 1..=7u8 {
            let mut column = vec![WeekCell::Free; MAX_PERIOD as usize];
            if let Some(day_schedule) = room.day(day) {
                for row in self.canonicalizer.canonicalize(day_schedule) {
                    self.paint_column(&mut column, &row);
                }
            }
            columns.push(column);
        }

        (1..=MAX_PERIOD)
            .map(|period| WeekRow {
                period,
                label: period_name(period),
                highlighted: window
                    .map(|w| w.overlaps(period, period))
                    .unwrap_or(false),
                cells: columns
                    .iter()
                    .map(|column| column[(period - 1) as usize].clone())
                    .collect(),
            })
            .collect()
    }

    /// 把一个规整行铺到某天的列上；已占用的单元格不覆盖
    fn paint_column(&self, column: &mut [WeekCell], row: &CanonicalRow) {
        if !row.occupied {
            return;
        }
        let Some((start, end)) = row.key.span() else {
            // 兜底键无法映射到节次网格
            return;
        };

        let lines = row
            .session
            .as_ref()
            .map(|session| session.display_lines())
            .unwrap_or_default();
        let title = lines.first().cloned().unwrap_or_else(|| "未知课程".to_string());
        let has_detail = lines.len() > 1;

        for period in start..=end {
            let idx = (period - 1) as usize;
            if idx >= column.len() || column[idx] != WeekCell::Free {
                continue;
            }
            column[idx] = if period == start {
                WeekCell::Class {
                    title: title.clone(),
                    has_detail,
                }
            } else {
                WeekCell::Continuation
            };
        }
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::period::PeriodKey;
    use crate::domain::schedule::{DaySchedule, SessionRecord};

    fn record(course: &str) -> SessionRecord {
        SessionRecord {
            course_name: Some(course.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_day_view_projection() {
        let renderer = TableRenderer::new();
        let rows = vec![
            CanonicalRow::occupied(PeriodKey::Range { start: 1, end: 2 }, record("高等数学")),
            CanonicalRow::free(PeriodKey::Single(3)),
        ];

        let cells = renderer.day_view(&rows);

        assert_eq!(cells[0].period_label, "第1-2节");
        assert!(cells[0].occupied);
        assert_eq!(cells[0].lines, vec!["高等数学"]);
        assert_eq!(cells[1].period_label, "第3节");
        assert!(!cells[1].occupied);
        assert!(cells[1].lines.is_empty());
    }

    #[test]
    fn test_week_view_continuation_cells() {
        let renderer = TableRenderer::new();
        let mut room = RoomSchedule::new("JA101");
        let mut monday = DaySchedule::new();
        monday.insert("0103", vec![record("高等数学")]);
        room.days.insert(1, monday);

        let grid = renderer.week_view(&room, None);

        assert_eq!(grid.len(), MAX_PERIOD as usize);
        assert_eq!(grid[0].label, "第一节");
        // 首节展示课程，第 2-3 节为延续单元格
        assert_eq!(
            grid[0].cells[0],
            WeekCell::Class {
                title: "高等数学".to_string(),
                has_detail: false
            }
        );
        assert_eq!(grid[1].cells[0], WeekCell::Continuation);
        assert_eq!(grid[2].cells[0], WeekCell::Continuation);
        assert_eq!(grid[3].cells[0], WeekCell::Free);
        // 其他天全部空闲
        assert!(grid.iter().all(|row| row.cells[1] == WeekCell::Free));
    }

    #[test]
    fn test_week_view_highlight_rows() {
        let renderer = TableRenderer::new();
        let room = RoomSchedule::new("JA101");
        let window = PeriodWindow::span(2, 3).unwrap();

        let grid = renderer.week_view(&room, Some(&window));

        assert!(!grid[0].highlighted);
        assert!(grid[1].highlighted);
        assert!(grid[2].highlighted);
        assert!(!grid[3].highlighted);
    }

    #[test]
    fn test_week_view_detail_hint() {
        let renderer = TableRenderer::new();
        let mut room = RoomSchedule::new("JA101");
        let mut tuesday = DaySchedule::new();
        let mut rec = record("高等数学");
        rec.original_text = Some("高等数学 张三\n(1-16周)\n格物楼B201".to_string());
        tuesday.insert("第5节", vec![rec]);
        room.days.insert(2, tuesday);

        let grid = renderer.week_view(&room, None);

        assert_eq!(
            grid[4].cells[1],
            WeekCell::Class {
                title: "高等数学 张三".to_string(),
                has_detail: true
            }
        );
    }
}
