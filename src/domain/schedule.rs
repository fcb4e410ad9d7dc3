// ==========================================
// 教室课表查询系统 - 课表领域实体
// ==========================================
// 职责: 查询响应作用域内的课表快照结构
// 生命周期: 每次查询构造一份，渲染完成即弃，不跨查询持久化
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::period::PeriodKey;

// ==========================================
// SessionRecord - 课程记录
// ==========================================

/// 一条课程记录
///
/// 上游 JSON 为宽松结构，所有字段都可能缺失；在接入边界校验，
/// 而不是在各处假设字段存在。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// 课表单元格的原始文本，保留时优先用于展示与去重
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,

    /// 上课教室（来自单元格里含 "楼" 的一行）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    /// 上课班级
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class_info: Option<String>,

    /// 周次描述，如 "1-16周"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks: Option<String>,

    /// 解析后的逐行文本（无原始文本时的展示来源）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_lines: Vec<String>,
}

impl SessionRecord {
    /// 去重身份键：优先取原始文本，其次课程名
    ///
    /// 同一真实课次在多个节次键下重复出现时，依此键只保留一次。
    /// 两者皆缺失时返回空串，匿名记录会彼此合并。
    pub fn identity_key(&self) -> &str {
        if let Some(text) = self.original_text.as_deref() {
            if !text.is_empty() {
                return text;
            }
        }
        self.course_name.as_deref().unwrap_or("")
    }

    /// 展示文本行
    ///
    /// 优先级：原始文本逐行 > all_lines > 结构化字段拼装
    pub fn display_lines(&self) -> Vec<String> {
        if let Some(text) = self.original_text.as_deref() {
            let lines: Vec<String> = text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            if !lines.is_empty() {
                return lines;
            }
        }

        if !self.all_lines.is_empty() {
            return self.all_lines.clone();
        }

        // 兼容旧格式：由结构化字段拼装
        let mut lines = vec![self
            .course_name
            .clone()
            .unwrap_or_else(|| "未知课程".to_string())];
        if let Some(room) = &self.room {
            lines.push(format!("教室: {}", room));
        }
        if let Some(class_info) = &self.class_info {
            lines.push(class_info.clone());
        }
        lines
    }
}

// ==========================================
// DaySchedule - 单日课表
// ==========================================

/// 单日课表：上游节次键 -> 课程记录列表
///
/// 键保留上游原貌（"第N节" 与 "SSEE" 并存），由规整引擎统一归一。
/// 列表允许多条记录名义上共用一个时段，展示时只取第一条。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(flatten)]
    slots: BTreeMap<String, Vec<SessionRecord>>,
}

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, records: Vec<SessionRecord>) {
        self.slots.insert(key.into(), records);
    }

    pub fn slots(&self) -> impl Iterator<Item = (&String, &Vec<SessionRecord>)> {
        self.slots.iter()
    }

    /// 当日没有任何节次键
    ///
    /// 注意与 "整日数据缺失" 的区别：缺失在 [`RoomSchedule`] 层面
    /// 表现为键不存在，空课表表示确认整日无课。
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

impl From<BTreeMap<String, Vec<SessionRecord>>> for DaySchedule {
    fn from(slots: BTreeMap<String, Vec<SessionRecord>>) -> Self {
        Self { slots }
    }
}

// ==========================================
// RoomSchedule - 教室一周课表
// ==========================================

/// 单个教室的一周课表快照
///
/// 查询响应作用域：构造后不再修改。星期键缺失表示该日未取到数据，
/// 与 "存在但为空"（确认整日空闲）是两种可区分状态。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSchedule {
    /// 教室名，如 "格物楼B201"
    pub name: String,

    /// 星期 (1-7, 周一为 1) -> 当日课表
    pub days: BTreeMap<u8, DaySchedule>,
}

impl RoomSchedule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days: BTreeMap::new(),
        }
    }

    /// 指定星期的课表；`None` 表示该日无数据（非 "无课"）
    pub fn day(&self, day: u8) -> Option<&DaySchedule> {
        self.days.get(&day)
    }
}

// ==========================================
// CanonicalRow - 规整展示行
// ==========================================

/// 规整后的展示行：一行对应一个真实课次或一个确认空闲的时段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRow {
    /// 生效节次键（连排区间优先于其覆盖的单节）
    pub key: PeriodKey,

    /// 该时段是否有课
    pub occupied: bool,

    /// 展示的课程记录；空闲行为 `None`
    pub session: Option<SessionRecord>,

    /// 是否落在用户选择的节次窗口内
    pub highlighted: bool,
}

impl CanonicalRow {
    pub fn occupied(key: PeriodKey, session: SessionRecord) -> Self {
        Self {
            key,
            occupied: true,
            session: Some(session),
            highlighted: false,
        }
    }

    pub fn free(key: PeriodKey) -> Self {
        Self {
            key,
            occupied: false,
            session: None,
            highlighted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(course: &str) -> SessionRecord {
        SessionRecord {
            course_name: Some(course.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_identity_key_prefers_original_text() {
        let mut r = record("高等数学");
        assert_eq!(r.identity_key(), "高等数学");

        r.original_text = Some("高等数学 张三\n(1-16周)".to_string());
        assert_eq!(r.identity_key(), "高等数学 张三\n(1-16周)");

        // 空原始文本退回课程名
        r.original_text = Some(String::new());
        assert_eq!(r.identity_key(), "高等数学");
    }

    #[test]
    fn test_display_lines_priority() {
        // 原始文本优先，按行拆分并去空行
        let r = SessionRecord {
            original_text: Some("高等数学 张三\n\n  (1-16周)  ".to_string()),
            course_name: Some("高等数学".to_string()),
            all_lines: vec!["不应出现".to_string()],
            ..Default::default()
        };
        assert_eq!(r.display_lines(), vec!["高等数学 张三", "(1-16周)"]);

        // 无原始文本时用 all_lines
        let r = SessionRecord {
            all_lines: vec!["大学物理".to_string(), "(1-8周)".to_string()],
            ..Default::default()
        };
        assert_eq!(r.display_lines(), vec!["大学物理", "(1-8周)"]);

        // 两者皆无时由结构化字段拼装
        let r = SessionRecord {
            course_name: Some("线性代数".to_string()),
            room: Some("格物楼B201".to_string()),
            class_info: Some("计科2301".to_string()),
            ..Default::default()
        };
        assert_eq!(
            r.display_lines(),
            vec!["线性代数", "教室: 格物楼B201", "计科2301"]
        );

        // 全部缺失时兜底
        let r = SessionRecord::default();
        assert_eq!(r.display_lines(), vec!["未知课程"]);
    }

    #[test]
    fn test_session_record_loose_json() {
        // 上游字段可任意缺失
        let r: SessionRecord = serde_json::from_str(r#"{"course_name":"高等数学"}"#).unwrap();
        assert_eq!(r.course_name.as_deref(), Some("高等数学"));
        assert!(r.original_text.is_none());
        assert!(r.all_lines.is_empty());

        // "class" 是保留字，映射到 class_info
        let r: SessionRecord =
            serde_json::from_str(r#"{"class":"计科2301","weeks":"1-16周"}"#).unwrap();
        assert_eq!(r.class_info.as_deref(), Some("计科2301"));
        assert_eq!(r.weeks.as_deref(), Some("1-16周"));
    }

    #[test]
    fn test_missing_day_vs_empty_day() {
        let mut room = RoomSchedule::new("A101");
        room.days.insert(3, DaySchedule::new());

        // 星期三有数据但为空（确认无课）；星期四无数据
        assert!(room.day(3).is_some());
        assert!(room.day(3).map(DaySchedule::is_empty).unwrap_or(false));
        assert!(room.day(4).is_none());
    }
}
