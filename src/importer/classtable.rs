// ==========================================
// 教室课表查询系统 - 课表响应接入
// ==========================================
// 职责: 把宽松的 JSON 查询响应校验成类型化的 RoomSchedule
// 输入: [{ "name": 教室名, "schedule": { "1".."7": { 节次键: [记录] } } }]
// 输出: Vec<RoomSchedule>
// ==========================================

use serde::Deserialize;
use std::collections::BTreeMap;

use super::error::IngestResult;
use crate::domain::schedule::{DaySchedule, RoomSchedule, SessionRecord};

/// 上游查询响应中的单个教室条目（宽松结构，字段齐全性不做假设）
#[derive(Debug, Deserialize)]
pub struct RawRoomEntry {
    pub name: String,

    /// 星期键(字符串 "1".."7") -> 节次键 -> 记录列表
    #[serde(default)]
    pub schedule: BTreeMap<String, BTreeMap<String, Vec<SessionRecord>>>,
}

/// 解析课表查询响应的 data 数组
///
/// 响应整体不是合法 JSON 时报错；教室列表为空是合法结果
/// （前端展示 "未找到匹配的教室"），不是错误。
pub fn parse_classtable_response(json: &str) -> IngestResult<Vec<RoomSchedule>> {
    let raw: Vec<RawRoomEntry> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(into_room_schedule).collect())
}

/// 从已解析的 JSON 值接入（响应外层已被调用方拆开时使用）
pub fn rooms_from_value(value: serde_json::Value) -> IngestResult<Vec<RoomSchedule>> {
    let raw: Vec<RawRoomEntry> = serde_json::from_value(value)?;
    Ok(raw.into_iter().map(into_room_schedule).collect())
}

/// 单个教室条目的校验与收窄
///
/// 星期键必须是 "1".."7"；非法键记日志后跳过，不影响其余数据。
fn into_room_schedule(raw: RawRoomEntry) -> RoomSchedule {
    let mut room = RoomSchedule::new(raw.name);
    for (day_key, slots) in raw.schedule {
        match day_key.parse::<u8>() {
            Ok(day) if (1..=7).contains(&day) => {
                room.days.insert(day, DaySchedule::from(slots));
            }
            _ => {
                tracing::warn!(room = %room.name, day_key = %day_key, "跳过非法星期键");
            }
        }
    }
    room
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "name": "格物楼B201",
            "schedule": {
                "1": {
                    "0102": [{"course_name": "高等数学", "teacher": "张三"}],
                    "第1节": [{"course_name": "高等数学", "teacher": "张三"}]
                },
                "3": {}
            }
        },
        {"name": "格物楼B202"}
    ]"#;

    #[test]
    fn test_parse_response() {
        let rooms = parse_classtable_response(SAMPLE).unwrap();
        assert_eq!(rooms.len(), 2);

        let room = &rooms[0];
        assert_eq!(room.name, "格物楼B201");
        // 周一有两个节次键，周三存在但为空，周二无数据
        assert_eq!(room.day(1).map(DaySchedule::len), Some(2));
        assert!(room.day(3).map(DaySchedule::is_empty).unwrap_or(false));
        assert!(room.day(2).is_none());

        // schedule 字段整体缺失时默认为空
        assert!(rooms[1].days.is_empty());
    }

    #[test]
    fn test_invalid_day_key_skipped() {
        let json = r#"[{"name": "A101", "schedule": {"8": {"第1节": []}, "abc": {}, "2": {}}}]"#;
        let rooms = parse_classtable_response(json).unwrap();
        assert_eq!(rooms[0].days.keys().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_empty_room_list_is_ok() {
        assert!(parse_classtable_response("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(parse_classtable_response("not json").is_err());
    }
}
