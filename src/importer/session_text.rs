// ==========================================
// 教室课表查询系统 - 单元格文本解析
// ==========================================
// 职责: 从课表单元格的原始文本推导结构化课程字段
// 约定: 首行为 课程名+教师，含 "(..周..)" 的行是周次，
//       含 "楼" 的行是教室，其余行视为班级
// ==========================================

use crate::domain::schedule::SessionRecord;

/// 解析课表单元格文本为课程记录
///
/// 空白或占位符（"&nbsp;"）返回 `None`。原始文本整体保留在
/// `original_text` 上，作为展示与去重的首选来源。
pub fn parse_session_text(text: &str) -> Option<SessionRecord> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "&nbsp;" {
        return None;
    }

    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }

    let mut record = SessionRecord {
        original_text: Some(trimmed.to_string()),
        all_lines: lines.iter().map(|line| line.to_string()).collect(),
        ..Default::default()
    };

    // 首行: 课程名，可能带教师（"高等数学 张三(1-16周)"）
    let first = lines[0];
    if first.contains('(') && first.contains(')') {
        let head = first.split('(').next().unwrap_or("").trim();
        let parts: Vec<&str> = head.split_whitespace().collect();
        if parts.len() > 1 {
            record.course_name = Some(parts[..parts.len() - 1].concat());
            record.teacher = Some(parts[parts.len() - 1].to_string());
        } else {
            record.course_name = Some(first.to_string());
        }
    } else {
        record.course_name = Some(first.to_string());
    }

    // 周次: 第一个形如 "(..周..)" 的行
    for line in &lines {
        if line.contains('(') && line.contains(')') && line.contains('周') {
            record.weeks = line
                .split('(')
                .nth(1)
                .and_then(|rest| rest.split(')').next())
                .map(str::to_string);
            break;
        }
    }

    // 班级: 首行之后第一个既非周次、也非教室的行
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            continue;
        }
        let is_weeks = line.contains('(') && line.contains(')') && line.contains('周');
        if !is_weeks && !line.contains('楼') {
            record.class_info = Some(line.to_string());
            break;
        }
    }

    // 教室: 第一个含 "楼" 的行
    for line in &lines {
        if line.contains('楼') {
            record.room = Some(line.to_string());
            break;
        }
    }

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_cell() {
        let text = "高等数学 张三(1-16周)\n计科2301\n格物楼B201";
        let record = parse_session_text(text).unwrap();

        assert_eq!(record.course_name.as_deref(), Some("高等数学"));
        assert_eq!(record.teacher.as_deref(), Some("张三"));
        assert_eq!(record.weeks.as_deref(), Some("1-16周"));
        assert_eq!(record.class_info.as_deref(), Some("计科2301"));
        assert_eq!(record.room.as_deref(), Some("格物楼B201"));
        assert_eq!(record.original_text.as_deref(), Some(text));
        assert_eq!(record.all_lines.len(), 3);
    }

    #[test]
    fn test_parse_course_name_without_teacher() {
        // 括号前只有一个词时整行作为课程名
        let record = parse_session_text("形势与政策(3-4周)").unwrap();
        assert_eq!(record.course_name.as_deref(), Some("形势与政策(3-4周)"));
        assert!(record.teacher.is_none());
        assert_eq!(record.weeks.as_deref(), Some("3-4周"));
    }

    #[test]
    fn test_parse_multi_word_course_name() {
        // 课程名本身含空格时，最后一个词视为教师
        let record = parse_session_text("大学 英语 李四(1-8周)").unwrap();
        assert_eq!(record.course_name.as_deref(), Some("大学英语"));
        assert_eq!(record.teacher.as_deref(), Some("李四"));
    }

    #[test]
    fn test_parse_blank_cell() {
        assert!(parse_session_text("").is_none());
        assert!(parse_session_text("   ").is_none());
        assert!(parse_session_text("&nbsp;").is_none());
    }

    #[test]
    fn test_plain_first_line() {
        let record = parse_session_text("自习").unwrap();
        assert_eq!(record.course_name.as_deref(), Some("自习"));
        assert!(record.weeks.is_none());
        assert!(record.room.is_none());
    }
}
