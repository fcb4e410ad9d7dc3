// ==========================================
// 教室课表查询系统 - 教学楼命名约定
// ==========================================
// 职责: 从教室名提取教学楼前缀、教学楼排序、教室花名册
// 约定: 字母前缀 > 中文前缀(后接数字/楼/场/馆) > 首字符
// ==========================================

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// 未能识别所属教学楼的教室归入该桶，而不是被丢弃
pub const UNCLASSIFIED_BUILDING: &str = "其他";

/// 中文教学楼前缀：连续汉字后紧跟数字或 楼/场/馆 量词
fn cjk_prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([一-龥]+)(?:\d|楼|场|馆)").expect("固定模式")
    })
}

/// 从教室名提取教学楼前缀
///
/// - 以 ASCII 字母开头 => 整段字母前缀（"JA101" => "JA"）
/// - 中文前缀后接数字或 楼/场/馆 => 该中文前缀（"格物楼B201" => "格物"）
/// - 否则取首字符；空名归入 [`UNCLASSIFIED_BUILDING`]
pub fn building_prefix(room: &str) -> String {
    let letters: String = room.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    if !letters.is_empty() {
        return letters;
    }

    if let Some(caps) = cjk_prefix_pattern().captures(room) {
        return caps[1].to_string();
    }

    match room.chars().next() {
        Some(first) => first.to_string(),
        None => UNCLASSIFIED_BUILDING.to_string(),
    }
}

/// 教学楼展示顺序：纯字母楼号在前，其余在后，各自按字典序
///
/// 字母楼号通常是主校区新楼，约定排在列表前面，属于用户可见契约。
pub fn building_order(a: &str, b: &str) -> Ordering {
    let a_is_letter = !a.is_empty() && a.chars().all(|c| c.is_ascii_alphabetic());
    let b_is_letter = !b.is_empty() && b.chars().all(|c| c.is_ascii_alphabetic());
    match (a_is_letter, b_is_letter) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    }
}

// ==========================================
// ClassroomRoster - 教室花名册
// ==========================================

/// 全校教室名册（来自 classrooms.json）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassroomRoster {
    pub classrooms: Vec<String>,
}

impl ClassroomRoster {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 按名称前缀筛选候选教室（空闲教室查询的候选集）
    pub fn matching_prefix(&self, prefix: &str) -> Vec<String> {
        self.classrooms
            .iter()
            .filter(|room| room.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// 按教学楼归类，教学楼依 [`building_order`]、教室按字典序排列
    pub fn by_building(&self) -> Vec<(String, Vec<String>)> {
        let mut grouped: std::collections::BTreeMap<String, Vec<String>> =
            std::collections::BTreeMap::new();
        for room in &self.classrooms {
            grouped
                .entry(building_prefix(room))
                .or_default()
                .push(room.clone());
        }

        let mut buildings: Vec<(String, Vec<String>)> = grouped.into_iter().collect();
        for (_, rooms) in &mut buildings {
            rooms.sort();
            rooms.dedup();
        }
        buildings.sort_by(|(a, _), (b, _)| building_order(a, b));
        buildings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_prefix() {
        assert_eq!(building_prefix("JA101"), "JA");
        assert_eq!(building_prefix("A203"), "A");
    }

    #[test]
    fn test_cjk_prefix() {
        // 贪婪匹配：仅当后继字符不满足约定时才回退（"楼B" 处回退到 "格物"）
        assert_eq!(building_prefix("格物楼B201"), "格物");
        // 量词后直接跟数字时量词计入前缀
        assert_eq!(building_prefix("综合楼305"), "综合楼");
        assert_eq!(building_prefix("体育馆102"), "体育馆");
        assert_eq!(building_prefix("实验1区"), "实验");
    }

    #[test]
    fn test_prefix_fallback() {
        // 无明确约定时取首字符
        assert_eq!(building_prefix("操场"), "操");
        assert_eq!(building_prefix("1号机房"), "1");
        assert_eq!(building_prefix(""), UNCLASSIFIED_BUILDING);
    }

    #[test]
    fn test_building_order_letters_first() {
        let mut buildings = vec!["1号楼".to_string(), "A".to_string(), "JB".to_string()];
        buildings.sort_by(|a, b| building_order(a, b));
        assert_eq!(buildings, vec!["A", "JB", "1号楼"]);
    }

    #[test]
    fn test_roster_matching_and_grouping() {
        let roster = ClassroomRoster::from_json(
            r#"{"classrooms":["JA101","JA102","JB201","格物楼B201","1号楼102"]}"#,
        )
        .unwrap();

        assert_eq!(roster.matching_prefix("JA"), vec!["JA101", "JA102"]);
        assert!(roster.matching_prefix("XX").is_empty());

        let grouped = roster.by_building();
        let names: Vec<&str> = grouped.iter().map(|(b, _)| b.as_str()).collect();
        // 字母楼号在前，其余按字典序
        assert_eq!(names, vec!["JA", "JB", "1", "格物"]);
    }
}
