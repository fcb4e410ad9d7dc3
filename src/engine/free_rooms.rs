// ==========================================
// 教室课表查询系统 - 空闲教室划分引擎
// ==========================================
// 职责: 把候选教室按指定日与节次窗口划分为空闲/有课两组，
//       按教学楼分组输出
// 不变式: 每个候选教室恰好落入所属教学楼的其中一组
// ==========================================

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::domain::building::{building_order, building_prefix};
use crate::domain::query::PeriodWindow;
use crate::domain::schedule::{DaySchedule, RoomSchedule};
use crate::engine::canonicalizer::ScheduleCanonicalizer;
use crate::engine::overlap::key_overlaps;

// ==========================================
// 结果类型
// ==========================================

/// 单个教学楼的空闲/有课教室分组，教室按字典序排列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildingGroup {
    pub building: String,
    pub free: Vec<String>,
    pub occupied: Vec<String>,
}

/// 空闲教室查询结果：教学楼按 "纯字母在前、再按字典序" 排列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FreeOccupiedPartition {
    pub buildings: Vec<BuildingGroup>,
}

impl FreeOccupiedPartition {
    /// 全部教学楼的空闲教室总数；0 是合法的展示结果（"无空闲教室"）
    pub fn total_free(&self) -> usize {
        self.buildings.iter().map(|group| group.free.len()).sum()
    }

    pub fn total_occupied(&self) -> usize {
        self.buildings
            .iter()
            .map(|group| group.occupied.len())
            .sum()
    }

    pub fn group(&self, building: &str) -> Option<&BuildingGroup> {
        self.buildings
            .iter()
            .find(|group| group.building == building)
    }
}

// ==========================================
// FreeRoomPartitioner - 空闲教室划分引擎
// ==========================================
pub struct FreeRoomPartitioner {
    canonicalizer: ScheduleCanonicalizer,
}

impl FreeRoomPartitioner {
    pub fn new() -> Self {
        Self {
            canonicalizer: ScheduleCanonicalizer::new(),
        }
    }

    /// 划分候选教室
    ///
    /// # 参数
    /// - `candidates`: 候选教室名（花名册按前缀筛选的结果）
    /// - `schedules`: 课表查询响应；上游只返回有课的教室，
    ///   未出现在响应中、或指定日无数据的教室视为空闲
    /// - `day`: 星期 1-7
    /// - `window`: 节次窗口（连续区间或离散集合）
    pub fn partition(
        &self,
        candidates: &[String],
        schedules: &[RoomSchedule],
        day: u8,
        window: &PeriodWindow,
    ) -> FreeOccupiedPartition {
        let by_name: HashMap<&str, &RoomSchedule> = schedules
            .iter()
            .map(|room| (room.name.as_str(), room))
            .collect();

        // BTreeSet 保证组内字典序且候选重复时只计一次
        let mut groups: HashMap<String, (BTreeSet<&String>, BTreeSet<&String>)> = HashMap::new();
        for room in candidates {
            let occupied = by_name
                .get(room.as_str())
                .and_then(|schedule| schedule.day(day))
                .map(|day_schedule| self.day_is_occupied(day_schedule, window))
                .unwrap_or(false);

            let entry = groups.entry(building_prefix(room)).or_default();
            if occupied {
                entry.1.insert(room);
            } else {
                entry.0.insert(room);
            }
        }

        let mut buildings: Vec<BuildingGroup> = groups
            .into_iter()
            .map(|(building, (free, occupied))| BuildingGroup {
                building,
                free: free.into_iter().cloned().collect(),
                occupied: occupied.into_iter().cloned().collect(),
            })
            .collect();
        buildings.sort_by(|a, b| building_order(&a.building, &b.building));

        FreeOccupiedPartition { buildings }
    }

    /// 当日任一规整行（有课且与窗口相交）即判定该教室有课
    fn day_is_occupied(&self, day_schedule: &DaySchedule, window: &PeriodWindow) -> bool {
        self.canonicalizer
            .canonicalize(day_schedule)
            .iter()
            .any(|row| row.occupied && key_overlaps(&row.key, window))
    }
}

impl Default for FreeRoomPartitioner {
    fn default() -> Self {
        Self::new()
    }
}
