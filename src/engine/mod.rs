// ==========================================
// 教室课表查询系统 - 引擎层
// ==========================================
// 职责: 课表归一、窗口判定、空闲划分与视图投影
// 约定: 引擎全部无状态、同步、可重入，只依赖调用时的输入快照
// ==========================================

pub mod canonicalizer;
pub mod free_rooms;
pub mod overlap;
pub mod renderer;

// 重导出核心引擎
pub use canonicalizer::ScheduleCanonicalizer;
pub use free_rooms::{BuildingGroup, FreeOccupiedPartition, FreeRoomPartitioner};
pub use overlap::{key_overlaps, mark_highlights};
pub use renderer::{DayCell, TableRenderer, WeekCell, WeekRow};
