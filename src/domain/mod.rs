// ==========================================
// 教室课表查询系统 - 领域层
// ==========================================
// 职责: 课表实体与值类型，查询响应作用域，不含业务规则
// ==========================================

pub mod building;
pub mod period;
pub mod query;
pub mod schedule;

// 重导出核心类型
pub use building::{building_order, building_prefix, ClassroomRoster, UNCLASSIFIED_BUILDING};
pub use period::{period_name, MalformedKey, PeriodKey, MAX_PERIOD, MIN_PERIOD, PERIOD_NAMES};
pub use query::{
    ClasstableQuery, PeriodWindow, QueryError, QuerySequencer, RequestToken, MAX_WEEK,
};
pub use schedule::{CanonicalRow, DaySchedule, RoomSchedule, SessionRecord};
