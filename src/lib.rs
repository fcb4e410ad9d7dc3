// ==========================================
// 教室课表查询系统 - 核心库
// ==========================================
// 职责: 课表归一与空闲教室分类引擎
// 定位: 查询前端的纯逻辑核心，不含网络/页面接线
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 接入层 - 宽松 JSON 响应的校验收窄
pub mod importer;

// 引擎层 - 归一/划分/投影
pub mod engine;

// 配置层 - 校历
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    building_order, building_prefix, period_name, CanonicalRow, ClassroomRoster, ClasstableQuery,
    DaySchedule, MalformedKey, PeriodKey, PeriodWindow, QueryError, QuerySequencer, RequestToken,
    RoomSchedule, SessionRecord, MAX_PERIOD, MAX_WEEK, MIN_PERIOD, UNCLASSIFIED_BUILDING,
};

// 引擎
pub use engine::{
    BuildingGroup, DayCell, FreeOccupiedPartition, FreeRoomPartitioner, ScheduleCanonicalizer,
    TableRenderer, WeekCell, WeekRow,
};

// 接入
pub use importer::{parse_classtable_response, parse_session_text, IngestError};

// 配置
pub use config::{SemesterCalendar, Term, WeekDay};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "教室课表查询系统";
