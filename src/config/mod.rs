// ==========================================
// 教室课表查询系统 - 配置层
// ==========================================
// 职责: 校历等部署期配置，JSON 加载
// ==========================================

pub mod calendar;

// 重导出核心配置类型
pub use calendar::{CalendarError, SemesterCalendar, Term, WeekDay};
