// ==========================================
// 教室课表查询系统 - 课表规整引擎
// ==========================================
// 职责: 单日课表 -> 有序、去重的规整展示行
// 输入: 节次键与记录列表并存多种表示的 DaySchedule
// 输出: 同一真实课次恰好出现一次的 CanonicalRow 列表
// ==========================================

mod core;


pub use self::core::ScheduleCanonicalizer;
