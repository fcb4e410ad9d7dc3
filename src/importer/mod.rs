// ==========================================
// 教室课表查询系统 - 接入层
// ==========================================
// 职责: 宽松 JSON 响应 -> 类型化领域结构，在边界完成校验
// ==========================================

pub mod classtable;
pub mod error;
pub mod session_text;

pub use classtable::{parse_classtable_response, rooms_from_value, RawRoomEntry};
pub use error::{IngestError, IngestResult};
pub use session_text::parse_session_text;
