// ==========================================
// 教室课表查询系统 - 接入层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 课表数据接入错误
///
/// 仅结构性问题（响应整体不是合法 JSON、形状不符）会报错；
/// 局部脏数据（非法星期键、空单元格）在接入时记日志并跳过。
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("课表响应 JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type IngestResult<T> = Result<T, IngestError>;
