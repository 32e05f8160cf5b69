//! 集合契约的稳定错误域。
//!
//! # 设计背景（Why）
//! - 一致性测试需要对被测集合抛出的故障做结构化判定：哪些属于参数校验失败、哪些属于
//!   只读拒绝、哪些属于游标失效。若依赖字符串匹配，契约断言会随措辞漂移而失真。
//! - 因此错误同时携带稳定错误码（机读）与人类可读消息（排障），并以 [`ErrorKind`]
//!   表达处置分类，测试引擎只依据分类分支，不解析文本。
//!
//! # 契约说明（What）
//! - 错误码遵循 `<域>.<语义>` 命名约定，集中登记于 [`codes`] 模块；
//! - [`CollectionError`] 满足 `Send + Sync + 'static`，可安全跨线程传递；
//! - 分类一经构造即不可变，调用方可多次查询。

use std::borrow::Cow;
use std::fmt;

/// 被测集合可能上报的故障分类。
///
/// # 教案式说明
/// - **意图 (Why)**：一致性引擎需要把“合法拒绝”（如只读集合拒绝变更）与“契约违背”
///   区分开来，分类即是该判定的唯一依据。
/// - **逻辑 (How)**：字段无关的平坦枚举，`Copy` 语义，便于在断言中直接比较。
/// - **契约 (What)**：
///   - `InvalidArgument`：参数不可接受，例如复制目标缺失或容量不足；
///   - `OutOfRange`：数值越界，例如负的复制起始偏移；
///   - `UnsupportedOperation`：实现合法地拒绝该操作，例如只读集合的变更调用；
///   - `InvalidState`：对象当前状态不允许该操作，例如结构已变化后的游标推进。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ErrorKind {
    /// 参数不可接受。
    InvalidArgument,
    /// 数值参数越界。
    OutOfRange,
    /// 实现合法地不支持该操作。
    UnsupportedOperation,
    /// 对象状态不允许该操作（典型场景：失效游标）。
    InvalidState,
}

/// 稳定错误码清单。
///
/// # 契约说明（What）
/// - 所有常量均遵循 `<域>.<语义>` 约定，一经发布不可变更语义；
/// - 新增错误码时应在此登记，避免调用方散落自定义字符串。
pub mod codes {
    /// 批量复制未提供目标缓冲区。
    pub const COPY_NO_TARGET: &str = "collection.copy.no_target";
    /// 批量复制的起始偏移为负。
    pub const COPY_NEGATIVE_OFFSET: &str = "collection.copy.negative_offset";
    /// 目标缓冲区从偏移处起剩余容量不足。
    pub const COPY_SHORT_TARGET: &str = "collection.copy.short_target";
    /// 只读集合拒绝变更操作。
    pub const READ_ONLY: &str = "collection.read_only";
    /// 游标因底层结构变化而失效。
    pub const CURSOR_INVALIDATED: &str = "collection.cursor.invalidated";
    /// 游标不支持重置。
    pub const CURSOR_RESET_UNSUPPORTED: &str = "collection.cursor.reset_unsupported";
}

/// `CollectionError` 是集合契约层共享的稳定错误形态。
///
/// # 设计背景（Why）
/// - 一致性测试会把“被测实现抛出的错误”作为断言对象，因此错误必须携带可比对的
///   分类与错误码，而非仅有一段描述文字。
/// - 保留可选的底层原因（`source` 链），使被测实现能够在不丢失诊断上下文的前提下
///   汇入统一错误域。
///
/// # 逻辑解析（How）
/// - 结构体按分类提供快捷构造函数，并以 Builder 风格的 [`with_cause`](Self::with_cause)
///   叠加底层原因；`Display` 输出 `code: message` 形式。
///
/// # 契约说明（What）
/// - **前置条件**：`code` 必须取自 [`codes`] 模块或遵循相同命名约定；
/// - **后置条件**：除显式调用 `with_cause` 外不含底层原因；分类与错误码构造后不可变。
#[derive(Debug)]
pub struct CollectionError {
    kind: ErrorKind,
    code: &'static str,
    message: Cow<'static, str>,
    cause: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl CollectionError {
    /// 构造指定分类的错误。
    ///
    /// # 契约说明（What）
    /// - **输入**：`kind` 为处置分类；`code` 为稳定错误码；`message` 面向排障人员；
    /// - **后置条件**：返回值拥有独立所有权，未附带底层原因。
    pub fn new(kind: ErrorKind, code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            cause: None,
        }
    }

    /// 构造 `InvalidArgument` 分类错误的快捷入口。
    pub fn invalid_argument(code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidArgument, code, message)
    }

    /// 构造 `OutOfRange` 分类错误的快捷入口。
    pub fn out_of_range(code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::OutOfRange, code, message)
    }

    /// 构造 `UnsupportedOperation` 分类错误的快捷入口。
    pub fn unsupported(code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::UnsupportedOperation, code, message)
    }

    /// 构造 `InvalidState` 分类错误的快捷入口。
    pub fn invalid_state(code: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidState, code, message)
    }

    /// 附带底层原因并返回新的错误值。
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// 获取处置分类。
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 获取稳定错误码。
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// 获取人类可读消息。
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 获取底层原因（若有）。
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("backing store refused: {0}")]
    struct BackingStoreError(&'static str);

    #[test]
    fn accessors_reflect_construction() {
        let err = CollectionError::out_of_range(codes::COPY_NEGATIVE_OFFSET, "offset = -1");
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.code(), codes::COPY_NEGATIVE_OFFSET);
        assert_eq!(err.message(), "offset = -1");
        assert!(err.cause().is_none(), "未附原因时 cause 应为空");
    }

    #[test]
    fn display_joins_code_and_message() {
        let err = CollectionError::unsupported(codes::READ_ONLY, "collection is read-only");
        assert_eq!(err.to_string(), "collection.read_only: collection is read-only");
    }

    #[test]
    fn cause_chain_is_preserved() {
        let err = CollectionError::invalid_state(codes::CURSOR_INVALIDATED, "stamp mismatch")
            .with_cause(BackingStoreError("generation rolled"));
        let source = std::error::Error::source(&err).expect("应能取得底层原因");
        assert!(source.to_string().contains("generation rolled"));
    }

    #[test]
    fn owned_messages_are_accepted() {
        let err = CollectionError::invalid_argument(
            codes::COPY_SHORT_TARGET,
            format!("need {} slots", 9),
        );
        assert_eq!(err.message(), "need 9 slots");
    }
}
