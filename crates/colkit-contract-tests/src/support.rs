//! 套件共享的断言与控制流辅助函数。

use core::fmt::Debug;
use std::fmt::Write;
use std::panic;

use colkit_core::{
    Collection, CollectionCursor, CollectionError, CollectionOptions, ErrorKind,
};

use crate::case::CaseOutcome;

/// 在附加上下文的情况下重新抛出 panic。
///
/// # 教案式说明
/// - **意图 (Why)**：`case::run_suite` 捕获 panic 后，需要在原始 payload 之上追加
///   “套件/用例”描述，帮助调试者快速定位失败来源。
/// - **逻辑 (How)**：尝试将 payload 解析为 `&str` / `String` / 任意 `Any`，在格式化
///   文本后通过 [`panic::resume_unwind`] 保留原始栈信息。
/// - **契约 (What)**：
///   - **前置条件**：调用前必须处于 `catch_unwind` 的错误分支中；
///   - **后置条件**：函数不会正常返回，而是带上下文的 panic。
pub fn panic_with_context(suite: &str, case: &str, payload: Box<dyn std::any::Any + Send>) -> ! {
    let mut message = String::new();
    let _ = write!(&mut message, "[colkit-tck::{suite}::{case}] 测试失败：");

    if let Some(text) = payload.downcast_ref::<&str>() {
        let _ = write!(&mut message, "{text}");
    } else if let Some(text) = payload.downcast_ref::<String>() {
        let _ = write!(&mut message, "{text}");
    } else {
        let _ = write!(&mut message, "<未知 panic 类型>");
    }

    panic::resume_unwind(Box::new(message));
}

/// `SkipWhenNot` 的落地形态：标志缺席时返回跳过结论。
///
/// # 契约说明（What）
/// - **输入**：`options` 为夹具选项，`flag` 为前置标志位，`reason` 为跳过说明；
/// - **输出**：标志缺席返回 `Some(Skipped)`，用例应立即带着它返回；标志存在返回 `None`。
pub fn skip_unless(
    options: CollectionOptions,
    flag: u32,
    reason: &'static str,
) -> Option<CaseOutcome> {
    if options.has(flag) {
        None
    } else {
        Some(CaseOutcome::Skipped(reason))
    }
}

/// 变更操作在 `ReadOnly` 兜底语义下的归一化结果。
pub enum MutationStep<T> {
    /// 操作成功完成。
    Done(T),
    /// 只读集合合法地拒绝了操作。
    ReadOnlyRejected,
}

/// 执行变更操作结果的统一裁决。
///
/// # 教案式说明
/// - **意图 (Why)**：电池把 `UnsupportedOperation` 视为“可能预期”——仅当夹具声明
///   `READ_ONLY` 时才解释为合格表现；否则它与其他任何错误一样是契约违背。
/// - **逻辑 (How)**：成功原样放行；`UnsupportedOperation` 依选项二分；其余分类一律
///   携带原始诊断信息 panic。
/// - **契约 (What)**：返回 [`MutationStep::ReadOnlyRejected`] 时调用方应以通过结论
///   提前返回（后续断言对只读集合不再适用）。
pub fn apply_mutation<T>(
    options: CollectionOptions,
    outcome: Result<T, CollectionError>,
) -> MutationStep<T> {
    match outcome {
        Ok(value) => MutationStep::Done(value),
        Err(err) if err.kind() == ErrorKind::UnsupportedOperation => {
            if options.has(CollectionOptions::READ_ONLY) {
                MutationStep::ReadOnlyRejected
            } else {
                panic!("未声明 ReadOnly 的集合拒绝了变更操作：{err}");
            }
        }
        Err(err) => panic!("变更操作返回了预期之外的错误：{err}"),
    }
}

/// 断言两个序列作为多重集合相等（顺序不敏感，重数敏感）。
pub fn assert_same_multiset<T: PartialEq + Debug>(expected: &[T], actual: &[T]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "多重集合元素数量不一致：期望 {expected:?}，实际 {actual:?}"
    );
    for item in expected {
        let expected_count = expected.iter().filter(|other| *other == item).count();
        let actual_count = actual.iter().filter(|other| *other == item).count();
        assert_eq!(
            expected_count, actual_count,
            "元素 {item:?} 的重数不一致：期望 {expected_count}，实际 {actual_count}"
        );
    }
}

/// 用游标完整遍历集合，收集全部元素；遍历失败视为用例失败。
pub fn drain_cursor<C: Collection>(collection: &C) -> Vec<C::Elem> {
    let mut cursor = collection.cursor();
    let mut items = Vec::new();
    loop {
        match cursor.advance() {
            Ok(Some(item)) => items.push(item),
            Ok(None) => return items,
            Err(err) => panic!("无结构变更的遍历不应失败：{err}"),
        }
    }
}

/// 断言集合包含全部样本。
pub fn assert_contains_all<C: Collection>(collection: &C, samples: &[C::Elem]) {
    for sample in samples {
        assert!(
            collection.contains(sample),
            "集合应包含样本 {sample:?}"
        );
    }
}

/// 断言集合不包含任何样本。
pub fn assert_contains_none<C: Collection>(collection: &C, samples: &[C::Elem]) {
    for sample in samples {
        assert!(
            !collection.contains(sample),
            "集合不应包含样本 {sample:?}"
        );
    }
}
