//! 集合契约面：一致性测试电池所要求的最小操作集合。
//!
//! # 设计背景（Why）
//! - 测试电池对被测集合一无所知，只通过本模块定义的契约交互；契约越小，第三方实现
//!   的接入成本越低。
//! - 所有方法均以 `&self` 接收：可变集合通过内部可变性完成变更。这不是风格偏好，而是
//!   快速失败协议的前提——同一线程需要在持有游标的同时对集合施加结构性变更，若变更
//!   要求 `&mut self`，借用检查会直接排除这类交错调用序列。
//!
//! # 契约说明（What）
//! - 变更操作的失败以 [`CollectionError`](crate::error::CollectionError) 表达，
//!   分类语义见 `error` 模块；
//! - 游标契约要求快速失败：底层结构自游标创建后发生变化，任何推进或重置尝试都必须
//!   返回 `InvalidState`，且该失效是粘性的。

use core::fmt::{Debug, Display};

use crate::error::CollectionError;

/// 被测集合必须实现的契约。
///
/// # 教案式说明
/// - **意图 (Why)**：为一致性测试电池提供统一的操作面，涵盖计数、包含性、变更、批量
///   复制、只读自述、文本渲染与游标遍历。
/// - **逻辑 (How)**：元素类型作为关联类型约束为可克隆、可比较、可渲染；游标以 GAT
///   形式借用集合，使遍历期间集合本体仍可被（通过 `&self`）施加变更。
/// - **契约 (What)**：
///   - 只读集合的变更调用必须返回 `UnsupportedOperation`，且状态保持不变；
///   - `copy_into` 永远不是变更操作；
///   - `len` 必须始终等于“成功加入且尚未移除”的元素数量。
pub trait Collection {
    /// 元素类型。相等比较与文本渲染是测试电池仅有的两项要求。
    type Elem: Clone + PartialEq + Debug + Display;

    /// 游标类型，借用集合本体。
    type Cursor<'a>: CollectionCursor<Elem = Self::Elem>
    where
        Self: 'a;

    /// 返回当前元素数量。
    fn len(&self) -> usize;

    /// 判断集合是否为空。
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 加入一个元素。
    ///
    /// # 契约说明（What）
    /// - 去重集合对已存在元素的加入可静默合并（计数不变仍视为成功）；
    /// - 只读集合必须以 `UnsupportedOperation` 拒绝。
    fn add(&self, value: Self::Elem) -> Result<(), CollectionError>;

    /// 移除一个元素，返回是否确有元素被移除。
    ///
    /// # 契约说明（What）
    /// - 元素存在多份时仅移除一份；
    /// - 只读集合必须以 `UnsupportedOperation` 拒绝。
    fn remove(&self, value: &Self::Elem) -> Result<bool, CollectionError>;

    /// 判断元素是否存在。
    fn contains(&self, value: &Self::Elem) -> bool;

    /// 清空集合。只读集合必须以 `UnsupportedOperation` 拒绝。
    fn clear(&self) -> Result<(), CollectionError>;

    /// 把全部元素克隆进目标缓冲区的 `offset` 起始段。
    ///
    /// # 契约说明（What）
    /// - `target` 为 `None` ⇒ `InvalidArgument`（对应缺失目标的退化输入）；
    /// - `offset < 0` ⇒ `OutOfRange`；
    /// - 自 `offset` 起剩余容量不足 `len()` ⇒ `InvalidArgument`；
    /// - 空集合复制进零长目标在 `offset == 0` 时平凡成功；
    /// - 本操作永远不修改集合，对只读集合同样可用。
    fn copy_into(
        &self,
        target: Option<&mut [Self::Elem]>,
        offset: isize,
    ) -> Result<(), CollectionError>;

    /// 自述是否只读。
    fn is_read_only(&self) -> bool;

    /// 返回集合的文本渲染。
    ///
    /// 当测试夹具设置了 `TO_STRING_PRINT_ITEMS` 选项时，渲染结果必须把每个元素的
    /// `Display` 形式作为子串包含在内。
    fn render(&self) -> String;

    /// 获取一个新游标。
    fn cursor(&self) -> Self::Cursor<'_>;
}

/// 集合游标契约：逐步推进、可选重置、快速失败。
///
/// # 教案式说明
/// - **意图 (Why)**：被测集合的遍历必须在底层结构变化时立刻暴露问题，而不是静默产出
///   可能已经失真的元素序列。
/// - **逻辑 (How)**：`advance` 以 `Ok(Some(elem))` 产出元素、以 `Ok(None)` 表示耗尽；
///   结构性变更后两个方法都以 `InvalidState` 拒绝。
/// - **契约 (What)**：
///   - 失效是粘性的：一旦返回 `InvalidState`，后续所有推进与重置尝试都必须继续返回
///     `InvalidState`；
///   - 不支持重置的实现应对 `reset` 返回 `UnsupportedOperation`，但失效游标的
///     `reset` 仍须优先报告 `InvalidState`。
pub trait CollectionCursor {
    /// 产出的元素类型。
    type Elem;

    /// 向前推进一步。
    fn advance(&mut self) -> Result<Option<Self::Elem>, CollectionError>;

    /// 回到起点（若实现支持）。
    fn reset(&mut self) -> Result<(), CollectionError>;
}
