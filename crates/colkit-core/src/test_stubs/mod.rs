//! 集合契约的参考实现桩，集中供一致性电池与下游测试复用。
//!
//! # 设计定位（Why）
//! - 测试电池本身也需要被测试：每条断言分支（去重合并、只读拒绝、快速失败、渲染包含
//!   元素）都应有一个可控的参考实现来触发。
//! - 过去的经验表明，在各测试文件内重复手写“玩具集合”既增加维护成本，也容易在契约
//!   调整时漏改；统一出口使接口变更只产生单点编译错误。
//!
//! # 使用方式（How）
//! - [`StubCollection`] 直接吃进一个 [`CollectionOptions`] 值，并按位解释自己的行为，
//!   因此同一个桩即可扮演“普通集合 / 去重集合 / 只读集合 / 渲染元素集合”等全部角色；
//! - [`TolerantCollection`] 故意不实现快速失败，用于验证电池能在防挂起上限内判负
//!   不合规实现。
//!
//! # 契约说明（What）
//! - **前置条件**：这些桩仅用于测试或示例环境；
//! - **后置条件**：不触发 IO 或线程调度等副作用，内部以 `parking_lot::Mutex` 支持
//!   `&self` 变更。

use core::fmt::{Debug, Display};

use parking_lot::Mutex;

use crate::contract::{Collection, CollectionCursor};
use crate::error::{CollectionError, codes};
use crate::options::CollectionOptions;

/// 按能力选项解释自身行为的参考集合。
///
/// # 教案式说明
/// - **意图 (Why)**：让一致性电池的每条分支都有可控的触发源，而无需为每种契约组合
///   维护一个独立的集合类型。
/// - **逻辑 (How)**：`Vec` 承载元素；单调递增的修改戳驱动游标快速失败——游标创建时
///   捕获当前戳，任何结构性变更（加入、移除、清空非空集合）递增戳，戳不匹配即粘性
///   失效。去重合并与只读拒绝直接查询选项位。
/// - **契约 (What)**：
///   - `READ_ONLY` 置位时所有变更调用返回 `UnsupportedOperation`，状态不变；
///   - `UNIQUE` 置位时对已存在元素的加入是无操作的成功（计数与修改戳均不变）；
///   - `TO_STRING_PRINT_ITEMS` 置位时 `render` 逐个打印元素，否则仅打印数量。
pub struct StubCollection<T> {
    options: CollectionOptions,
    resettable: bool,
    inner: Mutex<Inner<T>>,
}

struct Inner<T> {
    items: Vec<T>,
    stamp: u64,
}

impl<T> StubCollection<T> {
    /// 构造按 `options` 行事的空集合。
    pub fn with_options(options: CollectionOptions) -> Self {
        Self {
            options,
            resettable: true,
            inner: Mutex::new(Inner {
                items: Vec::new(),
                stamp: 0,
            }),
        }
    }

    /// 构造游标不支持重置的空集合，用于覆盖 `reset` 的 `UnsupportedOperation` 分支。
    pub fn non_resettable(options: CollectionOptions) -> Self {
        Self {
            resettable: false,
            ..Self::with_options(options)
        }
    }

    /// 绕过加入策略直接预置元素。
    ///
    /// 只读夹具无法通过 `add` 填充样本，预置入口是它们构造“已填充集合”的唯一途径。
    pub fn seeded(options: CollectionOptions, items: Vec<T>) -> Self {
        Self {
            options,
            resettable: true,
            inner: Mutex::new(Inner { items, stamp: 0 }),
        }
    }

    fn reject_if_read_only(&self) -> Result<(), CollectionError> {
        if self.options.has(CollectionOptions::READ_ONLY) {
            Err(CollectionError::unsupported(
                codes::READ_ONLY,
                "stub collection is read-only",
            ))
        } else {
            Ok(())
        }
    }
}

impl<T> Collection for StubCollection<T>
where
    T: Clone + PartialEq + Debug + Display,
{
    type Elem = T;
    type Cursor<'a>
        = StubCursor<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.inner.lock().items.len()
    }

    fn add(&self, value: T) -> Result<(), CollectionError> {
        self.reject_if_read_only()?;
        let mut inner = self.inner.lock();
        if self.options.has(CollectionOptions::UNIQUE) && inner.items.contains(&value) {
            // 去重合并：无操作的成功，不构成结构性变更。
            return Ok(());
        }
        inner.items.push(value);
        inner.stamp += 1;
        Ok(())
    }

    fn remove(&self, value: &T) -> Result<bool, CollectionError> {
        self.reject_if_read_only()?;
        let mut inner = self.inner.lock();
        match inner.items.iter().position(|item| item == value) {
            Some(index) => {
                inner.items.remove(index);
                inner.stamp += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn contains(&self, value: &T) -> bool {
        self.inner.lock().items.contains(value)
    }

    fn clear(&self) -> Result<(), CollectionError> {
        self.reject_if_read_only()?;
        let mut inner = self.inner.lock();
        if !inner.items.is_empty() {
            inner.items.clear();
            inner.stamp += 1;
        }
        Ok(())
    }

    fn copy_into(&self, target: Option<&mut [T]>, offset: isize) -> Result<(), CollectionError> {
        copy_items(&self.inner.lock().items, target, offset)
    }

    fn is_read_only(&self) -> bool {
        self.options.has(CollectionOptions::READ_ONLY)
    }

    fn render(&self) -> String {
        let inner = self.inner.lock();
        if self.options.has(CollectionOptions::TO_STRING_PRINT_ITEMS) {
            let rendered: Vec<String> = inner.items.iter().map(|item| item.to_string()).collect();
            format!("[{}]", rendered.join(", "))
        } else {
            format!("StubCollection(len = {})", inner.items.len())
        }
    }

    fn cursor(&self) -> StubCursor<'_, T> {
        StubCursor {
            owner: self,
            position: 0,
            stamp: self.inner.lock().stamp,
        }
    }
}

/// [`StubCollection`] 的快速失败游标。
pub struct StubCursor<'a, T> {
    owner: &'a StubCollection<T>,
    position: usize,
    stamp: u64,
}

impl<'a, T> StubCursor<'a, T> {
    fn check_stamp(&self, stamp: u64) -> Result<(), CollectionError> {
        if stamp == self.stamp {
            Ok(())
        } else {
            // 修改戳单调递增，失效因此天然是粘性的。
            Err(CollectionError::invalid_state(
                codes::CURSOR_INVALIDATED,
                "collection was structurally modified during iteration",
            ))
        }
    }
}

impl<'a, T> CollectionCursor for StubCursor<'a, T>
where
    T: Clone + PartialEq + Debug + Display,
{
    type Elem = T;

    fn advance(&mut self) -> Result<Option<T>, CollectionError> {
        let inner = self.owner.inner.lock();
        self.check_stamp(inner.stamp)?;
        let item = inner.items.get(self.position).cloned();
        if item.is_some() {
            self.position += 1;
        }
        Ok(item)
    }

    fn reset(&mut self) -> Result<(), CollectionError> {
        let inner = self.owner.inner.lock();
        self.check_stamp(inner.stamp)?;
        if !self.owner.resettable {
            return Err(CollectionError::unsupported(
                codes::CURSOR_RESET_UNSUPPORTED,
                "stub cursor was configured without reset support",
            ));
        }
        self.position = 0;
        Ok(())
    }
}

/// 故意容忍并发修改的对照实现。
///
/// # 教案式说明
/// - **意图 (Why)**：快速失败协议的判定力需要反向验证——一个从不上报
///   `InvalidState` 的实现必须在防挂起上限内被电池判负。
/// - **逻辑 (How)**：游标按位置实时读取底层 `Vec`，对结构变化不做任何检测；其余操作
///   与可变的 [`StubCollection`] 一致（不去重、不只读）。
/// - **契约 (What)**：仅用于负向测试，不应作为任何契约行为的参考。
pub struct TolerantCollection<T> {
    items: Mutex<Vec<T>>,
}

impl<T> TolerantCollection<T> {
    /// 构造空集合。
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }
}

impl<T> Default for TolerantCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for TolerantCollection<T>
where
    T: Clone + PartialEq + Debug + Display,
{
    type Elem = T;
    type Cursor<'a>
        = TolerantCursor<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.items.lock().len()
    }

    fn add(&self, value: T) -> Result<(), CollectionError> {
        self.items.lock().push(value);
        Ok(())
    }

    fn remove(&self, value: &T) -> Result<bool, CollectionError> {
        let mut items = self.items.lock();
        match items.iter().position(|item| item == value) {
            Some(index) => {
                items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn contains(&self, value: &T) -> bool {
        self.items.lock().contains(value)
    }

    fn clear(&self) -> Result<(), CollectionError> {
        self.items.lock().clear();
        Ok(())
    }

    fn copy_into(&self, target: Option<&mut [T]>, offset: isize) -> Result<(), CollectionError> {
        copy_items(&self.items.lock(), target, offset)
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn render(&self) -> String {
        format!("TolerantCollection(len = {})", self.items.lock().len())
    }

    fn cursor(&self) -> TolerantCursor<'_, T> {
        TolerantCursor {
            owner: self,
            position: 0,
        }
    }
}

/// [`TolerantCollection`] 的游标：实时读取、从不失效。
pub struct TolerantCursor<'a, T> {
    owner: &'a TolerantCollection<T>,
    position: usize,
}

impl<'a, T> CollectionCursor for TolerantCursor<'a, T>
where
    T: Clone + PartialEq + Debug + Display,
{
    type Elem = T;

    fn advance(&mut self) -> Result<Option<T>, CollectionError> {
        let items = self.owner.items.lock();
        let item = items.get(self.position).cloned();
        if item.is_some() {
            self.position += 1;
        }
        Ok(item)
    }

    fn reset(&mut self) -> Result<(), CollectionError> {
        self.position = 0;
        Ok(())
    }
}

/// 两个桩共享的批量复制实现，语义见 [`Collection::copy_into`]。
fn copy_items<T: Clone>(
    items: &[T],
    target: Option<&mut [T]>,
    offset: isize,
) -> Result<(), CollectionError> {
    let Some(target) = target else {
        return Err(CollectionError::invalid_argument(
            codes::COPY_NO_TARGET,
            "copy target buffer is missing",
        ));
    };
    if offset < 0 {
        return Err(CollectionError::out_of_range(
            codes::COPY_NEGATIVE_OFFSET,
            format!("copy offset must be non-negative, got {offset}"),
        ));
    }
    let offset = offset as usize;
    if target.len() < offset || target.len() - offset < items.len() {
        return Err(CollectionError::invalid_argument(
            codes::COPY_SHORT_TARGET,
            format!(
                "target holds {} slots from offset {offset}, need {}",
                target.len().saturating_sub(offset),
                items.len()
            ),
        ));
    }
    for (slot, item) in target[offset..].iter_mut().zip(items.iter()) {
        *slot = item.clone();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::sample::SampleData;

    fn mutable_stub() -> StubCollection<i32> {
        StubCollection::with_options(CollectionOptions::empty())
    }

    #[test]
    fn add_remove_track_count() {
        let c = mutable_stub();
        c.add(1).unwrap();
        c.add(1).unwrap();
        assert_eq!(c.len(), 2);
        assert!(c.remove(&1).unwrap());
        assert_eq!(c.len(), 1);
        assert!(c.contains(&1), "仅应移除一份重复元素");
        assert!(!c.remove(&7).unwrap());
    }

    #[test]
    fn unique_add_coalesces_duplicates() {
        let c = StubCollection::with_options(
            CollectionOptions::empty().set(CollectionOptions::UNIQUE, true),
        );
        c.add(5).unwrap();
        c.add(5).unwrap();
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn read_only_rejects_mutation_without_state_change() {
        let c = StubCollection::seeded(
            CollectionOptions::empty().set(CollectionOptions::READ_ONLY, true),
            vec![1, 2, 3],
        );
        assert!(c.is_read_only());
        for err in [
            c.add(9).unwrap_err(),
            c.remove(&1).unwrap_err(),
            c.clear().unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
            assert_eq!(err.code(), codes::READ_ONLY);
        }
        assert_eq!(c.len(), 3, "被拒绝的变更不得改变状态");
    }

    #[test]
    fn render_obeys_print_items_option() {
        let plain = StubCollection::seeded(CollectionOptions::empty(), vec![1, 2]);
        assert_eq!(plain.render(), "StubCollection(len = 2)");

        let printed = StubCollection::seeded(
            CollectionOptions::empty().set(CollectionOptions::TO_STRING_PRINT_ITEMS, true),
            vec![1, 2],
        );
        assert_eq!(printed.render(), "[1, 2]");
    }

    #[test]
    fn cursor_walks_then_exhausts() {
        let c = StubCollection::seeded(CollectionOptions::empty(), vec![1, 2]);
        let mut cursor = c.cursor();
        assert_eq!(cursor.advance().unwrap(), Some(1));
        assert_eq!(cursor.advance().unwrap(), Some(2));
        assert_eq!(cursor.advance().unwrap(), None);
        cursor.reset().unwrap();
        assert_eq!(cursor.advance().unwrap(), Some(1));
    }

    #[test]
    fn cursor_invalidation_is_sticky() {
        let c = mutable_stub();
        c.add(i32::one()).unwrap();
        c.add(i32::two()).unwrap();
        let mut cursor = c.cursor();
        assert_eq!(cursor.advance().unwrap(), Some(1));
        c.add(i32::three()).unwrap();
        assert_eq!(cursor.advance().unwrap_err().kind(), ErrorKind::InvalidState);
        assert_eq!(cursor.advance().unwrap_err().kind(), ErrorKind::InvalidState);
        assert_eq!(cursor.reset().unwrap_err().kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn noop_mutations_do_not_invalidate() {
        let c = StubCollection::with_options(
            CollectionOptions::empty().set(CollectionOptions::UNIQUE, true),
        );
        c.add(1).unwrap();
        let mut cursor = c.cursor();
        c.add(1).unwrap();
        assert!(!c.remove(&9).unwrap());
        assert_eq!(cursor.advance().unwrap(), Some(1), "无操作变更不应使游标失效");
    }

    #[test]
    fn non_resettable_cursor_reports_unsupported() {
        let c = StubCollection::non_resettable(CollectionOptions::empty());
        c.add(1).unwrap();
        let mut cursor = c.cursor();
        let err = cursor.reset().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert_eq!(err.code(), codes::CURSOR_RESET_UNSUPPORTED);
        // 失效优先级高于“不支持重置”。
        c.add(2).unwrap();
        assert_eq!(cursor.reset().unwrap_err().kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn copy_into_validates_target_and_offset() {
        let c = StubCollection::seeded(CollectionOptions::empty(), vec![1, 2, 3]);
        assert_eq!(
            c.copy_into(None, 0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        let mut target = vec![0; 3];
        assert_eq!(
            c.copy_into(Some(&mut target), -1).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            c.copy_into(Some(&mut target), 1).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        c.copy_into(Some(&mut target), 0).unwrap();
        assert_eq!(target, vec![1, 2, 3]);
    }

    #[test]
    fn tolerant_cursor_ignores_modification() {
        let c = TolerantCollection::new();
        c.add(1).unwrap();
        c.add(2).unwrap();
        let mut cursor = c.cursor();
        assert_eq!(cursor.advance().unwrap(), Some(1));
        c.add(3).unwrap();
        assert_eq!(cursor.advance().unwrap(), Some(2));
        assert_eq!(cursor.advance().unwrap(), Some(3));
        assert_eq!(cursor.advance().unwrap(), None);
    }
}
