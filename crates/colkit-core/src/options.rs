//! 能力选项位集：同一套测试电池适配多种集合契约的配置载体。
//!
//! # 设计背景（Why）
//! - 被测集合在少数正交维度上存在契约差异（是否去重、是否只读、渲染是否包含元素）。
//!   若按维度派生测试类型，组合数量会随维度增加而爆炸；以不可变位集描述差异，
//!   测试电池只需在运行期查询标志位即可调整预期。
//! - 选项一经绑定到某个测试夹具便不再变化，函数式更新（`set` 返回新值）从类型层面
//!   杜绝了跨用例的配置泄漏。
//!
//! # 逻辑解析（How）
//! - 内部为单个 `u32`，掩码以关联常量暴露；`set` 按位或/与后返回新值，接收者不变。
//!
//! # 契约说明（What）
//! - `Copy` 值语义；`Default` 等价于 [`CollectionOptions::empty`]；
//! - 未登记的比特位保留为 0，除非调用方与测试电池另行约定语义。

/// 集合能力选项的不可变位集。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CollectionOptions {
    bits: u32,
}

impl CollectionOptions {
    /// 集合保证元素唯一：重复元素相关用例应跳过而非断言。
    pub const UNIQUE: u32 = 0x01;
    /// 集合为只读：所有变更操作预期以 `UnsupportedOperation` 拒绝。
    pub const READ_ONLY: u32 = 0x02;
    /// 集合的文本渲染必须包含每个元素的文本形式。
    pub const TO_STRING_PRINT_ITEMS: u32 = 0x04;

    /// 以原始比特构造选项集合。
    pub const fn new(bits: u32) -> Self {
        Self { bits }
    }

    /// 构造空选项集合。
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// 判断指定标志位是否被设置。
    pub const fn has(&self, flag: u32) -> bool {
        (self.bits & flag) != 0
    }

    /// 返回设置或清除指定标志位后的新选项值。
    ///
    /// # 契约说明（What）
    /// - **后置条件**：接收者保持不变；返回值与接收者仅在 `flag` 相关位上存在差异。
    #[must_use = "函数式更新不会修改接收者，忽略返回值等于没有设置"]
    pub const fn set(self, flag: u32, enabled: bool) -> Self {
        if enabled {
            Self {
                bits: self.bits | flag,
            }
        } else {
            Self {
                bits: self.bits & !flag,
            }
        }
    }

    /// 获取底层比特值。
    pub const fn bits(&self) -> u32 {
        self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_flags() {
        let options = CollectionOptions::empty();
        assert!(!options.has(CollectionOptions::UNIQUE));
        assert!(!options.has(CollectionOptions::READ_ONLY));
        assert!(!options.has(CollectionOptions::TO_STRING_PRINT_ITEMS));
        assert_eq!(options.bits(), 0);
    }

    #[test]
    fn set_is_functional_update() {
        let base = CollectionOptions::empty();
        let unique = base.set(CollectionOptions::UNIQUE, true);
        assert!(unique.has(CollectionOptions::UNIQUE));
        assert!(!base.has(CollectionOptions::UNIQUE), "接收者不得被修改");
    }

    #[test]
    fn set_false_clears_only_target_flag() {
        let both = CollectionOptions::empty()
            .set(CollectionOptions::UNIQUE, true)
            .set(CollectionOptions::READ_ONLY, true);
        let cleared = both.set(CollectionOptions::UNIQUE, false);
        assert!(!cleared.has(CollectionOptions::UNIQUE));
        assert!(cleared.has(CollectionOptions::READ_ONLY));
    }

    #[test]
    fn default_equals_empty() {
        assert_eq!(CollectionOptions::default(), CollectionOptions::empty());
    }
}
