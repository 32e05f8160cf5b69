//! 确定性样本数据提供者：一致性测试的元素之源。
//!
//! # 设计背景（Why）
//! - 测试电池需要在互不相关的用例之间引用“同一批元素”，且不依赖随机源；否则失败
//!   无法复现，跨用例断言也无从谈起。
//! - 以整数索引驱动的纯函数即可满足：`make_data(i)` 对同一 `i` 永远产出同一元素，
//!   对不同 `i` 产出互异元素；若干小索引被保留为具名哨兵（zero/one/two/three 及负数
//!   变体），供用例在不依赖样本容量的前提下引用已知元素。
//!
//! # 契约说明（What）
//! - 生成永不失败：任何索引与数量均有定义，契约面不出现 `Result`；
//! - 在测试电池涉及的索引范围内，`make_data` 必须单射。

/// 可作为一致性测试样本的元素类型契约。
///
/// # 教案式说明
/// - **意图 (Why)**：把“如何造出第 i 个样本”从测试电池中剥离，使同一电池可以作用于
///   整数、字符串等任意元素类型。
/// - **逻辑 (How)**：`make_data` 为必选项；数组生成与哨兵访问器均为缺省实现，统一
///   委托到固定索引处的 `make_data`。
/// - **契约 (What)**：实现必须保证确定性与（测试范围内的）单射性；负索引同样有定义。
pub trait SampleData: Sized {
    /// 生成索引 `index` 对应的样本元素。确定性纯函数，永不失败。
    fn make_data(index: i64) -> Self;

    /// 生成 `make_data(0..count)` 构成的有序样本序列。
    fn make_test_array(count: usize) -> Vec<Self> {
        (0..count as i64).map(Self::make_data).collect()
    }

    /// 索引 0 处的哨兵元素。
    fn zero() -> Self {
        Self::make_data(0)
    }

    /// 索引 1 处的哨兵元素。
    fn one() -> Self {
        Self::make_data(1)
    }

    /// 索引 2 处的哨兵元素。
    fn two() -> Self {
        Self::make_data(2)
    }

    /// 索引 3 处的哨兵元素。
    fn three() -> Self {
        Self::make_data(3)
    }

    /// 索引 -1 处的哨兵元素。
    fn minus_one() -> Self {
        Self::make_data(-1)
    }

    /// 索引 -2 处的哨兵元素。
    fn minus_two() -> Self {
        Self::make_data(-2)
    }

    /// 索引 -3 处的哨兵元素。
    fn minus_three() -> Self {
        Self::make_data(-3)
    }
}

impl SampleData for i32 {
    fn make_data(index: i64) -> Self {
        index as i32
    }
}

impl SampleData for i64 {
    fn make_data(index: i64) -> Self {
        index
    }
}

impl SampleData for u64 {
    /// ZigZag 折叠：负索引映射到奇数、非负索引映射到偶数，整个 `i64` 域上单射。
    fn make_data(index: i64) -> Self {
        ((index << 1) ^ (index >> 63)) as u64
    }
}

impl SampleData for String {
    fn make_data(index: i64) -> Self {
        index.to_string()
    }
}
