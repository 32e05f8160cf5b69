//! 测试夹具契约：测试电池与被测集合之间唯一的装配点。
//!
//! # 设计背景（Why）
//! - 电池对被测实现的全部了解浓缩为四件事：如何构造空集合、生效的能力选项、样本容量
//!   与防挂起上限。其余（样本序列、预填充集合）均可由缺省实现推导。
//! - 样本序列在每个用例内部按需重新生成：[`SampleData`] 保证确定性，因此“逐用例生成”
//!   与“生成一次共享”产出完全相同的序列，却免去了跨用例共享可变状态的风险。
//!
//! # 契约说明（What）
//! - `new_collection` 必须返回空集合；集合归创建它的用例独占，用例结束即弃；
//! - 选项值在夹具生命周期内不可变；
//! - 只读夹具必须覆写 [`new_collection_filled`](CollectionFixture::new_collection_filled)，
//!   因为缺省实现通过 `add` 填充样本。

use core::fmt::{Debug, Display};

use colkit_core::{Collection, CollectionOptions, SampleData};

/// 接入一致性电池所需实现的夹具契约。
///
/// # 教案式说明
/// - **意图 (Why)**：以最小装配面换取完整电池——实现方只需给出工厂与选项。
/// - **逻辑 (How)**：`samples` 与 `new_collection_filled` 为缺省实现；`sample_size`
///   与 `anti_hang_limit` 提供可覆写的缺省值。
/// - **契约 (What)**：
///   - `sample_size` 决定样本集大小，在单个用例期间视为常量；
///   - `anti_hang_limit` 是快速失败协议的迭代上限，仅约束推进次数，与集合规模无关；
///     取值应远大于协议中种子集合的元素数（个位数），默认 64。
pub trait CollectionFixture {
    /// 元素类型，必须具备样本生成能力。
    type Elem: SampleData + Clone + PartialEq + Debug + Display;

    /// 被测集合类型。
    type Coll: Collection<Elem = Self::Elem>;

    /// 构造一个新的空集合。
    fn new_collection(&self) -> Self::Coll;

    /// 返回本夹具生效的能力选项。
    fn options(&self) -> CollectionOptions;

    /// 样本集大小。
    fn sample_size(&self) -> usize {
        9
    }

    /// 快速失败协议的防挂起上限。
    fn anti_hang_limit(&self) -> usize {
        64
    }

    /// 生成样本序列：`make_data(0..sample_size)`。
    fn samples(&self) -> Vec<Self::Elem> {
        Self::Elem::make_test_array(self.sample_size())
    }

    /// 构造填充了全部样本的集合。
    ///
    /// # 契约说明（What）
    /// - 缺省实现逐个 `add` 样本，填充失败视为装配错误直接 panic；
    /// - 只读夹具必须覆写本方法，改由预置途径构造。
    fn new_collection_filled(&self) -> Self::Coll {
        let collection = self.new_collection();
        for sample in self.samples() {
            if let Err(err) = collection.add(sample) {
                panic!("预填充样本失败，只读夹具应覆写 new_collection_filled：{err}");
            }
        }
        collection
    }
}
