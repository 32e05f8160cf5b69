//! colkit 集合契约一致性套件的稳定契约面。
//!
//! # 教案式综述（Why / How / What）
//! - **为什么存在**：针对“类集合”数据结构的行为验证不应随实现逐个手写。本 crate
//!   固化三件事——集合契约本身（[`contract`]）、对差异化契约建模的能力选项位集
//!   （[`options`]）、以及确定性的样本数据来源（[`sample`]）——使
//!   `colkit-contract-tests` 中的同一套测试电池能够作用于任意接入实现。
//! - **如何集成**：实现方为自己的集合类型实现 [`Collection`] 与其游标契约，再在测试
//!   侧提供一个夹具（工厂 + 选项 + 样本容量），即可继承完整电池；参考实现见
//!   [`test_stubs`]。
//! - **错误域**：所有契约层故障统一汇入 [`CollectionError`]，以 [`ErrorKind`] 表达
//!   处置分类，测试电池只依据分类分支。
//!
//! # 契约说明（What）
//! - **输入要求**：元素类型需可克隆、可比较相等、可 `Display` 渲染，除此之外不附加
//!   任何结构假设；
//! - **输出保证**：契约面不含异步与跨线程调度，所有调用同步完成；
//! - **非目标**：本 crate 不验证并发集合的线程安全性，也不提供基准测试设施。
//!
//! # 模块结构
//! - [`contract`]：`Collection` / `CollectionCursor` 契约；
//! - [`error`]：稳定错误域与错误码登记表；
//! - [`options`]：`CollectionOptions` 能力位集；
//! - [`sample`]：`SampleData` 样本提供者与哨兵访问器；
//! - [`test_stubs`]：可配置的参考集合与故意不合规的对照实现。

pub mod contract;
pub mod error;
pub mod options;
pub mod sample;
pub mod test_stubs;

pub use contract::{Collection, CollectionCursor};
pub use error::{CollectionError, ErrorKind};
pub use options::CollectionOptions;
pub use sample::SampleData;
