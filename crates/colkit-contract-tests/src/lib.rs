//! colkit 集合契约测试套件（TCK）入口。
//!
//! # 教案式综述（Why / How / What）
//! - **为什么存在**：每一种“类集合”实现都要回答同一批行为问题——计数是否准确、批量
//!   复制的边界校验是否齐全、变更与去重策略是否自洽、遍历是否在结构变更时快速失败。
//!   本 crate 把这批校验固化为六个主题套件，第三方实现只需提供一个
//!   [`CollectionFixture`] 夹具即可一键回归。
//! - **如何集成**：在目标仓库的 `tests` 目录引入 `#[colkit_tck]` 宏（或直接调用
//!   `run_*` 入口函数），宏会为指定夹具生成标准的 Rust 测试；支持以 `suites(...)`
//!   选择性启用子套件，满足增量验证需求。
//! - **测试对象**：所有用例均以 `colkit-core` 暴露的 [`Collection`]
//!   契约为边界；用例对实现内部结构不做任何假设。
//!
//! # 契约说明（What）
//! - **输入要求**：夹具类型需实现 [`CollectionFixture`]（宏路径还要求 `Default`）；
//! - **输出保证**：全部套件通过即可确信实现满足契约对计数、包含性、批量复制、变更、
//!   只读与快速失败遍历的显式约束；
//! - **三态结论**：用例以 panic 表达失败、以 [`CaseOutcome::Skipped`]
//!   表达主动跳过，两者在 [`SuiteReport`] 中可明确区分——跳过既不是通过也不是失败。
//!
//! # 风险提示（Trade-offs）
//! - 套件在单线程内以“推进游标 / 变更集合”交错调用的方式模拟并发修改，不对真正的
//!   多线程安全性作任何断言；
//! - 快速失败协议的防挂起上限默认 64 次推进，可按元素构造成本在夹具上调整。
//!
//! # 模块结构
//! - `case` 模块：用例与套件的元信息结构体、统一执行辅助函数与可序列化报告；
//! - 子模块 `counting`、`copying`、`membership`、`mutation`、`iteration`、`rendering`
//!   分别实现六大主题的实际断言逻辑；
//! - 顶层提供 `run_*` 入口与 `#[colkit_tck]` 宏 re-export，供外部直接调用。

mod counting;
mod copying;
pub mod fixture;
mod iteration;
mod membership;
mod mutation;
mod rendering;
mod support;

pub use case::{CaseOutcome, SkippedCase, SuiteReport, TckCase, TckReport, TckSuite, run_suite};
pub use colkit_contract_tests_macros::colkit_tck;
pub use fixture::CollectionFixture;
pub use support::{MutationStep, apply_mutation, skip_unless};

mod case {
    use super::support;
    use std::panic;

    /// 单个用例的三态结论：失败以 panic 表达，不进入此枚举。
    ///
    /// # 教案式说明
    /// - **意图 (Why)**：部分用例在特定能力组合下不适用（如去重集合的重复元素用例），
    ///   必须以区别于通过/失败的第三种结论上报，否则回归统计会误判覆盖率。
    /// - **契约 (What)**：`Skipped` 携带 `'static` 跳过原因，供报告与日志引用。
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum CaseOutcome {
        /// 用例全部断言通过。
        Passed,
        /// 用例主动跳过，原因随值携带。
        Skipped(&'static str),
    }

    /// 表示单个 TCK 用例的元信息。
    ///
    /// # 教案式说明
    /// - **意图 (Why)**：以结构体封装测试函数与名称，便于统一遍历、打印上下文信息。
    /// - **逻辑 (How)**：`name` 采用 `'static` 字符串，`run` 为接收夹具引用的函数
    ///   指针；电池对夹具类型泛型，套件因此在运行期组装。
    /// - **契约 (What)**：`run` 必须在失败时 panic，主动跳过时返回
    ///   [`CaseOutcome::Skipped`]；名称会用于错误提示。
    pub struct TckCase<F> {
        /// 用例的人类可读名称。
        pub name: &'static str,
        /// 实际执行的断言逻辑。
        pub run: fn(&F) -> CaseOutcome,
    }

    impl<F> Clone for TckCase<F> {
        fn clone(&self) -> Self {
            *self
        }
    }

    impl<F> Copy for TckCase<F> {}

    /// 代表同一主题的一组 TCK 用例。
    ///
    /// # 契约说明（What）
    /// - `cases` 不允许为空，名称与 `run_*` 入口函数保持一一对应。
    pub struct TckSuite<F> {
        /// 套件名称，供报告与宏展开使用。
        pub name: &'static str,
        /// 归属该套件的用例集合。
        pub cases: Vec<TckCase<F>>,
    }

    /// 报告中的一条跳过记录。
    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
    pub struct SkippedCase {
        /// 被跳过的用例名称。
        pub case: &'static str,
        /// 跳过原因。
        pub reason: &'static str,
    }

    /// 单个套件的执行报告。失败不会出现在报告中——失败直接以带上下文的 panic 中止。
    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
    pub struct SuiteReport {
        /// 套件名称。
        pub suite: &'static str,
        /// 通过的用例数量。
        pub passed: usize,
        /// 主动跳过的用例清单。
        pub skipped: Vec<SkippedCase>,
    }

    /// 全量电池的聚合报告。
    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
    pub struct TckReport {
        /// 各套件报告，顺序与执行顺序一致。
        pub suites: Vec<SuiteReport>,
    }

    impl TckReport {
        /// 通过用例总数。
        pub fn total_passed(&self) -> usize {
            self.suites.iter().map(|suite| suite.passed).sum()
        }

        /// 跳过用例总数。
        pub fn total_skipped(&self) -> usize {
            self.suites.iter().map(|suite| suite.skipped.len()).sum()
        }
    }

    /// 在捕获 panic 的前提下执行整个套件。
    ///
    /// # 教案式说明
    /// - **意图 (Why)**：为外部入口与宏提供统一执行路径，一旦用例失败即可附加
    ///   “套件/用例”上下文后重新 panic；通过与跳过则汇入报告。
    /// - **逻辑 (How)**：遍历 `cases`，借助 [`panic::catch_unwind`] 捕获 panic，将
    ///   payload 交给 `support::panic_with_context` 二次抛出。
    /// - **契约 (What)**：`suite.cases` 非空；若所有用例均通过或跳过，返回
    ///   [`SuiteReport`]；任一失败则 panic。
    pub fn run_suite<F>(suite: &TckSuite<F>, fixture: &F) -> SuiteReport {
        assert!(!suite.cases.is_empty(), "TCK 套件不应为空");
        let mut report = SuiteReport {
            suite: suite.name,
            passed: 0,
            skipped: Vec::new(),
        };
        for case in &suite.cases {
            let outcome = panic::catch_unwind(panic::AssertUnwindSafe(|| (case.run)(fixture)));
            match outcome {
                Ok(CaseOutcome::Passed) => report.passed += 1,
                Ok(CaseOutcome::Skipped(reason)) => report.skipped.push(SkippedCase {
                    case: case.name,
                    reason,
                }),
                Err(payload) => support::panic_with_context(suite.name, case.name, payload),
            }
        }
        report
    }
}

/// 运行“计数”主题的全部用例，验证空集合与填充集合的计数准确性。
pub fn run_counting_suite<F: CollectionFixture>(fixture: &F) -> SuiteReport {
    run_suite(&counting::suite::<F>(), fixture)
}

/// 运行“批量复制”主题的全部用例，覆盖目标缺失、负偏移与容量不足的边界校验。
pub fn run_copying_suite<F: CollectionFixture>(fixture: &F) -> SuiteReport {
    run_suite(&copying::suite::<F>(), fixture)
}

/// 运行“包含性”主题的全部用例，验证空/满集合的成员判定与移除后的翻转。
pub fn run_membership_suite<F: CollectionFixture>(fixture: &F) -> SuiteReport {
    run_suite(&membership::suite::<F>(), fixture)
}

/// 运行“变更”主题的全部用例，覆盖清空、批量加入、重复元素、全量移除与只读自述。
pub fn run_mutation_suite<F: CollectionFixture>(fixture: &F) -> SuiteReport {
    run_suite(&mutation::suite::<F>(), fixture)
}

/// 运行“遍历”主题的全部用例，包含完整性校验与快速失败协议。
///
/// # 教案式说明
/// - **意图 (Why)**：遍历是唯一带协议性（多步交错）的主题，集中执行可保证移除型与
///   加入型两种变更动作都被覆盖。
/// - **流程 (How)**：依序运行完整性用例与两个快速失败用例，由统一的 `run_suite`
///   提供 panic 上下文包装。
/// - **契约 (What)**：执行成功代表实现的游标在结构变更下快速失败且失效粘性跨越重置。
pub fn run_iteration_suite<F: CollectionFixture>(fixture: &F) -> SuiteReport {
    run_suite(&iteration::suite::<F>(), fixture)
}

/// 运行“文本渲染”主题的全部用例；未启用 `TO_STRING_PRINT_ITEMS` 时整体报告跳过。
pub fn run_rendering_suite<F: CollectionFixture>(fixture: &F) -> SuiteReport {
    run_suite(&rendering::suite::<F>(), fixture)
}

/// 按固定顺序运行全部六个主题套件并聚合报告。
///
/// # 契约说明（What）
/// - 顺序与 `#[colkit_tck]` 宏的默认展开顺序一致，便于比对日志；
/// - 任一用例失败即 panic，报告仅在全量通过/跳过时返回。
pub fn run_all_suites<F: CollectionFixture>(fixture: &F) -> TckReport {
    TckReport {
        suites: vec![
            run_counting_suite(fixture),
            run_copying_suite(fixture),
            run_membership_suite(fixture),
            run_mutation_suite(fixture),
            run_iteration_suite(fixture),
            run_rendering_suite(fixture),
        ],
    }
}
