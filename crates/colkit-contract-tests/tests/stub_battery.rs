//! 集成示例：以参考桩集合演示第三方实现接入完整 TCK 的方式。
//!
//! # 使用说明
//! - 将 `colkit-contract-tests` 作为 dev-dependency，为被测集合提供一个实现
//!   `CollectionFixture + Default` 的夹具，引入 `#[colkit_tck]` 宏即可生成全部测试；
//! - 下方夹具覆盖默认、去重、只读、渲染与零样本五种能力组合，并额外断言各组合的
//!   报告统计（通过/跳过三态区分是电池对外承诺的可观测结论）。

use colkit_contract_tests::{CollectionFixture, colkit_tck, run_all_suites, run_mutation_suite};
use colkit_core::CollectionOptions;
use colkit_core::test_stubs::StubCollection;

mod fixtures {
    use colkit_contract_tests::CollectionFixture;
    use colkit_core::test_stubs::StubCollection;
    use colkit_core::CollectionOptions;

    /// 默认能力组合：可变、允许重复、不渲染元素。
    #[derive(Default)]
    pub struct DefaultFixture;

    impl CollectionFixture for DefaultFixture {
        type Elem = i32;
        type Coll = StubCollection<i32>;

        fn new_collection(&self) -> Self::Coll {
            StubCollection::with_options(self.options())
        }

        fn options(&self) -> CollectionOptions {
            CollectionOptions::empty()
        }
    }

    /// 去重集合：重复元素用例应报告跳过而非通过或失败。
    #[derive(Default)]
    pub struct UniqueFixture;

    impl CollectionFixture for UniqueFixture {
        type Elem = i32;
        type Coll = StubCollection<i32>;

        fn new_collection(&self) -> Self::Coll {
            StubCollection::with_options(self.options())
        }

        fn options(&self) -> CollectionOptions {
            CollectionOptions::empty().set(CollectionOptions::UNIQUE, true)
        }
    }

    /// 只读集合：变更用例全部经 `ReadOnly` 兜底通过。
    ///
    /// 缺省的填充路径走 `add`，只读集合必须改由预置途径构造，故覆写
    /// `new_collection_filled`。
    #[derive(Default)]
    pub struct ReadOnlyFixture;

    impl CollectionFixture for ReadOnlyFixture {
        type Elem = i32;
        type Coll = StubCollection<i32>;

        fn new_collection(&self) -> Self::Coll {
            StubCollection::with_options(self.options())
        }

        fn options(&self) -> CollectionOptions {
            CollectionOptions::empty().set(CollectionOptions::READ_ONLY, true)
        }

        fn new_collection_filled(&self) -> Self::Coll {
            StubCollection::seeded(self.options(), self.samples())
        }
    }

    /// 渲染包含元素的字符串集合：电池中唯一检验 `render` 内容的路径。
    #[derive(Default)]
    pub struct PrintingFixture;

    impl CollectionFixture for PrintingFixture {
        type Elem = String;
        type Coll = StubCollection<String>;

        fn new_collection(&self) -> Self::Coll {
            StubCollection::with_options(self.options())
        }

        fn options(&self) -> CollectionOptions {
            CollectionOptions::empty().set(CollectionOptions::TO_STRING_PRINT_ITEMS, true)
        }
    }

    /// 零样本容量：空集合路径（含零长复制的平凡成功）全部走通。
    #[derive(Default)]
    pub struct EmptyFixture;

    impl CollectionFixture for EmptyFixture {
        type Elem = i32;
        type Coll = StubCollection<i32>;

        fn new_collection(&self) -> Self::Coll {
            StubCollection::with_options(self.options())
        }

        fn options(&self) -> CollectionOptions {
            CollectionOptions::empty()
        }

        fn sample_size(&self) -> usize {
            0
        }
    }
}

#[colkit_tck(fixture = crate::fixtures::DefaultFixture)]
mod default_battery {}

#[colkit_tck(fixture = crate::fixtures::ReadOnlyFixture)]
mod read_only_battery {}

#[colkit_tck(fixture = crate::fixtures::PrintingFixture)]
mod printing_battery {}

#[colkit_tck(fixture = crate::fixtures::EmptyFixture)]
mod empty_battery {}

#[colkit_tck(fixture = crate::fixtures::UniqueFixture, suites(counting, mutation, iteration))]
mod unique_battery {}

/// 默认夹具：除渲染主题外全部执行，通过 18 例、跳过 1 例。
#[test]
fn default_fixture_report_accounts_for_rendering_skip() {
    let report = run_all_suites(&fixtures::DefaultFixture);
    assert_eq!(report.total_passed(), 18);
    assert_eq!(report.total_skipped(), 1);
    let rendering = report
        .suites
        .iter()
        .find(|suite| suite.suite == "rendering")
        .expect("报告应包含渲染套件");
    assert_eq!(rendering.skipped.len(), 1);
    assert_eq!(rendering.skipped[0].case, "render_contains_every_element");
}

/// 去重夹具：两个重复元素用例与渲染用例报告跳过——跳过不是通过，更不是失败。
#[test]
fn unique_fixture_skips_duplicate_cases() {
    let report = run_all_suites(&fixtures::UniqueFixture);
    assert_eq!(report.total_passed(), 16);
    assert_eq!(report.total_skipped(), 3);

    let mutation = run_mutation_suite(&fixtures::UniqueFixture);
    let skipped: Vec<&str> = mutation.skipped.iter().map(|entry| entry.case).collect();
    assert_eq!(
        skipped,
        [
            "add_duplicate_successfully_when_supported",
            "remove_only_one_of_duplicates_when_supported",
        ]
    );
    for entry in &mutation.skipped {
        assert!(entry.reason.contains("唯一"), "跳过原因应说明去重约束");
    }
}

/// 只读夹具：变更用例经兜底全部通过，报告中不产生额外跳过。
#[test]
fn read_only_fixture_passes_through_fallback() {
    let report = run_all_suites(&fixtures::ReadOnlyFixture);
    assert_eq!(report.total_passed(), 18);
    assert_eq!(report.total_skipped(), 1);
}

/// 渲染夹具：全部 19 例执行且零跳过。
#[test]
fn printing_fixture_runs_everything() {
    let report = run_all_suites(&fixtures::PrintingFixture);
    assert_eq!(report.total_passed(), 19);
    assert_eq!(report.total_skipped(), 0);
}

/// 零样本夹具：过短目标、重复元素与渲染三处报告跳过，其余全部通过。
#[test]
fn empty_fixture_reports_three_skips() {
    let report = run_all_suites(&fixtures::EmptyFixture);
    assert_eq!(report.total_passed(), 16);
    assert_eq!(report.total_skipped(), 3);
}

/// 聚合报告可序列化供 CI 快照归档。
#[test]
fn report_serializes_for_snapshotting() {
    let report = run_all_suites(&fixtures::DefaultFixture);
    let value = serde_json::to_value(&report).expect("报告应可序列化");
    let suites = value
        .get("suites")
        .and_then(|suites| suites.as_array())
        .expect("序列化结果应包含套件数组");
    assert_eq!(suites.len(), 6);
    assert_eq!(suites[0]["suite"], "counting");
    assert_eq!(suites[5]["suite"], "rendering");
    assert_eq!(suites[5]["skipped"][0]["case"], "render_contains_every_element");
}

/// 夹具的样本序列逐用例重新生成，但由确定性保证完全一致。
#[test]
fn fixture_samples_are_reproducible() {
    let fixture = fixtures::DefaultFixture;
    assert_eq!(fixture.samples(), fixture.samples());
    assert_eq!(fixture.samples().len(), fixture.sample_size());
}

/// 宏生成的入口与手工调用走同一条执行路径。
#[test]
fn manual_and_macro_paths_agree() {
    let manual = run_mutation_suite(&fixtures::DefaultFixture);
    assert_eq!(manual.suite, "mutation");
    assert_eq!(manual.passed, 6);
    assert!(manual.skipped.is_empty());
    // 宏路径见上方 default_battery 模块；此处仅确认入口可重复调用且无状态残留。
    let again = run_mutation_suite(&fixtures::DefaultFixture);
    assert_eq!(manual, again);
}

/// 只读桩在电池之外也应保持状态不变式：被拒绝的变更不得改变计数。
#[test]
fn rejected_mutations_leave_read_only_stub_untouched() {
    let collection = StubCollection::seeded(
        CollectionOptions::empty().set(CollectionOptions::READ_ONLY, true),
        vec![1, 2, 3],
    );
    use colkit_core::Collection;
    assert!(collection.add(4).is_err());
    assert!(collection.clear().is_err());
    assert_eq!(collection.len(), 3);
}
