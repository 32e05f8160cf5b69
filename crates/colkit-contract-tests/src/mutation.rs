//! “变更”主题：加入、移除、清空与只读自述。
//!
//! `UnsupportedOperation` 在本主题中是“可能预期”的：仅当夹具声明 `READ_ONLY` 时才
//! 解释为合格表现，裁决统一经由 [`apply_mutation`] 完成——这正是区分“正确的只读集合”
//! 与“连清空都做不到的缺陷可变集合”的分水岭。

use colkit_core::{Collection, CollectionOptions, SampleData};

use crate::case::{CaseOutcome, TckCase, TckSuite};
use crate::fixture::CollectionFixture;
use crate::support::{MutationStep, apply_mutation, assert_contains_all, assert_contains_none};

/// 返回“变更”主题的测试套件。
pub(crate) fn suite<F: CollectionFixture>() -> TckSuite<F> {
    TckSuite {
        name: "mutation",
        cases: vec![
            TckCase {
                name: "clear_empties_the_collection_when_supported",
                run: clear_empties_the_collection_when_supported::<F>,
            },
            TckCase {
                name: "add_all_samples_successfully_when_supported",
                run: add_all_samples_successfully_when_supported::<F>,
            },
            TckCase {
                name: "add_duplicate_successfully_when_supported",
                run: add_duplicate_successfully_when_supported::<F>,
            },
            TckCase {
                name: "remove_all_samples_successfully_when_supported",
                run: remove_all_samples_successfully_when_supported::<F>,
            },
            TckCase {
                name: "remove_only_one_of_duplicates_when_supported",
                run: remove_only_one_of_duplicates_when_supported::<F>,
            },
            TckCase {
                name: "is_read_only_as_expected",
                run: is_read_only_as_expected::<F>,
            },
        ],
    }
}

/// 清空填充集合后计数归零且不再包含任何样本；只读集合的拒绝走兜底。
fn clear_empties_the_collection_when_supported<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection_filled();
    match apply_mutation(fixture.options(), collection.clear()) {
        MutationStep::Done(()) => {}
        MutationStep::ReadOnlyRejected => return CaseOutcome::Passed,
    }
    assert_eq!(collection.len(), 0, "清空后计数应归零");
    assert_contains_none(&collection, &fixture.samples());
    CaseOutcome::Passed
}

/// 批量加入全部样本：要么全部成功（计数与包含性齐备），要么仅在只读下整体拒绝。
fn add_all_samples_successfully_when_supported<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection();
    for sample in fixture.samples() {
        match apply_mutation(fixture.options(), collection.add(sample)) {
            MutationStep::Done(()) => {}
            MutationStep::ReadOnlyRejected => return CaseOutcome::Passed,
        }
    }
    assert_eq!(
        collection.len(),
        fixture.sample_size(),
        "批量加入后计数应等于样本容量"
    );
    assert_contains_all(&collection, &fixture.samples());
    CaseOutcome::Passed
}

/// 同一元素加入两次应把计数从 1 推到 2；去重集合与零容量样本集跳过。
fn add_duplicate_successfully_when_supported<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    if fixture.options().has(CollectionOptions::UNIQUE) {
        return CaseOutcome::Skipped("集合要求元素唯一，跳过重复元素用例");
    }
    if fixture.sample_size() == 0 {
        return CaseOutcome::Skipped("样本容量为零，跳过重复元素用例");
    }
    let collection = fixture.new_collection();
    let sample = F::Elem::make_data(0);
    match apply_mutation(fixture.options(), collection.add(sample.clone())) {
        MutationStep::Done(()) => {}
        MutationStep::ReadOnlyRejected => return CaseOutcome::Passed,
    }
    assert_eq!(collection.len(), 1);
    assert!(collection.contains(&sample));
    collection
        .add(sample.clone())
        .unwrap_or_else(|err| panic!("首次加入成功的集合不应拒绝重复加入：{err}"));
    assert_eq!(collection.len(), 2, "重复加入后计数应为 2");
    assert!(collection.contains(&sample));
    CaseOutcome::Passed
}

/// 全量移除扫描：先奇数索引后偶数索引，每个在场样本恰好换取一次 true，
/// 已移除或从未加入的元素返回 false；扫描结束后不再包含任何样本。
fn remove_all_samples_successfully_when_supported<F: CollectionFixture>(
    fixture: &F,
) -> CaseOutcome {
    let collection = fixture.new_collection_filled();
    assert_eq!(collection.len(), fixture.sample_size());
    assert_contains_all(&collection, &fixture.samples());

    let size = fixture.sample_size();
    for index in (1..size).step_by(2) {
        let item = F::Elem::make_data(index as i64);
        match apply_mutation(fixture.options(), collection.remove(&item)) {
            MutationStep::Done(removed) => {
                assert!(removed, "首次移除在场样本 {item:?} 应返回 true")
            }
            MutationStep::ReadOnlyRejected => return CaseOutcome::Passed,
        }
    }
    for index in (0..size).step_by(2) {
        let present = F::Elem::make_data(index as i64);
        let absent = F::Elem::make_data(index as i64 + 1);
        match apply_mutation(fixture.options(), collection.remove(&present)) {
            MutationStep::Done(removed) => {
                assert!(removed, "首次移除在场样本 {present:?} 应返回 true")
            }
            MutationStep::ReadOnlyRejected => return CaseOutcome::Passed,
        }
        match apply_mutation(fixture.options(), collection.remove(&absent)) {
            MutationStep::Done(removed) => {
                assert!(!removed, "移除缺席元素 {absent:?} 应返回 false")
            }
            MutationStep::ReadOnlyRejected => return CaseOutcome::Passed,
        }
    }
    assert_contains_none(&collection, &fixture.samples());
    CaseOutcome::Passed
}

/// 加入两份同一元素后移除一次：计数恰好减一，元素仍被包含；去重集合跳过。
fn remove_only_one_of_duplicates_when_supported<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    if fixture.options().has(CollectionOptions::UNIQUE) {
        return CaseOutcome::Skipped("集合要求元素唯一，跳过重复元素用例");
    }
    let collection = fixture.new_collection();
    let sample = F::Elem::one();
    match apply_mutation(fixture.options(), collection.add(sample.clone())) {
        MutationStep::Done(()) => {}
        MutationStep::ReadOnlyRejected => return CaseOutcome::Passed,
    }
    assert_eq!(collection.len(), 1);
    assert!(collection.contains(&sample));
    collection
        .add(sample.clone())
        .unwrap_or_else(|err| panic!("首次加入成功的集合不应拒绝重复加入：{err}"));
    assert_eq!(collection.len(), 2);
    let removed = collection
        .remove(&sample)
        .unwrap_or_else(|err| panic!("可变集合的移除不应失败：{err}"));
    assert!(removed, "移除在场元素应返回 true");
    assert!(
        collection.contains(&sample),
        "仍有一份重复元素在场，包含判定不应翻转"
    );
    assert_eq!(collection.len(), 1, "移除一份重复元素应使计数恰好减一");
    CaseOutcome::Passed
}

/// 新建集合的只读自述必须与夹具声明的 `READ_ONLY` 选项一致。
fn is_read_only_as_expected<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection();
    assert_eq!(
        collection.is_read_only(),
        fixture.options().has(CollectionOptions::READ_ONLY),
        "集合的只读自述与夹具选项不一致"
    );
    CaseOutcome::Passed
}
