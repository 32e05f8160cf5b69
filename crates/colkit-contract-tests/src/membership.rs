//! “包含性”主题：成员判定在空集合、填充集合与移除之后的正确性。

use colkit_core::{Collection, SampleData};

use crate::case::{CaseOutcome, TckCase, TckSuite};
use crate::fixture::CollectionFixture;
use crate::support::{MutationStep, apply_mutation, assert_contains_all, assert_contains_none};

/// 返回“包含性”主题的测试套件。
pub(crate) fn suite<F: CollectionFixture>() -> TckSuite<F> {
    TckSuite {
        name: "membership",
        cases: vec![
            TckCase {
                name: "contains_returns_false_on_empty_collection",
                run: contains_returns_false_on_empty_collection::<F>,
            },
            TckCase {
                name: "contains_sunny_day",
                run: contains_sunny_day::<F>,
            },
            TckCase {
                name: "contains_flips_false_after_remove",
                run: contains_flips_false_after_remove::<F>,
            },
        ],
    }
}

/// 空集合不包含任何样本，对 `zero` 哨兵同样返回否。
fn contains_returns_false_on_empty_collection<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection();
    assert!(
        !collection.contains(&F::Elem::zero()),
        "空集合不应包含 zero 哨兵"
    );
    assert_contains_none(&collection, &fixture.samples());
    CaseOutcome::Passed
}

/// 填充集合包含每个样本，且不包含索引等于样本容量处合成的“必然缺席”元素。
fn contains_sunny_day<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection_filled();
    assert_contains_all(&collection, &fixture.samples());
    let absent = F::Elem::make_data(fixture.sample_size() as i64);
    assert!(
        !collection.contains(&absent),
        "集合不应包含样本范围之外的元素 {absent:?}"
    );
    CaseOutcome::Passed
}

/// 被包含的元素一经移除，后续的包含判定必须翻转为否。
fn contains_flips_false_after_remove<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection_filled();
    for index in 0..fixture.sample_size() {
        let item = F::Elem::make_data(index as i64);
        assert!(collection.contains(&item), "移除前应包含样本 {item:?}");
        match apply_mutation(fixture.options(), collection.remove(&item)) {
            MutationStep::Done(removed) => {
                assert!(removed, "移除存在的样本 {item:?} 应返回 true")
            }
            MutationStep::ReadOnlyRejected => return CaseOutcome::Passed,
        }
        assert!(
            !collection.contains(&item),
            "移除后不应再包含样本 {item:?}"
        );
    }
    CaseOutcome::Passed
}
