//! “批量复制”主题：`copy_into` 的边界校验与内容保真。
//!
//! 复制永远不是变更操作，因此本主题对只读集合同样全量生效，不走 `ReadOnly` 兜底。

use colkit_core::{Collection, CollectionError, ErrorKind, SampleData};

use crate::case::{CaseOutcome, TckCase, TckSuite};
use crate::fixture::CollectionFixture;
use crate::support::{assert_same_multiset, drain_cursor};

/// 返回“批量复制”主题的测试套件。
pub(crate) fn suite<F: CollectionFixture>() -> TckSuite<F> {
    TckSuite {
        name: "copying",
        cases: vec![
            TckCase {
                name: "copy_chokes_without_target",
                run: copy_chokes_without_target::<F>,
            },
            TckCase {
                name: "copy_chokes_with_negative_offset",
                run: copy_chokes_with_negative_offset::<F>,
            },
            TckCase {
                name: "copy_chokes_when_target_too_small",
                run: copy_chokes_when_target_too_small::<F>,
            },
            TckCase {
                name: "copy_into_exact_target_matches_contents",
                run: copy_into_exact_target_matches_contents::<F>,
            },
            TckCase {
                name: "copy_does_nothing_when_collection_is_empty",
                run: copy_does_nothing_when_collection_is_empty::<F>,
            },
        ],
    }
}

/// 以哨兵元素预填的占位缓冲区；内容无关紧要，复制成功后会被整体覆盖。
fn placeholder_buffer<F: CollectionFixture>(len: usize) -> Vec<F::Elem> {
    vec![F::Elem::zero(); len]
}

fn expect_rejection(
    outcome: Result<(), CollectionError>,
    kind: ErrorKind,
    what: &str,
) {
    match outcome {
        Ok(()) => panic!("{what} 应被拒绝"),
        Err(err) => assert_eq!(err.kind(), kind, "{what} 的拒绝分类不符：{err}"),
    }
}

/// 缺失目标缓冲区必须以 `InvalidArgument` 拒绝。
fn copy_chokes_without_target<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection_filled();
    expect_rejection(
        collection.copy_into(None, 0),
        ErrorKind::InvalidArgument,
        "缺失目标缓冲区的复制",
    );
    CaseOutcome::Passed
}

/// 负起始偏移必须以 `OutOfRange` 拒绝。
fn copy_chokes_with_negative_offset<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection_filled();
    let mut target = placeholder_buffer::<F>(collection.len());
    expect_rejection(
        collection.copy_into(Some(&mut target), -1),
        ErrorKind::OutOfRange,
        "负偏移的复制",
    );
    CaseOutcome::Passed
}

/// 目标容量不足必须以 `InvalidArgument` 拒绝：恰好短一格，以及偏移挤占导致的不足。
fn copy_chokes_when_target_too_small<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection_filled();
    if collection.is_empty() {
        return CaseOutcome::Skipped("空集合无法构造过短的目标缓冲区");
    }
    let mut short = placeholder_buffer::<F>(collection.len() - 1);
    expect_rejection(
        collection.copy_into(Some(&mut short), 0),
        ErrorKind::InvalidArgument,
        "短一格目标的复制",
    );
    let mut exact = placeholder_buffer::<F>(collection.len());
    expect_rejection(
        collection.copy_into(Some(&mut exact), 1),
        ErrorKind::InvalidArgument,
        "偏移挤占后容量不足的复制",
    );
    CaseOutcome::Passed
}

/// 恰好等长的目标在偏移 0 处复制后，内容须与集合构成相同的多重集合。
fn copy_into_exact_target_matches_contents<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection_filled();
    let mut target = placeholder_buffer::<F>(collection.len());
    collection
        .copy_into(Some(&mut target), 0)
        .unwrap_or_else(|err| panic!("等长目标的复制不应失败：{err}"));
    let contents = drain_cursor(&collection);
    assert_same_multiset(&contents, &target);
    CaseOutcome::Passed
}

/// 空集合复制进零长目标应平凡成功，不得抛出任何条件。
fn copy_does_nothing_when_collection_is_empty<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection();
    let mut target: Vec<F::Elem> = Vec::new();
    collection
        .copy_into(Some(&mut target), 0)
        .unwrap_or_else(|err| panic!("空集合的零长复制不应失败：{err}"));
    CaseOutcome::Passed
}
