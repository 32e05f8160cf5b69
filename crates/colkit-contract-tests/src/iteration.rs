//! “遍历”主题：完整性校验与快速失败协议。
//!
//! # 协议说明（What）
//! 快速失败协议验证被测集合在“遍历进行中发生结构性变更”时上报
//! `InvalidState`，且失效粘性地跨越重置尝试。协议以变更动作为参数执行两轮：
//! 一轮移除型（移除 `two` 哨兵）、一轮加入型（加入 `three` 哨兵）。
//!
//! 防挂起上限约束的是推进次数而非集合规模：合规实现最多两次推进即上报信号，
//! 对加入型动作下无限增长的不合规实现，上限保证电池在有限步内判负。

use colkit_core::{Collection, CollectionCursor, CollectionError, ErrorKind, SampleData};

use crate::case::{CaseOutcome, TckCase, TckSuite};
use crate::fixture::CollectionFixture;
use crate::support::{MutationStep, apply_mutation, assert_same_multiset, drain_cursor};

/// 返回“遍历”主题的测试套件。
pub(crate) fn suite<F: CollectionFixture>() -> TckSuite<F> {
    TckSuite {
        name: "iteration",
        cases: vec![
            TckCase {
                name: "cursor_visits_every_element",
                run: cursor_visits_every_element::<F>,
            },
            TckCase {
                name: "cursor_fails_when_element_removed",
                run: cursor_fails_when_element_removed::<F>,
            },
            TckCase {
                name: "cursor_fails_when_element_added",
                run: cursor_fails_when_element_added::<F>,
            },
        ],
    }
}

/// 遍历填充集合得到的序列必须与样本集构成相同的多重集合（顺序不敏感）。
fn cursor_visits_every_element<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let collection = fixture.new_collection_filled();
    let visited = drain_cursor(&collection);
    assert_same_multiset(&fixture.samples(), &visited);
    CaseOutcome::Passed
}

/// 移除型变更动作下的快速失败协议。
fn cursor_fails_when_element_removed<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    cursor_fails_when(fixture, &|collection: &F::Coll| {
        collection.remove(&F::Elem::two()).map(|_| ())
    })
}

/// 加入型变更动作下的快速失败协议。
fn cursor_fails_when_element_added<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    cursor_fails_when(fixture, &|collection: &F::Coll| {
        collection.add(F::Elem::three())
    })
}

/// 快速失败协议主体，以结构性变更动作为参数。
///
/// # 教案式说明
/// - **意图 (Why)**：并发修改的检测必须被确定性地激发与捕获——既不能漏判（合规实现
///   被误伤），也不能误判（不合规实现静默通过）。
/// - **逻辑 (How)**：
///   1. 新建集合并种入 `one`、`two` 两个哨兵；只读夹具在种子阶段即经兜底通过；
///   2. 取游标，交错执行“推进一步 / 施加变更”，以防挂起上限约束循环次数；
///   3. 上限耗尽或游标在无信号的情况下耗尽均判失败，收到的信号必须是 `InvalidState`；
///   4. 另起一个同样种子的集合，取新游标后施加一次变更，此时 `reset` 也必须上报
///      `InvalidState`——失效是粘性的，重置不能洗白；对 `reset` 回答
///      `UnsupportedOperation` 的实现，退而要求 `advance` 仍上报 `InvalidState`。
/// - **契约 (What)**：两阶段全部满足才返回通过。
fn cursor_fails_when<F: CollectionFixture>(
    fixture: &F,
    mutate: &dyn Fn(&F::Coll) -> Result<(), CollectionError>,
) -> CaseOutcome {
    let collection = fixture.new_collection();
    match apply_mutation(fixture.options(), collection.add(F::Elem::one())) {
        MutationStep::Done(()) => {}
        MutationStep::ReadOnlyRejected => return CaseOutcome::Passed,
    }
    collection
        .add(F::Elem::two())
        .unwrap_or_else(|err| panic!("种子哨兵加入失败：{err}"));

    let limit = fixture.anti_hang_limit();
    let mut cursor = collection.cursor();
    let mut signal: Option<CollectionError> = None;
    for _ in 0..limit {
        match cursor.advance() {
            Ok(Some(_)) => {
                if let Err(err) = mutate(&collection) {
                    panic!("协议的变更动作意外失败：{err}");
                }
            }
            Ok(None) => break,
            Err(err) => {
                signal = Some(err);
                break;
            }
        }
    }
    let err = signal
        .unwrap_or_else(|| panic!("{limit} 次推进内未观察到并发修改信号，实现疑似容忍结构变更"));
    assert_eq!(
        err.kind(),
        ErrorKind::InvalidState,
        "并发修改应以 InvalidState 上报：{err}"
    );

    // 第二阶段：粘性失效须跨越重置尝试。另起新集合避免首阶段残留影响变更动作。
    let collection = fixture.new_collection();
    collection
        .add(F::Elem::one())
        .unwrap_or_else(|err| panic!("种子哨兵加入失败：{err}"));
    collection
        .add(F::Elem::two())
        .unwrap_or_else(|err| panic!("种子哨兵加入失败：{err}"));
    let mut cursor = collection.cursor();
    if let Err(err) = mutate(&collection) {
        panic!("协议的变更动作意外失败：{err}");
    }
    match cursor.reset() {
        Err(err) if err.kind() == ErrorKind::InvalidState => {}
        Err(err) if err.kind() == ErrorKind::UnsupportedOperation => match cursor.advance() {
            Err(err) if err.kind() == ErrorKind::InvalidState => {}
            Ok(_) => panic!("不支持重置的游标在结构变更后仍可推进"),
            Err(other) => panic!("失效游标的推进返回了预期之外的分类：{other}"),
        },
        Ok(()) => panic!("结构变更后的重置应上报 InvalidState"),
        Err(other) => panic!("失效游标的重置返回了预期之外的分类：{other}"),
    }
    CaseOutcome::Passed
}
