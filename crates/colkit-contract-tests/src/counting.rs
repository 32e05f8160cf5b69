//! “计数”主题：集合的元素计数必须与成功加入且未移除的元素数量一致。

use colkit_core::Collection;

use crate::case::{CaseOutcome, TckCase, TckSuite};
use crate::fixture::CollectionFixture;

/// 返回“计数”主题的测试套件。
pub(crate) fn suite<F: CollectionFixture>() -> TckSuite<F> {
    TckSuite {
        name: "counting",
        cases: vec![TckCase {
            name: "count_accurately",
            run: count_accurately::<F>,
        }],
    }
}

/// 验证空集合计数为零、填充集合计数等于样本容量。
///
/// # 教案式说明
/// - **意图 (Why)**：计数是其余所有断言的前置信任基础，必须最先校验。
/// - **契约 (What)**：`len()` 对新建集合返回 0，对填充集合返回 `sample_size`。
fn count_accurately<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    let fresh = fixture.new_collection();
    assert_eq!(fresh.len(), 0, "新建集合的计数应为零");
    assert!(fresh.is_empty(), "新建集合应自述为空");

    let filled = fixture.new_collection_filled();
    assert_eq!(
        filled.len(),
        fixture.sample_size(),
        "填充后计数应等于样本容量"
    );
    CaseOutcome::Passed
}
