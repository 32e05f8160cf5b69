//! “文本渲染”主题：仅在 `TO_STRING_PRINT_ITEMS` 置位时生效。

use colkit_core::{Collection, CollectionOptions};

use crate::case::{CaseOutcome, TckCase, TckSuite};
use crate::fixture::CollectionFixture;
use crate::support::{drain_cursor, skip_unless};

/// 返回“文本渲染”主题的测试套件。
pub(crate) fn suite<F: CollectionFixture>() -> TckSuite<F> {
    TckSuite {
        name: "rendering",
        cases: vec![TckCase {
            name: "render_contains_every_element",
            run: render_contains_every_element::<F>,
        }],
    }
}

/// 集合的文本渲染必须把每个在场元素的 `Display` 形式作为子串包含在内。
fn render_contains_every_element<F: CollectionFixture>(fixture: &F) -> CaseOutcome {
    if let Some(skip) = skip_unless(
        fixture.options(),
        CollectionOptions::TO_STRING_PRINT_ITEMS,
        "未启用 TO_STRING_PRINT_ITEMS，跳过渲染检查",
    ) {
        return skip;
    }
    let collection = fixture.new_collection_filled();
    let rendered = collection.render();
    for item in drain_cursor(&collection) {
        let fragment = item.to_string();
        assert!(
            rendered.contains(&fragment),
            "渲染结果 {rendered:?} 应包含元素片段 {fragment:?}"
        );
    }
    CaseOutcome::Passed
}
