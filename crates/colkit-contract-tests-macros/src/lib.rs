//! # colkit-contract-tests-macros
//!
//! 该 crate 提供 `colkit_tck` 属性宏，用于为实现集合契约一致性测试的模块自动注入
//! 标准化的测试入口。通过宏生成的测试会在 CI 中充当“最低限度门禁”，确保所有契约
//! 套件始终被执行，避免由于手写样板代码而产生遗漏。宏的实现分为三个阶段：解析调用
//! 参数（夹具路径与目标套件列表）、确定套件清单以及将测试桩植入目标模块。

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, Ident, ItemMod, Meta, Path, Result as SynResult, Token, parse_macro_input};

#[proc_macro_attribute]
/// 教案级说明：
/// - **意图（Why）**：`colkit_tck` 属性宏负责把契约测试套件的运行入口注入目标模块，
///   实现者只需指定夹具类型（以及可选的套件子集）即可获得完整测试覆盖。
/// - **逻辑（How）**：宏先解析属性参数（见 `parse_args`），再根据解析结果调用
///   `inject_tests` 将 `#[test]` 函数追加到模块。解析或注入过程中的语法错误会转化为
///   编译期诊断。
/// - **契约（What）**：属性必须包含 `fixture = <路径>`，夹具类型需实现
///   `CollectionFixture + Default`，且给出的路径要能在目标模块内部解析；可选的
///   `suites(...)` 以标识符列举子套件，缺省展开全部六个主题。
/// - **权衡（Trade-offs）**：宏在编译期展开，避免运行时代码生成，但也要求提供友好
///   的诊断信息以降低调试成本。
pub fn colkit_tck(attr: TokenStream, item: TokenStream) -> TokenStream {
    let module = parse_macro_input!(item as ItemMod);

    match parse_args(attr).and_then(|args| inject_tests(args, module)) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct TckArgs {
    fixture: Path,
    suites: Vec<Ident>,
}

/// 教案级说明：
/// - **意图**：解析属性参数，取出夹具路径并确定待生成的契约套件列表。
/// - **逻辑**：把属性解析为逗号分隔的 `Meta` 列表；`fixture = <路径>` 为必选项，
///   `suites(...)` 可选且为空时回退到默认清单。
/// - **契约**：输入为属性 `TokenStream`；成功输出 `TckArgs`；语法错误返回
///   `syn::Error`，供上层转化为诊断。
fn parse_args(attr: TokenStream) -> SynResult<TckArgs> {
    let metas =
        syn::parse::Parser::parse(Punctuated::<Meta, Token![,]>::parse_terminated, attr)?;

    let mut fixture: Option<Path> = None;
    let mut suites = Vec::new();
    for meta in metas {
        match meta {
            Meta::NameValue(pair) if pair.path.is_ident("fixture") => {
                let Expr::Path(expr_path) = pair.value else {
                    return Err(syn::Error::new(pair.value.span(), "fixture 需为类型路径"));
                };
                fixture = Some(expr_path.path);
            }
            Meta::List(list) if list.path.is_ident("suites") => {
                let nested: Punctuated<Meta, Token![,]> =
                    list.parse_args_with(Punctuated::parse_terminated)?;
                for meta in nested {
                    match meta {
                        Meta::Path(path) => {
                            if let Some(ident) = path.get_ident() {
                                suites.push(ident.clone());
                            } else {
                                return Err(syn::Error::new(path.span(), "suite 需为标识符"));
                            }
                        }
                        other => {
                            return Err(syn::Error::new(other.span(), "suites(...) 仅接受标识符"));
                        }
                    }
                }
            }
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "colkit_tck 属性仅支持 fixture = <路径> 与 suites(...)",
                ));
            }
        }
    }

    let Some(fixture) = fixture else {
        return Err(syn::Error::new(
            Span::call_site(),
            "colkit_tck 属性缺少必选参数 fixture = <路径>",
        ));
    };
    if suites.is_empty() {
        suites = default_suite_idents();
    }
    Ok(TckArgs { fixture, suites })
}

/// 教案级说明：
/// - **意图**：在调用方未指定套件时提供默认清单，避免遗漏核心契约测试。
/// - **逻辑**：通过静态字符串数组列举套件名称，并统一转换为 `Ident`。
/// - **契约**：无输入参数；输出保证至少包含一个元素，顺序与 `run_all_suites` 一致。
fn default_suite_idents() -> Vec<Ident> {
    [
        "counting",
        "copying",
        "membership",
        "mutation",
        "iteration",
        "rendering",
    ]
    .iter()
    .map(|name| Ident::new(name, Span::call_site()))
    .collect()
}

/// 教案级说明：
/// - **意图**：根据套件列表为目标模块生成对应的 `#[test]` 函数，形成统一的测试入口。
/// - **逻辑**：
///   1. 为每个套件构造测试函数名与运行函数路径；
///   2. 生成以 `Default` 实例化夹具并调用 `run_*_suite` 的测试函数；
///   3. 根据模块是否已有内容选择扩展或重新拼装；
///   4. 返回最终的 `TokenStream`。
/// - **契约**：输入为已验证的参数与目标模块；输出的 `TokenStream` 保留原有项并追加
///   测试函数。
/// - **权衡**：语法树级别注入便于调试，但需处理内联与文件模块两种情况，为此在
///   `module.content` 为空时重新拼装模块以保留可见性与属性。
fn inject_tests(args: TckArgs, mut module: ItemMod) -> SynResult<proc_macro2::TokenStream> {
    let fixture = &args.fixture;
    let mut generated = Vec::new();
    for suite in args.suites {
        let test_ident = format_ident!("{}_suite", suite);
        let run_fn: Path =
            syn::parse_str(&format!("colkit_contract_tests::run_{}_suite", suite))?;
        let item: syn::Item = syn::parse_quote! {
            #[test]
            fn #test_ident() {
                let fixture = <#fixture as ::core::default::Default>::default();
                let _ = #run_fn(&fixture);
            }
        };
        generated.push(item);
    }

    if let Some((_, ref mut items)) = module.content {
        items.extend(generated);
        Ok(quote! { #module })
    } else {
        let ident = &module.ident;
        let vis = &module.vis;
        let attrs = &module.attrs;
        Ok(quote! {
            #(#attrs)*
            #vis mod #ident {
                #(#generated)*
            }
        })
    }
}
