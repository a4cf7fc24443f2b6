//! 匿名化核心
//!
//! 纯函数：输入一段代码文本和语言标签，输出替换后的文本。
//! 没有任何I/O、并发和跨调用状态；不做语法解析，只做逐条正则替换，
//! 所以任何文本（包括语法错误的代码）都能接受，最坏情况是原样返回。

use crate::core::models::LanguageTag;
use crate::core::rules::{Counter, CounterSlot, Replacement, RuleSet};
use regex::Captures;

/// 单次调用内的全部计数器
///
/// 每次调用重新构建，调用结束即废弃，编号不会泄漏到下一次调用。
struct Counters {
    shared: Counter,
    selector: Counter,
    id: Counter,
    var: Counter,
    animation: Counter,
}

impl Counters {
    fn new() -> Self {
        Self {
            shared: Counter::new(),
            selector: Counter::new(),
            id: Counter::new(),
            var: Counter::new(),
            animation: Counter::new(),
        }
    }

    fn slot_mut(&mut self, slot: CounterSlot) -> &mut Counter {
        match slot {
            CounterSlot::Shared => &mut self.shared,
            CounterSlot::Selector => &mut self.selector,
            CounterSlot::Id => &mut self.id,
            CounterSlot::Var => &mut self.var,
            CounterSlot::Animation => &mut self.animation,
        }
    }
}

/// 对代码文本执行匿名化
///
/// 规则按固定顺序整段扫描，每条规则作用于上一条规则的输出。
/// 通用规则集因此呈现"先全部class、再全部function、再全部var"的
/// 分组编号，而不是全文从左到右编号；这是既有行为，保持不变。
pub fn anonymize(source_text: &str, tag: LanguageTag) -> String {
    let rule_set = RuleSet::for_tag(tag);
    let mut counters = Counters::new();

    let mut text = source_text.to_string();
    for rule in rule_set.rules() {
        text = match &rule.replacement {
            Replacement::Numbered { slot, render } => {
                let counter = counters.slot_mut(*slot);
                rule.pattern
                    .replace_all(&text, |_caps: &Captures| render(counter.bump()))
                    .into_owned()
            }
            Replacement::Passthrough => rule
                .pattern
                .replace_all(&text, |caps: &Captures| caps[0].to_string())
                .into_owned(),
        };
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_shared_counter_in_text_order() {
        let input = "class Foo {}\nfunction bar() {}\nvar baz = 1;";
        let output = anonymize(input, LanguageTag::Generic);
        // 一个共用计数器贯穿三条规则
        assert_eq!(output, "class Class1 {}\nfunction func2() {}\nvar v3 = 1;");
    }

    #[test]
    fn test_generic_numbering_grouped_by_rule_pass() {
        // class规则先整段跑完，即使function在文本里更靠前也后编号
        let input = "function f() {}\nclass A {}\nvar x;";
        let output = anonymize(input, LanguageTag::Generic);
        assert_eq!(output, "function func2() {}\nclass Class1 {}\nvar v3;");
    }

    #[test]
    fn test_generic_multiple_matches_per_rule() {
        let input = "class A {}\nclass B {}\nvar x;\nvar y;";
        let output = anonymize(input, LanguageTag::Generic);
        assert_eq!(output, "class Class1 {}\nclass Class2 {}\nvar v3;\nvar v4;");
    }

    #[test]
    fn test_generic_without_keywords_is_noop() {
        let input = "int main() { return 0; }";
        assert_eq!(anonymize(input, LanguageTag::Generic), input);
    }

    #[test]
    fn test_css_counters_are_independent_per_category() {
        // 类选择器和ID选择器前缀相同，但各自从1开始计数
        let input = ".a{} .b{} #m{} #n{}";
        let output = anonymize(input, LanguageTag::Css);
        assert_eq!(output, ".selector1{} .selector2{} #selector1{} #selector2{}");
    }

    #[test]
    fn test_css_custom_property_occurrences_not_aliased() {
        let input = ":root { --brand-color: #fff; } .x { color: var(--brand-color); }";
        let output = anonymize(input, LanguageTag::Css);
        // 同一个变量的声明和引用拿到不同编号；#fff也被ID规则改写
        assert_eq!(
            output,
            ":root { --var1: #selector1; } .selector1 { color: var(--var2); }"
        );
    }

    #[test]
    fn test_css_keyframes_reference_left_unchanged() {
        let input = "@keyframes fade {\n  from { opacity: 0; }\n}\n.el { animation: fade 2s; }";
        let output = anonymize(input, LanguageTag::Css);
        // 只改声明处，animation:属性里的fade保持原样
        assert_eq!(
            output,
            "@keyframes animation1 {\n  from { opacity: 0; }\n}\n.selector1 { animation: fade 2s; }"
        );
    }

    #[test]
    fn test_css_media_query_block_preserved() {
        let input = "@media (max-width: 600px) { .a { color: red; } }";
        let output = anonymize(input, LanguageTag::Css);
        assert_eq!(output, "@media (max-width: 600px) { .selector1 { color: red; } }");
    }

    #[test]
    fn test_second_pass_renumbers_placeholders() {
        // 占位符本身也会被当作普通标识符重新编号，不存在"识别已匿名化"的逻辑
        let input = ".selector5 { color: var(--var9); }";
        let output = anonymize(input, LanguageTag::Css);
        assert_eq!(output, ".selector1 { color: var(--var1); }");
    }

    #[test]
    fn test_whitespace_only_input_unchanged() {
        let input = "   \n\t  ";
        assert_eq!(anonymize(input, LanguageTag::Generic), input);
        assert_eq!(anonymize(input, LanguageTag::Css), input);
    }

    #[test]
    fn test_empty_input_unchanged() {
        assert_eq!(anonymize("", LanguageTag::Generic), "");
        assert_eq!(anonymize("", LanguageTag::Css), "");
    }

    #[test]
    fn test_counters_reset_between_invocations() {
        let first = anonymize("class A {}", LanguageTag::Generic);
        let second = anonymize("class B {}", LanguageTag::Generic);
        // 两次调用互不影响，编号都从1开始
        assert_eq!(first, "class Class1 {}");
        assert_eq!(second, "class Class1 {}");
    }
}
