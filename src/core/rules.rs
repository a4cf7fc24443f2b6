//! 匿名化规则定义
//!
//! 每个规则集是一个有序的正则替换序列。顺序是契约的一部分：
//! 后面的规则作用于前面规则已经改写过的文本，不能调换。

use crate::core::models::LanguageTag;
use regex::Regex;

/// 占位符编号计数器
///
/// 每次匿名化调用都重新创建，从1开始，规则每命中一次递增一次。
/// 不跨调用共享，也不做任何持久化。
#[derive(Debug)]
pub struct Counter(u32);

impl Counter {
    pub fn new() -> Self {
        Counter(1)
    }

    /// 取出当前编号并递增
    pub fn bump(&mut self) -> u32 {
        let n = self.0;
        self.0 += 1;
        n
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

/// 计数器槽位
///
/// 通用规则集的三条规则共用 `Shared` 一个计数器；
/// CSS规则集的四类替换各自独立计数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterSlot {
    /// 通用规则集共用的连续计数器
    Shared,
    /// CSS类选择器
    Selector,
    /// CSS ID选择器
    Id,
    /// CSS自定义属性
    Var,
    /// CSS动画名（@keyframes）
    Animation,
}

/// 替换方式
pub enum Replacement {
    /// 用指定槽位的下一个编号渲染占位符
    Numbered {
        slot: CounterSlot,
        render: fn(u32) -> String,
    },
    /// 将匹配内容原样写回（显式保留）
    Passthrough,
}

/// 单条规则：匹配模式 + 替换方式
pub struct Rule {
    pub pattern: Regex,
    pub replacement: Replacement,
}

/// 有序规则集
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// 构建指定语言标签对应的规则集
    ///
    /// 模式全部是编译期字面量，编译失败属于程序缺陷而非运行期输入问题。
    pub fn for_tag(tag: LanguageTag) -> Self {
        let rules = match tag {
            LanguageTag::Generic => vec![
                // class声明 → class Class<N>
                rule(r"class\s+(\w+)", CounterSlot::Shared, |n| {
                    format!("class Class{}", n)
                }),
                // function声明 → function func<N>（计数器不重置，接着class的序号继续）
                rule(r"function\s+(\w+)", CounterSlot::Shared, |n| {
                    format!("function func{}", n)
                }),
                // var声明 → var v<N>
                rule(r"var\s+(\w+)", CounterSlot::Shared, |n| {
                    format!("var v{}", n)
                }),
            ],
            LanguageTag::Css => vec![
                // 类选择器 → .selector<N>
                rule(r"\.([\w-]+)", CounterSlot::Selector, |n| {
                    format!(".selector{}", n)
                }),
                // ID选择器 → #selector<N>（与类选择器前缀相同，计数独立）
                rule(r"#([\w-]+)", CounterSlot::Id, |n| {
                    format!("#selector{}", n)
                }),
                // 自定义属性 → --var<N>，声明和引用各自独立计数
                rule(r"--[\w-]+", CounterSlot::Var, |n| format!("--var{}", n)),
                // 动画名 → @keyframes animation<N>，animation:属性里的引用不处理
                rule(r"@keyframes\s+([\w-]+)", CounterSlot::Animation, |n| {
                    format!("@keyframes animation{}", n)
                }),
                // 媒体查询整块原样保留
                Rule {
                    pattern: compile(r"(@media[^{]+\{)([\s\S]+?\})"),
                    replacement: Replacement::Passthrough,
                },
            ],
        };

        Self { rules }
    }

    /// 按固定顺序遍历规则
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

fn rule(pattern: &str, slot: CounterSlot, render: fn(u32) -> String) -> Rule {
    Rule {
        pattern: compile(pattern),
        replacement: Replacement::Numbered { slot, render },
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("内置正则模式必须能编译")
}
