//! 界面文案表
//!
//! 界面语言和待处理的代码语言是两个互不相干的选择器，
//! 这里只负责前者的文案。

use crate::core::models::UiLanguage;

/// 一种界面语言下的全部文案
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_label: &'static str,
    pub output_label: &'static str,
    pub execute_button: &'static str,
    pub language_select_label: &'static str,
    pub input_placeholder: &'static str,
    pub output_placeholder: &'static str,
    pub copy_button: &'static str,
    pub menu_file: &'static str,
    pub menu_open: &'static str,
    pub menu_save: &'static str,
    pub menu_quit: &'static str,
    pub status_ready: &'static str,
    pub status_done: &'static str,
    pub status_copied: &'static str,
    pub status_opened: &'static str,
    pub status_saved: &'static str,
    pub status_open_failed: &'static str,
    pub status_save_failed: &'static str,
    pub chars_in: &'static str,
    pub chars_out: &'static str,
}

static JA: Translations = Translations {
    title: "SecureMask",
    subtitle: "ソースコードの機密要素を完全匿名化",
    input_label: "📥 入力コード",
    output_label: "📤 匿名化結果",
    execute_button: "🚀 匿名化実行",
    language_select_label: "プログラミング言語",
    input_placeholder: "// ここにコードを貼り付けてください",
    output_placeholder: "// 匿名化されたコードがここに表示されます",
    copy_button: "📋 コピー",
    menu_file: "ファイル",
    menu_open: "📂 コードを開く...",
    menu_save: "💾 結果を保存...",
    menu_quit: "❌ 終了",
    status_ready: "コードを貼り付けて匿名化を実行してください",
    status_done: "匿名化が完了しました",
    status_copied: "結果をクリップボードにコピーしました",
    status_opened: "ファイルを読み込みました",
    status_saved: "結果を保存しました",
    status_open_failed: "ファイルの読み込みに失敗しました",
    status_save_failed: "結果の保存に失敗しました",
    chars_in: "入力",
    chars_out: "出力",
};

static EN: Translations = Translations {
    title: "SecureMask",
    subtitle: "Complete Source Code Anonymization",
    input_label: "📥 Input Code",
    output_label: "📤 Anonymized Result",
    execute_button: "🚀 Execute Anonymization",
    language_select_label: "Programming Language",
    input_placeholder: "// Paste your code here",
    output_placeholder: "// Anonymized code will appear here",
    copy_button: "📋 Copy",
    menu_file: "File",
    menu_open: "📂 Open Code...",
    menu_save: "💾 Save Result...",
    menu_quit: "❌ Quit",
    status_ready: "Paste code and execute anonymization",
    status_done: "Anonymization finished",
    status_copied: "Result copied to clipboard",
    status_opened: "File loaded",
    status_saved: "Result saved",
    status_open_failed: "Failed to read file",
    status_save_failed: "Failed to save result",
    chars_in: "in",
    chars_out: "out",
};

/// 取指定界面语言的文案表
pub fn translations(lang: UiLanguage) -> &'static Translations {
    match lang {
        UiLanguage::Ja => &JA,
        UiLanguage::En => &EN,
    }
}
