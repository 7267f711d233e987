use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// 言語ごとのログパターン
///
/// `statement` is the call used when inserting a new log statement.
/// `regex` detects existing log statements for deletion; for some languages
/// it matches a whole family of call forms (e.g. `console.warn`,
/// `console.trace`), for others only one exact form.
#[derive(Debug)]
pub struct LogPattern {
    pub statement: &'static str,
    pub regex: Regex,
}

/// プリコンパイルされたログパターンのテーブル
///
/// Built once on first use and never mutated afterwards. Literal tokens are
/// case-sensitive and `(.*)` is greedy within a single line, so one match
/// spans from the call name to the last closing delimiter on that line.
static PATTERN_TABLE: Lazy<HashMap<Language, LogPattern>> = Lazy::new(|| {
    let mut table = HashMap::new();
    let mut insert = |lang: Language, statement: &'static str, pattern: &str| {
        let regex = Regex::new(pattern).expect("log pattern must compile");
        table.insert(lang, LogPattern { statement, regex });
    };

    insert(
        Language::JavaScript,
        "console.log",
        r"console\.(log|debug|info|warn|error|assert|dir|dirxml|trace|group|groupEnd|time|timeEnd|profile|profileEnd|count)\((.*)\);?",
    );
    // inserts Js.log2 but detects only Js.log, intentionally asymmetric
    insert(Language::ReScript, "Js.log2", r"Js\.log\((.*)\)");
    insert(Language::Go, "log.Println", r"log\.(Printf|Println|Print)\((.*)\);?");
    insert(Language::C, "printf", r"printf\((.*)\);?");
    insert(Language::Cpp, "printf", r"printf\((.*)\);?");
    insert(
        Language::CSharp,
        "Console.WriteLine",
        r"Console\.(WriteLine|Write)\((.*)\);?",
    );
    insert(Language::Python, "print", r"print\((.*)\)");
    insert(Language::Ruby, "puts", r"puts\((.*)\)");
    insert(Language::FSharp, "Print", r"Print\((.*)\)");
    insert(
        Language::Java,
        "System.out.println",
        r"System\.out\.(println|print)\((.*)\);?",
    );
    insert(Language::Php, "echo", r"echo\((.*)\)");
    insert(Language::Rust, "println!", r"println!\((.*)\)");
    insert(Language::Swift, "print", r"print\((.*)\)");

    table
});

impl LogPattern {
    /// 言語に対応するログパターンを取得
    pub fn for_language(language: Language) -> &'static LogPattern {
        // the table covers every Language variant
        &PATTERN_TABLE[&language]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::ALL_LANGUAGES;

    #[test]
    fn test_every_language_has_a_pattern() {
        for lang in ALL_LANGUAGES {
            let pattern = LogPattern::for_language(lang);
            assert!(!pattern.statement.is_empty());
        }
    }

    #[test]
    fn test_statement_templates() {
        assert_eq!(LogPattern::for_language(Language::JavaScript).statement, "console.log");
        assert_eq!(LogPattern::for_language(Language::ReScript).statement, "Js.log2");
        assert_eq!(LogPattern::for_language(Language::Go).statement, "log.Println");
        assert_eq!(LogPattern::for_language(Language::C).statement, "printf");
        assert_eq!(LogPattern::for_language(Language::Cpp).statement, "printf");
        assert_eq!(
            LogPattern::for_language(Language::CSharp).statement,
            "Console.WriteLine"
        );
        assert_eq!(LogPattern::for_language(Language::Python).statement, "print");
        assert_eq!(LogPattern::for_language(Language::Ruby).statement, "puts");
        assert_eq!(LogPattern::for_language(Language::FSharp).statement, "Print");
        assert_eq!(
            LogPattern::for_language(Language::Java).statement,
            "System.out.println"
        );
        assert_eq!(LogPattern::for_language(Language::Php).statement, "echo");
        assert_eq!(LogPattern::for_language(Language::Rust).statement, "println!");
        assert_eq!(LogPattern::for_language(Language::Swift).statement, "print");
    }

    #[test]
    fn test_family_patterns_match_variants() {
        let js = &LogPattern::for_language(Language::JavaScript).regex;
        assert!(js.is_match("console.log(x);"));
        assert!(js.is_match("console.warn('careful')"));
        assert!(js.is_match("console.groupEnd()"));
        assert!(js.is_match("console.timeEnd('t');"));
        assert!(!js.is_match("console.table(rows)"));

        let go = &LogPattern::for_language(Language::Go).regex;
        assert!(go.is_match(r#"log.Printf("%d", n)"#));
        assert!(go.is_match(r#"log.Println("hi")"#));
        assert!(go.is_match(r#"log.Print("hi")"#));
        assert!(!go.is_match("log.Fatal(err)"));

        let cs = &LogPattern::for_language(Language::CSharp).regex;
        assert!(cs.is_match(r#"Console.WriteLine("a");"#));
        assert!(cs.is_match(r#"Console.Write("a")"#));

        let java = &LogPattern::for_language(Language::Java).regex;
        assert!(java.is_match(r#"System.out.println("a");"#));
        assert!(java.is_match(r#"System.out.print("a")"#));
    }

    #[test]
    fn test_exact_form_patterns() {
        let rescript = &LogPattern::for_language(Language::ReScript).regex;
        assert!(rescript.is_match("Js.log(value)"));
        // the inserted Js.log2 call is intentionally invisible to the detector
        assert!(!rescript.is_match("Js.log2(label, value)"));

        let rust = &LogPattern::for_language(Language::Rust).regex;
        assert!(rust.is_match(r#"println!("{}", x)"#));
        // the pattern is not anchored on a word boundary, so eprintln!
        // matches through its println! suffix
        assert!(rust.is_match(r#"eprintln!("{}", x)"#));

        let python = &LogPattern::for_language(Language::Python).regex;
        assert!(python.is_match(r#"print("debug", x)"#));
    }

    #[test]
    fn test_literal_tokens_are_case_sensitive() {
        assert!(!LogPattern::for_language(Language::Python).regex.is_match("PRINT(x)"));
        assert!(!LogPattern::for_language(Language::Ruby).regex.is_match("Puts(x)"));
    }
}
