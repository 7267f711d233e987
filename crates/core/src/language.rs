/// サポートされている言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Language {
    JavaScript,
    ReScript,
    Go,
    C,
    Cpp,
    CSharp,
    Python,
    Ruby,
    FSharp,
    Java,
    Php,
    Rust,
    Swift,
}

/// 全サポート言語のリスト
pub const ALL_LANGUAGES: [Language; 13] = [
    Language::JavaScript,
    Language::ReScript,
    Language::Go,
    Language::C,
    Language::Cpp,
    Language::CSharp,
    Language::Python,
    Language::Ruby,
    Language::FSharp,
    Language::Java,
    Language::Php,
    Language::Rust,
    Language::Swift,
];

impl Language {
    /// エディタの言語IDから言語を判定
    pub fn from_language_id(id: &str) -> Option<Self> {
        match id {
            "javascript" => Some(Language::JavaScript),
            "rescript" => Some(Language::ReScript),
            "go" => Some(Language::Go),
            "c" => Some(Language::C),
            "cpp" => Some(Language::Cpp),
            "csharp" => Some(Language::CSharp),
            "python" => Some(Language::Python),
            "ruby" => Some(Language::Ruby),
            "fsharp" => Some(Language::FSharp),
            "java" => Some(Language::Java),
            "php" => Some(Language::Php),
            "rust" => Some(Language::Rust),
            "swift" => Some(Language::Swift),
            _ => None,
        }
    }

    /// ファイル拡張子から言語を判定
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "res" | "resi" => Some(Language::ReScript),
            "go" => Some(Language::Go),
            "c" | "h" => Some(Language::C),
            "cpp" | "cc" | "cxx" | "hpp" => Some(Language::Cpp),
            "cs" => Some(Language::CSharp),
            "py" | "pyi" => Some(Language::Python),
            "rb" => Some(Language::Ruby),
            "fs" | "fsx" | "fsi" => Some(Language::FSharp),
            "java" => Some(Language::Java),
            "php" => Some(Language::Php),
            "rs" => Some(Language::Rust),
            "swift" => Some(Language::Swift),
            _ => None,
        }
    }

    /// エディタの言語ID
    pub fn language_id(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::ReScript => "rescript",
            Language::Go => "go",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::FSharp => "fsharp",
            Language::Java => "java",
            Language::Php => "php",
            Language::Rust => "rust",
            Language::Swift => "swift",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_language_id_roundtrip() {
        for lang in ALL_LANGUAGES {
            assert_eq!(Language::from_language_id(lang.language_id()), Some(lang));
        }
    }

    #[test]
    fn test_unknown_language_id() {
        assert_eq!(Language::from_language_id("plaintext"), None);
        assert_eq!(Language::from_language_id("haskell"), None);
        assert_eq!(Language::from_language_id(""), None);
        // 言語IDは小文字のみ
        assert_eq!(Language::from_language_id("Rust"), None);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
        assert_eq!(Language::from_extension("jsx"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("cc"), Some(Language::Cpp));
        assert_eq!(Language::from_extension("txt"), None);
    }
}
