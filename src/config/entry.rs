//! Asset entry: one (stem, symbol) conversion unit

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// One configured asset to embed
///
/// `stem` names the asset file without its extension; `symbol_name` is the
/// identifier the generated array is exported under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetEntry {
    /// Asset base filename, extension-free
    pub stem: String,

    /// Identifier of the generated array
    #[serde(rename = "symbol")]
    pub symbol_name: String,
}

impl AssetEntry {
    pub fn new(stem: impl Into<String>, symbol_name: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            symbol_name: symbol_name.into(),
        }
    }

    /// Validate the stem and symbol name
    pub fn validate(&self) -> Result<()> {
        validate_stem(&self.stem)?;
        if !is_c_identifier(&self.symbol_name) {
            return Err(config::invalid(format!(
                "symbol '{}' for asset '{}' is not a valid C identifier",
                self.symbol_name, self.stem
            )));
        }
        if is_reserved_word(&self.symbol_name) {
            return Err(config::invalid(format!(
                "symbol '{}' for asset '{}' is a reserved C/C++ keyword",
                self.symbol_name, self.stem
            )));
        }
        Ok(())
    }
}

/// C and C++ keywords, which match the identifier pattern but cannot name a symbol
#[rustfmt::skip]
const RESERVED_WORDS: &[&str] = &[
    // C
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic",
    "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local", "alignas", "alignof", "bool", "constexpr", "false", "nullptr",
    "static_assert", "thread_local", "true", "typeof", "typeof_unqual", "_BitInt",
    "_Decimal32", "_Decimal64", "_Decimal128",
    // C++
    "and", "and_eq", "asm", "bitand", "bitor", "catch", "char8_t", "char16_t", "char32_t",
    "class", "co_await", "co_return", "co_yield", "compl", "concept", "consteval",
    "constinit", "const_cast", "decltype", "delete", "dynamic_cast", "explicit", "export",
    "friend", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "operator", "or",
    "or_eq", "private", "protected", "public", "reinterpret_cast", "requires",
    "static_cast", "template", "this", "throw", "try", "typeid", "typename", "using",
    "virtual", "wchar_t", "xor", "xor_eq",
];

/// Check whether `name` is a C or C++ keyword
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Check `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// Outputs are written next to the input, so a stem must stay a plain file name.
fn validate_stem(stem: &str) -> Result<()> {
    if stem.trim().is_empty() {
        return Err(config::invalid("asset stem must not be empty"));
    }
    if stem.contains(['/', '\\']) || stem == "." || stem == ".." {
        return Err(config::invalid(format!(
            "asset stem '{stem}' must be a file name, not a path"
        )));
    }
    Ok(())
}
