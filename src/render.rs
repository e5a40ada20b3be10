//! Rendering of asset bytes into C source text
//!
//! Two artifacts are produced per asset and they always agree on the symbol
//! name and array length:
//! - the array definition: `const char NAME[N] = {b0,b1,...};`
//! - the declaration: `extern "C" { extern const char NAME[N]; }`

use std::fmt::{self, Write};

use crate::config::AssetEntry;

/// Raw asset contents, in file order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetBytes(Vec<u8>);

impl AssetBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for AssetBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Generated array definition text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource(String);

/// Generated external declaration text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeader(String);

macro_rules! impl_generated_text {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn as_bytes(&self) -> &[u8] {
                self.as_str().as_bytes()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_generated_text!(GeneratedSource);
impl_generated_text!(GeneratedHeader);

/// Render the array definition for `entry`
///
/// Every byte becomes its decimal value, joined by `,` with no whitespace.
/// An empty asset renders as `{}`.
pub fn render_source(entry: &AssetEntry, bytes: &AssetBytes) -> GeneratedSource {
    // Up to three digits plus a comma per byte
    let mut out = String::with_capacity(entry.symbol_name.len() + 32 + bytes.len() * 4);

    let _ = write!(
        out,
        "const char {}[{}] = {{",
        entry.symbol_name,
        bytes.len()
    );
    for (i, b) in bytes.as_slice().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{b}");
    }
    out.push_str("};");

    GeneratedSource(out)
}

/// Render the `extern "C"` declaration matching [`render_source`]
pub fn render_header(entry: &AssetEntry, bytes: &AssetBytes) -> GeneratedHeader {
    GeneratedHeader(format!(
        "extern \"C\" {{ extern const char {}[{}]; }}",
        entry.symbol_name,
        bytes.len()
    ))
}
