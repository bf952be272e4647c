//! Output code pages ($DWGCODEPAGE) for pre-2007 DXF readers.
//!
//! DXF files older than AC1021 are written in a Windows ANSI code page rather
//! than UTF-8. String values are transcoded with `encoding_rs` on the way out;
//! group codes and numbers are plain ASCII and pass through unchanged.

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::error::{DxfError, Result};

/// A named output code page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePage {
    name: &'static str,
    encoding: &'static Encoding,
}

impl CodePage {
    /// Western European, the AutoCAD default
    pub const ANSI_1252: CodePage = CodePage {
        name: "ANSI_1252",
        encoding: encoding_rs::WINDOWS_1252,
    };

    /// Look up a code page by its `$DWGCODEPAGE` name (case-insensitive)
    ///
    /// Returns `None` for names that have no single-byte or DBCS mapping,
    /// including UTF-8, which needs no transcoding.
    pub fn from_name(name: &str) -> Option<CodePage> {
        let (name, encoding) = match name.to_ascii_lowercase().as_str() {
            "ansi_874" => ("ANSI_874", encoding_rs::WINDOWS_874),
            "ansi_932" => ("ANSI_932", encoding_rs::SHIFT_JIS),
            "ansi_936" => ("ANSI_936", encoding_rs::GBK),
            "ansi_949" => ("ANSI_949", encoding_rs::EUC_KR),
            "ansi_950" => ("ANSI_950", encoding_rs::BIG5),
            "ansi_1250" => ("ANSI_1250", encoding_rs::WINDOWS_1250),
            "ansi_1251" => ("ANSI_1251", encoding_rs::WINDOWS_1251),
            "ansi_1252" => ("ANSI_1252", encoding_rs::WINDOWS_1252),
            "ansi_1253" => ("ANSI_1253", encoding_rs::WINDOWS_1253),
            "ansi_1254" => ("ANSI_1254", encoding_rs::WINDOWS_1254),
            "ansi_1255" => ("ANSI_1255", encoding_rs::WINDOWS_1255),
            "ansi_1256" => ("ANSI_1256", encoding_rs::WINDOWS_1256),
            "ansi_1257" => ("ANSI_1257", encoding_rs::WINDOWS_1257),
            "ansi_1258" => ("ANSI_1258", encoding_rs::WINDOWS_1258),
            _ => return None,
        };
        Some(CodePage { name, encoding })
    }

    /// The `$DWGCODEPAGE` name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Transcode a string value into this code page
    ///
    /// Characters with no mapping are an error rather than being replaced by
    /// numeric character references, which DXF readers would show verbatim.
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            return Err(DxfError::Encoding(format!(
                "'{}' cannot be represented in {}",
                text, self.name
            )));
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_1252_lookup() {
        assert_eq!(CodePage::from_name("ANSI_1252"), Some(CodePage::ANSI_1252));
        assert_eq!(CodePage::from_name("ansi_1252"), Some(CodePage::ANSI_1252));
    }

    #[test]
    fn test_unknown_and_utf8() {
        assert_eq!(CodePage::from_name("UTF-8"), None);
        assert_eq!(CodePage::from_name("SOMETHING_UNKNOWN"), None);
    }

    #[test]
    fn test_encode_latin1() {
        let bytes = CodePage::ANSI_1252.encode("Ø25 Stahl").unwrap();
        assert_eq!(bytes[0], 0xD8);
        assert_eq!(&bytes[1..], b"25 Stahl");
    }

    #[test]
    fn test_encode_ascii_borrows() {
        let bytes = CodePage::ANSI_1252.encode("Linetype_0").unwrap();
        assert!(matches!(bytes, Cow::Borrowed(_)));
    }

    #[test]
    fn test_unmappable_is_error() {
        let result = CodePage::ANSI_1252.encode("层");
        assert!(matches!(result, Err(DxfError::Encoding(_))));
    }
}
