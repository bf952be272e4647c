//! Writer configuration

use crate::io::dxf::CodePage;

/// How group codes are laid out on their line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupCodeLayout {
    /// Code written as-is (`5`)
    #[default]
    Compact,
    /// Code right-aligned in a 3-character field (`  5`), as AutoCAD writes it
    RightAligned,
}

/// Options for [`DxfTextWriter`](super::DxfTextWriter)
///
/// The defaults write the minimal record layout: compact group codes, UTF-8
/// strings, and only each record's own subclass marker. AutoCAD always
/// writes the shared `AcDbSymbolTableRecord` marker as well, and some strict
/// readers expect it; [`WriterOptions::autocad`] turns it on along with the
/// right-aligned layout and the ANSI_1252 code page.
#[derive(Debug, Clone, Default)]
pub struct WriterOptions {
    /// Group code layout
    pub code_layout: GroupCodeLayout,
    /// Write `100`/`AcDbSymbolTableRecord` between the handle and the
    /// record's own subclass marker
    pub symbol_table_marker: bool,
    /// Transcode string values into this code page; `None` writes UTF-8
    pub code_page: Option<CodePage>,
}

impl WriterOptions {
    /// Options matching AutoCAD's own ASCII output
    pub fn autocad() -> Self {
        WriterOptions {
            code_layout: GroupCodeLayout::RightAligned,
            symbol_table_marker: true,
            code_page: Some(CodePage::ANSI_1252),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = WriterOptions::default();
        assert_eq!(options.code_layout, GroupCodeLayout::Compact);
        assert!(!options.symbol_table_marker);
        assert!(options.code_page.is_none());
    }

    #[test]
    fn test_autocad_options() {
        let options = WriterOptions::autocad();
        assert_eq!(options.code_layout, GroupCodeLayout::RightAligned);
        assert!(options.symbol_table_marker);
        assert_eq!(options.code_page.map(|c| c.name()), Some("ANSI_1252"));
    }
}
