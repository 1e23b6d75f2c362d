use std::fmt;

/// One generated JSON document.
///
/// Definition and schema artifacts are serialized with a 4-space indent,
/// example artifacts with a 2-space indent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Artifact {
    Definition,
    InvoiceSchema,
    InvoiceExample,
    CatalogSchema,
    CatalogExample,
}

impl Artifact {
    /// The file name this artifact is written under inside the workbook's
    /// output folder.
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Definition => "metadata-def.json",
            Artifact::InvoiceSchema => "invoice.schema.json",
            Artifact::InvoiceExample => "invoice.json",
            Artifact::CatalogSchema => "catalog.schema.json",
            Artifact::CatalogExample => "catalog.json",
        }
    }

    /// Indent width used when rendering this artifact to JSON.
    pub fn indent_width(self) -> usize {
        match self {
            Artifact::Definition | Artifact::InvoiceSchema | Artifact::CatalogSchema => 4,
            Artifact::InvoiceExample | Artifact::CatalogExample => 2,
        }
    }

    /// All artifacts in generation order.
    pub fn all() -> [Artifact; 5] {
        [
            Artifact::Definition,
            Artifact::InvoiceSchema,
            Artifact::InvoiceExample,
            Artifact::CatalogSchema,
            Artifact::CatalogExample,
        ]
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_widths() {
        assert_eq!(Artifact::Definition.indent_width(), 4);
        assert_eq!(Artifact::InvoiceSchema.indent_width(), 4);
        assert_eq!(Artifact::CatalogSchema.indent_width(), 4);
        assert_eq!(Artifact::InvoiceExample.indent_width(), 2);
        assert_eq!(Artifact::CatalogExample.indent_width(), 2);
    }

    #[test]
    fn generation_order() {
        let names: Vec<&str> = Artifact::all().iter().map(|a| a.file_name()).collect();
        assert_eq!(
            names,
            vec![
                "metadata-def.json",
                "invoice.schema.json",
                "invoice.json",
                "catalog.schema.json",
                "catalog.json",
            ]
        );
    }
}
