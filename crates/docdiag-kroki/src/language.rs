//! Diagram languages rendered through Kroki.

/// Code fence languages that are rendered without further configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramLanguage {
    PlantUml,
    BlockDiag,
    Bpmn,
    Bytefield,
    SeqDiag,
    ActDiag,
    NwDiag,
    PacketDiag,
    RackDiag,
    C4PlantUml,
    Ditaa,
    Erd,
    Excalidraw,
    GraphViz,
    Mermaid,
    Nomnoml,
    Pikchr,
    Structurizr,
    Svgbob,
    Vega,
    VegaLite,
    WaveDrom,
}

impl DiagramLanguage {
    /// Every supported language.
    pub const ALL: [Self; 22] = [
        Self::PlantUml,
        Self::BlockDiag,
        Self::Bpmn,
        Self::Bytefield,
        Self::SeqDiag,
        Self::ActDiag,
        Self::NwDiag,
        Self::PacketDiag,
        Self::RackDiag,
        Self::C4PlantUml,
        Self::Ditaa,
        Self::Erd,
        Self::Excalidraw,
        Self::GraphViz,
        Self::Mermaid,
        Self::Nomnoml,
        Self::Pikchr,
        Self::Structurizr,
        Self::Svgbob,
        Self::Vega,
        Self::VegaLite,
        Self::WaveDrom,
    ];

    /// Parse a code fence language tag.
    ///
    /// Matching is exact: returns `None` for anything that is not a
    /// supported diagram language.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.kroki_endpoint() == s)
    }

    /// Kroki endpoint name for this diagram type.
    #[must_use]
    pub fn kroki_endpoint(self) -> &'static str {
        match self {
            Self::PlantUml => "plantuml",
            Self::BlockDiag => "blockdiag",
            Self::Bpmn => "bpmn",
            Self::Bytefield => "bytefield",
            Self::SeqDiag => "seqdiag",
            Self::ActDiag => "actdiag",
            Self::NwDiag => "nwdiag",
            Self::PacketDiag => "packetdiag",
            Self::RackDiag => "rackdiag",
            Self::C4PlantUml => "c4plantuml",
            Self::Ditaa => "ditaa",
            Self::Erd => "erd",
            Self::Excalidraw => "excalidraw",
            Self::GraphViz => "graphviz",
            Self::Mermaid => "mermaid",
            Self::Nomnoml => "nomnoml",
            Self::Pikchr => "pikchr",
            Self::Structurizr => "structurizr",
            Self::Svgbob => "svgbob",
            Self::Vega => "vega",
            Self::VegaLite => "vegalite",
            Self::WaveDrom => "wavedrom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_diagram_languages() {
        let languages = [
            ("plantuml", DiagramLanguage::PlantUml),
            ("blockdiag", DiagramLanguage::BlockDiag),
            ("bpmn", DiagramLanguage::Bpmn),
            ("bytefield", DiagramLanguage::Bytefield),
            ("seqdiag", DiagramLanguage::SeqDiag),
            ("actdiag", DiagramLanguage::ActDiag),
            ("nwdiag", DiagramLanguage::NwDiag),
            ("packetdiag", DiagramLanguage::PacketDiag),
            ("rackdiag", DiagramLanguage::RackDiag),
            ("c4plantuml", DiagramLanguage::C4PlantUml),
            ("ditaa", DiagramLanguage::Ditaa),
            ("erd", DiagramLanguage::Erd),
            ("excalidraw", DiagramLanguage::Excalidraw),
            ("graphviz", DiagramLanguage::GraphViz),
            ("mermaid", DiagramLanguage::Mermaid),
            ("nomnoml", DiagramLanguage::Nomnoml),
            ("pikchr", DiagramLanguage::Pikchr),
            ("structurizr", DiagramLanguage::Structurizr),
            ("svgbob", DiagramLanguage::Svgbob),
            ("vega", DiagramLanguage::Vega),
            ("vegalite", DiagramLanguage::VegaLite),
            ("wavedrom", DiagramLanguage::WaveDrom),
        ];

        for (name, expected) in languages {
            assert_eq!(DiagramLanguage::parse(name), Some(expected), "Failed to parse: {name}");
            assert_eq!(expected.kroki_endpoint(), name);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!(DiagramLanguage::parse("Mermaid").is_none());
        assert!(DiagramLanguage::parse("kroki-mermaid").is_none());
        assert!(DiagramLanguage::parse("dot").is_none());
        assert!(DiagramLanguage::parse(" mermaid").is_none());
        assert!(DiagramLanguage::parse("").is_none());
    }

    #[test]
    fn test_non_diagram_languages() {
        for lang in ["rust", "python", "kroki", "text"] {
            assert!(DiagramLanguage::parse(lang).is_none(), "{lang} should not parse");
        }
    }
}
