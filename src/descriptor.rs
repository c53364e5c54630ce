//! Registration metadata for host decoder registries.
//!
//! A host frontend uses this descriptor to present the counter in its
//! decoder catalog: which channels it takes, which annotation rows it
//! emits and which options it accepts. None of it is consulted by the
//! counting logic itself.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationSpec {
    pub id: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationRowSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub annotation_indices: &'static [u32],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    Str(&'static str),
    Int(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub id: &'static str,
    pub desc: &'static str,
    pub default: OptionDefault,
    /// Permitted values for string options; empty when unconstrained.
    pub values: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub longname: &'static str,
    pub desc: &'static str,
    pub channels: &'static [ChannelSpec],
    pub optional_channels: &'static [ChannelSpec],
    pub annotations: &'static [AnnotationSpec],
    pub annotation_rows: &'static [AnnotationRowSpec],
    pub options: &'static [OptionSpec],
}

/// Catalog entry for the edge counter.
pub const COUNTER_DECODER: DecoderDescriptor = DecoderDescriptor {
    id: "counter",
    name: "Counter",
    longname: "Edge counter",
    desc: "Count number of edges.",
    channels: &[ChannelSpec {
        id: "data",
        name: "Data",
        desc: "Data line",
    }],
    optional_channels: &[ChannelSpec {
        id: "reset",
        name: "Reset",
        desc: "Reset line",
    }],
    annotations: &[
        AnnotationSpec {
            id: "edge_count",
            desc: "Count",
        },
        AnnotationSpec {
            id: "word_count",
            desc: "Count",
        },
    ],
    annotation_rows: &[
        AnnotationRowSpec {
            id: "edge_count",
            name: "Edge",
            annotation_indices: &[0],
        },
        AnnotationRowSpec {
            id: "word_count",
            name: "Divided",
            annotation_indices: &[1],
        },
    ],
    options: &[
        OptionSpec {
            id: "edge",
            desc: "Edges to check",
            default: OptionDefault::Str("any"),
            values: &["any", "rising", "falling"],
        },
        OptionSpec {
            id: "divider",
            desc: "Count divider",
            default: OptionDefault::Int(0),
            values: &[],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter_config::RawOptions;
    use crate::edge_counter::AnnotationRow;

    #[test]
    fn test_row_indices_match_annotation_rows() {
        assert_eq!(
            COUNTER_DECODER.annotation_rows[AnnotationRow::Edge.index() as usize].name,
            "Edge"
        );
        assert_eq!(
            COUNTER_DECODER.annotation_rows[AnnotationRow::Divided.index() as usize].name,
            "Divided"
        );
    }

    #[test]
    fn test_channel_layout() {
        assert_eq!(COUNTER_DECODER.channels.len(), 1);
        assert_eq!(COUNTER_DECODER.channels[0].id, "data");
        assert_eq!(COUNTER_DECODER.optional_channels.len(), 1);
        assert_eq!(COUNTER_DECODER.optional_channels[0].id, "reset");
    }

    #[test]
    fn test_option_defaults_match_raw_options() {
        let defaults = RawOptions::default();
        assert_eq!(
            COUNTER_DECODER.options[0].default,
            OptionDefault::Str("any")
        );
        assert_eq!(defaults.edge, "any");
        assert_eq!(
            COUNTER_DECODER.options[1].default,
            OptionDefault::Int(defaults.divider)
        );
    }

    #[test]
    fn test_edge_option_values_all_parse() {
        for value in COUNTER_DECODER.options[0].values {
            assert!(value.parse::<crate::counter_config::EdgePolicy>().is_ok());
        }
    }
}
