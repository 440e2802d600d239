// ---------------------------------------------------------------------------
// Freshness – binary verdict for a recognized class
// ---------------------------------------------------------------------------

/// Freshness verdict derived from the class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Good,
    Bad,
    /// Label not in the known-class table.
    Unknown,
}

impl Freshness {
    /// Verdict text shown next to the class name.
    pub fn verdict(self) -> &'static str {
        match self {
            Freshness::Good => "FRESCA",
            Freshness::Bad => "PODRIDA",
            Freshness::Unknown => "DESCONOCIDA",
        }
    }
}

// ---------------------------------------------------------------------------
// LabelDescriptor – display-ready form of a raw label
// ---------------------------------------------------------------------------

/// Resolved presentation of a classifier label. Derived on each render,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDescriptor {
    pub name: String,
    pub emoji: &'static str,
    pub status: Freshness,
}

// ---------------------------------------------------------------------------
// Known classes
// ---------------------------------------------------------------------------

/// The six classes the production model was trained on.
const FRUIT_CLASSES: [(&str, &str, &str, Freshness); 6] = [
    ("freshapples", "Manzanas Frescas", "🍎", Freshness::Good),
    ("freshbanana", "Plátano Fresco", "🍌", Freshness::Good),
    ("freshoranges", "Naranjas Frescas", "🍊", Freshness::Good),
    ("rottenapples", "Manzanas Podridas", "🍎", Freshness::Bad),
    ("rottenbanana", "Plátano Podrido", "🍌", Freshness::Bad),
    ("rottenoranges", "Naranjas Podridas", "🍊", Freshness::Bad),
];

/// Singular spellings some model versions emit for the plural classes.
const SINGULAR_ALIASES: [(&str, &str); 4] = [
    ("freshapple", "freshapples"),
    ("freshorange", "freshoranges"),
    ("rottenapple", "rottenapples"),
    ("rottenorange", "rottenoranges"),
];

/// Resolve a raw classifier label into its display descriptor.
///
/// Lookup order: exact match in the known-class table, then the
/// singular→plural alias table, then a fallback that echoes the raw label
/// with an unknown status. An empty label gets the fixed unclassified
/// descriptor. Pure: the same label always yields the same descriptor.
pub fn resolve(label: &str) -> LabelDescriptor {
    if label.is_empty() {
        return LabelDescriptor {
            name: "Sin clasificar".to_string(),
            emoji: "❓",
            status: Freshness::Unknown,
        };
    }

    if let Some(descriptor) = lookup(label) {
        return descriptor;
    }

    let canonical = SINGULAR_ALIASES
        .iter()
        .find(|(singular, _)| *singular == label)
        .map(|(_, plural)| *plural);
    if let Some(descriptor) = canonical.and_then(lookup) {
        return descriptor;
    }

    LabelDescriptor {
        name: format!("Clase: {label}"),
        emoji: "❓",
        status: Freshness::Unknown,
    }
}

fn lookup(label: &str) -> Option<LabelDescriptor> {
    FRUIT_CLASSES
        .iter()
        .find(|&&(key, ..)| key == label)
        .map(|&(_, name, emoji, status)| LabelDescriptor {
            name: name.to_string(),
            emoji,
            status,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, emoji: &'static str, status: Freshness) -> LabelDescriptor {
        LabelDescriptor {
            name: name.to_string(),
            emoji,
            status,
        }
    }

    #[test]
    fn all_six_known_classes_resolve_exactly() {
        let expected = [
            ("freshapples", "Manzanas Frescas", "🍎", Freshness::Good),
            ("freshbanana", "Plátano Fresco", "🍌", Freshness::Good),
            ("freshoranges", "Naranjas Frescas", "🍊", Freshness::Good),
            ("rottenapples", "Manzanas Podridas", "🍎", Freshness::Bad),
            ("rottenbanana", "Plátano Podrido", "🍌", Freshness::Bad),
            ("rottenoranges", "Naranjas Podridas", "🍊", Freshness::Bad),
        ];
        for (label, name, emoji, status) in expected {
            assert_eq!(resolve(label), descriptor(name, emoji, status), "label {label}");
        }
    }

    #[test]
    fn singular_variants_resolve_like_their_plural_form() {
        for (singular, plural) in [
            ("freshapple", "freshapples"),
            ("freshorange", "freshoranges"),
            ("rottenapple", "rottenapples"),
            ("rottenorange", "rottenoranges"),
        ] {
            assert_eq!(resolve(singular), resolve(plural), "alias {singular}");
        }
    }

    #[test]
    fn unknown_labels_echo_the_input() {
        let d = resolve("freshmango");
        assert_eq!(d.status, Freshness::Unknown);
        assert_eq!(d.emoji, "❓");
        assert!(d.name.contains("freshmango"));
    }

    #[test]
    fn empty_label_is_unclassified() {
        assert_eq!(
            resolve(""),
            descriptor("Sin clasificar", "❓", Freshness::Unknown)
        );
    }

    #[test]
    fn rotten_banana_example() {
        assert_eq!(
            resolve("rottenbanana"),
            descriptor("Plátano Podrido", "🍌", Freshness::Bad)
        );
    }

    #[test]
    fn verdict_text_follows_the_status() {
        assert_eq!(Freshness::Good.verdict(), "FRESCA");
        assert_eq!(Freshness::Bad.verdict(), "PODRIDA");
        assert_eq!(resolve("otracosa").status.verdict(), "DESCONOCIDA");
    }
}
