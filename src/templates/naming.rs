/// Resolver operation a template function forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`crate::ManifestResolver::asset`].
    Asset,
    /// [`crate::ManifestResolver::entry_link_tags`].
    EntryLinkTags,
    /// [`crate::ManifestResolver::entry_script_tags`].
    EntryScriptTags,
    /// [`crate::ManifestResolver::image`].
    Image,
    /// [`crate::ManifestResolver::font`].
    Font,
}

impl Operation {
    /// Every operation, in registration order.
    pub const ALL: [Operation; 5] = [
        Operation::Asset,
        Operation::EntryLinkTags,
        Operation::EntryScriptTags,
        Operation::Image,
        Operation::Font,
    ];

    /// Stable identifier used in diagnostics.
    pub fn id(self) -> &'static str {
        match self {
            Operation::Asset => "asset",
            Operation::EntryLinkTags => "entryLinkTags",
            Operation::EntryScriptTags => "entryScriptTags",
            Operation::Image => "image",
            Operation::Font => "font",
        }
    }

    /// Accepted positional argument counts.
    pub fn arity(self) -> &'static str {
        match self {
            Operation::Image => "1 to 3",
            _ => "1",
        }
    }
}

/// Names one engine registers the resolver operations under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingScheme {
    /// Current name of every operation.
    pub canonical: &'static [(Operation, &'static str)],
    /// Older short names kept so existing templates keep rendering.
    pub aliases: &'static [(&'static str, Operation)],
}

impl NamingScheme {
    /// Function names used by engines with `snake_case` helpers.
    pub const SNAKE_CASE: NamingScheme = NamingScheme {
        canonical: &[
            (Operation::Asset, "vite_asset"),
            (Operation::EntryLinkTags, "vite_entry_link_tags"),
            (Operation::EntryScriptTags, "vite_entry_script_tags"),
            (Operation::Image, "vite_image"),
            (Operation::Font, "vite_font"),
        ],
        aliases: &[
            ("vite_css", Operation::EntryLinkTags),
            ("vite_js", Operation::EntryScriptTags),
        ],
    };

    /// Directive names used by engines with `camelCase` directives.
    pub const CAMEL_CASE: NamingScheme = NamingScheme {
        canonical: &[
            (Operation::Asset, "viteAsset"),
            (Operation::EntryLinkTags, "viteEntryLinkTags"),
            (Operation::EntryScriptTags, "viteEntryScriptTags"),
            (Operation::Image, "viteImage"),
            (Operation::Font, "viteFont"),
        ],
        aliases: &[
            ("viteCss", Operation::EntryLinkTags),
            ("viteJs", Operation::EntryScriptTags),
        ],
    };

    /// Plates template functions.
    pub const PLATES: NamingScheme = NamingScheme::SNAKE_CASE;

    /// Twig template functions.
    pub const TWIG: NamingScheme = NamingScheme::SNAKE_CASE;

    /// Blade directives.
    pub const BLADE: NamingScheme = NamingScheme::CAMEL_CASE;

    /// Every registered name with the operation it dispatches to, canonical names first.
    pub fn bindings(&self) -> Vec<(&'static str, Operation)> {
        self
            .canonical
            .iter()
            .map(|&(operation, name)| (name, operation))
            .chain(self.aliases.iter().copied())
            .collect()
    }

    /// Operation registered under `name`, whether canonical or legacy.
    pub fn lookup(&self, name: &str) -> Option<Operation> {
        self
            .canonical
            .iter()
            .find(|(_, canonical)| *canonical == name)
            .map(|&(operation, _)| operation)
            .or_else(|| {
                self
                    .aliases
                    .iter()
                    .find(|(alias, _)| *alias == name)
                    .map(|&(_, operation)| operation)
            })
    }

    /// Canonical name of `operation`.
    pub fn name_of(&self, operation: Operation) -> Option<&'static str> {
        self
            .canonical
            .iter()
            .find(|(candidate, _)| *candidate == operation)
            .map(|&(_, name)| name)
    }
}
