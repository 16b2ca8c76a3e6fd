//! Icon registry.
//!
//! Categories and sections name their icon with a Lucide identifier
//! (`"BookOpen"`, `"Activity"`, ...). Names resolve through an explicit
//! table; anything unknown falls back to a caller-chosen default glyph.

/// A known glyph. Path data is Lucide's 24×24 stroke outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Activity,
    ArrowLeft,
    ArrowRight,
    BookOpen,
    Compass,
    Download,
    ExternalLink,
    Feather,
    Heart,
    Home,
    Info,
    Lightbulb,
    MessageCircle,
    MoveRight,
    Quote,
    Shield,
    Sparkles,
    Users,
    X,
}

impl Glyph {
    pub const ALL: [Glyph; 19] = [
        Glyph::Activity,
        Glyph::ArrowLeft,
        Glyph::ArrowRight,
        Glyph::BookOpen,
        Glyph::Compass,
        Glyph::Download,
        Glyph::ExternalLink,
        Glyph::Feather,
        Glyph::Heart,
        Glyph::Home,
        Glyph::Info,
        Glyph::Lightbulb,
        Glyph::MessageCircle,
        Glyph::MoveRight,
        Glyph::Quote,
        Glyph::Shield,
        Glyph::Sparkles,
        Glyph::Users,
        Glyph::X,
    ];

    /// Default glyph for categories without a known icon.
    pub const CATEGORY_FALLBACK: Glyph = Glyph::Sparkles;

    /// Default glyph for sections without a known icon.
    pub const SECTION_FALLBACK: Glyph = Glyph::Feather;

    /// Lucide identifier of this glyph.
    pub fn name(&self) -> &'static str {
        match self {
            Glyph::Activity => "Activity",
            Glyph::ArrowLeft => "ArrowLeft",
            Glyph::ArrowRight => "ArrowRight",
            Glyph::BookOpen => "BookOpen",
            Glyph::Compass => "Compass",
            Glyph::Download => "Download",
            Glyph::ExternalLink => "ExternalLink",
            Glyph::Feather => "Feather",
            Glyph::Heart => "Heart",
            Glyph::Home => "Home",
            Glyph::Info => "Info",
            Glyph::Lightbulb => "Lightbulb",
            Glyph::MessageCircle => "MessageCircle",
            Glyph::MoveRight => "MoveRight",
            Glyph::Quote => "Quote",
            Glyph::Shield => "Shield",
            Glyph::Sparkles => "Sparkles",
            Glyph::Users => "Users",
            Glyph::X => "X",
        }
    }

    pub fn from_name(name: &str) -> Option<Glyph> {
        Self::ALL.iter().copied().find(|g| g.name() == name)
    }

    /// Resolve an optional icon name, falling back when absent or unknown.
    pub fn resolve(name: Option<&str>, fallback: Glyph) -> Glyph {
        match name {
            Some(name) => Self::from_name(name).unwrap_or_else(|| {
                tracing::trace!(icon = name, fallback = fallback.name(), "Unknown icon name");
                fallback
            }),
            None => fallback,
        }
    }

    /// SVG path data, drawn with `stroke="currentColor"` and no fill.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Glyph::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            Glyph::ArrowLeft => &["m12 19-7-7 7-7", "M19 12H5"],
            Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Glyph::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Glyph::Compass => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
                "m16.24 7.76-1.804 5.411a2 2 0 0 1-1.265 1.265L7.76 16.24l1.804-5.411a2 2 0 0 1 1.265-1.265z",
            ],
            Glyph::Download => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "m7 10 5 5 5-5",
                "M12 15V3",
            ],
            Glyph::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Glyph::Feather => &[
                "M20.24 12.24a6 6 0 0 0-8.49-8.49L5 10.5V19h8.5z",
                "M16 8 2 22",
                "M17.5 15H9",
            ],
            Glyph::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            ],
            Glyph::Home => &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
            Glyph::Info => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
                "M12 16v-4",
                "M12 8h.01",
            ],
            Glyph::Lightbulb => &[
                "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
                "M9 18h6",
                "M10 22h4",
            ],
            Glyph::MessageCircle => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
            Glyph::MoveRight => &["M18 8 22 12 18 16", "M2 12h20"],
            Glyph::Quote => &[
                "M16 3a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2 1 1 0 0 1 1 1v1a2 2 0 0 1-2 2 1 1 0 0 0-1 1v2a1 1 0 0 0 1 1 6 6 0 0 0 6-6V5a2 2 0 0 0-2-2z",
                "M5 3a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2 1 1 0 0 1 1 1v1a2 2 0 0 1-2 2 1 1 0 0 0-1 1v2a1 1 0 0 0 1 1 6 6 0 0 0 6-6V5a2 2 0 0 0-2-2z",
            ],
            Glyph::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Glyph::Sparkles => &[
                "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
                "M5 3v4",
                "M19 17v4",
                "M3 5h4",
                "M17 19h4",
            ],
            Glyph::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Glyph::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}
