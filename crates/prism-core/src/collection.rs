//! The collectible quote scroll.
//!
//! [`render_collection`] builds the surface shown in the collection modal:
//! a title block, every quote numbered from `01`, and a footer seal. The
//! same surface has a fixed pixel layout ([`CollectionSurface::layout`]) and
//! an SVG scene ([`CollectionSurface::to_svg`]) used for the PNG export.

use std::fmt::Write as _;

pub const TITLE: &str = "光棱自我";
pub const SUBTITLE: &str = "Prism Identity Collection";
pub const SEAL: [&str; 2] = ["光棱", "印记"];
pub const FOOTER_LINE: &str = "Made with love, respect & courage";

/// Rice-paper background, also the opaque export background.
pub const BACKGROUND_HEX: &str = "#FDFBF7";
pub const BACKGROUND_RGB: [u8; 3] = [0xFD, 0xFB, 0xF7];

const INK: &str = "#2C3E50";
const STONE_200: &str = "#E7E5E4";
const STONE_300: &str = "#D6D3D1";
const STONE_400: &str = "#A8A29E";
const STONE_700: &str = "#44403C";
const SEAL_RED: &str = "#991B1B";
const WASH_BLUE: &str = "#5BCEFA";
const WASH_PINK: &str = "#F5A9B8";
const FONT_FAMILY: &str = "'Noto Serif CJK SC', 'Source Han Serif SC', 'Songti SC', serif";

// Layout metrics, in CSS pixels of the unscaled surface.
pub const SURFACE_WIDTH: u32 = 672;
const PADDING: f32 = 64.0;
const FRAME_INSET: f32 = 24.0;
const TITLE_TOP: f32 = 32.0;
const TITLE_SIZE: f32 = 48.0;
const SUBTITLE_SIZE: f32 = 12.0;
const TITLE_BLOCK_GAP: f32 = 64.0;
const NUMBER_COLUMN: f32 = 48.0;
const COLUMN_GAP: f32 = 24.0;
const QUOTE_SIZE: f32 = 26.0;
const QUOTE_LINE_HEIGHT: f32 = QUOTE_SIZE * 1.8;
const QUOTE_BOTTOM: f32 = 32.0;
const ENTRY_GAP: f32 = 64.0;
const MIN_ENTRY_HEIGHT: f32 = 72.0;
const FOOTER_MARGIN: f32 = 40.0;
const FOOTER_PADDING: f32 = 80.0;
const SEAL_SIZE: f32 = 48.0;
const FOOTER_LINE_GAP: f32 = 24.0;
const FOOTER_LINE_HEIGHT: f32 = 16.0;

/// Display columns per quote line (CJK glyphs count two).
const WRAP_COLUMNS: usize =
    ((SURFACE_WIDTH as f32 - 2.0 * PADDING - NUMBER_COLUMN - COLUMN_GAP) / (QUOTE_SIZE / 2.0)) as usize;

/// One numbered quote on the scroll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteEntry {
    /// One-based, zero-padded to two digits
    pub number: String,
    pub text: String,
}

/// Everything drawn on the quote scroll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionSurface {
    pub title: String,
    pub subtitle: String,
    pub entries: Vec<QuoteEntry>,
    pub seal: [String; 2],
    pub footer: String,
}

/// Build the scroll for `quotes`, keeping their order.
pub fn render_collection(quotes: &[String]) -> CollectionSurface {
    let entries = quotes
        .iter()
        .enumerate()
        .map(|(idx, text)| QuoteEntry {
            number: format!("{:02}", idx + 1),
            text: text.clone(),
        })
        .collect();

    CollectionSurface {
        title: TITLE.to_string(),
        subtitle: SUBTITLE.to_string(),
        entries,
        seal: SEAL.map(str::to_string),
        footer: FOOTER_LINE.to_string(),
    }
}

/// Placement of one entry.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryLayout {
    pub top: f32,
    pub height: f32,
    /// Wrapped text lines with their baselines
    pub lines: Vec<(String, f32)>,
}

/// Pixel layout of the unscaled surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceLayout {
    pub width: u32,
    pub height: u32,
    pub title_baseline: f32,
    pub subtitle_baseline: f32,
    pub entries: Vec<EntryLayout>,
    pub footer_top: f32,
    pub seal_top: f32,
    pub footer_baseline: f32,
}

impl CollectionSurface {
    /// Compute the natural layout. Height grows with the wrapped quotes.
    pub fn layout(&self) -> SurfaceLayout {
        let title_baseline = PADDING + TITLE_TOP + TITLE_SIZE;
        let subtitle_baseline = title_baseline + 16.0 + SUBTITLE_SIZE;
        let mut cursor = subtitle_baseline + TITLE_BLOCK_GAP;

        let mut entries = Vec::with_capacity(self.entries.len());
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                cursor += ENTRY_GAP;
            }
            let top = cursor;
            let lines: Vec<(String, f32)> = wrap_quote(&entry.text)
                .into_iter()
                .enumerate()
                .map(|(i, line)| (line, top + QUOTE_SIZE + i as f32 * QUOTE_LINE_HEIGHT))
                .collect();
            let height = (lines.len() as f32 * QUOTE_LINE_HEIGHT + QUOTE_BOTTOM).max(MIN_ENTRY_HEIGHT);
            cursor += height;
            entries.push(EntryLayout { top, height, lines });
        }

        let footer_top = cursor + FOOTER_MARGIN;
        let seal_top = footer_top + FOOTER_PADDING;
        let footer_baseline = seal_top + SEAL_SIZE + FOOTER_LINE_GAP + FOOTER_LINE_HEIGHT * 0.75;
        let height = seal_top + SEAL_SIZE + FOOTER_LINE_GAP + FOOTER_LINE_HEIGHT + PADDING;

        SurfaceLayout {
            width: SURFACE_WIDTH,
            height: height.ceil() as u32,
            title_baseline,
            subtitle_baseline,
            entries,
            footer_top,
            seal_top,
            footer_baseline,
        }
    }

    /// Serialise the surface as an SVG scene at natural size.
    pub fn to_svg(&self) -> String {
        let layout = self.layout();
        let w = layout.width as f32;
        let h = layout.height as f32;
        let center = w / 2.0;
        let mut svg = String::with_capacity(4096);

        // Writing into a String cannot fail.
        let _ = write!(
            svg,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"##
        );
        let _ = write!(
            svg,
            r##"<defs><radialGradient id="wash-blue"><stop offset="0" stop-color="{WASH_BLUE}" stop-opacity="0.1"/><stop offset="0.6" stop-color="{WASH_BLUE}" stop-opacity="0"/></radialGradient><radialGradient id="wash-pink"><stop offset="0" stop-color="{WASH_PINK}" stop-opacity="0.1"/><stop offset="0.6" stop-color="{WASH_PINK}" stop-opacity="0"/></radialGradient><linearGradient id="rail" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{STONE_200}"/><stop offset="0.5" stop-color="{STONE_300}"/><stop offset="1" stop-color="{STONE_300}" stop-opacity="0"/></linearGradient></defs>"##
        );
        let _ = write!(svg, r##"<rect width="{w}" height="{h}" fill="{BACKGROUND_HEX}"/>"##);
        let _ = write!(
            svg,
            r##"<circle cx="{}" cy="300" r="300" fill="url(#wash-blue)"/><circle cx="233" cy="{}" r="300" fill="url(#wash-pink)"/>"##,
            w - 233.0,
            h - 300.0
        );
        let _ = write!(
            svg,
            r##"<rect x="{FRAME_INSET}" y="{FRAME_INSET}" width="{}" height="{}" rx="16" fill="none" stroke="#292524" stroke-opacity="0.05"/>"##,
            w - 2.0 * FRAME_INSET,
            h - 2.0 * FRAME_INSET
        );

        // Title block
        let _ = write!(
            svg,
            r##"<text x="{center}" y="{}" text-anchor="middle" font-size="{TITLE_SIZE}" fill="{INK}" fill-opacity="0.9">{}</text>"##,
            layout.title_baseline,
            escape(&self.title)
        );
        let _ = write!(
            svg,
            r##"<text x="{center}" y="{}" text-anchor="middle" font-size="{SUBTITLE_SIZE}" letter-spacing="4.8" fill="{STONE_400}">{}</text>"##,
            layout.subtitle_baseline,
            escape(&self.subtitle.to_uppercase())
        );

        // Numbered quotes
        let number_x = PADDING + NUMBER_COLUMN / 2.0;
        let text_x = PADDING + NUMBER_COLUMN + COLUMN_GAP;
        for (entry, placed) in self.entries.iter().zip(&layout.entries) {
            let _ = write!(
                svg,
                r##"<text x="{number_x}" y="{}" text-anchor="middle" font-size="10" letter-spacing="1" fill="{STONE_300}">NO.</text>"##,
                placed.top + 10.0
            );
            let _ = write!(
                svg,
                r##"<text x="{number_x}" y="{}" text-anchor="middle" font-size="20" font-weight="bold" fill="{STONE_400}">{}</text>"##,
                placed.top + 32.0,
                escape(&entry.number)
            );
            let rail_top = placed.top + 44.0;
            let rail_height = (placed.height - 44.0).max(0.0);
            let _ = write!(
                svg,
                r##"<rect x="{}" y="{rail_top}" width="2" height="{rail_height}" rx="1" fill="url(#rail)"/>"##,
                number_x - 1.0
            );
            for (line, baseline) in &placed.lines {
                let _ = write!(
                    svg,
                    r##"<text x="{text_x}" y="{baseline}" font-size="{QUOTE_SIZE}" fill="{STONE_700}">{}</text>"##,
                    escape(line)
                );
            }
        }

        // Footer seal
        let _ = write!(
            svg,
            r##"<line x1="{PADDING}" y1="{top}" x2="{}" y2="{top}" stroke="#F5F5F4" stroke-opacity="0.5"/>"##,
            w - PADDING,
            top = layout.footer_top
        );
        let seal_x = center - SEAL_SIZE / 2.0;
        let seal_y = layout.seal_top;
        let _ = write!(
            svg,
            r##"<g transform="rotate(3 {center} {})" opacity="0.9"><rect x="{seal_x}" y="{seal_y}" width="{SEAL_SIZE}" height="{SEAL_SIZE}" rx="8" fill="{SEAL_RED}" fill-opacity="0.8"/><rect x="{}" y="{}" width="36" height="36" fill="none" stroke="#FFFFFF" stroke-opacity="0.4"/><text x="{center}" y="{}" text-anchor="middle" font-size="10" fill="#FFFFFF" fill-opacity="0.9">{}</text><text x="{center}" y="{}" text-anchor="middle" font-size="10" fill="#FFFFFF" fill-opacity="0.9">{}</text></g>"##,
            seal_y + SEAL_SIZE / 2.0,
            seal_x + 6.0,
            seal_y + 6.0,
            seal_y + 22.0,
            escape(&self.seal[0]),
            seal_y + 35.0,
            escape(&self.seal[1])
        );
        let _ = write!(
            svg,
            r##"<g opacity="0.7"><line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{STONE_300}"/><line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{STONE_300}"/><text x="{center}" y="{}" text-anchor="middle" font-size="12" fill="{STONE_400}">{}</text></g>"##,
            center - 140.0,
            center - 116.0,
            center + 116.0,
            center + 140.0,
            layout.footer_baseline,
            escape(&self.footer),
            y = layout.footer_baseline - 4.0
        );

        svg.push_str("</svg>");
        svg
    }
}

fn wrap_quote(text: &str) -> Vec<String> {
    let lines: Vec<String> = textwrap::wrap(text, WRAP_COLUMNS)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numbers_are_one_based_and_padded() {
        let many: Vec<String> = (0..12).map(|i| format!("q{i}")).collect();
        let surface = render_collection(&many);
        assert_eq!(surface.entries[0].number, "01");
        assert_eq!(surface.entries[8].number, "09");
        assert_eq!(surface.entries[11].number, "12");
        assert_eq!(surface.entries[11].text, "q11");
    }

    #[test]
    fn empty_collection_keeps_title_and_footer() {
        let surface = render_collection(&[]);
        assert!(surface.entries.is_empty());

        let svg = surface.to_svg();
        assert!(svg.contains(TITLE));
        assert!(svg.contains("PRISM IDENTITY COLLECTION"));
        assert!(svg.contains(FOOTER_LINE.replace('&', "&amp;").as_str()));
        assert!(!svg.contains("NO."));
    }

    #[test]
    fn layout_grows_with_quotes() {
        let empty = render_collection(&[]).layout();
        let one = render_collection(&quotes(&["短句"])).layout();
        let long = render_collection(&quotes(&[&"长".repeat(200)])).layout();

        assert_eq!(empty.width, SURFACE_WIDTH);
        assert!(one.height > empty.height);
        assert!(long.height > one.height);
        assert!(long.entries[0].lines.len() > 1);
    }

    #[test]
    fn entries_are_stacked_in_order() {
        let layout = render_collection(&quotes(&["a", "b", "c"])).layout();
        let tops: Vec<f32> = layout.entries.iter().map(|e| e.top).collect();
        assert!(tops.windows(2).all(|w| w[0] < w[1]));
        assert!(layout.footer_top > tops[2]);
    }

    #[test]
    fn text_is_escaped() {
        let svg = render_collection(&quotes(&["<b>&\"x\""])).to_svg();
        assert!(svg.contains("&lt;b&gt;&amp;&quot;x&quot;"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn layout_is_deterministic() {
        let surface = render_collection(&quotes(&["一", "二"]));
        assert_eq!(surface.layout(), surface.layout());
        assert_eq!(surface.to_svg(), surface.to_svg());
    }
}
