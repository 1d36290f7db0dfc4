use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

/// Symbols a line may be decorated with. `⭐️` carries a U+FE0F variation selector.
pub const DECORATIONS: [&str; 15] = [
    "🌟",
    "⭐\u{FE0F}",
    "✨",
    "💫",
    "🎯",
    "🎨",
    "💻",
    "📱",
    "🎮",
    "🎓",
    "📚",
    "💡",
    "🔥",
    "🌈",
    "🚀",
];

/// Leading run of non-word characters (word = ASCII letters, digits and `_`)
fn leading_symbols_regex() -> &'static Regex {
    static LEADING: OnceLock<Regex> = OnceLock::new();
    LEADING.get_or_init(|| {
        Regex::new("^[^A-Za-z0-9_]*").expect("leading symbols pattern is a fixed literal")
    })
}

/// UTF-16 code units of every decoration, surrogate halves included
fn decoration_code_units() -> &'static [u16] {
    static UNITS: OnceLock<Vec<u16>> = OnceLock::new();
    UNITS.get_or_init(|| {
        let mut units: Vec<u16> = DECORATIONS.iter().flat_map(|d| d.encode_utf16()).collect();
        units.sort_unstable();
        units.dedup();
        units
    })
}

/// Check whether a line already starts with a recognized decoration
///
/// Recognition works on UTF-16 code units: a line counts as decorated when any
/// unit of its leading non-word run is also a unit of one of [`DECORATIONS`].
/// Every emoji from U+1F000 to U+1F7FF shares a high surrogate with the set, so
/// `📸 tips` and `😀 hi` are recognized just like `🔥 hot`.
pub fn is_decorated(line: &str) -> bool {
    let units = decoration_code_units();
    let leading = leading_symbols_regex()
        .find(line)
        .map_or("", |prefix| prefix.as_str());
    leading
        .encode_utf16()
        .any(|unit| units.binary_search(&unit).is_ok())
}

/// Decorate every non-blank, undecorated line of `info` with a random symbol
pub fn enhance_additional_info(info: &str) -> String {
    enhance_additional_info_with(info, &mut rand::thread_rng())
}

/// Same as [`enhance_additional_info`] but draws symbols from the given generator.
///
/// Blank and whitespace-only lines are emitted verbatim, as are lines for which
/// [`is_decorated`] holds. Each remaining line gets one uniformly chosen symbol
/// from [`DECORATIONS`] and a single space in front of it.
pub fn enhance_additional_info_with<R: Rng + ?Sized>(info: &str, rng: &mut R) -> String {
    let mut decorated = 0usize;
    let enhanced = info
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() || is_decorated(line) {
                return line.to_string();
            }
            decorated += 1;
            let symbol = DECORATIONS[rng.gen_range(0..DECORATIONS.len())];
            format!("{} {}", symbol, line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    tracing::trace!(decorated, "Enhanced additional info");
    enhanced
}
