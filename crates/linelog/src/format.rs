//! Rendering of a single log record into its final line.

use crate::color::Palette;
use crate::level::Level;

/// Render one record as `<timestamp> [<LEVEL>]: <label> - <message>\n`.
///
/// When a palette is given and the level has an entry, only the bracketed
/// tag is wrapped in the start/reset sequences; timestamp, label, and
/// message are never decorated. The timestamp is substituted opaquely.
pub fn render(
    timestamp: &str,
    level: Level,
    label: &str,
    message: &str,
    palette: Option<&Palette>,
) -> String {
    let styled = palette
        .and_then(|palette| palette.start(level).map(|start| (start, palette.reset())));
    let tag = match styled {
        Some((start, reset)) => format!("{start}[{level}]{reset}"),
        None => format!("[{level}]"),
    };
    format!("{timestamp} {tag}: {label} - {message}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Capability, CapabilitySource};

    struct MarkerCaps;

    impl CapabilitySource for MarkerCaps {
        fn query(&self, capability: Capability) -> Option<String> {
            match capability {
                Capability::Reset => Some("<R>".to_string()),
                Capability::Foreground(index) => Some(format!("<{index}>")),
                Capability::Colors => Some("256".to_string()),
            }
        }
    }

    #[test]
    fn renders_documented_line_shape() {
        let line = render("2025-09-16 12:40:00", Level::Debug, "scan", "found 42 candidates", None);
        assert_eq!(line, "2025-09-16 12:40:00 [DEBUG]: scan - found 42 candidates\n");
    }

    #[test]
    fn empty_message_still_renders_separator() {
        let line = render("ts", Level::Info, "main", "", None);
        assert_eq!(line, "ts [INFO]: main - \n");
    }

    #[test]
    fn palette_wraps_only_the_tag() {
        let palette = Palette::resolve(&MarkerCaps);
        let line = render("ts", Level::Error, "io", "disk full", Some(&palette));
        assert_eq!(line, "ts <1>[ERROR]<R>: io - disk full\n");
    }

    #[test]
    fn info_tag_stays_plain_even_with_palette() {
        let palette = Palette::resolve(&MarkerCaps);
        let line = render("ts", Level::Info, "main", "ready", Some(&palette));
        assert_eq!(line, "ts [INFO]: main - ready\n");
    }
}
