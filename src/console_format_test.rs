/// Tests for console formatting module
///
/// These tests pin the exact escape sequences and padding so colored
/// output stays byte-compatible with the plain layout.

#[cfg(test)]
mod tests {
    use crate::console_format::*;

    #[test]
    fn test_plain_emphasis_passes_text_through() {
        let emphasis = Emphasis::plain();
        assert!(!emphasis.uses_colors());
        assert_eq!(emphasis.emphasize("ENABLED MONITORABLES", Style::Green), "ENABLED MONITORABLES");
        assert_eq!(emphasis.emphasize(" tags ", Style::Inverse), " tags ");
    }

    #[test]
    fn test_colored_emphasis_wraps_text() {
        let emphasis = Emphasis::new(true);
        assert_eq!(emphasis.emphasize("ok", Style::Green), "\x1b[32mok\x1b[0m");
        assert_eq!(emphasis.emphasize("warn", Style::Yellow), "\x1b[33mwarn\x1b[0m");
        assert_eq!(emphasis.emphasize("err", Style::Red), "\x1b[31merr\x1b[0m");
        assert_eq!(emphasis.emphasize("url", Style::Blue), "\x1b[34murl\x1b[0m");
    }

    #[test]
    fn test_grey_uses_bright_palette() {
        let emphasis = Emphasis::new(true);
        assert_eq!(emphasis.emphasize("[default]", Style::Grey), "\x1b[90m[default]\x1b[0m");
    }

    #[test]
    fn test_inverse_is_attribute_only() {
        let emphasis = Emphasis::new(true);
        assert_eq!(emphasis.emphasize(" faker ", Style::Inverse), "\x1b[7m faker \x1b[0m");
    }

    #[test]
    fn test_colored_emphasis_leaves_empty_text_alone() {
        assert_eq!(Emphasis::new(true).emphasize("", Style::Grey), "");
    }

    #[test]
    fn test_detect_respects_no_color_flag() {
        assert!(!Emphasis::detect(true).uses_colors());
    }

    #[test]
    fn test_display_width_unicode() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("│"), 1);
        assert_eq!(display_width("✓ "), 2);
        assert_eq!(display_width("📦"), 2);
    }

    #[test]
    fn test_pad_styled_measures_plain_text() {
        let styled = Emphasis::new(true).emphasize("yarn", Style::Green);
        let padded = pad_styled("yarn", &styled, 8);
        assert_eq!(padded, format!("{}    ", styled));
    }

    #[test]
    fn test_pad_styled_never_truncates() {
        assert_eq!(pad_styled("too long", "too long", 3), "too long");
    }
}
