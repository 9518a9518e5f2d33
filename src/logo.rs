/// Shown when an item has no image configured at all.
pub const PLACEHOLDER_SRC: &str = "/placeholder.svg";

/// What to draw for an item that may have an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logo {
    Image(String),
    InitialsBadge(char),
}

impl Logo {
    /// Picks the image until it has failed to load, then the badge.
    pub fn select(name: &str, src: &str, failed: bool) -> Self {
        if failed {
            Self::InitialsBadge(initial_of(name))
        } else if src.trim().is_empty() {
            Self::Image(PLACEHOLDER_SRC.to_string())
        } else {
            Self::Image(src.to_string())
        }
    }
}

/// First character of the name, `?` for a blank name.
pub fn initial_of(name: &str) -> char {
    name.trim().chars().next().unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_until_failure() {
        assert_eq!(
            Logo::select("Selenium", "/logo/selenium.png", false),
            Logo::Image("/logo/selenium.png".to_string())
        );
        assert_eq!(
            Logo::select("Selenium", "/logo/selenium.png", true),
            Logo::InitialsBadge('S')
        );
    }

    #[test]
    fn test_unreachable_source_always_badges() {
        for (name, src) in [
            ("Postman", "/logo/missing.webp"),
            ("VS Code", "https://invalid.example/vscode.png"),
            ("API Testing", ""),
        ] {
            match Logo::select(name, src, true) {
                Logo::InitialsBadge(c) => assert_eq!(Some(c), name.chars().next()),
                Logo::Image(_) => panic!("failed image for {name} should fall back"),
            }
        }
    }

    #[test]
    fn test_empty_source_uses_placeholder() {
        assert_eq!(
            Logo::select("ChatGPT", "  ", false),
            Logo::Image(PLACEHOLDER_SRC.to_string())
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(initial_of("  cypress"), 'c');
        assert_eq!(initial_of(""), '?');
        assert_eq!(initial_of(" "), '?');
    }

    #[test]
    fn test_photo_badge_is_one_character() {
        for (name, letter) in [("Kishor Tiwari", 'K'), ("ßtefan Müller", 'ß')] {
            let badge = match Logo::select(name, "/profile.jpg", true) {
                Logo::InitialsBadge(c) => c.to_string(),
                Logo::Image(src) => panic!("expected badge, got {src}"),
            };
            assert_eq!(badge.chars().count(), 1);
            assert_eq!(badge, letter.to_string());
        }
    }
}
