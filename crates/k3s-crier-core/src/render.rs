//! Link rendering
//!
//! Keeps presentation out of the lookup path: links are rendered either
//! as the plain URL or as an OSC 8 terminal hyperlink, chosen once at
//! startup from a stdout probe.

use std::io::{stdout, IsTerminal};

/// How link URLs are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Bare URL, for pipes and files
    Plain,
    /// OSC 8 clickable hyperlink whose visible text is the URL itself
    Hyperlink,
}

impl LinkStyle {
    /// Pick a style from the stdout terminal probe
    pub fn detect() -> Self {
        if stdout().is_terminal() {
            Self::Hyperlink
        } else {
            Self::Plain
        }
    }

    /// Render a URL in this style
    ///
    /// The visible URL text is identical in both styles.
    pub fn render(&self, url: &str) -> String {
        match self {
            Self::Plain => url.to_string(),
            Self::Hyperlink => {
                format!("\u{1b}]8;;{url}\u{1b}\\{url}\u{1b}]8;;\u{1b}\\")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://update.k3s.io/v1-release/channels/stable";

    #[test]
    fn plain_is_identity() {
        assert_eq!(LinkStyle::Plain.render(URL), URL);
    }

    #[test]
    fn hyperlink_wraps_url_in_osc8() {
        let rendered = LinkStyle::Hyperlink.render(URL);
        assert!(rendered.starts_with("\u{1b}]8;;"));
        assert!(rendered.ends_with("\u{1b}]8;;\u{1b}\\"));
        // the URL appears as both link target and visible text
        assert_eq!(rendered.matches(URL).count(), 2);
    }
}
