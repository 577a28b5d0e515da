// src/submission/surface.rs
// =============================================================================
// Display surfaces the submission controller writes to.
//
// There are exactly two things on screen: a size label and a download link.
// The controller never touches stdout directly; it is handed a Surface, so
// tests can swap in a recorder and the `form` command can print to the
// terminal.
// =============================================================================

/// Where the controller puts its output.
pub trait Surface: Send {
    fn set_size_label(&mut self, text: &str);
    fn set_download_link(&mut self, url: &str);
    /// Interrupting message for the user (e.g. empty input)
    fn alert(&mut self, message: &str);
}

/// What the two display surfaces currently show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub size_label: String,
    pub download_link: Option<String>,
}

/// Prints every change to the terminal and remembers the current state.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    state: DisplayState,
}

impl TerminalSurface {
    pub fn state(&self) -> &DisplayState {
        &self.state
    }
}

impl Surface for TerminalSurface {
    fn set_size_label(&mut self, text: &str) {
        self.state.size_label = text.to_string();
        println!("{}", text);
    }

    fn set_download_link(&mut self, url: &str) {
        self.state.download_link = Some(url.to_string());
        println!("⬇️  Download: {}", url);
    }

    fn alert(&mut self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_surface_tracks_state() {
        let link = "https://github.com/o/r/archive/refs/heads/main.zip";
        let mut surface = TerminalSurface::default();
        surface.set_size_label("Size: Loading...");
        surface.set_size_label("Size: 1.00 MB");
        surface.set_download_link(link);

        assert_eq!(
            surface.state(),
            &DisplayState {
                size_label: "Size: 1.00 MB".to_string(),
                download_link: Some(link.to_string()),
            }
        );
    }

    #[test]
    fn test_alert_leaves_state_alone() {
        let mut surface = TerminalSurface::default();
        surface.alert("Please enter a GitHub repository URL");
        assert_eq!(surface.state(), &DisplayState::default());
    }
}
