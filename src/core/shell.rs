//! Dashboard state: the loaded document, the sidebar flag and the layout rules

use super::document::{DocumentState, GateChange, LoadedDocument};

/// Windows narrower than this get an off-canvas sidebar
pub const SIDEBAR_BREAKPOINT: f32 = 768.0;
/// Windows at least this wide get a two-column dashboard
pub const TWO_COLUMN_BREAKPOINT: f32 = 1024.0;
/// Sidebar width in points
pub const SIDEBAR_WIDTH: f32 = 256.0;

/// Feature panels composed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    DocViewer,
    DocEditor,
    Comments,
    Flashcards,
    Assistant,
}

impl SlotKind {
    /// Panels that only exist while a document is loaded
    pub const GATED: [SlotKind; 3] = [SlotKind::DocEditor, SlotKind::Comments, SlotKind::Flashcards];

    pub fn is_gated(self) -> bool {
        Self::GATED.contains(&self)
    }
}

/// How the sidebar is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    /// Wide windows: always visible, the open flag is ignored
    Docked,
    /// Narrow windows: slides in over the content when open
    OffCanvas { open: bool },
}

impl SidebarMode {
    #[cfg(test)]
    pub fn is_visible(self) -> bool {
        match self {
            SidebarMode::Docked => true,
            SidebarMode::OffCanvas { open } => open,
        }
    }
}

/// Layout decisions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub sidebar: SidebarMode,
    /// 1 or 2 dashboard columns
    pub columns: usize,
    /// Narrow windows show a floating menu button and a header theme toggle
    pub compact: bool,
}

impl ShellLayout {
    pub fn for_width(width: f32, sidebar_open: bool) -> Self {
        let compact = width < SIDEBAR_BREAKPOINT;
        Self {
            sidebar: if compact {
                SidebarMode::OffCanvas { open: sidebar_open }
            } else {
                SidebarMode::Docked
            },
            columns: if width >= TWO_COLUMN_BREAKPOINT { 2 } else { 1 },
            compact,
        }
    }
}

/// State owned by the dashboard shell
#[derive(Debug, Default)]
pub struct ShellState {
    document: DocumentState,
    sidebar_open: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content handed to the assistant and flashcards, `""` before any load
    pub fn doc_content(&self) -> &str {
        self.document.content()
    }

    /// Replace the loaded document wholesale (last write wins)
    pub fn handle_document_loaded(&mut self, doc: LoadedDocument) -> GateChange {
        if self.document.content() == doc.content && self.document.is_loaded() {
            return GateChange::Unchanged;
        }
        tracing::info!(
            "Document loaded: {} ({} bytes)",
            doc.title(),
            doc.content.len()
        );
        self.document.replace(doc)
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Menu button
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        tracing::debug!("Sidebar open: {}", self.sidebar_open);
    }

    /// Navigation links always close the sidebar
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Panels the dashboard renders, in render order
    pub fn visible_slots(&self) -> Vec<SlotKind> {
        let loaded = self.document.is_loaded();
        [
            SlotKind::DocViewer,
            SlotKind::DocEditor,
            SlotKind::Comments,
            SlotKind::Flashcards,
            SlotKind::Assistant,
        ]
        .into_iter()
        .filter(|slot| loaded || !slot.is_gated())
        .collect()
    }

    pub fn layout(&self, width: f32) -> ShellLayout {
        ShellLayout::for_width(width, self.sidebar_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let shell = ShellState::new();
        assert!(!shell.is_sidebar_open());
        assert_eq!(shell.doc_content(), "");
        assert_eq!(
            shell.visible_slots(),
            vec![SlotKind::DocViewer, SlotKind::Assistant]
        );
    }

    #[test]
    fn test_gated_slots_follow_content() {
        let mut shell = ShellState::new();
        assert_eq!(
            shell.handle_document_loaded(LoadedDocument::new("Hello world")),
            GateChange::Opened
        );
        assert_eq!(
            shell.visible_slots(),
            vec![
                SlotKind::DocViewer,
                SlotKind::DocEditor,
                SlotKind::Comments,
                SlotKind::Flashcards,
                SlotKind::Assistant,
            ]
        );
        assert_eq!(shell.doc_content(), "Hello world");

        assert_eq!(
            shell.handle_document_loaded(LoadedDocument::new("")),
            GateChange::Closed
        );
        assert!(shell.visible_slots().iter().all(|slot| !slot.is_gated()));
        assert!(shell.visible_slots().contains(&SlotKind::Assistant));
    }

    #[test]
    fn test_repeated_load_is_noop() {
        let mut shell = ShellState::new();
        shell.handle_document_loaded(LoadedDocument::new("same"));
        assert_eq!(
            shell.handle_document_loaded(LoadedDocument::new("same")),
            GateChange::Unchanged
        );
        assert_eq!(shell.doc_content(), "same");
    }

    #[test]
    fn test_sidebar_toggle_and_navigation_close() {
        let mut shell = ShellState::new();
        shell.toggle_sidebar();
        assert!(shell.is_sidebar_open());
        shell.close_sidebar();
        assert!(!shell.is_sidebar_open());
        shell.close_sidebar();
        assert!(!shell.is_sidebar_open());
    }

    #[test]
    fn test_layout_breakpoints() {
        let mut shell = ShellState::new();

        let narrow = shell.layout(500.0);
        assert!(narrow.compact);
        assert_eq!(narrow.sidebar, SidebarMode::OffCanvas { open: false });
        assert!(!narrow.sidebar.is_visible());
        assert_eq!(narrow.columns, 1);

        shell.toggle_sidebar();
        assert!(shell.layout(500.0).sidebar.is_visible());

        let medium = shell.layout(900.0);
        assert_eq!(medium.sidebar, SidebarMode::Docked);
        assert_eq!(medium.columns, 1);

        // the flag has no effect on wide windows
        for open in [true, false] {
            let wide = ShellLayout::for_width(1280.0, open);
            assert!(wide.sidebar.is_visible());
            assert_eq!(wide.columns, 2);
            assert!(!wide.compact);
        }
    }
}
