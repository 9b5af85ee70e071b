//! View state for a collaborator that shows either an editor or the parsed
//! document. The parser never depends on this module.

use crate::block::Document;
use crate::parser::parse;
use crate::sample::SAMPLE;

/// Which side of the view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Editing,
    Viewing,
}

/// Externally owned state, changed only through [`ViewState::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    source_text: String,
    document: Document,
    mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(SAMPLE)
    }
}

impl ViewState {
    /// Start in the editor with `source_text` and no parsed document.
    pub fn new(source_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            document: Document::default(),
            mode: ViewMode::Editing,
        }
    }

    /// Flip between editor and document.
    ///
    /// From the editor, `input` becomes the source text and is parsed; the
    /// view switches to the document only when it has at least one block.
    /// From the document, the view returns to the editor and `input` is
    /// ignored.
    pub fn toggle(&mut self, input: &str) -> ViewMode {
        match self.mode {
            ViewMode::Editing => {
                self.source_text = input.to_string();
                let document = parse(input);
                if document.is_empty() {
                    log::trace!("nothing to show, staying in editor");
                } else {
                    self.document = document;
                    self.mode = ViewMode::Viewing;
                }
            }
            ViewMode::Viewing => {
                self.mode = ViewMode::Editing;
            }
        }
        log::trace!("view mode is now {:?}", self.mode);
        self.mode
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_viewing(&self) -> bool {
        self.mode == ViewMode::Viewing
    }
}
