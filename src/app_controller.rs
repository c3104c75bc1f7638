use log::{debug, error, info, warn};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::app_config::Config;
use crate::editor::{Cursor, DocumentSurface, Editor};
use crate::errors::AppError;
use crate::highlight::{render_preview, toggle_bold, wrap_keywords_with, HighlightOptions, Highlighter};
use crate::providers::{AnalysisResult, Analyzer};

// @module: Orchestration of editor, analysis service and highlighting

/// Scoped busy state: set on acquire, cleared on drop
#[derive(Debug)]
pub struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Set the flag, or return `None` if it is already set
    pub fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Main application controller for document highlighting
pub struct Controller<E: Editor, S: DocumentSurface> {
    // @field: App configuration
    config: Config,
    highlighter: Highlighter,
    analyzer: Arc<dyn Analyzer>,
    editor: Mutex<Option<E>>,
    surface: Mutex<S>,
    // @field: Set while an analysis is in flight
    busy: AtomicBool,
    placeholder_visible: AtomicBool,
    // @field: Result of the most recent successful analysis
    last_analysis: Mutex<Option<AnalysisResult>>,
}

impl<E: Editor, S: DocumentSurface> Controller<E, S> {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config, analyzer: Arc<dyn Analyzer>, surface: S) -> Self {
        let highlighter = Highlighter::new(HighlightOptions::from(&config.highlight));
        Self {
            config,
            highlighter,
            analyzer,
            editor: Mutex::new(None),
            surface: Mutex::new(surface),
            busy: AtomicBool::new(false),
            placeholder_visible: AtomicBool::new(false),
            last_analysis: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Attach the editor; an empty editor starts with the placeholder shown
    pub fn attach_editor(&self, editor: E) {
        let empty = editor.get_value().is_empty();
        *self.editor.lock() = Some(editor);
        self.placeholder_visible.store(empty, Ordering::Release);
    }

    /// Whether an analysis is currently running
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible.load(Ordering::Acquire)
    }

    /// Editor gained focus: hide the placeholder
    pub fn on_focus(&self) {
        self.placeholder_visible.store(false, Ordering::Release);
    }

    /// Editor lost focus: show the placeholder if the buffer is empty
    pub fn on_blur(&self) {
        let empty = self.editor.lock()
            .as_ref()
            .is_some_and(|editor| editor.get_value().is_empty());
        if empty {
            self.placeholder_visible.store(true, Ordering::Release);
        }
    }

    /// Current editor buffer, if an editor is attached
    pub fn editor_value(&self) -> Option<String> {
        self.editor.lock().as_ref().map(|editor| editor.get_value())
    }

    /// Most recent successful analysis
    pub fn last_analysis(&self) -> Option<AnalysisResult> {
        self.last_analysis.lock().clone()
    }

    /// Run one analysis: fetch the result, highlight the content, bold the
    /// keywords in the editor buffer and refresh the preview.
    ///
    /// Returns `AppError::Busy` without side effects if a run is already in flight.
    pub async fn run_analysis(&self) -> Result<AnalysisResult, AppError> {
        let text = match self.editor.lock().as_ref() {
            Some(editor) => editor.get_value(),
            None => {
                error!("Editor not initialized.");
                return Err(AppError::EditorUnavailable);
            }
        };

        let Some(_busy) = BusyGuard::try_acquire(&self.busy) else {
            warn!("Analysis already in progress, ignoring request");
            return Err(AppError::Busy);
        };

        info!("Analyzing document ({} chars)", text.chars().count());
        let result = match self.analyzer.analyze(&text).await {
            Ok(result) => result,
            Err(e) => {
                error!("Error analyzing text: {}", e);
                return Err(e.into());
            }
        };

        self.apply_highlight(&result);

        let wrapped = wrap_keywords_with(&text, &result.words, self.highlighter.options().escape_keywords);
        if let Some(editor) = self.editor.lock().as_mut() {
            editor.set_value(&wrapped);
        }
        self.update_preview(&wrapped);

        info!(
            "Highlighted {} sentence(s) and {} keyword(s)",
            result.sentences.len(),
            result.words.len()
        );
        *self.last_analysis.lock() = Some(result.clone());
        Ok(result)
    }

    /// Highlight the surface content in place. Returns the new markup, or
    /// `None` if the content container is missing.
    pub fn apply_highlight(&self, result: &AnalysisResult) -> Option<String> {
        let mut surface = self.surface.lock();
        let Some(html) = surface.content_html() else {
            error!("Content element not found, skipping highlight.");
            return None;
        };

        let updated = self.highlighter.highlight(&html, &result.sentences, &result.words);
        if !surface.set_content_html(&updated) {
            error!("Content element not found, highlight not written.");
            return None;
        }
        Some(updated)
    }

    /// Render `text` into the preview pane. Returns `false` if the pane is missing.
    pub fn update_preview(&self, text: &str) -> bool {
        let rendered = render_preview(text);
        if self.surface.lock().set_preview_html(&rendered) {
            true
        } else {
            error!("Preview element not found.");
            false
        }
    }

    /// Bold the keyword under the cursor, using the last analysis' keywords.
    ///
    /// Returns `true` if the buffer changed.
    pub fn toggle_bold(&self, cursor: Cursor) -> bool {
        let keywords = self.last_analysis.lock()
            .as_ref()
            .map(|result| result.words.clone())
            .unwrap_or_default();

        let mut editor = self.editor.lock();
        let Some(editor) = editor.as_mut() else {
            return false;
        };

        match toggle_bold(&editor.get_value(), cursor, &keywords) {
            Some(updated) => {
                debug!("Bolded keyword at line {}, column {}", cursor.line, cursor.ch);
                editor.set_value(&updated);
                true
            }
            None => false,
        }
    }

    /// Consume the controller, handing back the editor and surface
    pub fn into_parts(self) -> (Option<E>, S) {
        (self.editor.into_inner(), self.surface.into_inner())
    }
}
