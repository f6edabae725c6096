//! Storybook viewer state machine
//!
//! The viewer is either idle (`Chat`) or showing a storybook; endings are a
//! storybook shown in `Ending` mode and can never return to chat.

use crate::entities::{CompletionAction, Storybook};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Chat,
    Storybook,
    Ending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartButtonKind {
    StartChat,
    GameEnd,
}

/// Button shown on the last page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartButton {
    pub label: &'static str,
    pub kind: StartButtonKind,
}

/// Everything the view needs to render the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: String,
    pub image: Option<String>,
    pub text: String,
    pub progress: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub start_button: Option<StartButton>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorybookViewer {
    current: Option<Storybook>,
    current_page: usize,
    mode: ViewMode,
}

impl StorybookViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn current(&self) -> Option<&Storybook> {
        self.current.as_ref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Whether a storybook (or ending) is on screen.
    pub fn is_active(&self) -> bool {
        self.mode != ViewMode::Chat
    }

    pub fn is_ending(&self) -> bool {
        self.mode == ViewMode::Ending
    }

    pub fn open(&mut self, storybook: Storybook) {
        self.current = Some(storybook);
        self.current_page = 0;
        self.mode = ViewMode::Storybook;
    }

    /// Opens a terminal storybook; its completion always ends the game.
    pub fn open_ending(&mut self, mut storybook: Storybook) {
        storybook.completion_action = CompletionAction::GameEnd;
        self.current = Some(storybook);
        self.current_page = 0;
        self.mode = ViewMode::Ending;
    }

    /// Moves one page back. Returns `false` on the first page.
    pub fn prev(&mut self) -> bool {
        if self.current.is_none() || self.current_page == 0 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Moves one page forward. Returns `false` on the last page.
    pub fn next(&mut self) -> bool {
        let Some(book) = &self.current else {
            return false;
        };
        if self.current_page + 1 >= book.page_count() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn is_last_page(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|b| self.current_page + 1 >= b.page_count())
    }

    /// Returns to chat mode, handing back the storybook that was shown.
    pub fn close(&mut self) -> Option<Storybook> {
        self.current_page = 0;
        self.mode = ViewMode::Chat;
        self.current.take()
    }

    pub fn page_view(&self) -> Option<PageView> {
        let book = self.current.as_ref()?;
        let total = book.page_count();
        let page = book.pages.get(self.current_page);
        let is_last = self.is_last_page();

        let text = page
            .map(|p| p.text.trim())
            .filter(|t| !t.is_empty())
            .unwrap_or("내용 없음")
            .to_string();

        let start_button = is_last.then(|| {
            if book.completion_action.is_game_end() {
                StartButton {
                    label: "게임 종료",
                    kind: StartButtonKind::GameEnd,
                }
            } else {
                StartButton {
                    label: "대화 시작하기",
                    kind: StartButtonKind::StartChat,
                }
            }
        });

        Some(PageView {
            title: book.title.clone(),
            image: page.and_then(|p| p.image.clone()),
            text,
            progress: format!("{} / {}", (self.current_page + 1).min(total), total),
            prev_enabled: self.current_page > 0,
            next_enabled: !is_last,
            start_button,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::StoryPage;

    fn book(pages: usize) -> Storybook {
        Storybook {
            id: "3_intro".into(),
            title: "3월의 시작".into(),
            subtitle: None,
            pages: (0..pages)
                .map(|i| StoryPage {
                    text: format!("page {i}"),
                    image: None,
                })
                .collect(),
            completion_action: CompletionAction::StartChat,
        }
    }

    #[test]
    fn pagination_is_clamped() {
        let mut viewer = StorybookViewer::new();
        viewer.open(book(3));
        assert!(!viewer.prev());
        assert_eq!(viewer.current_page(), 0);
        assert!(viewer.next());
        assert!(viewer.next());
        assert!(!viewer.next());
        assert_eq!(viewer.current_page(), 2);
        assert!(viewer.prev());
        assert_eq!(viewer.current_page(), 1);
    }

    #[test]
    fn start_button_only_on_last_page() {
        let mut viewer = StorybookViewer::new();
        viewer.open(book(2));
        let first = viewer.page_view().unwrap();
        assert_eq!(first.progress, "1 / 2");
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);
        assert!(first.start_button.is_none());

        viewer.next();
        let last = viewer.page_view().unwrap();
        assert_eq!(last.progress, "2 / 2");
        assert!(!last.next_enabled);
        assert_eq!(last.start_button.unwrap().label, "대화 시작하기");
    }

    #[test]
    fn ending_shows_game_end_button() {
        let mut viewer = StorybookViewer::new();
        viewer.open_ending(book(1));
        assert_eq!(viewer.mode(), ViewMode::Ending);
        let view = viewer.page_view().unwrap();
        assert_eq!(
            view.start_button,
            Some(StartButton {
                label: "게임 종료",
                kind: StartButtonKind::GameEnd
            })
        );
    }

    #[test]
    fn empty_text_and_empty_book_render_placeholder() {
        let mut viewer = StorybookViewer::new();
        let mut b = book(1);
        b.pages[0].text = "   ".into();
        viewer.open(b);
        assert_eq!(viewer.page_view().unwrap().text, "내용 없음");

        viewer.open(book(0));
        let view = viewer.page_view().unwrap();
        assert_eq!(view.text, "내용 없음");
        assert_eq!(view.progress, "0 / 0");
        assert!(view.start_button.is_some());
        assert!(!viewer.next());
    }

    #[test]
    fn close_returns_to_chat() {
        let mut viewer = StorybookViewer::new();
        viewer.open(book(2));
        viewer.next();
        assert!(viewer.is_active());
        let closed = viewer.close().unwrap();
        assert_eq!(closed.id, "3_intro");
        assert!(!viewer.is_active());
        assert!(viewer.page_view().is_none());
        assert!(!viewer.prev());
    }
}
