//! Page load: onboarding, the March guide and the bootstrap sequence.

use dugout_domain::{Attachment, MessageId, MonthGuide, Sender};

use super::GameClient;
use crate::ports::outbound::storage_keys;
use crate::ui::presentation::state::ClientStore;

pub(crate) const INIT_FAILED: &str = "초기화에 실패했습니다. 페이지를 새로고침해주세요.";
/// Pause after the onboarding closes and before the opening message.
const SETTLE_MS: u64 = 500;

impl<S: ClientStore> GameClient<S> {
    /// Shows the tutorial on first run; otherwise boots straight away.
    pub async fn on_page_load(&self) {
        if self
            .platform
            .storage_load(storage_keys::ONBOARDING_COMPLETED)
            .is_none()
        {
            tracing::info!("First run, showing onboarding");
            self.store.update(|s| s.onboarding.open());
            return;
        }
        self.run_bootstrap().await;
    }

    pub fn onboarding_next(&self) -> bool {
        self.store.update(|s| s.onboarding.next())
    }

    pub fn onboarding_prev(&self) -> bool {
        self.store.update(|s| s.onboarding.prev())
    }

    pub fn onboarding_go_to(&self, page: usize) -> bool {
        self.store.update(|s| s.onboarding.go_to(page))
    }

    pub fn set_dont_show_again(&self, value: bool) {
        self.store.update(|s| s.onboarding.set_dont_show_again(value));
    }

    /// Closes the tutorial, then shows the March guide and boots.
    pub async fn close_onboarding(&self) {
        let dont_show_again = self.store.update(|s| {
            s.onboarding.close();
            s.onboarding.dont_show_again()
        });
        if dont_show_again {
            self.platform
                .storage_save(storage_keys::ONBOARDING_COMPLETED, "true");
        }

        self.wait(SETTLE_MS).await;
        self.show_march_guide();
        self.run_bootstrap().await;
    }

    /// Appends the March guide card the first time only.
    pub fn show_march_guide(&self) -> Option<MessageId> {
        if self
            .platform
            .storage_load(storage_keys::MARCH_GUIDE_SHOWN)
            .is_some()
        {
            return None;
        }
        let guide = MonthGuide::for_month(3)?;
        let id = self.store.update(|s| {
            s.transcript
                .append_with(Sender::Guide, "", Attachment::MonthGuide(guide))
        });
        self.platform
            .storage_save(storage_keys::MARCH_GUIDE_SHOWN, "true");
        Some(id)
    }

    /// "시작하기" on a guide card.
    pub fn close_guide(&self, id: MessageId) {
        self.store.update(|s| {
            s.transcript.remove(id);
        });
    }

    /// Input off, then storybook check and stats together; input back on
    /// only in chat mode; then the opening message if the chat is empty.
    pub async fn run_bootstrap(&self) {
        self.store.update(|s| {
            s.disable_input();
            s.banner = None;
        });

        let (storybook, stats) = futures_util::join!(
            self.check_initial_storybook(),
            self.services.game.stats(self.username()),
        );
        let (storybook_active, snapshot) = match (storybook, stats) {
            (Ok(active), Ok(snapshot)) => (active, snapshot),
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!(error = %e, "Bootstrap failed");
                self.store.update(|s| s.banner = Some(INIT_FAILED.to_string()));
                return;
            }
        };
        self.store.update(|s| {
            s.stats.apply_snapshot(&snapshot);
            if !storybook_active {
                s.enable_input();
            }
        });

        self.wait(SETTLE_MS).await;
        if !self.store.read(|s| s.transcript.has_conversation()) {
            self.send_init().await;
        }
    }
}
