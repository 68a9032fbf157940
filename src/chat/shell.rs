use super::conversation::{Conversation, PendingReply, PendingVoice};
use crate::farm::FarmContext;
use crate::language::Language;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Called from timer tasks after they post an event, so the UI can repaint.
pub type Wake = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub thinking_delay: Duration,
    pub voice_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            thinking_delay: Duration::from_millis(800),
            voice_delay: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone)]
enum ShellEvent {
    ReplyDue(PendingReply),
    VoiceCaptured(PendingVoice),
}

/// The chat panel as the host sees it: closed, or open with a live
/// [`Conversation`]. Timer continuations arrive over a channel and are only
/// applied to the conversation that scheduled them.
///
/// Scheduling spawns tokio tasks, so a runtime must be entered.
pub struct ChatShell {
    context: FarmContext,
    timing: Timing,
    start_language: Language,
    conversation: Option<Conversation>,
    timers: Vec<JoinHandle<()>>,
    event_sender: std_mpsc::Sender<ShellEvent>,
    event_receiver: std_mpsc::Receiver<ShellEvent>,
    wake: Wake,
}

impl ChatShell {
    pub fn new(context: FarmContext, timing: Timing, start_language: Language, wake: Wake) -> Self {
        let (event_sender, event_receiver) = std_mpsc::channel();
        Self {
            context,
            timing,
            start_language,
            conversation: None,
            timers: Vec::new(),
            event_sender,
            event_receiver,
            wake,
        }
    }

    pub fn context(&self) -> &FarmContext {
        &self.context
    }

    pub fn is_open(&self) -> bool {
        self.conversation.is_some()
    }

    pub fn conversation(&self) -> Option<&Conversation> {
        self.conversation.as_ref()
    }

    pub fn conversation_mut(&mut self) -> Option<&mut Conversation> {
        self.conversation.as_mut()
    }

    pub fn open(&mut self) {
        if self.conversation.is_some() {
            return;
        }
        let conversation = Conversation::start(&self.context, self.start_language);
        log::info!("💬 Chat opened (session {})", conversation.id());
        self.conversation = Some(conversation);
    }

    /// Drops the conversation and everything still scheduled for it.
    pub fn close(&mut self) {
        let Some(conversation) = self.conversation.take() else {
            return;
        };

        // Stop anything still sleeping
        let cancelled = self.timers.len();
        for timer in self.timers.drain(..) {
            timer.abort();
        }
        // Events that fired but were never pumped belong to the old session
        while self.event_receiver.try_recv().is_ok() {}

        log::info!(
            "👋 Chat closed (session {}, {} message(s), {} timer(s) cancelled)",
            conversation.id(),
            conversation.messages().len(),
            cancelled
        );
    }

    /// Follows the host's open flag.
    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.close();
        }
    }

    /// Sends the input box. Returns whether a message was appended.
    pub fn submit(&mut self) -> bool {
        let Some(pending) = self.conversation.as_mut().and_then(Conversation::submit) else {
            return false;
        };
        log::debug!("📝 User asked: {}", pending.prompt);
        self.schedule(self.timing.thinking_delay, ShellEvent::ReplyDue(pending));
        true
    }

    pub fn toggle_language(&mut self) {
        if let Some(conversation) = self.conversation.as_mut() {
            conversation.toggle_language();
            log::debug!("🌐 Language switched to {}", conversation.language());
        }
    }

    pub fn toggle_recording(&mut self) {
        let Some(voice) = self.conversation.as_mut().and_then(Conversation::toggle_recording) else {
            return;
        };
        log::debug!("🎤 Recording started ({})", voice.language);
        self.schedule(self.timing.voice_delay, ShellEvent::VoiceCaptured(voice));
    }

    /// Applies every timer that has fired since the last call. Returns how
    /// many of them changed the conversation.
    pub fn pump(&mut self) -> usize {
        // Forget handles of timers that already fired
        self.timers.retain(|timer| !timer.is_finished());

        let mut applied = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            let Some(conversation) = self.conversation.as_mut() else {
                continue;
            };
            // Session ids reject events from a conversation that was closed
            let accepted = match &event {
                ShellEvent::ReplyDue(pending) => conversation.deliver(pending, &self.context),
                ShellEvent::VoiceCaptured(voice) => conversation.finish_recording(voice),
            };
            if accepted {
                applied += 1;
            } else {
                log::debug!("⏭️ Dropped stale timer event {:?}", event);
            }
        }
        applied
    }

    fn schedule(&mut self, delay: Duration, event: ShellEvent) {
        let sender = self.event_sender.clone();
        let wake = Arc::clone(&self.wake);

        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(event).is_ok() {
                (*wake)();
            }
        });
        self.timers.push(timer);
    }
}

impl Drop for ChatShell {
    fn drop(&mut self) {
        for timer in self.timers.drain(..) {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::farm::CropRecord;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const FAST: Timing = Timing {
        thinking_delay: Duration::from_millis(10),
        voice_delay: Duration::from_millis(10),
    };

    fn shell_with_counter() -> (ChatShell, Arc<AtomicUsize>) {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        let context = FarmContext {
            farmer_name: "Anil".to_string(),
            current_crops: vec![CropRecord::new("Coconut", "mature", None)],
            recent_activities: Vec::new(),
        };
        let shell = ChatShell::new(
            context,
            FAST,
            Language::English,
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        (shell, wakes)
    }

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(80)).await;
    }

    #[tokio::test]
    async fn closed_shell_ignores_actions() {
        let (mut shell, _) = shell_with_counter();
        assert!(!shell.is_open());
        assert!(!shell.submit());
        shell.toggle_language();
        shell.toggle_recording();
        assert_eq!(shell.pump(), 0);
        assert!(shell.conversation().is_none());
    }

    #[tokio::test]
    async fn reply_arrives_after_delay() {
        let (mut shell, wakes) = shell_with_counter();
        shell.open();
        shell.conversation_mut().unwrap().input = "coconut pest".to_string();

        assert!(shell.submit());
        assert_eq!(shell.conversation().unwrap().messages().len(), 2);
        assert_eq!(shell.pump(), 0);

        settle().await;
        assert_eq!(shell.pump(), 1);
        assert_eq!(wakes.load(Ordering::SeqCst), 1);

        let messages = shell.conversation().unwrap().messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[2].text.contains("Rhinoceros beetle"));
    }

    #[tokio::test]
    async fn blank_submit_schedules_nothing() {
        let (mut shell, wakes) = shell_with_counter();
        shell.open();
        shell.conversation_mut().unwrap().input = "  ".to_string();
        assert!(!shell.submit());

        settle().await;
        assert_eq!(shell.pump(), 0);
        assert_eq!(wakes.load(Ordering::SeqCst), 0);
        assert_eq!(shell.conversation().unwrap().messages().len(), 1);
    }

    #[tokio::test]
    async fn closing_discards_pending_reply() {
        let (mut shell, _) = shell_with_counter();
        shell.open();
        shell.conversation_mut().unwrap().input = "weather".to_string();
        shell.submit();
        shell.close();
        assert!(!shell.is_open());

        shell.open();
        settle().await;
        assert_eq!(shell.pump(), 0);
        assert_eq!(shell.conversation().unwrap().messages().len(), 1);
    }

    #[tokio::test]
    async fn reopening_resets_to_greeting() {
        let (mut shell, _) = shell_with_counter();
        shell.set_open(true);
        shell.toggle_language();
        shell.conversation_mut().unwrap().input = "market".to_string();
        shell.submit();
        settle().await;
        shell.pump();
        assert_eq!(shell.conversation().unwrap().messages().len(), 3);

        shell.set_open(false);
        shell.set_open(true);
        let conversation = shell.conversation().unwrap();
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.language(), Language::English);
    }

    #[tokio::test]
    async fn voice_capture_fills_input() {
        let (mut shell, _) = shell_with_counter();
        shell.open();
        shell.toggle_recording();
        assert!(shell.conversation().unwrap().is_recording());

        settle().await;
        assert_eq!(shell.pump(), 1);
        let conversation = shell.conversation().unwrap();
        assert!(!conversation.is_recording());
        assert_eq!(conversation.input, "What fertilizer should I use for my rice crop?");
    }

    #[tokio::test]
    async fn stopping_recording_still_receives_phrase() {
        let (mut shell, _) = shell_with_counter();
        shell.open();
        shell.toggle_language();
        shell.toggle_recording();
        shell.toggle_recording();
        assert!(!shell.conversation().unwrap().is_recording());

        settle().await;
        assert_eq!(shell.pump(), 1);
        let conversation = shell.conversation().unwrap();
        assert!(!conversation.is_recording());
        assert_eq!(conversation.input, "എന്റെ നെല്ലിന് എന്ത് വളം ഇടണം?");
    }
}
