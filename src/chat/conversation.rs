/// State of one open chat: message history, input box, language and the
/// voice stub. Timers live in the shell; this type only records what they
/// should do once they fire.
use super::message::ChatMessage;
use crate::ai::KrishiSakhi;
use crate::farm::FarmContext;
use crate::language::Language;
use uuid::Uuid;

/// A reply that is owed to the conversation once the typing delay elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub session: Uuid,
    pub prompt: String,
    pub language: Language,
}

/// A fake dictation that finishes after the recording delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingVoice {
    pub session: Uuid,
    pub language: Language,
}

pub struct Conversation {
    id: Uuid,
    messages: Vec<ChatMessage>,
    pub input: String,
    language: Language,
    recording: bool,
    awaiting_replies: usize,
}

impl Conversation {
    /// Starts a conversation with the assistant's greeting already in place.
    pub fn start(context: &FarmContext, language: Language) -> Self {
        let greeting = KrishiSakhi::reply("hello", &context.current_crops, language, &context.farmer_name);

        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatMessage::assistant(greeting, language)],
            input: String::new(),
            language,
            recording: false,
            awaiting_replies: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// True while at least one reply is still "being typed".
    pub fn is_thinking(&self) -> bool {
        self.awaiting_replies > 0
    }

    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Moves the input box into the history. Blank input does nothing.
    pub fn submit(&mut self) -> Option<PendingReply> {
        if !self.can_submit() {
            return None;
        }

        let prompt = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(prompt.clone(), self.language));
        self.awaiting_replies += 1;

        Some(PendingReply {
            session: self.id,
            prompt,
            language: self.language,
        })
    }

    /// Appends the assistant's answer for `pending`. Returns false when the
    /// reply belongs to another session.
    pub fn deliver(&mut self, pending: &PendingReply, context: &FarmContext) -> bool {
        if pending.session != self.id {
            return false;
        }

        let answer = KrishiSakhi::reply(
            &pending.prompt,
            &context.current_crops,
            pending.language,
            &context.farmer_name,
        );
        self.messages.push(ChatMessage::assistant(answer, pending.language));
        self.awaiting_replies = self.awaiting_replies.saturating_sub(1);
        true
    }

    /// Switches language for everything that comes next. History is untouched.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    /// Flips the microphone. Turning it on starts a capture that will fill
    /// the input box when it finishes; turning it off just clears the flag.
    pub fn toggle_recording(&mut self) -> Option<PendingVoice> {
        self.recording = !self.recording;
        self.recording.then_some(PendingVoice {
            session: self.id,
            language: self.language,
        })
    }

    pub fn finish_recording(&mut self, voice: &PendingVoice) -> bool {
        if voice.session != self.id {
            return false;
        }

        self.recording = false;
        self.input = dictated_phrase(voice.language).to_string();
        true
    }

    pub fn placeholder(&self) -> &'static str {
        self.language
            .pick("Ask crop-specific questions...", "വിള-നിർദ്ദിഷ്ട ചോദ്യം ചോദിക്കുക...")
    }
}

/// What the voice stub "hears".
pub fn dictated_phrase(language: Language) -> &'static str {
    language.pick(
        "What fertilizer should I use for my rice crop?",
        "എന്റെ നെല്ലിന് എന്ത് വളം ഇടണം?",
    )
}
