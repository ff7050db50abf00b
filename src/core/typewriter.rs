// Pure typewriter state machine; the web side owns the timers.

#[derive(Clone, Debug)]
pub struct TypewriterConfig {
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    pub hold_delay_ms: u32, // pause once a phrase is fully typed
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_delay_ms: 70,
            delete_delay_ms: 35,
            hold_delay_ms: 2000,
        }
    }
}

/// What to display now and how long to wait before the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            config,
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Produce the current text and advance one keystroke.
    ///
    /// Returns `None` when there is nothing to type.
    pub fn step(&mut self) -> Option<TypeStep> {
        let current = self.phrases.get(self.phrase)?;
        let len = current.chars().count();
        let text: String = current.chars().take(self.chars).collect();

        if !self.deleting {
            self.chars += 1;
            if self.chars > len {
                self.deleting = true;
                return Some(TypeStep {
                    text,
                    delay_ms: self.config.hold_delay_ms,
                });
            }
        } else {
            self.chars = self.chars.saturating_sub(1);
            if self.chars == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
            }
        }

        let delay_ms = if self.deleting {
            self.config.delete_delay_ms
        } else {
            self.config.type_delay_ms
        };
        Some(TypeStep { text, delay_ms })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}
