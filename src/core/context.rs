/// Value written to `document.body.style.overflow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyOverflow {
    Hidden,
    Auto,
    /// Empty string: fall back to the stylesheet.
    Inherit,
}

impl BodyOverflow {
    #[inline]
    pub fn css_value(self) -> &'static str {
        match self {
            BodyOverflow::Hidden => "hidden",
            BodyOverflow::Auto => "auto",
            BodyOverflow::Inherit => "",
        }
    }
}

/// Components that write the body scroll lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockOwner {
    Splash,
    Modal,
}

/// Body scroll lock shared by the splash and the modal.
///
/// Last writer wins: a release from one owner clears a lock taken by the
/// other, exactly as repeated writes to the body style would.
#[derive(Clone, Copy, Debug)]
pub struct ScrollLock {
    overflow: BodyOverflow,
    last_writer: Option<LockOwner>,
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self {
            overflow: BodyOverflow::Inherit,
            last_writer: None,
        }
    }
}

impl ScrollLock {
    pub fn lock(&mut self, owner: LockOwner) -> BodyOverflow {
        self.last_writer = Some(owner);
        self.overflow = BodyOverflow::Hidden;
        self.overflow
    }

    pub fn unlock(&mut self, owner: LockOwner) -> BodyOverflow {
        self.last_writer = Some(owner);
        self.overflow = match owner {
            LockOwner::Splash => BodyOverflow::Inherit,
            LockOwner::Modal => BodyOverflow::Auto,
        };
        self.overflow
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.overflow == BodyOverflow::Hidden
    }

    #[inline]
    pub fn overflow(&self) -> BodyOverflow {
        self.overflow
    }

    #[inline]
    pub fn last_writer(&self) -> Option<LockOwner> {
        self.last_writer
    }
}

/// One-shot guard for the hero start.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeroLatch {
    fired: bool,
}

impl HeroLatch {
    /// Returns true exactly once.
    pub fn try_fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Inquiry dialog visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
}

/// Shared page state.
///
/// Write ownership:
/// - `scroll_lock`: splash sequencer and modal (last writer wins)
/// - `hero`: splash driver only, through `start_hero`
/// - `visualizer_active`: set by hero start; read by the redraw loop
/// - `modal`: modal open/close only, through `open_modal`/`close_modal`
#[derive(Clone, Debug, Default)]
pub struct PageContext {
    pub scroll_lock: ScrollLock,
    pub hero: HeroLatch,
    pub visualizer_active: bool,
    pub modal: ModalState,
}

impl PageContext {
    /// Returns true when the caller should run the hero side effects.
    pub fn start_hero(&mut self) -> bool {
        if !self.hero.try_fire() {
            return false;
        }
        self.visualizer_active = true;
        true
    }

    /// Open the modal; returns the overflow value to apply to the body.
    pub fn open_modal(&mut self) -> BodyOverflow {
        self.modal.open = true;
        self.scroll_lock.lock(LockOwner::Modal)
    }

    pub fn close_modal(&mut self) -> BodyOverflow {
        self.modal.open = false;
        self.scroll_lock.unlock(LockOwner::Modal)
    }
}
