//! Transient result dialogs. Each kind is its own hidden/visible machine;
//! nothing stops several being visible at once.

use crate::config;
use crate::controllers::code::CodeVerdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    EmailSent,
    CodeAccepted,
    CodeRejected,
}

impl NoticeKind {
    pub const ALL: [NoticeKind; 3] = [NoticeKind::EmailSent, NoticeKind::CodeAccepted, NoticeKind::CodeRejected];

    pub fn title(&self) -> &'static str {
        match self {
            NoticeKind::EmailSent => "Thank you for submitting your email!",
            NoticeKind::CodeAccepted => "Invitation code is correct!",
            NoticeKind::CodeRejected => "Incorrect code, please try again.",
        }
    }

    fn index(&self) -> usize {
        match self {
            NoticeKind::EmailSent => 0,
            NoticeKind::CodeAccepted => 1,
            NoticeKind::CodeRejected => 2,
        }
    }
}

impl From<&CodeVerdict> for NoticeKind {
    fn from(verdict: &CodeVerdict) -> Self {
        match verdict {
            CodeVerdict::Accepted(_) => NoticeKind::CodeAccepted,
            CodeVerdict::Incomplete => NoticeKind::CodeRejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Notice {
    visible: bool,
    // Bumped when a notice appears and when it is dismissed, so an old
    // auto-hide can't touch a later showing.
    generation: u64,
}

/// Timer the view must arm when a notice appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHide {
    pub generation: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notices {
    notices: [Notice; 3],
}

impl Notices {
    /// Makes `kind` visible. Only the hidden -> visible transition arms an
    /// auto-hide; showing an already visible notice keeps its original deadline.
    pub fn show(&mut self, kind: NoticeKind) -> Option<AutoHide> {
        let notice = &mut self.notices[kind.index()];
        if notice.visible {
            return None;
        }
        notice.visible = true;
        notice.generation += 1;
        Some(AutoHide { generation: notice.generation, delay_ms: config::NOTICE_TIMEOUT_MS })
    }

    pub fn dismiss(&mut self, kind: NoticeKind) {
        let notice = &mut self.notices[kind.index()];
        if notice.visible {
            notice.visible = false;
            notice.generation += 1;
        }
    }

    /// Auto-hide. Returns whether anything changed.
    pub fn expire(&mut self, kind: NoticeKind, generation: u64) -> bool {
        let notice = &mut self.notices[kind.index()];
        if notice.visible && notice.generation == generation {
            notice.visible = false;
            return true;
        }
        false
    }

    pub fn is_visible(&self, kind: NoticeKind) -> bool {
        self.notices[kind.index()].visible
    }

    pub fn visible(&self) -> impl Iterator<Item = NoticeKind> + '_ {
        NoticeKind::ALL.into_iter().filter(move |kind| self.is_visible(*kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_picks_dialog() {
        assert_eq!(NoticeKind::from(&CodeVerdict::Accepted("ABC123".into())), NoticeKind::CodeAccepted);
        assert_eq!(NoticeKind::from(&CodeVerdict::Incomplete), NoticeKind::CodeRejected);
    }

    #[test]
    fn test_all_hidden_initially() {
        let notices = Notices::default();
        assert_eq!(notices.visible().count(), 0);
    }

    fn shown(notices: &mut Notices, kind: NoticeKind) -> u64 {
        notices.show(kind).expect("hidden notice arms an auto-hide").generation
    }

    #[test]
    fn test_auto_hide_after_ten_seconds() {
        let mut notices = Notices::default();
        let auto_hide = notices.show(NoticeKind::EmailSent).unwrap();
        assert_eq!(auto_hide.delay_ms, 10_000);
        assert_eq!(auto_hide.generation, 1);
    }

    #[test]
    fn test_expiry_hides_current_showing() {
        let mut notices = Notices::default();
        let generation = shown(&mut notices, NoticeKind::CodeAccepted);
        assert!(notices.is_visible(NoticeKind::CodeAccepted));

        assert!(notices.expire(NoticeKind::CodeAccepted, generation));
        assert!(!notices.is_visible(NoticeKind::CodeAccepted));
    }

    #[test]
    fn test_dismissal_beats_the_timeout() {
        let mut notices = Notices::default();
        let generation = shown(&mut notices, NoticeKind::EmailSent);
        notices.dismiss(NoticeKind::EmailSent);
        assert!(!notices.is_visible(NoticeKind::EmailSent));

        assert!(!notices.expire(NoticeKind::EmailSent, generation));
        assert!(!notices.is_visible(NoticeKind::EmailSent));
    }

    #[test]
    fn test_repeat_trigger_keeps_first_deadline() {
        let mut notices = Notices::default();
        let first = shown(&mut notices, NoticeKind::CodeRejected);
        assert_eq!(notices.show(NoticeKind::CodeRejected), None);
        assert!(notices.is_visible(NoticeKind::CodeRejected));

        assert!(notices.expire(NoticeKind::CodeRejected, first));
        assert!(!notices.is_visible(NoticeKind::CodeRejected));
    }

    #[test]
    fn test_timeout_after_dismiss_and_reshow() {
        let mut notices = Notices::default();
        let first = shown(&mut notices, NoticeKind::EmailSent);
        notices.dismiss(NoticeKind::EmailSent);
        let second = shown(&mut notices, NoticeKind::EmailSent);

        assert!(!notices.expire(NoticeKind::EmailSent, first));
        assert!(notices.is_visible(NoticeKind::EmailSent));
        assert!(notices.expire(NoticeKind::EmailSent, second));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut notices = Notices::default();
        notices.show(NoticeKind::EmailSent);
        let rejected = shown(&mut notices, NoticeKind::CodeRejected);

        assert_eq!(notices.visible().collect::<Vec<_>>(), vec![NoticeKind::EmailSent, NoticeKind::CodeRejected]);

        notices.expire(NoticeKind::CodeRejected, rejected);
        notices.dismiss(NoticeKind::CodeAccepted);
        assert_eq!(notices.visible().collect::<Vec<_>>(), vec![NoticeKind::EmailSent]);
    }
}
