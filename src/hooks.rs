//! Glue between the controllers and Yew. Controllers live in `Rc<RefCell<_>>`
//! so event handlers always see the latest state; a forced update re-renders.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::HttpWaitlistClient;
use crate::config;
use crate::controllers::clock::City;
use crate::controllers::code::{CodeEntry, CodeVerdict, CODE_LENGTH};
use crate::controllers::email::{self, SubmitOutcome, WaitlistForm};
use crate::controllers::notices::{NoticeKind, Notices};

#[derive(Clone)]
pub struct CodeEntryHandle {
    entry: Rc<RefCell<CodeEntry>>,
    inputs: UseStateHandle<Vec<NodeRef>>,
    update: UseForceUpdateHandle,
}

impl CodeEntryHandle {
    pub fn value(&self, index: usize) -> String {
        self.entry.borrow().slot_value(index)
    }

    pub fn node(&self, index: usize) -> NodeRef {
        self.inputs.get(index).cloned().unwrap_or_default()
    }

    /// Returns false when the input was refused and the slot kept its value.
    pub fn input(&self, index: usize, value: &str) -> bool {
        let result = self.entry.borrow_mut().input(index, value);
        match result {
            Ok(next) => {
                self.update.force_update();
                if let Some(next) = next {
                    self.focus(next);
                }
                true
            }
            Err(_) => false,
        }
    }

    pub fn backspace(&self, index: usize) {
        let target = self.entry.borrow().backspace(index);
        if let Some(target) = target {
            self.focus(target);
        }
    }

    pub fn submit(&self) -> CodeVerdict {
        let verdict = self.entry.borrow_mut().submit();
        match &verdict {
            CodeVerdict::Accepted(code) => info!("Submitted invitation code: {}", code),
            CodeVerdict::Incomplete => info!("Submitted incomplete invitation code"),
        }
        self.update.force_update();
        verdict
    }

    fn focus(&self, index: usize) {
        if let Some(input) = self.node(index).cast::<HtmlInputElement>() {
            let _ = input.focus();
        }
    }
}

#[hook]
pub fn use_code_entry() -> CodeEntryHandle {
    let entry = use_mut_ref(CodeEntry::default);
    let inputs = use_state(|| (0..CODE_LENGTH).map(|_| NodeRef::default()).collect::<Vec<_>>());
    let update = use_force_update();
    CodeEntryHandle { entry, inputs, update }
}

#[derive(Clone)]
pub struct WaitlistHandle {
    form: Rc<RefCell<WaitlistForm>>,
    update: UseForceUpdateHandle,
}

impl WaitlistHandle {
    pub fn email(&self) -> String {
        self.form.borrow().email().to_string()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.form.borrow().error().map(|e| e.user_message())
    }

    pub fn is_submitting(&self) -> bool {
        self.form.borrow().is_submitting()
    }

    pub fn set_email(&self, email: String) {
        self.form.borrow_mut().set_email(email);
        self.update.force_update();
    }

    pub fn submit(&self, on_registered: Callback<()>) {
        let form = self.form.clone();
        let update = self.update.clone();
        spawn_local(async move {
            let client = HttpWaitlistClient::default();
            match email::submit(&client, &form, || update.force_update()).await {
                SubmitOutcome::Registered => on_registered.emit(()),
                SubmitOutcome::Failed(e) => warn!("Waitlist signup failed: {}", e),
                SubmitOutcome::Invalid | SubmitOutcome::Busy => {}
            }
        });
    }
}

#[hook]
pub fn use_waitlist_form() -> WaitlistHandle {
    let form = use_mut_ref(WaitlistForm::default);
    let update = use_force_update();
    WaitlistHandle { form, update }
}

/// Current time in `city`, refreshed every tick. The interval is rebuilt when
/// the city changes and dropped when the view goes away.
#[hook]
pub fn use_clock(city: City) -> String {
    let time = use_state(|| city.time_at(Utc::now()));
    {
        let time = time.clone();
        use_effect_with_deps(
            move |city| {
                let city = *city;
                time.set(city.time_at(Utc::now()));
                let interval = Interval::new(config::CLOCK_TICK_MS, move || {
                    time.set(city.time_at(Utc::now()));
                });
                move || drop(interval)
            },
            city,
        );
    }
    (*time).clone()
}

#[derive(Clone)]
pub struct NoticesHandle {
    notices: Rc<RefCell<Notices>>,
    timers: Rc<RefCell<HashMap<NoticeKind, Timeout>>>,
    update: UseForceUpdateHandle,
}

impl NoticesHandle {
    pub fn show(&self, kind: NoticeKind) {
        let auto_hide = self.notices.borrow_mut().show(kind);
        if let Some(auto_hide) = auto_hide {
            let notices = self.notices.clone();
            let update = self.update.clone();
            let timeout = Timeout::new(auto_hide.delay_ms, move || {
                if notices.borrow_mut().expire(kind, auto_hide.generation) {
                    update.force_update();
                }
            });
            self.timers.borrow_mut().insert(kind, timeout);
        }
        self.update.force_update();
    }

    pub fn dismiss(&self, kind: NoticeKind) {
        self.timers.borrow_mut().remove(&kind);
        self.notices.borrow_mut().dismiss(kind);
        self.update.force_update();
    }

    pub fn visible(&self) -> Vec<NoticeKind> {
        self.notices.borrow().visible().collect()
    }

    pub fn on_code_verdict(&self) -> Callback<CodeVerdict> {
        let handle = self.clone();
        Callback::from(move |verdict: CodeVerdict| handle.show(NoticeKind::from(&verdict)))
    }

    pub fn on_registered(&self) -> Callback<()> {
        let handle = self.clone();
        Callback::from(move |_| handle.show(NoticeKind::EmailSent))
    }

    pub fn on_dismiss(&self) -> Callback<NoticeKind> {
        let handle = self.clone();
        Callback::from(move |kind| handle.dismiss(kind))
    }
}

#[hook]
pub fn use_notices() -> NoticesHandle {
    let notices = use_mut_ref(Notices::default);
    let timers = use_mut_ref(HashMap::<NoticeKind, Timeout>::new);
    let update = use_force_update();
    {
        let timers = timers.clone();
        use_effect_with_deps(move |_| move || timers.borrow_mut().clear(), ());
    }
    NoticesHandle { notices, timers, update }
}

#[derive(Clone, Copy, PartialEq)]
pub struct BurstOrigin {
    pub x: f64,
    pub y: f64,
    pub id: u64,
}

#[derive(Clone)]
pub struct SparkleHandle {
    burst: UseStateHandle<Option<BurstOrigin>>,
    latest: Rc<RefCell<u64>>,
}

impl SparkleHandle {
    pub fn current(&self) -> Option<BurstOrigin> {
        *self.burst
    }

    pub fn trigger(&self, e: &MouseEvent) {
        let id = {
            let mut latest = self.latest.borrow_mut();
            *latest += 1;
            *latest
        };
        self.burst.set(Some(BurstOrigin { x: e.client_x() as f64, y: e.client_y() as f64, id }));

        let burst = self.burst.clone();
        let latest = self.latest.clone();
        spawn_local(async move {
            TimeoutFuture::new(config::SPARKLE_LIFETIME_MS).await;
            if *latest.borrow() == id {
                burst.set(None);
            }
        });
    }

    pub fn on_press(&self) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |e: MouseEvent| handle.trigger(&e))
    }
}

#[hook]
pub fn use_sparkle_burst() -> SparkleHandle {
    let burst = use_state(|| None::<BurstOrigin>);
    let latest = use_mut_ref(|| 0u64);
    SparkleHandle { burst, latest }
}
