use yew::prelude::*;

use crate::components::city_clock::CityClock;
use crate::components::code_entry::CodeEntryForm;
use crate::components::notice::NoticeDialog;
use crate::components::sparkle::SparkleBurst;
use crate::components::ticker::Ticker;
use crate::components::waitlist_signup::WaitlistSignup;
use crate::hooks::{use_notices, use_sparkle_burst};

#[function_component(MobileWaitlist)]
pub fn mobile_waitlist() -> Html {
    let notices = use_notices();
    let sparkles = use_sparkle_burst();
    let on_close = notices.on_dismiss();

    html! {
        <div class="mobile-waitlist">
            <style>{MOBILE_STYLES}</style>
            <Ticker src="/sub-header-waitlist-1.svg" />

            <img class="mobile-logo" src="/logo-long.png" alt="Logo long" />

            <div class="mobile-hero">
                <div class="mobile-hero-top">
                    <span class="club-badge">{"SOON IN"}<br />{"THE CLUB!"}</span>
                    <CityClock compact={true} />
                </div>
                <h1>
                    {"THE ULTIMATE CURATION OF DURABLE AND TECH-ORIENTED CONSUMER PRODUCTS FOR THE MOST DEMANDING INDIVIDUALS."}
                </h1>
            </div>

            <div class="mobile-forms">
                <CodeEntryForm on_verdict={notices.on_code_verdict()} on_press={sparkles.on_press()} compact={true} />
                <div class="mobile-or"><span class="club-badge">{"OR"}</span></div>
                <WaitlistSignup on_registered={notices.on_registered()} on_press={sparkles.on_press()} compact={true} />
            </div>

            <Ticker src="/sub-header-waitlist.png" bottom={true} />

            { for notices.visible().into_iter().map(|kind| html! {
                <NoticeDialog key={kind.title().to_string()} {kind} on_close={on_close.clone()} />
            }) }
            {
                if let Some(origin) = sparkles.current() {
                    html! { <SparkleBurst key={origin.id.to_string()} x={origin.x} y={origin.y} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

const MOBILE_STYLES: &str = r#"
    .mobile-waitlist {
        width: 100%;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        overflow-x: hidden;
    }
    .mobile-logo {
        width: calc(100% - 42px);
        max-width: 333px;
        margin: 18px auto;
    }
    .mobile-hero {
        border-top: 1px solid var(--club-red);
        border-bottom: 1px solid var(--club-red);
        padding: 20px;
    }
    .mobile-hero-top {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
    }
    .mobile-hero .club-badge {
        font-size: 12px;
        line-height: 12px;
    }
    .mobile-hero h1 {
        font-family: 'DM Sans', Helvetica, sans-serif;
        font-weight: normal;
        font-size: 24px;
        line-height: 26px;
        margin: 24px 0 0 0;
    }
    .mobile-forms {
        flex: 1;
        display: flex;
        flex-direction: column;
        gap: 24px;
        padding: 24px 20px;
    }
    .mobile-or {
        display: flex;
        justify-content: center;
    }
"#;
