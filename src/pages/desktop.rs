use yew::prelude::*;

use crate::components::city_clock::CityClock;
use crate::components::code_entry::CodeEntryForm;
use crate::components::notice::NoticeDialog;
use crate::components::sparkle::SparkleBurst;
use crate::components::ticker::Ticker;
use crate::components::waitlist_signup::WaitlistSignup;
use crate::hooks::{use_notices, use_sparkle_burst};

#[function_component(DesktopWaitlist)]
pub fn desktop_waitlist() -> Html {
    let notices = use_notices();
    let sparkles = use_sparkle_burst();
    let on_close = notices.on_dismiss();

    html! {
        <div class="desktop-waitlist">
            <style>{DESKTOP_STYLES}</style>
            <Ticker src="/sub-header-waitlist.png" />

            <div class="desktop-body">
                <div class="desktop-logo">
                    <img src="/logo-big.svg" alt="Life Long Club Logo" />
                </div>

                <div class="desktop-main">
                    <div class="desktop-hero">
                        <div class="desktop-hero-text">
                            <span class="club-badge">{"SOON IN"}<br />{"THE CLUB!"}</span>
                            <h1>
                                {"THE ULTIMATE CURATION OF DURABLE AND TECH-ORIENTED CONSUMER PRODUCTS FOR THE MOST DEMANDING INDIVIDUALS."}
                            </h1>
                        </div>
                        <CityClock />
                    </div>

                    <div class="desktop-forms">
                        <CodeEntryForm on_verdict={notices.on_code_verdict()} on_press={sparkles.on_press()} />
                        <div class="desktop-or">
                            <span class="club-badge">{"OR"}</span>
                        </div>
                        <WaitlistSignup on_registered={notices.on_registered()} on_press={sparkles.on_press()} />
                    </div>

                    <div class="desktop-members">
                        <span class="club-badge">{"+1200 CLUB"}<br />{"MEMBERS"}</span>
                    </div>
                </div>
            </div>

            <Ticker src="/sub-header-waitlist-1.svg" bottom={true} />

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

const DESKTOP_STYLES: &str = r#"
    .desktop-waitlist {
        display: flex;
        flex-direction: column;
        width: 100%;
        height: 100vh;
        overflow: hidden;
    }
    .desktop-body {
        flex: 1;
        display: flex;
        min-height: 0;
    }
    .desktop-logo {
        width: 559px;
        border-right: 1px solid var(--club-red);
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .desktop-logo img {
        width: 417px;
        height: 500px;
    }
    .desktop-main {
        flex: 1;
        display: flex;
        flex-direction: column;
        position: relative;
    }
    .desktop-hero {
        display: flex;
        justify-content: space-between;
        padding: 64px 80px 48px 80px;
    }
    .desktop-hero-text {
        max-width: 602px;
    }
    .desktop-hero h1 {
        font-family: 'DM Sans', Helvetica, sans-serif;
        font-weight: normal;
        font-size: 40px;
        line-height: 42px;
        margin: 24px 0 0 0;
    }
    .desktop-forms {
        display: flex;
        height: 235px;
        border-top: 1px solid var(--club-red);
        border-bottom: 1px solid var(--club-red);
    }
    .desktop-forms .code-entry {
        padding: 60px 80px;
    }
    .desktop-forms .waitlist-signup {
        flex: 1;
        padding: 60px 80px 0 40px;
    }
    .desktop-or {
        display: flex;
        align-items: center;
        border-left: 1px solid var(--club-red);
        margin-left: 24px;
    }
    .desktop-or .club-badge {
        margin-left: -24px;
        background: #fff;
        padding: 14px 13px;
    }
    .desktop-members {
        position: absolute;
        right: 80px;
        bottom: 24px;
    }
"#;
