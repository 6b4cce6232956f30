use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::cursor::CustomCursor;
use crate::config;
use crate::pages::desktop::DesktopWaitlist;
use crate::pages::mobile::MobileWaitlist;

/// Root view. Each layout owns its own forms, clock and dialogs.
#[function_component(Frame)]
pub fn frame() -> Html {
    let (width, _) = use_window_size();
    let mobile = width < config::MOBILE_BREAKPOINT_PX;

    html! {
        <div class="club-frame">
            <style>{SHARED_STYLES}</style>
            <CustomCursor />
            {
                if mobile {
                    html! { <MobileWaitlist /> }
                } else {
                    html! { <DesktopWaitlist /> }
                }
            }
        </div>
    }
}

const SHARED_STYLES: &str = r#"
    :root {
        --club-red: #fe240b;
        --club-red-dark: rgb(204, 29, 9);
    }
    body {
        margin: 0;
        background: #fff;
        color: var(--club-red);
        font-family: 'DM Mono', Helvetica, monospace;
    }
    body::after {
        content: '';
        position: fixed;
        top: 0;
        left: 0;
        width: 12px;
        height: 12px;
        border-radius: 50%;
        background: var(--club-red);
        pointer-events: none;
        transform: translate(calc(var(--cursor-x, -100px) - 50%), calc(var(--cursor-y, -100px) - 50%));
        transition: transform 0.08s linear;
        z-index: 10000;
    }
    .section-label {
        font-size: 14px;
        margin-bottom: 16px;
    }
    .club-button {
        background: var(--club-red);
        color: #fff;
        border: none;
        border-radius: 5px;
        padding: 10px;
        font-family: inherit;
        font-size: 14px;
        letter-spacing: 0.56px;
        cursor: pointer;
        transition: background-color 0.2s;
    }
    .club-button:hover {
        background: var(--club-red-dark);
    }
    .club-button:disabled {
        opacity: 0.5;
        cursor: default;
    }
    .code-slots {
        display: flex;
        gap: 8px;
        margin-bottom: 18px;
    }
    .code-slot {
        width: 35px;
        height: 59px;
        display: flex;
        align-items: center;
        justify-content: center;
        border: 1px solid var(--club-red);
        border-radius: 5px;
    }
    .code-slot input {
        width: 24px;
        height: 32px;
        background: transparent;
        border: none;
        outline: none;
        text-align: center;
        color: var(--club-red);
        font-family: inherit;
        font-size: 24px;
    }
    .code-entry.compact .code-slot {
        width: 28px;
        height: 44px;
    }
    .code-entry.compact .code-slot input {
        font-size: 18px;
    }
    .email-field input {
        width: 100%;
        border: none;
        border-bottom: 1px solid var(--club-red);
        padding: 8px 0;
        font-family: inherit;
        font-size: 14px;
        letter-spacing: 0.56px;
        color: var(--club-red);
        outline: none;
        background: transparent;
    }
    .email-field input::placeholder {
        color: var(--club-red);
    }
    .email-error {
        margin-top: 8px;
        font-size: 14px;
    }
    .send-button {
        margin-top: 24px;
        width: 62px;
    }
    .city-clock {
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        font-size: 14px;
    }
    .city-clock.compact {
        font-size: 12px;
    }
    .city-select {
        border: none;
        background: transparent;
        color: var(--club-red);
        font-family: inherit;
        font-size: inherit;
        padding: 0;
        cursor: pointer;
    }
    .city-time {
        margin-top: 4px;
    }
    .club-badge {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        border: 1px solid var(--club-red);
        border-radius: 50%;
        padding: 6px 20px;
        font-weight: 500;
        font-size: 14px;
        text-align: center;
        line-height: 14px;
        animation: badge-wobble 3s ease-in-out infinite;
    }
    @keyframes badge-wobble {
        0%, 100% { transform: rotate(-5deg); }
        50% { transform: rotate(5deg); }
    }
    .ticker {
        width: 100%;
        height: 30px;
        overflow: hidden;
        border-color: var(--club-red);
        border-style: solid;
        border-width: 0;
    }
    .ticker-top {
        border-bottom-width: 1px;
    }
    .ticker-bottom {
        border-top-width: 1px;
    }
    .ticker-track {
        display: flex;
        width: 200%;
        animation: ticker-slide 20s linear infinite;
    }
    .ticker-track img {
        width: 50%;
        height: 30px;
        object-fit: cover;
    }
    @keyframes ticker-slide {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
    @keyframes sparkle-fade-scale {
        0% { opacity: 0; }
        50% { opacity: 1; }
        100% { opacity: 0; }
    }
    .notice-overlay {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.4);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 50;
    }
    .notice-dialog {
        position: relative;
        background: #fff;
        border: 1px solid var(--club-red);
        padding: 32px 48px;
        max-width: 90vw;
    }
    .notice-title {
        margin: 0;
        font-weight: normal;
        font-size: 16px;
        text-align: center;
    }
    .notice-close {
        position: absolute;
        top: 6px;
        right: 10px;
        border: none;
        background: transparent;
        color: var(--club-red);
        font-size: 18px;
        cursor: pointer;
    }
"#;
